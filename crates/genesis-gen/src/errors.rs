use std::io;
use std::path::PathBuf;

use genesis_fmt::{FormatError, GenesisError};
use thiserror::Error;

/// Errors from a generation run.  All of them abort the run.
#[derive(Debug, Error)]
pub(crate) enum GenError {
    #[error("reading {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("writing {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("parsing config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("unknown network {0:?}")]
    UnknownNetwork(String),

    #[error("{field}: invalid hex: {source}")]
    BadHex {
        field: &'static str,
        source: hex::FromHexError,
    },

    #[error("serializing artifacts: {0}")]
    Serialize(serde_json::Error),

    #[error("output: {0}")]
    Output(#[from] io::Error),

    #[error(transparent)]
    Genesis(#[from] GenesisError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Wrapper result type.
pub(crate) type GenResult<T> = Result<T, GenError>;
