//! Subcommand implementations.  Results go to `out`, logs to stderr.

use std::fs;
use std::io::Write;
use std::path::Path;

use genesis_fmt::{ValidatorSet, parse_extra_data};
use tracing::*;

use crate::artifacts::{Artifacts, encode_members, extra_data_hex, validator_set_hex};
use crate::config::GenesisConfig;
use crate::errors::{GenError, GenResult};

/// Builds every artifact and writes them as JSON, to `output` if given.
///
/// Nothing is written unless every artifact was built.
pub(crate) fn generate(
    config: &Path,
    output: Option<&Path>,
    out: &mut impl Write,
) -> GenResult<()> {
    let config = GenesisConfig::load(config)?;
    let artifacts = Artifacts::build(&config)?;
    let mut json = serde_json::to_string_pretty(&artifacts).map_err(GenError::Serialize)?;
    json.push('\n');

    match output {
        Some(path) => {
            fs::write(path, &json).map_err(|source| GenError::Write {
                path: path.to_owned(),
                source,
            })?;
            info!(path = %path.display(), "wrote artifacts");
        }
        None => out.write_all(json.as_bytes())?,
    }
    Ok(())
}

/// Prints the consensus extra data.
pub(crate) fn extra_data(config: &Path, out: &mut impl Write) -> GenResult<()> {
    let set = load_set(config)?;
    writeln!(out, "{}", extra_data_hex(&set))?;
    Ok(())
}

/// Prints the validator set contract parameter.
pub(crate) fn validator_set(config: &Path, out: &mut impl Write) -> GenResult<()> {
    let set = load_set(config)?;
    writeln!(out, "{}", validator_set_hex(&set))?;
    Ok(())
}

/// Prints the member list contract parameter for a network.
pub(crate) fn members(config: &Path, network: Option<&str>, out: &mut impl Write) -> GenResult<()> {
    let config = GenesisConfig::load(config)?;
    let encoded = encode_members(config.members_for(network)?)?;
    writeln!(out, "{encoded}")?;
    Ok(())
}

/// Prints the consensus addresses in an extra data blob, one per line.
pub(crate) fn inspect_extra_data(input: &str, out: &mut impl Write) -> GenResult<()> {
    let input = input.trim();
    let digits = input.strip_prefix("0x").unwrap_or(input);
    let buf = hex::decode(digits).map_err(|source| GenError::BadHex {
        field: "extraData",
        source,
    })?;

    let addrs = parse_extra_data(&buf)?;
    debug!(validators = addrs.len(), "parsed extra data");
    for addr in addrs {
        writeln!(out, "{addr:#x}")?;
    }
    Ok(())
}

fn load_set(config: &Path) -> GenResult<ValidatorSet> {
    let config = GenesisConfig::load(config)?;
    Ok(ValidatorSet::from_raw(&config.validators)?)
}
