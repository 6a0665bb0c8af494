use std::fmt;

use genesis_rlp::RlpError;
use thiserror::Error;

/// Errors for a single malformed value, textual or encoded.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FormatError {
    /// Address text had the wrong number of hex digits after the prefix.
    #[error("expected {expected} hex digits, found {found} in {input:?}")]
    BadLength {
        /// The offending input, as given.
        input: String,
        /// Required digit count.
        expected: usize,
        /// Digits found after stripping the prefix.
        found: usize,
    },

    /// Address text contained something other than a hex digit.
    #[error("invalid character {ch:?} at position {index} in {input:?}")]
    BadCharacter {
        /// The offending input, as given.
        input: String,
        /// The first invalid character.
        ch: char,
        /// Byte position of `ch` in `input`.
        index: usize,
    },

    /// Balance was not a decimal integer that fits in 128 bits.
    #[error("invalid balance {input:?}")]
    BadBalance {
        /// The offending input, as given.
        input: String,
    },

    /// Extra data blob was too short to hold the reserved regions.
    #[error("extra data too short ({len} bytes, need at least {min})")]
    ExtraDataTooShort {
        /// Blob length.
        len: usize,
        /// Minimum length.
        min: usize,
    },

    /// Address region of an extra data blob was not a whole number of
    /// addresses.
    #[error("extra data address region of {len} bytes is not a multiple of 20")]
    ExtraDataMisaligned {
        /// Length of the address region.
        len: usize,
    },

    /// Reserved region of an extra data blob had a nonzero byte.
    #[error("extra data {region} has nonzero byte at {at}")]
    ExtraDataReserved {
        /// Which region, `vanity` or `seal`.
        region: &'static str,
        /// Offset of the byte within the blob.
        at: usize,
    },

    /// Encoded parameter blob was malformed or had the wrong shape.
    #[error("rlp: {0}")]
    Rlp(#[from] RlpError),
}

/// Field of a validator record, for error reporting.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RecordField {
    /// The consensus address.
    ConsensusAddr,

    /// The fee address.
    FeeAddr,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ConsensusAddr => "consensusAddr",
            Self::FeeAddr => "feeAddr",
        })
    }
}

/// Errors from building genesis inputs out of configuration.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum GenesisError {
    /// No validators were supplied.
    #[error("validator set is empty")]
    EmptySet,

    /// A validator record had a malformed address.
    #[error("validator {index} {field}: {source}")]
    InvalidValidator {
        /// Position of the record in the input.
        index: usize,
        /// Which address of the record.
        field: RecordField,
        /// What was wrong with it.
        source: FormatError,
    },

    /// A member list entry had a malformed address.
    #[error("member {index}: {source}")]
    InvalidMember {
        /// Position of the entry in the input.
        index: usize,
        /// What was wrong with it.
        source: FormatError,
    },

    /// An initial holder had a malformed address or balance.
    #[error("holder {index}: {source}")]
    InvalidHolder {
        /// Position of the entry in the input.
        index: usize,
        /// What was wrong with it.
        source: FormatError,
    },

    /// Malformed value outside of any list.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl GenesisError {
    /// Returns if this is a format error, as opposed to an empty set.
    pub fn is_format(&self) -> bool {
        !matches!(self, Self::EmptySet)
    }
}

/// Wrapper result type.
pub type GenesisResult<T> = Result<T, GenesisError>;
