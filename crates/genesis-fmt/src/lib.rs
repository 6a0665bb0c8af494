//! Genesis artifacts derived from the initial validator set.
//!
//! Turns address strings from configuration into validated, ordered types and
//! produces the byte blobs embedded at chain bootstrap: the consensus extra
//! data and the RLP encoded constructor parameters of the genesis contracts.

#[cfg(feature = "arbitrary")]
mod arbitrary;
mod address;
mod contract_params;
mod error;
mod extra_data;
mod holders;
mod members;
#[cfg(feature = "serde")]
mod serde;
mod validator;

pub use address::{ADDRESS_HEX_LEN, ADDRESS_LEN, Address};
pub use contract_params::{
    decode_address_list, decode_validator_pairs, encode_address_list, encode_validator_pairs,
};
pub use error::{FormatError, GenesisError, GenesisResult, RecordField};
pub use extra_data::{
    EXTRA_SEAL_LEN, EXTRA_VANITY_LEN, build_extra_data, extra_data_len, parse_extra_data,
};
pub use holders::{InitHolder, parse_holders};
pub use members::MemberList;
pub use validator::{RawValidatorRecord, ValidatorRecord, ValidatorSet};

// Test-only dependencies used by the serde tests when the `serde` feature is
// disabled, and by the property tests under `tests/`.
#[cfg(all(test, not(feature = "serde")))]
use {bincode as _, serde_json as _};
#[cfg(test)]
use proptest as _;
