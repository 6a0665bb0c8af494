//! Consensus extra data carrying the initial validator set.
//!
//! ```text
//! [0..32]              vanity, zero
//! [32..32 + 20 * n]    consensus address of each validator, in set order
//! [32 + 20 * n..]      seal, 65 zero bytes, filled in later by a signer
//! ```

use tracing::*;

use crate::address::{ADDRESS_LEN, Address};
use crate::error::FormatError;
use crate::validator::ValidatorSet;

/// Length of the leading vanity region.
pub const EXTRA_VANITY_LEN: usize = 32;

/// Length of the trailing seal region.
pub const EXTRA_SEAL_LEN: usize = 65;

/// Returns the extra data length for `n` validators.
pub const fn extra_data_len(n: usize) -> usize {
    EXTRA_VANITY_LEN + ADDRESS_LEN * n + EXTRA_SEAL_LEN
}

/// Builds the extra data blob for a validator set.
///
/// Only consensus addresses are embedded, fee addresses don't appear.
pub fn build_extra_data(set: &ValidatorSet) -> Vec<u8> {
    let mut buf = Vec::with_capacity(extra_data_len(set.len()));
    buf.resize(EXTRA_VANITY_LEN, 0);
    for addr in set.consensus_addrs() {
        buf.extend_from_slice(addr.as_bytes());
    }
    buf.resize(buf.len() + EXTRA_SEAL_LEN, 0);

    debug_assert_eq!(buf.len(), extra_data_len(set.len()));
    debug!(validators = set.len(), len = buf.len(), "built extra data");
    buf
}

/// Extracts the consensus addresses from an extra data blob.
///
/// Checks that the reserved regions are still zero, so it only accepts blobs
/// that haven't been sealed yet.
pub fn parse_extra_data(buf: &[u8]) -> Result<Vec<Address>, FormatError> {
    let min = extra_data_len(0);
    if buf.len() < min {
        return Err(FormatError::ExtraDataTooShort {
            len: buf.len(),
            min,
        });
    }

    let seal_start = buf.len() - EXTRA_SEAL_LEN;
    let addrs = &buf[EXTRA_VANITY_LEN..seal_start];
    if addrs.len() % ADDRESS_LEN != 0 {
        return Err(FormatError::ExtraDataMisaligned { len: addrs.len() });
    }

    check_zero(&buf[..EXTRA_VANITY_LEN], 0, "vanity")?;
    check_zero(&buf[seal_start..], seal_start, "seal")?;

    addrs
        .chunks_exact(ADDRESS_LEN)
        .map(Address::try_from)
        .collect()
}

fn check_zero(region: &[u8], offset: usize, name: &'static str) -> Result<(), FormatError> {
    match region.iter().position(|b| *b != 0) {
        Some(i) => Err(FormatError::ExtraDataReserved {
            region: name,
            at: offset + i,
        }),
        None => Ok(()),
    }
}
