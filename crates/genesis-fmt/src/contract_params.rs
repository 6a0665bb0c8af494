//! RLP encoded constructor parameters for the genesis contracts.

use genesis_rlp::{decode_item, decode_list, encode_list, list_len};

use crate::error::FormatError;
use crate::members::MemberList;
use crate::validator::{ValidatorRecord, ValidatorSet};

/// Encodes members as a flat list of 20-byte strings.
pub fn encode_address_list(members: &MemberList) -> Vec<u8> {
    let addrs = members.as_slice();
    let mut buf = Vec::with_capacity(list_len(addrs));
    encode_list(addrs, &mut buf);
    buf
}

/// Encodes validators as a list of `[consensus_addr, fee_addr]` pairs.
pub fn encode_validator_pairs(set: &ValidatorSet) -> Vec<u8> {
    let records = set.records();
    let mut buf = Vec::with_capacity(list_len(records));
    encode_list(records, &mut buf);
    buf
}

/// Decodes a member list produced by [`encode_address_list`].
pub fn decode_address_list(buf: &[u8]) -> Result<MemberList, FormatError> {
    let item = decode_item(buf)?;
    Ok(MemberList::new(decode_list(&item)?))
}

/// Decodes validator pairs produced by [`encode_validator_pairs`].
///
/// Returns plain records, an empty list decodes fine even though it couldn't
/// have come from a [`ValidatorSet`].
pub fn decode_validator_pairs(buf: &[u8]) -> Result<Vec<ValidatorRecord>, FormatError> {
    let item = decode_item(buf)?;
    Ok(decode_list(&item)?)
}
