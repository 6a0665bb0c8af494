//! Validator records and the ordered validator set.
//!
//! Order is significant everywhere: it decides each validator's on-chain
//! index and the byte layout of every artifact derived from the set.  Nothing
//! here sorts or deduplicates.

use std::collections::HashMap;

use genesis_rlp::impl_list_struct;
use tracing::*;

use crate::address::Address;
use crate::error::{GenesisError, GenesisResult, RecordField};

/// Textual validator record, as written in configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RawValidatorRecord {
    /// Hex consensus address.
    pub consensus_addr: String,

    /// Hex fee address.
    pub fee_addr: String,
}

impl RawValidatorRecord {
    /// Constructs a new instance.
    pub fn new(consensus_addr: impl Into<String>, fee_addr: impl Into<String>) -> Self {
        Self {
            consensus_addr: consensus_addr.into(),
            fee_addr: fee_addr.into(),
        }
    }

    /// Parses both addresses, attributing failures to record `index`.
    pub fn parse(&self, index: usize) -> GenesisResult<ValidatorRecord> {
        let parse_field = |text: &str, field| {
            Address::from_hex(text).map_err(|source| GenesisError::InvalidValidator {
                index,
                field,
                source,
            })
        };

        Ok(ValidatorRecord::new(
            parse_field(&self.consensus_addr, RecordField::ConsensusAddr)?,
            parse_field(&self.fee_addr, RecordField::FeeAddr)?,
        ))
    }
}

impl_list_struct! {
    /// Validator identity.  Encodes as the list `[consensus_addr, fee_addr]`.
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    #[cfg_attr(
        feature = "serde",
        derive(serde::Serialize, serde::Deserialize),
        serde(rename_all = "camelCase")
    )]
    pub struct ValidatorRecord {
        consensus_addr: Address,
        fee_addr: Address,
    }
}

/// Non-empty ordered set of validators.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidatorSet {
    records: Vec<ValidatorRecord>,
}

impl ValidatorSet {
    /// Constructs a new instance from decoded records, keeping their order.
    ///
    /// Duplicate consensus addresses are accepted but logged, the contracts
    /// consuming the set are where they'd get rejected.
    pub fn new(records: Vec<ValidatorRecord>) -> GenesisResult<Self> {
        if records.is_empty() {
            return Err(GenesisError::EmptySet);
        }

        warn_duplicates(&records);
        debug!(count = records.len(), "built validator set");

        Ok(Self { records })
    }

    /// Parses textual records, failing on the first malformed address.
    pub fn from_raw<'r>(raw: impl IntoIterator<Item = &'r RawValidatorRecord>) -> GenesisResult<Self> {
        let records = raw
            .into_iter()
            .enumerate()
            .map(|(i, r)| r.parse(i))
            .collect::<GenesisResult<Vec<_>>>()?;
        Self::new(records)
    }

    /// Gets the records in set order.
    pub fn records(&self) -> &[ValidatorRecord] {
        &self.records
    }

    /// Iterates over the records in set order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidatorRecord> {
        self.records.iter()
    }

    /// Iterates over the consensus addresses in set order.
    pub fn consensus_addrs(&self) -> impl Iterator<Item = Address> + '_ {
        self.records.iter().map(|r| *r.consensus_addr())
    }

    /// Gets the record at validator index `i`.
    pub fn get(&self, i: usize) -> Option<&ValidatorRecord> {
        self.records.get(i)
    }

    /// Returns the number of validators.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false, a set can't be built empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a ValidatorSet {
    type Item = &'a ValidatorRecord;
    type IntoIter = std::slice::Iter<'a, ValidatorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn warn_duplicates(records: &[ValidatorRecord]) {
    let mut seen = HashMap::with_capacity(records.len());
    for (i, r) in records.iter().enumerate() {
        if let Some(first) = seen.insert(*r.consensus_addr(), i) {
            warn!(
                %first,
                second = %i,
                addr = %r.consensus_addr(),
                "duplicate consensus address in validator set"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;

    const ADDRS: [&str; 3] = [
        "0xff19437f7e54c71e06ee852d9331a1de74947a9c",
        "0xfd6ac9177cb6746d8b1b778593f1b30c36f08d5e",
        "0x621bb82013b8fd872e8c6d05464cd178a4022b7f",
    ];

    fn raw_same(addr: &str) -> RawValidatorRecord {
        RawValidatorRecord::new(addr, addr)
    }

    #[test]
    fn test_from_raw_keeps_order() {
        let raw: Vec<_> = ADDRS.iter().map(|a| raw_same(a)).collect();
        let set = ValidatorSet::from_raw(&raw).unwrap();

        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
        for (i, a) in ADDRS.iter().enumerate() {
            let expected = Address::from_hex(a).unwrap();
            assert_eq!(set.get(i).unwrap().consensus_addr(), &expected);
            assert_eq!(set.get(i).unwrap().fee_addr(), &expected);
        }
        assert!(set.get(3).is_none());

        let consensus: Vec<_> = set.consensus_addrs().collect();
        assert_eq!(consensus.len(), 3);
        assert_eq!(consensus[2], Address::from_hex(ADDRS[2]).unwrap());
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(ValidatorSet::new(Vec::new()), Err(GenesisError::EmptySet));
        assert_eq!(
            ValidatorSet::from_raw(&Vec::<RawValidatorRecord>::new()),
            Err(GenesisError::EmptySet)
        );
        assert!(!GenesisError::EmptySet.is_format());
    }

    #[test]
    fn test_bad_address_names_record_and_field() {
        let short = &ADDRS[1][..41];
        let raw = vec![
            raw_same(ADDRS[0]),
            RawValidatorRecord::new(ADDRS[1], short),
        ];

        let err = ValidatorSet::from_raw(&raw).unwrap_err();
        assert!(err.is_format());
        assert_eq!(
            err,
            GenesisError::InvalidValidator {
                index: 1,
                field: RecordField::FeeAddr,
                source: FormatError::BadLength {
                    input: short.to_owned(),
                    expected: 40,
                    found: 39,
                },
            }
        );

        let msg = err.to_string();
        assert!(msg.starts_with("validator 1 feeAddr:"), "{msg}");
    }

    #[test]
    fn test_duplicates_allowed() {
        let raw = vec![raw_same(ADDRS[0]), raw_same(ADDRS[1]), raw_same(ADDRS[0])];
        let set = ValidatorSet::from_raw(&raw).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(0), set.get(2));
    }

    #[test]
    fn test_distinct_fee_addr() {
        let raw = [RawValidatorRecord::new(ADDRS[0], ADDRS[1])];
        let set = ValidatorSet::from_raw(&raw).unwrap();
        let rec = set.records()[0];
        assert_ne!(rec.consensus_addr(), rec.fee_addr());
        assert_eq!((&set).into_iter().count(), 1);
    }
}
