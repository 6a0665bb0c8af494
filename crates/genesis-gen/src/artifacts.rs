//! Artifact document handed to the template renderer.

use std::collections::BTreeMap;

use genesis_fmt::{
    MemberList, ValidatorSet, build_extra_data, encode_address_list, encode_validator_pairs,
    parse_holders,
};
use serde::Serialize;
use tracing::*;

use crate::config::{CycleParams, GenesisConfig, LightClientParams};
use crate::errors::GenResult;

/// Every generated value, byte blobs as `0x` prefixed hex.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Artifacts {
    pub(crate) extra_data: String,
    pub(crate) validator_set_bytes: String,
    pub(crate) init_members: String,
    pub(crate) network_members: BTreeMap<String, String>,
    pub(crate) init_holders: Vec<HolderArtifact>,
    pub(crate) cycle: CycleParams,
    pub(crate) light_client: LightClientParams,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub(crate) struct HolderArtifact {
    pub(crate) address: String,

    /// Hex, no prefix.
    pub(crate) balance: String,
}

impl Artifacts {
    /// Builds every artifact, failing before producing anything if any input
    /// is malformed.
    pub(crate) fn build(config: &GenesisConfig) -> GenResult<Self> {
        let set = ValidatorSet::from_raw(&config.validators)?;

        let init_members = encode_members(&config.members)?;
        let network_members = config
            .network_members
            .iter()
            .map(|(name, addrs)| Ok((name.clone(), encode_members(addrs)?)))
            .collect::<GenResult<BTreeMap<_, _>>>()?;

        let init_holders = parse_holders(
            config
                .holders
                .iter()
                .map(|h| (h.address.as_str(), h.balance.as_str())),
        )?
        .into_iter()
        .map(|h| HolderArtifact {
            address: h.address().to_prefixed_hex(),
            balance: h.balance_hex(),
        })
        .collect();

        config.light_client.validate()?;

        let artifacts = Self {
            extra_data: extra_data_hex(&set),
            validator_set_bytes: validator_set_hex(&set),
            init_members,
            network_members,
            init_holders,
            cycle: config.cycle,
            light_client: config.light_client.clone(),
        };

        info!(
            validators = set.len(),
            members = config.members.len(),
            networks = artifacts.network_members.len(),
            holders = artifacts.init_holders.len(),
            "generated artifacts"
        );
        Ok(artifacts)
    }
}

pub(crate) fn to_prefixed_hex(buf: &[u8]) -> String {
    format!("0x{}", hex::encode(buf))
}

pub(crate) fn extra_data_hex(set: &ValidatorSet) -> String {
    to_prefixed_hex(&build_extra_data(set))
}

pub(crate) fn validator_set_hex(set: &ValidatorSet) -> String {
    to_prefixed_hex(&encode_validator_pairs(set))
}

pub(crate) fn encode_members(addrs: &[String]) -> GenResult<String> {
    let members = MemberList::parse(addrs)?;
    Ok(to_prefixed_hex(&encode_address_list(&members)))
}

#[cfg(test)]
mod tests {
    use genesis_fmt::{GenesisError, RawValidatorRecord};

    use super::*;
    use crate::config::HolderConfig;
    use crate::errors::GenError;

    const A: &str = "0xff19437f7e54c71e06ee852d9331a1de74947a9c";
    const B: &str = "0xfd6ac9177cb6746d8b1b778593f1b30c36f08d5e";

    fn config() -> GenesisConfig {
        GenesisConfig {
            validators: vec![RawValidatorRecord::new(A, A), RawValidatorRecord::new(B, B)],
            members: vec![A.to_owned()],
            network_members: BTreeMap::from([("testnet".to_owned(), vec![B.to_owned()])]),
            holders: vec![HolderConfig {
                address: A.to_uppercase().replace("0X", "0x"),
                balance: "100000000000000000000000000".to_owned(),
            }],
            cycle: CycleParams::default(),
            light_client: LightClientParams::default(),
        }
    }

    #[test]
    fn test_build() {
        let art = Artifacts::build(&config()).unwrap();

        assert_eq!(
            art.extra_data,
            format!("0x{}{}{}{}", "00".repeat(32), &A[2..], &B[2..], "00".repeat(65))
        );
        assert_eq!(
            art.validator_set_bytes,
            format!("0xf856ea94{a}94{a}ea94{b}94{b}", a = &A[2..], b = &B[2..])
        );
        assert_eq!(art.init_members, format!("0xd594{}", &A[2..]));
        assert_eq!(art.network_members["testnet"], format!("0xd594{}", &B[2..]));
        assert_eq!(
            art.init_holders,
            [HolderArtifact {
                address: A.to_owned(),
                balance: "52b7d2dcc80cd2e4000000".to_owned(),
            }]
        );
    }

    #[test]
    fn test_json_shape() {
        let art = Artifacts::build(&config()).unwrap();
        let v = serde_json::to_value(&art).unwrap();
        assert!(v["extraData"].is_string());
        assert!(v["validatorSetBytes"].is_string());
        assert_eq!(v["cycle"]["roundInterval"], 1800);
        assert_eq!(v["lightClient"]["initChainHeight"], 1);
        assert_eq!(v["initHolders"][0]["balance"], "52b7d2dcc80cd2e4000000");
    }

    #[test]
    fn test_no_partial_output() {
        let mut cfg = config();
        cfg.validators.clear();
        assert!(matches!(
            Artifacts::build(&cfg),
            Err(GenError::Genesis(GenesisError::EmptySet))
        ));

        let mut cfg = config();
        cfg.network_members
            .insert("devnet".to_owned(), vec!["0x1234".to_owned()]);
        assert!(matches!(
            Artifacts::build(&cfg),
            Err(GenError::Genesis(GenesisError::InvalidMember { index: 0, .. }))
        ));

        let mut cfg = config();
        cfg.holders[0].balance = "lots".to_owned();
        assert!(matches!(
            Artifacts::build(&cfg),
            Err(GenError::Genesis(GenesisError::InvalidHolder { index: 0, .. }))
        ));
    }
}
