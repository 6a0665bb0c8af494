//! Generation config file.
//!
//! JSON with the same shapes the genesis scripts have always used, validator
//! records keyed `consensusAddr`/`feeAddr`.  Everything except `validators`
//! has a default.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use genesis_fmt::RawValidatorRecord;
use serde::{Deserialize, Serialize};
use tracing::*;

use crate::errors::{GenError, GenResult};

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct GenesisConfig {
    /// Initial validators, in on-chain index order.
    pub(crate) validators: Vec<RawValidatorRecord>,

    /// Default member list.
    #[serde(default)]
    pub(crate) members: Vec<String>,

    /// Member lists for other networks, by name.
    #[serde(default)]
    pub(crate) network_members: BTreeMap<String, Vec<String>>,

    #[serde(default)]
    pub(crate) holders: Vec<HolderConfig>,

    #[serde(default)]
    pub(crate) cycle: CycleParams,

    #[serde(default)]
    pub(crate) light_client: LightClientParams,
}

/// Funded account, balance in decimal wei.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct HolderConfig {
    pub(crate) address: String,
    pub(crate) balance: String,
}

/// Epoch and round timing handed through to the templates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub(crate) struct CycleParams {
    pub(crate) block_period: u64,
    pub(crate) epoch_length: u64,
    pub(crate) round_interval: u64,
    pub(crate) validator_count: u32,
}

impl Default for CycleParams {
    fn default() -> Self {
        Self {
            block_period: 3,
            epoch_length: 20,
            round_interval: 1800,
            validator_count: 7,
        }
    }
}

/// Light client contract parameters.
///
/// The consensus state is an opaque header blob, only checked to be hex.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub(crate) struct LightClientParams {
    pub(crate) init_consensus_state_bytes: String,
    pub(crate) init_chain_height: u64,
    pub(crate) reward_for_validator_set_change: String,
    pub(crate) mock: bool,
}

/// Regtest genesis header.
const DEFAULT_CONSENSUS_STATE: &str = "0000002006226e46111a0b59caaf126043eb5bbf28c34f3a5e332a1fc7b2b73cf188910f7c878e0bd00e7c302328e8d22e26d7f519f26329e6c0462ae89059fb7fd732811728f763ffff7f2001000000";

impl Default for LightClientParams {
    fn default() -> Self {
        Self {
            init_consensus_state_bytes: DEFAULT_CONSENSUS_STATE.to_owned(),
            init_chain_height: 1,
            reward_for_validator_set_change: "1e16".to_owned(),
            mock: false,
        }
    }
}

impl GenesisConfig {
    /// Reads and parses a config file.
    pub(crate) fn load(path: &Path) -> GenResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| GenError::Read {
            path: path.to_owned(),
            source,
        })?;

        let config: Self = serde_json::from_str(&text).map_err(|source| GenError::Config {
            path: path.to_owned(),
            source,
        })?;

        debug!(
            path = %path.display(),
            validators = config.validators.len(),
            members = config.members.len(),
            networks = config.network_members.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Gets the member list for `network`, or the default list if `None`.
    pub(crate) fn members_for(&self, network: Option<&str>) -> GenResult<&[String]> {
        match network {
            None => Ok(&self.members),
            Some(name) => self
                .network_members
                .get(name)
                .map(Vec::as_slice)
                .ok_or_else(|| GenError::UnknownNetwork(name.to_owned())),
        }
    }
}

impl LightClientParams {
    /// Checks the header blob is hex, with or without a `0x` prefix.
    pub(crate) fn validate(&self) -> GenResult<()> {
        let s = &self.init_consensus_state_bytes;
        let digits = s.strip_prefix("0x").unwrap_or(s);
        hex::decode(digits).map_err(|source| GenError::BadHex {
            field: "lightClient.initConsensusStateBytes",
            source,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "validators": [
            {
                "consensusAddr": "0xff19437f7e54c71e06ee852d9331a1de74947a9c",
                "feeAddr": "0xff19437f7e54c71e06ee852d9331a1de74947a9c"
            }
        ]
    }"#;

    #[test]
    fn test_defaults() {
        let cfg: GenesisConfig = serde_json::from_str(MINIMAL).unwrap();
        assert_eq!(cfg.validators.len(), 1);
        assert!(cfg.members.is_empty());
        assert!(cfg.holders.is_empty());
        assert_eq!(cfg.cycle, CycleParams::default());
        assert_eq!(cfg.cycle.round_interval, 1800);
        assert_eq!(cfg.light_client, LightClientParams::default());
        cfg.light_client.validate().unwrap();
    }

    #[test]
    fn test_full() {
        let cfg: GenesisConfig = serde_json::from_str(
            r#"{
                "validators": [
                    {"consensusAddr": "0xff19437f7e54c71e06ee852d9331a1de74947a9c",
                     "feeAddr": "0xfd6ac9177cb6746d8b1b778593f1b30c36f08d5e"}
                ],
                "members": ["0x1ef01E76f1aad50144A32680f16Aa97a10f8aF95"],
                "networkMembers": {
                    "testnet": ["0x91fb7d8a73d2752830ea189737ea0e007f999b94"]
                },
                "holders": [
                    {"address": "0x1ef01E76f1aad50144A32680f16Aa97a10f8aF95",
                     "balance": "100000000000000000000000000"}
                ],
                "cycle": {"epochLength": 200},
                "lightClient": {"mock": true, "initChainHeight": 7}
            }"#,
        )
        .unwrap();

        assert_eq!(cfg.cycle.epoch_length, 200);
        assert_eq!(cfg.cycle.block_period, 3);
        assert!(cfg.light_client.mock);
        assert_eq!(cfg.light_client.init_chain_height, 7);
        assert_eq!(cfg.light_client.reward_for_validator_set_change, "1e16");

        assert_eq!(cfg.members_for(None).unwrap().len(), 1);
        assert_eq!(
            cfg.members_for(Some("testnet")).unwrap()[0],
            "0x91fb7d8a73d2752830ea189737ea0e007f999b94"
        );
        assert!(matches!(
            cfg.members_for(Some("devnet")),
            Err(GenError::UnknownNetwork(n)) if n == "devnet"
        ));
    }

    #[test]
    fn test_rejects_unknown_and_missing_fields() {
        assert!(serde_json::from_str::<GenesisConfig>(r#"{"members": []}"#).is_err());
        assert!(
            serde_json::from_str::<GenesisConfig>(r#"{"validators": [], "extra": 1}"#).is_err()
        );
    }

    #[test]
    fn test_bad_consensus_state_hex() {
        let lc = LightClientParams {
            init_consensus_state_bytes: "0x0g".to_owned(),
            ..Default::default()
        };
        assert!(matches!(lc.validate(), Err(GenError::BadHex { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GenesisConfig::load(Path::new("/nonexistent/genesis.json")).unwrap_err();
        assert!(matches!(err, GenError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/genesis.json"));
    }
}
