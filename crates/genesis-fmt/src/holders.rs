//! Initial account balances written into genesis.

use crate::address::Address;
use crate::error::{FormatError, GenesisError, GenesisResult};

/// Account funded at genesis.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct InitHolder {
    address: Address,
    balance: u128,
}

impl InitHolder {
    /// Constructs a new instance.
    pub fn new(address: Address, balance: u128) -> Self {
        Self { address, balance }
    }

    /// Parses a hex address and a decimal balance.
    pub fn from_decimal(address: &str, balance: &str) -> Result<Self, FormatError> {
        let address = Address::from_hex(address)?;
        let balance = balance
            .parse::<u128>()
            .map_err(|_| FormatError::BadBalance {
                input: balance.to_owned(),
            })?;
        Ok(Self { address, balance })
    }

    /// Gets the address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Gets the balance.
    pub fn balance(&self) -> u128 {
        self.balance
    }

    /// Returns the balance as lowercase hex, no prefix or leading zeros.
    pub fn balance_hex(&self) -> String {
        format!("{:x}", self.balance)
    }
}

/// Parses `(address, balance)` pairs, failing on the first malformed one.
pub fn parse_holders<'h>(
    holders: impl IntoIterator<Item = (&'h str, &'h str)>,
) -> GenesisResult<Vec<InitHolder>> {
    holders
        .into_iter()
        .enumerate()
        .map(|(index, (addr, bal))| {
            InitHolder::from_decimal(addr, bal)
                .map_err(|source| GenesisError::InvalidHolder { index, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0xF2802AEDc647BFAd2b31373f9FDE308A8c69305a";

    #[test]
    fn test_balance_hex() {
        let h = InitHolder::from_decimal(ADDR, "100000000000000000000000000").unwrap();
        assert_eq!(h.balance_hex(), "52b7d2dcc80cd2e4000000");
        assert_eq!(h.address().to_hex(), "f2802aedc647bfad2b31373f9fde308a8c69305a");

        assert_eq!(InitHolder::new(*h.address(), 0).balance_hex(), "0");
        assert_eq!(InitHolder::new(*h.address(), 255).balance_hex(), "ff");
    }

    #[test]
    fn test_bad_balance() {
        for bad in ["", "1e26", "-1", "0x10", "340282366920938463463374607431768211456"] {
            assert_eq!(
                InitHolder::from_decimal(ADDR, bad),
                Err(FormatError::BadBalance {
                    input: bad.to_owned()
                }),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_parse_holders_names_index() {
        let err = parse_holders([(ADDR, "1"), ("0x1234", "1")]).unwrap_err();
        assert!(matches!(
            err,
            GenesisError::InvalidHolder {
                index: 1,
                source: FormatError::BadLength { .. }
            }
        ));
        assert_eq!(parse_holders([(ADDR, "7")]).unwrap()[0].balance(), 7);
    }
}
