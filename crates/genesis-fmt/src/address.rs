use std::fmt;
use std::str;

use genesis_rlp::impl_wrapper_encodable;

use crate::error::FormatError;

/// Length of an address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// Length of an address in hex digits, without prefix.
pub const ADDRESS_HEX_LEN: usize = ADDRESS_LEN * 2;

/// Account address ([`ADDRESS_LEN`] raw bytes).
///
/// Parses from [`ADDRESS_HEX_LEN`] hex digits with an optional `0x` prefix,
/// digits in either case.  Displays as lowercase hex without the prefix.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Creates a new `Address` from a [`ADDRESS_LEN`]-byte array.
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the address as a byte slice.
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Converts to the inner byte array.
    pub const fn into_inner(self) -> [u8; ADDRESS_LEN] {
        self.0
    }

    /// Parses an address from hex text.
    pub fn from_hex(s: &str) -> Result<Self, FormatError> {
        let prefix_len = if s.starts_with("0x") || s.starts_with("0X") {
            2
        } else {
            0
        };
        let digits = &s[prefix_len..];

        if let Some((index, ch)) = digits.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
            return Err(FormatError::BadCharacter {
                input: s.to_owned(),
                ch,
                index: prefix_len + index,
            });
        }

        let bad_length = || FormatError::BadLength {
            input: s.to_owned(),
            expected: ADDRESS_HEX_LEN,
            found: digits.len(),
        };

        if digits.len() != ADDRESS_HEX_LEN {
            return Err(bad_length());
        }

        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| bad_length())?;
        Ok(Self(bytes))
    }

    /// Returns the lowercase hex digits, without prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the lowercase hex digits with a `0x` prefix.
    pub fn to_prefixed_hex(&self) -> String {
        format!("0x{}", self.to_hex())
    }
}

impl_wrapper_encodable!(Address => [u8; ADDRESS_LEN]);

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; ADDRESS_LEN] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = FormatError;

    fn try_from(buf: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; ADDRESS_LEN] = buf.try_into().map_err(|_| FormatError::BadLength {
            input: hex::encode(buf),
            expected: ADDRESS_HEX_LEN,
            found: buf.len() * 2,
        })?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_prefixed_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(&self.to_hex())
    }
}

impl str::FromStr for Address {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
