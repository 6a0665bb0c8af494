use serde::de;
use serde::{Deserialize, Serialize};

use crate::address::{ADDRESS_HEX_LEN, ADDRESS_LEN, Address};

impl Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            s.serialize_str(&self.to_hex())
        } else {
            s.serialize_bytes(self.as_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        if d.is_human_readable() {
            struct StrVisitor;

            impl de::Visitor<'_> for StrVisitor {
                type Value = Address;

                fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "a {ADDRESS_HEX_LEN}-digit hex string")
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<Address, E> {
                    Address::from_hex(v).map_err(E::custom)
                }
            }

            d.deserialize_str(StrVisitor)
        } else {
            struct BytesVisitor;

            impl<'de> de::Visitor<'de> for BytesVisitor {
                type Value = Address;

                fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{ADDRESS_LEN} bytes")
                }

                fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Address, E> {
                    let bytes: [u8; ADDRESS_LEN] = v
                        .try_into()
                        .map_err(|_| E::invalid_length(v.len(), &self))?;
                    Ok(Address::new(bytes))
                }
            }

            d.deserialize_bytes(BytesVisitor)
        }
    }
}
