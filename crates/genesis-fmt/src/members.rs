use crate::address::Address;
use crate::error::{GenesisError, GenesisResult};

/// Ordered list of member addresses.
///
/// Unlike [`crate::ValidatorSet`] this may be empty.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MemberList(Vec<Address>);

impl MemberList {
    /// Constructs a new instance, keeping the order given.
    pub fn new(addrs: Vec<Address>) -> Self {
        Self(addrs)
    }

    /// Parses hex addresses, failing on the first malformed one.
    pub fn parse<S: AsRef<str>>(addrs: impl IntoIterator<Item = S>) -> GenesisResult<Self> {
        addrs
            .into_iter()
            .enumerate()
            .map(|(index, s)| {
                Address::from_hex(s.as_ref())
                    .map_err(|source| GenesisError::InvalidMember { index, source })
            })
            .collect::<GenesisResult<Vec<_>>>()
            .map(Self)
    }

    /// Gets the addresses in list order.
    pub fn as_slice(&self) -> &[Address] {
        &self.0
    }

    /// Iterates over the addresses in list order.
    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.0.iter()
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns if there are no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts to the inner vec.
    pub fn into_inner(self) -> Vec<Address> {
        self.0
    }
}

impl From<Vec<Address>> for MemberList {
    fn from(addrs: Vec<Address>) -> Self {
        Self(addrs)
    }
}
