use arbitrary::{Arbitrary, Unstructured};

use crate::address::{ADDRESS_LEN, Address};

impl<'a> Arbitrary<'a> for Address {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        <[u8; ADDRESS_LEN]>::arbitrary(u).map(Address::new)
    }

    fn size_hint(_depth: usize) -> (usize, Option<usize>) {
        (ADDRESS_LEN, Some(ADDRESS_LEN))
    }
}
