//! Generic decoded item tree.

use crate::buf_decoder::BufDecoder;
use crate::errors::{RlpError, RlpResult};
use crate::header::Header;
use crate::types::{Decodable, Encodable, Encoder, encode_list, list_len};

/// Deepest list nesting the decoder accepts.
pub const MAX_DEPTH: usize = 64;

/// A decoded RLP item, either a byte string or a list of items.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum RlpItem {
    /// Raw byte string.
    Bytes(Vec<u8>),

    /// Ordered list of nested items.
    List(Vec<RlpItem>),
}

impl RlpItem {
    /// Constructs a byte string item.
    pub fn bytes(buf: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(buf.into())
    }

    /// Constructs a list item.
    pub fn list(items: impl IntoIterator<Item = RlpItem>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// Returns if this is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Gets the bytes of a string item.
    pub fn as_bytes(&self) -> RlpResult<&[u8]> {
        match self {
            Self::Bytes(b) => Ok(b),
            Self::List(_) => Err(RlpError::UnexpectedList),
        }
    }

    /// Gets the children of a list item.
    pub fn as_list(&self) -> RlpResult<&[RlpItem]> {
        match self {
            Self::List(items) => Ok(items),
            Self::Bytes(_) => Err(RlpError::UnexpectedString),
        }
    }

    /// Decodes one item from the decoder, leaving any following bytes unread.
    pub fn decode<B: AsRef<[u8]>>(dec: &mut BufDecoder<B>) -> RlpResult<Self> {
        Self::decode_nested(dec, 0)
    }

    fn decode_nested<B: AsRef<[u8]>>(dec: &mut BufDecoder<B>, depth: usize) -> RlpResult<Self> {
        let at = dec.position();
        let header = Header::decode(dec)?;

        if !header.is_list() {
            let payload = dec.read_slice(header.payload_len())?;
            return Ok(Self::Bytes(payload.to_vec()));
        }

        if depth >= MAX_DEPTH {
            return Err(RlpError::DepthExceeded(at));
        }

        let mut sub = dec.sub_decoder(header.payload_len())?;
        let mut items = Vec::new();
        while sub.remaining() > 0 {
            items.push(Self::decode_nested(&mut sub, depth + 1)?);
        }

        Ok(Self::List(items))
    }
}

impl From<Vec<u8>> for RlpItem {
    fn from(buf: Vec<u8>) -> Self {
        Self::Bytes(buf)
    }
}

impl From<&[u8]> for RlpItem {
    fn from(buf: &[u8]) -> Self {
        Self::Bytes(buf.to_vec())
    }
}

impl From<Vec<RlpItem>> for RlpItem {
    fn from(items: Vec<RlpItem>) -> Self {
        Self::List(items)
    }
}

impl Encodable for RlpItem {
    fn encode(&self, enc: &mut impl Encoder) {
        match self {
            Self::Bytes(b) => b.encode(enc),
            Self::List(items) => encode_list(items, enc),
        }
    }

    fn encoded_len(&self) -> usize {
        match self {
            Self::Bytes(b) => b.encoded_len(),
            Self::List(items) => list_len(items),
        }
    }
}

impl Decodable for RlpItem {
    fn decode_item(item: &RlpItem) -> RlpResult<Self> {
        Ok(item.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode_item, encode_to_vec};

    fn nested(depth: usize) -> RlpItem {
        (0..depth).fold(RlpItem::list([]), |inner, _| RlpItem::list([inner]))
    }

    #[test]
    fn test_accessors() {
        let s = RlpItem::bytes(b"dog".to_vec());
        let l = RlpItem::list([s.clone()]);
        assert!(!s.is_list());
        assert!(l.is_list());
        assert_eq!(s.as_bytes().unwrap(), b"dog");
        assert_eq!(s.as_list(), Err(RlpError::UnexpectedString));
        assert_eq!(l.as_bytes(), Err(RlpError::UnexpectedList));
        assert_eq!(l.as_list().unwrap(), &[s]);
    }

    #[test]
    fn test_depth_limit() {
        // `nested(n)` has n + 1 lists.
        let ok = encode_to_vec(&nested(MAX_DEPTH - 1));
        assert_eq!(decode_item(&ok).unwrap(), nested(MAX_DEPTH - 1));

        let too_deep = encode_to_vec(&nested(MAX_DEPTH));
        assert!(matches!(
            decode_item(&too_deep),
            Err(RlpError::DepthExceeded(_))
        ));
    }

    #[test]
    fn test_child_overrunning_parent() {
        // List claims 2 payload bytes but the child string claims 3.
        let buf = [0xc2, 0x83, b'a', b'b', b'c'];
        assert!(matches!(
            decode_item(&buf),
            Err(RlpError::OverrunInput { at: 2, .. })
        ));
    }

    #[test]
    fn test_encoded_len_matches() {
        let item = RlpItem::list([
            RlpItem::bytes(vec![0x7f]),
            RlpItem::bytes(vec![0x80]),
            RlpItem::bytes(vec![0xaa; 60]),
            nested(3),
        ]);
        assert_eq!(item.encoded_len(), encode_to_vec(&item).len());
    }
}
