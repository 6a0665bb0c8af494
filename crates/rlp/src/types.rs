use crate::errors::{RlpError, RlpResult};
use crate::header::{EMPTY_STRING_CODE, Header};
use crate::item::RlpItem;

/// Generic encoder trait that writes outputs.
///
/// Writes are infallible, there is nothing in the RLP format that can be
/// rejected on the way out.
pub trait Encoder {
    /// Writes a buf.  This does NOT include length tagging.
    fn write_buf(&mut self, buf: &[u8]);

    /// Writes a single byte.
    fn write_u8(&mut self, b: u8) {
        self.write_buf(&[b]);
    }
}

/// Encoding to a vec buffer.
impl Encoder for Vec<u8> {
    fn write_buf(&mut self, buf: &[u8]) {
        self.extend_from_slice(buf);
    }

    fn write_u8(&mut self, b: u8) {
        self.push(b);
    }
}

/// Types that have a canonical RLP form.
pub trait Encodable {
    /// Encodes self, including its prefix, into an encoder.
    fn encode(&self, enc: &mut impl Encoder);

    /// Returns the exact number of bytes [`Encodable::encode`] writes.
    fn encoded_len(&self) -> usize;
}

/// Types that can be read back out of a decoded [`RlpItem`].
pub trait Decodable: Sized {
    /// Converts a decoded item, checking that it has the expected shape.
    fn decode_item(item: &RlpItem) -> RlpResult<Self>;
}

/// Byte strings.
impl Encodable for [u8] {
    fn encode(&self, enc: &mut impl Encoder) {
        match self {
            [b] if *b < EMPTY_STRING_CODE => enc.write_u8(*b),
            _ => {
                Header::new_string(self.len()).encode(enc);
                enc.write_buf(self);
            }
        }
    }

    fn encoded_len(&self) -> usize {
        match self {
            [b] if *b < EMPTY_STRING_CODE => 1,
            _ => Header::new_string(self.len()).byte_len() + self.len(),
        }
    }
}

impl<const N: usize> Encodable for [u8; N] {
    fn encode(&self, enc: &mut impl Encoder) {
        self.as_slice().encode(enc)
    }

    fn encoded_len(&self) -> usize {
        self.as_slice().encoded_len()
    }
}

impl Encodable for Vec<u8> {
    fn encode(&self, enc: &mut impl Encoder) {
        self.as_slice().encode(enc)
    }

    fn encoded_len(&self) -> usize {
        self.as_slice().encoded_len()
    }
}

impl Encodable for str {
    fn encode(&self, enc: &mut impl Encoder) {
        self.as_bytes().encode(enc)
    }

    fn encoded_len(&self) -> usize {
        self.as_bytes().encoded_len()
    }
}

impl<T: Encodable + ?Sized> Encodable for &T {
    fn encode(&self, enc: &mut impl Encoder) {
        (**self).encode(enc)
    }

    fn encoded_len(&self) -> usize {
        (**self).encoded_len()
    }
}

/// Returns the payload length of a list made of `items`.
fn list_payload_len<T: Encodable>(items: &[T]) -> usize {
    items.iter().map(Encodable::encoded_len).sum()
}

/// Encodes `items` as a single list, preserving their order.
pub fn encode_list<T: Encodable>(items: &[T], enc: &mut impl Encoder) {
    Header::new_list(list_payload_len(items)).encode(enc);
    for item in items {
        item.encode(enc);
    }
}

/// Returns the encoded length of the list [`encode_list`] would write.
pub fn list_len<T: Encodable>(items: &[T]) -> usize {
    let payload_len = list_payload_len(items);
    Header::new_list(payload_len).byte_len() + payload_len
}

/// Decodes every child of a list item, preserving their order.
pub fn decode_list<T: Decodable>(item: &RlpItem) -> RlpResult<Vec<T>> {
    item.as_list()?.iter().map(T::decode_item).collect()
}

impl<const N: usize> Decodable for [u8; N] {
    fn decode_item(item: &RlpItem) -> RlpResult<Self> {
        let buf = item.as_bytes()?;
        buf.try_into().map_err(|_| RlpError::StringLength {
            expected: N,
            found: buf.len(),
        })
    }
}

impl Decodable for Vec<u8> {
    fn decode_item(item: &RlpItem) -> RlpResult<Self> {
        item.as_bytes().map(<[u8]>::to_vec)
    }
}
