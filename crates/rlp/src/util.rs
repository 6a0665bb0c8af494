//! High-level util functions.

use crate::{BufDecoder, Decodable, Encodable, RlpError, RlpItem, RlpResult};

/// Decodes a single item from a buffer, throwing an error if there's leftover
/// bytes.
pub fn decode_item(buf: &[u8]) -> RlpResult<RlpItem> {
    let mut dec = BufDecoder::new(buf);
    let v = RlpItem::decode(&mut dec)?;
    if dec.remaining() > 0 {
        return Err(RlpError::ExtraInput(dec.position()));
    }
    Ok(v)
}

/// Decodes a typed value from a buffer, throwing an error if there's leftover
/// bytes.
pub fn decode_buf_exact<T: Decodable>(buf: &[u8]) -> RlpResult<T> {
    T::decode_item(&decode_item(buf)?)
}

/// Encodes the value into a newly allocated vec.
pub fn encode_to_vec<T: Encodable + ?Sized>(v: &T) -> Vec<u8> {
    let mut buf = Vec::with_capacity(v.encoded_len());
    v.encode(&mut buf);
    buf
}
