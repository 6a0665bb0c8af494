//! Length prefixes for RLP items.
//!
//! Every item starts with a prefix byte whose range tells what follows.
//! Long forms carry the payload length big-endian, with no leading zeros.
//!
//! ```txt
//! 00..7f   single byte, the byte is its own payload
//! 80..b7   string, payload length 0..=55
//! b8..bf   string, 1..=8 length bytes follow
//! c0..f7   list, payload length 0..=55
//! f8..ff   list, 1..=8 length bytes follow
//! ```

use crate::buf_decoder::BufDecoder;
use crate::errors::{RlpError, RlpResult};
use crate::types::Encoder;

/// Prefix of an empty byte string, and base of the short string range.
pub const EMPTY_STRING_CODE: u8 = 0x80;

/// Prefix of an empty list, and base of the short list range.
pub const EMPTY_LIST_CODE: u8 = 0xc0;

/// Base of the long string range, offset by the length-of-length.
const LONG_STRING_BASE: u8 = 0xb7;

/// Base of the long list range, offset by the length-of-length.
const LONG_LIST_BASE: u8 = 0xf7;

/// Largest payload that fits in the one-byte short form.
pub const MAX_SHORT_LEN: usize = 55;

/// Decoded item prefix.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Header {
    list: bool,
    payload_len: usize,
}

impl Header {
    /// Constructs a string header for a payload of `payload_len` bytes.
    pub fn new_string(payload_len: usize) -> Self {
        Self {
            list: false,
            payload_len,
        }
    }

    /// Constructs a list header for a payload of `payload_len` bytes.
    pub fn new_list(payload_len: usize) -> Self {
        Self {
            list: true,
            payload_len,
        }
    }

    /// Returns if this is a list header.
    pub fn is_list(&self) -> bool {
        self.list
    }

    /// Returns the number of payload bytes following the prefix.
    pub fn payload_len(&self) -> usize {
        self.payload_len
    }

    /// Returns the encoded length of the prefix in bytes.
    pub fn byte_len(&self) -> usize {
        if self.payload_len <= MAX_SHORT_LEN {
            1
        } else {
            1 + be_len(self.payload_len)
        }
    }

    /// Writes the prefix.
    ///
    /// This does not handle the single-byte case, callers encoding byte
    /// strings must check that first.
    pub fn encode(&self, enc: &mut impl Encoder) {
        let (short_base, long_base) = if self.list {
            (EMPTY_LIST_CODE, LONG_LIST_BASE)
        } else {
            (EMPTY_STRING_CODE, LONG_STRING_BASE)
        };

        if self.payload_len <= MAX_SHORT_LEN {
            enc.write_u8(short_base + self.payload_len as u8);
        } else {
            let n = be_len(self.payload_len);
            let bytes = self.payload_len.to_be_bytes();
            enc.write_u8(long_base + n as u8);
            enc.write_buf(&bytes[bytes.len() - n..]);
        }
    }

    /// Reads a prefix, rejecting noncanonical forms.
    ///
    /// A byte below `0x80` is left in place and reported as a one byte
    /// string, so the caller reads it back as the payload.
    pub fn decode<B: AsRef<[u8]>>(dec: &mut BufDecoder<B>) -> RlpResult<Self> {
        let at = dec.position();
        let first = dec.peek_u8()?;

        let header = match first {
            0x00..=0x7f => return Ok(Self::new_string(1)),

            0x80..=0xb7 => {
                dec.read_u8()?;
                let len = (first - EMPTY_STRING_CODE) as usize;
                if len == 1 && dec.peek_u8()? < EMPTY_STRING_CODE {
                    return Err(RlpError::NonCanonicalSingleByte(at));
                }
                Self::new_string(len)
            }

            0xb8..=0xbf => {
                dec.read_u8()?;
                let len = decode_long_len(dec, (first - LONG_STRING_BASE) as usize, at)?;
                Self::new_string(len)
            }

            0xc0..=0xf7 => {
                dec.read_u8()?;
                Self::new_list((first - EMPTY_LIST_CODE) as usize)
            }

            0xf8..=0xff => {
                dec.read_u8()?;
                let len = decode_long_len(dec, (first - LONG_LIST_BASE) as usize, at)?;
                Self::new_list(len)
            }
        };

        if header.payload_len > dec.remaining() {
            return Err(RlpError::OverrunInput {
                at: dec.position(),
                needed: header.payload_len,
                remaining: dec.remaining(),
            });
        }

        Ok(header)
    }
}

/// Number of bytes needed to write `v` big-endian without leading zeros.
fn be_len(v: usize) -> usize {
    (usize::BITS - v.leading_zeros()).div_ceil(8) as usize
}

fn decode_long_len<B: AsRef<[u8]>>(
    dec: &mut BufDecoder<B>,
    len_of_len: usize,
    at: usize,
) -> RlpResult<usize> {
    let bytes = dec.read_slice(len_of_len)?;
    if bytes[0] == 0 {
        return Err(RlpError::LeadingZeroLength(at));
    }
    if len_of_len > size_of::<usize>() {
        return Err(RlpError::LengthOverflow(at));
    }

    let mut buf = [0u8; size_of::<usize>()];
    buf[size_of::<usize>() - len_of_len..].copy_from_slice(bytes);
    let len = usize::from_be_bytes(buf);

    if len <= MAX_SHORT_LEN {
        return Err(RlpError::NonCanonicalLength { at, len });
    }

    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(h: Header) -> Vec<u8> {
        let mut buf = Vec::new();
        h.encode(&mut buf);
        buf
    }

    #[test]
    fn test_short_prefixes() {
        assert_eq!(encode(Header::new_string(0)), [0x80]);
        assert_eq!(encode(Header::new_string(55)), [0xb7]);
        assert_eq!(encode(Header::new_list(0)), [0xc0]);
        assert_eq!(encode(Header::new_list(55)), [0xf7]);
    }

    #[test]
    fn test_long_prefixes() {
        assert_eq!(encode(Header::new_string(56)), [0xb8, 56]);
        assert_eq!(encode(Header::new_string(1024)), [0xb9, 0x04, 0x00]);
        assert_eq!(encode(Header::new_list(56)), [0xf8, 56]);
        assert_eq!(encode(Header::new_list(0x01_0000)), [0xfa, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn test_byte_len_matches_encoding() {
        for len in [0, 1, 55, 56, 255, 256, 65535, 65536, 1 << 24] {
            for h in [Header::new_string(len), Header::new_list(len)] {
                assert_eq!(h.byte_len(), encode(h).len(), "len {len}");
            }
        }
    }

    #[test]
    fn test_decode_single_byte_not_consumed() {
        let mut dec = BufDecoder::new([0x42u8]);
        let h = Header::decode(&mut dec).unwrap();
        assert_eq!(h, Header::new_string(1));
        assert_eq!(dec.position(), 0);
    }

    #[test]
    fn test_decode_rejects_noncanonical_single_byte() {
        let mut dec = BufDecoder::new([0x81u8, 0x05]);
        assert_eq!(
            Header::decode(&mut dec),
            Err(RlpError::NonCanonicalSingleByte(0))
        );

        // 0x80 and above are fine behind a prefix.
        let mut dec = BufDecoder::new([0x81u8, 0x80]);
        assert_eq!(Header::decode(&mut dec), Ok(Header::new_string(1)));
    }

    #[test]
    fn test_decode_rejects_short_len_in_long_form() {
        let mut buf = vec![0xb8, 55];
        buf.extend([0u8; 55]);
        let mut dec = BufDecoder::new(buf);
        assert_eq!(
            Header::decode(&mut dec),
            Err(RlpError::NonCanonicalLength { at: 0, len: 55 })
        );
    }

    #[test]
    fn test_decode_rejects_leading_zero() {
        let mut buf = vec![0xb9, 0x00, 0x40];
        buf.extend([0u8; 64]);
        let mut dec = BufDecoder::new(buf);
        assert_eq!(
            Header::decode(&mut dec),
            Err(RlpError::LeadingZeroLength(0))
        );
    }

    #[test]
    fn test_decode_rejects_overflowing_len() {
        let mut dec = BufDecoder::new([0xffu8, 1, 0, 0, 0, 0, 0, 0, 0]);
        assert!(matches!(
            Header::decode(&mut dec),
            Err(RlpError::LengthOverflow(0)) | Err(RlpError::OverrunInput { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_truncated() {
        let mut dec = BufDecoder::new([0x83u8, b'd', b'o']);
        assert!(matches!(
            Header::decode(&mut dec),
            Err(RlpError::OverrunInput { needed: 3, .. })
        ));

        let mut dec = BufDecoder::new([0xb9u8, 0x04]);
        assert!(matches!(
            Header::decode(&mut dec),
            Err(RlpError::OverrunInput { .. })
        ));

        let mut dec = BufDecoder::new(Vec::<u8>::new());
        assert!(matches!(
            Header::decode(&mut dec),
            Err(RlpError::OverrunInput { .. })
        ));
    }
}
