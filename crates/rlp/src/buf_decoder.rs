//! Simple cursor over a flat buffer.

use crate::errors::{RlpError, RlpResult};

/// Decoder for an arbitrary [`AsRef`] on a byte slice.
///
/// You probably don't need to use this directly as a consumer of this library,
/// you can directly call [`crate::decode_exact`] and [`crate::encode_to_vec`].
#[derive(Debug)]
pub struct BufDecoder<B> {
    buf: B,
    at: usize,

    /// Absolute offset of `buf[0]`, used so that nested decoders report
    /// positions relative to the outermost input.
    origin: usize,
}

impl<B: AsRef<[u8]>> BufDecoder<B> {
    /// Constructs a new instance by wrapping a buffer and starting at the
    /// beginning.
    pub fn new(buf: B) -> Self {
        Self {
            buf,
            at: 0,
            origin: 0,
        }
    }

    /// Returns the length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.buf.as_ref().len()
    }

    /// Returns if the underlying buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.as_ref().is_empty()
    }

    /// Returns the total number of remaining bytes that can be read.
    pub fn remaining(&self) -> usize {
        self.len() - self.at
    }

    /// Returns the absolute position of the cursor.
    pub fn position(&self) -> usize {
        self.origin + self.at
    }

    /// Returns the slice of the remaining unread bytes, which might be empty.
    fn rest(&self) -> &[u8] {
        &self.buf.as_ref()[self.at..]
    }

    fn check_remaining(&self, needed: usize) -> RlpResult<()> {
        if needed > self.remaining() {
            return Err(RlpError::OverrunInput {
                at: self.position(),
                needed,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    /// Returns the next byte without consuming it.
    pub fn peek_u8(&self) -> RlpResult<u8> {
        self.check_remaining(1)?;
        Ok(self.rest()[0])
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> RlpResult<u8> {
        let b = self.peek_u8()?;
        self.at += 1;
        Ok(b)
    }

    /// Reads `n` bytes, returning a slice into the underlying buffer.
    pub fn read_slice(&mut self, n: usize) -> RlpResult<&[u8]> {
        self.check_remaining(n)?;
        let start = self.at;
        self.at += n;
        Ok(&self.buf.as_ref()[start..start + n])
    }

    /// Splits off the next `n` bytes as a decoder of their own, advancing past
    /// them.
    pub fn sub_decoder(&mut self, n: usize) -> RlpResult<BufDecoder<&[u8]>> {
        let origin = self.position();
        let buf = self.read_slice(n)?;
        Ok(BufDecoder {
            buf,
            at: 0,
            origin,
        })
    }
}
