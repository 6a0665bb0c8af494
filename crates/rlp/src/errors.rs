use thiserror::Error;

/// Errors from decoding RLP.
///
/// Encoding never fails, so every variant describes a malformed input.
/// Offsets are absolute byte positions in the buffer passed to the decoder.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum RlpError {
    /// If we tried to read past the end of the underlying buffer.
    #[error("would overrun end of input (at {at}, need {needed}, have {remaining})")]
    OverrunInput {
        /// Offset of the read.
        at: usize,
        /// Bytes the read asked for.
        needed: usize,
        /// Bytes actually left.
        remaining: usize,
    },

    /// If there was extra data in a buffer that we didn't consume reading an
    /// item.
    #[error("extra unnecessary input leftover (at {0})")]
    ExtraInput(usize),

    /// A single byte below `0x80` was wrapped in a string prefix.
    #[error("noncanonical single byte encoding (at {0})")]
    NonCanonicalSingleByte(usize),

    /// A long-form prefix was used for a payload that fits the short form.
    #[error("noncanonical long length {len} (at {at})")]
    NonCanonicalLength {
        /// Offset of the prefix.
        at: usize,
        /// Decoded payload length.
        len: usize,
    },

    /// The big-endian length of a long-form prefix started with a zero byte.
    #[error("length-of-length has leading zero (at {0})")]
    LeadingZeroLength(usize),

    /// The big-endian length doesn't fit in a `usize`.
    #[error("length overflows usize (at {0})")]
    LengthOverflow(usize),

    /// Lists were nested deeper than [`crate::MAX_DEPTH`].
    #[error("nesting exceeds max depth (at {0})")]
    DepthExceeded(usize),

    /// Expected a byte string but found a list.
    #[error("expected string, found list")]
    UnexpectedList,

    /// Expected a list but found a byte string.
    #[error("expected list, found string")]
    UnexpectedString,

    /// A byte string didn't have the fixed length its type requires.
    #[error("expected {expected} byte string, found {found} bytes")]
    StringLength {
        /// Required length.
        expected: usize,
        /// Actual length.
        found: usize,
    },

    /// A list didn't have the number of children its type requires.
    #[error("expected list of {expected} items, found {found}")]
    ListLength {
        /// Required number of children.
        expected: usize,
        /// Actual number of children.
        found: usize,
    },
}

/// Wrapper result type.
pub type RlpResult<T> = Result<T, RlpError>;
