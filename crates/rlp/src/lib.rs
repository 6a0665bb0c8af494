//! Recursive length-prefix (RLP) encoding.
//!
//! Items are byte strings or lists of items, each carrying its own length
//! prefix.  Encoding is total, decoding only accepts the canonical form, so
//! every value has exactly one encoding.  See [`Header`] for the prefix
//! layout.

mod buf_decoder;
pub use buf_decoder::BufDecoder;

mod errors;
pub use errors::{RlpError, RlpResult};

mod header;
pub use header::{EMPTY_LIST_CODE, EMPTY_STRING_CODE, Header, MAX_SHORT_LEN};

mod item;
pub use item::{MAX_DEPTH, RlpItem};

mod types;
pub use types::{Decodable, Encodable, Encoder, decode_list, encode_list, list_len};

mod macros;

mod util;
pub use util::{decode_buf_exact, decode_item, encode_to_vec};

// Used by the property tests under `tests/`.
#[cfg(test)]
use proptest as _;
