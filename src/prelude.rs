//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use traverse::prelude::*;
//!
//! let encoded = of_bytes(b"foobar").base64_encode().drain_to_string().unwrap();
//! assert_eq!(encoded, "Zm9vYmFy");
//! ```

pub use crate::base64::{Base64Alphabet, Base64Variant, STANDARD, URL_SAFE};
pub use crate::cursor::{
    of_bytes, of_chars, of_string, ByteCursorExt, CodePointCursorExt, Cursor, EmptyBytes,
    EmptyCodePoints, Limited,
};
pub use crate::error::Error;
pub use crate::math::{multi_hash_ordered, multi_hash_unordered, round_to_power_of_two};
