//! Traverse: bidirectional, offset-tracked cursors over bytes and Unicode
//! code points, with streaming Base64 and UTF-8 codecs built on top.
//!
//! Everything is pull-based: a source cursor is wrapped by zero or more
//! decorators (bounded views, case folding, codecs) and consumed lazily;
//! nothing buffers the whole input unless `drain` is called explicitly.

pub mod base64;
pub mod cursor;
pub mod math;
pub mod prelude;
pub mod utf8;

mod error;

pub use error::Error;

// Re-export the public surface most consumers need, so constructors and the
// cursor traits are available as `traverse::of_bytes`, `traverse::Cursor`,
// etc.
pub use base64::{Base64Alphabet, Base64Variant, STANDARD, URL_SAFE};
pub use cursor::{of_bytes, of_chars, of_string, ByteCursorExt, CodePointCursorExt, Cursor};
