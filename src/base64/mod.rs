//! Streaming Base64 codec.
//!
//! Encoding and decoding are lazy cursor decorators driven by `next`; no
//! whole-input buffering happens unless the caller drains. Alphabets are
//! pluggable and padding is optional, per RFC 4648.

mod alphabet;
mod decode;
mod encode;

pub use alphabet::{Base64Alphabet, Base64Variant, STANDARD, URL_SAFE};
pub use decode::Base64Decoding;
pub use encode::Base64Encoding;
