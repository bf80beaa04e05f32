//! Bidirectional, offset-tracked cursors.
//!
//! A [`Cursor`] walks an ordered sequence of symbols (bytes or code points)
//! in both directions while tracking an absolute offset. Decorators wrap an
//! inner cursor and satisfy the same contract, so views, case folding and
//! codecs all compose without special-casing.

mod bytes;
mod chars;
mod limited;

pub use bytes::{of_bytes, ByteSliceCursor, EmptyBytes};
pub use chars::{of_chars, of_string, CaseFold, CharSliceCursor, EmptyCodePoints, StrCursor};
pub use limited::Limited;

use crate::base64::{Base64Alphabet, Base64Decoding, Base64Encoding, STANDARD};
use crate::error::Error;
use crate::utf8::{Latin1Decoding, Latin1Encoding, Utf8Decoding, Utf8Encoding};

/// Bidirectional iteration over a sequence of symbols with a readable offset.
///
/// `next` always advances the offset by exactly one when it returns a value;
/// `previous` always decrements it by one. Calling either when the matching
/// predicate is false fails with [`Error::EndOfSequence`] rather than
/// returning a sentinel.
///
/// The predicates take `&mut self` because decorator chains may need to
/// probe the inner cursor to answer; they never move the observable offset.
pub trait Cursor {
    type Symbol: Copy + Eq;

    /// True if a forward step would succeed.
    fn has_next(&mut self) -> bool;

    /// True if a backward step would succeed.
    fn has_previous(&mut self) -> bool;

    /// Consume and return the current symbol, advancing the offset by one.
    fn next(&mut self) -> Result<Self::Symbol, Error>;

    /// Move back one symbol and return the now-current symbol.
    fn previous(&mut self) -> Result<Self::Symbol, Error>;

    /// Look at the next symbol without moving.
    fn peek_next(&mut self) -> Result<Self::Symbol, Error>;

    /// Look at the previous symbol without moving.
    fn peek_previous(&mut self) -> Result<Self::Symbol, Error>;

    /// Absolute offset from the start of the original sequence.
    ///
    /// Decorators that define their own window report the window-relative
    /// offset instead of the inner cursor's.
    fn index(&self) -> u64;

    /// Restrict this cursor to a window of at most `size` symbols starting
    /// at the current position.
    fn limited_to(self, size: u64) -> Limited<Self>
    where
        Self: Sized,
    {
        Limited::new(self, size)
    }

    /// Eagerly consume all remaining symbols into an owned buffer.
    fn drain(mut self) -> Result<Vec<Self::Symbol>, Error>
    where
        Self: Sized,
    {
        let mut out = Vec::new();
        while self.has_next() {
            out.push(self.next()?);
        }
        Ok(out)
    }
}

/// Adapters available on byte cursors.
pub trait ByteCursorExt: Cursor<Symbol = u8> + Sized {
    /// Base64-encode with the standard alphabet and padding enabled.
    fn base64_encode(self) -> Base64Encoding<Self> {
        Base64Encoding::new(self, &STANDARD, true)
    }

    /// Base64-encode with an explicit alphabet and padding setting.
    fn base64_encode_with(
        self,
        alphabet: &'static Base64Alphabet,
        with_padding: bool,
    ) -> Base64Encoding<Self> {
        Base64Encoding::new(self, alphabet, with_padding)
    }

    /// Decode this byte cursor as UTF-8, yielding code points.
    fn as_utf8_chars(self) -> Utf8Decoding<Self> {
        Utf8Decoding::new(self)
    }

    /// Project each byte to the code point with the same value (Latin-1).
    fn as_latin1_chars(self) -> Latin1Decoding<Self> {
        Latin1Decoding::new(self)
    }
}

impl<C: Cursor<Symbol = u8>> ByteCursorExt for C {}

/// Adapters available on code-point cursors.
pub trait CodePointCursorExt: Cursor<Symbol = char> + Sized {
    /// Base64-decode with the standard alphabet; padding not required.
    fn base64_decode(self) -> Base64Decoding<Self> {
        Base64Decoding::new(self, &STANDARD, false)
    }

    /// Base64-decode with an explicit alphabet and padding requirement.
    fn base64_decode_with(
        self,
        alphabet: &'static Base64Alphabet,
        require_padding: bool,
    ) -> Base64Decoding<Self> {
        Base64Decoding::new(self, alphabet, require_padding)
    }

    /// Encode each code point as UTF-8, yielding bytes.
    fn as_utf8(self) -> Utf8Encoding<Self> {
        Utf8Encoding::new(self)
    }

    /// Project each code point below U+0100 to a single byte (Latin-1).
    fn as_latin1(self) -> Latin1Encoding<Self> {
        Latin1Encoding::new(self)
    }

    /// Fold each symbol to ASCII lowercase on the fly.
    fn to_ascii_lower_case(self) -> CaseFold<Self> {
        CaseFold::lower(self)
    }

    /// Fold each symbol to ASCII uppercase on the fly.
    fn to_ascii_upper_case(self) -> CaseFold<Self> {
        CaseFold::upper(self)
    }

    /// Eagerly consume all remaining code points into an owned string.
    fn drain_to_string(mut self) -> Result<String, Error> {
        let mut out = String::new();
        while self.has_next() {
            out.push(self.next()?);
        }
        Ok(out)
    }
}

impl<C: Cursor<Symbol = char>> CodePointCursorExt for C {}
