//! UTF-8 and Latin-1 transcoding between code-point and byte cursors.
//!
//! Both directions are lazy cursor decorators. Encoding from `char` cannot
//! produce an out-of-range code point, so only traversal errors surface;
//! decoding validates leading and continuation bytes and rejects sequences
//! that do not denote a Unicode scalar value.

use crate::cursor::Cursor;
use crate::error::Error;

/// Lazy UTF-8 encoding view of a code-point cursor, itself a byte cursor.
///
/// Emits one to four bytes per scalar value. Invariant: the inner cursor
/// sits just past the code point currently buffered.
#[derive(Debug)]
pub struct Utf8Encoding<C> {
    inner: C,
    buf: [u8; 4],
    len: usize,
    pos: usize,
    index: u64,
}

impl<C: Cursor<Symbol = char>> Utf8Encoding<C> {
    pub(crate) fn new(inner: C) -> Self {
        Self {
            inner,
            buf: [0; 4],
            len: 0,
            pos: 0,
            index: 0,
        }
    }

    fn load(&mut self, ch: char) {
        self.len = ch.encode_utf8(&mut self.buf).len();
    }

    /// Step the inner cursor back one code point and re-encode it.
    fn reload_previous_char(&mut self) -> Result<(), Error> {
        self.inner.previous()?;
        let ch = self.inner.peek_previous()?;
        self.load(ch);
        self.pos = self.len;
        Ok(())
    }
}

impl<C: Cursor<Symbol = char>> Cursor for Utf8Encoding<C> {
    type Symbol = u8;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.pos < self.len || self.inner.has_next()
    }

    #[inline]
    fn has_previous(&mut self) -> bool {
        self.index > 0
    }

    fn next(&mut self) -> Result<u8, Error> {
        if self.pos == self.len {
            let ch = self.inner.next()?;
            self.load(ch);
            self.pos = 0;
        }
        let byte = self.buf[self.pos];
        self.pos += 1;
        self.index += 1;
        Ok(byte)
    }

    fn previous(&mut self) -> Result<u8, Error> {
        if self.index == 0 {
            return Err(Error::EndOfSequence);
        }
        if self.pos == 0 {
            self.reload_previous_char()?;
        }
        self.pos -= 1;
        self.index -= 1;
        Ok(self.buf[self.pos])
    }

    fn peek_next(&mut self) -> Result<u8, Error> {
        if self.pos == self.len {
            let ch = self.inner.next()?;
            self.load(ch);
            self.pos = 0;
        }
        Ok(self.buf[self.pos])
    }

    fn peek_previous(&mut self) -> Result<u8, Error> {
        if self.index == 0 {
            return Err(Error::EndOfSequence);
        }
        if self.pos == 0 {
            self.reload_previous_char()?;
        }
        Ok(self.buf[self.pos - 1])
    }

    /// Count of bytes emitted so far.
    #[inline]
    fn index(&self) -> u64 {
        self.index
    }
}

/// Lazy UTF-8 decoding view of a byte cursor, itself a code-point cursor.
///
/// The leading byte fixes the sequence length; each following byte must
/// match `10xxxxxx`. Truncated or malformed sequences, bare continuation
/// bytes, 5/6-byte legacy leaders and reassemblies outside the scalar-value
/// range fail with [`Error::InvalidEncoding`].
#[derive(Debug)]
pub struct Utf8Decoding<C> {
    inner: C,
    buffered: Option<char>,
    /// Bytes consumed for the buffered code point.
    bytes_in_buf: usize,
    /// True when the buffered code point has been emitted.
    consumed: bool,
    index: u64,
}

impl<C: Cursor<Symbol = u8>> Utf8Decoding<C> {
    pub(crate) fn new(inner: C) -> Self {
        Self {
            inner,
            buffered: None,
            bytes_in_buf: 0,
            consumed: false,
            index: 0,
        }
    }

    /// Decode one code point forward from the inner cursor.
    fn fill(&mut self) -> Result<char, Error> {
        let b0 = self.inner.next()?;
        let (total, init) = match b0 {
            0x00..=0x7F => (1, b0 as u32),
            0x80..=0xBF => {
                return Err(Error::InvalidEncoding("continuation byte with no leader"))
            }
            0xC0..=0xDF => (2, (b0 & 0x1F) as u32),
            0xE0..=0xEF => (3, (b0 & 0x0F) as u32),
            0xF0..=0xF7 => (4, (b0 & 0x07) as u32),
            _ => return Err(Error::InvalidEncoding("invalid leading byte")),
        };
        let mut code_point = init;
        for _ in 1..total {
            if !self.inner.has_next() {
                return Err(Error::InvalidEncoding("truncated multi-byte sequence"));
            }
            let b = self.inner.next()?;
            if b & 0xC0 != 0x80 {
                return Err(Error::InvalidEncoding("malformed continuation byte"));
            }
            code_point = code_point << 6 | (b & 0x3F) as u32;
        }
        let ch = char::from_u32(code_point)
            .ok_or(Error::InvalidEncoding("not a Unicode scalar value"))?;
        self.buffered = Some(ch);
        self.bytes_in_buf = total;
        Ok(ch)
    }

    /// Rewind the inner cursor across the buffered code point and the one
    /// before it, then re-decode that earlier code point.
    fn reload_previous_char(&mut self) -> Result<char, Error> {
        for _ in 0..self.bytes_in_buf {
            self.inner.previous()?;
        }
        // Scan back over continuation bytes to the previous leading byte.
        let mut steps = 1;
        while self.inner.previous()? & 0xC0 == 0x80 {
            steps += 1;
            if steps > 4 {
                return Err(Error::InvalidEncoding("continuation byte with no leader"));
            }
        }
        self.fill()
    }
}

impl<C: Cursor<Symbol = u8>> Cursor for Utf8Decoding<C> {
    type Symbol = char;

    #[inline]
    fn has_next(&mut self) -> bool {
        matches!(self.buffered, Some(_) if !self.consumed) || self.inner.has_next()
    }

    #[inline]
    fn has_previous(&mut self) -> bool {
        self.index > 0
    }

    fn next(&mut self) -> Result<char, Error> {
        let ch = match self.buffered {
            Some(ch) if !self.consumed => ch,
            _ => {
                if !self.inner.has_next() {
                    return Err(Error::EndOfSequence);
                }
                self.fill()?
            }
        };
        self.consumed = true;
        self.index += 1;
        Ok(ch)
    }

    fn previous(&mut self) -> Result<char, Error> {
        if self.index == 0 {
            return Err(Error::EndOfSequence);
        }
        let ch = if self.consumed {
            // Step back to the start of the buffered code point.
            self.buffered.ok_or(Error::EndOfSequence)?
        } else {
            self.reload_previous_char()?
        };
        self.consumed = false;
        self.index -= 1;
        Ok(ch)
    }

    fn peek_next(&mut self) -> Result<char, Error> {
        match self.buffered {
            Some(ch) if !self.consumed => Ok(ch),
            _ => {
                if !self.inner.has_next() {
                    return Err(Error::EndOfSequence);
                }
                let ch = self.fill()?;
                self.consumed = false;
                Ok(ch)
            }
        }
    }

    fn peek_previous(&mut self) -> Result<char, Error> {
        if self.index == 0 {
            return Err(Error::EndOfSequence);
        }
        if self.consumed {
            return self.buffered.ok_or(Error::EndOfSequence);
        }
        // Re-buffer the preceding code point; the logical position is after
        // it, so it stays marked consumed.
        let ch = self.reload_previous_char()?;
        self.consumed = true;
        Ok(ch)
    }

    /// Count of code points decoded so far.
    #[inline]
    fn index(&self) -> u64 {
        self.index
    }
}

/// Latin-1 projection of a code-point cursor onto bytes.
///
/// One byte per code point; scalar values at or above U+0100 fail with
/// [`Error::InvalidCodePoint`]. Positioning delegates to the inner cursor.
#[derive(Debug)]
pub struct Latin1Encoding<C> {
    inner: C,
}

impl<C: Cursor<Symbol = char>> Latin1Encoding<C> {
    pub(crate) fn new(inner: C) -> Self {
        Self { inner }
    }
}

fn latin1_byte(ch: char) -> Result<u8, Error> {
    let code_point = ch as u32;
    if code_point >= 0x100 {
        return Err(Error::InvalidCodePoint(code_point));
    }
    Ok(code_point as u8)
}

impl<C: Cursor<Symbol = char>> Cursor for Latin1Encoding<C> {
    type Symbol = u8;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.inner.has_next()
    }

    #[inline]
    fn has_previous(&mut self) -> bool {
        self.inner.has_previous()
    }

    fn next(&mut self) -> Result<u8, Error> {
        latin1_byte(self.inner.next()?)
    }

    fn previous(&mut self) -> Result<u8, Error> {
        latin1_byte(self.inner.previous()?)
    }

    fn peek_next(&mut self) -> Result<u8, Error> {
        latin1_byte(self.inner.peek_next()?)
    }

    fn peek_previous(&mut self) -> Result<u8, Error> {
        latin1_byte(self.inner.peek_previous()?)
    }

    #[inline]
    fn index(&self) -> u64 {
        self.inner.index()
    }
}

/// Latin-1 projection of a byte cursor onto code points. Total: every byte
/// maps to the code point of the same value.
#[derive(Debug)]
pub struct Latin1Decoding<C> {
    inner: C,
}

impl<C: Cursor<Symbol = u8>> Latin1Decoding<C> {
    pub(crate) fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Cursor<Symbol = u8>> Cursor for Latin1Decoding<C> {
    type Symbol = char;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.inner.has_next()
    }

    #[inline]
    fn has_previous(&mut self) -> bool {
        self.inner.has_previous()
    }

    fn next(&mut self) -> Result<char, Error> {
        self.inner.next().map(char::from)
    }

    fn previous(&mut self) -> Result<char, Error> {
        self.inner.previous().map(char::from)
    }

    fn peek_next(&mut self) -> Result<char, Error> {
        self.inner.peek_next().map(char::from)
    }

    fn peek_previous(&mut self) -> Result<char, Error> {
        self.inner.peek_previous().map(char::from)
    }

    #[inline]
    fn index(&self) -> u64 {
        self.inner.index()
    }
}

#[cfg(test)]
mod tests {
    use crate::cursor::{of_bytes, of_string, ByteCursorExt, CodePointCursorExt, Cursor};
    use crate::error::Error;

    #[test]
    fn test_encode_all_sequence_lengths() {
        // 1, 2, 3 and 4 byte forms
        let text = "aé中🂡";
        let bytes = of_string(text).as_utf8().drain().unwrap();
        assert_eq!(bytes, text.as_bytes());
    }

    #[test]
    fn test_decode_all_sequence_lengths() {
        let text = "aé中🂡";
        let decoded = of_bytes(text.as_bytes())
            .as_utf8_chars()
            .drain_to_string()
            .unwrap();
        assert_eq!(decoded, text);
    }

    #[test]
    fn test_encode_index_counts_bytes() {
        let mut encoded = of_string("é").as_utf8();
        assert_eq!(encoded.next().unwrap(), 0xC3);
        assert_eq!(encoded.next().unwrap(), 0xA9);
        assert_eq!(encoded.index(), 2);
        assert!(!encoded.has_next());
    }

    #[test]
    fn test_encode_backward() {
        let mut encoded = of_string("aé").as_utf8();
        let forward = [
            encoded.next().unwrap(),
            encoded.next().unwrap(),
            encoded.next().unwrap(),
        ];
        assert_eq!(forward, [b'a', 0xC3, 0xA9]);
        assert_eq!(encoded.previous().unwrap(), 0xA9);
        assert_eq!(encoded.previous().unwrap(), 0xC3);
        assert_eq!(encoded.previous().unwrap(), b'a');
        assert_eq!(encoded.previous(), Err(Error::EndOfSequence));
        assert_eq!(encoded.index(), 0);
        assert_eq!(encoded.next().unwrap(), b'a');
    }

    #[test]
    fn test_decode_backward() {
        let bytes = "xé🂡".as_bytes();
        let mut decoded = of_bytes(bytes).as_utf8_chars();
        while decoded.has_next() {
            decoded.next().unwrap();
        }
        assert_eq!(decoded.previous().unwrap(), '🂡');
        assert_eq!(decoded.previous().unwrap(), 'é');
        assert_eq!(decoded.previous().unwrap(), 'x');
        assert_eq!(decoded.index(), 0);
        assert_eq!(decoded.next().unwrap(), 'x');
        assert_eq!(decoded.next().unwrap(), 'é');
    }

    #[test]
    fn test_decode_peeks() {
        let mut decoded = of_bytes("ab".as_bytes()).as_utf8_chars();
        assert_eq!(decoded.peek_next().unwrap(), 'a');
        assert_eq!(decoded.index(), 0);
        assert_eq!(decoded.next().unwrap(), 'a');
        assert_eq!(decoded.peek_previous().unwrap(), 'a');
        assert_eq!(decoded.peek_next().unwrap(), 'b');
        assert_eq!(decoded.index(), 1);
    }

    #[test]
    fn test_decode_truncated_sequence() {
        assert_eq!(
            of_bytes(&[0xC3]).as_utf8_chars().drain(),
            Err(Error::InvalidEncoding("truncated multi-byte sequence"))
        );
        assert_eq!(
            of_bytes(&[0xE4, 0xB8]).as_utf8_chars().drain(),
            Err(Error::InvalidEncoding("truncated multi-byte sequence"))
        );
    }

    #[test]
    fn test_decode_malformed_continuation() {
        assert_eq!(
            of_bytes(&[0xC3, 0x28]).as_utf8_chars().drain(),
            Err(Error::InvalidEncoding("malformed continuation byte"))
        );
    }

    #[test]
    fn test_decode_bare_continuation_byte() {
        assert_eq!(
            of_bytes(&[0x80]).as_utf8_chars().drain(),
            Err(Error::InvalidEncoding("continuation byte with no leader"))
        );
    }

    #[test]
    fn test_decode_legacy_long_forms_rejected() {
        // 5- and 6-byte leaders from pre-2003 UTF-8
        assert_eq!(
            of_bytes(&[0xF8, 0x80, 0x80, 0x80, 0x80]).as_utf8_chars().drain(),
            Err(Error::InvalidEncoding("invalid leading byte"))
        );
        assert_eq!(
            of_bytes(&[0xFC, 0x80]).as_utf8_chars().drain(),
            Err(Error::InvalidEncoding("invalid leading byte"))
        );
    }

    #[test]
    fn test_decode_surrogate_rejected() {
        // U+D800 encoded as UTF-8
        assert_eq!(
            of_bytes(&[0xED, 0xA0, 0x80]).as_utf8_chars().drain(),
            Err(Error::InvalidEncoding("not a Unicode scalar value"))
        );
    }

    #[test]
    fn test_decode_above_unicode_range_rejected() {
        // F4 90 80 80 would be U+110000
        assert_eq!(
            of_bytes(&[0xF4, 0x90, 0x80, 0x80]).as_utf8_chars().drain(),
            Err(Error::InvalidEncoding("not a Unicode scalar value"))
        );
    }

    #[test]
    fn test_latin1_round_trip() {
        let text = "caf\u{e9} \u{ff}";
        let bytes = of_string(text).as_latin1().drain().unwrap();
        assert_eq!(bytes, [b'c', b'a', b'f', 0xE9, b' ', 0xFF]);
        let back = of_bytes(&bytes).as_latin1_chars().drain_to_string().unwrap();
        assert_eq!(back, text);
    }

    #[test]
    fn test_latin1_rejects_wide_code_point() {
        assert_eq!(
            of_string("中").as_latin1().drain(),
            Err(Error::InvalidCodePoint(0x4E2D))
        );
    }

    #[test]
    fn test_latin1_bidirectional_delegation() {
        let mut projected = of_bytes(&[0x41, 0xE9]).as_latin1_chars();
        assert_eq!(projected.next().unwrap(), 'A');
        assert_eq!(projected.next().unwrap(), 'é');
        assert_eq!(projected.previous().unwrap(), 'é');
        assert_eq!(projected.index(), 1);
    }

    #[test]
    fn test_transcode_idempotence() {
        let text = "abc123xyz987 ěščřžýáíé 🂡🀄 中文測試";
        let round_tripped = of_string(text)
            .as_utf8()
            .as_utf8_chars()
            .drain_to_string()
            .unwrap();
        assert_eq!(round_tripped, text);
    }
}
