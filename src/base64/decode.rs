use super::alphabet::Base64Alphabet;
use crate::cursor::Cursor;
use crate::error::Error;

/// Lazy Base64-decoding view of a code-point cursor, itself a byte cursor.
///
/// Symbols are pulled four at a time (two to four at end of input) and
/// reassembled into one to three bytes. A group containing padding ends the
/// Base64 run: the decoder consumes exactly the symbols it validated and
/// leaves anything after them unconsumed in the inner cursor, so a caller
/// can observe trailing data through `has_next` on the inner cursor.
///
/// Invariant: the inner cursor always sits just past the symbols of the
/// buffered group; `syms_in_buf` records how many they were so backward
/// steps can rewind and re-decode the preceding (always full) group.
#[derive(Debug)]
pub struct Base64Decoding<C> {
    inner: C,
    alphabet: &'static Base64Alphabet,
    require_padding: bool,
    buf: [u8; 3],
    len: usize,
    pos: usize,
    syms_in_buf: usize,
    index: u64,
    /// A padded group was consumed; the run is over.
    done: bool,
}

impl<C: Cursor<Symbol = char>> Base64Decoding<C> {
    pub(crate) fn new(inner: C, alphabet: &'static Base64Alphabet, require_padding: bool) -> Self {
        Self {
            inner,
            alphabet,
            require_padding,
            buf: [0; 3],
            len: 0,
            pos: 0,
            syms_in_buf: 0,
            index: 0,
            done: false,
        }
    }

    /// Decode the next group into the byte buffer. Callers have already
    /// checked that the run is not done and the inner cursor has data.
    fn fill(&mut self) -> Result<(), Error> {
        let pad = self.alphabet.padding();

        let s0 = self.inner.next()?;
        if s0 == pad {
            return Err(Error::MalformedPadding("padding at start of group"));
        }
        let v0 = self.alphabet.value_for(s0)?;

        if !self.inner.has_next() {
            return Err(Error::IncompleteGroup(1));
        }
        let s1 = self.inner.next()?;
        if s1 == pad {
            return Err(Error::MalformedPadding("padding after a single symbol"));
        }
        let v1 = self.alphabet.value_for(s1)?;

        if !self.inner.has_next() {
            // Unpadded 2-symbol tail.
            if self.require_padding {
                return Err(Error::MalformedPadding("missing required padding"));
            }
            self.buf[0] = v0 << 2 | v1 >> 4;
            self.len = 1;
            self.syms_in_buf = 2;
            self.pos = 0;
            return Ok(());
        }
        let s2 = self.inner.next()?;
        if s2 == pad {
            // One byte, two padding symbols; the second must be present.
            if !self.inner.has_next() || self.inner.next()? != pad {
                return Err(Error::MalformedPadding("lone padding symbol in final group"));
            }
            self.buf[0] = v0 << 2 | v1 >> 4;
            self.len = 1;
            self.syms_in_buf = 4;
            self.pos = 0;
            self.done = true;
            return Ok(());
        }
        let v2 = self.alphabet.value_for(s2)?;

        if !self.inner.has_next() {
            // Unpadded 3-symbol tail.
            if self.require_padding {
                return Err(Error::MalformedPadding("missing required padding"));
            }
            self.buf[0] = v0 << 2 | v1 >> 4;
            self.buf[1] = (v1 & 0x0F) << 4 | v2 >> 2;
            self.len = 2;
            self.syms_in_buf = 3;
            self.pos = 0;
            return Ok(());
        }
        let s3 = self.inner.next()?;
        if s3 == pad {
            self.buf[0] = v0 << 2 | v1 >> 4;
            self.buf[1] = (v1 & 0x0F) << 4 | v2 >> 2;
            self.len = 2;
            self.syms_in_buf = 4;
            self.pos = 0;
            self.done = true;
            return Ok(());
        }
        let v3 = self.alphabet.value_for(s3)?;

        self.buf[0] = v0 << 2 | v1 >> 4;
        self.buf[1] = (v1 & 0x0F) << 4 | v2 >> 2;
        self.buf[2] = (v2 & 0x03) << 6 | v3;
        self.len = 3;
        self.syms_in_buf = 4;
        self.pos = 0;
        Ok(())
    }

    /// Unwrap the decoder, returning the inner cursor. After a fully drained
    /// run this sits immediately past the consumed Base64 input, so trailing
    /// symbols are still readable.
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// Rewind the inner cursor past the buffered group and the preceding
    /// full group of four data symbols, then re-decode that group.
    fn reload_previous_group(&mut self) -> Result<(), Error> {
        for _ in 0..self.syms_in_buf + 4 {
            self.inner.previous()?;
        }
        let v0 = self.alphabet.value_for(self.inner.next()?)?;
        let v1 = self.alphabet.value_for(self.inner.next()?)?;
        let v2 = self.alphabet.value_for(self.inner.next()?)?;
        let v3 = self.alphabet.value_for(self.inner.next()?)?;
        self.buf[0] = v0 << 2 | v1 >> 4;
        self.buf[1] = (v1 & 0x0F) << 4 | v2 >> 2;
        self.buf[2] = (v2 & 0x03) << 6 | v3;
        self.len = 3;
        self.syms_in_buf = 4;
        self.pos = 3;
        self.done = false;
        Ok(())
    }
}

impl<C: Cursor<Symbol = char>> Cursor for Base64Decoding<C> {
    type Symbol = u8;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.pos < self.len || (!self.done && self.inner.has_next())
    }

    #[inline]
    fn has_previous(&mut self) -> bool {
        self.index > 0
    }

    fn next(&mut self) -> Result<u8, Error> {
        if self.pos == self.len {
            if self.done || !self.inner.has_next() {
                return Err(Error::EndOfSequence);
            }
            self.fill()?;
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
            self.reload_previous_group()?;
        }
        self.pos -= 1;
        self.index -= 1;
        Ok(self.buf[self.pos])
    }

    fn peek_next(&mut self) -> Result<u8, Error> {
        if self.pos == self.len {
            if self.done || !self.inner.has_next() {
                return Err(Error::EndOfSequence);
            }
            self.fill()?;
        }
        Ok(self.buf[self.pos])
    }

    fn peek_previous(&mut self) -> Result<u8, Error> {
        if self.index == 0 {
            return Err(Error::EndOfSequence);
        }
        if self.pos == 0 {
            self.reload_previous_group()?;
        }
        Ok(self.buf[self.pos - 1])
    }

    /// Count of bytes decoded so far.
    #[inline]
    fn index(&self) -> u64 {
        self.index
    }
}
