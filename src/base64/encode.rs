use super::alphabet::Base64Alphabet;
use crate::cursor::Cursor;
use crate::error::Error;

/// Lazy Base64-encoding view of a byte cursor, itself a code-point cursor.
///
/// Bytes are pulled from the inner cursor three at a time and sliced into
/// four 6-bit symbols; a final partial group emits two or three symbols plus
/// padding when enabled. Only the current group is buffered.
///
/// Invariant: the inner cursor always sits just past the bytes of the
/// buffered group, so forward refills read the next group in place and
/// backward steps across a group boundary can rewind and re-encode the
/// preceding (always full) group.
#[derive(Debug)]
pub struct Base64Encoding<C> {
    inner: C,
    alphabet: &'static Base64Alphabet,
    with_padding: bool,
    buf: [char; 4],
    len: usize,
    pos: usize,
    bytes_in_buf: usize,
    index: u64,
}

impl<C: Cursor<Symbol = u8>> Base64Encoding<C> {
    pub(crate) fn new(inner: C, alphabet: &'static Base64Alphabet, with_padding: bool) -> Self {
        Self {
            inner,
            alphabet,
            with_padding,
            buf: ['\0'; 4],
            len: 0,
            pos: 0,
            bytes_in_buf: 0,
            index: 0,
        }
    }

    /// Encode the next group of up to three bytes into the symbol buffer.
    /// Returns false on clean end of input.
    fn fill(&mut self) -> Result<bool, Error> {
        if !self.inner.has_next() {
            return Ok(false);
        }
        let b0 = self.inner.next()?;
        let b1 = if self.inner.has_next() {
            Some(self.inner.next()?)
        } else {
            None
        };
        let b2 = match b1 {
            Some(_) if self.inner.has_next() => Some(self.inner.next()?),
            _ => None,
        };

        self.buf[0] = self.alphabet.symbol_for(b0 >> 2);
        match (b1, b2) {
            (Some(b1), Some(b2)) => {
                self.buf[1] = self.alphabet.symbol_for((b0 & 0x03) << 4 | b1 >> 4);
                self.buf[2] = self.alphabet.symbol_for((b1 & 0x0F) << 2 | b2 >> 6);
                self.buf[3] = self.alphabet.symbol_for(b2 & 0x3F);
                self.len = 4;
                self.bytes_in_buf = 3;
            }
            (Some(b1), None) => {
                self.buf[1] = self.alphabet.symbol_for((b0 & 0x03) << 4 | b1 >> 4);
                self.buf[2] = self.alphabet.symbol_for((b1 & 0x0F) << 2);
                self.len = if self.with_padding {
                    self.buf[3] = self.alphabet.padding();
                    4
                } else {
                    3
                };
                self.bytes_in_buf = 2;
            }
            (None, _) => {
                self.buf[1] = self.alphabet.symbol_for((b0 & 0x03) << 4);
                self.len = if self.with_padding {
                    self.buf[2] = self.alphabet.padding();
                    self.buf[3] = self.alphabet.padding();
                    4
                } else {
                    2
                };
                self.bytes_in_buf = 1;
            }
        }
        self.pos = 0;
        Ok(true)
    }

    /// Rewind the inner cursor past the buffered group and the preceding
    /// full group, then re-encode that preceding group into the buffer.
    fn reload_previous_group(&mut self) -> Result<(), Error> {
        for _ in 0..self.bytes_in_buf + 3 {
            self.inner.previous()?;
        }
        let b0 = self.inner.next()?;
        let b1 = self.inner.next()?;
        let b2 = self.inner.next()?;
        self.buf[0] = self.alphabet.symbol_for(b0 >> 2);
        self.buf[1] = self.alphabet.symbol_for((b0 & 0x03) << 4 | b1 >> 4);
        self.buf[2] = self.alphabet.symbol_for((b1 & 0x0F) << 2 | b2 >> 6);
        self.buf[3] = self.alphabet.symbol_for(b2 & 0x3F);
        self.len = 4;
        self.bytes_in_buf = 3;
        self.pos = 4;
        Ok(())
    }
}

impl<C: Cursor<Symbol = u8>> Cursor for Base64Encoding<C> {
    type Symbol = char;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.pos < self.len || self.inner.has_next()
    }

    #[inline]
    fn has_previous(&mut self) -> bool {
        self.index > 0
    }

    fn next(&mut self) -> Result<char, Error> {
        if self.pos == self.len && !self.fill()? {
            return Err(Error::EndOfSequence);
        }
        let symbol = self.buf[self.pos];
        self.pos += 1;
        self.index += 1;
        Ok(symbol)
    }

    fn previous(&mut self) -> Result<char, Error> {
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

    fn peek_next(&mut self) -> Result<char, Error> {
        if self.pos == self.len && !self.fill()? {
            return Err(Error::EndOfSequence);
        }
        Ok(self.buf[self.pos])
    }

    fn peek_previous(&mut self) -> Result<char, Error> {
        if self.index == 0 {
            return Err(Error::EndOfSequence);
        }
        if self.pos == 0 {
            self.reload_previous_group()?;
        }
        Ok(self.buf[self.pos - 1])
    }

    /// Count of symbols emitted so far, padding included.
    #[inline]
    fn index(&self) -> u64 {
        self.index
    }
}
