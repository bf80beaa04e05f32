use super::Cursor;
use crate::error::Error;

/// Cursor over a borrowed byte slice.
///
/// The cursor never takes ownership of the buffer; it tracks a position and
/// reads in place.
#[derive(Debug, Clone)]
pub struct ByteSliceCursor<'a> {
    bytes: &'a [u8],
    index: usize,
}

impl<'a> ByteSliceCursor<'a> {
    /// Create a cursor positioned at the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, index: 0 }
    }
}

/// Cursor over a byte slice, positioned at the start.
#[inline]
pub fn of_bytes(bytes: &[u8]) -> ByteSliceCursor<'_> {
    ByteSliceCursor::new(bytes)
}

impl Cursor for ByteSliceCursor<'_> {
    type Symbol = u8;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.index < self.bytes.len()
    }

    #[inline]
    fn has_previous(&mut self) -> bool {
        self.index > 0
    }

    fn next(&mut self) -> Result<u8, Error> {
        let byte = *self.bytes.get(self.index).ok_or(Error::EndOfSequence)?;
        self.index += 1;
        Ok(byte)
    }

    fn previous(&mut self) -> Result<u8, Error> {
        if self.index == 0 {
            return Err(Error::EndOfSequence);
        }
        self.index -= 1;
        Ok(self.bytes[self.index])
    }

    fn peek_next(&mut self) -> Result<u8, Error> {
        self.bytes.get(self.index).copied().ok_or(Error::EndOfSequence)
    }

    fn peek_previous(&mut self) -> Result<u8, Error> {
        if self.index == 0 {
            return Err(Error::EndOfSequence);
        }
        Ok(self.bytes[self.index - 1])
    }

    #[inline]
    fn index(&self) -> u64 {
        self.index as u64
    }
}

/// Canonical empty byte cursor: both predicates are always false.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyBytes;

impl Cursor for EmptyBytes {
    type Symbol = u8;

    #[inline]
    fn has_next(&mut self) -> bool {
        false
    }

    #[inline]
    fn has_previous(&mut self) -> bool {
        false
    }

    fn next(&mut self) -> Result<u8, Error> {
        Err(Error::EndOfSequence)
    }

    fn previous(&mut self) -> Result<u8, Error> {
        Err(Error::EndOfSequence)
    }

    fn peek_next(&mut self) -> Result<u8, Error> {
        Err(Error::EndOfSequence)
    }

    fn peek_previous(&mut self) -> Result<u8, Error> {
        Err(Error::EndOfSequence)
    }

    #[inline]
    fn index(&self) -> u64 {
        0
    }
}
