use super::Cursor;
use crate::error::Error;

/// Bounded view over an inner cursor.
///
/// Restricts traversal to a window of at most `size` symbols starting at the
/// inner cursor's position when the view was created, and presents a fresh
/// offset starting at 0. The view's lower bound is its own start: `previous`
/// at offset 0 fails even if the inner cursor could still go back further.
///
/// The constructor does not check that the inner cursor actually has `size`
/// symbols left; a short inner cursor is caught lazily by `has_next`.
#[derive(Debug, Clone)]
pub struct Limited<C> {
    inner: C,
    size: u64,
    offset: u64,
}

impl<C> Limited<C> {
    pub(crate) fn new(inner: C, size: u64) -> Self {
        Self {
            inner,
            size,
            offset: 0,
        }
    }
}

impl<C: Cursor> Cursor for Limited<C> {
    type Symbol = C::Symbol;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.offset < self.size && self.inner.has_next()
    }

    #[inline]
    fn has_previous(&mut self) -> bool {
        self.offset > 0
    }

    fn next(&mut self) -> Result<Self::Symbol, Error> {
        if !self.has_next() {
            return Err(Error::EndOfSequence);
        }
        self.offset += 1;
        self.inner.next()
    }

    fn previous(&mut self) -> Result<Self::Symbol, Error> {
        if self.offset == 0 {
            return Err(Error::EndOfSequence);
        }
        self.offset -= 1;
        self.inner.previous()
    }

    fn peek_next(&mut self) -> Result<Self::Symbol, Error> {
        if !self.has_next() {
            return Err(Error::EndOfSequence);
        }
        self.inner.peek_next()
    }

    fn peek_previous(&mut self) -> Result<Self::Symbol, Error> {
        if self.offset == 0 {
            return Err(Error::EndOfSequence);
        }
        self.inner.peek_previous()
    }

    /// Window-relative offset, not the inner cursor's absolute offset.
    #[inline]
    fn index(&self) -> u64 {
        self.offset
    }
}
