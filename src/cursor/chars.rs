use super::Cursor;
use crate::error::Error;

/// Cursor over the code points of a borrowed string.
///
/// One step per Unicode scalar value: the offset counts code points, never
/// UTF-8 (or UTF-16) storage units, so supplementary-plane characters are
/// a single step.
#[derive(Debug, Clone)]
pub struct StrCursor<'a> {
    text: &'a str,
    byte_pos: usize,
    index: u64,
}

impl<'a> StrCursor<'a> {
    /// Create a cursor positioned at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            byte_pos: 0,
            index: 0,
        }
    }
}

/// Code-point cursor over a string slice, positioned at the start.
#[inline]
pub fn of_string(text: &str) -> StrCursor<'_> {
    StrCursor::new(text)
}

impl Cursor for StrCursor<'_> {
    type Symbol = char;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.byte_pos < self.text.len()
    }

    #[inline]
    fn has_previous(&mut self) -> bool {
        self.byte_pos > 0
    }

    fn next(&mut self) -> Result<char, Error> {
        let ch = self.text[self.byte_pos..]
            .chars()
            .next()
            .ok_or(Error::EndOfSequence)?;
        self.byte_pos += ch.len_utf8();
        self.index += 1;
        Ok(ch)
    }

    fn previous(&mut self) -> Result<char, Error> {
        let ch = self.text[..self.byte_pos]
            .chars()
            .next_back()
            .ok_or(Error::EndOfSequence)?;
        self.byte_pos -= ch.len_utf8();
        self.index -= 1;
        Ok(ch)
    }

    fn peek_next(&mut self) -> Result<char, Error> {
        self.text[self.byte_pos..]
            .chars()
            .next()
            .ok_or(Error::EndOfSequence)
    }

    fn peek_previous(&mut self) -> Result<char, Error> {
        self.text[..self.byte_pos]
            .chars()
            .next_back()
            .ok_or(Error::EndOfSequence)
    }

    #[inline]
    fn index(&self) -> u64 {
        self.index
    }
}

/// Cursor over a borrowed slice of code points.
#[derive(Debug, Clone)]
pub struct CharSliceCursor<'a> {
    chars: &'a [char],
    index: usize,
}

impl<'a> CharSliceCursor<'a> {
    /// Create a cursor positioned at the start of `chars`.
    pub fn new(chars: &'a [char]) -> Self {
        Self { chars, index: 0 }
    }
}

/// Code-point cursor over a char slice, positioned at the start.
#[inline]
pub fn of_chars(chars: &[char]) -> CharSliceCursor<'_> {
    CharSliceCursor::new(chars)
}

impl Cursor for CharSliceCursor<'_> {
    type Symbol = char;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.index < self.chars.len()
    }

    #[inline]
    fn has_previous(&mut self) -> bool {
        self.index > 0
    }

    fn next(&mut self) -> Result<char, Error> {
        let ch = *self.chars.get(self.index).ok_or(Error::EndOfSequence)?;
        self.index += 1;
        Ok(ch)
    }

    fn previous(&mut self) -> Result<char, Error> {
        if self.index == 0 {
            return Err(Error::EndOfSequence);
        }
        self.index -= 1;
        Ok(self.chars[self.index])
    }

    fn peek_next(&mut self) -> Result<char, Error> {
        self.chars.get(self.index).copied().ok_or(Error::EndOfSequence)
    }

    fn peek_previous(&mut self) -> Result<char, Error> {
        if self.index == 0 {
            return Err(Error::EndOfSequence);
        }
        Ok(self.chars[self.index - 1])
    }

    #[inline]
    fn index(&self) -> u64 {
        self.index as u64
    }
}

/// Canonical empty code-point cursor.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCodePoints;

impl Cursor for EmptyCodePoints {
    type Symbol = char;

    #[inline]
    fn has_next(&mut self) -> bool {
        false
    }

    #[inline]
    fn has_previous(&mut self) -> bool {
        false
    }

    fn next(&mut self) -> Result<char, Error> {
        Err(Error::EndOfSequence)
    }

    fn previous(&mut self) -> Result<char, Error> {
        Err(Error::EndOfSequence)
    }

    fn peek_next(&mut self) -> Result<char, Error> {
        Err(Error::EndOfSequence)
    }

    fn peek_previous(&mut self) -> Result<char, Error> {
        Err(Error::EndOfSequence)
    }

    #[inline]
    fn index(&self) -> u64 {
        0
    }
}

/// Transformation decorator folding each code point to ASCII upper or lower
/// case; positioning and offset delegate to the inner cursor untouched.
#[derive(Debug, Clone)]
pub struct CaseFold<C> {
    inner: C,
    upper: bool,
}

impl<C> CaseFold<C> {
    pub(crate) fn lower(inner: C) -> Self {
        Self { inner, upper: false }
    }

    pub(crate) fn upper(inner: C) -> Self {
        Self { inner, upper: true }
    }

    #[inline]
    fn fold(&self, ch: char) -> char {
        if self.upper {
            ch.to_ascii_uppercase()
        } else {
            ch.to_ascii_lowercase()
        }
    }
}

impl<C: Cursor<Symbol = char>> Cursor for CaseFold<C> {
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
        self.inner.next().map(|ch| self.fold(ch))
    }

    fn previous(&mut self) -> Result<char, Error> {
        self.inner.previous().map(|ch| self.fold(ch))
    }

    fn peek_next(&mut self) -> Result<char, Error> {
        self.inner.peek_next().map(|ch| self.fold(ch))
    }

    fn peek_previous(&mut self) -> Result<char, Error> {
        self.inner.peek_previous().map(|ch| self.fold(ch))
    }

    #[inline]
    fn index(&self) -> u64 {
        self.inner.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::CodePointCursorExt;

    #[test]
    fn test_str_cursor_counts_code_points() {
        // "a" + cyrillic + CJK + supplementary-plane emoji
        let mut cursor = of_string("aи中🂡");
        assert_eq!(cursor.next().unwrap(), 'a');
        assert_eq!(cursor.next().unwrap(), 'и');
        assert_eq!(cursor.next().unwrap(), '中');
        assert_eq!(cursor.index(), 3);
        assert_eq!(cursor.next().unwrap(), '🂡');
        assert_eq!(cursor.index(), 4);
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_str_cursor_backward() {
        let mut cursor = of_string("x🂡y");
        while cursor.has_next() {
            cursor.next().unwrap();
        }
        assert_eq!(cursor.previous().unwrap(), 'y');
        assert_eq!(cursor.previous().unwrap(), '🂡');
        assert_eq!(cursor.previous().unwrap(), 'x');
        assert_eq!(cursor.previous(), Err(Error::EndOfSequence));
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_str_cursor_peeks() {
        let mut cursor = of_string("ab");
        assert_eq!(cursor.peek_next().unwrap(), 'a');
        assert_eq!(cursor.peek_previous(), Err(Error::EndOfSequence));
        cursor.next().unwrap();
        assert_eq!(cursor.peek_previous().unwrap(), 'a');
        assert_eq!(cursor.peek_next().unwrap(), 'b');
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_char_slice_cursor() {
        let chars = ['f', 'o', 'o'];
        let mut cursor = of_chars(&chars);
        assert_eq!(cursor.next().unwrap(), 'f');
        assert_eq!(cursor.next().unwrap(), 'o');
        assert_eq!(cursor.previous().unwrap(), 'o');
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_empty_singleton() {
        let mut cursor = EmptyCodePoints;
        assert!(!cursor.has_next());
        assert!(!cursor.has_previous());
        assert_eq!(cursor.next(), Err(Error::EndOfSequence));
    }

    #[test]
    fn test_case_fold_lower() {
        let folded = of_string("AbC1!").to_ascii_lower_case();
        assert_eq!(folded.drain_to_string().unwrap(), "abc1!");
    }

    #[test]
    fn test_case_fold_upper_bidirectional() {
        let mut folded = of_string("ab").to_ascii_upper_case();
        assert_eq!(folded.next().unwrap(), 'A');
        assert_eq!(folded.previous().unwrap(), 'A');
        assert_eq!(folded.peek_next().unwrap(), 'A');
        assert_eq!(folded.index(), 0);
    }

    #[test]
    fn test_case_fold_leaves_non_ascii() {
        let folded = of_string("Ä").to_ascii_lower_case();
        assert_eq!(folded.drain_to_string().unwrap(), "Ä");
    }
}
