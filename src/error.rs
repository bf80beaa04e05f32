use thiserror::Error;

/// Error type for cursor traversal and codec operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `next`/`previous` (or a peek) was called past the end of the sequence.
    #[error("No more elements in sequence")]
    EndOfSequence,

    /// A Base64 symbol is not in the active alphabet and is not padding.
    #[error("Invalid symbol for alphabet: {0:?}")]
    InvalidSymbol(char),

    /// A padding symbol appeared in an invalid position or count.
    #[error("Malformed padding: {0}")]
    MalformedPadding(&'static str),

    /// Input ended with a dangling group too short to produce any output.
    #[error("Incomplete group: {0} symbol(s) with no way to complete the group")]
    IncompleteGroup(usize),

    /// A UTF-8 byte sequence is truncated, malformed, or out of range.
    #[error("Invalid UTF-8 encoding: {0}")]
    InvalidEncoding(&'static str),

    /// A code point is outside the range the requested projection supports.
    #[error("Code point U+{0:04X} outside supported range")]
    InvalidCodePoint(u32),
}
