//! Submodule defining the errors used across the crate.

/// Errors that can occur while parsing a `DELETE` statement.
///
/// Every variant is terminal: no partial result is produced. Each variant
/// also carries a stable numeric code, see [`ParseError::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseError {
    /// The source text has zero length.
    #[error("delete sql is empty")]
    EmptySource,
    /// No `FROM` keyword was found, or nothing follows it.
    #[error("delete sql syntax error, cant find table")]
    MissingTable,
    /// The scan ended while a pairing delimiter was still open.
    #[error("delete sql syntax error, unterminated literal opened by {delimiter:?} at position {position}")]
    UnterminatedLiteral {
        /// The delimiter that opened the literal.
        delimiter: char,
        /// Byte offset of the opening delimiter in the source.
        position: usize,
    },
}

impl ParseError {
    /// Code reported when the source text is empty.
    pub const EMPTY_SOURCE: u32 = 11000;
    /// Code reported when no table reference can be found.
    pub const MISSING_TABLE: u32 = 11200;
    /// Code reported when a literal is never closed.
    pub const UNTERMINATED_LITERAL: u32 = 11201;

    /// Returns the numeric code classifying this error.
    ///
    /// # Example
    ///
    /// ```
    /// use delete_lexer::{ParseError, parse_delete};
    ///
    /// let err = parse_delete("").unwrap_err();
    /// assert_eq!(err.code(), ParseError::EMPTY_SOURCE);
    /// ```
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::EmptySource => Self::EMPTY_SOURCE,
            Self::MissingTable => Self::MISSING_TABLE,
            Self::UnterminatedLiteral { .. } => Self::UNTERMINATED_LITERAL,
        }
    }
}
