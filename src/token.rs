//! Tokens and the positional token stream.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A bare word, operator or join-word punctuation character.
    Plain(String),
    /// The content of a literal region, without its delimiters.
    Literal(String),
}

impl Token {
    /// The token content. For literals this is the text between the
    /// delimiters, with no quoting.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Literal(text) => text,
        }
    }

    /// Whether the token was captured inside a literal region.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Whether this is a plain token spelling `word`, ignoring ASCII case.
    #[must_use]
    pub fn is_plain_word(&self, word: &str) -> bool {
        matches!(self, Self::Plain(text) if text.eq_ignore_ascii_case(word))
    }
}

/// Renders the token as it appears in clause text.
///
/// Literals are always wrapped in single quotes, whichever delimiter
/// originally enclosed them: `"abc"` and `` `abc` `` both render as `'abc'`.
/// The content itself is not escaped.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(text) => f.write_str(text),
            Self::Literal(text) => write!(f, "'{text}'"),
        }
    }
}

/// Ordered sequence of tokens; positions are significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Creates an empty stream.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub(crate) fn pop(&mut self) -> Option<Token> {
        self.tokens.pop()
    }

    /// The most recently appended token.
    #[must_use]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// The token at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the stream holds no token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over the tokens in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// The tokens as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = core::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
