//! Lexer turning a statement into a token stream plus keyword positions.

mod state;

use alloc::string::String;
use core::mem;

pub use state::{Action, LexState, Mode};

use crate::errors::ParseError;
use crate::grammar::Grammar;
use crate::keywords::KeywordTable;
use crate::token::{Token, TokenStream};

/// Frozen output of a tokenization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    tokens: TokenStream,
    keywords: KeywordTable,
}

impl Tokenized {
    /// The positional token stream, keywords excluded.
    #[must_use]
    pub fn tokens(&self) -> &TokenStream {
        &self.tokens
    }

    /// Keyword positions relative to [`Tokenized::tokens`].
    #[must_use]
    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }
}

/// Single-pass lexer driven one character at a time.
#[derive(Debug, Clone)]
pub struct Lexer<'g> {
    grammar: &'g Grammar,
    state: LexState,
    tokens: TokenStream,
    keywords: KeywordTable,
}

impl<'g> Lexer<'g> {
    /// Create a new lexer using `grammar`.
    #[must_use]
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            state: LexState::new(),
            tokens: TokenStream::new(),
            keywords: KeywordTable::new(),
        }
    }

    /// Feeds character `c` found at byte offset `position`.
    pub fn feed(&mut self, position: usize, c: char) {
        match self.state.step(position, c, &self.grammar.chars) {
            Action::Buffered => {}
            Action::Separated { word, join } => {
                self.flush_word(word);
                if let Some(join) = join {
                    self.tokens.push(Token::Plain(join.into()));
                }
            }
            Action::Opened { word } => self.flush_word(word),
            Action::Closed { literal } => self.flush(Token::Literal(literal)),
        }
    }

    /// Ends the scan and returns the frozen token stream and keyword table.
    ///
    /// # Errors
    ///
    /// * `UnterminatedLiteral` - If a literal region is still open.
    pub fn finish(mut self) -> Result<Tokenized, ParseError> {
        let word = mem::take(&mut self.state).finish()?;
        self.flush_word(word);
        Ok(Tokenized {
            tokens: self.tokens,
            keywords: self.keywords,
        })
    }

    fn flush_word(&mut self, word: String) {
        if !word.is_empty() {
            self.flush(Token::Plain(word));
        }
    }

    fn flush(&mut self, token: Token) {
        self.grammar
            .vocabulary
            .absorb(token, &mut self.tokens, &mut self.keywords);
    }
}

/// Tokenizes `input` with `grammar`.
///
/// # Errors
///
/// * `EmptySource` - If `input` is empty.
/// * `UnterminatedLiteral` - If a pairing delimiter is never closed.
///
/// # Example
///
/// ```
/// use delete_lexer::{Grammar, Token, tokenize};
///
/// let tokenized = tokenize("DELETE FROM `user` WHERE id IN (1, 2)", &Grammar::mysql_delete()).unwrap();
/// let rendered: Vec<String> = tokenized.tokens().iter().map(ToString::to_string).collect();
/// assert_eq!(rendered, ["'user'", "id", "IN", "(", "1", ",", "2", ")"]);
/// assert_eq!(tokenized.keywords().get("FROM"), Some(0));
/// assert_eq!(tokenized.keywords().get("WHERE"), Some(1));
/// ```
pub fn tokenize(input: &str, grammar: &Grammar) -> Result<Tokenized, ParseError> {
    if input.is_empty() {
        tracing::debug!(code = ParseError::EMPTY_SOURCE, "refusing to tokenize empty source");
        return Err(ParseError::EmptySource);
    }
    let mut lexer = Lexer::new(grammar);
    for (position, c) in input.char_indices() {
        lexer.feed(position, c);
    }
    let tokenized = lexer.finish().inspect_err(|err| {
        tracing::debug!(code = err.code(), error = %err, "tokenization failed");
    })?;
    tracing::trace!(
        tokens = tokenized.tokens.len(),
        keywords = tokenized.keywords.len(),
        "tokenized statement"
    );
    Ok(tokenized)
}
