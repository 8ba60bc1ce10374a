//! Scanning state machine.
//!
//! The lexer has two modes, [`Mode::Normal`] and [`Mode::InLiteral`]. Each
//! character is fed to [`LexState::step`], which updates the pending buffer
//! and mode and reports what the character did as an [`Action`]. Turning
//! actions into tokens is left to the [`Lexer`](super::Lexer).

use alloc::string::String;
use core::mem;

use crate::errors::ParseError;
use crate::grammar::CharClasses;

/// Scanning mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Outside any literal region.
    #[default]
    Normal,
    /// Inside a literal region opened by `delimiter`.
    InLiteral {
        /// The only character that closes the region.
        delimiter: char,
        /// Byte offset of the opening delimiter.
        opened_at: usize,
    },
}

/// Effect of one character on the scanning state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The character was appended to the pending buffer.
    Buffered,
    /// A separator ended the pending word. `join` holds the separator when it
    /// must be kept as its own token.
    Separated {
        /// The pending word, possibly empty.
        word: String,
        /// The separator, if it is a join-word character.
        join: Option<char>,
    },
    /// A pairing delimiter ended the pending word and opened a literal.
    Opened {
        /// The pending word, possibly empty.
        word: String,
    },
    /// The active delimiter closed the literal.
    Closed {
        /// The literal content, possibly empty.
        literal: String,
    },
}

/// Pending characters plus the current mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexState {
    buffer: String,
    mode: Mode,
}

impl LexState {
    /// Creates a state in [`Mode::Normal`] with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Characters accumulated since the last flush.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Advances the state by character `c` found at byte offset `position`.
    pub fn step(&mut self, position: usize, c: char, chars: &CharClasses) -> Action {
        match self.mode {
            Mode::InLiteral { delimiter, .. } if c == delimiter => {
                self.mode = Mode::Normal;
                Action::Closed {
                    literal: mem::take(&mut self.buffer),
                }
            }
            Mode::Normal if chars.is_separator(c) => Action::Separated {
                word: mem::take(&mut self.buffer),
                join: chars.is_join_word(c).then_some(c),
            },
            Mode::Normal if chars.is_pair_delimiter(c) => {
                self.mode = Mode::InLiteral {
                    delimiter: c,
                    opened_at: position,
                };
                Action::Opened {
                    word: mem::take(&mut self.buffer),
                }
            }
            Mode::Normal | Mode::InLiteral { .. } => {
                self.buffer.push(c);
                Action::Buffered
            }
        }
    }

    /// Ends the scan, returning the pending word.
    ///
    /// # Errors
    ///
    /// * `UnterminatedLiteral` - If a literal region is still open.
    pub fn finish(self) -> Result<String, ParseError> {
        match self.mode {
            Mode::Normal => Ok(self.buffer),
            Mode::InLiteral {
                delimiter,
                opened_at,
            } => Err(ParseError::UnterminatedLiteral {
                delimiter,
                position: opened_at,
            }),
        }
    }
}
