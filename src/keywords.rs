//! Keyword recognition and the out-of-band keyword position table.
//!
//! Recognized keywords never enter the [`TokenStream`]. Instead the table
//! records, for each occurrence, the stream position the keyword precedes:
//! in `DELETE FROM t WHERE id = 1` the stream is `[t, id, =, 1]`, `FROM` is
//! recorded at 0 and `WHERE` at 1.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::grammar::Vocabulary;
use crate::token::{Token, TokenStream};

/// Positions of recognized keywords relative to the token stream.
///
/// Every occurrence is kept in recording order; its place in that order is
/// its ordinal. Lookups by name resolve to the latest occurrence of that
/// keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTable {
    occurrences: Vec<(String, usize)>,
    /// Keyword name to the ordinal of its latest occurrence.
    latest: HashMap<String, usize>,
}

impl KeywordTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, keyword: &str, index: usize) {
        self.latest.insert(keyword.into(), self.occurrences.len());
        self.occurrences.push((keyword.into(), index));
    }

    /// Stream position of the latest occurrence of `keyword`, spelled as in
    /// the vocabulary.
    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<usize> {
        self.latest_occurrence(keyword).map(|(_, index)| index)
    }

    /// Ordinal and stream position of the latest occurrence of `keyword`.
    #[must_use]
    pub fn latest_occurrence(&self, keyword: &str) -> Option<(usize, usize)> {
        let ordinal = *self.latest.get(keyword)?;
        self.occurrences
            .get(ordinal)
            .map(|(_, index)| (ordinal, *index))
    }

    /// Whether `keyword` occurred at all.
    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.latest.contains_key(keyword)
    }

    /// Keywords recorded at stream position `index` with their ordinals, in
    /// recording order.
    pub fn at(&self, index: usize) -> impl Iterator<Item = (usize, &str)> {
        self.occurrences
            .iter()
            .enumerate()
            .filter(move |(_, (_, position))| *position == index)
            .map(|(ordinal, (keyword, _))| (ordinal, keyword.as_str()))
    }

    /// Every `(keyword, position)` occurrence, in recording order.
    #[must_use]
    pub fn occurrences(&self) -> &[(String, usize)] {
        &self.occurrences
    }

    /// Number of recorded occurrences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    /// Whether no keyword was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }
}

/// Outcome of classifying a completed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'v> {
    /// The token is a keyword and must not enter the stream.
    Keyword {
        /// Keyword spelling from the vocabulary.
        name: &'v str,
        /// Whether the last stream entry is the first word of this keyword
        /// and must be removed.
        merges_previous: bool,
    },
    /// The token is appended to the stream.
    Ordinary,
}

impl Vocabulary {
    /// Classifies `token`, given the last entry of the stream so far.
    ///
    /// Literal tokens are always ordinary. A plain token completing a
    /// two-word keyword whose first word is `previous` merges with it.
    ///
    /// # Example
    ///
    /// ```
    /// use delete_lexer::{Classification, Token, Vocabulary};
    ///
    /// let vocabulary = Vocabulary::mysql_delete();
    /// let order = Token::Plain("order".into());
    /// let by = Token::Plain("by".into());
    /// assert_eq!(
    ///     vocabulary.classify(&by, Some(&order)),
    ///     Classification::Keyword { name: "ORDER BY", merges_previous: true },
    /// );
    /// assert_eq!(vocabulary.classify(&by, None), Classification::Ordinary);
    /// ```
    #[must_use]
    pub fn classify(&self, token: &Token, previous: Option<&Token>) -> Classification<'_> {
        let Token::Plain(word) = token else {
            return Classification::Ordinary;
        };
        if let Some(name) = previous.and_then(|previous| {
            self.compounds_ending_with(word)
                .find(|(first, _)| previous.is_plain_word(first))
                .map(|(_, keyword)| keyword)
        }) {
            return Classification::Keyword {
                name,
                merges_previous: true,
            };
        }
        match self.keyword(word) {
            Some(name) => Classification::Keyword {
                name,
                merges_previous: false,
            },
            None => Classification::Ordinary,
        }
    }

    /// Routes a completed token either into `tokens` or, if it is a keyword,
    /// into `keywords` at the current end of the stream.
    pub(crate) fn absorb(&self, token: Token, tokens: &mut TokenStream, keywords: &mut KeywordTable) {
        match self.classify(&token, tokens.last()) {
            Classification::Keyword {
                name,
                merges_previous,
            } => {
                if merges_previous {
                    tokens.pop();
                }
                keywords.record(name, tokens.len());
            }
            Classification::Ordinary => tokens.push(token),
        }
    }
}
