//! Character classes and keyword vocabulary driving the lexer.
//!
//! Nothing in the lexer is hard-wired to MySQL `DELETE`: the sets of quote
//! characters, separators and keywords are plain data gathered in a
//! [`Grammar`]. [`Grammar::mysql_delete`] provides the preset used by
//! [`parse_delete`](crate::parse_delete).

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::HashSet;

/// Pairing delimiters used by MySQL: single quote, double quote and backtick.
pub const MYSQL_PAIR_DELIMITERS: [char; 3] = ['\'', '"', '`'];

/// Characters that end a word in MySQL statements.
pub const MYSQL_SEPARATORS: [char; 8] = [' ', '\t', '\n', '\r', ',', '(', ')', ';'];

/// Separators that are kept as their own token.
pub const MYSQL_JOIN_WORDS: [char; 3] = [',', '(', ')'];

/// Keywords recognized in a MySQL `DELETE` statement.
pub const MYSQL_DELETE_KEYWORDS: [&str; 8] = [
    "DELETE",
    "LOW_PRIORITY",
    "QUICK",
    "IGNORE",
    "FROM",
    "WHERE",
    "ORDER BY",
    "LIMIT",
];

/// Character classification tables.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharClasses {
    /// Characters opening a literal region closed by the same character.
    pub pair_delimiters: HashSet<char>,
    /// Characters ending the pending word outside a literal region.
    pub separators: HashSet<char>,
    /// Separators which are also emitted as single-character tokens.
    pub join_words: HashSet<char>,
}

impl CharClasses {
    /// Builds character classes from the three sets.
    ///
    /// Join-word characters are separators by definition, so they are also
    /// added to the separator set.
    #[must_use]
    pub fn new(
        pair_delimiters: impl IntoIterator<Item = char>,
        separators: impl IntoIterator<Item = char>,
        join_words: impl IntoIterator<Item = char>,
    ) -> Self {
        let join_words: HashSet<char> = join_words.into_iter().collect();
        let mut separators: HashSet<char> = separators.into_iter().collect();
        separators.extend(join_words.iter().copied());
        Self {
            pair_delimiters: pair_delimiters.into_iter().collect(),
            separators,
            join_words,
        }
    }

    /// MySQL character classes.
    #[must_use]
    pub fn mysql() -> Self {
        Self::new(MYSQL_PAIR_DELIMITERS, MYSQL_SEPARATORS, MYSQL_JOIN_WORDS)
    }

    /// Whether `c` opens and closes literal regions.
    #[inline]
    #[must_use]
    pub fn is_pair_delimiter(&self, c: char) -> bool {
        self.pair_delimiters.contains(&c)
    }

    /// Whether `c` ends the pending word.
    #[inline]
    #[must_use]
    pub fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c)
    }

    /// Whether `c` is a separator that survives as its own token.
    #[inline]
    #[must_use]
    pub fn is_join_word(&self, c: char) -> bool {
        self.join_words.contains(&c)
    }
}

/// The closed keyword vocabulary of one statement type.
///
/// Keyword comparison is ASCII case-insensitive. The spelling stored here is
/// the one used when keywords are rendered back into clause text. A keyword
/// made of two whitespace-separated words (such as `ORDER BY`) is recognized
/// when its two words appear as consecutive plain tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vocabulary {
    /// Every recognized keyword.
    pub keywords: Vec<String>,
    /// The keyword immediately followed by the table reference.
    pub table_keyword: String,
    /// Keywords that may start the trailing clause, highest priority first.
    pub clause_keywords: Vec<String>,
}

impl Vocabulary {
    /// Vocabulary of a MySQL `DELETE` statement.
    #[must_use]
    pub fn mysql_delete() -> Self {
        Self {
            keywords: MYSQL_DELETE_KEYWORDS.iter().map(ToString::to_string).collect(),
            table_keyword: "FROM".into(),
            clause_keywords: ["WHERE", "ORDER BY", "LIMIT"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Returns the stored spelling of the keyword matching `word`, if any.
    #[must_use]
    pub fn keyword(&self, word: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|keyword| keyword.eq_ignore_ascii_case(word))
    }

    /// Returns the two-word keywords whose second word is `word`, as
    /// `(first word, keyword)` pairs.
    pub fn compounds_ending_with<'a>(
        &'a self,
        word: &str,
    ) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.keywords.iter().filter_map(move |keyword| {
            let mut words = keyword.split_ascii_whitespace();
            let (first, second) = (words.next()?, words.next()?);
            (words.next().is_none() && second.eq_ignore_ascii_case(word))
                .then_some((first, keyword.as_str()))
        })
    }
}

/// Complete lexer configuration: character classes plus vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grammar {
    /// Character classification tables.
    pub chars: CharClasses,
    /// Keyword vocabulary.
    pub vocabulary: Vocabulary,
}

impl Grammar {
    /// Creates a grammar from its two halves.
    #[must_use]
    pub fn new(chars: CharClasses, vocabulary: Vocabulary) -> Self {
        Self { chars, vocabulary }
    }

    /// Grammar of a MySQL `DELETE` statement.
    #[must_use]
    pub fn mysql_delete() -> Self {
        Self::new(CharClasses::mysql(), Vocabulary::mysql_delete())
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::mysql_delete()
    }
}
