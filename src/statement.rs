//! Assembling the final result of a `DELETE` parse.

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::clause::ClauseExtractor;
use crate::errors::ParseError;
use crate::grammar::Grammar;
use crate::lexer::{Tokenized, tokenize};

/// Statement type label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum StatementType {
    /// A `DELETE` statement.
    Delete,
}

impl StatementType {
    /// The label as written in SQL.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured view of a parsed statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedStatement {
    statement_type: StatementType,
    table: String,
    clause: String,
    source: String,
}

impl ParsedStatement {
    /// Builds a result from its parts. No validation is performed.
    #[must_use]
    pub fn new(
        statement_type: StatementType,
        table: impl Into<String>,
        clause: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            statement_type,
            table: table.into(),
            clause: clause.into(),
            source: source.into(),
        }
    }

    /// The statement type.
    #[must_use]
    pub fn statement_type(&self) -> StatementType {
        self.statement_type
    }

    /// The table name, without quoting.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Trailing clause text starting at its boundary keyword, or empty.
    #[must_use]
    pub fn clause(&self) -> &str {
        &self.clause
    }

    /// The original source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl FromStr for ParsedStatement {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_delete(s)
    }
}

impl TryFrom<&str> for ParsedStatement {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_delete(value)
    }
}

/// Parser for a single `DELETE` statement.
///
/// The source is tokenized once, on construction. Table and clause
/// extraction then only read the frozen token stream.
#[derive(Debug, Clone)]
pub struct DeleteParser<'a> {
    source: &'a str,
    grammar: Cow<'a, Grammar>,
    tokenized: Tokenized,
}

impl<'a> DeleteParser<'a> {
    /// Tokenizes `source` with the MySQL `DELETE` grammar.
    ///
    /// # Errors
    ///
    /// * `EmptySource` - If `source` is empty.
    /// * `UnterminatedLiteral` - If a pairing delimiter is never closed.
    pub fn new(source: &'a str) -> Result<Self, ParseError> {
        Self::build(source, Cow::Owned(Grammar::mysql_delete()))
    }

    /// Tokenizes `source` with a custom grammar.
    ///
    /// # Errors
    ///
    /// * `EmptySource` - If `source` is empty.
    /// * `UnterminatedLiteral` - If a pairing delimiter is never closed.
    pub fn with_grammar(source: &'a str, grammar: &'a Grammar) -> Result<Self, ParseError> {
        Self::build(source, Cow::Borrowed(grammar))
    }

    fn build(source: &'a str, grammar: Cow<'a, Grammar>) -> Result<Self, ParseError> {
        let tokenized = tokenize(source, &grammar)?;
        Ok(Self {
            source,
            grammar,
            tokenized,
        })
    }

    /// The token stream and keyword table of the source.
    #[must_use]
    pub fn tokenized(&self) -> &Tokenized {
        &self.tokenized
    }

    /// Extractor over the tokenized source.
    #[must_use]
    pub fn extractor(&self) -> ClauseExtractor<'_> {
        ClauseExtractor::new(&self.tokenized, &self.grammar.vocabulary)
    }

    /// The table reference, see [`ClauseExtractor::find_table`].
    ///
    /// # Errors
    ///
    /// * `MissingTable` - If no table reference is present.
    pub fn table(&self) -> Result<&str, ParseError> {
        self.extractor().find_table()
    }

    /// The trailing clause, see [`ClauseExtractor::find_trailing_clause`].
    #[must_use]
    pub fn clause(&self) -> String {
        self.extractor().find_trailing_clause()
    }

    /// Assembles the parsed statement.
    ///
    /// # Errors
    ///
    /// * `MissingTable` - If no table reference is present.
    pub fn statement(&self) -> Result<ParsedStatement, ParseError> {
        let extractor = self.extractor();
        let table = extractor.find_table()?;
        let clause = extractor.find_trailing_clause();
        tracing::trace!(table, clause = clause.as_str(), "assembled delete statement");
        Ok(ParsedStatement::new(
            StatementType::Delete,
            table,
            clause,
            self.source,
        ))
    }
}

/// Parses a MySQL `DELETE` statement.
///
/// # Errors
///
/// * `EmptySource` - If `source` is empty.
/// * `UnterminatedLiteral` - If a pairing delimiter is never closed.
/// * `MissingTable` - If no table reference is present.
///
/// # Example
///
/// ```
/// use delete_lexer::{StatementType, parse_delete};
///
/// let statement = parse_delete("DELETE FROM user WHERE id = 1").unwrap();
/// assert_eq!(statement.statement_type(), StatementType::Delete);
/// assert_eq!(statement.table(), "user");
/// assert_eq!(statement.clause(), "WHERE id = 1 ");
/// ```
pub fn parse_delete(source: &str) -> Result<ParsedStatement, ParseError> {
    DeleteParser::new(source)?.statement()
}
