//! Generators and invariant checks shared by the fuzz harnesses and tests.
//!
//! This module is gated behind the `testing` feature.
//!
//! # Provided helpers
//!
//! - [`FuzzDelete`]: an `arbitrary`-generated, well-formed `DELETE` statement
//!   that knows its expected table and clause
//! - [`check_well_formed_delete`]: parse a [`FuzzDelete`] and compare against
//!   its expectations
//! - [`check_parse_invariants`]: properties that hold for any input string

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use arbitrary::{Arbitrary, Unstructured};

use crate::grammar::{MYSQL_DELETE_KEYWORDS, Vocabulary};
use crate::{ParseError, parse_delete};

const IDENT_START: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_";
const IDENT_CONT: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_0123456789";

/// How the table name is quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Arbitrary)]
pub enum Quote {
    /// Bare identifier.
    Bare,
    /// `'name'`
    Single,
    /// `"name"`
    Double,
    /// `` `name` ``
    Backtick,
}

impl Quote {
    fn wrap(self, name: &str) -> String {
        match self {
            Self::Bare => name.into(),
            Self::Single => format!("'{name}'"),
            Self::Double => format!("\"{name}\""),
            Self::Backtick => format!("`{name}`"),
        }
    }
}

/// A generated `DELETE` statement together with its expected parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FuzzDelete {
    /// Qualifiers written between `DELETE` and `FROM`.
    pub modifiers: Vec<&'static str>,
    /// Table name, unquoted.
    pub table: String,
    /// Quoting applied to the table name.
    pub quote: Quote,
    /// `WHERE column = value`.
    pub filter: Option<(String, i64)>,
    /// `ORDER BY column`.
    pub order_by: Option<String>,
    /// `LIMIT n`.
    pub limit: Option<u32>,
    /// Whether keywords are written in lowercase.
    pub lowercase: bool,
}

/// Generates an identifier that is never a keyword nor a word of one.
fn identifier(u: &mut Unstructured<'_>) -> arbitrary::Result<String> {
    let len = u.int_in_range(0..=10)?;
    let mut ident = String::with_capacity(len + 1);
    ident.push(char::from(*u.choose(IDENT_START)?));
    for _ in 0..len {
        ident.push(char::from(*u.choose(IDENT_CONT)?));
    }
    let collides = MYSQL_DELETE_KEYWORDS
        .iter()
        .flat_map(|keyword| keyword.split(' '))
        .any(|word| word.eq_ignore_ascii_case(&ident));
    if collides {
        ident.insert_str(0, "c_");
    }
    Ok(ident)
}

impl<'a> Arbitrary<'a> for FuzzDelete {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut modifiers = Vec::new();
        for modifier in ["LOW_PRIORITY", "QUICK", "IGNORE"] {
            if u.arbitrary()? {
                modifiers.push(modifier);
            }
        }
        Ok(Self {
            modifiers,
            table: identifier(u)?,
            quote: u.arbitrary()?,
            filter: if u.arbitrary()? {
                Some((identifier(u)?, u.arbitrary()?))
            } else {
                None
            },
            order_by: if u.arbitrary()? {
                Some(identifier(u)?)
            } else {
                None
            },
            limit: u.arbitrary()?,
            lowercase: u.arbitrary()?,
        })
    }
}

impl FuzzDelete {
    fn keyword(&self, keyword: &str) -> String {
        if self.lowercase {
            keyword.to_ascii_lowercase()
        } else {
            keyword.into()
        }
    }

    /// The statement text.
    #[must_use]
    pub fn sql(&self) -> String {
        let mut sql = self.keyword("DELETE");
        for modifier in &self.modifiers {
            sql.push(' ');
            sql.push_str(&self.keyword(modifier));
        }
        let _ = write!(sql, " {} {}", self.keyword("FROM"), self.quote.wrap(&self.table));
        if let Some((column, value)) = &self.filter {
            let _ = write!(sql, " {} {column} = {value}", self.keyword("WHERE"));
        }
        if let Some(column) = &self.order_by {
            let _ = write!(sql, " {} {column}", self.keyword("ORDER BY"));
        }
        if let Some(limit) = self.limit {
            let _ = write!(sql, " {} {limit}", self.keyword("LIMIT"));
        }
        sql
    }

    /// The clause text the parser must reconstruct.
    #[must_use]
    pub fn expected_clause(&self) -> String {
        let mut clause = String::new();
        if let Some((column, value)) = &self.filter {
            let _ = write!(clause, "WHERE {column} = {value} ");
        }
        if let Some(column) = &self.order_by {
            let _ = write!(clause, "ORDER BY {column} ");
        }
        if let Some(limit) = self.limit {
            let _ = write!(clause, "LIMIT {limit} ");
        }
        clause
    }
}

/// Parses `case` and checks table, clause and source against expectations.
///
/// # Panics
///
/// Panics if the parse fails or differs from the expectation.
pub fn check_well_formed_delete(case: &FuzzDelete) {
    let sql = case.sql();
    let statement = parse_delete(&sql).unwrap_or_else(|err| panic!("{sql:?} failed: {err}"));
    assert_eq!(statement.table(), case.table, "table of {sql:?}");
    assert_eq!(statement.clause(), case.expected_clause(), "clause of {sql:?}");
    assert_eq!(statement.source(), sql);
}

/// Checks properties that hold for every input.
///
/// - parsing is deterministic
/// - only the empty string yields `EmptySource`
/// - `UnterminatedLiteral` points at its opening delimiter
/// - a successful parse echoes the source, and its clause is either empty or
///   starts with a clause keyword and ends with a space
///
/// # Panics
///
/// Panics if any property is violated.
pub fn check_parse_invariants(sql: &str) {
    let first = parse_delete(sql);
    assert_eq!(first, parse_delete(sql), "non-deterministic parse of {sql:?}");

    match first {
        Ok(statement) => {
            assert_eq!(statement.source(), sql);
            let clause = statement.clause();
            if !clause.is_empty() {
                assert!(clause.ends_with(' '), "clause {clause:?} of {sql:?}");
                let vocabulary = Vocabulary::mysql_delete();
                assert!(
                    vocabulary
                        .clause_keywords
                        .iter()
                        .any(|keyword| clause.starts_with(&format!("{keyword} "))),
                    "clause {clause:?} of {sql:?} does not start with a clause keyword"
                );
            }
        }
        Err(ParseError::EmptySource) => assert!(sql.is_empty()),
        Err(ParseError::UnterminatedLiteral {
            delimiter,
            position,
        }) => {
            assert_eq!(sql[position..].chars().next(), Some(delimiter), "{sql:?}");
        }
        Err(ParseError::MissingTable) => assert!(!sql.is_empty()),
    }
}
