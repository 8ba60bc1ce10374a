//! Table and trailing-clause extraction from a tokenized statement.

use alloc::string::String;
use core::fmt::Write;

use crate::errors::ParseError;
use crate::grammar::Vocabulary;
use crate::lexer::Tokenized;
use crate::token::Token;

/// Read-only queries over a [`Tokenized`] statement.
#[derive(Debug, Clone, Copy)]
pub struct ClauseExtractor<'a> {
    tokenized: &'a Tokenized,
    vocabulary: &'a Vocabulary,
}

impl<'a> ClauseExtractor<'a> {
    /// Creates an extractor over `tokenized`, interpreting keywords with
    /// `vocabulary`.
    #[must_use]
    pub fn new(tokenized: &'a Tokenized, vocabulary: &'a Vocabulary) -> Self {
        Self {
            tokenized,
            vocabulary,
        }
    }

    /// Returns the table reference: the token right after the table keyword,
    /// without its literal quoting.
    ///
    /// # Errors
    ///
    /// * `MissingTable` - If the table keyword never occurred or ends the
    ///   statement.
    pub fn find_table(&self) -> Result<&'a str, ParseError> {
        self.tokenized
            .keywords()
            .get(&self.vocabulary.table_keyword)
            .and_then(|index| self.tokenized.tokens().get(index))
            .map(Token::text)
            .ok_or(ParseError::MissingTable)
            .inspect_err(|err| tracing::debug!(code = err.code(), "no table reference"))
    }

    /// Ordinal and stream position of the first clause keyword present, in
    /// vocabulary priority order.
    fn boundary(&self) -> Option<(usize, usize)> {
        let keywords = self.tokenized.keywords();
        self.vocabulary
            .clause_keywords
            .iter()
            .find_map(|keyword| keywords.latest_occurrence(keyword))
    }

    /// Index of the first clause keyword present, in vocabulary priority order.
    #[must_use]
    pub fn clause_start(&self) -> Option<usize> {
        self.boundary().map(|(_, start)| start)
    }

    /// Reconstructs the trailing clause text.
    ///
    /// Every token from the clause start onwards is written followed by a
    /// space, preceded by the keywords recorded at its position. At the start
    /// position only the boundary keyword and keywords recorded after it are
    /// written. Returns an empty string when no clause keyword is present.
    #[must_use]
    pub fn find_trailing_clause(&self) -> String {
        let mut clause = String::new();
        let Some((boundary, start)) = self.boundary() else {
            return clause;
        };
        let keywords = self.tokenized.keywords();
        for (index, token) in self.tokenized.tokens().iter().enumerate().skip(start) {
            for (ordinal, keyword) in keywords.at(index) {
                if index == start && ordinal < boundary {
                    continue;
                }
                clause.push_str(keyword);
                clause.push(' ');
            }
            let _ = write!(clause, "{token} ");
        }
        clause
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Grammar;
    use crate::lexer::tokenize;

    fn extract(input: &str) -> (Result<String, ParseError>, String) {
        let grammar = Grammar::mysql_delete();
        let tokenized = tokenize(input, &grammar).unwrap();
        let extractor = ClauseExtractor::new(&tokenized, &grammar.vocabulary);
        (
            extractor.find_table().map(String::from),
            extractor.find_trailing_clause(),
        )
    }

    #[test]
    fn test_where_clause() {
        let (table, clause) = extract("DELETE FROM user WHERE id = 1");
        assert_eq!(table.unwrap(), "user");
        assert_eq!(clause, "WHERE id = 1 ");
    }

    #[test]
    fn test_quoted_table_is_stripped() {
        for input in [
            "DELETE FROM 'user' LIMIT 10",
            "DELETE FROM \"user\" LIMIT 10",
            "DELETE FROM `user` LIMIT 10",
        ] {
            let (table, clause) = extract(input);
            assert_eq!(table.unwrap(), "user");
            assert_eq!(clause, "LIMIT 10 ");
        }
    }

    #[test]
    fn test_only_one_quote_layer_is_stripped() {
        let (table, _) = extract("DELETE FROM \"'user'\"");
        assert_eq!(table.unwrap(), "'user'");
    }

    #[test]
    fn test_order_by_outranks_limit() {
        let (_, clause) = extract("DELETE FROM t ORDER BY id LIMIT 5");
        assert_eq!(clause, "ORDER BY id LIMIT 5 ");
    }

    #[test]
    fn test_where_outranks_order_by() {
        let (_, clause) = extract("DELETE FROM t WHERE a > 'x' order by b desc limit 3");
        assert_eq!(clause, "WHERE a > 'x' ORDER BY b desc LIMIT 3 ");
    }

    #[test]
    fn test_no_clause() {
        let (table, clause) = extract("DELETE FROM t");
        assert_eq!(table.unwrap(), "t");
        assert_eq!(clause, "");
    }

    #[test]
    fn test_missing_from() {
        let (table, clause) = extract("DELETE t WHERE id = 1 LIMIT 1");
        assert_eq!(table, Err(ParseError::MissingTable));
        assert_eq!(clause, "WHERE id = 1 LIMIT 1 ");
    }

    #[test]
    fn test_from_without_table() {
        let (table, _) = extract("DELETE FROM");
        assert_eq!(table, Err(ParseError::MissingTable));
    }

    #[test]
    fn test_trailing_keyword_is_dropped() {
        let (_, clause) = extract("DELETE FROM t WHERE id = 1 LIMIT");
        assert_eq!(clause, "WHERE id = 1 ");
    }

    #[test]
    fn test_keywords_sharing_a_position_all_render() {
        let (_, clause) = extract("DELETE FROM t WHERE LIMIT 5");
        assert_eq!(clause, "WHERE LIMIT 5 ");
    }

    #[test]
    fn test_keywords_before_boundary_are_not_rendered() {
        let (table, clause) = extract("DELETE FROM WHERE x");
        assert_eq!(table.unwrap(), "x");
        assert_eq!(clause, "WHERE x ");
        let (_, clause) = extract("DELETE QUICK FROM LIMIT 5");
        assert_eq!(clause, "LIMIT 5 ");
    }

    #[test]
    fn test_keywords_after_boundary_at_start_still_render() {
        let (_, clause) = extract("DELETE FROM t WHERE QUICK x");
        assert_eq!(clause, "WHERE QUICK x ");
    }

    #[test]
    fn test_literal_quotes_are_normalized() {
        let (_, clause) = extract("DELETE FROM t WHERE name IN (\"a\", `b`)");
        assert_eq!(clause, "WHERE name IN ( 'a' , 'b' ) ");
    }
}
