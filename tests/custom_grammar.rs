//! Integration tests for driving the lexer with non-default grammars.

use delete_lexer::{CharClasses, DeleteParser, Grammar, Token, Vocabulary, tokenize};

fn vocabulary(keywords: &[&str], table: &str, clauses: &[&str]) -> Vocabulary {
    Vocabulary {
        keywords: keywords.iter().map(|k| (*k).to_owned()).collect(),
        table_keyword: table.to_owned(),
        clause_keywords: clauses.iter().map(|k| (*k).to_owned()).collect(),
    }
}

#[test]
fn test_custom_delimiters_and_join_words() {
    let grammar = Grammar::new(
        CharClasses::new(['|'], [' '], [';']),
        Vocabulary::mysql_delete(),
    );
    let tokenized = tokenize("DELETE FROM |my table| WHERE a;b", &grammar).unwrap();
    let rendered: Vec<String> = tokenized.tokens().iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["'my table'", "a", ";", "b"]);
}

#[test]
fn test_custom_vocabulary_with_other_compound() {
    let grammar = Grammar::new(
        CharClasses::mysql(),
        vocabulary(
            &["UPDATE", "SET", "WHERE", "GROUP BY", "LIMIT"],
            "UPDATE",
            &["WHERE", "GROUP BY", "LIMIT"],
        ),
    );
    let parser = DeleteParser::with_grammar("update t set a = 1 group by b", &grammar).unwrap();
    assert_eq!(parser.table(), Ok("t"));
    assert_eq!(parser.clause(), "GROUP BY b ");
}

#[test]
fn test_order_by_not_in_vocabulary_stays_plain() {
    let grammar = Grammar::new(
        CharClasses::mysql(),
        vocabulary(&["FROM", "LIMIT"], "FROM", &["LIMIT"]),
    );
    let tokenized = tokenize("FROM t ORDER BY x LIMIT 1", &grammar).unwrap();
    let words: Vec<&str> = tokenized.tokens().iter().map(Token::text).collect();
    assert_eq!(words, ["t", "ORDER", "BY", "x", "1"]);
}

#[test]
fn test_clause_priority_follows_vocabulary_order() {
    let grammar = Grammar::new(
        CharClasses::mysql(),
        vocabulary(
            &["DELETE", "FROM", "WHERE", "ORDER BY", "LIMIT"],
            "FROM",
            &["LIMIT", "WHERE"],
        ),
    );
    let parser = DeleteParser::with_grammar("DELETE FROM t WHERE a = 1 LIMIT 2", &grammar).unwrap();
    assert_eq!(parser.clause(), "LIMIT 2 ");
}

#[test]
fn test_keyword_spelling_comes_from_vocabulary() {
    let grammar = Grammar::new(
        CharClasses::mysql(),
        vocabulary(&["from", "where"], "from", &["where"]),
    );
    let parser = DeleteParser::with_grammar("FROM t WHERE x", &grammar).unwrap();
    assert_eq!(parser.clause(), "where x ");
}

#[test]
fn test_default_grammar_is_mysql_delete() {
    assert_eq!(Grammar::default(), Grammar::mysql_delete());
}
