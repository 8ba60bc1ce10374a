//! Regression tests replaying the fuzz harness checks on fixed inputs.
//!
//! The harnesses in `fuzz/` call the same helpers from
//! `delete_lexer::testing`, so any input they report can be pasted here.

#![cfg(feature = "testing")]

use arbitrary::{Arbitrary, Unstructured};
use delete_lexer::testing::{FuzzDelete, Quote, check_parse_invariants, check_well_formed_delete};

#[test]
fn test_invariants_on_edge_inputs() {
    for sql in [
        "",
        " ",
        "'",
        "''",
        "\"'\"",
        "FROM",
        "FROM ''",
        "BY",
        "ORDER BY",
        "order order by by",
        "DELETE FROM t WHERE",
        "DELETE FROM t WHERE LIMIT 5",
        "DELETE FROM WHERE x",
        "DELETE QUICK FROM LIMIT 5",
        "from a from b where x where y",
        "DELETE FROM `t` WHERE a = 'x",
        "DELETE FROM t WHERE a = '名前'",
        "(,)",
    ] {
        check_parse_invariants(sql);
    }
}

#[test]
fn test_keyword_named_columns_are_escaped() {
    let case = FuzzDelete {
        modifiers: vec!["QUICK"],
        table: "c_from".into(),
        quote: Quote::Backtick,
        filter: Some(("c_by".into(), -3)),
        order_by: Some("c_order".into()),
        limit: Some(4),
        lowercase: true,
    };
    assert_eq!(
        case.sql(),
        "delete quick from `c_from` where c_by = -3 order by c_order limit 4"
    );
    check_well_formed_delete(&case);
}

#[test]
fn test_generated_statements() {
    let mut seed = 0x9E37_79B9_u32;
    let mut bytes = vec![0u8; 4096];
    for _ in 0..64 {
        for byte in &mut bytes {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            *byte = seed.to_le_bytes()[0];
        }
        let mut u = Unstructured::new(&bytes);
        let case = FuzzDelete::arbitrary(&mut u).unwrap();
        check_well_formed_delete(&case);
        check_parse_invariants(&case.sql());
    }
}
