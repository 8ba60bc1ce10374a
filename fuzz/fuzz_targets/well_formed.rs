//! Generated-statement fuzzer for `parse_delete`.
//!
//! Builds well-formed DELETE statements with arbitrary identifiers, quoting,
//! modifiers and clauses, and verifies the extracted table and clause text.

use delete_lexer::testing::{FuzzDelete, check_well_formed_delete};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|case: FuzzDelete| {
            check_well_formed_delete(&case);
        });
    }
}
