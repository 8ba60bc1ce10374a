//! Arbitrary-string fuzzer for `parse_delete`.
//!
//! Feeds arbitrary text through the parser and checks the properties that
//! must hold for any input: no panic, determinism, and consistent errors.

use delete_lexer::testing::check_parse_invariants;
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|sql: String| {
            check_parse_invariants(&sql);
        });
    }
}
