#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

extern crate alloc;

pub mod clause;
pub mod errors;
pub mod grammar;
pub mod keywords;
pub mod lexer;
pub mod statement;
#[cfg(feature = "testing")]
pub mod testing;
pub mod token;

// Re-export main types
pub use clause::ClauseExtractor;
pub use grammar::{CharClasses, Grammar, Vocabulary};
pub use keywords::{Classification, KeywordTable};
pub use lexer::{Lexer, Tokenized, tokenize};
pub use statement::{DeleteParser, ParsedStatement, StatementType, parse_delete};
pub use token::{Token, TokenStream};

// Re-export errors
pub use errors::ParseError;
