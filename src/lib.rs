//! General-purpose lexical analyzer over an ordered list of regex patterns.
//!
//! Build a [`Lexer`] from patterns, then lex input into [`Tokens`]. Each
//! [`Token`] carries the index of the pattern that matched it, the matched
//! bytes, and its byte offset. Input need not be UTF-8.
//!
//! ```
//! use patlex::{Lexer, Token};
//!
//! let lexer = Lexer::new(["[[:alpha:]]+", "[[:digit:]]+", r"[\.,]"]).unwrap();
//! let tokens = lexer.lex_str("20 cats, catch 100 rats.").unwrap();
//! assert_eq!(tokens[0], Token::new(1, "20", 0));
//! assert_eq!(tokens[2], Token::new(2, ",", 7));
//! ```
//!
//! Patterns use the [`regex`] crate's syntax, verbatim: metacharacters meant
//! literally must be escaped, e.g. `\(` for a left parenthesis.
//! Unicode mode is on by default, so `.` and `\S` only match whole UTF-8
//! characters; use `(?-u:...)` to match arbitrary bytes.

mod buffer;
mod error;
mod lexer;
mod pattern;
mod token;

pub use error::{LexError, LexResult, PatternError};
pub use lexer::{Lexer, LexerBuilder};
pub use token::{Token, Tokens};
