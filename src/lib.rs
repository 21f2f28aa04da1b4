//! plainjson - strict two-phase JSON front end.
//!
//! Converts raw JSON text into an in-memory [`Value`] tree in two strictly
//! layered passes:
//!
//! - [`tokenize`] - single-pass lexer turning the character sequence into a
//!   flat token sequence
//! - [`parse`] - recursive-descent parser turning that token sequence into a
//!   tree of typed values
//!
//! # Architecture
//!
//! The implementation is organized into focused modules:
//!
//! - [`lexer`] - Tokenizer with escape and number-grammar handling
//! - [`parser`] - Recursive descent over the token sequence
//! - [`value`] - The JSON value tree, insertion-ordered objects
//! - [`limits`] - Nesting-depth protection
//! - [`writer`] - Compact serialization
//! - [`error`] - Typed lexical and syntactic errors
//!
//! Parsing is a pure function of its input: no I/O, no logging, no shared
//! state between calls. Concurrent callers may parse separate inputs from
//! separate threads without coordination.
//!
//! # Example
//!
//! ```
//! use plainjson::{parse, Value};
//!
//! let value = parse(r#"{"id": 7, "tags": ["a", "b"]}"#).unwrap();
//! assert_eq!(value.get("id").and_then(Value::as_f64), Some(7.0));
//! assert_eq!(value.get("tags").and_then(|t| t.get_index(1)).and_then(Value::as_str), Some("b"));
//! ```

// Library code must avoid unwrap/expect/panic; errors propagate to callers.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod lexer;
pub mod limits;
pub mod parser;
pub mod value;
pub mod writer;

// Re-export commonly used types
pub use error::{LexError, LexResult, ParseError, ParseResult};
pub use lexer::{tokenize, Token};
pub use limits::Limits;
pub use parser::{parse, parse_with_limits};
pub use value::Value;
pub use writer::to_string;
