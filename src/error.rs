//! Error types for the lexer and parser.
//!
//! Every failure is detected at the point of violation and propagated
//! immediately to the caller as a typed error; there are no partial results
//! and no recovery. Lexical errors carry the byte offset where scanning
//! stopped, syntactic errors the index of the offending token.

use thiserror::Error;

/// Errors produced while tokenizing raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot begin or continue any token.
    #[error("unexpected character {ch:?} at byte {offset}")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// Byte offset of the character in the input.
        offset: usize,
    },

    /// Input ended inside a string literal.
    #[error("unterminated string starting at byte {offset}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        offset: usize,
    },

    /// A malformed `true`, `false`, `null`, number, or escape sequence.
    #[error("invalid literal at byte {offset}")]
    InvalidLiteral {
        /// Byte offset where the literal stopped matching.
        offset: usize,
    },
}

/// Errors produced while parsing a token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lexer rejected the input before parsing began.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A token that no grammar rule allows at this position.
    #[error("unexpected token at index {index}")]
    UnexpectedToken {
        /// Index of the offending token.
        index: usize,
    },

    /// The token sequence was empty or ended inside an array.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// An object member did not begin with a string key.
    #[error("expected object key at index {index}")]
    ExpectedObjectKey {
        /// Index where a string key was required.
        index: usize,
    },

    /// An object key was not followed by a colon.
    #[error("expected ':' at index {index}")]
    ExpectedColon {
        /// Index where the colon was required.
        index: usize,
    },

    /// Tokens remained after a complete top-level value.
    #[error("unexpected trailing input at index {index}")]
    UnexpectedTrailingInput {
        /// Index of the first token past the top-level value.
        index: usize,
    },

    /// Nesting exceeded the configured depth limit.
    #[error("nesting exceeds maximum depth of {limit}")]
    NestingTooDeep {
        /// The configured depth limit.
        limit: usize,
    },
}

/// Result type for lexer operations.
pub type LexResult<T> = Result<T, LexError>;

/// Result type for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;
