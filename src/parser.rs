//! Recursive-descent JSON parser.
//!
//! Tokenizes the full input once, then parses exactly one value over the
//! token sequence by index and requires that no tokens remain. Objects
//! preserve key insertion order with last-write-wins duplicates; arrays run
//! an explicit expect-value state machine so stray and trailing commas are
//! rejected. A depth counter bounds the recursion.

use indexmap::IndexMap;

use crate::error::{ParseError, ParseResult};
use crate::lexer::{tokenize, Token};
use crate::limits::Limits;
use crate::value::Value;

/// Parse a JSON string into a [`Value`] with standard limits.
pub fn parse(input: &str) -> ParseResult<Value> {
    parse_with_limits(input, Limits::standard())
}

/// Parse a JSON string into a [`Value`] with caller-supplied limits.
pub fn parse_with_limits(input: &str, limits: Limits) -> ParseResult<Value> {
    let tokens = tokenize(input)?;
    Parser::new(tokens, limits).parse()
}

/// Recursive-descent parser over a materialized token sequence.
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    limits: Limits,
}

impl Parser {
    fn new(tokens: Vec<Token>, limits: Limits) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            limits,
        }
    }

    /// Parse exactly one top-level value and return it.
    fn parse(mut self) -> ParseResult<Value> {
        if self.tokens.is_empty() {
            return Err(ParseError::UnexpectedEndOfInput);
        }

        let value = self.parse_value()?;

        // Ensure no trailing tokens
        if self.pos < self.tokens.len() {
            return Err(ParseError::UnexpectedTrailingInput { index: self.pos });
        }

        Ok(value)
    }

    /// The token at the cursor, if any.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Parse a single value, dispatching on the current token kind.
    fn parse_value(&mut self) -> ParseResult<Value> {
        match self.peek() {
            Some(Token::Null) => {
                self.pos += 1;
                Ok(Value::Null)
            }
            Some(Token::Boolean(b)) => {
                let b = *b;
                self.pos += 1;
                Ok(Value::Bool(b))
            }
            Some(Token::Number(n)) => {
                let n = *n;
                self.pos += 1;
                Ok(Value::Number(n))
            }
            Some(Token::String(s)) => {
                let s = s.clone();
                self.pos += 1;
                Ok(Value::String(s))
            }
            Some(Token::LeftBrace) => self.parse_object(),
            Some(Token::LeftBracket) => self.parse_array(),
            _ => Err(ParseError::UnexpectedToken { index: self.pos }),
        }
    }

    /// Parse an object; the cursor points at the opening brace.
    fn parse_object(&mut self) -> ParseResult<Value> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.limits.max_nesting_depth,
            });
        }

        // Consume opening brace
        self.pos += 1;

        let mut map = IndexMap::new();

        // Empty object
        if let Some(Token::RightBrace) = self.peek() {
            self.pos += 1;
            self.depth -= 1;
            return Ok(Value::Object(map));
        }

        loop {
            // Expect string key
            let key = match self.peek() {
                Some(Token::String(s)) => s.clone(),
                _ => return Err(ParseError::ExpectedObjectKey { index: self.pos }),
            };
            self.pos += 1;

            // Expect colon
            match self.peek() {
                Some(Token::Colon) => self.pos += 1,
                _ => return Err(ParseError::ExpectedColon { index: self.pos }),
            }

            // Parse value; a duplicate key overwrites the prior value while
            // keeping its first-insertion position
            let value = self.parse_value()?;
            map.insert(key, value);

            // Expect comma or closing brace
            match self.peek() {
                Some(Token::Comma) => {
                    self.pos += 1;
                    // Trailing comma is not an empty slot
                    if let Some(Token::RightBrace) = self.peek() {
                        return Err(ParseError::ExpectedObjectKey { index: self.pos });
                    }
                }
                Some(Token::RightBrace) => {
                    self.pos += 1;
                    break;
                }
                _ => return Err(ParseError::UnexpectedToken { index: self.pos }),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    /// Parse an array; the cursor points at the opening bracket.
    fn parse_array(&mut self) -> ParseResult<Value> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.limits.max_nesting_depth,
            });
        }

        // Consume opening bracket
        self.pos += 1;

        let mut items = Vec::new();
        let mut expect_value = true;

        loop {
            match self.peek() {
                None => return Err(ParseError::UnexpectedEndOfInput),
                Some(Token::RightBracket) => {
                    // Valid unless directly after a comma
                    if expect_value && !items.is_empty() {
                        return Err(ParseError::UnexpectedToken { index: self.pos });
                    }
                    self.pos += 1;
                    break;
                }
                Some(Token::Comma) => {
                    if expect_value || items.is_empty() {
                        return Err(ParseError::UnexpectedToken { index: self.pos });
                    }
                    expect_value = true;
                    self.pos += 1;
                }
                Some(_) => {
                    if !expect_value {
                        return Err(ParseError::UnexpectedToken { index: self.pos });
                    }
                    items.push(self.parse_value()?);
                    expect_value = false;
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }
}
