//! Permissive parser for Python-style literal expressions.
//!
//! Language models frequently answer with dict/list syntax instead of strict
//! JSON: single-quoted strings, `True`/`False`/`None`, tuples, trailing
//! commas. This parser accepts that literal subset and maps it onto
//! `serde_json::Value`:
//!
//! | Literal                    | JSON                      |
//! |----------------------------|---------------------------|
//! | dict                       | object (keys stringified) |
//! | list, tuple, set           | array                     |
//! | `'str'`, `"str"`, `'''s'''`| string                    |
//! | int, float                 | number                    |
//! | `True` / `False` / `None`  | `true` / `false` / `null` |
//!
//! Anything else (names, calls, operators, bytes, complex numbers) is rejected.

use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Reason a literal could not be parsed. Only used for debug logging.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LiteralError {
    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("unexpected character {found:?} at offset {offset}")]
    Unexpected { found: char, offset: usize },

    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    #[error("invalid escape sequence at offset {0}")]
    InvalidEscape(usize),

    #[error("unsupported dict key at offset {0}")]
    UnsupportedKey(usize),

    #[error("trailing input at offset {0}")]
    TrailingInput(usize),

    #[error("nesting too deep at offset {0}")]
    TooDeep(usize),
}

/// Deepest container nesting accepted, same as `serde_json`'s limit.
pub const MAX_DEPTH: usize = 128;

type LiteralResult<T> = Result<T, LiteralError>;

/// Parse `input` as a single literal expression.
pub fn parse_literal(input: &str) -> LiteralResult<Value> {
    let mut parser = Parser::new(input);
    parser.skip_insignificant();
    let value = parser.value()?;
    parser.skip_insignificant();
    if parser.pos < parser.chars.len() {
        return Err(LiteralError::TrailingInput(parser.pos));
    }
    Ok(value)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> LiteralResult<char> {
        let c = self.peek().ok_or(LiteralError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(c)
    }

    fn unexpected(&self) -> LiteralError {
        self.peek().map_or(LiteralError::UnexpectedEnd, |found| {
            LiteralError::Unexpected {
                found,
                offset: self.pos,
            }
        })
    }

    fn expect(&mut self, expected: char) -> LiteralResult<()> {
        if self.peek() == Some(expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    /// Skip whitespace, line continuations and `#` comments.
    fn skip_insignificant(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.pos += 1;
            } else if c == '\\' && self.peek_at(1) == Some('\n') {
                self.pos += 2;
            } else if c == '#' {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
    }

    fn value(&mut self) -> LiteralResult<Value> {
        match self.peek().ok_or(LiteralError::UnexpectedEnd)? {
            '{' | '[' | '(' => self.nested(),
            '\'' | '"' => self.strings(),
            'r' | 'R' | 'u' | 'U' if matches!(self.peek_at(1), Some('\'' | '"')) => self.strings(),
            '+' | '-' | '.' | '0'..='9' => self.number(),
            c if c.is_alphabetic() || c == '_' => self.keyword(),
            _ => Err(self.unexpected()),
        }
    }

    /// Parse a container, bounding recursion at [`MAX_DEPTH`].
    fn nested(&mut self) -> LiteralResult<Value> {
        if self.depth >= MAX_DEPTH {
            return Err(LiteralError::TooDeep(self.pos));
        }
        self.depth += 1;
        let result = match self.peek() {
            Some('{') => self.dict_or_set(),
            Some('[') => self.list(),
            _ => self.tuple_or_group(),
        };
        self.depth -= 1;
        result
    }

    /// Parse a comma-separated sequence up to `close`, allowing a trailing comma.
    fn sequence(&mut self, close: char) -> LiteralResult<(Vec<Value>, bool)> {
        let mut items = Vec::new();
        let mut saw_comma = false;
        loop {
            self.skip_insignificant();
            if self.peek() == Some(close) {
                self.pos += 1;
                return Ok((items, saw_comma));
            }
            items.push(self.value()?);
            self.skip_insignificant();
            match self.peek() {
                Some(',') => {
                    self.pos += 1;
                    saw_comma = true;
                }
                Some(c) if c == close => {}
                _ => return Err(self.unexpected()),
            }
        }
    }

    fn list(&mut self) -> LiteralResult<Value> {
        self.expect('[')?;
        let (items, _) = self.sequence(']')?;
        Ok(Value::Array(items))
    }

    fn tuple_or_group(&mut self) -> LiteralResult<Value> {
        self.expect('(')?;
        let (mut items, saw_comma) = self.sequence(')')?;
        // `(x)` is just a parenthesized expression, `(x,)` is a tuple.
        if items.len() == 1 && !saw_comma {
            return Ok(items.remove(0));
        }
        Ok(Value::Array(items))
    }

    fn dict_or_set(&mut self) -> LiteralResult<Value> {
        self.expect('{')?;
        self.skip_insignificant();
        if self.peek() == Some('}') {
            self.pos += 1;
            return Ok(Value::Object(Map::new()));
        }

        let first_offset = self.pos;
        let first = self.value()?;
        self.skip_insignificant();

        if self.peek() != Some(':') {
            return self.set_tail(first);
        }

        let mut map = Map::new();
        self.pos += 1;
        self.skip_insignificant();
        let first_value = self.value()?;
        map.insert(key_string(first, first_offset)?, first_value);

        loop {
            self.skip_insignificant();
            match self.peek() {
                Some('}') => {
                    self.pos += 1;
                    return Ok(Value::Object(map));
                }
                Some(',') => {
                    self.pos += 1;
                    self.skip_insignificant();
                    if self.peek() == Some('}') {
                        continue;
                    }
                    let key_offset = self.pos;
                    let key = self.value()?;
                    self.skip_insignificant();
                    self.expect(':')?;
                    self.skip_insignificant();
                    let value = self.value()?;
                    map.insert(key_string(key, key_offset)?, value);
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    fn set_tail(&mut self, first: Value) -> LiteralResult<Value> {
        let mut items = vec![first];
        loop {
            self.skip_insignificant();
            match self.peek() {
                Some('}') => {
                    self.pos += 1;
                    return Ok(Value::Array(items));
                }
                Some(',') => {
                    self.pos += 1;
                    self.skip_insignificant();
                    if self.peek() == Some('}') {
                        continue;
                    }
                    let item = self.value()?;
                    if !items.contains(&item) {
                        items.push(item);
                    }
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    /// One or more adjacent string literals, concatenated.
    fn strings(&mut self) -> LiteralResult<Value> {
        let mut out = self.string()?;
        loop {
            let save = self.pos;
            self.skip_insignificant();
            let next_is_string = match self.peek() {
                Some('\'' | '"') => true,
                Some('r' | 'R' | 'u' | 'U') => matches!(self.peek_at(1), Some('\'' | '"')),
                _ => false,
            };
            if !next_is_string {
                self.pos = save;
                return Ok(Value::String(out));
            }
            out.push_str(&self.string()?);
        }
    }

    fn string(&mut self) -> LiteralResult<String> {
        let mut raw = false;
        if let Some(prefix @ ('r' | 'R' | 'u' | 'U')) = self.peek() {
            raw = matches!(prefix, 'r' | 'R');
            self.pos += 1;
        }

        let quote = self.bump()?;
        let triple = self.peek() == Some(quote) && self.peek_at(1) == Some(quote);
        if triple {
            self.pos += 2;
        }

        let mut out = String::new();
        loop {
            let c = self.bump()?;
            if c == quote {
                if !triple {
                    return Ok(out);
                }
                if self.peek() == Some(quote) && self.peek_at(1) == Some(quote) {
                    self.pos += 2;
                    return Ok(out);
                }
                out.push(c);
            } else if c == '\n' && !triple {
                return Err(LiteralError::Unexpected {
                    found: c,
                    offset: self.pos - 1,
                });
            } else if c == '\\' {
                if raw {
                    out.push(c);
                    out.push(self.bump()?);
                } else {
                    self.escape(&mut out)?;
                }
            } else {
                out.push(c);
            }
        }
    }

    fn escape(&mut self, out: &mut String) -> LiteralResult<()> {
        let offset = self.pos - 1;
        let c = self.bump()?;
        match c {
            '\n' => {}
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0C}'),
            'v' => out.push('\u{0B}'),
            '0'..='7' => {
                let mut code = c.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match self.peek().and_then(|d| d.to_digit(8)) {
                        Some(d) => {
                            code = code * 8 + d;
                            self.pos += 1;
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(code).ok_or(LiteralError::InvalidEscape(offset))?);
            }
            'x' => out.push(self.hex_escape(2, offset)?),
            'u' => out.push(self.hex_escape(4, offset)?),
            'U' => out.push(self.hex_escape(8, offset)?),
            // Unknown escapes keep the backslash.
            other => {
                out.push('\\');
                out.push(other);
            }
        }
        Ok(())
    }

    fn hex_escape(&mut self, digits: usize, offset: usize) -> LiteralResult<char> {
        let mut code: u32 = 0;
        for _ in 0..digits {
            let d = self
                .bump()?
                .to_digit(16)
                .ok_or(LiteralError::InvalidEscape(offset))?;
            code = code * 16 + d;
        }
        char::from_u32(code).ok_or(LiteralError::InvalidEscape(offset))
    }

    fn number(&mut self) -> LiteralResult<Value> {
        let start = self.pos;
        let mut negative = false;
        while let Some(sign @ ('+' | '-')) = self.peek() {
            if sign == '-' {
                negative = !negative;
            }
            self.pos += 1;
            self.skip_insignificant();
        }

        let body_start = self.pos;
        while let Some(c) = self.peek() {
            let exponent_sign =
                matches!(c, '+' | '-') && matches!(self.chars.get(self.pos - 1), Some('e' | 'E'));
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || exponent_sign {
                self.pos += 1;
            } else {
                break;
            }
        }

        let body: String = self.chars[body_start..self.pos]
            .iter()
            .filter(|c| **c != '_')
            .collect();
        let text: String = self.chars[start..self.pos].iter().collect();
        let invalid = || LiteralError::InvalidNumber(text.clone());

        if body.is_empty() {
            return Err(invalid());
        }

        let radix = match body.get(..2) {
            Some("0x" | "0X") => Some(16),
            Some("0o" | "0O") => Some(8),
            Some("0b" | "0B") => Some(2),
            _ => None,
        };

        if let Some(radix) = radix {
            let magnitude = i64::from_str_radix(&body[2..], radix).map_err(|_| invalid())?;
            return Ok(Value::from(if negative { -magnitude } else { magnitude }));
        }

        let is_float = body.contains(['.', 'e', 'E']);
        if !is_float {
            if !body.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            if let Ok(magnitude) = body.parse::<i64>() {
                return Ok(Value::from(if negative { -magnitude } else { magnitude }));
            }
        }

        let magnitude: f64 = body.parse().map_err(|_| invalid())?;
        let float = if negative { -magnitude } else { magnitude };
        Number::from_f64(float)
            .map(Value::Number)
            .ok_or_else(invalid)
    }

    fn keyword(&mut self) -> LiteralResult<Value> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        let word: String = self.chars[start..self.pos].iter().collect();
        match word.as_str() {
            "True" => Ok(Value::Bool(true)),
            "False" => Ok(Value::Bool(false)),
            "None" => Ok(Value::Null),
            _ => Err(LiteralError::Unexpected {
                found: self.chars[start],
                offset: start,
            }),
        }
    }
}

/// Render a parsed dict key as a JSON object key.
fn key_string(key: Value, offset: usize) -> LiteralResult<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(true) => Ok("True".to_string()),
        Value::Bool(false) => Ok("False".to_string()),
        Value::Null => Ok("None".to_string()),
        Value::Array(_) | Value::Object(_) => Err(LiteralError::UnsupportedKey(offset)),
    }
}
