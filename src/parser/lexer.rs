//! Tokenizer for the header dictionary literal
//!
//! Header bytes are read as Latin-1, so one byte is one character and token
//! positions are plain byte offsets. `base` shifts those offsets so errors
//! point into the whole buffer rather than the header slice.

use crate::error::{DecodeError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Colon,
    Comma,
    /// Quoted string contents, quotes removed
    Str(String),
    /// Raw numeric text, e.g. `3`, `-1`, `2.5`, `10L`
    Number(String),
    /// Bare word such as `True` or `False`
    Ident(String),
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

pub struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
    base: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [u8], base: usize) -> Self {
        Self {
            input,
            pos: 0,
            base,
        }
    }

    /// Absolute offset of the cursor
    pub fn position(&self) -> usize {
        self.base + self.pos
    }

    fn peek_byte(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek_byte().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();
        let position = self.position();

        let Some(b) = self.peek_byte() else {
            return Ok(Token {
                kind: TokenKind::End,
                position,
            });
        };

        let single = match b {
            b'{' => Some(TokenKind::LBrace),
            b'}' => Some(TokenKind::RBrace),
            b'(' => Some(TokenKind::LParen),
            b')' => Some(TokenKind::RParen),
            b'[' => Some(TokenKind::LBracket),
            b']' => Some(TokenKind::RBracket),
            b':' => Some(TokenKind::Colon),
            b',' => Some(TokenKind::Comma),
            _ => None,
        };
        if let Some(kind) = single {
            self.pos += 1;
            return Ok(Token { kind, position });
        }

        let kind = match b {
            b'\'' | b'"' => self.lex_string(b)?,
            b'-' | b'0'..=b'9' => self.lex_number()?,
            b if b.is_ascii_alphabetic() || b == b'_' => self.lex_ident(),
            other => {
                return Err(DecodeError::syntax(
                    format!("unexpected character '{}'", other as char),
                    position,
                ));
            }
        };
        Ok(Token { kind, position })
    }

    fn lex_string(&mut self, quote: u8) -> Result<TokenKind> {
        let start = self.position();
        self.pos += 1;
        let mut out = String::new();
        loop {
            match self.peek_byte() {
                None => return Err(DecodeError::syntax("unterminated string", start)),
                Some(b) if b == quote => {
                    self.pos += 1;
                    return Ok(TokenKind::Str(out));
                }
                Some(b'\\') => {
                    self.pos += 1;
                    let escaped = self
                        .peek_byte()
                        .ok_or_else(|| DecodeError::syntax("unterminated string", start))?;
                    out.push(escaped as char);
                    self.pos += 1;
                }
                Some(b) => {
                    out.push(b as char);
                    self.pos += 1;
                }
            }
        }
    }

    fn lex_number(&mut self) -> Result<TokenKind> {
        let start = self.pos;
        if self.peek_byte() == Some(b'-') {
            self.pos += 1;
        }

        let digits_start = self.pos;
        self.eat_digits();
        if self.pos == digits_start {
            return Err(DecodeError::syntax("expected digits", self.base + start));
        }

        if self.peek_byte() == Some(b'.') {
            self.pos += 1;
            self.eat_digits();
        }
        // Python 2 era writers emit long integers as `10L`
        if matches!(self.peek_byte(), Some(b'L' | b'l')) {
            self.pos += 1;
        }

        Ok(TokenKind::Number(latin1(&self.input[start..self.pos])))
    }

    fn eat_digits(&mut self) {
        while self.peek_byte().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
    }

    fn lex_ident(&mut self) -> TokenKind {
        let start = self.pos;
        while self
            .peek_byte()
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_')
        {
            self.pos += 1;
        }
        TokenKind::Ident(latin1(&self.input[start..self.pos]))
    }
}

/// Decode bytes as Latin-1
pub fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
