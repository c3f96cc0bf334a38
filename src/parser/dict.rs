//! Dictionary-literal grammar for the header text
//!
//! ```text
//! dict    := '{' (entry (',' entry)* ','?)? '}'
//! entry   := literal ':' literal
//! literal := string | number | ident | tuple | paren | list
//! tuple   := '(' ')' | '(' literal ',' ')' | '(' literal (',' literal)+ ','? ')'
//! paren   := '(' literal ')'      (just the inner literal)
//! list    := '[' (literal (',' literal)* ','?)? ']'
//! ```
//!
//! Only literals are recognized; nothing in the header is ever evaluated.

use super::lexer::{Lexer, Token, TokenKind};
use crate::error::{DecodeError, Result};

/// A parsed literal value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Str(String),
    Number(String),
    Ident(String),
    Tuple(Vec<Spanned>),
    List(Vec<Spanned>),
}

/// A literal and the absolute byte offset where it starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub value: Literal,
    pub position: usize,
}

/// Deepest tuple/list nesting accepted; a valid header needs 1
const MAX_NESTING: usize = 4;

struct DictParser<'a> {
    lexer: Lexer<'a>,
    peeked: Option<Token>,
    depth: usize,
}

impl<'a> DictParser<'a> {
    fn next(&mut self) -> Result<Token> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.lexer.next_token(),
        }
    }

    fn peek(&mut self) -> Result<&Token> {
        let token = self.next()?;
        Ok(self.peeked.insert(token))
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token> {
        let token = self.next()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(DecodeError::syntax(
                format!("expected {what}, found {}", describe(&token.kind)),
                token.position,
            ))
        }
    }

    fn parse_dict(&mut self) -> Result<Vec<(Spanned, Spanned)>> {
        self.expect(TokenKind::LBrace, "'{'")?;
        let mut entries = Vec::new();
        loop {
            if self.peek()?.kind == TokenKind::RBrace {
                self.next()?;
                break;
            }
            let key = self.parse_literal()?;
            self.expect(TokenKind::Colon, "':'")?;
            let value = self.parse_literal()?;
            entries.push((key, value));

            let token = self.next()?;
            match token.kind {
                TokenKind::Comma => continue,
                TokenKind::RBrace => break,
                other => {
                    return Err(DecodeError::syntax(
                        format!("expected ',' or '}}', found {}", describe(&other)),
                        token.position,
                    ));
                }
            }
        }
        self.expect(TokenKind::End, "end of header")?;
        Ok(entries)
    }

    fn parse_literal(&mut self) -> Result<Spanned> {
        let token = self.next()?;
        let position = token.position;
        let value = match token.kind {
            TokenKind::Str(s) => Literal::Str(s),
            TokenKind::Number(n) => Literal::Number(n),
            TokenKind::Ident(i) => Literal::Ident(i),
            TokenKind::LParen => {
                let (mut items, saw_comma) =
                    self.parse_sequence(TokenKind::RParen, "')'", position)?;
                // `(x)` is a parenthesized value, not a tuple
                if items.len() == 1 && !saw_comma {
                    return Ok(Spanned {
                        position,
                        ..items.remove(0)
                    });
                }
                Literal::Tuple(items)
            }
            TokenKind::LBracket => {
                Literal::List(self.parse_sequence(TokenKind::RBracket, "']'", position)?.0)
            }
            other => {
                return Err(DecodeError::syntax(
                    format!("expected a value, found {}", describe(&other)),
                    position,
                ));
            }
        };
        Ok(Spanned { value, position })
    }

    /// Items after an opening delimiter, up to and including `close`.
    ///
    /// Also reports whether any separating comma was seen.
    fn parse_sequence(
        &mut self,
        close: TokenKind,
        what: &str,
        open_position: usize,
    ) -> Result<(Vec<Spanned>, bool)> {
        if self.depth >= MAX_NESTING {
            return Err(DecodeError::syntax("nesting too deep", open_position));
        }
        self.depth += 1;
        let result = self.parse_items(close, what);
        self.depth -= 1;
        result
    }

    fn parse_items(&mut self, close: TokenKind, what: &str) -> Result<(Vec<Spanned>, bool)> {
        let mut items = Vec::new();
        let mut saw_comma = false;
        loop {
            if self.peek()?.kind == close {
                self.next()?;
                return Ok((items, saw_comma));
            }
            items.push(self.parse_literal()?);

            let token = self.next()?;
            if token.kind == close {
                return Ok((items, saw_comma));
            }
            if token.kind != TokenKind::Comma {
                return Err(DecodeError::syntax(
                    format!("expected ',' or {what}, found {}", describe(&token.kind)),
                    token.position,
                ));
            }
            saw_comma = true;
        }
    }
}

fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::LBrace => "'{'".into(),
        TokenKind::RBrace => "'}'".into(),
        TokenKind::LParen => "'('".into(),
        TokenKind::RParen => "')'".into(),
        TokenKind::LBracket => "'['".into(),
        TokenKind::RBracket => "']'".into(),
        TokenKind::Colon => "':'".into(),
        TokenKind::Comma => "','".into(),
        TokenKind::Str(s) => format!("string {s:?}"),
        TokenKind::Number(n) => format!("number {n}"),
        TokenKind::Ident(i) => format!("'{i}'"),
        TokenKind::End => "end of header".into(),
    }
}

/// Parse header text into its key/value entries, in source order
pub fn parse_dict(text: &[u8], base: usize) -> Result<Vec<(Spanned, Spanned)>> {
    DictParser {
        lexer: Lexer::new(text, base),
        peeked: None,
        depth: 0,
    }
    .parse_dict()
}
