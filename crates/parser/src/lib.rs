//! A hand-rolled recursive-descent parser for the surface syntax.
//!
//! `Scanner`-style tokenizers that support a single token of putback
//! (`ungetToken`) informed this design; `redex-lexer::tokenize` already
//! hands us the whole token list, so putback here is just "don't advance
//! the cursor". The grammar itself — an expression is a left-associated run
//! of atoms, and `let NAME VALUE in BODY` desugars to `(\NAME BODY) VALUE`
//! rather than getting its own AST node — follows that shape directly.
//!
//! The grammar is expressed directly as a handful of mutually recursive
//! functions rather than generated, so that every production stays
//! something a reviewer can read straight through.

use redex_ast::Expr;
use redex_lexer::{tokenize, LexError, Token};
use std::rc::Rc;
use thiserror::Error;

/// Something went wrong turning source text into an [`Expr`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Lexing failed before parsing ever got a token stream to work with.
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    /// A token appeared where the grammar didn't allow it.
    #[error("unexpected token {found}, expected {expected}")]
    UnexpectedToken {
        /// What the grammar wanted.
        expected: String,
        /// What it saw instead, rendered for diagnostics.
        found: String,
    },
    /// The token stream ended where an expression was still expected.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// What the grammar wanted.
        expected: String,
    },
    /// Tokens remained after a complete expression was parsed.
    #[error("trailing input after expression: {found}")]
    TrailingInput {
        /// The token the parser stopped at.
        found: String,
    },
}

/// Parses a complete program: one expression, with nothing left over.
pub fn parse(source: &str) -> Result<Rc<Expr>, ParseError> {
    match parse_inner(source) {
        Ok(expr) => Ok(expr),
        Err(err) => {
            // Lex errors are already logged at their source in `redex-lexer`.
            if !matches!(err, ParseError::Lex(_)) {
                log::warn!("parse error: {err}");
            }
            Err(err)
        }
    }
}

fn parse_inner(source: &str) -> Result<Rc<Expr>, ParseError> {
    let owned = tokenize(source)?;
    let tokens: Vec<Token<'_>> = owned.into_iter().map(|(t, _)| t).collect();
    let mut parser = Parser { tokens: &tokens, pos: 0 };
    let expr = parser.expression()?;
    if let Some(tok) = parser.peek() {
        return Err(ParseError::TrailingInput { found: tok.describe() });
    }
    Ok(expr)
}

struct Parser<'t, 'input> {
    tokens: &'t [Token<'input>],
    pos: usize,
}

impl<'t, 'input> Parser<'t, 'input> {
    fn peek(&self) -> Option<Token<'input>> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token<'input>> {
        let tok = self.peek();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    /// An expression is a left-associated run of one or more atoms:
    /// `f a b` parses as `(f a) b`. Mirrors `parseExpression`'s loop that
    /// keeps folding in `parseExpressionTail` results until one returns
    /// nothing to apply.
    fn expression(&mut self) -> Result<Rc<Expr>, ParseError> {
        let mut expr = self.atom(true)?;
        while let Some(arg) = self.try_atom()? {
            expr = Expr::apply(expr, arg);
        }
        Ok(expr)
    }

    /// Parses one atom, requiring one to be present.
    fn atom(&mut self, required: bool) -> Result<Rc<Expr>, ParseError> {
        match self.try_atom()? {
            Some(expr) => Ok(expr),
            None if required => match self.peek() {
                Some(tok) => Err(ParseError::UnexpectedToken {
                    expected: "an expression".into(),
                    found: tok.describe(),
                }),
                None => Err(ParseError::UnexpectedEnd { expected: "an expression".into() }),
            },
            None => unreachable!(),
        }
    }

    /// Tries to parse one atom; returns `Ok(None)` on tokens that end a
    /// surrounding construct instead of starting a new atom (`)`, `in`, or
    /// end of input) without consuming them, mirroring
    /// `parseExpressionTail`'s `nullptr` returns and `ungetToken` calls.
    fn try_atom(&mut self) -> Result<Option<Rc<Expr>>, ParseError> {
        let tok = match self.peek() {
            Some(tok) => tok,
            None => return Ok(None),
        };
        match tok {
            Token::RParen | Token::In => Ok(None),
            Token::Lambda => {
                self.advance();
                let name = self.expect_ident()?;
                let body = self.expression()?;
                Ok(Some(Expr::lambda(name, body)))
            }
            Token::Let => {
                self.advance();
                let name = self.expect_ident()?;
                let value = self.expression()?;
                self.expect(Token::In)?;
                let body = self.expression()?;
                Ok(Some(Expr::apply(Expr::lambda(name, body), value)))
            }
            Token::Ident(name) => {
                self.advance();
                Ok(Some(Expr::var(name)))
            }
            Token::Int(n) => {
                self.advance();
                Ok(Some(Expr::constant(n)))
            }
            Token::CharLit(c) => {
                self.advance();
                Ok(Some(Expr::constant(c)))
            }
            Token::LParen => {
                self.advance();
                let inner = self.expression()?;
                self.expect(Token::RParen)?;
                Ok(Some(inner))
            }
        }
    }

    fn expect(&mut self, want: Token<'input>) -> Result<(), ParseError> {
        match self.advance() {
            Some(tok) if std::mem::discriminant(&tok) == std::mem::discriminant(&want) => Ok(()),
            Some(tok) => Err(ParseError::UnexpectedToken {
                expected: want.describe(),
                found: tok.describe(),
            }),
            None => Err(ParseError::UnexpectedEnd { expected: want.describe() }),
        }
    }

    fn expect_ident(&mut self) -> Result<&'input str, ParseError> {
        match self.advance() {
            Some(Token::Ident(name)) => Ok(name),
            Some(tok) => Err(ParseError::UnexpectedToken {
                expected: "an identifier".into(),
                found: tok.describe(),
            }),
            None => Err(ParseError::UnexpectedEnd { expected: "an identifier".into() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_identity() {
        let expr = parse("\\x x").unwrap();
        assert_eq!(expr.to_string(), "\\x x");
    }

    #[test]
    fn application_is_left_associative() {
        let expr = parse("f a b").unwrap();
        assert_eq!(expr.to_string(), "(f a) b");
    }

    #[test]
    fn parens_group_an_argument() {
        let expr = parse("f (\\x x)").unwrap();
        assert_eq!(expr.to_string(), "f (\\x x)");
    }

    #[test]
    fn let_desugars_to_an_immediate_application() {
        let expr = parse("let x 1 in x").unwrap();
        assert_eq!(expr.to_structural(), parse("(\\x x) 1").unwrap().to_structural());
    }

    #[test]
    fn character_literal_parses_as_its_code_point() {
        let expr = parse("'a'").unwrap();
        assert_eq!(expr.value(), Some(b'a' as i64));
    }

    #[test]
    fn negative_integer_literal() {
        let expr = parse("-5").unwrap();
        assert_eq!(expr.value(), Some(-5));
    }

    #[test]
    fn unbalanced_parens_is_a_parse_error() {
        assert!(parse("(f a").is_err());
    }

    #[test]
    fn trailing_close_paren_is_a_parse_error() {
        assert!(parse("f a)").is_err());
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        assert!(parse("").is_err());
    }
}
