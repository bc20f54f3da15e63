//! Tokenizer for the surface syntax.
//!
//! Built on [`logos`] for token definitions via derive attributes rather
//! than a hand-rolled character scanner.
//!
//! [`tokenize`] lexes the whole input eagerly into a `Vec`, mirroring a
//! `Scanner`-style constructor that drains its input into a queue before
//! parsing ever starts. The parser only ever needs lookahead/putback over a
//! token stream it already has in hand, so there's no benefit to threading
//! a lazy `logos::Lexer` through the parser instead.

use logos::Logos;
use thiserror::Error;

/// A lexical error: an unexpected input character.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    #[default]
    #[error("unexpected input character")]
    UnexpectedCharacter,
}

/// One token of the surface syntax, with the source slice it was lexed from
/// where that slice matters (identifiers) and already-decoded payloads where
/// it doesn't (integers, character literals).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"--[^\n]*")]
pub enum Token<'input> {
    /// `\`
    #[token("\\", priority = 20)]
    Lambda,
    /// `(`
    #[token("(", priority = 20)]
    LParen,
    /// `)`
    #[token(")", priority = 20)]
    RParen,
    /// the `let` keyword
    #[token("let", priority = 20)]
    Let,
    /// the `in` keyword
    #[token("in", priority = 20)]
    In,
    /// an optionally-signed decimal integer literal
    #[regex(r"[+-]?[0-9]+", |lex| lex.slice().parse::<i64>().ok(), priority = 15)]
    Int(i64),
    /// a `'c'` character literal, already decayed to its code point
    #[regex(r"'[\x20-\x7e]'", |lex| lex.slice().as_bytes()[1] as i64, priority = 16)]
    CharLit(i64),
    /// any other run of non-whitespace, non-reserved characters
    #[regex(r"[^\s()\\$]+", |lex| lex.slice())]
    Ident(&'input str),
}

impl<'input> Token<'input> {
    /// A short human-readable description, used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Token::Lambda => "\\".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::Let => "let".to_string(),
            Token::In => "in".to_string(),
            Token::Int(n) => n.to_string(),
            Token::CharLit(c) => format!("'{}'", *c as u8 as char),
            Token::Ident(name) => name.to_string(),
        }
    }
}

/// Lexes `source` into the full token list, byte spans included (useful for
/// diagnostics that want to point at the offending slice).
pub fn tokenize(source: &str) -> Result<Vec<(Token<'_>, std::ops::Range<usize>)>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(err) => {
                log::warn!("lex error at {:?}: {err}", lexer.span());
                return Err(err);
            }
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token<'_>> {
        tokenize(source).unwrap().into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn simplest_example() {
        assert_eq!(kinds("x"), vec![Token::Ident("x")]);
    }

    #[test]
    fn lambda_application() {
        assert_eq!(
            kinds("\\x x"),
            vec![Token::Lambda, Token::Ident("x"), Token::Ident("x")]
        );
    }

    #[test]
    fn let_and_in_are_keywords_not_identifiers() {
        assert_eq!(
            kinds("let sq \\x * x x in sq 7"),
            vec![
                Token::Let,
                Token::Ident("sq"),
                Token::Lambda,
                Token::Ident("x"),
                Token::Ident("*"),
                Token::Ident("x"),
                Token::Ident("x"),
                Token::In,
                Token::Ident("sq"),
                Token::Int(7),
            ]
        );
    }

    #[test]
    fn negative_integer_literal() {
        assert_eq!(kinds("-5"), vec![Token::Int(-5)]);
    }

    #[test]
    fn character_literal_decays_to_code_point() {
        assert_eq!(kinds("'a'"), vec![Token::CharLit(b'a' as i64)]);
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(
            kinds("x -- trailing comment\ny"),
            vec![Token::Ident("x"), Token::Ident("y")]
        );
    }

    #[test]
    fn unexpected_character_is_a_lex_error() {
        assert_eq!(tokenize("$").unwrap_err(), LexError::UnexpectedCharacter);
    }
}
