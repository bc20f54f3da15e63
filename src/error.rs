//! The root crate's error type, composed from each library crate's own
//! error enum via `#[from]`: every failure mode reified as a typed value,
//! not a process exit.

use thiserror::Error;

/// Anything that can go wrong reading, parsing, or preparing a program for
/// reduction. Reduction itself does not produce `Error`s — an unreachable
/// lookup or call-of-non-callable is an assertion, not a recoverable
/// condition this type models.
#[derive(Debug, Error)]
pub enum Error {
    /// Parsing failed (lexing failures surface through
    /// [`redex_parser::ParseError`]'s own `Lex` variant).
    #[error(transparent)]
    Parse(#[from] redex_parser::ParseError),
    /// Assembling the prelude failed.
    #[error(transparent)]
    Prelude(#[from] redex_prelude::PreludeError),
    /// Reading a source or prelude file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
