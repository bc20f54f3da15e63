#![deny(missing_docs)]

//! `redex`: an interactive interpreter for an untyped lambda calculus
//! extended with integer and character literals, `let`-bindings, and a
//! prelude of user-level combinators and host-implemented primitives.
//!
//! The evaluator itself — environments, values, and the `whnf`/`nf`
//! reducers — lives in [`redex_eval`]; this crate wires the lexer, parser,
//! prelude, and reducer together behind a single [`run_source`] entry
//! point, with the CLI argument surface and REPL loop in `cli`/`repl` and
//! the binary entry point in `src/main.rs`.

mod error;

pub mod cli;
pub mod repl;

pub use error::Error;

use redex_eval::{nf, Env};
use std::rc::Rc;

/// Parses and fully reduces one program, returning its pretty-printed
/// normal form.
///
/// A result that normalises to a bare, unapplied primitive (`+`, `Y`,
/// `putChar`, a partially applied `+ 1`, ...) has nothing to pretty-print —
/// there is no `Expr` behind a host callback — so this reports the same
/// fallback message used for that case rather than panicking.
///
/// This is the library-embedding surface: every failure mode is a typed
/// [`Error`] variant rather than a process exit.
pub fn run_source(source: &str, env: &Env) -> Result<String, Error> {
    let expr = redex_parser::parse(source)?;
    let result = nf(&expr, env);
    if result.is_primitive() {
        Ok("I dunno how to show a primitive function".to_string())
    } else {
        Ok(result.expr().to_string())
    }
}

/// Builds the prelude environment, logging its progress at `debug`.
pub fn default_env() -> Result<Env, Error> {
    log::debug!("loading prelude");
    let env = redex_prelude::default_env()?;
    log::debug!("prelude loaded");
    Ok(env)
}

/// Reads and evaluates `path` as a prelude file, folding its bindings on
/// top of `env`. Used for `--prelude FILE` and for loading the base
/// prelude before a script or REPL session.
pub fn load_prelude_file(env: &Env, path: &std::path::Path) -> Result<Env, Error> {
    let source = std::fs::read_to_string(path)?;
    let mut current = env.clone();
    for (name, rhs) in parse_bindings(&source) {
        current = redex_prelude::bind(&current, name, rhs)?;
    }
    Ok(current)
}

/// Splits a prelude source file into `name = expr` style assignment lines,
/// one binding per line, blank lines and `--` comments ignored.
///
/// The binding-file format isn't otherwise specified, so the simplest
/// workable convention (one `NAME EXPR` binding per line) is used rather
/// than guessed at in more detail.
fn parse_bindings(source: &str) -> Vec<(&str, &str)> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("--"))
        .filter_map(|line| line.split_once(char::is_whitespace))
        .map(|(name, rhs)| (name, rhs.trim()))
        .collect()
}

/// Renders a value already in normal form using the bit-exact structural
/// format, for diagnostics and the `:ast` style of tooling.
pub fn to_structural(expr: &Rc<redex_ast::Expr>) -> String {
    expr.to_structural()
}
