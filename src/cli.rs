//! Command-line surface: a positional program file, repeatable extra
//! prelude files, and the usual quiet/verbose flags.

use clap::Parser;
use std::path::PathBuf;

/// A call-by-need evaluator for an untyped lambda calculus with integers,
/// characters, and a primitive protocol.
#[derive(Parser, Debug)]
#[command(name = "redex", version, about)]
pub struct Cli {
    /// Run a program from this file instead of starting the REPL.
    pub file: Option<PathBuf>,

    /// Load an additional prelude file before `file`/the REPL. May be
    /// repeated; files are applied in the order given, after the built-in
    /// prelude.
    #[arg(long = "prelude", value_name = "FILE")]
    pub prelude: Vec<PathBuf>,

    /// Suppress the startup banner.
    #[arg(short, long)]
    pub quiet: bool,

    /// Raise log verbosity. Repeat for more (`-vv` enables trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The `env_logger` filter level implied by `--verbose`'s count.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
