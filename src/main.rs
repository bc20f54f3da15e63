//! Binary entry point: argument parsing, logging setup, and the file-mode
//! vs REPL-mode branch.

use clap::Parser;
use redex::cli::Cli;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .init();

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), redex::Error> {
    let mut env = redex::default_env()?;
    for extra in &cli.prelude {
        env = redex::load_prelude_file(&env, extra)?;
    }

    match &cli.file {
        Some(path) => {
            let source = std::fs::read_to_string(path)?;
            let result = redex::run_source(&source, &env)?;
            println!("{result}");
        }
        None => {
            if !cli.quiet {
                println!("redex — an untyped lambda calculus, call-by-need");
                println!("type an expression, or :q to quit");
            }
            if let Err(err) = redex::repl::run(env) {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
