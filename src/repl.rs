//! The line-editing REPL front-end.
//!
//! Input is accumulated across lines while open parentheses outnumber
//! closing ones, a `--`-prefixed first non-blank character marks a comment
//! line (echoed to history but never evaluated), and `:q`/`:quit` exit. The
//! `:let NAME EXPR` directive extends the live environment in place.

use redex_eval::Env;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Runs the REPL until end-of-input or `:q`/`:quit`.
pub fn run(mut env: Env) -> Result<(), ReadlineError> {
    let mut editor = DefaultEditor::new()?;
    let mut pending = String::new();
    let mut bracket_count: i32 = 0;

    loop {
        let prompt = if bracket_count == 0 { "redex> " } else { "redex| " };
        let line = match editor.readline(prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        };

        let trimmed = line.trim_end();
        if bracket_count == 0 && (trimmed == ":q" || trimmed == ":quit") {
            break;
        }

        let _ = editor.add_history_entry(trimmed);
        bracket_count += balance(trimmed);

        if !pending.is_empty() {
            pending.push('\n');
        }
        pending.push_str(trimmed);

        if bracket_count > 0 {
            continue;
        }

        let input = std::mem::take(&mut pending);
        let input = input.trim();
        if input.is_empty() || is_comment(input) {
            continue;
        }

        if let Some(rest) = input.strip_prefix(":let ") {
            match rest.trim().split_once(char::is_whitespace) {
                Some((name, expr)) => match redex_prelude::bind(&env, name, expr.trim()) {
                    Ok(extended) => env = extended,
                    Err(err) => eprintln!("[Parse] {err}"),
                },
                None => eprintln!("[Parse] `:let` needs a name and an expression"),
            }
            continue;
        }

        match crate::run_source(input, &env) {
            Ok(printed) => println!("{printed}"),
            Err(err) => eprintln!("{err}"),
        }
    }

    Ok(())
}

fn balance(line: &str) -> i32 {
    line.chars().fold(0, |acc, c| match c {
        '(' => acc + 1,
        ')' => acc - 1,
        _ => acc,
    })
}

fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with("--")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn balance_counts_unmatched_open_parens() {
        assert_eq!(balance("(f a"), 1);
        assert_eq!(balance("(f a)"), 0);
        assert_eq!(balance("f a)"), -1);
    }

    #[test]
    fn comment_lines_are_detected_ignoring_leading_space() {
        assert!(is_comment("  -- a comment"));
        assert!(!is_comment("f a -- trailing is not a comment line"));
    }
}
