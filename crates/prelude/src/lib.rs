//! The prelude loader and primitive protocol.
//!
//! Binds two kinds of name into an initial [`Env`]: combinators, which are
//! just source text parsed and closed over the environment built so far,
//! and primitives, host callbacks bound directly. Order matters for the
//! combinators: `not` refers to `false`/`true`, `and`/`or` refer to those
//! and to each other's neighbours, so each row is parsed against the
//! environment accumulated by every row before it.

mod primitives;

use redex_eval::{Env, Value};
use thiserror::Error;

/// Something went wrong while assembling the initial environment.
#[derive(Debug, Error)]
pub enum PreludeError {
    /// A combinator's source text failed to parse — a bug in this crate,
    /// not in user input, since the table below is fixed at compile time.
    #[error("prelude combinator {name:?} failed to parse: {source}")]
    BadCombinator {
        /// The combinator's bound name.
        name: &'static str,
        /// The underlying parse failure.
        #[source]
        source: redex_parser::ParseError,
    },
}

/// Combinators expressed as source, bound in this order. `bool` isn't used
/// by any end-to-end scenario but is carried forward anyway — it's the
/// same kind of "small prelude combinator" as the rest of this table.
const COMBINATORS: &[(&str, &str)] = &[
    ("bool", "\\x x true false"),
    ("true", "\\a \\b a"),
    ("false", "\\a \\b b"),
    ("if", "\\pred \\then \\else pred then else"),
    ("not", "\\x x false true"),
    ("and", "\\x \\y x y false"),
    ("or", "\\x \\y x true y"),
    ("id", "\\x x"),
    ("flip", "\\f \\x \\y f y x"),
    (".", "\\f \\g \\x f (g x)"),
    ("!=", "\\a . not (== a)"),
    (">", "flip <"),
    // A naive `>=` defined as `flip >=` is circular and either diverges or
    // relies on a redefinition that never arrives; bound as `flip >`
    // instead, the evident intent.
    (">=", "flip >"),
    (">>=", "\\m \\f \\s (m s) (\\a \\s' f a s')"),
    (">>", "\\ma \\mb >>= ma (\\_ mb)"),
    ("runIO", "\\m m s"),
    ("pair", "\\a \\b \\p p a b"),
    ("pureIO", "pair"),
];

/// Builds the initial environment: every primitive, then every combinator
/// in table order, each closed over everything bound before it.
pub fn default_env() -> Result<Env, PreludeError> {
    let mut env = Env::new();

    env = env.insert("Y", primitives::fixed_point());
    env = env.insert("+", primitives::arithmetic(|a, b| a + b));
    env = env.insert("-", primitives::arithmetic(|a, b| a - b));
    env = env.insert("*", primitives::multiply());
    env = env.insert("/", primitives::arithmetic(|a, b| a / b));
    env = env.insert("%", primitives::arithmetic(|a, b| a % b));
    env = env.insert("==", primitives::comparison(|a, b| a == b));
    env = env.insert("<", primitives::comparison(|a, b| a < b));
    env = env.insert("<=", primitives::comparison(|a, b| a <= b));
    env = env.insert("putChar", primitives::put_char());
    env = env.insert("getChar", primitives::get_char());

    for &(name, source) in COMBINATORS {
        log::debug!("loading prelude combinator {name:?}");
        let expr = redex_parser::parse(source)
            .map_err(|source| PreludeError::BadCombinator { name, source })?;
        env = env.insert(name, Value::Closure(expr, env.clone()));
    }

    Ok(env)
}

/// Binds one more `name = source` combinator on top of an existing
/// environment — the primitive behind the REPL's `:let NAME EXPR`
/// directive.
pub fn bind(env: &Env, name: &str, source: &str) -> Result<Env, redex_parser::ParseError> {
    let expr = redex_parser::parse(source)?;
    Ok(env.insert(name, Value::Closure(expr, env.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use redex_eval::nf;
    use redex_parser::parse;

    fn run(env: &Env, source: &str) -> String {
        let expr = parse(source).unwrap();
        nf(&expr, env).expr().to_string()
    }

    #[test]
    fn identity_application() {
        let env = default_env().unwrap();
        assert_eq!(run(&env, "(\\x x) 1"), "1");
    }

    #[test]
    fn if_true_branch() {
        let env = default_env().unwrap();
        assert_eq!(run(&env, "if true 1 2"), "1");
    }

    #[test]
    fn and_true_not_false_is_church_true() {
        let env = default_env().unwrap();
        assert_eq!(run(&env, "and true (not false)"), "\\a \\b a");
    }

    #[test]
    fn let_binding_desugars_and_evaluates() {
        let env = default_env().unwrap();
        assert_eq!(run(&env, "let sq \\x * x x in sq 7"), "49");
    }

    #[test]
    fn y_combinator_factorial() {
        let env = default_env().unwrap();
        let source = "Y (\\f \\n if (<= n 1) 1 (* n (f (- n 1)))) 5";
        assert_eq!(run(&env, source), "120");
    }

    #[test]
    fn capture_avoiding_application() {
        let env = default_env().unwrap();
        assert_eq!(run(&env, "(\\x \\y x) a b"), "a");
    }

    #[test]
    fn flipped_greater_than_or_equal_is_fixed() {
        let env = default_env().unwrap();
        assert_eq!(run(&env, ">= 3 3"), "true");
        assert_eq!(run(&env, ">= 2 3"), "false");
    }

    #[test]
    fn bind_adds_a_new_combinator() {
        let env = default_env().unwrap();
        let env = bind(&env, "double", "\\x * x 2").unwrap();
        assert_eq!(run(&env, "double 21"), "42");
    }
}
