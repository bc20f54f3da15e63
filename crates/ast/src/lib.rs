//! The abstract syntax tree reduced by `redex-eval`.
//!
//! An [`Expr`] is a pure, immutable algebraic data type: five variants,
//! sharing subtrees by reference (`Rc`), with no parent pointers. Nothing in
//! this crate ever mutates a node after construction — the only place a tree
//! is rewritten "in place" is the memoising write into an environment slot,
//! which lives in `redex-eval`, not here.

use std::fmt;
use std::rc::Rc;

/// One node of the AST.
///
/// `Nothing` is an internal sentinel produced only by malformed
/// construction; it is never returned by the parser and reducing it is an
/// assertion failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A reference to an identifier.
    Var(Rc<str>),
    /// A literal integer. Character literals decay to their code point
    /// during lexing, so by the time an `Expr` exists there is no separate
    /// character variant.
    Const(i64),
    /// `\name. body` — an anonymous function of one parameter.
    Lam(Rc<str>, Rc<Expr>),
    /// `fun arg` — application, left-associative when parsed.
    Ap(Rc<Expr>, Rc<Expr>),
    /// Internal sentinel. See the type-level docs.
    Nothing,
}

impl Expr {
    /// Builds a `Var` node.
    pub fn var(name: impl Into<Rc<str>>) -> Rc<Expr> {
        Rc::new(Expr::Var(name.into()))
    }

    /// Builds a `Const` node.
    pub fn constant(value: i64) -> Rc<Expr> {
        Rc::new(Expr::Const(value))
    }

    /// Builds a `Lam` node.
    pub fn lambda(name: impl Into<Rc<str>>, body: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Lam(name.into(), body))
    }

    /// Builds an `Ap` node.
    pub fn apply(fun: Rc<Expr>, arg: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Ap(fun, arg))
    }

    /// Is this a lambda abstraction?
    pub fn is_lam(&self) -> bool {
        matches!(self, Expr::Lam(..))
    }

    /// Is this an integer literal?
    pub fn is_literal(&self) -> bool {
        matches!(self, Expr::Const(_))
    }

    /// Is this a variable reference?
    pub fn is_var(&self) -> bool {
        matches!(self, Expr::Var(_))
    }

    /// Is this an application?
    pub fn is_ap(&self) -> bool {
        matches!(self, Expr::Ap(..))
    }

    /// The name carried by a `Var` (the identifier) or a `Lam` (its
    /// parameter) — the only two variants that carry a name.
    pub fn name(&self) -> Option<&Rc<str>> {
        match self {
            Expr::Var(name) | Expr::Lam(name, _) => Some(name),
            _ => None,
        }
    }

    /// The literal value carried by a `Const`.
    pub fn value(&self) -> Option<i64> {
        match self {
            Expr::Const(v) => Some(*v),
            _ => None,
        }
    }

    /// A lambda's body, or an application's function position.
    ///
    /// The reducer treats both the same way — as "the thing in function
    /// position of this node" — so one accessor serves both.
    pub fn body(&self) -> Option<&Rc<Expr>> {
        match self {
            Expr::Lam(_, body) => Some(body),
            Expr::Ap(fun, _) => Some(fun),
            _ => None,
        }
    }

    /// An application's argument position.
    pub fn argument(&self) -> Option<&Rc<Expr>> {
        match self {
            Expr::Ap(_, arg) => Some(arg),
            _ => None,
        }
    }

    /// The structural, machine-readable rendering: `["var","NAME"]`,
    /// `["int",N]`, `["lam","NAME",BODY]`, `["app",BODY,ARG]`.
    pub fn to_structural(&self) -> String {
        match self {
            Expr::Var(name) => format!("[\"var\",\"{name}\"]"),
            Expr::Const(value) => format!("[\"int\",{value}]"),
            Expr::Lam(name, body) => format!("[\"lam\",\"{name}\",{}]", body.to_structural()),
            Expr::Ap(fun, arg) => {
                format!("[\"app\",{},{}]", fun.to_structural(), arg.to_structural())
            }
            Expr::Nothing => unreachable!("malformed AST: printing the Nothing sentinel"),
        }
    }
}

impl fmt::Display for Expr {
    /// The pretty-printed form: identifiers and integers print verbatim, a
    /// lambda prints `\NAME BODY`, and an application parenthesizes either
    /// side that is itself a lambda or an application — including the
    /// function side, so `f 1 2` prints as `(f 1) 2`, not `f 1 2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{name}"),
            Expr::Const(value) => write!(f, "{value}"),
            Expr::Lam(name, body) => write!(f, "\\{name} {body}"),
            Expr::Ap(fun, arg) => {
                if fun.is_lam() || fun.is_ap() {
                    write!(f, "({fun})")?;
                } else {
                    write!(f, "{fun}")?;
                }
                write!(f, " ")?;
                if arg.is_lam() || arg.is_ap() {
                    write!(f, "({arg})")
                } else {
                    write!(f, "{arg}")
                }
            }
            Expr::Nothing => unreachable!("malformed AST: printing the Nothing sentinel"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pretty_prints_identity() {
        let id = Expr::lambda("x", Expr::var("x"));
        assert_eq!(id.to_string(), "\\x x");
    }

    #[test]
    fn pretty_print_parenthesizes_lambda_and_application_on_either_side() {
        let f = Expr::var("f");
        let one = Expr::constant(1);
        let two = Expr::constant(2);
        let stuck = Expr::apply(Expr::apply(f, one), two);
        assert_eq!(stuck.to_string(), "(f 1) 2");
    }

    #[test]
    fn pretty_print_parenthesizes_lambda_argument() {
        let inner = Expr::lambda("y", Expr::var("y"));
        let outer = Expr::apply(Expr::var("f"), inner);
        assert_eq!(outer.to_string(), "f (\\y y)");
    }

    #[test]
    fn structural_print_matches_golden_shape() {
        let expr = Expr::apply(Expr::lambda("x", Expr::var("x")), Expr::constant(1));
        assert_eq!(
            expr.to_structural(),
            "[\"app\",[\"lam\",\"x\",[\"var\",\"x\"]],[\"int\",1]]"
        );
    }

    #[test]
    fn accessors_agree_with_predicates() {
        let lam = Expr::lambda("x", Expr::var("x"));
        assert!(lam.is_lam());
        assert_eq!(lam.name().map(|n| n.as_ref()), Some("x"));

        let ap = Expr::apply(Expr::var("f"), Expr::constant(7));
        assert!(ap.is_ap());
        assert_eq!(ap.body().map(|b| b.as_ref()), Some(&Expr::Var("f".into())));
        assert_eq!(ap.argument().map(|a| a.as_ref()), Some(&Expr::Const(7)));
    }
}
