//! The three-variant value representation.

use crate::env::Env;
use redex_ast::Expr;
use std::fmt;
use std::rc::Rc;

/// A host callback: receives the unevaluated argument expression and the
/// caller's environment, and is free to force it (or not) however it likes.
pub type PrimitiveFn = dyn Fn(Rc<Expr>, Env) -> Value;

/// A reduced-or-reducible term.
#[derive(Clone)]
pub enum Value {
    /// A suspended computation: an expression paired with the environment
    /// it should be read in.
    Closure(Rc<Expr>, Env),
    /// A host-implemented operation.
    Primitive(Rc<PrimitiveFn>),
    /// An expression already proven irreducible. Carries no environment —
    /// none is needed for anything reachable from here.
    NormalForm(Rc<Expr>),
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Closure(expr, _) => write!(f, "Closure({expr})"),
            Value::Primitive(_) => write!(f, "Primitive(..)"),
            Value::NormalForm(expr) => write!(f, "NormalForm({expr})"),
        }
    }
}

impl Value {
    /// Is this already in normal form?
    pub fn is_normal_form(&self) -> bool {
        matches!(self, Value::NormalForm(_))
    }

    /// Is this a host primitive?
    pub fn is_primitive(&self) -> bool {
        matches!(self, Value::Primitive(_))
    }

    /// "Callable" means a closure over a lambda, or a primitive. A `Lam` is
    /// never called directly — only a `Closure` wrapping one is.
    pub fn is_callable(&self) -> bool {
        match self {
            Value::Primitive(_) => true,
            Value::Closure(expr, _) => expr.is_lam(),
            Value::NormalForm(_) => false,
        }
    }

    /// Applies this value to `arg` (unevaluated) under `caller_env`.
    ///
    /// Callers must check [`Value::is_callable`] first; calling a
    /// non-callable value is a programmer error and panics
    /// rather than silently producing nonsense.
    pub fn call(&self, arg: Rc<Expr>, caller_env: Env) -> Value {
        match self {
            Value::Primitive(host) => host(arg, caller_env),
            Value::Closure(expr, env) if expr.is_lam() => {
                let name = expr.name().expect("Lam always carries a name").clone();
                let body = expr.body().expect("Lam always carries a body").clone();
                let extended = env.insert(name, Value::Closure(arg, caller_env));
                Value::Closure(body, extended)
            }
            _ => panic!("call invoked on a non-callable value"),
        }
    }

    /// The expression carried by a `Closure` or `NormalForm`.
    pub fn expr(&self) -> Rc<Expr> {
        match self {
            Value::Closure(expr, _) => expr.clone(),
            Value::NormalForm(expr) => expr.clone(),
            Value::Primitive(_) => panic!("a primitive carries no expression"),
        }
    }

    /// The environment carried by a `Closure`.
    pub fn env(&self) -> Env {
        match self {
            Value::Closure(_, env) => env.clone(),
            _ => panic!("only a Closure carries an environment"),
        }
    }
}
