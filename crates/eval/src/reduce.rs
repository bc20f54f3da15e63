//! The mutually recursive `whnf`/`nf` reducers — the evaluator's
//! core. Both implement the same application rule; `nf` additionally
//! normalises under a lambda's binder (erasing the bound name first, so a
//! shadowed outer binding cannot leak through) and always finishes a forced
//! variable or application with a further `nf` rather than stopping at
//! `whnf`.

use crate::env::Env;
use crate::value::Value;
use redex_ast::Expr;
use std::rc::Rc;

/// Weak head normal form: reduces just far enough that the outermost
/// constructor is final.
pub fn whnf(expr: &Rc<Expr>, env: &Env) -> Value {
    reduce(expr, env, false)
}

/// Full normal form: reduces everywhere, including under binders.
pub fn nf(expr: &Rc<Expr>, env: &Env) -> Value {
    reduce(expr, env, true)
}

fn reduce(expr: &Rc<Expr>, env: &Env, full: bool) -> Value {
    log::trace!("reduce({expr}, full={full})");
    match expr.as_ref() {
        Expr::Const(_) => Value::NormalForm(expr.clone()),

        Expr::Var(name) => match env.lookup(name) {
            Some(slot) => {
                let current = slot.borrow().clone();
                if current.is_normal_form() || current.is_primitive() {
                    return current;
                }
                let forced = reduce(&current.expr(), &current.env(), full);
                *slot.borrow_mut() = forced.clone();
                forced
            }
            None => Value::NormalForm(expr.clone()),
        },

        Expr::Lam(name, body) => {
            if !full {
                Value::Closure(expr.clone(), env.clone())
            } else {
                let inner_env = env.erase(name);
                let reduced_body = nf(body, &inner_env).expr();
                Value::NormalForm(Expr::lambda(name.clone(), reduced_body))
            }
        }

        Expr::Ap(fun, arg) => {
            let head = whnf(fun, env);
            if head.is_callable() {
                let result = head.call(arg.clone(), env.clone());
                if result.is_normal_form() || result.is_primitive() {
                    result
                } else {
                    reduce(&result.expr(), &result.env(), full)
                }
            } else {
                let reduced_arg = nf(arg, env).expr();
                Value::NormalForm(Expr::apply(head.expr(), reduced_arg))
            }
        }

        Expr::Nothing => unreachable!("malformed AST: reducing the Nothing sentinel"),
    }
}
