//! Protocol primitives: the host callbacks the prelude loader binds
//! directly, as opposed to the combinators in [`crate::COMBINATORS`] that
//! are themselves just source text.
//!
//! Every primitive here is `Fn(Rc<Expr>, Env) -> Value` and decides for
//! itself how far to force its argument. Arithmetic and comparison
//! primitives assume a forced argument really is an integer; a program
//! that applies `+` to something else hits an unchecked failure, and
//! `.expect()` here documents exactly that assumption rather than
//! pretending it's recoverable.

use redex_ast::Expr;
use redex_eval::{nf, Env, Value};
use std::io::{Read, Write};
use std::rc::Rc;

fn force_int(expr: &Rc<Expr>, env: &Env) -> i64 {
    nf(expr, env)
        .expr()
        .value()
        .expect("primitive applied to a non-integer argument")
}

/// Binds a two-argument curried arithmetic primitive under `name`,
/// evaluating both operands with `nf` before combining them with `op`.
pub fn arithmetic(op: fn(i64, i64) -> i64) -> Value {
    Value::Primitive(Rc::new(move |left_expr, left_env| {
        let left = force_int(&left_expr, &left_env);
        Value::Primitive(Rc::new(move |right_expr, right_env| {
            let right = force_int(&right_expr, &right_env);
            Value::NormalForm(Expr::constant(op(left, right)))
        }))
    }))
}

/// `*` additionally short-circuits on a zero left operand without forcing
/// the right one at all.
pub fn multiply() -> Value {
    Value::Primitive(Rc::new(move |left_expr, left_env| {
        let left = force_int(&left_expr, &left_env);
        Value::Primitive(Rc::new(move |right_expr, right_env| {
            if left == 0 {
                Value::NormalForm(Expr::constant(0))
            } else {
                let right = force_int(&right_expr, &right_env);
                Value::NormalForm(Expr::constant(left * right))
            }
        }))
    }))
}

/// A two-argument curried comparison. Unlike the arithmetic primitives,
/// these return a closure around the *source-level* `true`/`false` symbol
/// looked up in the caller's environment, rather than a Rust bool wrapped
/// up some other way — so the prelude's `true`/`false` combinators must
/// already be bound there.
pub fn comparison(op: fn(i64, i64) -> bool) -> Value {
    Value::Primitive(Rc::new(move |left_expr, left_env| {
        let left = force_int(&left_expr, &left_env);
        Value::Primitive(Rc::new(move |right_expr, right_env| {
            let right = force_int(&right_expr, &right_env);
            let name = if op(left, right) { "true" } else { "false" };
            Value::Closure(Expr::var(name), right_env)
        }))
    }))
}

/// The fixed-point primitive: `Y f` reduces to `Ap(f, Ap(Y, f))`, unfolded
/// one layer at a time as the caller forces it. Productive under call-by-
/// need because the `Y` reference inside the unfolding is looked up (and
/// memoised) through the caller's own environment, not re-evaluated from
/// scratch.
pub fn fixed_point() -> Value {
    Value::Primitive(Rc::new(|f_expr: Rc<Expr>, caller_env: Env| {
        let unfolded = Expr::apply(Expr::var("Y"), f_expr.clone());
        Value::Closure(Expr::apply(f_expr, unfolded), caller_env)
    }))
}

/// `putChar c` is an IO action: applied to a world token `s` it prints `c`,
/// then applied to a pair-destructuring continuation `p` it calls `p nil
/// s`, matching the `>>=`/`pair` protocol the rest of the IO combinators
/// are built from.
pub fn put_char() -> Value {
    Value::Primitive(Rc::new(|char_expr: Rc<Expr>, char_env: Env| {
        let code = force_int(&char_expr, &char_env);
        Value::Primitive(Rc::new(move |s_expr: Rc<Expr>, s_env: Env| {
            print!("{}", code as u8 as char);
            let _ = std::io::stdout().flush();
            Value::Primitive(Rc::new(move |p_expr: Rc<Expr>, p_env: Env| {
                let selector = redex_eval::whnf(&p_expr, &p_env);
                let applied_to_nil = selector.call(Expr::var("nil"), Env::new());
                redex_eval::whnf(&applied_to_nil.expr(), &applied_to_nil.env())
                    .call(s_expr.clone(), s_env.clone())
            }))
        }))
    }))
}

/// `getChar` reads one byte from stdin when applied to a world token `s`,
/// then threads it to the continuation the same way `putChar` threads
/// `nil`.
pub fn get_char() -> Value {
    Value::Primitive(Rc::new(|s_expr: Rc<Expr>, s_env: Env| {
        let mut byte = [0u8; 1];
        let code = match std::io::stdin().read_exact(&mut byte) {
            Ok(()) => byte[0] as i64,
            Err(_) => -1,
        };
        Value::Primitive(Rc::new(move |p_expr: Rc<Expr>, p_env: Env| {
            let selector = redex_eval::whnf(&p_expr, &p_env);
            let applied_to_char = selector.call(Expr::constant(code), Env::new());
            redex_eval::whnf(&applied_to_char.expr(), &applied_to_char.env())
                .call(s_expr.clone(), s_env.clone())
        }))
    }))
}

/// Not bound in [`crate::default_env`] — this is a worked example of a
/// primitive that fabricates a brand new AST node, rather than routing to
/// an existing one. Given a forced argument `name`, returns a fresh free
/// variable `greeting_name`.
pub fn hello_example(name_expr: Rc<Expr>, env: Env) -> Value {
    let name = nf(&name_expr, &env).expr();
    let greeting = format!("greeting_{name}");
    Value::NormalForm(Expr::var(greeting))
}
