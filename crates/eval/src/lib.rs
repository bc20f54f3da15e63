//! The evaluator: persistent environment, value representation, and the
//! `whnf`/`nf` reducers that implement capture-avoiding, lazily shared beta
//! reduction over [`redex_ast::Expr`].

mod env;
mod reduce;
mod value;

pub use env::{Env, Slot};
pub use reduce::{nf, whnf};
pub use value::{PrimitiveFn, Value};
