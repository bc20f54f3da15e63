//! The persistent environment: an immutable map from identifier to a shared,
//! mutable value slot.
//!
//! Backed by [`im::HashMap`], the same persistent-collection crate used by
//! the lambda/scheme interpreters elsewhere in this corpus for exactly this
//! job. `insert`/`erase` clone the map handle (O(1), structural sharing) and
//! mutate the clone; the original keeps pointing at the unmodified trie, so
//! every closure that captured an older environment keeps seeing it.
//!
//! The slot itself — `Rc<RefCell<Value>>` — is what makes call-by-need work:
//! forcing a binding writes the memoised result through the slot, and every
//! environment that still shares that slot (because it was cloned after the
//! binding was inserted, before it was forced) observes the same write.

use crate::value::Value;
use im::HashMap;
use std::cell::RefCell;
use std::rc::Rc;

/// A shared, mutable cell holding the current value of a binding.
pub type Slot = Rc<RefCell<Value>>;

/// A persistent environment: identifier to value slot.
#[derive(Clone, Debug, Default)]
pub struct Env(HashMap<Rc<str>, Slot>);

impl Env {
    /// The empty environment.
    pub fn new() -> Self {
        Env(HashMap::new())
    }

    /// Returns a new environment with `name` bound to a fresh slot holding
    /// `value`. `self` is untouched.
    pub fn insert(&self, name: impl Into<Rc<str>>, value: Value) -> Env {
        Env(self.0.update(name.into(), Rc::new(RefCell::new(value))))
    }

    /// Returns a new environment with `name` absent, regardless of whether
    /// it was previously bound. `self` is untouched.
    pub fn erase(&self, name: &str) -> Env {
        Env(self.0.without(name))
    }

    /// Whether `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// The slot bound to `name`, if any. Cloning a `Slot` clones the `Rc`,
    /// not the `Value` inside it — writes through either clone are visible
    /// through the other.
    pub fn lookup(&self, name: &str) -> Option<Slot> {
        self.0.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redex_ast::Expr;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_leaves_the_original_environment_untouched() {
        let base = Env::new();
        let extended = base.insert("x", Value::NormalForm(Expr::constant(1)));
        assert!(!base.contains("x"));
        assert!(extended.contains("x"));
    }

    #[test]
    fn erase_leaves_the_original_environment_untouched() {
        let base = Env::new().insert("x", Value::NormalForm(Expr::constant(1)));
        let erased = base.erase("x");
        assert!(base.contains("x"));
        assert!(!erased.contains("x"));
    }

    #[test]
    fn lookup_slot_is_shared_across_cloned_environments() {
        let base = Env::new().insert("x", Value::NormalForm(Expr::constant(1)));
        let alias = base.clone();
        let slot = base.lookup("x").unwrap();
        *slot.borrow_mut() = Value::NormalForm(Expr::constant(2));
        let through_alias = alias.lookup("x").unwrap();
        assert_eq!(through_alias.borrow().expr().value(), Some(2));
    }
}
