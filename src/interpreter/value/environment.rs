use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A shared, interior-mutable handle to an [`Environment`].
///
/// Scope chains only point outward (child to parent), so plain reference
/// counting is enough; no cycle-breaking logic is needed.
pub type SharedEnv = Rc<RefCell<Environment>>;

/// A mapping from names to values, with an optional enclosing scope.
///
/// Environments form a singly-linked chain rooted at the global scope.
/// Lookup walks outward from the innermost scope; bindings always land in
/// the innermost scope, which is how `let` shadows an outer binding without
/// mutating it. A function value keeps a shared reference to the
/// environment of its definition site, so several closures may alias the
/// same scope and observe each other's world.
///
/// ## Example
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use minnow::interpreter::value::{core::Value, environment::Environment};
///
/// let outer = Rc::new(RefCell::new(Environment::new()));
/// outer.borrow_mut().set("x".to_string(), Value::Integer(1));
///
/// let mut inner = Environment::new_enclosed(Rc::clone(&outer));
/// inner.set("y".to_string(), Value::Integer(2));
///
/// assert_eq!(inner.get("x"), Some(Value::Integer(1)));
/// assert_eq!(inner.get("y"), Some(Value::Integer(2)));
/// assert_eq!(outer.borrow().get("y"), None);
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<SharedEnv>,
}

impl Environment {
    /// Creates an empty environment with no enclosing scope.
    #[must_use]
    pub fn new() -> Self {
        Self { store: HashMap::new(),
               outer: None, }
    }

    /// Creates an empty environment enclosed by `outer`.
    ///
    /// Used for every function call frame: the outer link points at the
    /// function's captured environment, which is what makes scoping lexical
    /// rather than dynamic.
    #[must_use]
    pub fn new_enclosed(outer: SharedEnv) -> Self {
        Self { store: HashMap::new(),
               outer: Some(outer), }
    }

    /// Looks up a name, searching outward through the enclosing chain.
    ///
    /// Returns a clone of the bound value, or `None` when no scope binds the
    /// name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds a name in this scope, shadowing any outer binding of the same
    /// name for lookups that start here.
    pub fn set(&mut self, name: String, value: Value) {
        self.store.insert(name, value);
    }
}
