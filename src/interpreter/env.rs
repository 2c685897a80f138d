use std::collections::HashMap;

use crate::interpreter::value::Value;

/// A persistent mapping from names to runtime values.
///
/// `Env` is immutable: [`Env::put`] returns a new environment and leaves the
/// receiver untouched, so any closure holding an older environment keeps
/// seeing exactly the bindings it captured. Shadowing is permitted — a later
/// `put` for the same name wins in the new environment only.
///
/// Scopes in this language are tiny (one name per binding form), so the
/// copy-on-extend `HashMap` is all the structure sharing that is needed.
///
/// # Example
/// ```
/// use pitchlang::interpreter::{env::Env, value::Value};
///
/// let base = Env::new().put("AB", Value::Number(1));
/// let shadowed = base.put("AB", Value::Number(2));
///
/// assert_eq!(base.get("AB"), Some(&Value::Number(1)));
/// assert_eq!(shadowed.get("AB"), Some(&Value::Number(2)));
/// assert_eq!(shadowed.get("BA"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Env {
    bindings: HashMap<String, Value>,
}

impl Env {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new environment with `name` bound to `value`.
    ///
    /// The receiver is not modified; an existing binding for `name` is
    /// shadowed in the returned environment.
    #[must_use]
    pub fn put(&self, name: &str, value: Value) -> Self {
        let mut bindings = self.bindings.clone();
        bindings.insert(name.to_owned(), value);
        Self { bindings }
    }

    /// Looks up the most recently bound value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }
}
