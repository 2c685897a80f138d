use std::rc::Rc;

use crate::{ast::Expr, error::RuntimeError, interpreter::env::Env};

/// Represents a runtime value in the interpreter.
///
/// This enum models everything an expression can evaluate to. Values are
/// immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer value.
    Number(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `>`, `==`) and logical not,
    /// and required as the condition of an `if` expression.
    Boolean(bool),
    /// A function value: the environment captured when its lambda was
    /// evaluated, the parameter name, and the body expression.
    ///
    /// The captured environment is fixed at creation time; applying the
    /// closure extends *it* (never the caller's environment) with a single
    /// binding for the parameter.
    Closure {
        /// The environment captured at the lambda's evaluation site.
        env:    Env,
        /// The parameter name.
        binder: String,
        /// The body expression, shared with the lambda that produced this
        /// closure.
        body:   Rc<Expr>,
    },
}

impl Value {
    /// Returns the payload of a number, or a type mismatch naming the
    /// operation that required one.
    ///
    /// # Example
    /// ```
    /// use pitchlang::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(10).as_number("+").unwrap(), 10);
    /// assert!(Value::Boolean(true).as_number("+").is_err());
    /// ```
    pub fn as_number(&self, operation: impl std::fmt::Display) -> Result<i64, RuntimeError> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::TypeMismatch { operation: operation.to_string(),
                                                  value:     self.clone(), }),
        }
    }

    /// Returns the payload of a boolean, or a type mismatch naming the
    /// operation that required one.
    pub fn as_boolean(&self, operation: impl std::fmt::Display) -> Result<bool, RuntimeError> {
        match self {
            Self::Boolean(b) => Ok(*b),
            _ => Err(RuntimeError::TypeMismatch { operation: operation.to_string(),
                                                  value:     self.clone(), }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "Number({n})"),
            Self::Boolean(b) => write!(f, "Boolean({b})"),
            Self::Closure { binder, .. } => write!(f, "Closure(\\{binder} => ...)"),
        }
    }
}
