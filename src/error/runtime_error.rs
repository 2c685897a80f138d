use crate::interpreter::value::Value;

#[derive(Debug)]
/// Represents all errors that can be raised during evaluation.
pub enum RuntimeError {
    /// Tried to use a name with no binding in the environment.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Tried to apply a value that is not a closure.
    NotAFunction {
        /// The value in function position.
        value: Value,
    },
    /// An operation received a value of the wrong type.
    TypeMismatch {
        /// The operation being evaluated (e.g. `+` or `if`).
        operation: String,
        /// The offending value.
        value:     Value,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The operation that overflowed.
        operation: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "'{name}' is not defined."),
            Self::NotAFunction { value } => write!(f, "{value} is not a function."),
            Self::TypeMismatch { operation, value } => {
                write!(f, "Cannot apply '{operation}' to {value}.")
            },
            Self::Overflow { operation } => {
                write!(f, "Integer overflow while evaluating '{operation}'.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
