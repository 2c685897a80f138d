use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        env::Env,
        evaluator::core::{EvalResult, eval},
        value::Value,
    },
};

/// Evaluates a binary operation.
///
/// Both operands are always evaluated, left before right, even when the
/// operator (like `==`) could in principle decide early — operand effects
/// are errors, and an error in either side must surface.
///
/// Arithmetic requires two numbers and is checked: overflow is reported
/// rather than wrapped. The orderings require two numbers. Equality accepts
/// two numbers or two booleans and compares by payload; a number never
/// equals a boolean.
///
/// # Parameters
/// - `env`: The environment for both operand evaluations.
/// - `op`: The operator to apply.
/// - `x`: Left operand expression.
/// - `y`: Right operand expression.
///
/// # Returns
/// The resulting [`Value`], or the first [`RuntimeError`] raised.
pub fn eval_binary(env: &Env, op: BinaryOperator, x: &Expr, y: &Expr) -> EvalResult<Value> {
    let lhs = eval(env, x)?;
    let rhs = eval(env, y)?;

    match op {
        BinaryOperator::Equals => equals_value(&lhs, &rhs),
        BinaryOperator::Plus => eval_binary_number(op, &lhs, &rhs, i64::checked_add),
        BinaryOperator::Minus => eval_binary_number(op, &lhs, &rhs, i64::checked_sub),
        BinaryOperator::Multiply => eval_binary_number(op, &lhs, &rhs, i64::checked_mul),
        BinaryOperator::Greater => Ok(Value::Boolean(lhs.as_number(op)? > rhs.as_number(op)?)),
        BinaryOperator::Less => Ok(Value::Boolean(lhs.as_number(op)? < rhs.as_number(op)?)),
    }
}

/// Evaluates a unary operation.
///
/// # Parameters
/// - `env`: The environment for the operand evaluation.
/// - `op`: The operator to apply.
/// - `x`: The operand expression.
///
/// # Returns
/// The resulting [`Value`], or a [`RuntimeError`] when the operand has the
/// wrong type.
pub fn eval_unary(env: &Env, op: UnaryOperator, x: &Expr) -> EvalResult<Value> {
    match op {
        UnaryOperator::Not => {
            let operand = eval(env, x)?.as_boolean(op)?;
            Ok(Value::Boolean(!operand))
        },
    }
}

/// Applies a checked integer operation to two number operands.
fn eval_binary_number(op: BinaryOperator,
                      lhs: &Value,
                      rhs: &Value,
                      f: fn(i64, i64) -> Option<i64>)
                      -> EvalResult<Value> {
    let x = lhs.as_number(op)?;
    let y = rhs.as_number(op)?;

    f(x, y).map(Value::Number)
           .ok_or_else(|| RuntimeError::Overflow { operation: op.to_string() })
}

/// Compares two values for equality.
///
/// Only like-typed numbers and booleans are comparable; the offending value
/// is named in the error otherwise.
fn equals_value(x: &Value, y: &Value) -> EvalResult<Value> {
    match (x, y) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Boolean(a == b)),
        (Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(a == b)),
        (Value::Number(_) | Value::Boolean(_), other) | (other, _) => {
            Err(RuntimeError::TypeMismatch { operation: BinaryOperator::Equals.to_string(),
                                             value:     other.clone(), })
        },
    }
}
