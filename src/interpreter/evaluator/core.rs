use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        env::Env,
        evaluator::{binary, loop_expr},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression in an environment.
///
/// This is the main entry point for evaluation: an ordinary recursive tree
/// walk with no interpreter state beyond the environment argument. The
/// environment is never mutated — binding forms extend it into a new one for
/// their sub-evaluation and the caller's environment stays as it was.
///
/// Recursion depth follows the nesting depth of the user expression, so a
/// deeply self-applying program can exhaust the host stack; the language
/// offers no construct that would need a guard against this.
///
/// # Parameters
/// - `env`: The environment supplying every free name of `expr`.
/// - `expr`: The expression to evaluate.
///
/// # Returns
/// The resulting [`Value`], or a [`RuntimeError`] with no partial result.
///
/// # Errors
/// - `UndefinedVariable` for a name with no binding.
/// - `NotAFunction` when applying anything but a closure.
/// - `TypeMismatch` for wrongly-typed operands.
/// - `Overflow` when integer arithmetic overflows.
///
/// # Example
/// ```
/// use pitchlang::{
///     ast::Expr,
///     interpreter::{env::Env, evaluator::core::eval, value::Value},
/// };
///
/// let env = Env::new().put("AB", Value::Number(41));
/// let expr = Expr::Var { name: "AB".to_string() };
///
/// assert_eq!(eval(&env, &expr).unwrap(), Value::Number(41));
/// ```
pub fn eval(env: &Env, expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::Number { n } => Ok(Value::Number(*n)),
        Expr::Boolean { b } => Ok(Value::Boolean(*b)),
        Expr::Var { name } => {
            env.get(name)
               .cloned()
               .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone() })
        },
        Expr::Lambda { binder, body } => Ok(Value::Closure { env:    env.clone(),
                                                             binder: binder.clone(),
                                                             body:   Rc::clone(body), }),
        // A sequential binding is a `let` in different clothes; one arm
        // serves both.
        Expr::Let { binder, value, body }
        | Expr::Binding { binder,
                          value,
                          rest: body, } => {
            let bound = eval(env, value)?;
            let nested = env.put(binder, bound);
            eval(&nested, body)
        },
        Expr::Application { func, arg } => {
            let func = eval(env, func)?;
            let arg = eval(env, arg)?;

            match func {
                Value::Closure { env: captured,
                                 binder,
                                 body, } => {
                    // The argument lands in the *captured* environment; the
                    // caller's locals are invisible to the body.
                    let call_env = captured.put(&binder, arg);
                    eval(&call_env, &body)
                },
                value => Err(RuntimeError::NotAFunction { value }),
            }
        },
        Expr::If { condition,
                   then_branch,
                   else_branch, } => {
            let condition = eval(env, condition)?.as_boolean("if")?;

            if condition {
                eval(env, then_branch)
            } else {
                eval(env, else_branch)
            }
        },
        Expr::Binary { op, x, y } => binary::eval_binary(env, *op, x, y),
        Expr::Unary { op, x } => binary::eval_unary(env, *op, x),
        Expr::Loop { count,
                     accumulator,
                     body, } => loop_expr::eval_loop(env, *count, accumulator, body),
    }
}
