use crate::{
    ast::Expr,
    interpreter::{
        env::Env,
        evaluator::core::{EvalResult, eval},
        value::Value,
    },
};

/// Evaluates the accumulator loop.
///
/// The body is first evaluated against the surrounding environment — the
/// accumulator name is not yet bound at that point, so a body that reads it
/// fails with an undefined-variable error unless an enclosing scope already
/// defines it. The result is bound to the accumulator in a fresh extension
/// of the *original* environment. Each repetition then re-evaluates the body
/// against the latest extension and rebinds, again extending the original
/// environment rather than chaining extensions. A final evaluation against
/// the last extension produces the result.
///
/// The repetition range runs from 3 to `count`, so the body is evaluated
/// exactly `count` times for `count >= 3` — and exactly twice for any
/// smaller count, zero and negative included. That floor is part of the
/// construct's observed contract and is preserved as-is.
///
/// # Parameters
/// - `env`: The surrounding environment.
/// - `count`: The requested repetition count.
/// - `accumulator`: The name rebound to the previous body result.
/// - `body`: The body expression.
///
/// # Returns
/// The result of the final body evaluation, or the first
/// [`RuntimeError`](crate::error::RuntimeError) raised by any of them.
///
/// # Example
/// ```
/// use pitchlang::{
///     interpreter::{env::Env, value::Value},
///     run_source,
/// };
///
/// let env = Env::new();
/// let result = run_source("let AB = 1 in loop 4 AB { AB + AB }", &env).unwrap();
///
/// // 1 doubled on each of the 4 evaluations.
/// assert_eq!(result, Value::Number(16));
/// ```
pub fn eval_loop(env: &Env, count: i64, accumulator: &str, body: &Expr) -> EvalResult<Value> {
    let first = eval(env, body)?;
    let mut looped = env.put(accumulator, first);

    for _ in 3..=count {
        let next = eval(&looped, body)?;
        looped = env.put(accumulator, next);
    }

    eval(&looped, body)
}
