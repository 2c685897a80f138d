/// Binary and unary operator evaluation.
///
/// Implements arithmetic, the orderings, value equality, and logical not.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the main evaluation function: the recursive tree walk that
/// dispatches on expression variant and threads the environment.
pub mod core;

/// Evaluation of the accumulator loop.
///
/// Implements the loop's exact repetition contract, including its floor of
/// two body evaluations.
pub mod loop_expr;
