/// Core evaluation logic.
///
/// Defines the interpreter session, statement execution and the result type
/// shared by the evaluator.
pub mod core;

/// Expression evaluation.
pub mod expression;

/// Numeric operator evaluation.
///
/// Implements `york`, `edinburgh` and `newcastle` over integers.
pub mod binary;

/// Condition evaluation for `lesser`, `greater` and `equals`.
pub mod condition;

/// `for` loop evaluation and the iteration ceiling.
pub mod for_loop;

/// User-defined function calls.
///
/// Binds parameters, runs the body and restores the numeric table afterwards.
pub mod function;
