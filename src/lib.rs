//! # durham
//!
//! durham is an interpreter for Durham, a small esoteric language whose
//! numerals are college names and whose operators are city names. It splits
//! a program into period-delimited statements, parses them into statement
//! trees and executes them over a two-typed value model of numbers and text.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::RuntimeError, interpreter::evaluator::core::Session};

/// Defines the structure of parsed programs.
///
/// This module declares the `Statement` and `Expr` types. Block statements own
/// their nested statement lists, and expression trees record the shape chosen
/// by the language's fixed rule order.
pub mod ast;
/// Provides the error type for fatal runtime conditions.
///
/// Only a handful of conditions abort a run; malformed source is skipped or
/// falls back to a default value instead of failing.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together preprocessing, lexing, parsing, evaluation and
/// value representations to provide a complete runtime for Durham programs.
///
/// # Responsibilities
/// - Coordinates the preprocessor, lexer, parser and evaluator.
/// - Owns the per-run session state.
pub mod interpreter;
/// General integer helpers.
pub mod util;

/// The outcome of one run, as handed to a host.
///
/// On success `output` is the printed values joined with newlines (empty when
/// nothing was printed). On failure it is the message of the first fatal
/// error; output printed before the failure is not included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Whether the program ran to completion.
    pub success: bool,
    /// Printed output, or the error message.
    pub output:  String,
}

impl From<Result<Vec<String>, RuntimeError>> for RunResult {
    fn from(result: Result<Vec<String>, RuntimeError>) -> Self {
        match result {
            Ok(lines) => Self { success: true,
                                output:  lines.join("\n"), },
            Err(e) => Self { success: false,
                             output:  e.to_string(), },
        }
    }
}

/// Runs a program in a fresh session and returns the printed values.
///
/// # Errors
/// Returns the first fatal `RuntimeError`, such as an exceeded loop ceiling or
/// a division by zero.
///
/// # Examples
/// ```
/// use durham::run;
///
/// let output = run("text name is begin \"world\" end. tlc begin \"hello \" durham name end.");
/// assert_eq!(output.unwrap(), vec!["hello world".to_string()]);
/// ```
pub fn run(source: &str) -> Result<Vec<String>, RuntimeError> {
    Session::new().run(source)
}

/// Returns the final result record after execution.
///
/// Runs the program in a fresh session. Nothing is shared between calls.
///
/// # Examples
/// ```
/// use durham::get_result;
///
/// let result = get_result("tlc begin marys, marys end.\ntlc begin \"done\" end.");
/// assert!(result.success);
/// assert_eq!(result.output, "22\ndone");
///
/// // Division by zero is fatal and discards earlier output.
/// let result = get_result("tlc begin \"lost\" end. tlc begin chads edinburgh butler end.");
/// assert!(!result.success);
/// assert_eq!(result.output, "Error on line 1: Division by zero.");
/// ```
#[must_use]
pub fn get_result(source: &str) -> RunResult {
    let result = run(source);
    if let Err(e) = &result {
        tracing::debug!(error = %e, "run failed");
    }
    result.into()
}
