/// The evaluator module executes parsed statements.
///
/// Owns the interpreter session: the environment, the output buffer, block
/// execution, expression and condition evaluation, and function calls.
///
/// # Responsibilities
/// - Executes statements in program order and collects printed output.
/// - Evaluates expressions over numbers and text.
/// - Enforces the loop-iteration ceiling.
pub mod evaluator;
/// The environment module holds variables and functions.
///
/// Defines the numeric and textual variable tables and the function table,
/// and resolves bare fragments against them.
pub mod environment;
/// The lexer module tokenizes statement fragments.
///
/// Produces keyword, identifier, integer and string tokens together with their
/// byte spans, so that parsers can slice the original text.
pub mod lexer;
/// The parser module builds statements from fragments.
///
/// Classifies fragments, scans blocks to their matching terminator and builds
/// expression trees by the fixed rule order of the language.
///
/// # Responsibilities
/// - Turns fragments into [`crate::ast::Statement`] values.
/// - Drops unrecognized or malformed statements without failing.
pub mod parser;
/// The preprocessor removes comments and splits source into fragments.
pub mod preprocessor;
/// The value module defines the runtime data types.
///
/// Declares the two-variant `Value` type and the numeral table.
pub mod value;
