/// Integer helpers.
///
/// Parsing of integer literals and floor division that rounds toward negative
/// infinity. Both return `Option` and leave error reporting to the evaluator.
pub mod num;
