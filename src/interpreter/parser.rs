/// The parser driver.
///
/// Owns the fragment list and the cursor, and turns a whole program (or a
/// block body) into a list of statements.
pub mod core;

/// Statement classification.
///
/// Recognizes print, declaration, return, call and assignment statements and
/// hands block openers to the block scanners.
pub mod statement;

/// Block scanning.
///
/// Finds the matching `back` of `if`, `for` and `function` blocks by counting
/// nested openers, and builds the block statements.
pub mod block;

/// Expression and condition parsing.
///
/// Builds expression trees by the fixed rule order of the language.
pub mod expression;

/// Token windows.
///
/// Helpers for slicing, searching and splitting the tokens of a fragment.
pub mod utils;
