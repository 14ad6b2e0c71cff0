use std::ops::Range;

use crate::{ast::Statement, interpreter::preprocessor::Fragment};

/// Walks a list of fragments and produces statements.
///
/// The cursor only moves forward. Simple statements consume one fragment;
/// blocks consume everything up to and including their terminator. Block
/// scanning may rewrite a fragment in place when a header and the first body
/// statement share it.
pub struct Parser {
    pub(in crate::interpreter::parser) fragments: Vec<Fragment>,
    pub(in crate::interpreter::parser) pos:       usize,
}

/// Parses a list of fragments into statements.
///
/// Unrecognized fragments are dropped.
///
/// # Example
/// ```
/// use durham::{
///     ast::Statement,
///     interpreter::{parser::core::parse_program, preprocessor::preprocess},
/// };
///
/// let statements = parse_program(preprocess("gibberish. tlc begin castle end. x is chads."));
///
/// assert_eq!(statements.len(), 2);
/// assert!(matches!(statements[0], Statement::Print { .. }));
/// assert!(matches!(statements[1], Statement::Assign { .. }));
/// ```
#[must_use]
pub fn parse_program(fragments: Vec<Fragment>) -> Vec<Statement> {
    Parser::new(fragments).parse()
}

impl Parser {
    #[must_use]
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments,
               pos: 0 }
    }

    /// Parses every remaining fragment.
    #[must_use]
    pub fn parse(mut self) -> Vec<Statement> {
        let mut statements = Vec::new();

        while self.pos < self.fragments.len() {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
        }

        statements
    }

    /// Parses a block body given as a range of this parser's fragments.
    pub(in crate::interpreter::parser) fn parse_range(&self, range: Range<usize>) -> Vec<Statement> {
        parse_program(self.fragments[range].to_vec())
    }
}
