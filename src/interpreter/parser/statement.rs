use tracing::debug;

use crate::{
    ast::{Assignment, DeclarationKind, Expr, Statement},
    interpreter::{
        lexer::{Token, tokenize},
        parser::{core::Parser, expression::parse_expression, utils::TokenSlice},
    },
};

impl Parser {
    /// Parses the statement at the cursor and advances past it.
    ///
    /// Statements are classified by their leading tokens, in this order:
    /// - `tlc begin <expr> end`, print,
    /// - `number <name> is <expr>`, numeric declaration,
    /// - `text <name> is <expr>`, textual declaration,
    /// - `function ...`, `if begin ...`, `for begin ...`, blocks,
    /// - `mcs begin <expr> end`, return,
    /// - `<name> begin ... end`, call statement,
    /// - anything with exactly one `is`, generic assignment.
    ///
    /// A statement that matches none of these, or whose leading tokens match
    /// but whose shape is malformed, yields `None` and is skipped.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> Option<Statement> {
        let fragment = self.fragments[self.pos].clone();
        let tokens = tokenize(&fragment.text);
        let slice = TokenSlice::new(&fragment.text, &tokens);
        let line = fragment.line;

        match slice.get(0) {
            Some(Token::Function) => return self.parse_function(slice, line),
            Some(Token::If) if slice.is(1, &Token::Begin) => return self.parse_if(slice, line),
            Some(Token::For) if slice.is(1, &Token::Begin) => return self.parse_for(line),
            _ => {},
        }

        self.pos += 1;

        let statement = parse_simple_statement(slice, line);
        if statement.is_none() {
            debug!(line, text = %fragment.text, "skipping unrecognized statement");
        }
        statement
    }
}

/// Parses a statement that occupies a single fragment.
fn parse_simple_statement(slice: TokenSlice<'_>, line: usize) -> Option<Statement> {
    match slice.get(0) {
        Some(Token::Tlc) if slice.is(1, &Token::Begin) => {
            parse_bracketed(slice).map(|expr| Statement::Print { expr, line })
        },
        Some(Token::Number) => parse_declaration(slice, DeclarationKind::Number, line),
        Some(Token::Text) => parse_declaration(slice, DeclarationKind::Text, line),
        Some(Token::Mcs) if slice.is(1, &Token::Begin) => {
            parse_bracketed(slice).map(|expr| Statement::Return { expr, line })
        },
        Some(Token::Identifier(_))
            if slice.is(1, &Token::Begin) && slice.is(slice.len() - 1, &Token::End) =>
        {
            Some(Statement::Expression { expr: parse_expression(slice),
                                         line })
        },
        _ => parse_assignment(slice).map(|assignment| Statement::Assign { assignment, line }),
    }
}

/// Parses the expression of `<keyword> begin <expr> end`.
///
/// The expression runs up to the last `end`, so it may itself contain calls.
/// An empty expression yields `None`.
fn parse_bracketed(slice: TokenSlice<'_>) -> Option<Expr> {
    let close = slice.rfind(&Token::End)?;
    if close <= 2 {
        return None;
    }

    Some(parse_expression(slice.slice(2..close)))
}

/// Parses `number <name> is <expr>` or `text <name> is <expr>`.
fn parse_declaration(slice: TokenSlice<'_>, kind: DeclarationKind, line: usize) -> Option<Statement> {
    let Some(Token::Identifier(name)) = slice.get(1) else {
        return None;
    };
    if !slice.is(2, &Token::Is) || slice.len() < 4 {
        return None;
    }

    Some(Statement::Declaration { kind,
                                  name: name.clone(),
                                  value: parse_expression(slice.after(2)),
                                  line })
}

/// Parses `<name> is <expr>`.
///
/// The fragment must contain exactly one `is`. The name is the raw text in
/// front of it and is not required to be an identifier.
///
/// # Example
/// ```
/// use durham::{
///     ast::Expr,
///     interpreter::{lexer::tokenize, parser::{statement::parse_assignment, utils::TokenSlice}},
/// };
///
/// let source = "total is castle";
/// let tokens = tokenize(source);
/// let assignment = parse_assignment(TokenSlice::new(source, &tokens)).unwrap();
///
/// assert_eq!(assignment.name, "total");
/// assert_eq!(assignment.value, Expr::Atom("castle".into()));
///
/// let source = "a is b is c";
/// let tokens = tokenize(source);
/// assert!(parse_assignment(TokenSlice::new(source, &tokens)).is_none());
/// ```
#[must_use]
pub fn parse_assignment(slice: TokenSlice<'_>) -> Option<Assignment> {
    if slice.count(&Token::Is) != 1 {
        return None;
    }

    let index = slice.find(&Token::Is)?;
    let name = slice.slice(0..index).text();
    let value = slice.after(index);
    if name.is_empty() || value.is_empty() {
        return None;
    }

    Some(Assignment { name:  name.to_string(),
                      value: parse_expression(value), })
}
