use std::{ops::Range, rc::Rc};

use tracing::debug;

use crate::{
    ast::{FunctionDef, Statement},
    interpreter::{
        lexer::{Token, tokenize},
        parser::{
            core::Parser,
            expression::parse_condition,
            statement::parse_assignment,
            utils::TokenSlice,
        },
    },
};

/// Keywords that open a nested block inside `if` and `for` bodies. Each must
/// be followed by `begin`.
const NESTING_OPENERS: &[Token] = &[Token::If, Token::For, Token::While];

/// Keywords that open a nested block inside `function` bodies. `function`
/// counts on its own; `for` and `if` must be followed by `begin`.
const FUNCTION_OPENERS: &[Token] = &[Token::Function, Token::For, Token::If];

/// Where a block's parts lie in the fragment list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpan {
    /// The body, or the `then` branch of an `if`.
    pub body:       Range<usize>,
    /// The `else` branch, when a `back else front` marker was found.
    pub else_body:  Option<Range<usize>>,
    /// Index of the closing `back`, or the fragment count when the block is
    /// never closed.
    pub terminator: usize,
}

/// Returns `true` if the fragment opens a block counted by `openers`.
fn opens_block(slice: TokenSlice<'_>, openers: &[Token]) -> bool {
    match slice.get(0) {
        Some(Token::Function) => openers.contains(&Token::Function),
        Some(token) => openers.contains(token) && slice.is(1, &Token::Begin),
        None => false,
    }
}

impl Parser {
    /// Finds the end of a block whose body starts at `start`.
    ///
    /// Depth starts at one. Every fragment opening a block counted by
    /// `openers` increments it, every bare `back` decrements it, and the
    /// `back` that brings it to zero is the terminator. With `split_else`, the
    /// first `back else front` seen at depth one separates the `then` and
    /// `else` branches. Text following that marker in the same fragment stays
    /// in place as the first `else` statement.
    pub(in crate::interpreter::parser) fn scan_block(&mut self,
                                                     start: usize,
                                                     openers: &[Token],
                                                     split_else: bool)
                                                     -> BlockSpan {
        let mut depth = 1usize;
        let mut index = start;
        let mut else_marker: Option<(usize, usize)> = None;

        while index < self.fragments.len() {
            let text = self.fragments[index].text.clone();
            let tokens = tokenize(&text);
            let slice = TokenSlice::new(&text, &tokens);

            if opens_block(slice, openers) {
                depth += 1;
            }

            if slice.len() == 1 && slice.is(0, &Token::Back) {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }

            if split_else
               && else_marker.is_none()
               && depth == 1
               && slice.starts_with(&[Token::Back, Token::Else, Token::Front])
            {
                let remainder = slice.after(2).text();
                if remainder.is_empty() {
                    else_marker = Some((index, index + 1));
                    index += 1;
                } else {
                    self.fragments[index].text = remainder.to_string();
                    else_marker = Some((index, index));
                }
                continue;
            }

            index += 1;
        }

        match else_marker {
            Some((marker, else_start)) => BlockSpan { body:       start..marker,
                                                      else_body:  Some(else_start..index),
                                                      terminator: index, },
            None => BlockSpan { body:       start..index,
                                else_body:  None,
                                terminator: index, },
        }
    }

    /// Returns the index of the first body fragment.
    ///
    /// When the header fragment at `header` carries text after `end front`,
    /// that text replaces the header and becomes the first body statement.
    fn open_body(&mut self, header: usize, remainder: &str) -> usize {
        if remainder.is_empty() {
            header + 1
        } else {
            self.fragments[header].text = remainder.to_string();
            header
        }
    }

    /// Parses `if begin <cond> end front ... [back else front ...] back`.
    pub(in crate::interpreter::parser) fn parse_if(&mut self,
                                                   slice: TokenSlice<'_>,
                                                   line: usize)
                                                   -> Option<Statement> {
        let Some(close) = slice.find_header_close(3) else {
            debug!(line, "if header without `end front`, skipping it");
            self.pos += 1;
            return None;
        };

        let condition = parse_condition(slice.slice(2..close));
        let start = self.open_body(self.pos, slice.after(close + 1).text());
        let span = self.scan_block(start, NESTING_OPENERS, true);

        let then_branch = self.parse_range(span.body);
        let else_branch = span.else_body
                              .map(|range| self.parse_range(range))
                              .unwrap_or_default();
        self.pos = span.terminator + 1;

        Some(Statement::If { condition,
                             then_branch,
                             else_branch,
                             line })
    }

    /// Parses `for begin <init>. <cond>. <incr> end front ... back`.
    ///
    /// The preprocessor has already split the header on its periods, so the
    /// following fragments are rejoined with `". "` until one of them closes
    /// the header. A header with fewer than three clauses drops the whole
    /// loop, body included.
    pub(in crate::interpreter::parser) fn parse_for(&mut self, line: usize) -> Option<Statement> {
        let mut header = self.fragments[self.pos].text.clone();
        let mut header_end = self.pos;

        while !closes_header(&header) {
            if header_end + 1 >= self.fragments.len() {
                debug!(line, "for header without `end front`, skipping it");
                self.pos += 1;
                return None;
            }
            header_end += 1;
            header.push_str(". ");
            header.push_str(&self.fragments[header_end].text);
        }

        let tokens = tokenize(&header);
        let slice = TokenSlice::new(&header, &tokens);
        let Some(close) = slice.find_header_close(3) else {
            debug!(line, "empty for header, skipping it");
            self.pos += 1;
            return None;
        };

        let start = self.open_body(header_end, slice.after(close + 1).text());
        let span = self.scan_block(start, NESTING_OPENERS, false);
        self.pos = span.terminator + 1;

        let clauses: Vec<&str> = slice.slice(2..close).text().split('.').map(str::trim).collect();
        let [init, condition, increment, ..] = clauses.as_slice() else {
            debug!(line, clauses = clauses.len(), "for header needs three clauses, skipping loop");
            return None;
        };

        Some(Statement::For { init: parse_clause(init, parse_assignment),
                              condition: parse_clause(condition, parse_condition),
                              increment: parse_clause(increment, parse_assignment),
                              body: self.parse_range(span.body),
                              line })
    }

    /// Parses `function <name> begin <p1> and <p2> end front ... back`.
    pub(in crate::interpreter::parser) fn parse_function(&mut self,
                                                         slice: TokenSlice<'_>,
                                                         line: usize)
                                                         -> Option<Statement> {
        let header = match (slice.get(1), slice.is(2, &Token::Begin)) {
            (Some(Token::Identifier(name)), true) => {
                slice.find_header_close(3).map(|close| (name.clone(), close))
            },
            _ => None,
        };
        let Some((name, close)) = header else {
            debug!(line, "malformed function header, skipping it");
            self.pos += 1;
            return None;
        };

        let params = slice.slice(3..close)
                          .split_on(&Token::And)
                          .iter()
                          .map(TokenSlice::text)
                          .filter(|param| !param.is_empty())
                          .map(str::to_string)
                          .collect();

        let start = self.open_body(self.pos, slice.after(close + 1).text());
        let span = self.scan_block(start, FUNCTION_OPENERS, false);
        let body = self.parse_range(span.body);
        self.pos = span.terminator + 1;

        Some(Statement::Function(Rc::new(FunctionDef { name,
                                                       params,
                                                       body,
                                                       line })))
    }
}

/// Returns `true` once a rejoined `for` header contains `end front`.
fn closes_header(header: &str) -> bool {
    let tokens = tokenize(header);
    TokenSlice::new(header, &tokens).find_header_close(0).is_some()
}

/// Tokenizes one `for` header clause and parses it with `parse`.
fn parse_clause<T>(clause: &str, parse: impl Fn(TokenSlice<'_>) -> Option<T>) -> Option<T> {
    let tokens = tokenize(clause);
    parse(TokenSlice::new(clause, &tokens))
}
