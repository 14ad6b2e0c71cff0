use std::ops::Range;

use crate::interpreter::lexer::{Spanned, Token};

/// A window over the tokens of one fragment.
///
/// Keeps the fragment text alongside the tokens so that any sub-window can be
/// turned back into the exact source substring it covers. Splitting on a
/// keyword is therefore whole-word and never looks inside quoted strings.
#[derive(Debug, Clone, Copy)]
pub struct TokenSlice<'a> {
    source: &'a str,
    tokens: &'a [Spanned],
}

impl<'a> TokenSlice<'a> {
    /// Creates a window over all `tokens` of `source`.
    #[must_use]
    pub const fn new(source: &'a str, tokens: &'a [Spanned]) -> Self {
        Self { source, tokens }
    }

    /// The tokens in this window, with their spans.
    #[must_use]
    pub const fn tokens(&self) -> &'a [Spanned] {
        self.tokens
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a Token> {
        self.tokens.get(index).map(|(token, _)| token)
    }

    /// Returns `true` if the token at `index` equals `token`.
    #[must_use]
    pub fn is(&self, index: usize, token: &Token) -> bool {
        self.get(index) == Some(token)
    }

    /// Returns `true` if the window begins with exactly `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &[Token]) -> bool {
        self.tokens.len() >= prefix.len()
        && self.tokens.iter().zip(prefix).all(|((token, _), expected)| token == expected)
    }

    /// Index of the first `token`.
    #[must_use]
    pub fn find(&self, token: &Token) -> Option<usize> {
        self.tokens.iter().position(|(t, _)| t == token)
    }

    /// Index of the last `token`.
    #[must_use]
    pub fn rfind(&self, token: &Token) -> Option<usize> {
        self.tokens.iter().rposition(|(t, _)| t == token)
    }

    /// Number of occurrences of `token`.
    #[must_use]
    pub fn count(&self, token: &Token) -> usize {
        self.tokens.iter().filter(|(t, _)| t == token).count()
    }

    /// A sub-window. The range is clamped to the window.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Self {
        let end = range.end.min(self.tokens.len());
        let start = range.start.min(end);

        Self { source: self.source,
               tokens: &self.tokens[start..end] }
    }

    /// Everything after `index`.
    #[must_use]
    pub fn after(&self, index: usize) -> Self {
        self.slice(index + 1..self.tokens.len())
    }

    /// Splits around every occurrence of `token`, dropping the separators.
    ///
    /// `n` separators always give `n + 1` windows; some may be empty.
    #[must_use]
    pub fn split_on(&self, token: &Token) -> Vec<Self> {
        self.split_where(|_, t| t == token)
    }

    /// Splits around every `token` that is not nested inside a
    /// `begin ... end` pair.
    #[must_use]
    pub fn split_top_level(&self, token: &Token) -> Vec<Self> {
        let depths = self.depths();
        self.split_where(|index, t| depths[index] == 0 && t == token)
    }

    /// The source text covered by this window, trimmed. Empty windows yield
    /// an empty string.
    #[must_use]
    pub fn text(&self) -> &'a str {
        match (self.tokens.first(), self.tokens.last()) {
            (Some((_, first)), Some((_, last))) => self.source[first.start..last.end].trim(),
            _ => "",
        }
    }

    /// Returns the index of the first `end` that is directly followed by
    /// `front`, searching from `from` onward.
    ///
    /// This is the header terminator shared by `if`, `for` and `function`
    /// blocks.
    #[must_use]
    pub fn find_header_close(&self, from: usize) -> Option<usize> {
        (from..self.tokens.len().saturating_sub(1)).find(|&index| {
                                                        self.is(index, &Token::End)
                                                        && self.is(index + 1, &Token::Front)
                                                    })
    }

    /// `begin`/`end` nesting depth in front of every token.
    fn depths(&self) -> Vec<usize> {
        let mut depth = 0usize;
        self.tokens
            .iter()
            .map(|(token, _)| match token {
                Token::Begin => {
                    depth += 1;
                    depth - 1
                },
                Token::End => {
                    depth = depth.saturating_sub(1);
                    depth
                },
                _ => depth,
            })
            .collect()
    }

    fn split_where(&self, is_separator: impl Fn(usize, &Token) -> bool) -> Vec<Self> {
        let mut parts = Vec::new();
        let mut start = 0;

        for (index, (token, _)) in self.tokens.iter().enumerate() {
            if is_separator(index, token) {
                parts.push(self.slice(start..index));
                start = index + 1;
            }
        }
        parts.push(self.slice(start..self.tokens.len()));

        parts
    }
}
