use std::cmp::Ordering;

use crate::util::num::parse_integer;

/// The text produced by arithmetic on an operand that is not a number.
pub const NOT_A_NUMBER: &str = "NaN";

/// Represents a runtime value in the interpreter.
///
/// Durham has exactly two value kinds. Which one an expression produces is
/// decided by the evaluation rule that matched, never by a declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer.
    Number(i64),
    /// A piece of text.
    Text(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl Value {
    /// Coerces the value to an integer for arithmetic.
    ///
    /// Numbers pass through. Text is accepted when it parses as an integer
    /// literal, so the result of a concatenation such as `"12"` can still be
    /// multiplied. Any other text yields `None`.
    ///
    /// # Example
    /// ```
    /// use durham::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from("12").as_number(), Some(12));
    /// assert_eq!(Value::from("twelve").as_number(), None);
    /// ```
    #[must_use]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(t) => parse_integer(t),
        }
    }

    /// Orders two values for the `lesser` and `greater` relations.
    ///
    /// Numbers compare numerically and texts lexicographically. In a mixed
    /// comparison the text side is coerced to an integer; if that fails the
    /// values are unordered and `None` is returned, which makes both relations
    /// false.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => Some(a.cmp(b)),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Number(a), Self::Text(b)) => parse_integer(b).map(|b| a.cmp(&b)),
            (Self::Text(a), Self::Number(b)) => parse_integer(a).map(|a| a.cmp(b)),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(t) => write!(f, "{t}"),
        }
    }
}
