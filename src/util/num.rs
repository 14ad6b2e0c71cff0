/// Parses an optionally signed decimal integer, ignoring surrounding
/// whitespace.
///
/// ## Example
/// ```
/// use durham::util::num::parse_integer;
///
/// assert_eq!(parse_integer(" -12 "), Some(-12));
/// assert_eq!(parse_integer("12abc"), None);
/// assert_eq!(parse_integer(""), None);
/// ```
#[must_use]
pub fn parse_integer(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Divides and rounds the quotient toward negative infinity.
///
/// Returns `None` when `rhs` is zero or the quotient overflows
/// (`i64::MIN / -1`).
///
/// ## Example
/// ```
/// use durham::util::num::floor_div;
///
/// assert_eq!(floor_div(7, 2), Some(3));
/// assert_eq!(floor_div(-7, 2), Some(-4));
/// assert_eq!(floor_div(7, -2), Some(-4));
/// assert_eq!(floor_div(-8, 2), Some(-4));
/// assert_eq!(floor_div(1, 0), None);
/// ```
#[must_use]
pub fn floor_div(lhs: i64, rhs: i64) -> Option<i64> {
    let quotient = lhs.checked_div(rhs)?;
    let remainder = lhs.checked_rem(rhs)?;

    if remainder != 0 && ((remainder < 0) != (rhs < 0)) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}
