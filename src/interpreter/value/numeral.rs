/// The fixed numeral table, in ascending order of value.
pub const NUMERALS: [(&str, i64); 17] = [("butler", 0),
                                         ("chads", 1),
                                         ("marys", 2),
                                         ("collingwood", 3),
                                         ("johns", 4),
                                         ("castle", 5),
                                         ("cuths", 6),
                                         ("trevs", 7),
                                         ("aidans", 8),
                                         ("snow", 9),
                                         ("grey", 10),
                                         ("stephenson", 11),
                                         ("hatfield", 12),
                                         ("hildbede", 13),
                                         ("south", 14),
                                         ("vanmildert", 15),
                                         ("ustinov", 16)];

/// Looks up a single numeral name.
///
/// # Example
/// ```
/// use durham::interpreter::value::numeral::numeral_value;
///
/// assert_eq!(numeral_value("castle"), Some(5));
/// assert_eq!(numeral_value("ustinov"), Some(16));
/// assert_eq!(numeral_value("oxford"), None);
/// ```
#[must_use]
pub fn numeral_value(name: &str) -> Option<i64> {
    NUMERALS.iter()
            .find(|(numeral, _)| *numeral == name)
            .map(|(_, value)| *value)
}

/// Composes a comma-joined sequence of numeral names into one integer.
///
/// Each known component contributes its decimal digits, in order, and the
/// concatenation is parsed as a single integer. Unknown components are
/// skipped. Components valued 10 or more contribute two digits, so
/// `chads, grey` is `110`, not a base-17 number.
///
/// Returns `None` when no digits were produced or the result does not fit
/// into an `i64`.
///
/// # Example
/// ```
/// use durham::interpreter::value::numeral::compose_numeral;
///
/// assert_eq!(compose_numeral("marys, marys"), Some(22));
/// assert_eq!(compose_numeral("chads,butler,butler"), Some(100));
/// assert_eq!(compose_numeral("oxford, cambridge"), None);
/// ```
#[must_use]
pub fn compose_numeral(fragment: &str) -> Option<i64> {
    let digits: String = fragment.split(',')
                                 .map(str::trim)
                                 .filter_map(numeral_value)
                                 .map(|value| value.to_string())
                                 .collect();

    digits.parse().ok()
}
