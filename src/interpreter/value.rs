/// The Durham numeral table.
///
/// Maps the seventeen college names to the integers 0 through 16 and composes
/// comma-joined names into multi-digit numbers.
pub mod numeral;

pub mod core;
