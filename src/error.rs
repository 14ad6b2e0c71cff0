/// Runtime errors.
///
/// Contains the fatal conditions that abort a run: the loop-iteration ceiling
/// and arithmetic failures. Malformed source never produces an error; it is
/// skipped or falls back to a default value instead.
pub mod runtime_error;

pub use runtime_error::RuntimeError;
