use thiserror::Error;

/// Represents all errors that can abort a run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// A `for` loop kept its condition true for more iterations than allowed.
    #[error("Error on line {line}: Loop exceeded maximum iterations ({limit}).")]
    LoopLimitExceeded {
        /// The iteration ceiling that was hit.
        limit: usize,
        /// The source line of the loop header.
        line:  usize,
    },
    /// The right operand of `edinburgh` evaluated to zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
}
