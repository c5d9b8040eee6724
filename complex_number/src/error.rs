//! Error types for complex-number operations
//!
//! Parse failures come from the parser crate and are re-exported here so
//! callers only need this crate in scope.

use thiserror::Error;

pub use complex_number_parser::{ParseError, ParseResult};

/// Arithmetic error type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Divisor has zero magnitude
    #[error("DivideError: division by a complex number of zero magnitude")]
    DivisionByZero,
}

/// Result type alias for checked arithmetic
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;
