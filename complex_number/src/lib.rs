//! complex_number
//!
//! A complex-number value type. It includes:
//!
//! - `ComplexNumber`, an immutable `Copy` pair of `f64` components
//! - construction from components, from `(<real>, <imag>)` and from
//!   `(<magnitude> > <angle_degrees>)` strings
//! - arithmetic through named methods, `std::ops` traits and `BinOp`
//! - magnitude, angle (degrees), conjugate and polar rendering
//! - `ParseError` and `ArithmeticError` for the failure cases
//!
//! # Example
//!
//! ```
//! use complex_number::ComplexNumber;
//!
//! let c1 = ComplexNumber::new(1.0, 2.0);
//! let c2: ComplexNumber = "(3,4)".parse().unwrap();
//!
//! assert_eq!(c1 + c2, ComplexNumber::new(4.0, 6.0));
//! assert_eq!((c1 * c2).to_string(), "(-5, 10)");
//! ```

pub mod complex;
pub mod convert;
pub mod demo;
pub mod error;
pub mod ops;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use complex_number::prelude::*;
/// ```
pub mod prelude {
    pub use super::complex::ComplexNumber;
    pub use super::error::{ArithmeticError, ParseError};
    pub use super::ops::BinOp;
}

pub use prelude::*;
pub use error::{ArithmeticResult, ParseResult};
