//! complex_number_parser
//!
//! Tolerant reader for the textual forms of a complex number:
//!
//! - Cartesian: `(<real>, <imag>)`
//! - polar: `(<magnitude> > <angle_degrees>)`
//!
//! The reader yields the raw numeric parts as a [`Form`]; turning them into
//! a value is left to the `complex_number` crate.
//!
//! # Example
//!
//! ```
//! use complex_number_parser::{read_form, Form, ParseError};
//!
//! assert_eq!(
//!     read_form("(2 > 90)").unwrap(),
//!     Form::Polar { magnitude: 2.0, degrees: 90.0 }
//! );
//! assert_eq!(read_form("abc"), Err(ParseError::UnrecognizedFormat));
//! ```

pub mod error;
pub mod form;
pub mod lexer;
pub mod span;
pub mod token;

// Re-exports
pub use error::{ParseError, ParseResult};
pub use form::{read_cartesian, read_form, read_polar, Form, FormKind};
pub use lexer::{Lexer, SpannedToken};
pub use span::Span;
pub use token::Token;

/// Tokenize a complex-number string
///
/// Returns every token with its span; unlexable input appears as
/// [`Token::Error`].
pub fn tokenize(source: &str) -> Vec<SpannedToken<'_>> {
    lexer::tokenize(source)
}

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
