//! The complex-number value type
//!
//! `ComplexNumber` is a plain `Copy` pair of `f64`s. Nothing mutates a value
//! after construction; every operation returns a new one.

use std::fmt;
use std::str::FromStr;

use complex_number_parser::{read_form, ParseError, ParseResult};
use serde::{Deserialize, Serialize};

use crate::convert::{polar_to_cartesian, to_degrees};

/// Complex number with `f64` components
///
/// Construction does not validate finiteness: dividing by a zero-magnitude
/// value with `/` yields non-finite parts (see [`ComplexNumber::checked_div`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComplexNumber {
    real: f64,
    imag: f64,
}

impl ComplexNumber {
    /// Create a complex number from its components
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// The zero value `(0, 0)`
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Create a complex number from a magnitude and an angle in degrees
    pub fn from_polar(magnitude: f64, degrees: f64) -> Self {
        let (real, imag) = polar_to_cartesian(magnitude, degrees);
        Self::new(real, imag)
    }

    /// Parse `(<real>, <imag>)` or `(<magnitude> > <degrees>)`
    ///
    /// A `,` anywhere in the string selects the Cartesian form, otherwise a
    /// `>` selects the polar form.
    ///
    /// # Example
    ///
    /// ```
    /// use complex_number::{ComplexNumber, ParseError};
    ///
    /// let c = ComplexNumber::parse("(3,4)").unwrap();
    /// assert_eq!(c, ComplexNumber::new(3.0, 4.0));
    ///
    /// assert_eq!(ComplexNumber::parse(""), Err(ParseError::Empty));
    /// ```
    pub fn parse(s: &str) -> ParseResult<Self> {
        read_form(s).map(Self::from)
    }

    /// Real part
    #[inline]
    pub fn real(&self) -> f64 {
        self.real
    }

    /// Imaginary part
    #[inline]
    pub fn imag(&self) -> f64 {
        self.imag
    }

    /// Euclidean norm, `sqrt(real² + imag²)`
    pub fn magnitude(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Squared magnitude (no sqrt)
    pub fn norm_sqr(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// Argument in degrees, in `(-180, 180]`
    pub fn angle(&self) -> f64 {
        to_degrees(self.imag.atan2(self.real))
    }

    /// Complex conjugate
    pub fn conjugate(&self) -> Self {
        Self::new(self.real, -self.imag)
    }

    /// `(magnitude, angle in degrees)`
    pub fn to_polar(&self) -> (f64, f64) {
        (self.magnitude(), self.angle())
    }

    /// Check that both parts are finite
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }

    /// Render as `(<magnitude> > <degrees>)`, the polar counterpart of `Display`
    pub fn format_polar(&self) -> String {
        let (magnitude, degrees) = self.to_polar();
        format!("({} > {})", magnitude, degrees)
    }
}

// ========== From implementations ==========

impl From<(f64, f64)> for ComplexNumber {
    fn from((real, imag): (f64, f64)) -> Self {
        Self::new(real, imag)
    }
}

impl From<f64> for ComplexNumber {
    fn from(real: f64) -> Self {
        Self::new(real, 0.0)
    }
}

impl FromStr for ComplexNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ========== Display implementation ==========

/// Renders `(<real>, <imag>)`; a formatter precision applies to both parts.
impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*})", p, self.real, p, self.imag),
            None => write!(f, "({}, {})", self.real, self.imag),
        }
    }
}
