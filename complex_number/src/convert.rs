//! Conversion utilities between angle units and complex representations
//!
//! Angles are exposed in degrees; the trigonometric functions work in radians.

use std::f64::consts::PI;

use complex_number_parser::Form;

use crate::complex::ComplexNumber;

/// Convert degrees to radians, `degrees * π / 180`
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Convert radians to degrees, `radians * 180 / π`
#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Convert a magnitude and an angle in degrees to `(real, imag)`
pub fn polar_to_cartesian(magnitude: f64, degrees: f64) -> (f64, f64) {
    let radians = to_radians(degrees);
    (magnitude * radians.cos(), magnitude * radians.sin())
}

impl From<Form> for ComplexNumber {
    fn from(form: Form) -> Self {
        match form {
            Form::Cartesian { real, imag } => ComplexNumber::new(real, imag),
            Form::Polar { magnitude, degrees } => ComplexNumber::from_polar(magnitude, degrees),
        }
    }
}
