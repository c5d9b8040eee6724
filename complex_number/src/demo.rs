//! Console reports for the `complex_demo` binary

use std::fmt;

use crate::complex::ComplexNumber;
use crate::error::ParseResult;
use crate::ops::BinOp;

/// Input the demonstration parses for its second operand
pub const DEMO_INPUT: &str = "(3,4)";

/// The fixed demonstration
///
/// `c1 = (1, 2)` from components and `c2` parsed from [`DEMO_INPUT`].
/// Displays both, the magnitude and angle of `c1` (six significant digits),
/// then every [`BinOp`] applied to `(c1, c2)`.
#[derive(Debug, Clone, Copy)]
pub struct DemoReport {
    pub c1: ComplexNumber,
    pub c2: ComplexNumber,
}

impl DemoReport {
    pub fn new() -> ParseResult<Self> {
        Ok(Self {
            c1: ComplexNumber::new(1.0, 2.0),
            c2: ComplexNumber::parse(DEMO_INPUT)?,
        })
    }
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { c1, c2 } = self;
        writeln!(f, "{}", c1)?;
        writeln!(f, "{}", c2)?;
        writeln!(f, "Magnitude of c1: {}", Significant(c1.magnitude()))?;
        writeln!(f, "Angle of c1: {}", Significant(c1.angle()))?;
        for op in BinOp::ALL {
            writeln!(f, "{}: {}", op.label(), op.apply(c1, c2))?;
        }
        Ok(())
    }
}

/// Renders a value with six significant digits, trailing zeros dropped
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Significant(pub f64);

impl Significant {
    const DIGITS: i32 = 6;
}

impl fmt::Display for Significant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value == 0.0 || !value.is_finite() {
            return write!(f, "{}", value);
        }

        let exponent = value.abs().log10().floor() as i32;
        let decimals = (Self::DIGITS - 1 - exponent).max(0) as usize;
        let text = format!("{:.*}", decimals, value);
        let text = if text.contains('.') {
            text.trim_end_matches('0').trim_end_matches('.')
        } else {
            &text
        };
        f.write_str(text)
    }
}

/// Report for one parsed command-line input
#[derive(Debug, Clone, Copy)]
pub struct Description<'a> {
    pub input: &'a str,
    pub value: ComplexNumber,
}

impl fmt::Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = &self.value;
        writeln!(f, "input:     {}", self.input)?;
        writeln!(f, "value:     {}", value)?;
        writeln!(f, "magnitude: {}", value.magnitude())?;
        writeln!(f, "angle:     {}", value.angle())?;
        writeln!(f, "conjugate: {}", value.conjugate())?;
        writeln!(f, "polar:     {}", value.format_polar())
    }
}
