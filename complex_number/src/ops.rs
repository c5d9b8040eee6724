//! Arithmetic on complex numbers
//!
//! The four operations are available as named methods, through the
//! `std::ops` traits (for values and references), and through [`BinOp`]
//! when the operation is chosen at runtime.

use std::ops::{Add, Div, Mul, Neg, Sub};

use tracing::debug;

use crate::complex::ComplexNumber;
use crate::error::{ArithmeticError, ArithmeticResult};

impl ComplexNumber {
    /// `(a.real + b.real, a.imag + b.imag)`
    pub fn add(&self, other: &ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(self.real() + other.real(), self.imag() + other.imag())
    }

    /// `(a.real - b.real, a.imag - b.imag)`
    pub fn subtract(&self, other: &ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(self.real() - other.real(), self.imag() - other.imag())
    }

    /// `(a.real*b.real - a.imag*b.imag, a.real*b.imag + a.imag*b.real)`
    pub fn multiply(&self, other: &ComplexNumber) -> ComplexNumber {
        let (a, b) = (self, other);
        ComplexNumber::new(
            a.real() * b.real() - a.imag() * b.imag(),
            a.real() * b.imag() + a.imag() * b.real(),
        )
    }

    /// Divide by `other` following IEEE-754 semantics
    ///
    /// No guard for a zero-magnitude divisor: the result then has infinite
    /// or NaN parts. Use [`ComplexNumber::checked_div`] to reject it instead.
    pub fn divide(&self, other: &ComplexNumber) -> ComplexNumber {
        let (a, b) = (self, other);
        let denom = b.norm_sqr();
        ComplexNumber::new(
            (a.real() * b.real() + a.imag() * b.imag()) / denom,
            (a.imag() * b.real() - a.real() * b.imag()) / denom,
        )
    }

    /// Divide by `other`, failing when `other.norm_sqr()` is zero
    ///
    /// That includes divisors whose squared magnitude underflows.
    pub fn checked_div(&self, other: &ComplexNumber) -> ArithmeticResult<ComplexNumber> {
        if other.norm_sqr() == 0.0 {
            debug!(dividend = %self, "rejecting division by zero-magnitude complex");
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(self.divide(other))
    }
}

/// Implements a binary operator trait for every owned/borrowed operand pair
macro_rules! forward_binop {
    ($trait:ident, $method:ident, $named:ident) => {
        impl $trait<ComplexNumber> for ComplexNumber {
            type Output = ComplexNumber;

            #[inline]
            fn $method(self, rhs: ComplexNumber) -> ComplexNumber {
                ComplexNumber::$named(&self, &rhs)
            }
        }

        impl<'a> $trait<&'a ComplexNumber> for ComplexNumber {
            type Output = ComplexNumber;

            #[inline]
            fn $method(self, rhs: &'a ComplexNumber) -> ComplexNumber {
                ComplexNumber::$named(&self, rhs)
            }
        }

        impl<'a> $trait<ComplexNumber> for &'a ComplexNumber {
            type Output = ComplexNumber;

            #[inline]
            fn $method(self, rhs: ComplexNumber) -> ComplexNumber {
                ComplexNumber::$named(self, &rhs)
            }
        }

        impl<'a, 'b> $trait<&'b ComplexNumber> for &'a ComplexNumber {
            type Output = ComplexNumber;

            #[inline]
            fn $method(self, rhs: &'b ComplexNumber) -> ComplexNumber {
                ComplexNumber::$named(self, rhs)
            }
        }
    };
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, subtract);
forward_binop!(Mul, mul, multiply);
forward_binop!(Div, div, divide);

impl Neg for ComplexNumber {
    type Output = ComplexNumber;

    fn neg(self) -> ComplexNumber {
        ComplexNumber::new(-self.real(), -self.imag())
    }
}

impl Neg for &ComplexNumber {
    type Output = ComplexNumber;

    fn neg(self) -> ComplexNumber {
        -*self
    }
}

/// Binary operation type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// All operations, in the order the demonstration reports them
    pub const ALL: [BinOp; 4] = [BinOp::Add, BinOp::Sub, BinOp::Mul, BinOp::Div];

    /// Get the operator symbol
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }

    /// Get the operation name
    pub fn label(&self) -> &'static str {
        match self {
            BinOp::Add => "Addition",
            BinOp::Sub => "Subtraction",
            BinOp::Mul => "Multiplication",
            BinOp::Div => "Division",
        }
    }

    /// Apply the operation; division follows IEEE-754 semantics
    pub fn apply(&self, lhs: &ComplexNumber, rhs: &ComplexNumber) -> ComplexNumber {
        match self {
            BinOp::Add => lhs.add(rhs),
            BinOp::Sub => lhs.subtract(rhs),
            BinOp::Mul => lhs.multiply(rhs),
            BinOp::Div => lhs.divide(rhs),
        }
    }

    /// Apply the operation, rejecting division by a zero-magnitude value
    pub fn apply_checked(
        &self,
        lhs: &ComplexNumber,
        rhs: &ComplexNumber,
    ) -> ArithmeticResult<ComplexNumber> {
        match self {
            BinOp::Div => lhs.checked_div(rhs),
            op => Ok(op.apply(lhs, rhs)),
        }
    }
}
