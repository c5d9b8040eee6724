//! Algebraic and round-trip properties of ComplexNumber, checked over a
//! fixed set of sample values.

use complex_number::{ArithmeticError, BinOp, ComplexNumber, ParseError};
use pretty_assertions::assert_eq;

const SAMPLES: &[(f64, f64)] = &[
    (0.0, 0.0),
    (1.0, 2.0),
    (3.0, 4.0),
    (-2.5, 0.125),
    (1e-3, -7.75),
    (123456.789, -0.000321),
    (-1.0, -1.0),
    (0.1, 0.2),
];

fn samples() -> impl Iterator<Item = ComplexNumber> {
    SAMPLES.iter().map(|&(r, i)| ComplexNumber::new(r, i))
}

fn nonzero_samples() -> impl Iterator<Item = ComplexNumber> {
    samples().filter(|c| c.magnitude() > 0.0)
}

fn assert_approx(actual: ComplexNumber, expected: ComplexNumber, tolerance: f64) {
    let scale = expected.magnitude().max(1.0);
    let delta = (actual - expected).magnitude();
    assert!(
        delta <= tolerance * scale,
        "expected {} ≈ {} (delta {:e})",
        actual,
        expected,
        delta
    );
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_components_are_stored_verbatim() {
    for &(r, i) in SAMPLES {
        let c = ComplexNumber::new(r, i);
        assert_eq!(c.real(), r);
        assert_eq!(c.imag(), i);
    }
}

#[test]
fn test_display_parse_round_trip() {
    for c in samples() {
        let text = c.to_string();
        let parsed = ComplexNumber::parse(&text)
            .unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", text, e));
        assert_approx(parsed, c, 1e-12);
    }
}

#[test]
fn test_polar_round_trip() {
    for c in samples() {
        let text = c.format_polar();
        let parsed = ComplexNumber::parse(&text)
            .unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", text, e));
        assert_approx(parsed, c, 1e-9);
    }
}

#[test]
fn test_parse_failures() {
    assert_eq!(ComplexNumber::parse(""), Err(ParseError::Empty));
    assert_eq!(
        ComplexNumber::parse("abc"),
        Err(ParseError::UnrecognizedFormat)
    );
    assert!(matches!(
        ComplexNumber::parse("(a,b)"),
        Err(ParseError::MalformedCartesian { .. })
    ));
    assert!(matches!(
        ComplexNumber::parse("(1 > b)"),
        Err(ParseError::MalformedPolar { .. })
    ));
}

// =============================================================================
// Algebraic Properties
// =============================================================================

#[test]
fn test_additive_identity() {
    for x in samples() {
        assert_eq!(x + ComplexNumber::zero(), x);
    }
}

#[test]
fn test_additive_inverse() {
    for x in samples() {
        let inverse = ComplexNumber::new(-x.real(), -x.imag());
        assert_eq!(x + inverse, ComplexNumber::zero());
        assert_eq!(x + (-x), ComplexNumber::zero());
    }
}

#[test]
fn test_multiplicative_identity() {
    let one = ComplexNumber::new(1.0, 0.0);
    for x in samples() {
        assert_eq!(x * one, x);
    }
}

#[test]
fn test_conjugate_involution() {
    for x in samples() {
        assert_eq!(x.conjugate().conjugate(), x);
    }
}

#[test]
fn test_magnitude_non_negative() {
    for x in samples() {
        assert!(x.magnitude() >= 0.0);
    }
    assert_eq!(ComplexNumber::zero().magnitude(), 0.0);
}

#[test]
fn test_angle_range() {
    for x in samples() {
        let angle = x.angle();
        assert!(angle > -180.0 && angle <= 180.0, "angle {} of {}", angle, x);
    }
}

#[test]
fn test_division_inverts_multiplication() {
    for a in samples() {
        for b in nonzero_samples() {
            assert_approx((a / b) * b, a, 1e-12);
        }
    }
}

#[test]
fn test_checked_division_agrees_with_ieee_division() {
    for a in samples() {
        for b in nonzero_samples() {
            assert_eq!(a.checked_div(&b), Ok(a / b));
        }
        assert_eq!(
            a.checked_div(&ComplexNumber::zero()),
            Err(ArithmeticError::DivisionByZero)
        );
    }
}

// =============================================================================
// Demonstration Scenario
// =============================================================================

#[test]
fn test_demonstration_values() {
    let c1 = ComplexNumber::new(1.0, 2.0);
    let c2 = ComplexNumber::parse("(3,4)").unwrap();

    assert!((c1.magnitude() - 2.23607).abs() < 1e-5);
    assert!((c1.angle() - 63.4349).abs() < 1e-4);

    assert_eq!(c1 + c2, ComplexNumber::new(4.0, 6.0));
    assert_eq!(c1 - c2, ComplexNumber::new(-2.0, -2.0));
    assert_eq!(c1 * c2, ComplexNumber::new(-5.0, 10.0));
    assert_approx(c1 / c2, ComplexNumber::new(0.44, 0.08), 1e-15);

    let labels: Vec<_> = BinOp::ALL.iter().map(|op| op.label()).collect();
    assert_eq!(
        labels,
        vec!["Addition", "Subtraction", "Multiplication", "Division"]
    );
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_serde_json_shape() {
    let c = ComplexNumber::new(1.5, -2.0);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, r#"{"real":1.5,"imag":-2.0}"#);

    let back: ComplexNumber = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}
