#![cfg(test)]
#![allow(dead_code)]

use tabulated::FunctionPoint;

// Helper function to assert floating point equality with tolerance
pub fn assert_float_eq(a: f64, b: f64, tolerance: f64) {
    assert!(
        (a - b).abs() < tolerance,
        "Expected {} to be approximately equal to {} (tolerance: {})",
        a,
        b,
        tolerance
    );
}

/// Points from `(x, y)` pairs.
pub fn points(pairs: &[(f64, f64)]) -> Vec<FunctionPoint> {
    pairs.iter().map(|&pair| FunctionPoint::from(pair)).collect()
}
