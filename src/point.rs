//! Sample points of a tabulated function.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

/// A single `(x, y)` sample.
///
/// Points are plain values: storages hand out copies and never expose their
/// internal points by reference. Equality and hashing compare the exact bit
/// patterns of both coordinates (NaN is canonicalised, so `NaN == NaN`, while
/// `0.0` and `-0.0` differ).
///
/// # Examples
///
/// ```rust
/// use tabulated::FunctionPoint;
///
/// let point = FunctionPoint::new(1.5, -2.0);
/// assert_eq!(point, FunctionPoint::from((1.5, -2.0)));
/// assert_eq!(point.to_string(), "(1.5; -2.0)");
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FunctionPoint {
    /// Argument of the sample.
    pub x: f64,
    /// Value of the function at `x`.
    pub y: f64,
}

impl FunctionPoint {
    pub fn new(x: f64, y: f64) -> Self {
        FunctionPoint { x, y }
    }

    /// Returns a copy of this point with a different x-coordinate.
    pub fn with_x(self, x: f64) -> Self {
        FunctionPoint { x, ..self }
    }

    /// Returns a copy of this point with a different y-coordinate.
    pub fn with_y(self, y: f64) -> Self {
        FunctionPoint { y, ..self }
    }

    /// 32-bit structural hash, `h(x) ^ h(y)` where `h` folds the high and low
    /// halves of the canonical bit pattern.
    ///
    /// Tabulated functions accumulate these values in index order, so two
    /// functions with equal points always agree on their hash code.
    pub fn hash_code(&self) -> i32 {
        fold_bits(self.x) ^ fold_bits(self.y)
    }
}

fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

fn fold_bits(value: f64) -> i32 {
    let bits = canonical_bits(value);
    (bits ^ (bits >> 32)) as i32
}

impl PartialEq for FunctionPoint {
    fn eq(&self, other: &Self) -> bool {
        canonical_bits(self.x) == canonical_bits(other.x)
            && canonical_bits(self.y) == canonical_bits(other.y)
    }
}

impl Eq for FunctionPoint {}

impl Hash for FunctionPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
    }
}

impl fmt::Display for FunctionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}; {:?})", self.x, self.y)
    }
}

impl From<(f64, f64)> for FunctionPoint {
    fn from((x, y): (f64, f64)) -> Self {
        FunctionPoint { x, y }
    }
}

impl From<FunctionPoint> for (f64, f64) {
    fn from(point: FunctionPoint) -> Self {
        (point.x, point.y)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_exact_equality() {
        let a = FunctionPoint::new(0.1 + 0.2, 1.0);
        let b = FunctionPoint::new(0.3, 1.0);
        // No tolerance: 0.1 + 0.2 != 0.3 in binary floating point
        assert_ne!(a, b);
        assert_eq!(a, FunctionPoint::new(0.1 + 0.2, 1.0));
    }

    #[test]
    fn test_nan_and_signed_zero() {
        assert_eq!(
            FunctionPoint::new(f64::NAN, 0.0),
            FunctionPoint::new(f64::NAN, 0.0)
        );
        assert_ne!(FunctionPoint::new(0.0, 0.0), FunctionPoint::new(-0.0, 0.0));
    }

    #[test]
    fn test_hash_code_matches_for_equal_points() {
        let a = FunctionPoint::new(2.5, -7.25);
        let b = FunctionPoint::from((2.5, -7.25));
        assert_eq!(a.hash_code(), b.hash_code());
        assert_eq!(FunctionPoint::new(0.0, 0.0).hash_code(), 0);
    }

    #[test]
    fn test_hash_set_membership() {
        let mut set = HashSet::new();
        set.insert(FunctionPoint::new(1.0, 2.0));
        set.insert(FunctionPoint::new(1.0, 2.0));
        set.insert(FunctionPoint::new(2.0, 1.0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_with_coordinates() {
        let point = FunctionPoint::new(1.0, 2.0);
        assert_eq!(point.with_x(3.0), FunctionPoint::new(3.0, 2.0));
        assert_eq!(point.with_y(4.0), FunctionPoint::new(1.0, 4.0));
        // Original untouched
        assert_eq!(point, FunctionPoint::new(1.0, 2.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(FunctionPoint::new(0.0, 10.0).to_string(), "(0.0; 10.0)");
    }
}
