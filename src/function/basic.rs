//! Elementary functions.

use crate::error::TabulatedError;

use super::Function;

/// `e^x` over the whole real line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Exp;

impl Function for Exp {
    fn left_border(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn right_border(&self) -> f64 {
        f64::INFINITY
    }

    fn value_at(&self, x: f64) -> f64 {
        x.exp()
    }
}

/// Logarithm to a fixed base, defined on `[0, +inf)`.
///
/// `value_at(0.0)` is `-inf`, matching `f64::log`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Log {
    base: f64,
}

impl Log {
    /// Creates a logarithm with the given base.
    ///
    /// # Errors
    /// Returns `InvalidArgument` unless `base` is finite, positive and not 1.
    pub fn new(base: f64) -> Result<Self, TabulatedError> {
        if !(base.is_finite() && base > 0.0) || base == 1.0 {
            return Err(TabulatedError::invalid_argument(format!(
                "logarithm base must be positive and different from 1, got {}",
                base
            )));
        }
        Ok(Log { base })
    }

    /// Natural logarithm.
    pub fn natural() -> Self {
        Log {
            base: std::f64::consts::E,
        }
    }

    pub fn base(&self) -> f64 {
        self.base
    }
}

impl Function for Log {
    fn left_border(&self) -> f64 {
        0.0
    }

    fn right_border(&self) -> f64 {
        f64::INFINITY
    }

    fn value_at(&self, x: f64) -> f64 {
        x.log(self.base)
    }
}

/// Sine over the whole real line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sin;

impl Function for Sin {
    fn left_border(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn right_border(&self) -> f64 {
        f64::INFINITY
    }

    fn value_at(&self, x: f64) -> f64 {
        x.sin()
    }
}

/// Cosine over the whole real line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cos;

impl Function for Cos {
    fn left_border(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn right_border(&self) -> f64 {
        f64::INFINITY
    }

    fn value_at(&self, x: f64) -> f64 {
        x.cos()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{E, PI};

    use super::*;
    use crate::test_utils::assert_float_eq;

    #[test]
    fn test_exp() {
        assert_float_eq(Exp.value_at(0.0), 1.0, 1e-15);
        assert_float_eq(Exp.value_at(1.0), E, 1e-15);
        assert!(Exp.left_border().is_infinite());
    }

    #[test]
    fn test_log_bases() {
        let log10 = Log::new(10.0).unwrap();
        assert_float_eq(log10.value_at(1000.0), 3.0, 1e-12);
        assert_float_eq(Log::natural().value_at(E), 1.0, 1e-15);
        assert_eq!(log10.left_border(), 0.0);
        assert_eq!(log10.value_at(0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_log_rejects_bad_base() {
        assert!(Log::new(1.0).is_err());
        assert!(Log::new(0.0).is_err());
        assert!(Log::new(-2.0).is_err());
        assert!(Log::new(f64::NAN).is_err());
    }

    #[test]
    fn test_trigonometry() {
        assert_float_eq(Sin.value_at(PI / 2.0), 1.0, 1e-15);
        assert_float_eq(Cos.value_at(PI), -1.0, 1e-15);
    }
}
