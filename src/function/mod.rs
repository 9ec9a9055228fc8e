//! # Functions of one real argument
//!
//! Everything in the crate that can be evaluated implements [`Function`]: the
//! elementary functions in [`basic`], the combinators in [`meta`], and both
//! tabulated storages.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabulated::function::{Function, basic::Exp, meta};
//!
//! let shifted = meta::shift(Exp, 1.0, 0.5);
//! assert!((shifted.value_at(1.0) - 1.5).abs() < 1e-12);
//! assert_eq!(shifted.left_border(), f64::NEG_INFINITY);
//! ```

pub mod basic;
pub mod meta;

use std::{rc::Rc, sync::Arc};

/// A real function defined on the closed interval
/// `[left_border(), right_border()]`.
///
/// Borders may be infinite. Evaluating outside the domain is not an error:
/// implementations return whatever value is natural for them, typically NaN.
pub trait Function {
    /// Lower bound of the domain.
    fn left_border(&self) -> f64;

    /// Upper bound of the domain.
    fn right_border(&self) -> f64;

    /// Evaluates the function at `x`.
    fn value_at(&self, x: f64) -> f64;
}

impl<F: Function + ?Sized> Function for &F {
    fn left_border(&self) -> f64 {
        (**self).left_border()
    }

    fn right_border(&self) -> f64 {
        (**self).right_border()
    }

    fn value_at(&self, x: f64) -> f64 {
        (**self).value_at(x)
    }
}

impl<F: Function + ?Sized> Function for Box<F> {
    fn left_border(&self) -> f64 {
        (**self).left_border()
    }

    fn right_border(&self) -> f64 {
        (**self).right_border()
    }

    fn value_at(&self, x: f64) -> f64 {
        (**self).value_at(x)
    }
}

impl<F: Function + ?Sized> Function for Rc<F> {
    fn left_border(&self) -> f64 {
        (**self).left_border()
    }

    fn right_border(&self) -> f64 {
        (**self).right_border()
    }

    fn value_at(&self, x: f64) -> f64 {
        (**self).value_at(x)
    }
}

impl<F: Function + ?Sized> Function for Arc<F> {
    fn left_border(&self) -> f64 {
        (**self).left_border()
    }

    fn right_border(&self) -> f64 {
        (**self).right_border()
    }

    fn value_at(&self, x: f64) -> f64 {
        (**self).value_at(x)
    }
}

pub use meta::{composition, mult, power, scale, shift, sum};
