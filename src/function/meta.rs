//! Combinators that build new functions out of existing ones.
//!
//! No simplification happens: a `Sum` of two `Shift`s evaluates both shifts on
//! every call.

use crate::error::TabulatedError;

use super::Function;

/// `f(x - shift_x) + shift_y`, domain moved right by `shift_x`.
#[derive(Debug, Clone)]
pub struct Shift<F> {
    inner: F,
    shift_x: f64,
    shift_y: f64,
}

/// `scale_y * f(x / scale_x)`, domain stretched by `scale_x`.
#[derive(Debug, Clone)]
pub struct Scale<F> {
    inner: F,
    scale_x: f64,
    scale_y: f64,
}

/// `f(x)` raised to a fixed power.
#[derive(Debug, Clone)]
pub struct Power<F> {
    inner: F,
    exponent: f64,
}

/// `f(x) + g(x)` on the intersection of both domains.
#[derive(Debug, Clone)]
pub struct Sum<F, G> {
    first: F,
    second: G,
}

/// `f(x) * g(x)` on the intersection of both domains.
#[derive(Debug, Clone)]
pub struct Mult<F, G> {
    first: F,
    second: G,
}

/// `outer(inner(x))` on the domain of `inner`.
#[derive(Debug, Clone)]
pub struct Composition<F, G> {
    outer: F,
    inner: G,
}

pub fn shift<F: Function>(f: F, shift_x: f64, shift_y: f64) -> Shift<F> {
    Shift {
        inner: f,
        shift_x,
        shift_y,
    }
}

/// # Errors
/// `InvalidArgument` when `scale_x` is zero or NaN.
pub fn scale<F: Function>(f: F, scale_x: f64, scale_y: f64) -> Result<Scale<F>, TabulatedError> {
    if scale_x == 0.0 || scale_x.is_nan() {
        return Err(TabulatedError::invalid_argument(format!(
            "x scale factor must be non-zero, got {}",
            scale_x
        )));
    }
    Ok(Scale {
        inner: f,
        scale_x,
        scale_y,
    })
}

pub fn power<F: Function>(f: F, exponent: f64) -> Power<F> {
    Power { inner: f, exponent }
}

/// # Errors
/// `InvalidArgument` when the two domains do not intersect.
pub fn sum<F: Function, G: Function>(f: F, g: G) -> Result<Sum<F, G>, TabulatedError> {
    check_intersection(&f, &g)?;
    Ok(Sum {
        first: f,
        second: g,
    })
}

/// # Errors
/// `InvalidArgument` when the two domains do not intersect.
pub fn mult<F: Function, G: Function>(f: F, g: G) -> Result<Mult<F, G>, TabulatedError> {
    check_intersection(&f, &g)?;
    Ok(Mult {
        first: f,
        second: g,
    })
}

pub fn composition<F: Function, G: Function>(outer: F, inner: G) -> Composition<F, G> {
    Composition { outer, inner }
}

fn check_intersection<F: Function, G: Function>(f: &F, g: &G) -> Result<(), TabulatedError> {
    let left = f.left_border().max(g.left_border());
    let right = f.right_border().min(g.right_border());
    if left > right {
        return Err(TabulatedError::invalid_argument(format!(
            "domains [{}, {}] and [{}, {}] do not intersect",
            f.left_border(),
            f.right_border(),
            g.left_border(),
            g.right_border()
        )));
    }
    Ok(())
}

impl<F: Function> Function for Shift<F> {
    fn left_border(&self) -> f64 {
        self.inner.left_border() + self.shift_x
    }

    fn right_border(&self) -> f64 {
        self.inner.right_border() + self.shift_x
    }

    fn value_at(&self, x: f64) -> f64 {
        self.inner.value_at(x - self.shift_x) + self.shift_y
    }
}

impl<F: Function> Function for Scale<F> {
    fn left_border(&self) -> f64 {
        let a = self.inner.left_border() * self.scale_x;
        let b = self.inner.right_border() * self.scale_x;
        a.min(b)
    }

    fn right_border(&self) -> f64 {
        let a = self.inner.left_border() * self.scale_x;
        let b = self.inner.right_border() * self.scale_x;
        a.max(b)
    }

    fn value_at(&self, x: f64) -> f64 {
        self.scale_y * self.inner.value_at(x / self.scale_x)
    }
}

impl<F: Function> Function for Power<F> {
    fn left_border(&self) -> f64 {
        self.inner.left_border()
    }

    fn right_border(&self) -> f64 {
        self.inner.right_border()
    }

    fn value_at(&self, x: f64) -> f64 {
        self.inner.value_at(x).powf(self.exponent)
    }
}

impl<F: Function, G: Function> Function for Sum<F, G> {
    fn left_border(&self) -> f64 {
        self.first.left_border().max(self.second.left_border())
    }

    fn right_border(&self) -> f64 {
        self.first.right_border().min(self.second.right_border())
    }

    fn value_at(&self, x: f64) -> f64 {
        self.first.value_at(x) + self.second.value_at(x)
    }
}

impl<F: Function, G: Function> Function for Mult<F, G> {
    fn left_border(&self) -> f64 {
        self.first.left_border().max(self.second.left_border())
    }

    fn right_border(&self) -> f64 {
        self.first.right_border().min(self.second.right_border())
    }

    fn value_at(&self, x: f64) -> f64 {
        self.first.value_at(x) * self.second.value_at(x)
    }
}

impl<F: Function, G: Function> Function for Composition<F, G> {
    fn left_border(&self) -> f64 {
        self.inner.left_border()
    }

    fn right_border(&self) -> f64 {
        self.inner.right_border()
    }

    fn value_at(&self, x: f64) -> f64 {
        self.outer.value_at(self.inner.value_at(x))
    }
}
