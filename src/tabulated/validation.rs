use crate::{
    error::TabulatedError,
    point::FunctionPoint,
    types::{Validate, ValidationResult},
};

use super::{
    ArrayTabulatedFunction, DUPLICATE_TOLERANCE, LinkedListTabulatedFunction, TabulatedFunction,
};

fn _chain<T>(result: ValidationResult<T>, warnings: &mut Vec<String>, errors: &mut Vec<String>) {
    match result {
        ValidationResult::Valid(_) => {}
        ValidationResult::Warnings(_, warns) => {
            warnings.extend(warns);
        }
        ValidationResult::Invalid(warns, errs) => {
            warnings.extend(warns);
            errors.extend(errs);
        }
    }
}

fn _return(warnings: Vec<String>, errors: Vec<String>) -> ValidationResult {
    if !errors.is_empty() {
        ValidationResult::Invalid(warnings, errors)
    } else if !warnings.is_empty() {
        ValidationResult::Warnings((), warnings)
    } else {
        ValidationResult::Valid(())
    }
}

/// Checks a point sequence against the tabulated-function invariants.
///
/// Fewer than two points or non-increasing x-values are errors; non-finite
/// coordinates are warnings.
pub fn validate_points(points: &[FunctionPoint]) -> ValidationResult {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    let w = &mut warnings;
    let e = &mut errors;

    _chain(validate_count(points), w, e);
    _chain(validate_order(points), w, e);
    _chain(validate_finite(points), w, e);
    _return(warnings, errors)
}

fn validate_count(points: &[FunctionPoint]) -> ValidationResult {
    let warnings = Vec::new();
    let mut errors = Vec::new();

    if points.len() < 2 {
        errors.push(format!(
            "A tabulated function needs at least 2 points, found {}",
            points.len()
        ));
    }

    _return(warnings, errors)
}

fn validate_order(points: &[FunctionPoint]) -> ValidationResult {
    let warnings = Vec::new();
    let mut errors = Vec::new();

    for i in 1..points.len() {
        if !(points[i].x > points[i - 1].x) {
            errors.push(format!(
                "x-values are not strictly increasing: {} >= {} at index {}",
                points[i - 1].x,
                points[i].x,
                i
            ));
        }
    }

    _return(warnings, errors)
}

fn validate_finite(points: &[FunctionPoint]) -> ValidationResult {
    let mut warnings = Vec::new();
    let errors = Vec::new();

    for (i, point) in points.iter().enumerate() {
        if !point.x.is_finite() || !point.y.is_finite() {
            warnings.push(format!("Point at index {} is not finite: {}", i, point));
        }
    }

    _return(warnings, errors)
}

impl Validate for ArrayTabulatedFunction {
    fn validate(&self) -> ValidationResult {
        validate_points(self.as_slice())
    }
}

impl Validate for LinkedListTabulatedFunction {
    fn validate(&self) -> ValidationResult {
        validate_points(&self.points())
    }
}

impl Validate for dyn TabulatedFunction {
    fn validate(&self) -> ValidationResult {
        validate_points(&self.points())
    }
}

// Constructor and mutation guards shared by both storages

pub(crate) fn check_points(points: &[FunctionPoint]) -> Result<(), TabulatedError> {
    if points.len() < 2 {
        return Err(TabulatedError::invalid_argument(format!(
            "at least 2 points are required, got {}",
            points.len()
        )));
    }
    for i in 1..points.len() {
        if !(points[i].x > points[i - 1].x) {
            return Err(TabulatedError::invalid_argument(format!(
                "x-values must be strictly increasing: {} then {} at index {}",
                points[i - 1].x,
                points[i].x,
                i
            )));
        }
    }
    Ok(())
}

pub(crate) fn check_index(index: usize, count: usize) -> Result<(), TabulatedError> {
    if index >= count {
        return Err(TabulatedError::index_out_of_bounds(index, count));
    }
    Ok(())
}

/// `x` must lie strictly between the x-values of the neighbours that exist.
pub(crate) fn check_between(
    x: f64,
    previous: Option<f64>,
    next: Option<f64>,
) -> Result<(), TabulatedError> {
    if x.is_nan() {
        return Err(TabulatedError::inappropriate_point(x, "x must be a number"));
    }
    if let Some(previous) = previous {
        if x <= previous {
            return Err(TabulatedError::inappropriate_point(
                x,
                format!("must be greater than the previous x-value {}", previous),
            ));
        }
    }
    if let Some(next) = next {
        if x >= next {
            return Err(TabulatedError::inappropriate_point(
                x,
                format!("must be less than the next x-value {}", next),
            ));
        }
    }
    Ok(())
}

/// `x` must not be NaN nor within [`DUPLICATE_TOLERANCE`] of either would-be
/// neighbour.
pub(crate) fn check_insertion(
    x: f64,
    previous: Option<f64>,
    next: Option<f64>,
) -> Result<(), TabulatedError> {
    if x.is_nan() {
        return Err(TabulatedError::inappropriate_point(x, "x must be a number"));
    }
    for neighbour in [previous, next].into_iter().flatten() {
        if (neighbour - x).abs() < DUPLICATE_TOLERANCE {
            return Err(TabulatedError::inappropriate_point(
                x,
                format!("duplicates the existing x-value {}", neighbour),
            ));
        }
    }
    Ok(())
}

pub(crate) fn check_deletable(count: usize) -> Result<(), TabulatedError> {
    if count < 3 {
        return Err(TabulatedError::illegal_state(format!(
            "cannot delete a point: minimum 3 points required, have {}",
            count
        )));
    }
    Ok(())
}
