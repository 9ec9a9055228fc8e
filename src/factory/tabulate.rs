use log::{debug, warn};

use crate::{error::TabulatedError, function::Function, tabulated::TabulatedFunction};

use super::{StorageKind, TabulatedFunctionFactory, current_tabulated_function_factory};

/// Samples `function` at `count` evenly spaced points over `[left, right]`
/// using the global factory.
///
/// # Errors
/// - `InvalidArgument` when `left >= right` or `count < 2`
/// - `OutsideDomain` when `[left, right]` is not inside the domain of `function`
pub fn tabulate<F>(
    function: &F,
    left: f64,
    right: f64,
    count: usize,
) -> Result<Box<dyn TabulatedFunction>, TabulatedError>
where
    F: Function + ?Sized,
{
    let factory = current_tabulated_function_factory();
    tabulate_using(factory.as_ref(), function, left, right, count)
}

/// Like [`tabulate`], with the storage picked by `kind`.
///
/// Construction failures are reported as `Configuration` errors. Bad bounds,
/// a count below 2 and domain failures are returned as-is.
pub fn tabulate_with<F>(
    kind: StorageKind,
    function: &F,
    left: f64,
    right: f64,
    count: usize,
) -> Result<Box<dyn TabulatedFunction>, TabulatedError>
where
    F: Function + ?Sized,
{
    check_domain(function, left, right, count)?;
    let tabulated = kind.create_with_count(left, right, count)?;
    fill(tabulated, function)
}

/// Like [`tabulate`], with an explicit factory.
pub fn tabulate_using<F>(
    factory: &dyn TabulatedFunctionFactory,
    function: &F,
    left: f64,
    right: f64,
    count: usize,
) -> Result<Box<dyn TabulatedFunction>, TabulatedError>
where
    F: Function + ?Sized,
{
    check_domain(function, left, right, count)?;
    let tabulated = factory.create_with_count(left, right, count)?;
    fill(tabulated, function)
}

fn check_domain<F>(
    function: &F,
    left: f64,
    right: f64,
    count: usize,
) -> Result<(), TabulatedError>
where
    F: Function + ?Sized,
{
    if !(left < right) {
        return Err(TabulatedError::invalid_argument(format!(
            "left border {} must be less than right border {}",
            left, right
        )));
    }
    if count < 2 {
        return Err(TabulatedError::invalid_argument(format!(
            "at least 2 points are required, got {}",
            count
        )));
    }
    if left < function.left_border() || right > function.right_border() {
        return Err(TabulatedError::OutsideDomain {
            left,
            right,
            domain_left: function.left_border(),
            domain_right: function.right_border(),
        });
    }
    Ok(())
}

fn fill<F>(
    mut tabulated: Box<dyn TabulatedFunction>,
    function: &F,
) -> Result<Box<dyn TabulatedFunction>, TabulatedError>
where
    F: Function + ?Sized,
{
    debug!(
        "tabulating over [{}, {}] with {} points into {} storage",
        tabulated.left_border(),
        tabulated.right_border(),
        tabulated.points_count(),
        tabulated.storage_kind()
    );

    for i in 0..tabulated.points_count() {
        let x = tabulated.point_x(i)?;
        let y = function.value_at(x);
        if y.is_nan() {
            warn!("source function is NaN at x = {} (point {})", x, i);
        }
        tabulated.set_point_y(i, y)?;
    }
    Ok(tabulated)
}
