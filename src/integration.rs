//! Numerical integration by the trapezoid rule.

use crate::{error::TabulatedError, function::Function};

/// Integrates `function` over `[left, right]` with the trapezoid rule.
///
/// The interval is walked in increments of `step`; the last increment is
/// clipped to `right`. Evaluation results are used as-is, so a NaN anywhere
/// in the interval makes the result NaN.
///
/// # Errors
/// - `OutsideDomain` when `[left, right]` is not inside the domain of `function`
/// - `InvalidArgument` when `left > right`, `step <= 0`, or `step` is too
///   small to advance from some grid point
///
/// # Examples
///
/// ```rust
/// use tabulated::function::basic::Exp;
/// use tabulated::integration::integral;
///
/// let area = integral(&Exp, 0.0, 1.0, 1e-4).unwrap();
/// assert!((area - (std::f64::consts::E - 1.0)).abs() < 1e-7);
/// ```
pub fn integral<F>(function: &F, left: f64, right: f64, step: f64) -> Result<f64, TabulatedError>
where
    F: Function + ?Sized,
{
    if left < function.left_border() || right > function.right_border() {
        return Err(TabulatedError::OutsideDomain {
            left,
            right,
            domain_left: function.left_border(),
            domain_right: function.right_border(),
        });
    }
    if !(left <= right) {
        return Err(TabulatedError::invalid_argument(format!(
            "left border {} must not exceed right border {}",
            left, right
        )));
    }
    if !(step > 0.0) {
        return Err(TabulatedError::invalid_argument(format!(
            "integration step must be positive, got {}",
            step
        )));
    }
    if left == right {
        return Ok(0.0);
    }

    let mut sum = 0.0;
    let mut current = left;
    let mut current_value = function.value_at(current);
    while current < right {
        let next = (current + step).min(right);
        if next == current {
            return Err(TabulatedError::invalid_argument(format!(
                "integration step {} does not advance past x = {}",
                step, current
            )));
        }
        let next_value = function.value_at(next);
        sum += (current_value + next_value) * (next - current) / 2.0;
        current = next;
        current_value = next_value;
    }

    Ok(sum)
}
