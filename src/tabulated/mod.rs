//! # Tabulated functions
//!
//! Functions known only at a finite set of samples with strictly increasing
//! x-values, evaluated by linear interpolation between neighbouring samples.
//!
//! Two storages implement the same [`TabulatedFunction`] contract and are
//! interchangeable for every public operation:
//!
//! - [`ArrayTabulatedFunction`]: contiguous buffer, O(1) indexing
//! - [`LinkedListTabulatedFunction`]: circular doubly-linked list with a
//!   sentinel head, O(min(i, n - i)) indexing and relinking on insert/delete
//!
//! ## Quick Start
//!
//! ```rust
//! use tabulated::{ArrayTabulatedFunction, LinkedListTabulatedFunction, FunctionPoint};
//! use tabulated::function::Function;
//! use tabulated::tabulated::TabulatedFunction;
//!
//! let mut array = ArrayTabulatedFunction::with_values(0.0, 2.0, &[0.0, 1.0, 4.0]).unwrap();
//! array.add_point(FunctionPoint::new(1.5, 2.0)).unwrap();
//!
//! let list = LinkedListTabulatedFunction::from_points(&array.points()).unwrap();
//! assert_eq!(array, list);
//! assert_eq!(list.value_at(0.5), 0.5);
//! assert!(list.value_at(3.0).is_nan());
//! ```
//!
//! ## Invariants
//!
//! - at least two points at all times
//! - x strictly increasing with the index
//! - the domain is `[first x, last x]`; `value_at` outside it is NaN
//! - deletion is refused below three points

pub mod array;
pub mod linked_list;
pub mod validation;

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    error::TabulatedError, factory::StorageKind, function::Function, point::FunctionPoint,
};

pub use array::ArrayTabulatedFunction;
pub use linked_list::LinkedListTabulatedFunction;

/// Two x-values closer than this are treated as duplicates on insertion.
pub const DUPLICATE_TOLERANCE: f64 = 1e-10;

/// Common contract of both storages.
///
/// Points cross this boundary by value only: getters return copies and
/// setters copy their argument in.
pub trait TabulatedFunction: Function + fmt::Debug + fmt::Display + Send + Sync {
    fn points_count(&self) -> usize;

    /// Copy of the point at `index`.
    ///
    /// # Errors
    /// `IndexOutOfBounds` when `index >= points_count()`.
    fn point(&self, index: usize) -> Result<FunctionPoint, TabulatedError>;

    /// Replaces the point at `index`.
    ///
    /// # Errors
    /// - `IndexOutOfBounds` when `index >= points_count()`
    /// - `InappropriatePoint` when `point.x` is not strictly between the
    ///   x-values of the neighbouring points
    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), TabulatedError>;

    fn point_x(&self, index: usize) -> Result<f64, TabulatedError>;

    /// Moves the point at `index` horizontally. Same ordering rules as
    /// [`TabulatedFunction::set_point`].
    fn set_point_x(&mut self, index: usize, x: f64) -> Result<(), TabulatedError>;

    fn point_y(&self, index: usize) -> Result<f64, TabulatedError>;

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), TabulatedError>;

    /// Removes the point at `index`.
    ///
    /// # Errors
    /// - `IndexOutOfBounds` when `index >= points_count()`
    /// - `IllegalState` when fewer than three points remain
    fn delete_point(&mut self, index: usize) -> Result<(), TabulatedError>;

    /// Inserts `point` at the position that keeps x-values sorted.
    ///
    /// # Errors
    /// `InappropriatePoint` when `point.x` is NaN or lies within
    /// [`DUPLICATE_TOLERANCE`] of an existing x-value. The function is left
    /// untouched on failure.
    fn add_point(&mut self, point: FunctionPoint) -> Result<(), TabulatedError>;

    /// Fresh forward iterator over copies of the points, in index order.
    fn iter(&self) -> Box<dyn Iterator<Item = FunctionPoint> + '_>;

    /// Deep copy behind a trait object.
    fn box_clone(&self) -> Box<dyn TabulatedFunction>;

    /// Which storage backs this function.
    fn storage_kind(&self) -> StorageKind;

    /// Order-dependent hash over all points, seeded at 17.
    fn hash_code(&self) -> i32 {
        self.iter().fold(17_i32, |hash, point| {
            hash.wrapping_mul(31).wrapping_add(point.hash_code())
        })
    }

    /// All points, copied into a vector.
    fn points(&self) -> Vec<FunctionPoint> {
        self.iter().collect()
    }

    /// Storage-independent equality: same count and pointwise-equal points.
    fn same_points(&self, other: &dyn TabulatedFunction) -> bool {
        self.points_count() == other.points_count() && self.iter().eq(other.iter())
    }
}

impl Clone for Box<dyn TabulatedFunction> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

impl PartialEq for dyn TabulatedFunction {
    fn eq(&self, other: &Self) -> bool {
        self.same_points(other)
    }
}

impl Hash for dyn TabulatedFunction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Linear interpolation between two samples; hits on either sample return its
/// stored y unchanged.
pub(crate) fn interpolate(left: FunctionPoint, right: FunctionPoint, x: f64) -> f64 {
    if x == left.x {
        return left.y;
    }
    if x == right.x {
        return right.y;
    }
    left.y + (right.y - left.y) * (x - left.x) / (right.x - left.x)
}

/// Evenly spaced grid of `count` x-values from `left` to `right`.
pub(crate) fn uniform_grid(
    left: f64,
    right: f64,
    count: usize,
) -> Result<impl Iterator<Item = f64>, TabulatedError> {
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

    let step = (right - left) / (count - 1) as f64;
    let last = count - 1;
    // Rounding in `i * step` can overshoot, so the last point is `right` itself
    Ok((0..count).map(move |i| if i == last { right } else { left + i as f64 * step }))
}

/// Writes points as `{(x0; y0), (x1; y1), ...}`.
pub(crate) fn write_points<I>(f: &mut fmt::Formatter<'_>, points: I) -> fmt::Result
where
    I: IntoIterator<Item = FunctionPoint>,
{
    write!(f, "{{")?;
    for (i, point) in points.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", point)?;
    }
    write!(f, "}}")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn sample_points() -> Vec<FunctionPoint> {
        vec![
            FunctionPoint::new(0.0, 1.0),
            FunctionPoint::new(1.0, 3.0),
            FunctionPoint::new(4.0, -2.0),
        ]
    }

    #[test]
    fn test_interpolate_hits_samples_exactly() {
        let a = FunctionPoint::new(0.0, 0.1);
        let b = FunctionPoint::new(1.0, 0.3);
        assert_eq!(interpolate(a, b, 0.0), 0.1);
        assert_eq!(interpolate(a, b, 1.0), 0.3);
        assert!((interpolate(a, b, 0.5) - 0.2).abs() < 1e-15);
    }

    #[test]
    fn test_uniform_grid() {
        let grid: Vec<f64> = uniform_grid(0.0, 10.0, 5).unwrap().collect();
        assert_eq!(grid, vec![0.0, 2.5, 5.0, 7.5, 10.0]);

        let grid: Vec<f64> = uniform_grid(-1.3, 2.9, 3).unwrap().collect();
        assert_eq!(grid.first(), Some(&-1.3));
        assert_eq!(grid.last(), Some(&2.9));

        assert!(uniform_grid(1.0, 1.0, 3).is_err());
        assert!(uniform_grid(2.0, 1.0, 3).is_err());
        assert!(uniform_grid(0.0, 1.0, 1).is_err());
        assert!(uniform_grid(f64::NAN, 1.0, 3).is_err());
    }

    #[test]
    fn test_dyn_equality_and_hash_across_storages() {
        let array: Box<dyn TabulatedFunction> =
            Box::new(ArrayTabulatedFunction::from_points(&sample_points()).unwrap());
        let list: Box<dyn TabulatedFunction> =
            Box::new(LinkedListTabulatedFunction::from_points(&sample_points()).unwrap());

        assert!(*array == *list);
        assert_eq!(array.hash_code(), list.hash_code());
        assert_eq!(array.to_string(), list.to_string());

        let mut set: HashSet<i32> = HashSet::new();
        set.insert(array.hash_code());
        set.insert(list.hash_code());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_boxed_clone_is_independent() {
        let original: Box<dyn TabulatedFunction> =
            Box::new(LinkedListTabulatedFunction::from_points(&sample_points()).unwrap());
        let mut copy = original.clone();
        copy.set_point_y(1, 100.0).unwrap();

        assert_eq!(original.point_y(1).unwrap(), 3.0);
        assert_eq!(copy.point_y(1).unwrap(), 100.0);
        assert!(*original != *copy);
    }

    #[test]
    fn test_display_format() {
        let array = ArrayTabulatedFunction::from_points(&sample_points()).unwrap();
        assert_eq!(array.to_string(), "{(0.0; 1.0), (1.0; 3.0), (4.0; -2.0)}");
    }
}
