use std::{
    fmt,
    hash::{Hash, Hasher},
    iter::Copied,
    slice,
};

use itertools::Itertools;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    error::TabulatedError, factory::StorageKind, function::Function, point::FunctionPoint,
};

use super::{
    LinkedListTabulatedFunction, TabulatedFunction, interpolate, uniform_grid, validation,
    write_points,
};

/// Tabulated function backed by a contiguous buffer of points.
///
/// # Examples
///
/// ```rust
/// use tabulated::ArrayTabulatedFunction;
/// use tabulated::function::Function;
///
/// let f = ArrayTabulatedFunction::with_values(0.0, 10.0, &[0.0, 5.0, 20.0]).unwrap();
/// assert_eq!(f.value_at(5.0), 5.0);
/// assert_eq!(f.value_at(7.5), 12.5);
/// assert!(f.value_at(10.5).is_nan());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<FunctionPoint>", into = "Vec<FunctionPoint>")]
pub struct ArrayTabulatedFunction {
    points: Vec<FunctionPoint>,
}

impl ArrayTabulatedFunction {
    /// `count` evenly spaced points over `[left, right]`, all with `y = 0`.
    ///
    /// # Errors
    /// `InvalidArgument` when `left >= right` or `count < 2`.
    pub fn new(left: f64, right: f64, count: usize) -> Result<Self, TabulatedError> {
        let points = uniform_grid(left, right, count)?
            .map(|x| FunctionPoint::new(x, 0.0))
            .collect();
        Ok(ArrayTabulatedFunction { points })
    }

    /// Evenly spaced points over `[left, right]` carrying the given values.
    ///
    /// # Errors
    /// `InvalidArgument` when `left >= right` or fewer than two values are given.
    pub fn with_values(left: f64, right: f64, values: &[f64]) -> Result<Self, TabulatedError> {
        let points = uniform_grid(left, right, values.len())?
            .zip(values)
            .map(|(x, &y)| FunctionPoint::new(x, y))
            .collect();
        Ok(ArrayTabulatedFunction { points })
    }

    /// Copies an explicit point sequence.
    ///
    /// # Errors
    /// `InvalidArgument` when fewer than two points are given or the x-values
    /// are not strictly increasing.
    pub fn from_points(points: &[FunctionPoint]) -> Result<Self, TabulatedError> {
        validation::check_points(points)?;
        Ok(ArrayTabulatedFunction {
            points: points.to_vec(),
        })
    }

    /// Iterator over copies of the points.
    pub fn iter(&self) -> Copied<slice::Iter<'_, FunctionPoint>> {
        self.points.iter().copied()
    }

    /// Read-only view of the stored points.
    pub fn as_slice(&self) -> &[FunctionPoint] {
        &self.points
    }

    fn last(&self) -> FunctionPoint {
        self.points[self.points.len() - 1]
    }

    fn neighbours(&self, index: usize) -> (Option<f64>, Option<f64>) {
        let previous = index.checked_sub(1).map(|i| self.points[i].x);
        let next = self.points.get(index + 1).map(|p| p.x);
        (previous, next)
    }
}

impl Function for ArrayTabulatedFunction {
    fn left_border(&self) -> f64 {
        self.points[0].x
    }

    fn right_border(&self) -> f64 {
        self.last().x
    }

    fn value_at(&self, x: f64) -> f64 {
        for (left, right) in self.points.iter().tuple_windows() {
            if x >= left.x && x <= right.x {
                return interpolate(*left, *right, x);
            }
        }

        let last = self.last();
        if x == last.x {
            return last.y;
        }

        f64::NAN
    }
}

impl TabulatedFunction for ArrayTabulatedFunction {
    fn points_count(&self) -> usize {
        self.points.len()
    }

    fn point(&self, index: usize) -> Result<FunctionPoint, TabulatedError> {
        validation::check_index(index, self.points.len())?;
        Ok(self.points[index])
    }

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), TabulatedError> {
        validation::check_index(index, self.points.len())?;
        let (previous, next) = self.neighbours(index);
        validation::check_between(point.x, previous, next)?;
        self.points[index] = point;
        Ok(())
    }

    fn point_x(&self, index: usize) -> Result<f64, TabulatedError> {
        validation::check_index(index, self.points.len())?;
        Ok(self.points[index].x)
    }

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<(), TabulatedError> {
        validation::check_index(index, self.points.len())?;
        let (previous, next) = self.neighbours(index);
        validation::check_between(x, previous, next)?;
        self.points[index].x = x;
        Ok(())
    }

    fn point_y(&self, index: usize) -> Result<f64, TabulatedError> {
        validation::check_index(index, self.points.len())?;
        Ok(self.points[index].y)
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), TabulatedError> {
        validation::check_index(index, self.points.len())?;
        self.points[index].y = y;
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<(), TabulatedError> {
        validation::check_index(index, self.points.len())?;
        validation::check_deletable(self.points.len())?;
        self.points.remove(index);
        Ok(())
    }

    fn add_point(&mut self, point: FunctionPoint) -> Result<(), TabulatedError> {
        let position = self.points.partition_point(|p| p.x < point.x);
        let previous = position.checked_sub(1).map(|i| self.points[i].x);
        let next = self.points.get(position).map(|p| p.x);
        validation::check_insertion(point.x, previous, next)?;

        if self.points.len() == self.points.capacity() {
            self.points.reserve_exact(1);
            trace!(
                "grew point buffer to capacity {} for {} points",
                self.points.capacity(),
                self.points.len() + 1
            );
        }
        self.points.insert(position, point);
        Ok(())
    }

    fn iter(&self) -> Box<dyn Iterator<Item = FunctionPoint> + '_> {
        Box::new(self.points.iter().copied())
    }

    fn box_clone(&self) -> Box<dyn TabulatedFunction> {
        Box::new(self.clone())
    }

    fn storage_kind(&self) -> StorageKind {
        StorageKind::Array
    }
}

impl PartialEq for ArrayTabulatedFunction {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl Eq for ArrayTabulatedFunction {}

impl PartialEq<LinkedListTabulatedFunction> for ArrayTabulatedFunction {
    fn eq(&self, other: &LinkedListTabulatedFunction) -> bool {
        self.same_points(other)
    }
}

impl Hash for ArrayTabulatedFunction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for ArrayTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_points(f, self.iter())
    }
}

impl<'a> IntoIterator for &'a ArrayTabulatedFunction {
    type Item = FunctionPoint;
    type IntoIter = Copied<slice::Iter<'a, FunctionPoint>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<FunctionPoint>> for ArrayTabulatedFunction {
    type Error = TabulatedError;

    fn try_from(points: Vec<FunctionPoint>) -> Result<Self, Self::Error> {
        validation::check_points(&points)?;
        Ok(ArrayTabulatedFunction { points })
    }
}

impl From<ArrayTabulatedFunction> for Vec<FunctionPoint> {
    fn from(function: ArrayTabulatedFunction) -> Self {
        function.points
    }
}
