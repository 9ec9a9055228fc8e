//! # Factories
//!
//! Three ways to build a tabulated function without naming its concrete type:
//!
//! - **injected**: pass a `&dyn TabulatedFunctionFactory` around
//!   ([`tabulate_using`])
//! - **global**: the process-wide factory behind [`set_tabulated_function_factory`],
//!   used by the unqualified `create_tabulated_function_*` helpers and
//!   [`tabulate`]
//! - **type-directed**: pick a [`StorageKind`], parsed from a string if
//!   needed ([`tabulate_with`], [`StorageKind::create_from_points`])
//!
//! ```rust
//! use std::f64::consts::PI;
//! use tabulated::factory::{StorageKind, tabulate_with};
//! use tabulated::function::{Function, basic::Cos};
//! use tabulated::tabulated::TabulatedFunction;
//!
//! let kind: StorageKind = "linked-list".parse().unwrap();
//! let cos = tabulate_with(kind, &Cos, 0.0, PI, 3).unwrap();
//! assert_eq!(cos.points_count(), 3);
//! assert_eq!(cos.value_at(PI), -1.0);
//! ```

pub mod kind;
pub mod registry;
pub mod tabulate;

use std::fmt;

use crate::{
    error::TabulatedError,
    point::FunctionPoint,
    tabulated::{ArrayTabulatedFunction, LinkedListTabulatedFunction, TabulatedFunction},
};

pub use kind::StorageKind;
pub use registry::{
    create_tabulated_function_from_points, create_tabulated_function_with_count,
    create_tabulated_function_with_values, current_tabulated_function_factory,
    reset_tabulated_function_factory, set_tabulated_function_factory,
};
pub use tabulate::{tabulate, tabulate_using, tabulate_with};

/// Builds tabulated functions of one storage kind behind a trait object.
pub trait TabulatedFunctionFactory: fmt::Debug + Send + Sync {
    /// `count` evenly spaced zero-valued points over `[left, right]`.
    fn create_with_count(
        &self,
        left: f64,
        right: f64,
        count: usize,
    ) -> Result<Box<dyn TabulatedFunction>, TabulatedError>;

    /// Evenly spaced points over `[left, right]` carrying `values`.
    fn create_with_values(
        &self,
        left: f64,
        right: f64,
        values: &[f64],
    ) -> Result<Box<dyn TabulatedFunction>, TabulatedError>;

    /// Copies an explicit, strictly increasing point sequence.
    fn create_from_points(
        &self,
        points: &[FunctionPoint],
    ) -> Result<Box<dyn TabulatedFunction>, TabulatedError>;

    /// Storage produced by this factory.
    fn kind(&self) -> StorageKind;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayTabulatedFunctionFactory;

#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedListTabulatedFunctionFactory;

impl TabulatedFunctionFactory for ArrayTabulatedFunctionFactory {
    fn create_with_count(
        &self,
        left: f64,
        right: f64,
        count: usize,
    ) -> Result<Box<dyn TabulatedFunction>, TabulatedError> {
        Ok(Box::new(ArrayTabulatedFunction::new(left, right, count)?))
    }

    fn create_with_values(
        &self,
        left: f64,
        right: f64,
        values: &[f64],
    ) -> Result<Box<dyn TabulatedFunction>, TabulatedError> {
        Ok(Box::new(ArrayTabulatedFunction::with_values(
            left, right, values,
        )?))
    }

    fn create_from_points(
        &self,
        points: &[FunctionPoint],
    ) -> Result<Box<dyn TabulatedFunction>, TabulatedError> {
        Ok(Box::new(ArrayTabulatedFunction::from_points(points)?))
    }

    fn kind(&self) -> StorageKind {
        StorageKind::Array
    }
}

impl TabulatedFunctionFactory for LinkedListTabulatedFunctionFactory {
    fn create_with_count(
        &self,
        left: f64,
        right: f64,
        count: usize,
    ) -> Result<Box<dyn TabulatedFunction>, TabulatedError> {
        Ok(Box::new(LinkedListTabulatedFunction::new(
            left, right, count,
        )?))
    }

    fn create_with_values(
        &self,
        left: f64,
        right: f64,
        values: &[f64],
    ) -> Result<Box<dyn TabulatedFunction>, TabulatedError> {
        Ok(Box::new(LinkedListTabulatedFunction::with_values(
            left, right, values,
        )?))
    }

    fn create_from_points(
        &self,
        points: &[FunctionPoint],
    ) -> Result<Box<dyn TabulatedFunction>, TabulatedError> {
        Ok(Box::new(LinkedListTabulatedFunction::from_points(points)?))
    }

    fn kind(&self) -> StorageKind {
        StorageKind::LinkedList
    }
}
