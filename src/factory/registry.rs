//! Process-wide default factory.
//!
//! Starts out as the array factory. Replacing it is a plain store: callers
//! that need isolation should inject a factory instead.

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use log::debug;

use crate::{error::TabulatedError, point::FunctionPoint, tabulated::TabulatedFunction};

use super::{ArrayTabulatedFunctionFactory, TabulatedFunctionFactory};

static CURRENT_FACTORY: LazyLock<RwLock<Arc<dyn TabulatedFunctionFactory>>> =
    LazyLock::new(|| RwLock::new(Arc::new(ArrayTabulatedFunctionFactory)));

/// Replaces the global factory used by the unqualified constructors.
pub fn set_tabulated_function_factory(factory: Arc<dyn TabulatedFunctionFactory>) {
    debug!("switching default tabulated function factory to {:?}", factory);
    let mut current = CURRENT_FACTORY
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *current = factory;
}

/// Restores the array factory.
pub fn reset_tabulated_function_factory() {
    set_tabulated_function_factory(Arc::new(ArrayTabulatedFunctionFactory));
}

pub fn current_tabulated_function_factory() -> Arc<dyn TabulatedFunctionFactory> {
    CURRENT_FACTORY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

pub fn create_tabulated_function_with_count(
    left: f64,
    right: f64,
    count: usize,
) -> Result<Box<dyn TabulatedFunction>, TabulatedError> {
    current_tabulated_function_factory().create_with_count(left, right, count)
}

pub fn create_tabulated_function_with_values(
    left: f64,
    right: f64,
    values: &[f64],
) -> Result<Box<dyn TabulatedFunction>, TabulatedError> {
    current_tabulated_function_factory().create_with_values(left, right, values)
}

pub fn create_tabulated_function_from_points(
    points: &[FunctionPoint],
) -> Result<Box<dyn TabulatedFunction>, TabulatedError> {
    current_tabulated_function_factory().create_from_points(points)
}
