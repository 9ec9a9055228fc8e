//! # tabulated
//!
//! Real functions of one variable known at a finite set of samples, with two
//! interchangeable storages, factories, trapezoid integration and stream
//! encodings.
//!
//! ```rust
//! use tabulated::{ArrayTabulatedFunction, FunctionPoint, StorageKind};
//! use tabulated::function::Function;
//! use tabulated::tabulated::TabulatedFunction;
//!
//! let mut f = ArrayTabulatedFunction::with_values(0.0, 2.0, &[1.0, 3.0, 2.0]).unwrap();
//! f.add_point(FunctionPoint::new(0.5, 0.0)).unwrap();
//! assert_eq!(f.points_count(), 4);
//! assert_eq!(f.value_at(0.25), 0.5);
//!
//! let list = StorageKind::LinkedList.create_from_points(&f.points()).unwrap();
//! assert!(list.same_points(&f));
//! ```

pub mod error;
pub mod factory;
pub mod function;
pub mod integration;
pub mod io;
pub mod point;
pub mod tabulated;
#[cfg(feature = "threads")]
pub mod threads;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use crate::error::TabulatedError;
pub use crate::factory::{StorageKind, TabulatedFunctionFactory};
pub use crate::function::Function;
pub use crate::io::SerializationError;
pub use crate::point::FunctionPoint;
pub use crate::tabulated::{
    ArrayTabulatedFunction, LinkedListTabulatedFunction, TabulatedFunction,
};
