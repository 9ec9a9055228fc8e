use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::TabulatedError, point::FunctionPoint, tabulated::TabulatedFunction};

use super::{
    ArrayTabulatedFunctionFactory, LinkedListTabulatedFunctionFactory, TabulatedFunctionFactory,
};

static ARRAY_FACTORY: ArrayTabulatedFunctionFactory = ArrayTabulatedFunctionFactory;
static LINKED_LIST_FACTORY: LinkedListTabulatedFunctionFactory =
    LinkedListTabulatedFunctionFactory;

/// The closed set of storages a tabulated function can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    #[default]
    Array,
    LinkedList,
}

impl StorageKind {
    pub const ALL: [StorageKind; 2] = [StorageKind::Array, StorageKind::LinkedList];

    /// The stateless factory for this storage.
    pub fn factory(self) -> &'static dyn TabulatedFunctionFactory {
        match self {
            StorageKind::Array => &ARRAY_FACTORY,
            StorageKind::LinkedList => &LINKED_LIST_FACTORY,
        }
    }

    /// # Errors
    /// `Configuration` wrapping the construction failure.
    pub fn create_with_count(
        self,
        left: f64,
        right: f64,
        count: usize,
    ) -> Result<Box<dyn TabulatedFunction>, TabulatedError> {
        self.factory()
            .create_with_count(left, right, count)
            .map_err(|err| self.configuration_error(err))
    }

    /// # Errors
    /// `Configuration` wrapping the construction failure.
    pub fn create_with_values(
        self,
        left: f64,
        right: f64,
        values: &[f64],
    ) -> Result<Box<dyn TabulatedFunction>, TabulatedError> {
        self.factory()
            .create_with_values(left, right, values)
            .map_err(|err| self.configuration_error(err))
    }

    /// # Errors
    /// `Configuration` wrapping the construction failure.
    pub fn create_from_points(
        self,
        points: &[FunctionPoint],
    ) -> Result<Box<dyn TabulatedFunction>, TabulatedError> {
        self.factory()
            .create_from_points(points)
            .map_err(|err| self.configuration_error(err))
    }

    fn configuration_error(self, err: TabulatedError) -> TabulatedError {
        TabulatedError::Configuration {
            kind: self.to_string(),
            message: format!("could not construct a {} tabulated function", self),
            source: Some(Box::new(err)),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::Array => write!(f, "array"),
            StorageKind::LinkedList => write!(f, "linked_list"),
        }
    }
}

impl FromStr for StorageKind {
    type Err = TabulatedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "array" => Ok(StorageKind::Array),
            "linked_list" | "linked-list" | "linkedlist" => Ok(StorageKind::LinkedList),
            _ => Err(TabulatedError::Configuration {
                kind: s.to_string(),
                message: "unknown storage kind, expected 'array' or 'linked_list'".to_string(),
                source: None,
            }),
        }
    }
}
