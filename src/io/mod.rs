//! # Serialization
//!
//! Three stream encodings for tabulated functions, all independent of the
//! storage that produced them:
//!
//! | Encoding | Writer | Reader |
//! |---|---|---|
//! | columnar binary | [`write_columnar`] | [`read_columnar`] |
//! | interleaved binary | [`output_tabulated_function`] | [`input_tabulated_function`] |
//! | text | [`write_tabulated_function`] | [`read_tabulated_function`] |
//!
//! Readers produce array-backed functions; the `_with` variants take a
//! [`StorageKind`](crate::factory::StorageKind). Decoded points go through the
//! regular constructors, so an unordered or undersized stream is rejected.
//!
//! ```rust
//! use std::io::Cursor;
//! use tabulated::LinkedListTabulatedFunction;
//! use tabulated::io::{input_tabulated_function, output_tabulated_function};
//!
//! let f = LinkedListTabulatedFunction::with_values(0.0, 10.0, &[0.0, 10.0]).unwrap();
//! let mut bytes = Vec::new();
//! output_tabulated_function(&f, &mut bytes).unwrap();
//! assert_eq!(bytes.len(), 4 + 2 * 16);
//!
//! let g = input_tabulated_function(&mut Cursor::new(bytes)).unwrap();
//! assert_eq!(g.to_string(), f.to_string());
//! ```

pub mod binary;
pub mod error;
pub mod text;

pub use binary::{
    input_tabulated_function, input_tabulated_function_with, output_tabulated_function,
    read_columnar, read_columnar_with, write_columnar,
};
pub use error::{ErrorContext, Field, Operation, SerializationError};
pub use text::{read_tabulated_function, read_tabulated_function_with, write_tabulated_function};
