//! Big-endian binary encodings.
//!
//! Both layouts start with the point count as an `i32`:
//!
//! - **columnar**: `count`, then all x-values, then all y-values
//! - **interleaved**: `count`, then `x y` for each point
//!
//! Every value is written in big-endian byte order.

use std::io::{Read, Write};

use crate::{
    factory::StorageKind,
    point::FunctionPoint,
    tabulated::TabulatedFunction,
};

use super::error::{ErrorContext, Field, Operation, SerializationError};

// Upper bound on the buffer reserved up front from an untrusted count
const MAX_PREALLOCATED_POINTS: usize = 4096;

/// Writes `function` in the columnar layout.
pub fn write_columnar<F, W>(function: &F, writer: &mut W) -> Result<(), SerializationError>
where
    F: TabulatedFunction + ?Sized,
    W: Write + ?Sized,
{
    write_count(function.points_count(), writer)?;
    for (i, point) in function.iter().enumerate() {
        write_f64(writer, point.x, ErrorContext::point(Operation::Write, i, Field::X))?;
    }
    for (i, point) in function.iter().enumerate() {
        write_f64(writer, point.y, ErrorContext::point(Operation::Write, i, Field::Y))?;
    }
    writer
        .flush()
        .map_err(|e| SerializationError::io(ErrorContext::new(Operation::Write), e))
}

/// Reads the columnar layout into an array-backed function.
pub fn read_columnar<R>(reader: &mut R) -> Result<Box<dyn TabulatedFunction>, SerializationError>
where
    R: Read + ?Sized,
{
    read_columnar_with(StorageKind::default(), reader)
}

/// Reads the columnar layout into the storage picked by `kind`.
pub fn read_columnar_with<R>(
    kind: StorageKind,
    reader: &mut R,
) -> Result<Box<dyn TabulatedFunction>, SerializationError>
where
    R: Read + ?Sized,
{
    let count = read_count(reader)?;
    let mut xs = Vec::with_capacity(count.min(MAX_PREALLOCATED_POINTS));
    for i in 0..count {
        xs.push(read_f64(reader, ErrorContext::point(Operation::Read, i, Field::X))?);
    }
    let mut points = Vec::with_capacity(xs.len());
    for (i, x) in xs.into_iter().enumerate() {
        let y = read_f64(reader, ErrorContext::point(Operation::Read, i, Field::Y))?;
        points.push(FunctionPoint::new(x, y));
    }
    Ok(kind.factory().create_from_points(&points)?)
}

/// Writes `function` in the interleaved layout.
pub fn output_tabulated_function<F, W>(
    function: &F,
    writer: &mut W,
) -> Result<(), SerializationError>
where
    F: TabulatedFunction + ?Sized,
    W: Write + ?Sized,
{
    write_count(function.points_count(), writer)?;
    for (i, point) in function.iter().enumerate() {
        write_f64(writer, point.x, ErrorContext::point(Operation::Write, i, Field::X))?;
        write_f64(writer, point.y, ErrorContext::point(Operation::Write, i, Field::Y))?;
    }
    writer
        .flush()
        .map_err(|e| SerializationError::io(ErrorContext::new(Operation::Write), e))
}

/// Reads the interleaved layout into an array-backed function.
pub fn input_tabulated_function<R>(
    reader: &mut R,
) -> Result<Box<dyn TabulatedFunction>, SerializationError>
where
    R: Read + ?Sized,
{
    input_tabulated_function_with(StorageKind::default(), reader)
}

/// Reads the interleaved layout into the storage picked by `kind`.
pub fn input_tabulated_function_with<R>(
    kind: StorageKind,
    reader: &mut R,
) -> Result<Box<dyn TabulatedFunction>, SerializationError>
where
    R: Read + ?Sized,
{
    let count = read_count(reader)?;
    let mut points = Vec::with_capacity(count.min(MAX_PREALLOCATED_POINTS));
    for i in 0..count {
        let x = read_f64(reader, ErrorContext::point(Operation::Read, i, Field::X))?;
        let y = read_f64(reader, ErrorContext::point(Operation::Read, i, Field::Y))?;
        points.push(FunctionPoint::new(x, y));
    }
    Ok(kind.factory().create_from_points(&points)?)
}

fn write_count<W>(count: usize, writer: &mut W) -> Result<(), SerializationError>
where
    W: Write + ?Sized,
{
    let context = ErrorContext::count(Operation::Write);
    let count = i32::try_from(count).map_err(|_| {
        SerializationError::format(context, format!("{} points do not fit in an i32", count))
    })?;
    writer
        .write_all(&count.to_be_bytes())
        .map_err(|e| SerializationError::io(context, e))
}

fn write_f64<W>(writer: &mut W, value: f64, context: ErrorContext) -> Result<(), SerializationError>
where
    W: Write + ?Sized,
{
    writer
        .write_all(&value.to_be_bytes())
        .map_err(|e| SerializationError::io(context, e))
}

fn read_count<R>(reader: &mut R) -> Result<usize, SerializationError>
where
    R: Read + ?Sized,
{
    let context = ErrorContext::count(Operation::Read);
    let mut buf = [0u8; 4];
    reader
        .read_exact(&mut buf)
        .map_err(|e| SerializationError::io(context, e))?;
    let count = i32::from_be_bytes(buf);
    usize::try_from(count)
        .map_err(|_| SerializationError::format(context, format!("negative point count {}", count)))
}

fn read_f64<R>(reader: &mut R, context: ErrorContext) -> Result<f64, SerializationError>
where
    R: Read + ?Sized,
{
    let mut buf = [0u8; 8];
    reader
        .read_exact(&mut buf)
        .map_err(|e| SerializationError::io(context, e))?;
    Ok(f64::from_be_bytes(buf))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::error::TabulatedError;
    use crate::tabulated::{ArrayTabulatedFunction, LinkedListTabulatedFunction};

    fn two_points() -> ArrayTabulatedFunction {
        ArrayTabulatedFunction::with_values(0.0, 10.0, &[0.0, 10.0]).unwrap()
    }

    #[test]
    fn test_interleaved_layout() {
        let mut bytes = Vec::new();
        output_tabulated_function(&two_points(), &mut bytes).unwrap();

        let mut expected = Vec::new();
        expected.extend_from_slice(&2i32.to_be_bytes());
        for v in [0.0f64, 0.0, 10.0, 10.0] {
            expected.extend_from_slice(&v.to_be_bytes());
        }
        assert_eq!(bytes, expected);
        assert_eq!(&bytes[..4], &[0, 0, 0, 2]);
    }

    #[test]
    fn test_columnar_layout() {
        let f = ArrayTabulatedFunction::with_values(0.0, 1.0, &[5.0, 6.0]).unwrap();
        let mut bytes = Vec::new();
        write_columnar(&f, &mut bytes).unwrap();

        let values: Vec<f64> = bytes[4..]
            .chunks_exact(8)
            .map(|chunk| f64::from_be_bytes(chunk.try_into().unwrap()))
            .collect();
        assert_eq!(values, vec![0.0, 1.0, 5.0, 6.0]);
    }

    #[test]
    fn test_read_into_requested_storage() {
        let mut bytes = Vec::new();
        output_tabulated_function(&two_points(), &mut bytes).unwrap();

        let f = input_tabulated_function_with(StorageKind::LinkedList, &mut Cursor::new(&bytes))
            .unwrap();
        assert_eq!(f.storage_kind(), StorageKind::LinkedList);
        assert!(f.same_points(&two_points()));
    }

    #[test]
    fn test_storages_encode_identically() {
        let array = two_points();
        let list = LinkedListTabulatedFunction::from_points(&array.points()).unwrap();

        let (mut a, mut b) = (Vec::new(), Vec::new());
        write_columnar(&array, &mut a).unwrap();
        write_columnar(&list, &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_truncated_input_reports_position() {
        let mut bytes = Vec::new();
        output_tabulated_function(&two_points(), &mut bytes).unwrap();
        bytes.truncate(4 + 8 * 3);

        let err = input_tabulated_function(&mut Cursor::new(&bytes)).unwrap_err();
        let context = err.context().unwrap();
        assert_eq!(context.index, Some(1));
        assert_eq!(context.field, Some(Field::Y));
        assert!(matches!(err, SerializationError::Io { .. }));
    }

    #[test]
    fn test_negative_count() {
        let bytes = (-1i32).to_be_bytes();
        let err = read_columnar(&mut Cursor::new(&bytes)).unwrap_err();
        assert!(matches!(err, SerializationError::Format { .. }));
    }

    #[test]
    fn test_invalid_points_are_construction_errors() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&2i32.to_be_bytes());
        for v in [1.0f64, 0.0, 0.0, 0.0] {
            bytes.extend_from_slice(&v.to_be_bytes());
        }
        let err = input_tabulated_function(&mut Cursor::new(&bytes)).unwrap_err();
        assert!(matches!(
            err,
            SerializationError::Construction(TabulatedError::InvalidArgument(_))
        ));
    }
}
