//! Whitespace-separated text encoding.
//!
//! The writer emits `count x0 y0 x1 y1 ...` on a single line, joined by single
//! spaces. The reader accepts any whitespace between tokens and ignores
//! whatever follows the last point.

use std::io::{Read, Write};

use nom::{
    IResult, Parser,
    bytes::complete::take_while1,
    character::complete::{digit1, multispace0},
    combinator::{all_consuming, map_res},
    number::complete::double,
    sequence::preceded,
};

use crate::{factory::StorageKind, point::FunctionPoint, tabulated::TabulatedFunction};

use super::error::{ErrorContext, Field, Operation, SerializationError};

/// Writes `function` as text.
///
/// ```rust
/// use tabulated::ArrayTabulatedFunction;
/// use tabulated::io::text::write_tabulated_function;
///
/// let f = ArrayTabulatedFunction::with_values(0.0, 1.0, &[2.0, 3.5]).unwrap();
/// let mut out = Vec::new();
/// write_tabulated_function(&f, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "2 0 2 1 3.5");
/// ```
pub fn write_tabulated_function<F, W>(
    function: &F,
    writer: &mut W,
) -> Result<(), SerializationError>
where
    F: TabulatedFunction + ?Sized,
    W: Write + ?Sized,
{
    write!(writer, "{}", function.points_count())
        .map_err(|e| SerializationError::io(ErrorContext::count(Operation::Write), e))?;
    for (i, point) in function.iter().enumerate() {
        write!(writer, " {} {}", point.x, point.y).map_err(|e| {
            SerializationError::io(ErrorContext::new(Operation::Write).with_index(i), e)
        })?;
    }
    writer
        .flush()
        .map_err(|e| SerializationError::io(ErrorContext::new(Operation::Write), e))
}

/// Reads text into an array-backed function.
pub fn read_tabulated_function<R>(
    reader: &mut R,
) -> Result<Box<dyn TabulatedFunction>, SerializationError>
where
    R: Read + ?Sized,
{
    read_tabulated_function_with(StorageKind::default(), reader)
}

/// Reads text into the storage picked by `kind`.
pub fn read_tabulated_function_with<R>(
    kind: StorageKind,
    reader: &mut R,
) -> Result<Box<dyn TabulatedFunction>, SerializationError>
where
    R: Read + ?Sized,
{
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|e| SerializationError::io(ErrorContext::new(Operation::Read), e))?;

    let points = parse_points(&input)?;
    Ok(kind.factory().create_from_points(&points)?)
}

fn parse_points(input: &str) -> Result<Vec<FunctionPoint>, SerializationError> {
    let mut tokens = Tokens { rest: input };

    let context = ErrorContext::count(Operation::Read);
    let raw = tokens.next(context)?;
    let count = parse_count(raw).ok_or_else(|| {
        SerializationError::format(
            context,
            format!("expected a non-negative integer, found '{}'", raw),
        )
    })?;

    let mut points = Vec::new();
    for i in 0..count {
        let x = tokens.number(ErrorContext::point(Operation::Read, i, Field::X))?;
        let y = tokens.number(ErrorContext::point(Operation::Read, i, Field::Y))?;
        points.push(FunctionPoint::new(x, y));
    }
    Ok(points)
}

struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    fn next(&mut self, context: ErrorContext) -> Result<&'a str, SerializationError> {
        match token(self.rest) {
            Ok((rest, token)) => {
                self.rest = rest;
                Ok(token)
            }
            Err(_) => Err(SerializationError::format(context, "unexpected end of input")),
        }
    }

    fn number(&mut self, context: ErrorContext) -> Result<f64, SerializationError> {
        let raw = self.next(context)?;
        parse_number(raw).ok_or_else(|| {
            SerializationError::format(context, format!("expected a number, found '{}'", raw))
        })
    }
}

/// Next run of non-whitespace characters.
fn token(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, take_while1(|c: char| !c.is_whitespace())).parse(input)
}

fn parse_number(token: &str) -> Option<f64> {
    let result: IResult<&str, f64> = all_consuming(double).parse(token);
    result.ok().map(|(_, value)| value)
}

fn parse_count(token: &str) -> Option<usize> {
    let result: IResult<&str, usize> =
        all_consuming(map_res(digit1, str::parse::<usize>)).parse(token);
    result.ok().map(|(_, value)| value)
}
