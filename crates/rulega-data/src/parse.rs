//! Parsers for the line-oriented record formats.
//!
//! Both formats put one record per line and ignore blank lines. The first
//! record fixes the condition length; every later record must match it.
//! Line numbers in [`ParseError`] are 1-based.

use crate::{BinaryRecord, FloatRecord, Record};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    #[display("line {line}: expected a condition followed by a label")]
    MissingField { line: usize },
    #[display("line {line}: unexpected trailing field '{found}'")]
    TrailingField { line: usize, found: String },
    #[display("line {line}: invalid condition bit '{found}'")]
    InvalidBit { line: usize, found: char },
    #[display("line {line}: invalid condition value '{found}'")]
    InvalidValue { line: usize, found: String },
    #[display("line {line}: invalid label '{found}', expected 0 or 1")]
    InvalidLabel { line: usize, found: String },
    #[display("line {line}: expected {expected} condition values, found {found}")]
    DimensionMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[display("no records found")]
    Empty,
}

/// Parses binary records in the `<bits> <label>` format.
///
/// # Examples
///
/// ```
/// use rulega_data::parse::parse_binary_records;
///
/// let records = parse_binary_records("101 1\n010 0\n").unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].condition(), &[true, false, true]);
/// assert!(records[0].output());
/// ```
pub fn parse_binary_records(input: &str) -> Result<Vec<BinaryRecord>, ParseError> {
    parse_lines(input, |line, fields| {
        let [bits, label] = fields else {
            return Err(field_count_error(line, fields, 2));
        };
        let condition = bits
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(ParseError::InvalidBit { line, found }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Record::new(condition, parse_label(line, label)?))
    })
}

/// Parses float records: whitespace-separated condition values, then the label.
pub fn parse_float_records(input: &str) -> Result<Vec<FloatRecord>, ParseError> {
    parse_lines(input, |line, fields| {
        let Some((label, values)) = fields.split_last() else {
            return Err(ParseError::MissingField { line });
        };
        if values.is_empty() {
            return Err(ParseError::MissingField { line });
        }
        let condition = values
            .iter()
            .map(|value| {
                value.parse::<f32>().map_err(|_| ParseError::InvalidValue {
                    line,
                    found: (*value).to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Record::new(condition, parse_label(line, label)?))
    })
}

fn parse_lines<T, F>(input: &str, mut parse_record: F) -> Result<Vec<Record<T>>, ParseError>
where
    F: FnMut(usize, &[&str]) -> Result<Record<T>, ParseError>,
{
    let mut records: Vec<Record<T>> = vec![];
    for (index, text) in input.lines().enumerate() {
        let line = index + 1;
        let fields = text.split_whitespace().collect::<Vec<_>>();
        if fields.is_empty() {
            continue;
        }
        let record = parse_record(line, &fields)?;
        if let Some(first) = records.first()
            && first.dimension() != record.dimension()
        {
            return Err(ParseError::DimensionMismatch {
                line,
                expected: first.dimension(),
                found: record.dimension(),
            });
        }
        records.push(record);
    }
    if records.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(records)
}

fn parse_label(line: usize, label: &str) -> Result<bool, ParseError> {
    match label {
        "0" => Ok(false),
        "1" => Ok(true),
        found => Err(ParseError::InvalidLabel {
            line,
            found: found.to_owned(),
        }),
    }
}

fn field_count_error(line: usize, fields: &[&str], expected: usize) -> ParseError {
    match fields.get(expected) {
        Some(found) => ParseError::TrailingField {
            line,
            found: (*found).to_owned(),
        },
        None => ParseError::MissingField { line },
    }
}
