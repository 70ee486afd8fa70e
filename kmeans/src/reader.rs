//! Loading of comma-separated vectors into a `VectorTable`

use std::{io::Read, str::FromStr};

use csv::{ReaderBuilder, Trim};
use num_traits::Float;

use crate::{error::{KMeansError, Result}, table::VectorTable};

/// Read one vector per line into a table
///
/// # Expected format
/// Comma-separated numbers, no header, the same count on every line:
/// ```text
/// 1.5,2.0,-3
/// 0.25,4,1e3
/// ```
/// The dimension is taken from the first record. Blank lines, including lines
/// holding only whitespace or only empty fields, are skipped and whitespace
/// around fields is ignored.
///
/// # Errors
/// * `EmptyInput` if there is no record at all
/// * `DimensionMismatch` if a record's arity differs from the first one
/// * `InvalidNumber` if a field does not parse
/// * `Csv` if the underlying reader fails
pub fn read_vectors<T, R>(input: R) -> Result<VectorTable<T>>
where
    T: Float + FromStr,
    R: Read
{
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let mut table: Option<VectorTable<T>> = None;
    let mut row: Vec<T> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let table = table.get_or_insert_with(|| VectorTable::new(record.len()));
        if record.len() != table.dimension() {
            return Err(KMeansError::DimensionMismatch { line: line, expected: table.dimension(), got: record.len() });
        }

        row.clear();
        for (column, field) in record.iter().enumerate() {
            let value = field.parse::<T>().map_err(|_| KMeansError::InvalidNumber {
                line: line,
                column: column + 1,
                value: field.to_string(),
            })?;
            row.push(value);
        }
        table.push(&row);
    }

    table.ok_or(KMeansError::EmptyInput)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_and_infers_dimension() {
        let table: VectorTable<f64> = read_vectors("1.5,2,-3\n0.25, 4 ,1e3\n".as_bytes()).unwrap();

        assert_eq!(table.dimension(), 3);
        assert_eq!(table.len(), 2);
        assert_eq!(table.row(0), &[1.5, 2.0, -3.0]);
        assert_eq!(table.row(1), &[0.25, 4.0, 1000.0]);
        assert_eq!(table.assignment(0), None);
    }

    #[test]
    fn skips_blank_lines_and_missing_trailing_newline() {
        let table: VectorTable<f32> = read_vectors("1\n\n2\n3".as_bytes()).unwrap();
        assert_eq!(table.rows().collect::<Vec<_>>(), vec![&[1.0f32][..], &[2.0][..], &[3.0][..]]);
    }

    #[test]
    fn skips_whitespace_only_lines() {
        let table: VectorTable<f64> = read_vectors("1\n \n\t\n2\n".as_bytes()).unwrap();
        assert_eq!(table.rows().collect::<Vec<_>>(), vec![&[1.0][..], &[2.0][..]]);

        let table: VectorTable<f64> = read_vectors("1,2\n , \n3,4\n".as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn whitespace_before_first_record_does_not_fix_dimension() {
        let table: VectorTable<f64> = read_vectors("  \n1,2\n".as_bytes()).unwrap();
        assert_eq!(table.dimension(), 2);
        assert!(matches!(read_vectors::<f64, _>(" \n\t\n".as_bytes()), Err(KMeansError::EmptyInput)));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = read_vectors::<f64, _>("1,2\n3,4\n5\n".as_bytes()).unwrap_err();
        assert!(matches!(err, KMeansError::DimensionMismatch { line: 3, expected: 2, got: 1 }));
    }

    #[test]
    fn rejects_non_numeric_fields() {
        let err = read_vectors::<f64, _>("1,2\n3,abc\n".as_bytes()).unwrap_err();
        match err {
            KMeansError::InvalidNumber { line, column, value } => {
                assert_eq!((line, column, value.as_str()), (2, 2, "abc"));
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(read_vectors::<f64, _>("".as_bytes()), Err(KMeansError::EmptyInput)));
        assert!(matches!(read_vectors::<f64, _>("\n\n".as_bytes()), Err(KMeansError::EmptyInput)));
    }
}
