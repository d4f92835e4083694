use super::traits::DataFile;
use crate::core::models::contact::ContactMatrix;
use crate::core::models::validation::ValidationError;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactReadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid contact cell '{value}' at row {row}, column {column}")]
    InvalidCell {
        row: usize,
        column: usize,
        value: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Headerless CSV of `0`/`1` or `true`/`false` cells, one matrix row per line.
pub struct ContactCsv;

impl DataFile for ContactCsv {
    type Value = ContactMatrix;
    type Error = ContactReadError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Value, Self::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for (row_index, record) in csv_reader.records().enumerate() {
            let record = record?;
            let row = record
                .iter()
                .enumerate()
                .map(|(col_index, cell)| {
                    parse_cell(cell).ok_or_else(|| ContactReadError::InvalidCell {
                        row: row_index + 1,
                        column: col_index + 1,
                        value: cell.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Ok(ContactMatrix::from_rows(rows)?)
    }
}

fn parse_cell(cell: &str) -> Option<bool> {
    match cell.to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" | "" => Some(false),
        _ => None,
    }
}

pub fn read_contact_matrix(reader: &mut impl BufRead) -> Result<ContactMatrix, ContactReadError> {
    ContactCsv::read_from(reader)
}

pub fn read_contact_matrix_from_path(
    path: impl AsRef<std::path::Path>,
) -> Result<ContactMatrix, ContactReadError> {
    ContactCsv::read_from_path(path)
}

/// Writes `matrix` as `0`/`1` CSV rows.
pub fn write_contact_matrix(matrix: &ContactMatrix, writer: impl Write) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for row in matrix.rows() {
        csv_writer.write_record(row.iter().map(|&cell| if cell { "1" } else { "0" }))?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    fn read(text: &str) -> Result<ContactMatrix, ContactReadError> {
        read_contact_matrix(&mut Cursor::new(text))
    }

    #[test]
    fn reads_binary_and_boolean_cells() {
        let matrix = read("0, 0, 1\nfalse,FALSE,0\n0,0,true\n").unwrap();
        assert_eq!(matrix.size(), 3);
        assert_eq!(matrix.contacts().collect::<Vec<_>>(), vec![(0, 2), (2, 2)]);
    }

    #[test]
    fn empty_file_is_an_empty_matrix() {
        assert!(read("").unwrap().is_empty());
    }

    #[test]
    fn ragged_rows_are_rejected_as_non_square() {
        let err = read("0,1\n1\n").unwrap_err();
        assert!(matches!(
            err,
            ContactReadError::Validation(ValidationError::NonSquareMatrix {
                row: 2,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn unknown_cell_values_name_their_position() {
        let err = read("0,1\n1,maybe\n").unwrap_err();
        match err {
            ContactReadError::InvalidCell { row, column, value } => {
                assert_eq!((row, column), (2, 2));
                assert_eq!(value, "maybe");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn written_matrix_reads_back_identically() {
        let matrix = read("0,1,0\n1,0,0\n0,0,1\n").unwrap();
        let mut file = NamedTempFile::new().unwrap();
        write_contact_matrix(&matrix, file.as_file_mut()).unwrap();
        let reread = read_contact_matrix_from_path(file.path()).unwrap();
        assert_eq!(reread, matrix);
    }
}
