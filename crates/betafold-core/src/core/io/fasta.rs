use super::traits::DataFile;
use crate::core::models::sequence::Sequence;
use std::io::{self, BufRead};
use thiserror::Error;

/// Name given to sequences that arrive without one.
pub const DEFAULT_PROTEIN_NAME: &str = "Untitled Protein";

#[derive(Debug, Error)]
pub enum SequenceReadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// One named sequence of a multi-record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub name: String,
    pub sequence: Sequence,
}

/// FASTA-like text split into records at header lines.
///
/// Text before the first header forms a record named after the default protein name, but only
/// if it holds residues. A header with no name also falls back to the default name.
pub struct FastaFile;

impl DataFile for FastaFile {
    type Value = Vec<SequenceRecord>;
    type Error = SequenceReadError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Value, Self::Error> {
        let mut records = Vec::new();
        let mut name: Option<String> = None;
        let mut body = String::new();

        for line in reader.lines() {
            let line = line?;
            if let Some(header) = line.trim_start().strip_prefix('>') {
                flush(&mut records, name.take(), &body);
                body.clear();
                name = Some(header.split_whitespace().next().unwrap_or_default().to_string());
            } else {
                body.push_str(&line);
                body.push('\n');
            }
        }
        flush(&mut records, name, &body);
        Ok(records)
    }
}

fn flush(records: &mut Vec<SequenceRecord>, name: Option<String>, body: &str) {
    let sequence = Sequence::clean(body);
    if name.is_none() && sequence.is_empty() {
        return;
    }
    let name = name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| DEFAULT_PROTEIN_NAME.to_string());
    records.push(SequenceRecord { name, sequence });
}

/// Reads the whole input as one cleaned sequence, headers dropped.
pub fn read_sequence(reader: &mut impl BufRead) -> Result<Sequence, SequenceReadError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    Ok(Sequence::clean(&raw))
}

pub fn read_records(reader: &mut impl BufRead) -> Result<Vec<SequenceRecord>, SequenceReadError> {
    FastaFile::read_from(reader)
}

pub fn read_records_from_path(
    path: impl AsRef<std::path::Path>,
) -> Result<Vec<SequenceRecord>, SequenceReadError> {
    FastaFile::read_from_path(path)
}
