use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Common reading interface of the text formats BetaFold consumes.
pub trait DataFile {
    /// The value parsed from one file.
    type Value;

    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Parses a value from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the content is malformed.
    fn read_from(reader: &mut impl BufRead) -> Result<Self::Value, Self::Error>;

    /// Opens `path` and parses its content.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self::Value, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
