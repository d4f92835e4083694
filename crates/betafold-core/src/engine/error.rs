use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::contacts::ContactReadError;
use crate::core::io::fasta::SequenceReadError;
use crate::core::models::validation::ValidationError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Validation failed: {source}")]
    Validation {
        #[from]
        source: ValidationError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Failed to read sequence input: {source}")]
    SequenceRead {
        #[from]
        source: SequenceReadError,
    },

    #[error("Failed to read contact matrix: {source}")]
    ContactRead {
        #[from]
        source: ContactReadError,
    },
}
