//! Error types for the accident insights tool

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid Month value {value:?} on row {row}")]
    InvalidMonth { row: usize, value: String },

    #[error("Invalid Year value {value:?} on row {row}")]
    InvalidYear { row: usize, value: String },

    #[error("Unknown selection: {0}")]
    UnknownSelection(String),
}

pub type Result<T> = std::result::Result<T, Error>;
