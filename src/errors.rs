//! Unified application error type.
//! All modules (core, cli, ui, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Data files
    // ---------------------------
    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("No data file for {city}: {}", path.display())]
    MissingDataFile { city: String, path: PathBuf },

    #[error("Column '{column}' is missing in {}", path.display())]
    MissingColumn { column: String, path: PathBuf },

    #[error("Invalid timestamp at row {row}: {value}")]
    InvalidTimestamp { row: usize, value: String },

    #[error("Invalid number in column '{column}' at row {row}: {value}")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Interactive session
    // ---------------------------
    /// The user typed the `end` sentinel.
    #[error("Program ended by user")]
    Aborted,

    #[error("Input stream closed")]
    InputClosed,

    #[error("Too many invalid answers ({0})")]
    TooManyAttempts(u32),
}

impl AppError {
    /// True for the ways a user leaves the program on purpose.
    pub fn is_user_exit(&self) -> bool {
        matches!(self, AppError::Aborted | AppError::InputClosed)
    }
}

pub type AppResult<T> = Result<T, AppError>;
