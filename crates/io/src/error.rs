//! Error types for caeli-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the caeli-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Underlying filesystem error.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path involved in the failed operation.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// CSV parsing or writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Returned when the input file holds no data rows.
    #[error("input file {} contains no data rows", path.display())]
    Empty {
        /// The offending file.
        path: PathBuf,
    },

    /// Returned when a month value is outside 1..=12.
    #[error("invalid month {month} at data row {row} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month value.
        month: u8,
        /// 1-indexed data row.
        row: usize,
    },

    /// Returned when periods repeat or go backwards in time.
    #[error("periods must be strictly increasing: {year}-{month:02} at data row {row}")]
    NonMonotonic {
        /// Year of the offending row.
        year: i32,
        /// Month of the offending row.
        month: u8,
        /// 1-indexed data row.
        row: usize,
    },

    /// Returned when a required column is absent from the header.
    #[error("missing required column '{column}' in {}", path.display())]
    MissingColumn {
        /// The absent column name.
        column: String,
        /// The offending file.
        path: PathBuf,
    },

    /// Returned when output column lengths disagree.
    #[error("column length mismatch: expected {expected} rows, column '{column}' has {got}")]
    ColumnLengthMismatch {
        /// Expected number of rows.
        expected: usize,
        /// The offending column name.
        column: String,
        /// Actual number of rows in that column.
        got: usize,
    },
}
