//! Error handling for the sort utility

use std::io;
use thiserror::Error;

/// Custom error type for sort operations
#[derive(Error, Debug)]
pub enum SortError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// More than one of -n / -M / -h was requested.
    #[error("conflicting sort options")]
    ConflictingModes,

    /// -k was given with a field index below 1.
    #[error("invalid number of field: {field}")]
    InvalidField { field: usize },

    /// Check mode (-c) found the input not in sorted order.
    #[error("wrong order")]
    NotSorted,
}

impl SortError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SortError::Io(_) => crate::SORT_FAILURE,
            SortError::NotSorted => crate::EXIT_FAILURE,
            _ => crate::EXIT_FAILURE,
        }
    }

    /// Create an invalid field error
    pub fn invalid_field(field: usize) -> Self {
        SortError::InvalidField { field }
    }
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;
