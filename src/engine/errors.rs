use std::io;
use thiserror::Error;
use tracing::{debug, error};

/// Errors that can occur while opening a table or scanning it.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Row index {row} out of range for table with {row_count} rows")]
    InvalidRowIndex { row: u64, row_count: u64 },

    #[error("Column read error: {0}")]
    ColRead(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ScanError {
    pub fn log_error(&self) {
        match self {
            ScanError::SourceUnavailable(e) => {
                error!("Source unavailable: {}", e);
                debug!("Source unavailable error details: {}", e);
            }
            ScanError::ColumnNotFound(e) => {
                error!("Column not found: {}", e);
                debug!("Column binding error details: {}", e);
            }
            ScanError::InvalidRowIndex { row, row_count } => {
                error!("Row index {} out of range", row);
                debug!("Row index {} requested, table has {} rows", row, row_count);
            }
            ScanError::ColRead(e) => {
                error!("Column read error: {}", e);
                debug!("Column read error details: {}", e);
            }
            ScanError::Io(e) => {
                error!("I/O error: {}", e);
                debug!("I/O error details: {:?}", e);
            }
        }
    }
}

/// Errors raised while writing a table file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Catalog serialization error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Duplicate table: {0}")]
    DuplicateTable(String),

    #[error("Duplicate column {column} in table {table}")]
    DuplicateColumn { table: String, column: String },

    #[error("Column {column} has {actual} rows, expected {expected}")]
    RowCountMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid block size: {0}")]
    InvalidBlockSize(usize),

    #[error("Compression error: {0}")]
    Compression(String),
}
