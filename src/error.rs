//! Domain errors for dataset parsing, validation and generation.

use thiserror::Error;

/// Errors raised by the data model, the readers and the generators.
///
/// Library functions return `anyhow::Result` with file context attached;
/// a `DatasetError` is always the root cause and can be recovered with
/// `err.downcast_ref::<DatasetError>()`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetError {
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("point {index} has {found} coordinates, dataset dimension is {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error("dataset is empty: {0}")]
    Empty(String),
}
