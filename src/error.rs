//! Error types for the evaluation library.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Errors that can occur during loading, validation, or evaluation.
#[derive(Error, Debug)]
pub enum EvalError {
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("DataFrame error: {0}")]
    PolarsError(#[from] polars::error::PolarsError),

    /// The prediction and ground-truth sequences must pair up one-to-one
    /// by image index.
    #[error("length mismatch: {predictions} prediction images vs {ground_truths} ground-truth images")]
    LengthMismatch {
        predictions: usize,
        ground_truths: usize,
    },

    /// A per-image record had boxes, scores, and labels of inconsistent
    /// lengths.
    #[error("ragged record: {0}")]
    RaggedRecord(String),

    #[error("expected {num_classes} class names, got {provided}")]
    ClassNameCount {
        provided: usize,
        num_classes: usize,
    },

    #[error("invalid threshold: {0}")]
    InvalidThreshold(String),

    #[error("missing required column: {0}")]
    MissingColumn(String),

    #[error("invalid frame: {0}")]
    InvalidFrame(String),
}
