use std::path::PathBuf;

use thiserror::Error;

pub type SparkResult<T> = Result<T, SparkError>;

#[derive(Debug, Error)]
pub enum SparkError {
    #[error("cannot render a sparkline from an empty sequence")]
    EmptySequence,

    #[error("sequence value at index {index} is not finite")]
    NonFiniteValue { index: usize },

    #[error("unknown column: `{0}`")]
    UnknownColumn(String),

    #[error("column `{column}` row {row} does not hold a numeric sequence")]
    NotASequence { column: String, row: usize },

    #[error("column length mismatch: table has {expected} rows, column has {actual}")]
    ColumnLengthMismatch { expected: usize, actual: usize },

    #[error("invalid style: {0}")]
    InvalidStyle(String),

    #[error("plotting backend error: {0}")]
    Backend(String),

    #[error("failed to encode sparkline image")]
    Encode(#[from] image::ImageError),

    #[error("failed to write `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
