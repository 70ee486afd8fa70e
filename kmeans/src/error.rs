use thiserror::Error;

/// Errors returned while loading vectors or validating a clustering run.
#[derive(Debug, Error)]
pub enum KMeansError {
    #[error("input contains no vectors")]
    EmptyInput,

    #[error("line {line}: expected {expected} values, got {got}")]
    DimensionMismatch { line: u64, expected: usize, got: usize },

    #[error("line {line}, column {column}: '{value}' is not a number")]
    InvalidNumber { line: u64, column: usize, value: String },

    #[error("cannot read input: {0}")]
    Csv(#[from] csv::Error),

    #[error("number of clusters must be at least 1")]
    ZeroClusters,

    #[error("number of iterations must be at least 1")]
    ZeroIterations,

    #[error("Number of clusters ({k}) can't be more than the number of datapoints ({vectors}).")]
    TooManyClusters { k: usize, vectors: usize },
}

pub type Result<T> = std::result::Result<T, KMeansError>;
