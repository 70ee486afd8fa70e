use std::path::PathBuf;

use kmeans::KMeansError;
use thiserror::Error;

/// Everything that ends a `lloyd` run early; each kind has its own exit code
#[derive(Debug, Error)]
pub enum CliError {
    #[error("The program needs at least one argument.")]
    MissingClusterCount,

    #[error("K argument must be an integer number greater than 0.")]
    InvalidClusterCount,

    #[error("Max iteration argument must be an integer number greater than 0.")]
    InvalidMaxIterations,

    #[error("Tolerance must be a finite number not less than 0.")]
    InvalidTolerance,

    #[error("cannot open {}: {source}", .path.display())]
    Open { path: PathBuf, source: std::io::Error },

    #[error(transparent)]
    KMeans(#[from] KMeansError),

    #[error("cannot write centroids: {0}")]
    Output(#[source] std::io::Error),

    #[error(transparent)]
    Usage(clap::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::MissingClusterCount => 2,
            CliError::InvalidClusterCount => 3,
            CliError::InvalidMaxIterations => 4,
            CliError::KMeans(KMeansError::TooManyClusters { .. })
            | CliError::KMeans(KMeansError::ZeroClusters)
            | CliError::KMeans(KMeansError::ZeroIterations) => 5,
            CliError::Open { .. } | CliError::KMeans(_) => 6,
            CliError::InvalidTolerance => 7,
            CliError::Output(_) => 8,
            CliError::Usage(_) => 9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_kind() {
        let errors = [
            CliError::MissingClusterCount,
            CliError::InvalidClusterCount,
            CliError::InvalidMaxIterations,
            CliError::KMeans(KMeansError::TooManyClusters { k: 4, vectors: 4 }),
            CliError::KMeans(KMeansError::EmptyInput),
            CliError::InvalidTolerance,
            CliError::Output(std::io::Error::other("closed")),
            CliError::Usage(clap::Error::new(clap::error::ErrorKind::UnknownArgument)),
        ];
        let codes: Vec<u8> = errors.iter().map(CliError::exit_code).collect();

        assert_eq!(codes, vec![2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn shape_error_keeps_library_message() {
        let err = CliError::from(KMeansError::TooManyClusters { k: 5, vectors: 3 });
        assert_eq!(err.to_string(), "Number of clusters (5) can't be more than the number of datapoints (3).");
    }
}
