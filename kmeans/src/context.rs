use num_traits::Float;

use crate::{error::{KMeansError, Result}, table::VectorTable};

/// Iteration cap used when the caller does not provide one
pub const DEFAULT_MAX_ITERATIONS: usize = 200;

// Parameters of one clustering run, validated against the loaded table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KMeansContext {
    k: usize,
    dimension: usize,
    max_iterations: usize,
}

impl KMeansContext {
    /// Check `1 <= k < table.len()` and `max_iterations >= 1`
    ///
    /// This is the only place these conditions are checked; the iteration
    /// steps assume them.
    pub fn new<T>(table: &VectorTable<T>, k: usize, max_iterations: usize) -> Result<Self>
    where
        T: Float
    {
        if k == 0 {
            return Err(KMeansError::ZeroClusters);
        }
        if max_iterations == 0 {
            return Err(KMeansError::ZeroIterations);
        }
        if k >= table.len() {
            return Err(KMeansError::TooManyClusters { k: k, vectors: table.len() });
        }
        Ok(Self { k: k, dimension: table.dimension(), max_iterations: max_iterations })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}
