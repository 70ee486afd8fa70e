//! Distance used for nearest-centroid lookups

use num_traits::Float;

/// Trait for calculating squared Euclidean distance between vectors
///
/// The square root is skipped: it is monotonic, so the nearest centroid
/// is the same either way.
pub trait SquaredEuclidean<T> {
    /// Calculate sum((a[i] - b[i])^2) over all paired elements
    fn squared_euclidean(&self, right: &Self) -> T;
}

impl<T> SquaredEuclidean<T> for [T]
where
    T: Float
{
    fn squared_euclidean(&self, right: &Self) -> T {
        self.iter().zip(right.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + (a - b) * (a - b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_distance() {
        assert_eq!([0.0, 0.0].squared_euclidean(&[3.0, 4.0]), 25.0);
        assert_eq!([1.5f32].squared_euclidean(&[1.5]), 0.0);
    }

    #[test]
    fn distance_is_symmetric_and_non_negative() {
        let a = [-2.0, 7.5, 0.25];
        let b = [4.0, -1.0, 0.25];
        assert_eq!(a.squared_euclidean(&b), b.squared_euclidean(&a));
        assert!(a.squared_euclidean(&b) >= 0.0);
    }
}
