//! Comparison policy deciding whether a centroid component moved

use num_traits::Float;

/// Decides whether a centroid component is unchanged between iterations
///
/// The update step counts every component for which `unchanged` is false;
/// a count of zero ends the run.
pub trait ConvergencePolicy<T> {
    fn unchanged(&self, previous: T, current: T) -> bool;
}

/// Built-in comparison policies
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Convergence<T> {
    /// Exact floating-point equality of components (NaN always counts as moved)
    #[default]
    Exact,
    /// Components within the given absolute distance count as unchanged
    Tolerance(T),
}

impl<T> ConvergencePolicy<T> for Convergence<T>
where
    T: Float
{
    fn unchanged(&self, previous: T, current: T) -> bool {
        match self {
            Convergence::Exact => previous == current,
            Convergence::Tolerance(epsilon) => (previous - current).abs() <= *epsilon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_policy() {
        let policy = Convergence::Exact;
        assert!(policy.unchanged(1.0, 1.0));
        assert!(!policy.unchanged(1.0, 1.0 + f64::EPSILON));
        assert!(!policy.unchanged(f64::NAN, f64::NAN));
    }

    #[test]
    fn tolerance_policy() {
        let policy = Convergence::Tolerance(0.01);
        assert!(policy.unchanged(1.0, 1.005));
        assert!(policy.unchanged(1.005, 1.0));
        assert!(!policy.unchanged(1.0, 1.02));
    }

    #[test]
    fn default_is_exact() {
        assert_eq!(Convergence::<f32>::default(), Convergence::Exact);
    }
}
