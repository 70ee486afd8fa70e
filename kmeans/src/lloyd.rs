use num_traits::Float;

use crate::{assignment::assign_points, cluster::ClusterSet, context::KMeansContext, convergence::{Convergence, ConvergencePolicy}, table::VectorTable, update::recalculate_centroids};

// Lloyd k-means model: run parameters, cluster state and the comparison policy
// deciding convergence.
#[derive(Clone, Debug)]
pub struct LloydKmeans<T, P = Convergence<T>>
{
    pub context: KMeansContext,
    pub clusters: ClusterSet<T>,
    pub policy: P,
}

impl<T> LloydKmeans<T>
where
    T: Float
{
    /// Model seeded from the first `context.k` vectors, converging on exact equality
    pub fn new(table: &VectorTable<T>, context: KMeansContext) -> Self {
        Self::with_policy(table, context, Convergence::Exact)
    }
}

impl<T, P> LloydKmeans<T, P>
where
    T: Float,
    P: ConvergencePolicy<T>
{
    pub fn with_policy(table: &VectorTable<T>, context: KMeansContext, policy: P) -> Self {
        Self { context: context, clusters: ClusterSet::initialize(table, context.k()), policy: policy }
    }

    /// Current centroids in cluster index order
    pub fn centroids(&self) -> impl Iterator<Item = &[T]> {
        self.clusters.centroids()
    }
}

/// How a run ended. Both variants leave the centroids of the last iteration in the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// An update step reported no changed component
    Converged { iterations: usize },
    /// `max_iterations` passes ran without converging
    Exhausted { iterations: usize },
}

impl Termination {
    pub fn iterations(&self) -> usize {
        match self {
            Termination::Converged { iterations } | Termination::Exhausted { iterations } => *iterations,
        }
    }
}

// The fit function runs Lloyd iterations on the table until the centroids stop moving
// or the iteration cap is reached. Each iteration is reset -> assign -> update.
pub fn fit<T, P>(
    table: &mut VectorTable<T>,
    model: &mut LloydKmeans<T, P>
) -> Termination
where
    T: Float,
    P: ConvergencePolicy<T>
{
    let max_iterations = model.context.max_iterations();
    for iteration in 1..=max_iterations {
        model.clusters.reset_for_iteration();
        let moved = assign_points(table, &mut model.clusters);
        let changed = recalculate_centroids(&mut model.clusters, &model.policy);
        tracing::debug!(iteration, moved, changed, "lloyd iteration done");

        if changed == 0 {
            tracing::info!(iterations = iteration, k = model.context.k(), "converged");
            return Termination::Converged { iterations: iteration };
        }
    }
    tracing::info!(iterations = max_iterations, k = model.context.k(), "iteration cap reached");
    Termination::Exhausted { iterations: max_iterations }
}
