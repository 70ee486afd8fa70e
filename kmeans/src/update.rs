//! Centroid recalculation for Lloyd iterations
//! Turns the sums accumulated during assignment into means and counts how
//! many centroid components moved.

use num_traits::Float;

use crate::{cluster::ClusterSet, convergence::ConvergencePolicy};

/// Recalculate cluster centroids as the mean of their members
///
/// # Arguments
/// * `clusters` - Clusters holding per-cluster sums after `assign_points`
/// * `policy` - Comparison deciding whether a component moved
///
/// # Returns
/// * Total number of changed components over all clusters and dimensions;
///   zero means the run has converged
///
/// # Empty clusters
/// A cluster with no members keeps its previous centroid and contributes no
/// changes. Nothing is divided by zero. The cluster is marked frozen and the
/// warning is logged once when it becomes empty, not on every iteration it
/// stays empty.
pub fn recalculate_centroids<T, P>(
    clusters: &mut ClusterSet<T>,
    policy: &P
) -> usize
where
    T: Float,
    P: ConvergencePolicy<T>
{
    let mut changes = 0;
    for (idx, cluster) in clusters.iter_mut().enumerate() {
        if cluster.member_count == 0 {
            if !cluster.frozen {
                tracing::warn!(cluster = idx, "empty cluster, keeping previous centroid");
                cluster.frozen = true;
            }
            cluster.current.copy_from_slice(&cluster.previous);
            continue;
        }
        if cluster.frozen {
            tracing::debug!(cluster = idx, members = cluster.member_count, "empty cluster got members back");
            cluster.frozen = false;
        }
        let count = T::from(cluster.member_count).unwrap_or_else(T::max_value);
        for (current, &previous) in cluster.current.iter_mut().zip(cluster.previous.iter()) {
            *current = *current / count;
            if !policy.unchanged(previous, *current) {
                changes += 1;
            }
        }
    }
    changes
}
