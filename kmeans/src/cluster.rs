//! Cluster and centroid state for Lloyd iterations
//! Each cluster keeps the centroid fixed during the current assignment pass
//! next to an accumulator that becomes the next centroid.

use num_traits::Float;

use crate::{distance::SquaredEuclidean, table::VectorTable};

/// One of the k clusters
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster<T> {
    pub(crate) previous: Vec<T>,
    pub(crate) current: Vec<T>,
    pub(crate) member_count: usize,
    pub(crate) frozen: bool,
}

impl<T> Cluster<T>
where
    T: Float
{
    fn from_centroid(centroid: &[T]) -> Self {
        Self { previous: vec![T::zero(); centroid.len()], current: centroid.to_vec(), member_count: 0, frozen: false }
    }

    /// Centroid used for distance comparisons in the running pass
    pub fn previous_centroid(&self) -> &[T] {
        &self.previous
    }

    /// Running sum during assignment, mean after the update step
    pub fn current_centroid(&self) -> &[T] {
        &self.current
    }

    pub fn member_count(&self) -> usize {
        self.member_count
    }

    /// True while the cluster has been left without members and keeps its
    /// last centroid
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Add a member's coordinates into the accumulator
    pub fn accumulate(&mut self, point: &[T]) {
        self.current.iter_mut().zip(point.iter()).for_each(|(sum, &value)| *sum = *sum + value);
        self.member_count += 1;
    }

    fn reset(&mut self) {
        self.previous.copy_from_slice(&self.current);
        self.current.iter_mut().for_each(|value| *value = T::zero());
        self.member_count = 0;
    }
}

/// The k clusters of a run, indexed from 0
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterSet<T> {
    clusters: Vec<Cluster<T>>,
}

impl<T> ClusterSet<T>
where
    T: Float
{
    /// Seed cluster `i` with vector `i` for every `i < k`
    ///
    /// Deterministic: the first k rows of the table become the first centroids.
    /// Callers validate `1 <= k < table.len()` through `KMeansContext`; with
    /// `k == 0` the set is empty and `nearest` panics.
    pub fn initialize(table: &VectorTable<T>, k: usize) -> Self {
        Self { clusters: table.rows().take(k).map(Cluster::from_centroid).collect() }
    }

    /// Move current centroids into `previous` and clear the accumulators
    ///
    /// Runs before every assignment pass, the first one included.
    pub fn reset_for_iteration(&mut self) {
        self.clusters.iter_mut().for_each(Cluster::reset);
    }

    /// Index of the cluster whose previous centroid is closest to `point`
    ///
    /// Only a strictly smaller distance replaces the running best, so ties go
    /// to the lowest index.
    ///
    /// # Panics
    /// Panics if the set holds no cluster. `KMeansContext::new` rejects `k == 0`.
    pub fn nearest(&self, point: &[T]) -> usize {
        let mut best = 0;
        let mut best_distance = point.squared_euclidean(&self.clusters[0].previous);
        for (idx, cluster) in self.clusters.iter().enumerate().skip(1) {
            let distance = point.squared_euclidean(&cluster.previous);
            if distance < best_distance {
                best = idx;
                best_distance = distance;
            }
        }
        best
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Cluster<T>> {
        self.clusters.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> &mut Cluster<T> {
        &mut self.clusters[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cluster<T>> {
        self.clusters.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cluster<T>> {
        self.clusters.iter_mut()
    }

    /// Current centroids in cluster index order
    pub fn centroids(&self) -> impl Iterator<Item = &[T]> {
        self.clusters.iter().map(Cluster::current_centroid)
    }

    /// Sum of member counts, equal to the table length after a full pass
    pub fn total_members(&self) -> usize {
        self.clusters.iter().map(|cluster| cluster.member_count).sum()
    }
}
