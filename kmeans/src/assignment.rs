//! Nearest-centroid assignment pass

use num_traits::Float;

use crate::{cluster::ClusterSet, table::VectorTable};

/// Assign every vector to its closest cluster and accumulate it there
///
/// Distances are measured against the previous centroids only, so the
/// decisions of one pass do not depend on the order rows are visited.
///
/// # Arguments
/// * `table` - Vectors to assign; each row's cluster slot is overwritten
/// * `clusters` - Clusters reset by `reset_for_iteration` before the call
///
/// # Returns
/// * Number of vectors whose cluster differs from the previous pass
///   (every vector counts on the first pass)
pub fn assign_points<T>(
    table: &mut VectorTable<T>,
    clusters: &mut ClusterSet<T>
) -> usize
where
    T: Float
{
    let mut moved = 0;
    for index in 0..table.len() {
        let nearest = clusters.nearest(table.row(index));
        clusters.get_mut(nearest).accumulate(table.row(index));
        if table.assignment(index) != Some(nearest) {
            moved += 1;
        }
        table.set_assignment(index, nearest);
    }
    moved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_and_accumulates() {
        let mut table = VectorTable::from_rows(2, [[0.0, 0.0], [0.0, 2.0], [10.0, 0.0], [10.0, 2.0]]);
        let mut clusters = ClusterSet::initialize(&table, 2);
        clusters.reset_for_iteration();

        let moved = assign_points(&mut table, &mut clusters);

        assert_eq!(moved, 4);
        assert_eq!(table.assignments().collect::<Vec<_>>(), vec![Some(0), Some(1), Some(0), Some(1)]);
        let first = clusters.get(0).unwrap();
        assert_eq!(first.member_count(), 2);
        assert_eq!(first.current_centroid(), &[10.0, 0.0]);
        assert_eq!(clusters.get(1).unwrap().current_centroid(), &[10.0, 4.0]);
    }

    #[test]
    fn member_counts_sum_to_table_length() {
        let mut table = VectorTable::from_rows(1, [[1.0], [2.0], [3.0], [4.0], [100.0]]);
        let mut clusters = ClusterSet::initialize(&table, 4);
        clusters.reset_for_iteration();

        assign_points(&mut table, &mut clusters);

        assert_eq!(clusters.total_members(), table.len());
        assert_eq!(table.assignment(4), Some(3));
    }

    #[test]
    fn second_pass_reports_only_moved_vectors() {
        let mut table = VectorTable::from_rows(1, [[1.0], [2.0], [3.0], [4.0], [100.0]]);
        let mut clusters = ClusterSet::initialize(&table, 4);
        clusters.reset_for_iteration();
        assign_points(&mut table, &mut clusters);
        // cluster 3 now sums 4 + 100; pretend the mean was computed
        clusters.get_mut(3).current = vec![52.0];
        clusters.get_mut(3).member_count = 1;

        clusters.reset_for_iteration();
        let moved = assign_points(&mut table, &mut clusters);

        assert_eq!(moved, 1);
        assert_eq!(table.assignment(3), Some(2));
    }
}
