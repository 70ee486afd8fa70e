//! Dense vector table used as the input of the clustering run
//! Every row stores `dimension` coordinates followed by one slot holding
//! the index of the cluster the row is currently assigned to.

use num_traits::Float;

/// Owned row-major table of vectors with a fixed stride of `dimension + 1`
///
/// Coordinates are immutable once pushed; only the trailing assignment slot
/// changes between iterations. The slot stores the cluster index as a real
/// number and holds NaN until the first assignment pass.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorTable<T> {
    dimension: usize,
    values: Vec<T>,
}

impl<T> VectorTable<T>
where
    T: Float
{
    pub fn new(dimension: usize) -> Self {
        Self { dimension: dimension, values: Vec::new() }
    }

    /// Build a table from rows of equal arity
    ///
    /// # Panics
    /// Panics if rows differ in length. Loaders validate arity beforehand.
    pub fn from_rows<R>(dimension: usize, rows: impl IntoIterator<Item = R>) -> Self
    where
        R: AsRef<[T]>
    {
        let mut table = Self::new(dimension);
        rows.into_iter().for_each(|row| table.push(row.as_ref()));
        table
    }

    /// Append a row of coordinates with an unassigned cluster slot
    ///
    /// # Panics
    /// Panics if `coordinates.len()` differs from the table dimension.
    pub fn push(&mut self, coordinates: &[T]) {
        assert_eq!(coordinates.len(), self.dimension, "vector arity must match table dimension");
        self.values.extend_from_slice(coordinates);
        self.values.push(T::nan());
    }

    fn stride(&self) -> usize {
        self.dimension + 1
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of vectors in the table
    pub fn len(&self) -> usize {
        self.values.len() / self.stride()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Coordinates of row `index`, without the assignment slot
    pub fn row(&self, index: usize) -> &[T] {
        let start = index * self.stride();
        &self.values[start..start + self.dimension]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        let dimension = self.dimension;
        self.values.chunks_exact(self.stride()).map(move |row| &row[..dimension])
    }

    /// Cluster currently holding row `index`, `None` before the first pass
    pub fn assignment(&self, index: usize) -> Option<usize> {
        self.values[index * self.stride() + self.dimension].to_usize()
    }

    pub fn set_assignment(&mut self, index: usize, cluster: usize) {
        let slot = index * self.stride() + self.dimension;
        // Cluster indices are far below 2^24, so f32 holds them exactly too
        self.values[slot] = T::from(cluster).unwrap_or_else(T::nan);
    }

    pub fn assignments(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        (0..self.len()).map(move |index| self.assignment(index))
    }
}
