use std::{fmt::Display, io::Write};

use num_traits::Float;

use crate::cluster::ClusterSet;

/// Digits printed after the decimal point for every centroid component
pub const PRECISION: usize = 4;

/// Render one centroid as comma-separated fixed-precision numbers
pub fn format_centroid<T>(centroid: &[T]) -> String
where
    T: Float + Display
{
    centroid.iter().map(|value| format!("{:.*}", PRECISION, value)).collect::<Vec<String>>().join(",")
}

/// Write the current centroid of every cluster, one line each, in index order
pub fn write_centroids<T, W>(out: &mut W, clusters: &ClusterSet<T>) -> std::io::Result<()>
where
    T: Float + Display,
    W: Write
{
    for centroid in clusters.centroids() {
        writeln!(out, "{}", format_centroid(centroid))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::VectorTable;

    #[test]
    fn four_decimal_places() {
        assert_eq!(format_centroid(&[0.0, 1.0]), "0.0000,1.0000");
        assert_eq!(format_centroid(&[3.14159, -2.5, 1e3]), "3.1416,-2.5000,1000.0000");
        assert_eq!(format_centroid(&[1.0f32 / 3.0]), "0.3333");
    }

    #[test]
    fn one_line_per_cluster() {
        let table = VectorTable::from_rows(2, [[10.0, 1.0], [0.0, 1.0], [5.0, 5.0]]);
        let clusters = ClusterSet::initialize(&table, 2);
        let mut out = Vec::new();

        write_centroids(&mut out, &clusters).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "10.0000,1.0000\n0.0000,1.0000\n");
    }
}
