//! Lloyd's k-means clustering of dense numeric vectors
//!
//! The run alternates nearest-centroid assignment and mean recomputation
//! until no centroid component changes or the iteration cap is reached.
//! Initialization is deterministic: the first k vectors seed the clusters.
//!
//! ```
//! use kmeans::{context::KMeansContext, lloyd::{fit, LloydKmeans}, reader::read_vectors, writer::format_centroid};
//!
//! let mut table = read_vectors::<f64, _>("0,0\n10,0\n0,2\n10,2\n".as_bytes()).unwrap();
//! let context = KMeansContext::new(&table, 2, 200).unwrap();
//! let mut model = LloydKmeans::new(&table, context);
//! fit(&mut table, &mut model);
//!
//! let lines: Vec<String> = model.centroids().map(format_centroid).collect();
//! assert_eq!(lines, ["0.0000,1.0000", "10.0000,1.0000"]);
//! ```

pub mod assignment;
pub mod cluster;
pub mod context;
pub mod convergence;
pub mod distance;
pub mod error;
pub mod lloyd;
pub mod reader;
pub mod table;
pub mod update;
pub mod writer;

pub use error::{KMeansError, Result};
