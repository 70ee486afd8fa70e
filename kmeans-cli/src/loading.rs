use std::{fs::File, io::{self, BufReader}, path::Path};

use kmeans::{reader::read_vectors, table::VectorTable};

use crate::error::CliError;

/// Load the vector table from `path`, or from stdin when no path is given
pub fn load_data(path: Option<&Path>) -> Result<VectorTable<f64>, CliError> {
    let table = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading vectors from file");
            let file = File::open(path).map_err(|source| CliError::Open { path: path.to_path_buf(), source: source })?;
            read_vectors(BufReader::new(file))?
        },
        None => {
            tracing::debug!("reading vectors from stdin");
            read_vectors(io::stdin().lock())?
        }
    };
    tracing::debug!(vectors = table.len(), dimension = table.dimension(), "vectors loaded");
    Ok(table)
}
