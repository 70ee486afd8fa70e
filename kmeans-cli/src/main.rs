//! Lloyd k-means over comma-separated vectors
//! Reads one vector per line (stdin by default), clusters them into K groups
//! and prints the final centroids, one line per cluster with 4 decimals.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{error::ErrorKind, Parser};
use error::CliError;
use kmeans::context::KMeansContext;
use kmeans::lloyd::{fit, LloydKmeans};
use kmeans::writer::write_centroids;
use loading::load_data;
use settings::Settings;
use tracing_subscriber::EnvFilter;

// Module declarations
mod error;
mod loading;
mod settings;

/// Command-line arguments for the clustering program
#[derive(Parser, Debug)]
#[command(author, version, about, allow_negative_numbers = true)]
pub struct Args {
    /// Number of clusters, an integer greater than 0 and below the number of vectors
    pub k: Option<String>,
    /// Maximum number of iterations (default: 200)
    pub max_iter: Option<String>,
    /// Read vectors from this file instead of stdin
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Treat a centroid component as unchanged when it moves by at most this much
    /// (default: exact equality)
    #[arg(long)]
    pub tolerance: Option<String>,
    /// Extra positional arguments, ignored
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args: Args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        },
        Err(err) => return report(CliError::Usage(err)),
    };
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(err),
    }
}

fn report(err: CliError) -> ExitCode {
    eprintln!("{}", err.to_string().trim_end());
    ExitCode::from(err.exit_code())
}

fn run(args: &Args) -> Result<(), CliError> {
    // Arguments are checked before any input is read
    let settings = Settings::from_args(args)?;
    tracing::debug!(?settings, "settings resolved");
    if !args.rest.is_empty() {
        tracing::debug!(ignored = ?args.rest, "extra positional arguments");
    }

    let mut table = load_data(settings.input.as_deref())?;
    let context = KMeansContext::new(&table, settings.k, settings.max_iterations)?;

    let mut model = LloydKmeans::with_policy(&table, context, settings.convergence);
    let termination = fit(&mut table, &mut model);
    tracing::info!(?termination, "clustering finished");

    let mut out = BufWriter::new(io::stdout().lock());
    write_centroids(&mut out, &model.clusters).map_err(CliError::Output)
}

// Example command line usage:
//cargo run --release -p kmeans-cli -- 3 100 --input points.csv
