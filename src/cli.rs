//! Command-line parsing for the batch timing harness.
//!
//! Kept separate from the solver so the argument surface can evolve without
//! touching the numeric code.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "goatherd",
    version,
    about = "Contour-integration Kepler solver (geometric goat herd method)"
)]
pub struct Cli {
    /// Number of mean-anomaly samples to solve.
    #[arg(short = 'n', long, default_value_t = 1_000_000)]
    pub count: usize,

    /// Orbit eccentricity (0 < e < 1).
    #[arg(short = 'e', long, default_value_t = 0.5)]
    pub eccentricity: f64,

    /// Number of sampling points (accuracy knob, >= 2).
    #[arg(short = 'i', long, default_value_t = 10)]
    pub iterations: usize,

    /// Elements per work unit (default: count / available threads).
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Export (mean anomaly, eccentric anomaly) rows to a CSV file.
    #[arg(long)]
    pub export: Option<PathBuf>,
}
