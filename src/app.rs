//! Top-level harness orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - generates the ground-truth batch and its mean anomalies
//! - times the chunk-parallel solve
//! - reports elapsed time and mean absolute error
//! - writes the optional CSV export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use clap::Parser;

use crate::batch::solve_chunked;
use crate::cli::Cli;
use crate::constants::{Radian, DPI};
use crate::goatherd_errors::GoatherdError;

/// Entry point for the `goatherd` binary.
pub fn run() -> Result<(), GoatherdError> {
    let cli = Cli::parse();
    let n_threads = rayon::current_num_threads();

    println!();
    println!("##### PARAMETERS #####");
    println!("# N_ell = {}", cli.count);
    println!("# Eccentricity = {:.2}", cli.eccentricity);
    println!("# Iterations: {}", cli.iterations);
    println!("# N_threads: {n_threads}");
    println!("######################");

    // Ground truth over (0, 2 pi), open at both ends, and the mean anomalies
    // it generates. Solving those back recovers the grid, which gives an
    // error metric without an external reference solver.
    let e_true: Vec<Radian> = (0..cli.count)
        .map(|k| DPI * (k as f64 + 0.5) / cli.count as f64)
        .collect();
    let ell: Vec<Radian> = e_true
        .iter()
        .map(|&e_t| e_t - cli.eccentricity * e_t.sin())
        .collect();

    let chunk_size = cli
        .chunk_size
        .unwrap_or_else(|| cli.count.div_ceil(n_threads));

    let start = Instant::now();
    let e_out = solve_chunked(&ell, cli.eccentricity, cli.iterations, chunk_size)?;
    let elapsed = start.elapsed();

    let mean_error = e_out
        .iter()
        .zip(&e_true)
        .map(|(a, b)| (a - b).abs())
        .sum::<f64>()
        / cli.count.max(1) as f64;

    println!();
    println!(
        "Estimation complete after {:.1} milliseconds, achieving mean error {mean_error:.2e}.",
        elapsed.as_secs_f64() * 1e3
    );

    if let Some(path) = &cli.export {
        export_csv(path, &ell, &e_out)?;
        println!("Wrote {} rows to {}", e_out.len(), path.display());
    }

    Ok(())
}

/// Write (mean anomaly, eccentric anomaly) rows to a CSV file.
fn export_csv(path: &Path, ell: &[Radian], e_out: &[Radian]) -> Result<(), GoatherdError> {
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "mean_anomaly,eccentric_anomaly")?;
    for (l, e) in ell.iter().zip(e_out) {
        writeln!(file, "{l},{e}")?;
    }
    Ok(())
}
