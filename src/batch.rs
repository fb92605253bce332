//! # Chunk-parallel batch solving
//!
//! The contour kernel is elementwise independent: no element's intermediate
//! state depends on any other element. A batch can therefore be cut into
//! arbitrary sub-slices solved with zero coordination, each worker writing
//! straight into its own disjoint window of the output. Reassembly is purely
//! positional; no reduction step exists, so the result is bit-identical to
//! the sequential [`solve`](crate::contour::solve) for every chunk size.

use rayon::prelude::*;

use crate::constants::Radian;
use crate::contour::{validate, ContourGrid};
use crate::goatherd_errors::GoatherdError;

/// Solve a batch of mean anomalies on the rayon pool, `chunk_size` elements
/// per work unit.
///
/// Validation runs once for the whole batch and the sampling grid is built
/// once, then borrowed by every worker.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomalies `ell` in `[0, 2π]` (radians).
/// * `eccentricity`: orbit eccentricity, `0 < e < 1`.
/// * `n_it`: accuracy knob, `>= 2`.
/// * `chunk_size`: elements per work unit (clamped to at least 1).
///
/// Return
/// ------
/// * Eccentric anomalies in input order, bit-identical to the sequential
///   solver.
pub fn solve_chunked(
    mean_anomaly: &[Radian],
    eccentricity: f64,
    n_it: usize,
    chunk_size: usize,
) -> Result<Vec<Radian>, GoatherdError> {
    validate(mean_anomaly, eccentricity, n_it)?;
    let chunk_size = chunk_size.max(1);
    let grid = ContourGrid::new(eccentricity, n_it);

    let mut output = vec![0.; mean_anomaly.len()];
    output
        .par_chunks_mut(chunk_size)
        .zip(mean_anomaly.par_chunks(chunk_size))
        .for_each(|(out, ell)| grid.solve_slice_into(ell, out));
    Ok(output)
}

/// Solve a batch with one chunk per available worker thread.
pub fn solve_parallel(
    mean_anomaly: &[Radian],
    eccentricity: f64,
    n_it: usize,
) -> Result<Vec<Radian>, GoatherdError> {
    let chunk_size = mean_anomaly.len().div_ceil(rayon::current_num_threads());
    solve_chunked(mean_anomaly, eccentricity, n_it, chunk_size)
}

#[cfg(test)]
mod batch_test {
    use super::*;
    use crate::constants::DPI;
    use crate::contour::solve;

    fn sample_batch(n: usize, eccentricity: f64) -> Vec<f64> {
        (0..n)
            .map(|k| {
                let e_true = DPI * (k as f64 + 0.5) / n as f64;
                e_true - eccentricity * e_true.sin()
            })
            .collect()
    }

    #[test]
    fn test_chunked_matches_sequential_bitwise() {
        let ell = sample_batch(1000, 0.5);
        let full = solve(&ell, 0.5, 10).unwrap();

        for chunk_size in [1, 7, 97, 250, 1000, 5000] {
            let chunked = solve_chunked(&ell, 0.5, 10, chunk_size).unwrap();
            assert_eq!(chunked.len(), full.len());
            for (a, b) in chunked.iter().zip(&full) {
                assert_eq!(a.to_bits(), b.to_bits());
            }
        }
    }

    #[test]
    fn test_parallel_matches_sequential_bitwise() {
        let ell = sample_batch(5000, 0.7);
        let full = solve(&ell, 0.7, 12).unwrap();
        let parallel = solve_parallel(&ell, 0.7, 12).unwrap();
        for (a, b) in parallel.iter().zip(&full) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_validation_runs_before_any_work() {
        let mut ell = sample_batch(100, 0.5);
        ell[99] = -1.0;
        assert_eq!(
            solve_chunked(&ell, 0.5, 10, 8),
            Err(GoatherdError::MeanAnomalyOutOfRange(-1.0))
        );
        assert_eq!(
            solve_parallel(&ell, 0.5, 10),
            Err(GoatherdError::MeanAnomalyOutOfRange(-1.0))
        );
    }

    #[test]
    fn test_empty_batch() {
        assert_eq!(solve_parallel(&[], 0.5, 10), Ok(vec![]));
    }
}
