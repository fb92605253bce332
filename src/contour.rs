//! # Contour-integration solution of Kepler's equation
//!
//! Solves `E - e sin(E) = ell` for the eccentric anomaly `E` using the
//! contour-integration method of Philcox et al. (2021), built on the
//! solution of Ullisch (2020) to the geometric goat problem.
//!
//! No Newton iteration is involved: the contour integrals of `1/f` and
//! `z/f` along a circle enclosing the root are approximated by a truncated
//! Fourier sum over `N_fft = 2 (N_it - 1)` sampling points, and their ratio
//! yields the root as the centroid of the poles inside the contour. The
//! sampling grid depends only on `(eccentricity, N_it)` and is shared by
//! every element of a batch, so large arrays of mean anomalies amortize the
//! trigonometric setup across the whole call.
//!
//! ## References
//!
//! * Philcox, Goodman & Slepian (2021), *Kepler's Goat Herd: An exact
//!   solution to Kepler's equation for elliptical orbits*.
//! * Ullisch (2020), *A closed-form solution to the geometric goat problem*.

use std::f64::consts::PI;

use crate::constants::{Radian, DPI};
use crate::goatherd_errors::GoatherdError;

/// Validate a full solver input set before any numeric work.
///
/// Checks, in order: `eccentricity > 0`, `eccentricity < 1`, every mean
/// anomaly inside `[0, 2π]` (the whole slice is scanned through its
/// extrema, never sampled), and `n_it >= 2`. The checks are all-or-nothing:
/// on failure no output element has been computed.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomalies `ell` (radians).
/// * `eccentricity`: orbit eccentricity.
/// * `n_it`: number of sampling points.
///
/// Return
/// ------
/// * `Ok(())` if the inputs satisfy the solver's domain contract, otherwise
///   the corresponding [`GoatherdError`] variant.
pub fn validate(
    mean_anomaly: &[Radian],
    eccentricity: f64,
    n_it: usize,
) -> Result<(), GoatherdError> {
    if eccentricity <= 0. {
        return Err(GoatherdError::NonPositiveEccentricity(eccentricity));
    }
    if eccentricity >= 1. {
        return Err(GoatherdError::EccentricityAboveUnity(eccentricity));
    }
    let max = mean_anomaly.iter().fold(f64::NEG_INFINITY, |m, &x| m.max(x));
    if max > DPI {
        return Err(GoatherdError::MeanAnomalyOutOfRange(max));
    }
    let min = mean_anomaly.iter().fold(f64::INFINITY, |m, &x| m.min(x));
    if min < 0. {
        return Err(GoatherdError::MeanAnomalyOutOfRange(min));
    }
    if n_it < 2 {
        return Err(GoatherdError::NotEnoughSamplingPoints(n_it));
    }
    Ok(())
}

/// One interior sampling point of the contour, with every quantity that does
/// not depend on the mean anomaly already evaluated.
struct InteriorSample {
    /// cos θ_j, sin θ_j (the e^{iθ} grid on the half contour)
    exp2_r: f64,
    exp2_i: f64,
    /// cos 2θ_j, sin 2θ_j, from the double-angle identities
    exp4_r: f64,
    exp4_i: f64,
    /// e cos(r cos θ_j), e sin(r cos θ_j)
    ecos_r: f64,
    esin_r: f64,
    /// cosh(r sin θ_j), sinh(r sin θ_j)
    cosh_i: f64,
    sinh_i: f64,
}

/// Precomputed contour sampling grid for one `(eccentricity, n_it)` pair.
///
/// Built once per solve call and read-only afterwards; every element of the
/// batch (and every worker of a chunked batch) borrows the same grid. The
/// integration range is halved by symmetry, the factor of two being absorbed
/// in the final ratio.
pub(crate) struct ContourGrid {
    eccentricity: f64,
    /// Contour radius, e/2
    radius: f64,
    /// e sin(r) and e cos(r) for the two real edge samples
    esin_radius: f64,
    ecos_radius: f64,
    samples: Vec<InteriorSample>,
}

impl ContourGrid {
    /// Build the sampling grid. Inputs must already satisfy [`validate`].
    pub(crate) fn new(eccentricity: f64, n_it: usize) -> Self {
        let n_points = n_it - 2;
        let n_fft = 2 * (n_it - 1);
        let radius = eccentricity / 2.;

        let samples = (1..=n_points)
            .map(|j| {
                let theta = DPI * j as f64 / n_fft as f64;
                let exp2_r = theta.cos();
                let exp2_i = theta.sin();
                InteriorSample {
                    exp2_r,
                    exp2_i,
                    // Angle doublé via les identités, pour éviter un second
                    // appel trigonométrique
                    exp4_r: exp2_r * exp2_r - exp2_i * exp2_i,
                    exp4_i: 2. * exp2_r * exp2_i,
                    ecos_r: eccentricity * (radius * exp2_r).cos(),
                    esin_r: eccentricity * (radius * exp2_r).sin(),
                    cosh_i: (radius * exp2_i).cosh(),
                    sinh_i: (radius * exp2_i).sinh(),
                }
            })
            .collect();

        Self {
            eccentricity,
            radius,
            esin_radius: eccentricity * radius.sin(),
            ecos_radius: eccentricity * radius.cos(),
            samples,
        }
    }

    /// Solve one mean anomaly against the precomputed grid.
    ///
    /// Accumulates the truncated contour sums `gx1 ≈ ∮ dz/f` and
    /// `gx2 ≈ ∮ z dz/f` over the two half-weight real edge samples and the
    /// interior complex samples, then returns the centroid estimate
    /// `center + r · gx2/gx1`. Divisions are unguarded: a sample landing
    /// exactly on the root yields a non-finite result for this element.
    pub(crate) fn solve_one(&self, ell: Radian) -> Radian {
        // Contour center, shifted to the far side of ell so the circle stays
        // inside the domain on either side of ell = pi.
        let mut center = ell - self.radius;
        if ell < PI {
            center += self.eccentricity;
        }
        let sin_c = center.sin();
        let cos_c = center.cos();

        // Edge sample at center + r (z purely real), half weight.
        let z_r = center + self.radius;
        let tmpsin = sin_c * self.ecos_radius + cos_c * self.esin_radius; // e sin(zR)
        let fx_r = z_r - tmpsin - ell;
        let mut gx1 = 0.5 / fx_r;
        let mut gx2 = 0.5 / fx_r;

        // Interior samples, z complex. e sin(z) and e cos(z) come from the
        // angle-sum identities over the precomputed parts; no trigonometric
        // call is made on the full argument.
        for p in &self.samples {
            let z_r = center + self.radius * p.exp2_r;
            let z_i = self.radius * p.exp2_i;
            let tmpsin = sin_c * p.ecos_r + cos_c * p.esin_r; // e sin(zR)
            let tmpcos = cos_c * p.ecos_r - sin_c * p.esin_r; // e cos(zR)
            let fx_r = z_r - tmpsin * p.cosh_i - ell;
            let fx_i = z_i - tmpcos * p.sinh_i;

            // 1/f(z), complex inversion collapsed to its real combination
            // with the Fourier weights
            let ftmp = fx_r * fx_r + fx_i * fx_i;
            let fx_r = fx_r / ftmp;
            let fx_i = fx_i / ftmp;
            gx2 += p.exp4_r * fx_r + p.exp4_i * fx_i;
            gx1 += p.exp2_r * fx_r + p.exp2_i * fx_i;
        }

        // Edge sample at center - r, half weight.
        let z_r = center - self.radius;
        let tmpsin = sin_c * self.ecos_radius - cos_c * self.esin_radius;
        let fx_r = z_r - tmpsin - ell;
        gx2 += 0.5 / fx_r;
        gx1 += -0.5 / fx_r;

        center + self.radius * gx2 / gx1
    }

    /// Solve a slice of mean anomalies into a matching output slice.
    pub(crate) fn solve_slice_into(&self, mean_anomaly: &[Radian], out: &mut [Radian]) {
        debug_assert_eq!(mean_anomaly.len(), out.len());
        for (dst, &ell) in out.iter_mut().zip(mean_anomaly) {
            *dst = self.solve_one(ell);
        }
    }
}

/// Solve Kepler's equation for a batch of mean anomalies.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomalies `ell` in `[0, 2π]` (radians).
/// * `eccentricity`: orbit eccentricity, `0 < e < 1`.
/// * `n_it`: accuracy knob; the contour sum uses `2 (n_it - 1)` sampling
///   points and the truncation error shrinks as `n_it` grows. Must be `>= 2`.
///
/// Return
/// ------
/// * Eccentric anomalies `E`, one per input element, in input order, each
///   satisfying `E - e sin(E) = ell` up to the truncation error.
///
/// Notes
/// -----
/// The computation is elementwise independent and deterministic: the same
/// inputs produce bit-identical outputs however the batch is partitioned.
/// Degenerate configurations where a contour sample lands exactly on the
/// root divide by zero and propagate a non-finite value for that element;
/// they are not reported as errors. Callers needing robustness should check
/// output finiteness.
///
/// See also
/// --------
/// * [`crate::batch::solve_chunked`] – the same computation fanned out over
///   a worker pool.
pub fn solve(
    mean_anomaly: &[Radian],
    eccentricity: f64,
    n_it: usize,
) -> Result<Vec<Radian>, GoatherdError> {
    validate(mean_anomaly, eccentricity, n_it)?;
    let grid = ContourGrid::new(eccentricity, n_it);
    Ok(mean_anomaly.iter().map(|&ell| grid.solve_one(ell)).collect())
}
