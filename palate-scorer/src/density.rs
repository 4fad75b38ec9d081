//! Multivariate Gaussian kernel density estimation over flavour space.
//!
//! The kernel covariance is the sample covariance of the members (unbiased,
//! `n - 1` denominator) multiplied by `bandwidth²`, so the bandwidth acts as
//! a dimensionless scale factor rather than an absolute width. Every sample
//! carries equal weight.

use std::f64::consts::PI;

use palate_core::{FLAVOUR_DIMENSIONS, FlavourVector};
use thiserror::Error;

use crate::geometry::{Components, mean};

type Matrix = [[f64; FLAVOUR_DIMENSIONS]; FLAVOUR_DIMENSIONS];

/// Reasons a density estimate cannot be fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DensityError {
    /// The sample is too small to estimate a full-rank covariance.
    #[error("{samples} samples cannot support a {dimensions}-dimensional density estimate")]
    TooFewSamples {
        /// Number of samples supplied.
        samples: usize,
        /// Dimensionality of the space.
        dimensions: usize,
    },
    /// The scaled covariance matrix is not positive definite, typically
    /// because members repeat or lie on a lower-dimensional plane.
    #[error("sample covariance is not positive definite")]
    SingularCovariance,
}

/// Fitted Gaussian KDE.
#[derive(Debug, Clone)]
pub(crate) struct GaussianKde {
    samples: Vec<Components>,
    /// Lower-triangular Cholesky factor of the kernel covariance.
    cholesky: Matrix,
    /// `ln` of the Gaussian normalising constant, shared by every kernel.
    log_norm: f64,
}

impl GaussianKde {
    /// Fit the estimator to `samples` with the given bandwidth factor.
    ///
    /// # Errors
    /// Returns [`DensityError::TooFewSamples`] when there are no more samples
    /// than dimensions and [`DensityError::SingularCovariance`] when the
    /// scaled covariance has no Cholesky factorisation.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "the normalising constant combines logarithms"
    )]
    pub(crate) fn fit(samples: &[FlavourVector], bandwidth: f64) -> Result<Self, DensityError> {
        if samples.len() <= FLAVOUR_DIMENSIONS {
            return Err(DensityError::TooFewSamples {
                samples: samples.len(),
                dimensions: FLAVOUR_DIMENSIONS,
            });
        }
        let covariance = scaled_covariance(samples, bandwidth);
        let cholesky = cholesky(&covariance).ok_or(DensityError::SingularCovariance)?;
        let log_det: f64 = diagonal(&cholesky).map(f64::ln).sum::<f64>() * 2.0;
        let log_norm = -0.5 * ((FLAVOUR_DIMENSIONS as f64) * (2.0 * PI).ln() + log_det);
        if !log_norm.is_finite() {
            return Err(DensityError::SingularCovariance);
        }
        Ok(Self {
            samples: samples.iter().map(|v| *v.as_array()).collect(),
            cholesky,
            log_norm,
        })
    }

    /// Density of the fitted distribution at `point`.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "the density averages Gaussian kernels over the sample"
    )]
    pub(crate) fn evaluate(&self, point: &Components) -> f64 {
        let total: f64 = self
            .samples
            .iter()
            .map(|sample| {
                let distance = self.mahalanobis_squared(point, sample);
                (self.log_norm - 0.5 * distance).exp()
            })
            .sum();
        total / self.samples.len() as f64
    }

    /// `(a - b)ᵀ Σ⁻¹ (a - b)` via forward substitution on the Cholesky factor.
    #[expect(
        clippy::float_arithmetic,
        clippy::indexing_slicing,
        reason = "triangular solve over fixed-size arrays bounded by FLAVOUR_DIMENSIONS"
    )]
    fn mahalanobis_squared(&self, a: &Components, b: &Components) -> f64 {
        let mut solved = [0.0_f64; FLAVOUR_DIMENSIONS];
        for row in 0..FLAVOUR_DIMENSIONS {
            let mut residual = a[row] - b[row];
            for col in 0..row {
                residual -= self.cholesky[row][col] * solved[col];
            }
            solved[row] = residual / self.cholesky[row][row];
        }
        solved.iter().map(|value| value * value).sum()
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::indexing_slicing,
    reason = "covariance accumulates outer products over fixed-size arrays"
)]
fn scaled_covariance(samples: &[FlavourVector], bandwidth: f64) -> Matrix {
    let centre = mean(samples);
    let mut covariance = [[0.0_f64; FLAVOUR_DIMENSIONS]; FLAVOUR_DIMENSIONS];
    for sample in samples {
        let values = sample.as_array();
        for row in 0..FLAVOUR_DIMENSIONS {
            for col in 0..=row {
                covariance[row][col] += (values[row] - centre[row]) * (values[col] - centre[col]);
            }
        }
    }
    let factor = bandwidth * bandwidth / (samples.len() as f64 - 1.0);
    for row in 0..FLAVOUR_DIMENSIONS {
        for col in 0..=row {
            let value = covariance[row][col] * factor;
            covariance[row][col] = value;
            covariance[col][row] = value;
        }
    }
    covariance
}

/// Lower-triangular `L` with `L Lᵀ = matrix`, or `None` when `matrix` is not
/// positive definite.
#[expect(
    clippy::float_arithmetic,
    clippy::indexing_slicing,
    reason = "Cholesky factorisation over fixed-size arrays bounded by FLAVOUR_DIMENSIONS"
)]
fn cholesky(matrix: &Matrix) -> Option<Matrix> {
    let mut lower = [[0.0_f64; FLAVOUR_DIMENSIONS]; FLAVOUR_DIMENSIONS];
    for row in 0..FLAVOUR_DIMENSIONS {
        for col in 0..=row {
            let mut sum = matrix[row][col];
            for k in 0..col {
                sum -= lower[row][k] * lower[col][k];
            }
            if row == col {
                if sum <= 0.0 || !sum.is_finite() {
                    return None;
                }
                lower[row][col] = sum.sqrt();
            } else {
                lower[row][col] = sum / lower[col][col];
            }
        }
    }
    Some(lower)
}

fn diagonal(matrix: &Matrix) -> impl Iterator<Item = f64> + '_ {
    matrix
        .iter()
        .enumerate()
        .filter_map(|(index, row)| row.get(index).copied())
}
