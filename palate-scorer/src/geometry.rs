//! Vector helpers over flavour space: means, cosine similarity, min-max
//! scaling and Euclidean distance.

use palate_core::{FLAVOUR_DIMENSIONS, FlavourVector};

/// Raw flavour components.
pub(crate) type Components = [f64; FLAVOUR_DIMENSIONS];

/// Arithmetic mean of `vectors`; all zeros for an empty input.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "a mean divides component sums by the member count"
)]
pub(crate) fn mean(vectors: &[FlavourVector]) -> Components {
    let mut sums = [0.0_f64; FLAVOUR_DIMENSIONS];
    for vector in vectors {
        for (sum, value) in sums.iter_mut().zip(vector.as_array()) {
            *sum += value;
        }
    }
    if vectors.is_empty() {
        return sums;
    }
    let count = vectors.len() as f64;
    sums.map(|sum| sum / count)
}

/// Cosine of the angle between `a` and `b`, clamped to `[-1, 1]`.
///
/// A zero-magnitude input has no direction; its similarity is `0.0`.
#[expect(
    clippy::float_arithmetic,
    reason = "cosine similarity divides the dot product by both norms"
)]
pub(crate) fn cosine_similarity(a: &Components, b: &Components) -> f64 {
    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denominator = norm_a.sqrt() * norm_b.sqrt();
    if denominator == 0.0 {
        return 0.0;
    }
    (dot / denominator).clamp(-1.0, 1.0)
}

/// Euclidean distance between two points.
#[expect(
    clippy::float_arithmetic,
    reason = "distance sums squared component differences"
)]
pub(crate) fn euclidean_distance(a: &Components, b: &Components) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Per-dimension affine map onto `[0, 1]` fitted on a sample.
///
/// A dimension with zero range keeps unit scale, so every member maps to
/// `0.0` on that axis instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MinMaxScaler {
    min: Components,
    scale: Components,
}

impl MinMaxScaler {
    /// Fit minima and ranges over `vectors`.
    #[expect(
        clippy::float_arithmetic,
        reason = "fitting computes per-dimension ranges"
    )]
    pub(crate) fn fit(vectors: &[FlavourVector]) -> Self {
        let mut min = [f64::INFINITY; FLAVOUR_DIMENSIONS];
        let mut max = [f64::NEG_INFINITY; FLAVOUR_DIMENSIONS];
        for vector in vectors {
            for ((lo, hi), value) in min.iter_mut().zip(max.iter_mut()).zip(vector.as_array()) {
                *lo = lo.min(*value);
                *hi = hi.max(*value);
            }
        }
        if vectors.is_empty() {
            return Self {
                min: [0.0; FLAVOUR_DIMENSIONS],
                scale: [1.0; FLAVOUR_DIMENSIONS],
            };
        }
        let mut scale = [1.0_f64; FLAVOUR_DIMENSIONS];
        for ((range, lo), hi) in scale.iter_mut().zip(&min).zip(&max) {
            let span = hi - lo;
            if span > 0.0 {
                *range = span;
            }
        }
        Self { min, scale }
    }

    /// Map a point with the fitted minima and ranges.
    #[expect(
        clippy::float_arithmetic,
        reason = "scaling shifts and divides each component"
    )]
    pub(crate) fn transform(&self, point: &Components) -> Components {
        let mut scaled = *point;
        for ((value, lo), range) in scaled.iter_mut().zip(&self.min).zip(&self.scale) {
            *value = (*value - lo) / range;
        }
        scaled
    }
}
