//! Score every dish of one flavour cluster against the cluster's profile.
//!
//! For each member the scorer combines three signals:
//!
//! - **similarity**: cosine similarity to the cluster's mean flavour vector.
//! - **density**: a Gaussian kernel density estimate at the dish, using all
//!   members as the sample. Small clusters (no more members than flavour
//!   dimensions) and clusters whose covariance is singular cannot support
//!   the estimate; they fall back to reusing the similarity value and the
//!   fallback is recorded in [`ScoredCluster::density_source`].
//! - **distance**: Euclidean distance from the profile after min-max scaling
//!   fitted on the members.
//!
//! `combined = density + similarity - distance`. Distances are scaled per
//! cluster, so combined scores from different clusters share no common
//! scale.

use palate_core::{Catalog, ClusterLabel, DishId, FlavourVector};

use crate::density::{DensityError, GaussianKde};
use crate::geometry::{Components, MinMaxScaler, cosine_similarity, euclidean_distance, mean};

/// How the density column of a [`ScoredCluster`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensitySource {
    /// A kernel density estimate over the cluster members.
    Kernel,
    /// The estimate was unavailable; density repeats the similarity value.
    SimilarityFallback(DensityError),
}

impl DensitySource {
    /// Report whether the degraded similarity fallback was used.
    #[must_use]
    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::SimilarityFallback(_))
    }
}

/// Scoring signals for one cluster member.
#[derive(Debug, Clone, PartialEq)]
pub struct DishScore {
    /// Scored dish.
    pub id: DishId,
    /// Cluster the dish belongs to.
    pub cluster: ClusterLabel,
    /// Cosine similarity to the cluster profile.
    pub similarity: f64,
    /// Kernel density at the dish, or the similarity under fallback.
    pub density: f64,
    /// Scaled Euclidean distance to the cluster profile.
    pub distance: f64,
    /// `density + similarity - distance`.
    pub combined: f64,
}

/// A cluster's members ranked by combined score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCluster {
    /// Cluster label.
    pub label: ClusterLabel,
    /// Mean flavour components over all members.
    pub profile: [f64; palate_core::FLAVOUR_DIMENSIONS],
    /// Whether density came from the kernel estimate.
    pub density_source: DensitySource,
    /// Members sorted by descending combined score; ties keep catalog order.
    pub dishes: Vec<DishScore>,
}

impl ScoredCluster {
    /// Number of scored members.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.dishes.len()
    }

    /// Report whether the cluster had no members.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

/// Score and rank every member of cluster `label` in `catalog`.
///
/// The computation is deterministic: identical catalogs, labels and
/// bandwidths produce bit-identical output.
///
/// # Examples
/// ```
/// use palate_core::{ClusterLabel, test_support::catalog_from_rows};
/// use palate_scorer::score_cluster;
///
/// let catalog = catalog_from_rows(&[
///     ("pho", 0, [0.1, 0.0, 0.0, 0.0, 0.9]),
///     ("laksa", 0, [0.3, 0.0, 0.2, 0.1, 0.7]),
///     ("ramen", 0, [0.5, 0.0, 0.0, 0.0, 0.8]),
/// ]);
/// let scored = score_cluster(&catalog, ClusterLabel(0), 0.1);
/// assert_eq!(scored.len(), 3);
/// assert!(scored.density_source.is_fallback());
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "combined score adds density and similarity and subtracts distance"
)]
pub fn score_cluster(catalog: &Catalog, label: ClusterLabel, bandwidth: f64) -> ScoredCluster {
    let members: Vec<(&DishId, FlavourVector)> = catalog
        .cluster_members(label)
        .map(|dish| (&dish.id, dish.flavour))
        .collect();
    let vectors: Vec<FlavourVector> = members.iter().map(|(_, vector)| *vector).collect();

    let profile = mean(&vectors);
    let scaler = MinMaxScaler::fit(&vectors);
    let scaled_profile = scaler.transform(&profile);
    let (kde, density_source) = fit_density(&vectors, label, bandwidth);

    let mut dishes: Vec<DishScore> = members
        .into_iter()
        .map(|(id, vector)| {
            let point: &Components = vector.as_array();
            let similarity = cosine_similarity(point, &profile);
            let density = kde
                .as_ref()
                .map_or(similarity, |estimate| estimate.evaluate(point));
            let distance = euclidean_distance(&scaler.transform(point), &scaled_profile);
            DishScore {
                id: id.clone(),
                cluster: label,
                similarity,
                density,
                distance,
                combined: density + similarity - distance,
            }
        })
        .collect();
    dishes.sort_by(|a, b| b.combined.total_cmp(&a.combined));

    ScoredCluster {
        label,
        profile,
        density_source,
        dishes,
    }
}

fn fit_density(
    vectors: &[FlavourVector],
    label: ClusterLabel,
    bandwidth: f64,
) -> (Option<GaussianKde>, DensitySource) {
    match GaussianKde::fit(vectors, bandwidth) {
        Ok(kde) => (Some(kde), DensitySource::Kernel),
        Err(reason) => {
            log::warn!(
                "{label} has {} members; density estimate unavailable ({reason}), using similarity as density",
                vectors.len()
            );
            (None, DensitySource::SimilarityFallback(reason))
        }
    }
}
