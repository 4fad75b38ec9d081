//! Flavour-profile scoring for Palate dish recommendations.
//!
//! Recommendation runs as a pipeline over an immutable catalog snapshot:
//!
//! 1. [`cluster_weights`] turns the liked set into each cluster's share of
//!    the user's preferences.
//! 2. [`score_cluster`] ranks every member of a preferred cluster by the
//!    sum of its kernel density and cosine similarity to the cluster profile,
//!    minus its scaled distance from that profile.
//! 3. [`SelectionQuota`] and [`select`] split the cluster's weighted share of
//!    the result into top-ranked picks and wildcards taken from just below
//!    them.
//! 4. [`aggregate`] merges the selections and keeps the best overall.
//!
//! [`recommend`] runs the whole pipeline and [`KdeRecommender`] exposes it
//! through the [`Recommender`](palate_core::Recommender) trait.
//!
//! # Examples
//!
//! ```
//! use palate_core::{LikedDishes, RecommendRequest, test_support::spread_catalog};
//! use palate_scorer::recommend;
//!
//! let catalog = spread_catalog(2, 10);
//! let liked = LikedDishes::from_iter(["c0-d0", "c0-d1"]);
//! let request = RecommendRequest::new(liked.clone()).with_total(5);
//! let result = recommend(&catalog, &request)?.excluding(&liked);
//! assert!(result.len() <= 5);
//! # Ok::<(), palate_core::RecommendError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use palate_core::{Catalog, RecommendError, RecommendRequest, Recommendation, Recommender};

mod aggregate;
mod cluster;
mod density;
mod geometry;
mod selection;
mod weighting;

pub use aggregate::aggregate;
pub use cluster::{DensitySource, DishScore, ScoredCluster, score_cluster};
pub use density::DensityError;
pub use selection::{Selection, SelectionQuota, select};
pub use weighting::{ClusterWeights, cluster_weights};

/// Rank catalog dishes for the liked set and parameters in `request`.
///
/// The request is validated before any scoring. Liked dishes are not
/// removed from the result; apply
/// [`Recommendation::excluding`](palate_core::Recommendation::excluding)
/// with the same liked set to drop them.
///
/// # Errors
/// Returns [`RecommendError::InvalidRequest`] when `total_recommendations`
/// is zero, `wildcard_ratio` lies outside `[0, 1]` or `bandwidth` is not a
/// positive finite number.
pub fn recommend(
    catalog: &Catalog,
    request: &RecommendRequest,
) -> Result<Recommendation, RecommendError> {
    request.validate()?;
    let weights = cluster_weights(catalog, &request.liked);
    if weights.is_empty() {
        return Ok(Recommendation::default());
    }

    let selections: Vec<Selection> = weights
        .iter()
        .map(|(label, weight)| {
            let quota = SelectionQuota::from_weight(
                weight,
                request.total_recommendations,
                request.wildcard_ratio,
            );
            log::debug!(
                "{label}: weight {weight:.3}, {} regular and {} wildcard slots",
                quota.regular,
                quota.wildcards
            );
            if quota.slots() == 0 {
                return Selection::default();
            }
            let scored = score_cluster(catalog, label, request.bandwidth);
            select(&scored.dishes, quota)
        })
        .collect();

    let recommendation = aggregate(selections, request.total_recommendations);
    log::debug!(
        "recommended {} of at most {} dishes",
        recommendation.len(),
        request.total_recommendations
    );
    Ok(recommendation)
}

/// [`Recommender`] backed by per-cluster Gaussian kernel density scoring.
///
/// The recommender holds no state; one instance can serve concurrent
/// requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KdeRecommender;

impl KdeRecommender {
    /// Construct the recommender.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Recommender for KdeRecommender {
    fn recommend(
        &self,
        catalog: &Catalog,
        request: &RecommendRequest,
    ) -> Result<Recommendation, RecommendError> {
        recommend(catalog, request)
    }
}
