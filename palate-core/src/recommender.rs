//! Recommendation requests, results and the `Recommender` trait.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Catalog, ClusterLabel, DishId, LikedDishes};

/// Default number of dishes requested.
pub const DEFAULT_TOTAL_RECOMMENDATIONS: usize = 10;
/// Default share of each cluster's picks taken from below the top slice.
pub const DEFAULT_WILDCARD_RATIO: f64 = 0.2;
/// Default kernel bandwidth factor for density estimation.
pub const DEFAULT_BANDWIDTH: f64 = 0.1;

/// Parameters for a recommendation request.
///
/// # Examples
/// ```rust
/// use palate_core::{LikedDishes, RecommendRequest};
///
/// let request = RecommendRequest::new(LikedDishes::from_iter(["pho"]));
/// assert_eq!(request.total_recommendations, 10);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecommendRequest {
    /// Dishes the user has liked.
    pub liked: LikedDishes,
    /// Upper bound on the number of dishes returned.
    #[cfg_attr(feature = "serde", serde(default = "default_total"))]
    pub total_recommendations: usize,
    /// Fraction of each cluster's quota reserved for wildcard picks.
    #[cfg_attr(feature = "serde", serde(default = "default_wildcard_ratio"))]
    pub wildcard_ratio: f64,
    /// Scale factor applied to the cluster covariance by the density
    /// estimate.
    #[cfg_attr(feature = "serde", serde(default = "default_bandwidth"))]
    pub bandwidth: f64,
}

#[cfg(feature = "serde")]
const fn default_total() -> usize {
    DEFAULT_TOTAL_RECOMMENDATIONS
}

#[cfg(feature = "serde")]
const fn default_wildcard_ratio() -> f64 {
    DEFAULT_WILDCARD_RATIO
}

#[cfg(feature = "serde")]
const fn default_bandwidth() -> f64 {
    DEFAULT_BANDWIDTH
}

/// Reasons a [`RecommendRequest`] is rejected before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RecommendRequestError {
    /// `total_recommendations` was zero.
    #[error("total_recommendations must be positive")]
    ZeroRecommendations,
    /// `wildcard_ratio` was outside `0.0..=1.0` or not a number.
    #[error("wildcard_ratio must lie within 0.0..=1.0, found {ratio}")]
    WildcardRatioOutOfRange {
        /// Rejected ratio.
        ratio: f64,
    },
    /// `bandwidth` was zero, negative or not finite.
    #[error("bandwidth must be a positive finite number, found {bandwidth}")]
    NonPositiveBandwidth {
        /// Rejected bandwidth.
        bandwidth: f64,
    },
}

impl RecommendRequest {
    /// Build a request with default parameters.
    #[must_use]
    pub const fn new(liked: LikedDishes) -> Self {
        Self {
            liked,
            total_recommendations: DEFAULT_TOTAL_RECOMMENDATIONS,
            wildcard_ratio: DEFAULT_WILDCARD_RATIO,
            bandwidth: DEFAULT_BANDWIDTH,
        }
    }

    /// Set the result bound.
    #[must_use]
    pub const fn with_total(mut self, total_recommendations: usize) -> Self {
        self.total_recommendations = total_recommendations;
        self
    }

    /// Set the wildcard ratio.
    #[must_use]
    pub const fn with_wildcard_ratio(mut self, wildcard_ratio: f64) -> Self {
        self.wildcard_ratio = wildcard_ratio;
        self
    }

    /// Set the density bandwidth.
    #[must_use]
    pub const fn with_bandwidth(mut self, bandwidth: f64) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    /// Check the numeric parameters.
    ///
    /// # Errors
    /// Returns the first [`RecommendRequestError`] found, checking the total,
    /// then the wildcard ratio, then the bandwidth.
    pub fn validate(&self) -> Result<(), RecommendRequestError> {
        if self.total_recommendations == 0 {
            return Err(RecommendRequestError::ZeroRecommendations);
        }
        if !(0.0..=1.0).contains(&self.wildcard_ratio) {
            return Err(RecommendRequestError::WildcardRatioOutOfRange {
                ratio: self.wildcard_ratio,
            });
        }
        if !self.bandwidth.is_finite() || self.bandwidth <= 0.0 {
            return Err(RecommendRequestError::NonPositiveBandwidth {
                bandwidth: self.bandwidth,
            });
        }
        Ok(())
    }
}

/// A dish chosen for recommendation with the score that ranked it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoredDish {
    /// Recommended dish.
    pub id: DishId,
    /// Combined score; higher is more relevant.
    pub score: f64,
    /// Cluster the dish was drawn from.
    pub cluster: ClusterLabel,
}

/// Ranked recommendations, highest score first.
///
/// The engine does not remove liked dishes itself; callers apply
/// [`Recommendation::excluding`] with the request's liked set.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Recommendation {
    dishes: Vec<ScoredDish>,
}

impl Recommendation {
    /// Wrap dishes that are already sorted by descending score.
    #[must_use]
    pub const fn new(dishes: Vec<ScoredDish>) -> Self {
        Self { dishes }
    }

    /// Drop every dish present in `liked`, keeping the remaining order.
    ///
    /// # Examples
    /// ```rust
    /// use palate_core::{ClusterLabel, LikedDishes, Recommendation, ScoredDish};
    ///
    /// let rec = Recommendation::new(vec![
    ///     ScoredDish { id: "pho".into(), score: 2.0, cluster: ClusterLabel(0) },
    ///     ScoredDish { id: "laksa".into(), score: 1.0, cluster: ClusterLabel(0) },
    /// ]);
    /// let filtered = rec.excluding(&LikedDishes::from_iter(["pho"]));
    /// assert_eq!(filtered.len(), 1);
    /// ```
    #[must_use]
    pub fn excluding(self, liked: &LikedDishes) -> Self {
        Self {
            dishes: self
                .dishes
                .into_iter()
                .filter(|dish| !liked.contains(dish.id.as_str()))
                .collect(),
        }
    }

    /// Number of dishes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.dishes.len()
    }

    /// Report whether nothing was recommended.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Iterate dishes in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredDish> {
        self.dishes.iter()
    }

    /// Borrow the ranked dishes.
    #[must_use]
    pub fn dishes(&self) -> &[ScoredDish] {
        &self.dishes
    }

    /// Consume the wrapper and return the ranked dishes.
    #[must_use]
    pub fn into_inner(self) -> Vec<ScoredDish> {
        self.dishes
    }
}

impl<'a> IntoIterator for &'a Recommendation {
    type Item = &'a ScoredDish;
    type IntoIter = std::slice::Iter<'a, ScoredDish>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Errors returned by [`Recommender::recommend`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    /// Request parameters violated the caller contract.
    #[error("invalid recommendation request: {0}")]
    InvalidRequest(#[from] RecommendRequestError),
}

/// Rank catalog dishes for a user's liked set.
///
/// Implementations must validate the request before scoring and return an
/// empty [`Recommendation`], not an error, when no liked dish resolves in
/// the catalog. Recommenders must be `Send + Sync` so a single instance can
/// serve concurrent requests against a shared catalog snapshot.
pub trait Recommender: Send + Sync {
    /// Produce ranked recommendations for `request` against `catalog`.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidRequest`] for malformed parameters.
    fn recommend(
        &self,
        catalog: &Catalog,
        request: &RecommendRequest,
    ) -> Result<Recommendation, RecommendError>;
}
