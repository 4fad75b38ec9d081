//! Facade crate for the Palate dish recommendation engine.
//!
//! This crate re-exports the core domain types and, behind the default
//! `scorer-kde` feature, the kernel density recommender.

#![forbid(unsafe_code)]

pub use palate_core::{
    Catalog, CatalogError, ClusterLabel, DEFAULT_BANDWIDTH, DEFAULT_SAMPLE_SIZE,
    DEFAULT_TOTAL_RECOMMENDATIONS, DEFAULT_WILDCARD_RATIO, Dish, DishId, FLAVOUR_DIMENSIONS,
    FlavourAxis, FlavourVector, FlavourVectorError, LikedDishes, RecommendError,
    RecommendRequest, RecommendRequestError, Recommendation, RecommendationKey,
    RecommendationStore, Recommender, ScoredDish, sample_dishes,
};

#[cfg(feature = "scorer-kde")]
pub use palate_scorer::{KdeRecommender, recommend};
