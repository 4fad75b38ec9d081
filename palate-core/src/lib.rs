//! Core domain types for the Palate dish recommendation engine.
//!
//! The crate models the flavour catalog, the user's liked-dish set, the
//! parameters of a recommendation request and the ranked result. Scoring
//! lives in `palate-scorer`; this crate only defines the seam through the
//! [`Recommender`] trait. Constructors validate their input and return
//! `Result` so malformed data is caught before any scoring runs.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod dish;
pub mod flavour;
pub mod liked;
pub mod recommender;
pub mod sample;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{Catalog, CatalogError};
pub use dish::{ClusterLabel, Dish, DishId};
pub use flavour::{FLAVOUR_DIMENSIONS, FlavourAxis, FlavourVector, FlavourVectorError};
pub use liked::LikedDishes;
pub use recommender::{
    DEFAULT_BANDWIDTH, DEFAULT_TOTAL_RECOMMENDATIONS, DEFAULT_WILDCARD_RATIO, RecommendError,
    RecommendRequest, RecommendRequestError, Recommendation, Recommender, ScoredDish,
};
pub use sample::{DEFAULT_SAMPLE_SIZE, sample_dishes};
pub use store::{RecommendationKey, RecommendationStore};
