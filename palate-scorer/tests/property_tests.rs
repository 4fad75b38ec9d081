//! Property-based tests for recommendation scoring.
//!
//! # Invariants tested
//!
//! - **Weight normalisation:** cluster weights from a resolving liked set sum
//!   to one.
//! - **Finite metrics:** density, similarity and distance are finite for
//!   every scored dish.
//! - **Determinism:** identical inputs give identical output.
//! - **Length bound:** results never exceed `total_recommendations`.
//! - **Post-filter:** no liked dish survives `excluding`.
//! - **Quota bounds:** selections never exceed the cluster's size.

use palate_core::{Catalog, ClusterLabel, Dish, FlavourVector, LikedDishes, RecommendRequest};
use palate_scorer::{SelectionQuota, cluster_weights, recommend, score_cluster, select};
use proptest::prelude::*;

/// Strategy for a catalog of up to forty dishes spread over four clusters.
fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    proptest::collection::vec((0_u32..4, proptest::array::uniform5(0.0_f64..1.0)), 1..40)
        .prop_map(|rows| {
            let dishes: Vec<Dish> = rows
                .into_iter()
                .enumerate()
                .filter_map(|(index, (cluster, components))| {
                    let flavour = FlavourVector::new(components).ok()?;
                    Some(Dish::new(
                        format!("dish-{index}"),
                        flavour,
                        ClusterLabel(cluster),
                    ))
                })
                .collect();
            Catalog::new(dishes).unwrap_or_default()
        })
}

/// Strategy for a liked set drawn from catalog-style ids plus strays.
fn liked_strategy() -> impl Strategy<Value = LikedDishes> {
    proptest::collection::vec(0_usize..50, 0..12).prop_map(|indices| {
        indices
            .into_iter()
            .map(|index| format!("dish-{index}"))
            .collect()
    })
}

fn request_strategy() -> impl Strategy<Value = RecommendRequest> {
    (liked_strategy(), 1_usize..20, 0.0_f64..=1.0, 0.05_f64..2.0).prop_map(
        |(liked, total, ratio, bandwidth)| {
            RecommendRequest::new(liked)
                .with_total(total)
                .with_wildcard_ratio(ratio)
                .with_bandwidth(bandwidth)
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: weights of a resolving liked set sum to one.
    #[test]
    fn weights_sum_to_one(catalog in catalog_strategy(), liked in liked_strategy()) {
        let weights = cluster_weights(&catalog, &liked);
        if !weights.is_empty() {
            let sum: f64 = weights.iter().map(|(_, weight)| weight).sum();
            prop_assert!((sum - 1.0).abs() < 1e-9, "weights sum to {sum}");
            prop_assert!(weights.iter().all(|(_, weight)| weight > 0.0 && weight <= 1.0));
        }
    }

    /// Property: every scoring signal is finite.
    #[test]
    fn scoring_signals_are_finite(catalog in catalog_strategy(), bandwidth in 0.05_f64..2.0) {
        for label in catalog.clusters() {
            let scored = score_cluster(&catalog, label, bandwidth);
            for dish in &scored.dishes {
                prop_assert!(dish.similarity.is_finite());
                prop_assert!(dish.density.is_finite());
                prop_assert!(dish.distance.is_finite() && dish.distance >= 0.0);
                prop_assert!(dish.combined.is_finite());
            }
        }
    }

    /// Property: recommendation is deterministic and bounded by the total.
    #[test]
    fn recommendation_is_deterministic_and_bounded(
        catalog in catalog_strategy(),
        request in request_strategy(),
    ) {
        let first = recommend(&catalog, &request).expect("valid request");
        let second = recommend(&catalog, &request).expect("valid request");
        prop_assert_eq!(&first, &second);
        prop_assert!(first.len() <= request.total_recommendations);
        let scores: Vec<f64> = first.iter().map(|dish| dish.score).collect();
        prop_assert!(scores.windows(2).all(|pair| pair.first() >= pair.get(1)));
    }

    /// Property: no liked dish survives the post-filter.
    #[test]
    fn excluding_removes_liked_dishes(
        catalog in catalog_strategy(),
        request in request_strategy(),
    ) {
        let filtered = recommend(&catalog, &request)
            .expect("valid request")
            .excluding(&request.liked);
        prop_assert!(filtered.iter().all(|dish| !request.liked.contains(dish.id.as_str())));
    }

    /// Property: selections never exceed the quota or the cluster's size.
    #[test]
    fn selection_respects_cluster_size(
        catalog in catalog_strategy(),
        weight in 0.0_f64..=1.0,
        total in 1_usize..30,
        ratio in 0.0_f64..=1.0,
    ) {
        let quota = SelectionQuota::from_weight(weight, total, ratio);
        prop_assert!(quota.slots() <= total);
        for label in catalog.clusters() {
            let scored = score_cluster(&catalog, label, 0.1);
            let selection = select(&scored.dishes, quota);
            prop_assert!(selection.regular.len() <= quota.regular);
            prop_assert!(selection.wildcards.len() <= quota.wildcards);
            prop_assert!(selection.len() <= scored.len());
        }
    }
}
