//! Turn a liked-dish set into per-cluster preference weights.

use std::collections::BTreeMap;

use palate_core::{Catalog, ClusterLabel, LikedDishes};

/// Normalised share of liked dishes falling in each cluster.
///
/// Only clusters holding at least one liked dish appear. Weights lie in
/// `(0, 1]` and sum to one unless the map is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterWeights(BTreeMap<ClusterLabel, f64>);

impl ClusterWeights {
    /// Weight of `label`, if it holds any liked dish.
    #[must_use]
    pub fn get(&self, label: ClusterLabel) -> Option<f64> {
        self.0.get(&label).copied()
    }

    /// Iterate `(label, weight)` pairs in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (ClusterLabel, f64)> + '_ {
        self.0.iter().map(|(label, weight)| (*label, *weight))
    }

    /// Number of weighted clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Report whether no liked dish resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Count liked dishes per cluster and normalise the counts by their total.
///
/// Liked identifiers missing from `catalog` are ignored. When nothing
/// resolves the result is empty.
///
/// # Examples
/// ```
/// use palate_core::{ClusterLabel, LikedDishes, test_support::catalog_from_rows};
/// use palate_scorer::cluster_weights;
///
/// let catalog = catalog_from_rows(&[
///     ("pho", 0, [0.1, 0.0, 0.0, 0.0, 0.9]),
///     ("laksa", 0, [0.2, 0.0, 0.1, 0.0, 0.8]),
///     ("mochi", 1, [0.0, 0.0, 0.9, 0.0, 0.0]),
/// ]);
/// let liked = LikedDishes::from_iter(["pho", "laksa", "mochi", "ghost"]);
/// let weights = cluster_weights(&catalog, &liked);
/// assert_eq!(weights.len(), 2);
/// assert!((weights.get(ClusterLabel(0)).unwrap_or_default() - 2.0 / 3.0).abs() < 1e-12);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "weights divide per-cluster counts by the total liked count"
)]
pub fn cluster_weights(catalog: &Catalog, liked: &LikedDishes) -> ClusterWeights {
    let mut counts: BTreeMap<ClusterLabel, usize> = BTreeMap::new();
    for dish in liked.resolve(catalog) {
        *counts.entry(dish.cluster).or_default() += 1;
    }
    let total: usize = counts.values().sum();
    if total == 0 {
        log::debug!(
            "none of {} liked dishes resolved in the catalog",
            liked.len()
        );
        return ClusterWeights::default();
    }
    let total_f = total as f64;
    ClusterWeights(
        counts
            .into_iter()
            .map(|(label, count)| (label, count as f64 / total_f))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use palate_core::test_support::spread_catalog;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> Catalog {
        spread_catalog(3, 4)
    }

    #[rstest]
    fn empty_liked_set_yields_no_weights(catalog: Catalog) {
        assert!(cluster_weights(&catalog, &LikedDishes::new()).is_empty());
    }

    #[rstest]
    fn unknown_ids_yield_no_weights(catalog: Catalog) {
        let liked = LikedDishes::from_iter(["nope", "also nope"]);
        assert!(cluster_weights(&catalog, &liked).is_empty());
    }

    #[rstest]
    fn weights_are_proportional_to_counts(catalog: Catalog) {
        let liked = LikedDishes::from_iter(["c0-d0", "c0-d1", "c0-d2", "c2-d0"]);
        let weights = cluster_weights(&catalog, &liked);
        assert_eq!(weights.get(ClusterLabel(0)), Some(0.75));
        assert_eq!(weights.get(ClusterLabel(1)), None);
        assert_eq!(weights.get(ClusterLabel(2)), Some(0.25));
        let sum: f64 = weights.iter().map(|(_, weight)| weight).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }
}
