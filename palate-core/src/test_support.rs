//! Test-only catalog builders shared by unit and behaviour tests.

use crate::{Catalog, ClusterLabel, Dish, FlavourVector};

/// Build a flavour vector, substituting zeros for non-finite input.
#[must_use]
pub fn flavour(components: [f64; 5]) -> FlavourVector {
    FlavourVector::new(components).unwrap_or_default()
}

/// Build a catalog from `(id, cluster, components)` rows.
///
/// Rows with a repeated identifier are dropped after the first occurrence so
/// fixtures never fail to construct.
#[must_use]
pub fn catalog_from_rows(rows: &[(&str, u32, [f64; 5])]) -> Catalog {
    let mut dishes: Vec<Dish> = Vec::with_capacity(rows.len());
    for &(id, cluster, components) in rows {
        if dishes.iter().any(|dish| dish.id.as_str() == id) {
            continue;
        }
        dishes.push(Dish::new(id, flavour(components), ClusterLabel(cluster)));
    }
    Catalog::new(dishes).unwrap_or_default()
}

/// Deterministic catalog of `clusters × per_cluster` dishes named
/// `c{cluster}-d{index}`.
///
/// Each cluster leans on a different flavour axis and members spread along
/// every axis, giving a non-degenerate covariance whenever a cluster has more
/// than five members.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "fixture data is generated from small integer grids"
)]
pub fn spread_catalog(clusters: u32, per_cluster: u32) -> Catalog {
    let mut dishes = Vec::new();
    for cluster in 0..clusters {
        for index in 0..per_cluster {
            let step = f64::from(index);
            let base = f64::from(cluster % 5);
            let mut components = [0.1_f64; 5];
            for (axis, value) in components.iter_mut().enumerate() {
                let axis_f = axis as f64;
                let wobble = ((step + 1.0) * (axis_f + 1.7)).sin().abs() * 0.3;
                *value = if axis_f == base { 0.6 + wobble } else { wobble };
            }
            dishes.push(Dish::new(
                format!("c{cluster}-d{index}"),
                flavour(components),
                ClusterLabel(cluster),
            ));
        }
    }
    Catalog::new(dishes).unwrap_or_default()
}
