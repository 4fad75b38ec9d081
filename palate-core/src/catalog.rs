//! The flavour catalog: a read-only, strongly typed table of dishes.
//!
//! A catalog preserves the order dishes were supplied in. That order is the
//! tie-break used by scoring, so loading the same file always yields the
//! same ranking.

use std::collections::{BTreeSet, HashMap};

use thiserror::Error;

use crate::{ClusterLabel, Dish, DishId};

/// Errors returned by [`Catalog::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two dishes shared an identifier.
    #[error("dish '{id}' appears more than once in the catalog")]
    DuplicateDish {
        /// Repeated identifier.
        id: DishId,
    },
}

/// Snapshot of every dish available for recommendation.
///
/// # Examples
/// ```
/// use palate_core::{Catalog, ClusterLabel, Dish, FlavourVector};
///
/// # fn main() -> Result<(), palate_core::CatalogError> {
/// let flavour = FlavourVector::default();
/// let catalog = Catalog::new(vec![
///     Dish::new("a", flavour, ClusterLabel(0)),
///     Dish::new("b", flavour, ClusterLabel(1)),
/// ])?;
/// assert_eq!(catalog.len(), 2);
/// assert!(catalog.get("b").is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    dishes: Vec<Dish>,
    index: HashMap<DishId, usize>,
}

impl Catalog {
    /// Validate and construct a catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateDish`] when an identifier repeats.
    pub fn new(dishes: Vec<Dish>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(dishes.len());
        for (position, dish) in dishes.iter().enumerate() {
            if index.insert(dish.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateDish {
                    id: dish.id.clone(),
                });
            }
        }
        Ok(Self { dishes, index })
    }

    /// Look up a dish by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Dish> {
        self.position(id).and_then(|position| self.dishes.get(position))
    }

    /// Catalog position of a dish, if present.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Report whether the catalog holds `id`.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of dishes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.dishes.len()
    }

    /// Report whether the catalog is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Iterate dishes in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Dish> {
        self.dishes.iter()
    }

    /// Borrow the dishes as a slice.
    #[must_use]
    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    /// Members of one cluster in catalog order.
    pub fn cluster_members(&self, label: ClusterLabel) -> impl Iterator<Item = &Dish> + '_ {
        self.dishes.iter().filter(move |dish| dish.cluster == label)
    }

    /// Every cluster label present, in ascending order.
    #[must_use]
    pub fn clusters(&self) -> BTreeSet<ClusterLabel> {
        self.dishes.iter().map(|dish| dish.cluster).collect()
    }
}

impl TryFrom<Vec<Dish>> for Catalog {
    type Error = CatalogError;

    fn try_from(dishes: Vec<Dish>) -> Result<Self, Self::Error> {
        Self::new(dishes)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Dish;
    type IntoIter = std::slice::Iter<'a, Dish>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Catalog {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.dishes.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Catalog {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dishes = Vec::<Dish>::deserialize(deserializer)?;
        Self::new(dishes).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlavourVector;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> Catalog {
        let flavour = FlavourVector::default();
        Catalog::new(vec![
            Dish::new("tom yum", flavour, ClusterLabel(2)),
            Dish::new("laksa", flavour, ClusterLabel(0)),
            Dish::new("pho", flavour, ClusterLabel(2)),
        ])
        .expect("unique ids")
    }

    #[rstest]
    fn rejects_duplicate_ids() {
        let flavour = FlavourVector::default();
        let err = Catalog::new(vec![
            Dish::new("pho", flavour, ClusterLabel(0)),
            Dish::new("pho", flavour, ClusterLabel(1)),
        ])
        .expect_err("duplicate should fail");
        assert_eq!(
            err,
            CatalogError::DuplicateDish {
                id: DishId::from("pho")
            }
        );
    }

    #[rstest]
    fn cluster_members_keep_catalog_order(catalog: Catalog) {
        let members: Vec<&str> = catalog
            .cluster_members(ClusterLabel(2))
            .map(|dish| dish.id.as_str())
            .collect();
        assert_eq!(members, ["tom yum", "pho"]);
    }

    #[rstest]
    fn clusters_are_sorted(catalog: Catalog) {
        let labels: Vec<ClusterLabel> = catalog.clusters().into_iter().collect();
        assert_eq!(labels, [ClusterLabel(0), ClusterLabel(2)]);
    }

    #[rstest]
    fn lookup_reports_position(catalog: Catalog) {
        assert_eq!(catalog.position("pho"), Some(2));
        assert!(catalog.get("ramen").is_none());
        assert!(!catalog.contains("ramen"));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialisation_rejects_duplicates() {
        let json = r#"[
            {"id":"pho","flavour":{"salty":0.1,"bitter":0.0,"sweet":0.0,"sour":0.0,"umami":0.5},"cluster":0},
            {"id":"pho","flavour":{"salty":0.1,"bitter":0.0,"sweet":0.0,"sour":0.0,"umami":0.5},"cluster":1}
        ]"#;
        let err = serde_json::from_str::<Catalog>(json).expect_err("duplicates rejected");
        assert!(err.to_string().contains("more than once"));
    }
}
