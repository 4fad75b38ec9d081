//! The set of dishes a user has explicitly liked.

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Catalog, Dish, DishId};

/// Order-irrelevant set of liked dish identifiers.
///
/// Identifiers need not exist in any catalog; unresolved entries are simply
/// ignored by the weighting step.
///
/// # Examples
/// ```
/// use palate_core::LikedDishes;
///
/// let mut liked = LikedDishes::from_iter(["pho", "laksa"]);
/// assert!(liked.contains("pho"));
/// assert!(!liked.toggle("pho"));
/// assert!(!liked.contains("pho"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct LikedDishes(BTreeSet<DishId>);

impl LikedDishes {
    /// Construct an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Add a dish; returns `true` when it was not already liked.
    pub fn insert(&mut self, id: impl Into<DishId>) -> bool {
        self.0.insert(id.into())
    }

    /// Remove a dish; returns `true` when it was liked.
    pub fn remove(&mut self, id: &str) -> bool {
        self.0.remove(id)
    }

    /// Flip the liked state of a dish and return whether it is now liked.
    pub fn toggle(&mut self, id: impl Into<DishId>) -> bool {
        let dish_id = id.into();
        if self.0.remove(dish_id.as_str()) {
            false
        } else {
            self.0.insert(dish_id);
            true
        }
    }

    /// Report whether `id` is liked.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Number of liked identifiers, resolved or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Report whether nothing is liked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate identifiers in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &DishId> + '_ {
        self.0.iter()
    }

    /// Liked dishes that resolve in `catalog`, in catalog order.
    pub fn resolve<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a Dish> + 'a {
        catalog
            .iter()
            .filter(move |dish| self.contains(dish.id.as_str()))
    }
}

impl<T: Into<DishId>> FromIterator<T> for LikedDishes {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<DishId>> Extend<T> for LikedDishes {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}
