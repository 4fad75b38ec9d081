//! Dishes and the identifiers attached to them.

use std::borrow::Borrow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::FlavourVector;

/// Unique string key naming a dish in the catalog.
///
/// # Examples
/// ```
/// use palate_core::DishId;
///
/// let id = DishId::from("pad thai");
/// assert_eq!(id.as_str(), "pad thai");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct DishId(String);

impl DishId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DishId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DishId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for DishId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Flavour cluster assigned to a dish by the external clustering step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ClusterLabel(pub u32);

impl fmt::Display for ClusterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cluster {}", self.0)
    }
}

/// A dish with its taste profile and cluster assignment.
///
/// # Examples
/// ```
/// use palate_core::{ClusterLabel, Dish, FlavourVector};
///
/// let flavour = FlavourVector::new([0.6, 0.0, 0.1, 0.0, 0.8]).expect("finite");
/// let dish = Dish::new("ramen", flavour, ClusterLabel(2));
/// assert_eq!(dish.id.as_str(), "ramen");
/// assert_eq!(dish.cluster, ClusterLabel(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dish {
    /// Catalog key.
    pub id: DishId,
    /// Taste profile.
    pub flavour: FlavourVector,
    /// Cluster the dish belongs to.
    pub cluster: ClusterLabel,
}

impl Dish {
    /// Construct a dish.
    pub fn new(id: impl Into<DishId>, flavour: FlavourVector, cluster: ClusterLabel) -> Self {
        Self {
            id: id.into(),
            flavour,
            cluster,
        }
    }
}
