//! Split a cluster's share of the result between top-ranked picks and
//! wildcards drawn from just below them.

use crate::cluster::DishScore;

/// How many regular and wildcard slots a cluster receives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionQuota {
    /// Slots filled from the top of the ranking.
    pub regular: usize,
    /// Slots filled from the positions immediately after the regular ones.
    pub wildcards: usize,
}

impl SelectionQuota {
    /// Derive the quota for a cluster holding `weight` of the liked dishes.
    ///
    /// `regular = floor((1 - ratio) × weight × total)` and
    /// `wildcards = floor(ratio × weight × total)`, each product evaluated
    /// left to right. Flooring means a cluster with a small weight can
    /// receive no slots at all, and a product landing just below an integer
    /// loses that slot.
    ///
    /// # Examples
    /// ```
    /// use palate_scorer::SelectionQuota;
    ///
    /// let quota = SelectionQuota::from_weight(0.5, 10, 0.2);
    /// assert_eq!(quota.regular, 4);
    /// assert_eq!(quota.wildcards, 1);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "slot counts floor a non-negative product bounded by the total"
    )]
    pub fn from_weight(weight: f64, total: usize, wildcard_ratio: f64) -> Self {
        let floor_slots = |fraction: f64| -> usize {
            let slots = (fraction * weight * total as f64).floor();
            if slots.is_finite() && slots > 0.0 {
                (slots as usize).min(total)
            } else {
                0
            }
        };
        Self {
            regular: floor_slots(1.0 - wildcard_ratio),
            wildcards: floor_slots(wildcard_ratio),
        }
    }

    /// Total slots across both kinds.
    #[must_use]
    pub const fn slots(self) -> usize {
        self.regular.saturating_add(self.wildcards)
    }
}

/// The dishes a cluster contributes to the final list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// Top-ranked members.
    pub regular: Vec<DishScore>,
    /// Members ranked directly after the regular picks.
    pub wildcards: Vec<DishScore>,
}

impl Selection {
    /// Chain regular picks followed by wildcards.
    pub fn into_dishes(self) -> impl Iterator<Item = DishScore> {
        self.regular.into_iter().chain(self.wildcards)
    }

    /// Number of selected dishes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.regular.len().saturating_add(self.wildcards.len())
    }

    /// Report whether nothing was selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.regular.is_empty() && self.wildcards.is_empty()
    }
}

/// Take `quota.regular` dishes from the head of `ranked` and the next
/// `quota.wildcards` as wildcards.
///
/// A cluster with fewer members than its quota yields what it has; the
/// shortfall is not redistributed.
#[must_use]
pub fn select(ranked: &[DishScore], quota: SelectionQuota) -> Selection {
    let mut members = ranked.iter().cloned();
    let regular: Vec<DishScore> = members.by_ref().take(quota.regular).collect();
    let wildcards: Vec<DishScore> = members.take(quota.wildcards).collect();
    Selection { regular, wildcards }
}
