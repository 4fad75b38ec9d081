//! Merge per-cluster selections into one ranked recommendation.

use palate_core::{Recommendation, ScoredDish};

use crate::cluster::DishScore;
use crate::selection::Selection;

/// Concatenate `selections` in order, sort by descending combined score and
/// keep the first `total`.
///
/// The sort is stable: equal scores keep their concatenation order, which is
/// ascending cluster label, regular picks before wildcards, then rank within
/// the cluster.
#[must_use]
pub fn aggregate<I>(selections: I, total: usize) -> Recommendation
where
    I: IntoIterator<Item = Selection>,
{
    let mut pooled: Vec<DishScore> = selections
        .into_iter()
        .flat_map(Selection::into_dishes)
        .collect();
    pooled.sort_by(|a, b| b.combined.total_cmp(&a.combined));
    pooled.truncate(total);
    if pooled.is_empty() {
        log::debug!("no cluster contributed any dish");
    }
    Recommendation::new(
        pooled
            .into_iter()
            .map(|score| ScoredDish {
                id: score.id,
                score: score.combined,
                cluster: score.cluster,
            })
            .collect(),
    )
}
