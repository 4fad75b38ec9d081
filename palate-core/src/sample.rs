//! Random catalog sampling used to present fresh dishes for liking.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::{Catalog, DishId, LikedDishes};

/// Number of dishes offered for liking when no count is given.
pub const DEFAULT_SAMPLE_SIZE: usize = 20;

/// Draw up to `count` distinct dishes that are not in `exclude`.
///
/// When no more than `count` dishes remain, every remaining dish is returned
/// in catalog order. Otherwise a uniform sample without replacement is drawn
/// from `rng`; pass a seeded generator for reproducible output.
///
/// # Examples
/// ```
/// use palate_core::{Catalog, ClusterLabel, Dish, FlavourVector, LikedDishes, sample_dishes};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// # fn main() -> Result<(), palate_core::CatalogError> {
/// let flavour = FlavourVector::default();
/// let catalog = Catalog::new(vec![
///     Dish::new("pho", flavour, ClusterLabel(0)),
///     Dish::new("laksa", flavour, ClusterLabel(0)),
/// ])?;
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let sampled = sample_dishes(&catalog, 5, &LikedDishes::from_iter(["pho"]), &mut rng);
/// assert_eq!(sampled.len(), 1);
/// # Ok(())
/// # }
/// ```
pub fn sample_dishes<R: Rng + ?Sized>(
    catalog: &Catalog,
    count: usize,
    exclude: &LikedDishes,
    rng: &mut R,
) -> Vec<DishId> {
    let available: Vec<&DishId> = catalog
        .iter()
        .map(|dish| &dish.id)
        .filter(|id| !exclude.contains(id.as_str()))
        .collect();
    if available.len() <= count {
        return available.into_iter().cloned().collect();
    }
    available
        .choose_multiple(rng, count)
        .map(|id| (*id).clone())
        .collect()
}
