//! Recommendation selection for the detail overlay.
//!
//! Same-genre candidates go first in shuffled order, then the rest of the
//! pool tops the result up. The shuffle is injected so callers can make the
//! order deterministic.

use rand::seq::SliceRandom;

use crate::state::{CatalogItem, ItemId};

/// Pick up to `target_count` items from `pool`.
///
/// The item with `exclude_id` is never chosen and no item is chosen twice.
/// Returns fewer than `target_count` items when the pool runs out.
pub fn select_recommendations<'a, P, S>(
    pool: &'a [CatalogItem],
    exclude_id: ItemId,
    same_genre: P,
    target_count: usize,
    mut shuffle: S,
) -> Vec<&'a CatalogItem>
where
    P: Fn(&CatalogItem) -> bool,
    S: FnMut(&mut [&'a CatalogItem]),
{
    let mut seen = Vec::<ItemId>::new();
    let candidates: Vec<&CatalogItem> = pool
        .iter()
        .filter(|item| item.id != exclude_id)
        .filter(|item| {
            // Collections are views; guard against the same id appearing twice.
            if seen.contains(&item.id) {
                false
            } else {
                seen.push(item.id);
                true
            }
        })
        .collect();

    let (mut matching, mut others): (Vec<_>, Vec<_>) =
        candidates.into_iter().partition(|item| same_genre(item));

    shuffle(&mut matching);
    let mut result = matching;
    if result.len() < target_count {
        shuffle(&mut others);
        result.extend(others);
    }
    result.truncate(target_count);
    result
}

/// Film recommendations drawn from the film collection; series get none.
pub fn recommend_for(
    item: &CatalogItem,
    films: &[CatalogItem],
    target_count: usize,
) -> Vec<CatalogItem> {
    if !item.is_film() {
        return Vec::new();
    }
    let mut rng = rand::rng();
    select_recommendations(
        films,
        item.id,
        |candidate| candidate.same_genre(item),
        target_count,
        |slice| slice.shuffle(&mut rng),
    )
    .into_iter()
    .cloned()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{test_item, ItemKind};
    use std::collections::HashSet;

    fn keep_order(_: &mut [&CatalogItem]) {}

    fn films(specs: &[(ItemId, &str)]) -> Vec<CatalogItem> {
        specs
            .iter()
            .map(|(id, genre)| test_item(*id, ItemKind::Film, genre))
            .collect()
    }

    #[test]
    fn test_drama_scenario_takes_three_same_genre() {
        let pool = films(&[
            (7, "Drama"),
            (1, "Drama"),
            (2, "Comedy"),
            (3, "Drama"),
            (4, "Drama"),
            (5, "Action"),
            (6, "Drama"),
            (8, "Drama"),
        ]);
        let source = pool[0].clone();
        let picked = recommend_for(&source, &pool, 3);
        assert_eq!(picked.len(), 3);
        assert!(picked.iter().all(|item| item.genre == "Drama"));
        assert!(picked.iter().all(|item| item.id != 7));
        let ids: HashSet<_> = picked.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_tops_up_from_other_genres() {
        let pool = films(&[(1, "Drama"), (2, "Drama"), (3, "Comedy"), (4, "Action")]);
        let picked = select_recommendations(&pool, 1, |c| c.genre == "Drama", 3, keep_order);
        let ids: Vec<_> = picked.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_same_genre_shuffled_before_top_up() {
        let pool = films(&[(1, "Drama"), (2, "Drama"), (3, "Drama"), (4, "Comedy")]);
        let picked =
            select_recommendations(&pool, 1, |c| c.genre == "Drama", 3, |slice| slice.reverse());
        let ids: Vec<_> = picked.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![3, 2, 4]);
    }

    #[test]
    fn test_exhausted_pool_returns_fewer() {
        let pool = films(&[(1, "Drama"), (2, "Comedy")]);
        let picked = select_recommendations(&pool, 1, |c| c.genre == "Drama", 3, keep_order);
        assert_eq!(picked.len(), 1);

        let lonely = films(&[(1, "Drama")]);
        assert!(recommend_for(&lonely[0], &lonely, 3).is_empty());
    }

    #[test]
    fn test_series_never_recommend() {
        let show = test_item(50, ItemKind::Series, "Drama");
        let pool = films(&[(1, "Drama"), (2, "Drama"), (3, "Drama")]);
        assert!(recommend_for(&show, &pool, 3).is_empty());
    }

    #[test]
    fn test_duplicate_ids_in_pool_are_collapsed() {
        let pool = films(&[(1, "Drama"), (2, "Drama"), (2, "Drama"), (3, "Comedy")]);
        let picked = select_recommendations(&pool, 1, |c| c.genre == "Drama", 3, keep_order);
        let ids: Vec<_> = picked.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_random_selection_respects_invariants() {
        let pool = films(&[
            (1, "Drama"),
            (2, "Comedy"),
            (3, "Drama"),
            (4, "Action"),
            (5, "Comedy"),
        ]);
        for _ in 0..50 {
            let picked = recommend_for(&pool[0], &pool, 3);
            assert_eq!(picked.len(), 3);
            assert_eq!(picked[0].id, 3);
            let ids: HashSet<_> = picked.iter().map(|item| item.id).collect();
            assert_eq!(ids.len(), 3);
            assert!(!ids.contains(&1));
        }
    }
}
