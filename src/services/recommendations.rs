use std::cmp::Ordering;

use crate::models::GameRecord;

/// Picks games worth suggesting from another user's unique library
///
/// Keeps favorites and games rated at least `min_rating`. Favorites come
/// first, then higher ratings; unrated games sink to the end of their group.
/// The sort is stable, so ties keep the pool's order.
pub fn select_recommendations(
    pool: &[&GameRecord],
    min_rating: f64,
    limit: usize,
) -> Vec<GameRecord> {
    let mut picks: Vec<&GameRecord> = pool
        .iter()
        .copied()
        .filter(|game| game.is_favorite || game.user_rating.is_some_and(|r| r >= min_rating))
        .collect();

    picks.sort_by(|a, b| {
        b.is_favorite
            .cmp(&a.is_favorite)
            .then_with(|| compare_ratings_desc(a.user_rating, b.user_rating))
    });

    picks.into_iter().take(limit).cloned().collect()
}

fn compare_ratings_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
