use std::collections::BTreeMap;

use crate::models::{
    CompatibilityRating, ComparisonResult, GameRecord, GenreOverlap, Platform, PlatformOverlap,
    SharedGame,
};
use crate::services::{matcher, recommendations};

/// Tunable constants of the compatibility score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringPolicy {
    pub platform_bonus: f64,
    pub platform_bonus_cap: f64,
    pub genre_bonus: f64,
    pub genre_bonus_cap: f64,
    pub recommendation_min_rating: f64,
    pub recommendation_limit: usize,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            platform_bonus: 5.0,
            platform_bonus_cap: 15.0,
            genre_bonus: 3.0,
            genre_bonus_cap: 15.0,
            recommendation_min_rating: 8.0,
            recommendation_limit: 6,
        }
    }
}

/// Compares two game libraries from user1's point of view
///
/// The score starts from the share of overlapping titles,
/// `2 * shared / (|user1| + |user2|) * 100`, then gains a capped bonus for
/// every platform and every genre both users play. Recommendations are drawn
/// from user2's unique games only.
pub fn compare(user1: &[GameRecord], user2: &[GameRecord], policy: &ScoringPolicy) -> ComparisonResult {
    let split = matcher::partition(user1, user2);

    let total_user1_games = user1.len();
    let total_user2_games = user2.len();
    let total_shared_games = split.shared.len();

    let platform_compatibility = platform_overlap(user1, user2);
    let genre_compatibility = genre_overlap(user1, user2);

    let (compatibility_score, compatibility_rating) = if total_user1_games + total_user2_games == 0 {
        (0, CompatibilityRating::NoData)
    } else {
        let base = (2 * total_shared_games) as f64 / (total_user1_games + total_user2_games) as f64
            * 100.0;
        let shared_platforms = platform_compatibility.iter().filter(|p| p.shared).count();
        let shared_genres = genre_compatibility.iter().filter(|g| g.shared).count();
        let platform_bonus =
            (shared_platforms as f64 * policy.platform_bonus).min(policy.platform_bonus_cap);
        let genre_bonus = (shared_genres as f64 * policy.genre_bonus).min(policy.genre_bonus_cap);

        let score = (base + platform_bonus + genre_bonus).round().clamp(0.0, 100.0) as u8;
        (score, CompatibilityRating::from_score(score))
    };

    let recommendations = recommendations::select_recommendations(
        &split.user2_only,
        policy.recommendation_min_rating,
        policy.recommendation_limit,
    );

    tracing::debug!(
        total_user1_games,
        total_user2_games,
        total_shared_games,
        compatibility_score,
        "Libraries compared"
    );

    ComparisonResult {
        compatibility_score,
        compatibility_rating,
        shared_games: split
            .shared
            .iter()
            .map(|(a, b)| SharedGame {
                user1_game: (*a).clone(),
                user2_game: (*b).clone(),
            })
            .collect(),
        user1_only_games: split.user1_only.into_iter().cloned().collect(),
        user2_only_games: split.user2_only.into_iter().cloned().collect(),
        platform_compatibility,
        genre_compatibility,
        recommendations,
        total_shared_games,
        total_user1_games,
        total_user2_games,
    }
}

/// One entry per platform in either library, in platform order
fn platform_overlap(user1: &[GameRecord], user2: &[GameRecord]) -> Vec<PlatformOverlap> {
    let mut counts: BTreeMap<Platform, (usize, usize)> = BTreeMap::new();
    for game in user1 {
        counts.entry(game.platform).or_default().0 += 1;
    }
    for game in user2 {
        counts.entry(game.platform).or_default().1 += 1;
    }

    counts
        .into_iter()
        .map(|(platform, (user1_count, user2_count))| PlatformOverlap {
            platform,
            user1_count,
            user2_count,
            shared: user1_count > 0 && user2_count > 0,
        })
        .collect()
}

/// One entry per genre in either library's flattened genre lists, by name
fn genre_overlap(user1: &[GameRecord], user2: &[GameRecord]) -> Vec<GenreOverlap> {
    let mut counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for genre in user1.iter().flat_map(GameRecord::genre_list) {
        counts.entry(genre.as_str()).or_default().0 += 1;
    }
    for genre in user2.iter().flat_map(GameRecord::genre_list) {
        counts.entry(genre.as_str()).or_default().1 += 1;
    }

    counts
        .into_iter()
        .map(|(genre, (user1_count, user2_count))| GenreOverlap {
            genre: genre.to_string(),
            user1_count,
            user2_count,
            shared: user1_count > 0 && user2_count > 0,
        })
        .collect()
}
