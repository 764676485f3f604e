use std::collections::{BTreeMap, HashMap};

use crate::{
    error::{AppError, AppResult},
    models::{GameRecord, GenreCount, LibraryStats, Platform, PlatformCount},
};

const TOP_GENRES: usize = 5;

/// Rejects entries the comparison could not reason about
pub fn validate_library(games: &[GameRecord]) -> AppResult<()> {
    for (idx, game) in games.iter().enumerate() {
        if game.name.trim().is_empty() {
            return Err(AppError::InvalidInput(format!(
                "game {} has an empty name",
                idx
            )));
        }
        if game.genre_list().iter().any(|genre| genre.trim().is_empty()) {
            return Err(AppError::InvalidInput(format!(
                "game {} ({}) has a blank genre",
                idx, game.name
            )));
        }
        if let Some(rating) = game.user_rating {
            if !rating.is_finite() || !(0.0..=10.0).contains(&rating) {
                return Err(AppError::InvalidInput(format!(
                    "game {} ({}) has rating {} outside 0-10",
                    idx, game.name, rating
                )));
            }
        }
    }
    Ok(())
}

/// Summarizes one user's library
pub fn library_stats(games: &[GameRecord]) -> LibraryStats {
    let ratings: Vec<f64> = games.iter().filter_map(|g| g.user_rating).collect();
    let average_rating = if ratings.is_empty() {
        None
    } else {
        Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    };

    let mut platforms: BTreeMap<Platform, usize> = BTreeMap::new();
    for game in games {
        *platforms.entry(game.platform).or_default() += 1;
    }

    let mut genres: HashMap<&str, usize> = HashMap::new();
    for genre in games.iter().flat_map(GameRecord::genre_list) {
        *genres.entry(genre.as_str()).or_default() += 1;
    }
    let mut top_genres: Vec<GenreCount> = genres
        .into_iter()
        .map(|(genre, count)| GenreCount {
            genre: genre.to_string(),
            count,
        })
        .collect();
    top_genres.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.genre.cmp(&b.genre)));
    top_genres.truncate(TOP_GENRES);

    LibraryStats {
        total_games: games.len(),
        favorite_games: games.iter().filter(|g| g.is_favorite).count(),
        completed_games: games.iter().filter(|g| g.is_completed).count(),
        average_rating,
        platforms: platforms
            .into_iter()
            .map(|(platform, count)| PlatformCount { platform, count })
            .collect(),
        top_genres,
    }
}
