use serde::Serialize;

use super::Platform;

/// Summary of a single user's library
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LibraryStats {
    pub total_games: usize,
    pub favorite_games: usize,
    pub completed_games: usize,
    /// Mean over rated games only; `None` when nothing is rated
    pub average_rating: Option<f64>,
    pub platforms: Vec<PlatformCount>,
    pub top_genres: Vec<GenreCount>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlatformCount {
    pub platform: Platform,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}
