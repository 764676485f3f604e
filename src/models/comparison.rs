use serde::{Serialize, Serializer};
use std::fmt::Display;

use super::{GameRecord, Platform};

/// Label derived from a compatibility score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompatibilityRating {
    Excellent,
    Great,
    Good,
    Fair,
    Limited,
    NoData,
}

impl CompatibilityRating {
    pub fn label(&self) -> &'static str {
        match self {
            CompatibilityRating::Excellent => "Excellent Match",
            CompatibilityRating::Great => "Great Match",
            CompatibilityRating::Good => "Good Match",
            CompatibilityRating::Fair => "Fair Match",
            CompatibilityRating::Limited => "Limited Match",
            CompatibilityRating::NoData => "No Data",
        }
    }

    /// Maps a score to its label; `NoData` is only reachable through the
    /// empty-collections case, never from a score alone
    pub fn from_score(score: u8) -> Self {
        match score {
            85.. => CompatibilityRating::Excellent,
            65..=84 => CompatibilityRating::Great,
            45..=64 => CompatibilityRating::Good,
            25..=44 => CompatibilityRating::Fair,
            _ => CompatibilityRating::Limited,
        }
    }
}

impl Display for CompatibilityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for CompatibilityRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A title found in both libraries
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SharedGame {
    pub user1_game: GameRecord,
    pub user2_game: GameRecord,
}

/// How many games each user has on one platform
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlatformOverlap {
    pub platform: Platform,
    pub user1_count: usize,
    pub user2_count: usize,
    pub shared: bool,
}

/// How many library entries of each user carry one genre
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenreOverlap {
    pub genre: String,
    pub user1_count: usize,
    pub user2_count: usize,
    pub shared: bool,
}

/// Outcome of comparing two game libraries, from user1's point of view
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonResult {
    pub compatibility_score: u8,
    pub compatibility_rating: CompatibilityRating,
    pub shared_games: Vec<SharedGame>,
    pub user1_only_games: Vec<GameRecord>,
    pub user2_only_games: Vec<GameRecord>,
    pub platform_compatibility: Vec<PlatformOverlap>,
    pub genre_compatibility: Vec<GenreOverlap>,
    /// Picks from user2's unique games for user1
    pub recommendations: Vec<GameRecord>,
    pub total_shared_games: usize,
    pub total_user1_games: usize,
    pub total_user2_games: usize,
}
