use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use uuid::Uuid;

/// Gaming platform a library entry is played on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Pc,
    #[serde(rename = "playstation_5")]
    PlayStation5,
    #[serde(rename = "playstation_4")]
    PlayStation4,
    XboxSeries,
    XboxOne,
    NintendoSwitch,
    Mobile,
    #[serde(other)]
    Other,
}

impl Platform {
    /// Storage and wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Pc => "pc",
            Platform::PlayStation5 => "playstation_5",
            Platform::PlayStation4 => "playstation_4",
            Platform::XboxSeries => "xbox_series",
            Platform::XboxOne => "xbox_one",
            Platform::NintendoSwitch => "nintendo_switch",
            Platform::Mobile => "mobile",
            Platform::Other => "other",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = std::convert::Infallible;

    /// Unknown values map to `Other`, mirroring the serde fallback
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "pc" => Platform::Pc,
            "playstation_5" => Platform::PlayStation5,
            "playstation_4" => Platform::PlayStation4,
            "xbox_series" => Platform::XboxSeries,
            "xbox_one" => Platform::XboxOne,
            "nintendo_switch" => Platform::NintendoSwitch,
            "mobile" => Platform::Mobile,
            _ => Platform::Other,
        })
    }
}

/// A game in one user's library
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameRecord {
    pub owner_id: Uuid,
    /// External catalog id (IGDB); identifies the title across users when present
    pub catalog_id: Option<i64>,
    pub name: String,
    pub platform: Platform,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    /// Rating on a 0-10 scale
    #[serde(default)]
    pub user_rating: Option<f64>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_completed: bool,
}

impl GameRecord {
    /// Assigns an owner to a game received over the wire
    pub fn from_input(owner_id: Uuid, input: GameInput) -> Self {
        Self {
            owner_id,
            catalog_id: input.catalog_id,
            name: input.name,
            platform: input.platform,
            genres: input.genres,
            user_rating: input.user_rating,
            is_favorite: input.is_favorite,
            is_completed: input.is_completed,
        }
    }

    /// Genre names, treating a missing list as empty
    pub fn genre_list(&self) -> &[String] {
        self.genres.as_deref().unwrap_or(&[])
    }
}

/// A game as submitted by a client, before an owner is attached
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GameInput {
    #[serde(default)]
    pub catalog_id: Option<i64>,
    pub name: String,
    pub platform: Platform,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    #[serde(default)]
    pub user_rating: Option<f64>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_completed: bool,
}
