use serde::Deserialize;

use crate::services::compatibility::ScoringPolicy;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// PostgreSQL connection URL; libraries are kept in memory when unset
    #[serde(default)]
    pub database_url: Option<String>,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Score points per platform both users play on
    #[serde(default = "default_platform_bonus")]
    pub platform_bonus: f64,

    #[serde(default = "default_platform_bonus_cap")]
    pub platform_bonus_cap: f64,

    /// Score points per genre both users play
    #[serde(default = "default_genre_bonus")]
    pub genre_bonus: f64,

    #[serde(default = "default_genre_bonus_cap")]
    pub genre_bonus_cap: f64,

    /// Non-favorite games need at least this rating to be recommended
    #[serde(default = "default_recommendation_min_rating")]
    pub recommendation_min_rating: f64,

    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_platform_bonus() -> f64 {
    ScoringPolicy::default().platform_bonus
}

fn default_platform_bonus_cap() -> f64 {
    ScoringPolicy::default().platform_bonus_cap
}

fn default_genre_bonus() -> f64 {
    ScoringPolicy::default().genre_bonus
}

fn default_genre_bonus_cap() -> f64 {
    ScoringPolicy::default().genre_bonus_cap
}

fn default_recommendation_min_rating() -> f64 {
    ScoringPolicy::default().recommendation_min_rating
}

fn default_recommendation_limit() -> usize {
    ScoringPolicy::default().recommendation_limit
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Builds the scoring policy, rejecting values that would break score bounds
    pub fn scoring_policy(&self) -> anyhow::Result<ScoringPolicy> {
        let bonuses = [
            ("PLATFORM_BONUS", self.platform_bonus),
            ("PLATFORM_BONUS_CAP", self.platform_bonus_cap),
            ("GENRE_BONUS", self.genre_bonus),
            ("GENRE_BONUS_CAP", self.genre_bonus_cap),
        ];
        for (name, value) in bonuses {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("{} must be a non-negative number, got {}", name, value);
            }
        }
        if self.recommendation_limit == 0 {
            anyhow::bail!("RECOMMENDATION_LIMIT must be at least 1");
        }
        if !(0.0..=10.0).contains(&self.recommendation_min_rating) {
            anyhow::bail!(
                "RECOMMENDATION_MIN_RATING must be within 0-10, got {}",
                self.recommendation_min_rating
            );
        }

        Ok(ScoringPolicy {
            platform_bonus: self.platform_bonus,
            platform_bonus_cap: self.platform_bonus_cap,
            genre_bonus: self.genre_bonus,
            genre_bonus_cap: self.genre_bonus_cap,
            recommendation_min_rating: self.recommendation_min_rating,
            recommendation_limit: self.recommendation_limit,
        })
    }
}
