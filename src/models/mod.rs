pub mod comparison;
pub mod game;
pub mod stats;

pub use comparison::{CompatibilityRating, ComparisonResult, GenreOverlap, PlatformOverlap, SharedGame};
pub use game::{GameInput, GameRecord, Platform};
pub use stats::{GenreCount, LibraryStats, PlatformCount};
