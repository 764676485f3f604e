pub mod compatibility;
pub mod library;
pub mod matcher;
pub mod recommendations;

pub use compatibility::{compare, ScoringPolicy};
