//! Elo Arena - multiplayer Elo rating engine for ranked team contests
//!
//! This crate rates multi-team contests with a pairwise logistic
//! win-probability model: each team's finish earns a share of the total
//! pairwise points, the model predicts the share it should have earned, and
//! the weighted difference moves every member's rating.

pub mod config;
pub mod error;
pub mod player;
pub mod rating;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use config::EloConfig;
pub use player::{Player, PlayerEvent};
pub use rating::{Elo, RatingSystem, TeamRatingAggregation, TeamRatingSystem};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
