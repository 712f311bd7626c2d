//! Error types for the rating engine
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate.

use crate::types::TeamId;

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("operation not implemented: {operation}")]
    NotImplemented { operation: String },

    #[error("cannot rate a degenerate contest: {reason}")]
    DegenerateContest { reason: String },

    #[error("aggregation produced an unusable rating for team {team}: {value}")]
    InvalidRating { team: TeamId, value: f64 },

    #[error("configuration error: {message}")]
    ConfigurationError { message: String },
}
