//! Multiplayer rating systems and the capability traits they implement
//!
//! This module defines the dispatcher-facing rating contracts, the pluggable
//! team aggregation strategies, and the Elo implementation for multi-team
//! contests.

pub mod elo;
pub mod system;

// Re-export commonly used types
pub use elo::{Elo, DEFAULT_K};
pub use system::{
    AverageAggregation, MaxAggregation, MinAggregation, MockAggregation, RatingSystem,
    SumAggregation, TeamInfo, TeamRatingAggregation, TeamRatingSystem,
};
