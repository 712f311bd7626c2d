//! Common types used throughout the rating engine

use crate::error::{RatingError, Result};
use crate::player::Player;
use serde::{Deserialize, Serialize};

/// Unique identifier for players
pub type PlayerId = String;

/// Unique identifier for teams within a contest
pub type TeamId = u32;

/// A skill estimate: mean and uncertainty
///
/// Team-level ratings are derived from player ratings per contest and never
/// stored; only player ratings persist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub mu: f64,
    pub sig: f64,
}

impl Rating {
    pub fn new(mu: f64, sig: f64) -> Self {
        Self { mu, sig }
    }

    /// Whether both components are usable numbers
    pub fn is_finite(&self) -> bool {
        self.mu.is_finite() && self.sig.is_finite()
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self {
            mu: 1500.0,
            sig: 0.0,
        }
    }
}

/// Per-contest parameters supplied by the caller
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContestRatingParams {
    /// Contest importance multiplier. Scales both the learning rate and the
    /// sharpness of the win-probability curve.
    pub weight: f64,
}

impl ContestRatingParams {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }

    /// Validate parameters before any rating math runs
    pub fn validate(&self) -> Result<()> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: format!("contest weight must be positive, got {}", self.weight),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for ContestRatingParams {
    fn default() -> Self {
        Self { weight: 1.0 }
    }
}

/// One standings row: a player, the team it played for, the team's
/// 1-indexed finishing rank, and the player's win count for the contest.
///
/// Ranks need not be contiguous; they matter only for relative ordering.
/// Tie handling is the caller's responsibility.
#[derive(Debug)]
pub struct TeamStanding<'a> {
    pub player: &'a mut Player,
    pub team: TeamId,
    pub rank: usize,
    pub score: usize,
}

impl<'a> TeamStanding<'a> {
    pub fn new(player: &'a mut Player, team: TeamId, rank: usize, score: usize) -> Self {
        Self {
            player,
            team,
            rank,
            score,
        }
    }
}

/// Aggregate view of one team for a single contest
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamRating {
    pub team: TeamId,
    pub rank: usize,
    pub rating: f64,
}

/// One K-factor selection rule
///
/// A rule matches when every threshold it carries strictly exceeds the
/// player's corresponding value; a rule with neither threshold set never
/// matches. Rules are evaluated in caller order, first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KFactor {
    /// Learning rate returned when the rule matches
    pub k: f64,
    /// Matches players with fewer rated contests than this
    pub games: Option<usize>,
    /// Matches players rated below this
    pub rating: Option<f64>,
}

impl KFactor {
    pub fn new(k: f64, games: Option<usize>, rating: Option<f64>) -> Self {
        Self { k, games, rating }
    }
}
