//! Capability traits implemented by rating systems
//!
//! This module defines the interfaces an external dispatcher uses to invoke
//! rating updates polymorphically, plus the pluggable team aggregation
//! strategies.

use crate::error::Result;
use crate::player::Player;
use crate::types::{ContestRatingParams, Rating, TeamId, TeamStanding};
use indexmap::IndexMap;

/// Per-team grouping of standings rows; exists only for one update call
#[derive(Debug)]
pub struct TeamInfo<'a> {
    /// The team's finishing rank, as first seen in standings
    pub rank: usize,
    pub players: Vec<&'a mut Player>,
}

/// Trait for systems that rate individual participants of a contest
pub trait RatingSystem: Send + Sync {
    /// Apply one contest's results to every player in `standings`.
    ///
    /// Entries are `(player, rank, score)` with 1-indexed ranks.
    fn round_update(
        &self,
        params: ContestRatingParams,
        standings: Vec<(&mut Player, usize, usize)>,
    ) -> Result<()>;
}

/// Trait for systems that rate team contests
pub trait TeamRatingSystem: Send + Sync {
    /// Apply one team contest's results, mutating every listed player's
    /// rating in place. Either every team's delta is applied or the call
    /// fails; a failed call must be treated as requiring retry.
    fn team_round_update(
        &self,
        params: ContestRatingParams,
        standings: Vec<TeamStanding<'_>>,
        agg: &dyn TeamRatingAggregation,
    ) -> Result<()>;

    /// Partition standings into teams, preserving first-seen team order and
    /// each team's first-seen rank. Callers guarantee rank consistency
    /// within a team.
    fn convert_to_teams<'a>(
        &self,
        standings: Vec<TeamStanding<'a>>,
    ) -> IndexMap<TeamId, TeamInfo<'a>> {
        let mut teams: IndexMap<TeamId, TeamInfo<'a>> = IndexMap::new();

        for row in standings {
            let info = teams.entry(row.team).or_insert_with(|| TeamInfo {
                rank: row.rank,
                players: Vec::new(),
            });
            info.players.push(row.player);
        }

        teams
    }
}

/// Collapses a team's member ratings into a single aggregate value
pub trait TeamRatingAggregation: Send + Sync {
    fn aggregate(&self, ratings: &[Rating]) -> f64;
}

impl<F> TeamRatingAggregation for F
where
    F: Fn(&[Rating]) -> f64 + Send + Sync,
{
    fn aggregate(&self, ratings: &[Rating]) -> f64 {
        self(ratings)
    }
}

/// Mean of the member ratings
#[derive(Debug, Clone, Copy, Default)]
pub struct AverageAggregation;

impl TeamRatingAggregation for AverageAggregation {
    fn aggregate(&self, ratings: &[Rating]) -> f64 {
        if ratings.is_empty() {
            return 0.0;
        }

        ratings.iter().map(|r| r.mu).sum::<f64>() / ratings.len() as f64
    }
}

/// Highest member rating
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxAggregation;

impl TeamRatingAggregation for MaxAggregation {
    fn aggregate(&self, ratings: &[Rating]) -> f64 {
        ratings
            .iter()
            .map(|r| r.mu)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Lowest member rating
#[derive(Debug, Clone, Copy, Default)]
pub struct MinAggregation;

impl TeamRatingAggregation for MinAggregation {
    fn aggregate(&self, ratings: &[Rating]) -> f64 {
        ratings.iter().map(|r| r.mu).fold(f64::INFINITY, f64::min)
    }
}

/// Sum of the member ratings
#[derive(Debug, Clone, Copy, Default)]
pub struct SumAggregation;

impl TeamRatingAggregation for SumAggregation {
    fn aggregate(&self, ratings: &[Rating]) -> f64 {
        ratings.iter().map(|r| r.mu).sum()
    }
}

/// Mock aggregation for testing
#[derive(Debug, Default)]
pub struct MockAggregation {
    team_sizes: std::sync::Mutex<Vec<usize>>,
    fixed_value: Option<f64>,
}

impl MockAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `value` for every team instead of averaging
    pub fn with_fixed_value(value: f64) -> Self {
        Self {
            team_sizes: std::sync::Mutex::new(Vec::new()),
            fixed_value: Some(value),
        }
    }

    /// Sizes of the teams aggregated so far (for testing)
    pub fn aggregated_team_sizes(&self) -> Vec<usize> {
        self.team_sizes
            .lock()
            .map(|sizes| sizes.clone())
            .unwrap_or_default()
    }
}

impl TeamRatingAggregation for MockAggregation {
    fn aggregate(&self, ratings: &[Rating]) -> f64 {
        if let Ok(mut sizes) = self.team_sizes.lock() {
            sizes.push(ratings.len());
        }

        match self.fixed_value {
            Some(value) => value,
            None => AverageAggregation.aggregate(ratings),
        }
    }
}
