//! Multiplayer Elo rating system
//!
//! Generalizes the classic two-player Elo update to contests between `N`
//! ranked teams. Each team's finish is converted into a share of the total
//! pairwise points and compared against the total win probability a logistic
//! model predicts for it against every other team; the resulting delta is
//! applied uniformly to the team's members.

use crate::config::EloConfig;
use crate::error::{RatingError, Result};
use crate::player::Player;
use crate::rating::system::{RatingSystem, TeamRatingAggregation, TeamRatingSystem};
use crate::types::{ContestRatingParams, Rating, TeamRating, TeamStanding};
use crate::utils::pair_count;
use rayon::prelude::*;
use tracing::debug;

/// Learning rate applied when no K-factor rule matches
pub const DEFAULT_K: f64 = 40.0;

/// Multiplayer Elo rating system
#[derive(Debug, Clone, Default)]
pub struct Elo {
    config: EloConfig,
}

impl Elo {
    /// Create an Elo system from a validated configuration
    pub fn new(config: EloConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    pub fn config(&self) -> &EloConfig {
        &self.config
    }

    /// Probability that a participant rated `rating_i` outscores one rated
    /// `rating_j`, under a logistic curve with spread `s`.
    ///
    /// Complementary: `p(i,j) + p(j,i) = 1`, with `p = 0.5` at equal
    /// ratings. A larger spread flattens the curve and so damps rating
    /// swings for a given gap.
    pub fn win_probability(rating_i: f64, rating_j: f64, s: f64) -> f64 {
        1.0 / (1.0 + 10f64.powf((rating_j - rating_i) / s))
    }

    /// Fraction of the total pairwise points a finish in 1-indexed
    /// `position` earns among `num_teams` teams. Position 1 earns the most,
    /// the last position earns zero, and the fractions sum to 1.
    fn rank_score(num_teams: usize, position: usize) -> f64 {
        (num_teams as f64 - position as f64) / pair_count(num_teams) as f64
    }

    /// Select the learning rate for a player with `games` rated contests
    /// and current `rating`.
    ///
    /// Rules are checked in the order the configuration lists them; the
    /// first match wins, otherwise [`DEFAULT_K`] applies. Note that the
    /// team update below deliberately uses a flat contest-weighted K
    /// instead of this policy; the two coexist on purpose.
    pub fn k_factor(&self, games: usize, rating: f64) -> f64 {
        for rule in &self.config.k_factors {
            match (rule.games, rule.rating) {
                (Some(g), Some(r)) if g > games && r > rating => return rule.k,
                (Some(g), None) if g > games => return rule.k,
                (None, Some(r)) if r > rating => return rule.k,
                _ => {}
            }
        }

        DEFAULT_K
    }

    /// Classic round-robin performance estimate: average opponent rating
    /// shifted by the net score scaled by `s`.
    pub fn standard_performance_rating(
        opp_ratings: &[f64],
        wins: usize,
        losses: usize,
        s: f64,
    ) -> Result<f64> {
        if opp_ratings.is_empty() {
            return Err(RatingError::DegenerateContest {
                reason: "no opponent ratings to rate against".to_string(),
            }
            .into());
        }

        let opponent_total: f64 = opp_ratings.iter().sum();
        Ok((opponent_total + s * (wins as f64 - losses as f64)) / opp_ratings.len() as f64)
    }
}

impl RatingSystem for Elo {
    fn round_update(
        &self,
        _params: ContestRatingParams,
        _standings: Vec<(&mut Player, usize, usize)>,
    ) -> Result<()> {
        Err(RatingError::NotImplemented {
            operation: "individual Elo round update".to_string(),
        }
        .into())
    }
}

impl TeamRatingSystem for Elo {
    fn team_round_update(
        &self,
        params: ContestRatingParams,
        standings: Vec<TeamStanding<'_>>,
        agg: &dyn TeamRatingAggregation,
    ) -> Result<()> {
        params.validate()?;

        if standings.is_empty() {
            return Err(RatingError::DegenerateContest {
                reason: "standings are empty".to_string(),
            }
            .into());
        }

        let spread = self.config.beta / params.weight.sqrt();
        let k = DEFAULT_K * params.weight;
        let initial = Rating::new(self.config.initial_rating, 0.0);

        let mut standings = standings;
        for row in standings.iter_mut() {
            row.player.init_player_event(initial);
        }

        let teams = self.convert_to_teams(standings);
        let num_teams = teams.len();
        if num_teams < 2 {
            return Err(RatingError::DegenerateContest {
                reason: format!("{num_teams} team(s) in standings, need at least two"),
            }
            .into());
        }

        // Read-only snapshot shared by every task below, in team
        // enumeration order.
        let team_ratings: Vec<TeamRating> = teams
            .iter()
            .map(|(team, info)| {
                let ratings: Vec<Rating> =
                    info.players.iter().map(|p| p.approx_posterior()).collect();
                TeamRating {
                    team: *team,
                    rank: info.rank,
                    rating: agg.aggregate(&ratings),
                }
            })
            .collect();

        if let Some(bad) = team_ratings.iter().find(|t| !t.rating.is_finite()) {
            return Err(RatingError::InvalidRating {
                team: bad.team,
                value: bad.rating,
            }
            .into());
        }

        // Ranks only order the teams; the rank score works on dense
        // 1-indexed positions derived from that order.
        let mut order: Vec<usize> = (0..num_teams).collect();
        order.sort_by_key(|&idx| team_ratings[idx].rank);
        let mut positions = vec![0usize; num_teams];
        for (pos, &idx) in order.iter().enumerate() {
            positions[idx] = pos + 1;
        }

        debug!(
            "team Elo update: {} teams, weight {}, spread {}",
            num_teams, params.weight, spread
        );

        let pairs = pair_count(num_teams) as f64;
        let team_infos: Vec<_> = teams.into_values().collect();
        let snapshot = &team_ratings;
        let positions = &positions;

        team_infos
            .into_par_iter()
            .enumerate()
            .try_for_each(|(idx, info)| -> Result<()> {
                let own = snapshot[idx];

                let mut total_probability = 0.0;
                for (other_idx, other) in snapshot.iter().enumerate() {
                    if other_idx == idx {
                        continue;
                    }
                    total_probability += Self::win_probability(own.rating, other.rating, spread);
                }
                total_probability /= pairs;

                let expected = Self::rank_score(num_teams, positions[idx]);
                let delta = k * (expected - total_probability);
                if !delta.is_finite() {
                    return Err(RatingError::InvalidRating {
                        team: own.team,
                        value: delta,
                    }
                    .into());
                }

                for player in info.players {
                    let new_mu = player.approx_posterior().mu + delta;
                    player.update_rating(Rating::new(new_mu, 0.0), 0.0);
                }

                Ok(())
            })
    }
}
