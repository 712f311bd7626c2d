//! Player state: identity, current skill estimate, and rating history
//!
//! Players are owned by the caller. Rating systems mutate them only through
//! [`Player::update_rating`], which keeps the history consistent with the
//! current estimate.

use crate::types::{PlayerId, Rating};
use crate::utils::current_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One history record per rated contest
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerEvent {
    /// Rating after the update was applied
    pub rating: Rating,
    /// Raw performance score the update carried, if the system produces one
    pub perf_score: f64,
    pub timestamp: DateTime<Utc>,
}

/// A contest participant with a mutable current rating
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    approx_posterior: Rating,
    event_history: Vec<PlayerEvent>,
}

impl Player {
    /// Create a player with the default prior rating
    pub fn new(id: PlayerId) -> Self {
        Self::with_rating(id, Rating::default())
    }

    /// Create a player with a known prior rating
    pub fn with_rating(id: PlayerId, rating: Rating) -> Self {
        Self {
            id,
            approx_posterior: rating,
            event_history: Vec::new(),
        }
    }

    /// Current skill estimate
    pub fn approx_posterior(&self) -> Rating {
        self.approx_posterior
    }

    /// Recorded contest history, oldest first
    pub fn event_history(&self) -> &[PlayerEvent] {
        &self.event_history
    }

    /// Number of rated contests this player has played
    pub fn times_played(&self) -> usize {
        self.event_history.len()
    }

    /// Ensure the player carries a usable prior before rating math runs.
    ///
    /// Called once per contest for every listed player; a non-finite prior
    /// is replaced with `fallback`.
    pub fn init_player_event(&mut self, fallback: Rating) {
        if !self.approx_posterior.is_finite() {
            warn!(
                "player '{}' has unusable prior rating, seeding with {}",
                self.id, fallback.mu
            );
            self.approx_posterior = fallback;
        }
    }

    /// Apply a rating update and append it to the history
    pub fn update_rating(&mut self, new_rating: Rating, perf_score: f64) {
        self.approx_posterior = new_rating;
        self.event_history.push(PlayerEvent {
            rating: new_rating,
            perf_score,
            timestamp: current_timestamp(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new("alice".to_string());
        assert_eq!(player.approx_posterior().mu, 1500.0);
        assert_eq!(player.times_played(), 0);
        assert!(player.event_history().is_empty());
    }

    #[test]
    fn test_update_rating_appends_history() {
        let mut player = Player::with_rating("bob".to_string(), Rating::new(1600.0, 0.0));

        player.update_rating(Rating::new(1625.0, 0.0), 0.0);
        player.update_rating(Rating::new(1610.0, 0.0), 0.0);

        assert_eq!(player.approx_posterior().mu, 1610.0);
        assert_eq!(player.times_played(), 2);
        assert_eq!(player.event_history()[0].rating.mu, 1625.0);
        assert_eq!(player.event_history()[1].rating.mu, 1610.0);
    }

    #[test]
    fn test_init_seeds_unusable_prior() {
        let mut player = Player::with_rating("carol".to_string(), Rating::new(f64::NAN, 0.0));

        player.init_player_event(Rating::new(1500.0, 0.0));

        assert_eq!(player.approx_posterior().mu, 1500.0);
        // No history entry: seeding is not a rated contest
        assert_eq!(player.times_played(), 0);
    }

    #[test]
    fn test_init_keeps_usable_prior() {
        let mut player = Player::with_rating("dave".to_string(), Rating::new(1800.0, 0.0));

        player.init_player_event(Rating::new(1500.0, 0.0));

        assert_eq!(player.approx_posterior().mu, 1800.0);
    }
}
