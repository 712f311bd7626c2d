//! Test fixtures and builders shared by the integration tests

use elo_arena::{Player, Rating, TeamId, TeamStanding};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test subscriber so `RUST_LOG`-filtered output is visible
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Build a player with the given rating and zeroed uncertainty
pub fn rated_player(id: &str, mu: f64) -> Player {
    Player::with_rating(id.to_string(), Rating::new(mu, 0.0))
}

/// Pair players with `(team, rank)` assignments, in order, to build standings
pub fn team_standings<'a>(
    players: &'a mut [Player],
    assignment: &[(TeamId, usize)],
) -> Vec<TeamStanding<'a>> {
    players
        .iter_mut()
        .zip(assignment.iter().copied())
        .map(|(player, (team, rank))| TeamStanding::new(player, team, rank, 0))
        .collect()
}
