//! Configuration for the Elo rating system
//!
//! This module handles default values, environment variable overrides,
//! and validation for the tunable parameters of the engine.

use crate::error::{RatingError, Result};
use crate::types::KFactor;
use serde::{Deserialize, Serialize};
use std::env;

/// Tunable parameters for the Elo rating system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EloConfig {
    /// Spread of the win-probability curve at contest weight 1
    pub beta: f64,
    /// Prior rating seeded for players without a usable one
    pub initial_rating: f64,
    /// Ordered K-factor rules; an empty list means the flat default
    /// learning rate applies to everyone
    pub k_factors: Vec<KFactor>,
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            beta: 400.0,
            initial_rating: 1500.0,
            k_factors: Vec::new(),
        }
    }
}

impl EloConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(beta) = env::var("ELO_BETA") {
            config.beta = beta.parse().map_err(|_| RatingError::ConfigurationError {
                message: format!("invalid ELO_BETA value: {beta}"),
            })?;
        }

        if let Ok(initial) = env::var("ELO_INITIAL_RATING") {
            config.initial_rating =
                initial
                    .parse()
                    .map_err(|_| RatingError::ConfigurationError {
                        message: format!("invalid ELO_INITIAL_RATING value: {initial}"),
                    })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.beta.is_finite() || self.beta <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: format!("beta must be positive, got {}", self.beta),
            }
            .into());
        }

        if !self.initial_rating.is_finite() {
            return Err(RatingError::ConfigurationError {
                message: format!("initial rating must be finite, got {}", self.initial_rating),
            }
            .into());
        }

        for rule in &self.k_factors {
            if !rule.k.is_finite() || rule.k <= 0.0 {
                return Err(RatingError::ConfigurationError {
                    message: format!("K-factor rules must carry a positive k, got {}", rule.k),
                }
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EloConfig::default();
        assert_eq!(config.beta, 400.0);
        assert_eq!(config.initial_rating, 1500.0);
        assert!(config.k_factors.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = EloConfig::default();
        assert!(config.validate().is_ok());

        config.beta = 0.0;
        assert!(config.validate().is_err());

        config = EloConfig::default();
        config.beta = f64::NAN;
        assert!(config.validate().is_err());

        config = EloConfig::default();
        config.initial_rating = f64::INFINITY;
        assert!(config.validate().is_err());

        config = EloConfig::default();
        config.k_factors.push(KFactor::new(-5.0, Some(10), None));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_env_overrides() {
        env::set_var("ELO_BETA", "200");
        env::set_var("ELO_INITIAL_RATING", "1200");

        let config = EloConfig::from_env().unwrap();
        assert_eq!(config.beta, 200.0);
        assert_eq!(config.initial_rating, 1200.0);

        env::set_var("ELO_BETA", "not-a-number");
        assert!(EloConfig::from_env().is_err());

        env::remove_var("ELO_BETA");
        env::remove_var("ELO_INITIAL_RATING");
    }
}
