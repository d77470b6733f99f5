// ABOUTME: Weight-goal configuration for timeline projection and loss-rate advice
// ABOUTME: Alignment tolerance, goal-size tiers and training-volume advisory thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weight Goal Configuration
//!
//! Loss-rate tiers follow the commonly cited 0.5-1.0% body mass per week guidance
//! for athletes (Garthe et al., 2011, DOI: 10.1123/ijsnem.21.2.97).

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Weight goal configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeightGoalConfig {
    /// Timeline projection settings
    pub projection: WeightProjectionConfig,
    /// Rate recommendation settings
    pub advisor: RateAdvisorConfig,
}

/// Timeline projection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightProjectionConfig {
    /// Race-day projection within this many pounds of target counts as aligned
    pub aligned_tolerance_lb: f64,
}

/// Rate recommendation thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateAdvisorConfig {
    /// Below this (lb to lose) recommend 0.5 lb/week
    pub small_goal_lb: f64,
    /// Below this recommend 1.0 lb/week
    pub moderate_goal_lb: f64,
    /// Below this recommend 1.5 lb/week, otherwise 2.0
    pub large_goal_lb: f64,
    /// Weekly training hours considered high volume
    pub high_volume_hours: f64,
    /// Weekly training hours considered very high volume
    pub very_high_volume_hours: f64,
    /// Rate (lb/week) considered aggressive at high volume
    pub high_volume_rate_limit_lb: f64,
    /// Rate (lb/week) considered aggressive at very high volume
    pub very_high_volume_rate_limit_lb: f64,
    /// A race-driven pace (lb/week) up to this is covered by the goal-size tier
    pub race_pace_covered_lb: f64,
    /// Race-driven pace up to this needs 1.5 lb/week, above it 2.0
    pub race_pace_moderate_lb: f64,
}

impl Default for WeightProjectionConfig {
    fn default() -> Self {
        Self {
            aligned_tolerance_lb: 3.0,
        }
    }
}

impl Default for RateAdvisorConfig {
    fn default() -> Self {
        Self {
            small_goal_lb: 10.0,
            moderate_goal_lb: 20.0,
            large_goal_lb: 50.0,
            high_volume_hours: 10.0,
            very_high_volume_hours: 15.0,
            high_volume_rate_limit_lb: 1.5,
            very_high_volume_rate_limit_lb: 1.0,
            race_pace_covered_lb: 1.0,
            race_pace_moderate_lb: 1.5,
        }
    }
}

impl WeightGoalConfig {
    /// Validate tolerance and tier ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the tolerance is negative or thresholds are not ascending
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.projection.aligned_tolerance_lb.is_finite()
            || self.projection.aligned_tolerance_lb < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Alignment tolerance must be non-negative",
            ));
        }

        let advisor = &self.advisor;
        if advisor.small_goal_lb <= 0.0
            || advisor.small_goal_lb >= advisor.moderate_goal_lb
            || advisor.moderate_goal_lb >= advisor.large_goal_lb
        {
            return Err(ConfigError::InvalidRange(
                "Goal-size tiers must be positive and ascending",
            ));
        }
        if advisor.high_volume_hours >= advisor.very_high_volume_hours {
            return Err(ConfigError::InvalidRange(
                "high_volume_hours must be < very_high_volume_hours",
            ));
        }
        if advisor.race_pace_covered_lb <= 0.0
            || advisor.race_pace_covered_lb >= advisor.race_pace_moderate_lb
        {
            return Err(ConfigError::InvalidRange(
                "Race pace thresholds must be positive and ascending",
            ));
        }
        if advisor.very_high_volume_rate_limit_lb > advisor.high_volume_rate_limit_lb {
            return Err(ConfigError::InvalidRange(
                "Very-high-volume rate limit must not exceed the high-volume limit",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(WeightGoalConfig::default().validate().is_ok());
    }

    #[test]
    fn test_volume_thresholds_must_ascend() {
        let mut config = WeightGoalConfig::default();
        config.advisor.very_high_volume_hours = 8.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_race_pace_thresholds_must_ascend() {
        let mut config = WeightGoalConfig::default();
        config.advisor.race_pace_moderate_lb = 1.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }
}
