// ABOUTME: Form input defaults and accepted ranges used when parsing raw wizard fields
// ABOUTME: Lenient parsing substitutes defaults, strict parsing enforces the limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Input handling configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Fallbacks for blank or malformed fields
    pub defaults: InputDefaultsConfig,
    /// Accepted ranges under strict parsing
    pub limits: InputLimitsConfig,
}

/// Fallback values for blank or malformed fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDefaultsConfig {
    /// Age (years)
    pub age: u32,
    /// Body weight (kg); converted to pounds at the form boundary
    pub weight_kg: f64,
    /// Height (in)
    pub height_in: f64,
    /// Weekly training hours
    pub weekly_training_hours: f64,
    /// Average race temperature (°F); also used for a missing or non-finite reading
    pub temperature_f: f64,
}

/// Inclusive bounds enforced by strict parsing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputLimitsConfig {
    /// Minimum age
    pub min_age: u32,
    /// Maximum age
    pub max_age: u32,
    /// Minimum weight (lb)
    pub min_weight_lb: f64,
    /// Maximum weight (lb)
    pub max_weight_lb: f64,
    /// Minimum height (in)
    pub min_height_in: f64,
    /// Maximum height (in)
    pub max_height_in: f64,
    /// Maximum weekly training hours
    pub max_weekly_hours: f64,
    /// Minimum race temperature (°F)
    pub min_temperature_f: f64,
    /// Maximum race temperature (°F)
    pub max_temperature_f: f64,
}

impl Default for InputDefaultsConfig {
    fn default() -> Self {
        Self {
            age: 45,
            weight_kg: 70.0,
            height_in: 70.0,
            weekly_training_hours: 5.0,
            temperature_f: 70.0,
        }
    }
}

impl Default for InputLimitsConfig {
    fn default() -> Self {
        Self {
            min_age: 13,
            max_age: 100,
            min_weight_lb: 66.0,
            max_weight_lb: 660.0,
            min_height_in: 48.0,
            max_height_in: 96.0,
            max_weekly_hours: 40.0,
            min_temperature_f: -20.0,
            max_temperature_f: 130.0,
        }
    }
}

impl InputConfig {
    /// Validate that limits are ordered and defaults lie inside them
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a limit pair is inverted or a default is outside its limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.limits;
        if limits.min_age >= limits.max_age
            || limits.min_weight_lb >= limits.max_weight_lb
            || limits.min_height_in >= limits.max_height_in
            || limits.min_temperature_f >= limits.max_temperature_f
            || limits.max_weekly_hours <= 0.0
        {
            return Err(ConfigError::InvalidRange(
                "Input limits must have min < max",
            ));
        }

        let defaults = &self.defaults;
        if !(limits.min_age..=limits.max_age).contains(&defaults.age)
            || !(limits.min_height_in..=limits.max_height_in).contains(&defaults.height_in)
            || !(0.0..=limits.max_weekly_hours).contains(&defaults.weekly_training_hours)
            || !(limits.min_temperature_f..=limits.max_temperature_f)
                .contains(&defaults.temperature_f)
            || defaults.weight_kg <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Input defaults must lie within the input limits",
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
        assert!(InputConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_outside_limits_rejected() {
        let mut config = InputConfig::default();
        config.defaults.age = 120;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }
}
