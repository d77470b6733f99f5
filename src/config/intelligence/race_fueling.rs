// ABOUTME: Race-day fueling configuration for taper, race morning, in-race and recovery targets
// ABOUTME: Per-kg coefficients, duration tiers and hydration baselines for the race calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Race Fueling Configuration
//!
//! # Scientific References
//!
//! - Carbohydrate intake during exercise: Jeukendrup (2014) DOI: 10.1007/s40279-014-0148-z
//! - Carbohydrate loading: Burke et al. (2011) DOI: 10.1080/02640414.2011.585473
//! - Fluid replacement: Sawka et al. (2007) DOI: 10.1249/mss.0b013e31802ca597
//! - Caffeine: Guest et al. (2021) DOI: 10.1186/s12970-020-00383-4

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Race-day fueling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceFuelingConfig {
    /// Hourly carbohydrate tiers by expected duration
    pub carb_tiers: DurationCarbTiers,
    /// Races longer than this (hours) carb-load, eat earlier and use caffeine
    pub long_race_hours: f64,
    /// Races longer than this (hours) get the larger pre-start carb top-up
    pub quick_carb_threshold_hours: f64,
    /// Taper (days before the race) per-kg targets
    pub taper: TaperConfig,
    /// Pre-race breakfast per-kg targets
    pub race_morning: RaceMorningConfig,
    /// Post-race recovery per-kg targets
    pub recovery: RecoveryConfig,
}

/// Carbohydrate per hour by race duration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationCarbTiers {
    /// Races shorter than this need no in-race fuel
    pub fueling_threshold_hours: f64,
    /// Upper bound (exclusive) of the moderate tier
    pub moderate_max_hours: f64,
    /// Upper bound (exclusive) of the high tier
    pub high_max_hours: f64,
    /// Moderate tier intake: 40 g/h
    pub moderate_g_per_hour: u32,
    /// High tier intake: 60 g/h
    pub high_g_per_hour: u32,
    /// Ultra tier intake: 75 g/h
    pub ultra_g_per_hour: u32,
}

/// Taper-day targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaperConfig {
    /// Carbohydrate when carb-loading: 10 g/kg
    pub carb_load_g_per_kg: f64,
    /// Carbohydrate otherwise: 5 g/kg
    pub carb_g_per_kg: f64,
    /// Protein: 1.6 g/kg
    pub protein_g_per_kg: f64,
    /// Fat: 1.0 g/kg
    pub fat_g_per_kg: f64,
}

/// Race-morning meal and pre-start targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceMorningConfig {
    /// Meal carbohydrate before a long race: 3 g/kg
    pub long_race_carb_g_per_kg: f64,
    /// Meal carbohydrate before a short race: 2 g/kg
    pub short_race_carb_g_per_kg: f64,
    /// Meal protein: 0.3 g/kg
    pub protein_g_per_kg: f64,
    /// Pre-start quick carbs above the quick-carb threshold
    pub quick_carbs_long_g: u32,
    /// Pre-start quick carbs otherwise
    pub quick_carbs_short_g: u32,
    /// Caffeine before a long race: 4 mg/kg
    pub caffeine_mg_per_kg: f64,
}

/// Immediate and follow-up recovery targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryConfig {
    /// Immediate carbohydrate: 1.2 g/kg
    pub carb_g_per_kg: f64,
    /// Immediate protein: 0.4 g/kg
    pub protein_g_per_kg: f64,
    /// Follow-up meal carbohydrate: 1.0 g/kg
    pub follow_up_carb_g_per_kg: f64,
    /// Follow-up meal protein: 0.3 g/kg
    pub follow_up_protein_g_per_kg: f64,
    /// Follow-up meal fat: 0.3 g/kg
    pub follow_up_fat_g_per_kg: f64,
}

/// Fluid and sodium baselines before environmental adjustment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Male base fluid: 24 oz/h
    pub male_fluid_oz_per_hour: f64,
    /// Female base fluid: 20 oz/h
    pub female_fluid_oz_per_hour: f64,
    /// Base sodium for races over the long-race threshold: 600 mg/h
    pub long_race_sodium_mg_per_hour: f64,
    /// Base sodium otherwise: 400 mg/h
    pub short_race_sodium_mg_per_hour: f64,
}

impl Default for RaceFuelingConfig {
    fn default() -> Self {
        Self {
            carb_tiers: DurationCarbTiers::default(),
            long_race_hours: 2.0,
            quick_carb_threshold_hours: 1.0,
            taper: TaperConfig::default(),
            race_morning: RaceMorningConfig::default(),
            recovery: RecoveryConfig::default(),
        }
    }
}

impl Default for DurationCarbTiers {
    fn default() -> Self {
        Self {
            fueling_threshold_hours: 1.0,
            moderate_max_hours: 2.5,
            high_max_hours: 5.0,
            moderate_g_per_hour: 40,
            high_g_per_hour: 60,
            ultra_g_per_hour: 75,
        }
    }
}

impl Default for TaperConfig {
    fn default() -> Self {
        Self {
            carb_load_g_per_kg: 10.0,
            carb_g_per_kg: 5.0,
            protein_g_per_kg: 1.6,
            fat_g_per_kg: 1.0,
        }
    }
}

impl Default for RaceMorningConfig {
    fn default() -> Self {
        Self {
            long_race_carb_g_per_kg: 3.0,
            short_race_carb_g_per_kg: 2.0,
            protein_g_per_kg: 0.3,
            quick_carbs_long_g: 30,
            quick_carbs_short_g: 20,
            caffeine_mg_per_kg: 4.0,
        }
    }
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            carb_g_per_kg: 1.2,
            protein_g_per_kg: 0.4,
            follow_up_carb_g_per_kg: 1.0,
            follow_up_protein_g_per_kg: 0.3,
            follow_up_fat_g_per_kg: 0.3,
        }
    }
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            male_fluid_oz_per_hour: 24.0,
            female_fluid_oz_per_hour: 20.0,
            long_race_sodium_mg_per_hour: 600.0,
            short_race_sodium_mg_per_hour: 400.0,
        }
    }
}

impl RaceFuelingConfig {
    /// Validate tier ordering and per-kg coefficients
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if tiers are out of order or a coefficient is negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tiers = &self.carb_tiers;
        if tiers.fueling_threshold_hours <= 0.0
            || tiers.fueling_threshold_hours >= tiers.moderate_max_hours
            || tiers.moderate_max_hours >= tiers.high_max_hours
        {
            return Err(ConfigError::InvalidRange(
                "Race carbohydrate duration tiers must be positive and ascending",
            ));
        }
        if tiers.moderate_g_per_hour > tiers.high_g_per_hour
            || tiers.high_g_per_hour > tiers.ultra_g_per_hour
            || tiers.ultra_g_per_hour > 120
        {
            return Err(ConfigError::InvalidRange(
                "Hourly carbohydrate tiers must be non-decreasing and at most 120 g/h",
            ));
        }
        if self.long_race_hours <= 0.0 || self.quick_carb_threshold_hours <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Race duration thresholds must be positive",
            ));
        }

        let coefficients = [
            self.taper.carb_load_g_per_kg,
            self.taper.carb_g_per_kg,
            self.taper.protein_g_per_kg,
            self.taper.fat_g_per_kg,
            self.race_morning.long_race_carb_g_per_kg,
            self.race_morning.short_race_carb_g_per_kg,
            self.race_morning.protein_g_per_kg,
            self.race_morning.caffeine_mg_per_kg,
            self.recovery.carb_g_per_kg,
            self.recovery.protein_g_per_kg,
            self.recovery.follow_up_carb_g_per_kg,
            self.recovery.follow_up_protein_g_per_kg,
            self.recovery.follow_up_fat_g_per_kg,
        ];
        if coefficients.iter().any(|c| !c.is_finite() || *c < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Race fueling per-kg coefficients must be non-negative",
            ));
        }
        if self.race_morning.caffeine_mg_per_kg > 6.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Caffeine must not exceed 6 mg/kg",
            ));
        }

        Ok(())
    }
}

impl HydrationConfig {
    /// Validate fluid and sodium baselines
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a baseline is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let baselines = [
            self.male_fluid_oz_per_hour,
            self.female_fluid_oz_per_hour,
            self.long_race_sodium_mg_per_hour,
            self.short_race_sodium_mg_per_hour,
        ];
        if baselines.iter().any(|b| !b.is_finite() || *b <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Hydration baselines must be positive",
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
        assert!(RaceFuelingConfig::default().validate().is_ok());
        assert!(HydrationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unordered_tiers_rejected() {
        let mut config = RaceFuelingConfig::default();
        config.carb_tiers.moderate_max_hours = 6.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_negative_coefficient_rejected() {
        let mut config = RaceFuelingConfig::default();
        config.recovery.protein_g_per_kg = -0.1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }
}
