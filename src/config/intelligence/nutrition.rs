// ABOUTME: Nutrition configuration for weight-goal day targets
// ABOUTME: Configures BMR coefficients, training-hour activity tiers, macro splits and safety floors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculation Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Protein in energy deficit: Helms et al. (2014) DOI: 10.1186/1550-2783-11-20
//! - Carbohydrate periodization: Impey et al. (2018) DOI: 10.1007/s40279-018-0867-7

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Nutrition Calculation Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Weekly-hours activity tiers for TDEE
    pub activity_tiers: ActivityTiersConfig,
    /// Protein allowance and carbohydrate/fat split
    pub macros: MacroAllocationConfig,
    /// BMR-derived minimum daily calories
    pub safety_floor: SafetyFloorConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

/// Activity multipliers selected by weekly training hours
///
/// Training days step through four tiers; rest days use a single fixed factor
/// that sits below the lightest training tier but above sedentary (1.2).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityTiersConfig {
    /// Upper bound (exclusive) of the light tier (hours/week)
    pub light_max_hours: f64,
    /// Upper bound (exclusive) of the moderate tier (hours/week)
    pub moderate_max_hours: f64,
    /// Upper bound (exclusive) of the high tier (hours/week)
    pub high_max_hours: f64,
    /// Light tier multiplier: 1.55
    pub light_factor: f64,
    /// Moderate tier multiplier: 1.65
    pub moderate_factor: f64,
    /// High tier multiplier: 1.725
    pub high_factor: f64,
    /// Above the high tier: 1.9
    pub extreme_factor: f64,
    /// Rest-day multiplier, independent of tier: 1.3
    pub rest_day_factor: f64,
}

impl ActivityTiersConfig {
    /// Training-day multiplier for a weekly training volume
    #[must_use]
    pub fn training_factor(&self, weekly_hours: f64) -> f64 {
        if weekly_hours < self.light_max_hours {
            self.light_factor
        } else if weekly_hours < self.moderate_max_hours {
            self.moderate_factor
        } else if weekly_hours < self.high_max_hours {
            self.high_factor
        } else {
            self.extreme_factor
        }
    }
}

/// Macronutrient allocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroAllocationConfig {
    /// Protein per kg body weight, every day type: 2.0
    pub protein_g_per_kg: f64,
    /// Share of post-protein calories from carbohydrate on training/event days: 0.70
    pub training_carb_share: f64,
    /// Share of post-protein calories from carbohydrate on rest days: 0.50
    pub rest_carb_share: f64,
}

/// Minimum daily calories as a multiple of BMR
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyFloorConfig {
    /// Training-day floor factor: 1.2
    pub training_bmr_factor: f64,
    /// Rest-day floor factor: 1.0
    pub rest_bmr_factor: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityTiersConfig {
    fn default() -> Self {
        Self {
            light_max_hours: 5.0,
            moderate_max_hours: 10.0,
            high_max_hours: 15.0,
            light_factor: 1.55,
            moderate_factor: 1.65,
            high_factor: 1.725,
            extreme_factor: 1.9,
            rest_day_factor: 1.3,
        }
    }
}

impl Default for MacroAllocationConfig {
    fn default() -> Self {
        Self {
            protein_g_per_kg: 2.0,
            training_carb_share: 0.70,
            rest_carb_share: 0.50,
        }
    }
}

impl Default for SafetyFloorConfig {
    fn default() -> Self {
        Self {
            training_bmr_factor: 1.2,
            rest_bmr_factor: 1.0,
        }
    }
}

impl NutritionConfig {
    /// Validate coefficient ranges and tier ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a coefficient is out of range or tiers are not ascending
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let tiers = &self.activity_tiers;
        if tiers.light_max_hours <= 0.0
            || tiers.light_max_hours >= tiers.moderate_max_hours
            || tiers.moderate_max_hours >= tiers.high_max_hours
        {
            return Err(ConfigError::InvalidRange(
                "Activity tier hour thresholds must be positive and ascending",
            ));
        }
        if tiers.light_factor >= tiers.moderate_factor
            || tiers.moderate_factor >= tiers.high_factor
            || tiers.high_factor >= tiers.extreme_factor
        {
            return Err(ConfigError::InvalidRange(
                "Activity tier multipliers must be ascending",
            ));
        }
        if tiers.rest_day_factor < 1.0 || tiers.extreme_factor > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity multipliers must be between 1.0 and 2.5",
            ));
        }

        let macros = &self.macros;
        if macros.protein_g_per_kg <= 0.0 || macros.protein_g_per_kg > 3.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Protein must be between 0 and 3.5 g/kg",
            ));
        }
        for share in [macros.training_carb_share, macros.rest_carb_share] {
            if !(0.0..=1.0).contains(&share) {
                return Err(ConfigError::ValueOutOfRange(
                    "Carbohydrate shares must be between 0.0 and 1.0",
                ));
            }
        }

        let floor = &self.safety_floor;
        if floor.rest_bmr_factor < 0.5 || floor.training_bmr_factor < floor.rest_bmr_factor {
            return Err(ConfigError::InvalidRange(
                "Safety floors must be >= 0.5 x BMR and training >= rest",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_training_factor_tiers() {
        let tiers = ActivityTiersConfig::default();
        assert!((tiers.training_factor(0.0) - 1.55).abs() < f64::EPSILON);
        assert!((tiers.training_factor(4.99) - 1.55).abs() < f64::EPSILON);
        assert!((tiers.training_factor(5.0) - 1.65).abs() < f64::EPSILON);
        assert!((tiers.training_factor(9.5) - 1.65).abs() < f64::EPSILON);
        assert!((tiers.training_factor(10.0) - 1.725).abs() < f64::EPSILON);
        assert!((tiers.training_factor(15.0) - 1.9).abs() < f64::EPSILON);
        assert!((tiers.training_factor(30.0) - 1.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(NutritionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_descending_tiers_rejected() {
        let mut config = NutritionConfig::default();
        config.activity_tiers.high_factor = 1.6;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_carb_share_out_of_range_rejected() {
        let mut config = NutritionConfig::default();
        config.macros.rest_carb_share = 1.2;
        assert!(config.validate().is_err());
    }
}
