// ABOUTME: Top-level calculator configuration with environment overrides and validation
// ABOUTME: Provides the lazily loaded global configuration used by the CLI and calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calculator configuration
//!
//! Defaults reproduce the published formulas. Any coefficient can be overridden
//! through a `KEYSTONE_*` environment variable; the result is validated before use.

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::intelligence::{
    ConfigError, HydrationConfig, InputConfig, NutritionConfig, RaceFuelingConfig,
    WeightGoalConfig,
};

/// Global configuration singleton
static CALCULATOR_CONFIG: OnceLock<CalculatorConfig> = OnceLock::new();

/// Complete calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Weight-goal day target settings
    pub nutrition: NutritionConfig,
    /// Race-day fueling settings
    pub race_fueling: RaceFuelingConfig,
    /// Fluid and sodium baselines
    pub hydration: HydrationConfig,
    /// Timeline projection and rate advice
    pub weight_goal: WeightGoalConfig,
    /// Form input defaults and limits
    pub inputs: InputConfig,
}

impl CalculatorConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        CALCULATOR_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load calculator config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section error encountered
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()?;
        self.race_fueling.validate()?;
        self.hydration.validate()?;
        self.weight_goal.validate()?;
        self.inputs.validate()?;
        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply `KEYSTONE_*` environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` naming the first variable that fails to parse
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Activity tiers
        Self::apply_env_var(
            "KEYSTONE_LIGHT_ACTIVITY_FACTOR",
            &mut self.nutrition.activity_tiers.light_factor,
        )?;
        Self::apply_env_var(
            "KEYSTONE_MODERATE_ACTIVITY_FACTOR",
            &mut self.nutrition.activity_tiers.moderate_factor,
        )?;
        Self::apply_env_var(
            "KEYSTONE_HIGH_ACTIVITY_FACTOR",
            &mut self.nutrition.activity_tiers.high_factor,
        )?;
        Self::apply_env_var(
            "KEYSTONE_EXTREME_ACTIVITY_FACTOR",
            &mut self.nutrition.activity_tiers.extreme_factor,
        )?;
        Self::apply_env_var(
            "KEYSTONE_REST_DAY_FACTOR",
            &mut self.nutrition.activity_tiers.rest_day_factor,
        )?;

        // Macros and floors
        Self::apply_env_var(
            "KEYSTONE_PROTEIN_G_PER_KG",
            &mut self.nutrition.macros.protein_g_per_kg,
        )?;
        Self::apply_env_var(
            "KEYSTONE_TRAINING_CARB_SHARE",
            &mut self.nutrition.macros.training_carb_share,
        )?;
        Self::apply_env_var(
            "KEYSTONE_REST_CARB_SHARE",
            &mut self.nutrition.macros.rest_carb_share,
        )?;
        Self::apply_env_var(
            "KEYSTONE_TRAINING_FLOOR_BMR_FACTOR",
            &mut self.nutrition.safety_floor.training_bmr_factor,
        )?;
        Self::apply_env_var(
            "KEYSTONE_REST_FLOOR_BMR_FACTOR",
            &mut self.nutrition.safety_floor.rest_bmr_factor,
        )?;

        // Race fueling
        Self::apply_env_var(
            "KEYSTONE_LONG_RACE_HOURS",
            &mut self.race_fueling.long_race_hours,
        )?;
        Self::apply_env_var(
            "KEYSTONE_CAFFEINE_MG_PER_KG",
            &mut self.race_fueling.race_morning.caffeine_mg_per_kg,
        )?;
        Self::apply_env_var(
            "KEYSTONE_ULTRA_CARBS_G_PER_HOUR",
            &mut self.race_fueling.carb_tiers.ultra_g_per_hour,
        )?;

        // Hydration
        Self::apply_env_var(
            "KEYSTONE_MALE_FLUID_OZ_PER_HOUR",
            &mut self.hydration.male_fluid_oz_per_hour,
        )?;
        Self::apply_env_var(
            "KEYSTONE_FEMALE_FLUID_OZ_PER_HOUR",
            &mut self.hydration.female_fluid_oz_per_hour,
        )?;

        // Weight goal
        Self::apply_env_var(
            "KEYSTONE_ALIGNED_TOLERANCE_LB",
            &mut self.weight_goal.projection.aligned_tolerance_lb,
        )?;

        // Input defaults
        Self::apply_env_var("KEYSTONE_DEFAULT_AGE", &mut self.inputs.defaults.age)?;
        Self::apply_env_var(
            "KEYSTONE_DEFAULT_WEIGHT_KG",
            &mut self.inputs.defaults.weight_kg,
        )?;
        Self::apply_env_var(
            "KEYSTONE_DEFAULT_HEIGHT_IN",
            &mut self.inputs.defaults.height_in,
        )?;
        Self::apply_env_var(
            "KEYSTONE_DEFAULT_TEMPERATURE_F",
            &mut self.inputs.defaults.temperature_f,
        )?;

        Ok(self)
    }
}
