// ABOUTME: Calculator configuration sections grouped by domain
// ABOUTME: Nutrition, race fueling, hydration, weight goal and input handling settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calculator Configuration Sections
//!
//! Configuration is organized into domain-specific modules:
//! - `nutrition` - BMR coefficients, activity tiers, macro split and safety floors
//! - `race_fueling` - Race-day per-kg targets, duration tiers and hydration baselines
//! - `goals` - Weight timeline projection and loss-rate advice
//! - `inputs` - Form input defaults and strict-parsing limits
//!
//! The sections are composed by
//! [`CalculatorConfig`](crate::config::intelligence_config::CalculatorConfig).

pub mod error;
pub mod goals;
pub mod inputs;
pub mod nutrition;
pub mod race_fueling;

pub use error::ConfigError;
pub use goals::{RateAdvisorConfig, WeightGoalConfig, WeightProjectionConfig};
pub use inputs::{InputConfig, InputDefaultsConfig, InputLimitsConfig};
pub use nutrition::{
    ActivityTiersConfig, BmrConfig, MacroAllocationConfig, NutritionConfig, SafetyFloorConfig,
};
pub use race_fueling::{
    DurationCarbTiers, HydrationConfig, RaceFuelingConfig, RaceMorningConfig, RecoveryConfig,
    TaperConfig,
};
