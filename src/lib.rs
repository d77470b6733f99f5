// ABOUTME: Main library entry point for the Keystone endurance nutrition calculators
// ABOUTME: Race-day fueling and weight-goal planning with a form wizard and configurable coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Keystone Fuel
//!
//! Nutrition calculators for endurance athletes.
//!
//! ## Features
//!
//! - **Race-day fueling**: taper, race-morning, in-race and recovery targets,
//!   with fluid and sodium scaled by sweat type, temperature, wind, humidity and sun
//! - **Weight-goal planning**: training, rest and event day targets above a
//!   BMR-derived floor, a weekly schedule, a loss timeline and rate advice
//! - **Wizard**: a five-step form flow decoupled from the calculators
//!
//! ## Architecture
//!
//! - **Config**: calculator coefficients with `KEYSTONE_*` environment overrides
//! - **Intelligence**: pure calculators; identical input gives identical output
//! - **Wizard**: raw forms, input policy and step transitions
//! - **Logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use keystone_fuel::config::CalculatorConfig;
//! use keystone_fuel::intelligence::calculate_race_plan;
//! use keystone_fuel::wizard::{InputPolicy, RaceForm};
//!
//! # fn main() -> keystone_core::errors::AppResult<()> {
//! let config = CalculatorConfig::global();
//! let form = RaceForm {
//!     race_type: "Olympic Triathlon".into(),
//!     gender: "male".into(),
//!     weight: "170".into(),
//!     height: "70".into(),
//!     ..RaceForm::default()
//! };
//! let profile = form.to_profile(InputPolicy::Strict, &config.inputs)?;
//! let plan = calculate_race_plan(&profile, config);
//! println!("{} g carbs per hour", plan.during_race.carbs_per_hour_g);
//! # Ok(())
//! # }
//! ```

/// Calculator configuration and environment overrides
pub mod config;

/// Race-day fueling and weight-goal calculators
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Form wizard, input parsing and step transitions
pub mod wizard;

pub use keystone_core::{constants, errors, models};
