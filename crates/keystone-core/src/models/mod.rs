// ABOUTME: Core data models for athlete profiles, race definitions and race-day conditions
// ABOUTME: Re-exports the typed inputs consumed by the fueling and weight-goal calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Typed inputs for the calculators. Every lookup table here is an immutable
//! enum with `const fn` accessors; there is no runtime registry.
//!
//! ## Core Models
//!
//! - `AthleteProfile`: weight-goal planner input
//! - `RaceProfile`: race-day fueling input
//! - `RaceType` / `RaceDefinition`: static race table
//! - `SweatType`, `WindCondition`, `HumidityLevel`, `SunExposure`, `TemperatureBand`:
//!   environmental multiplier tables

mod athlete;
mod environment;
mod race;

pub use athlete::{
    AthleteProfile, Gender, RacingGoal, Sport, TrainingDays, WeeklyRate, ALL_WEEKDAYS,
};
pub use environment::{
    ConditionCategory, HumidityLevel, RaceConditions, SunExposure, SweatType, TemperatureBand,
    WindCondition,
};
pub use race::{RaceCategory, RaceDefinition, RaceProfile, RaceType, TriathlonLegs};

/// Normalize a free-form selection key: lowercase ASCII alphanumerics plus '.'
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
