// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, reference dates and athlete/race form fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `keystone_fuel`

use std::sync::Once;

use chrono::NaiveDate;
use keystone_fuel::config::CalculatorConfig;
use keystone_fuel::models::{
    AthleteProfile, Gender, RaceConditions, RaceProfile, RaceType, RacingGoal, Sport,
    TrainingDays, WeeklyRate,
};
use keystone_fuel::wizard::{FlowContext, InputPolicy, RaceForm, WeightGoalForm};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed reference date so timelines are reproducible
pub fn as_of() -> NaiveDate {
    date(2026, 1, 5)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Calculator context with default coefficients
pub fn flow(config: &CalculatorConfig, policy: InputPolicy) -> FlowContext<'_> {
    FlowContext {
        config,
        policy,
        as_of: as_of(),
    }
}

/// Male, 45 y, 220 lb, 70 in, 8 h/week, 1.0 lb/week
pub fn scenario_a_profile() -> AthleteProfile {
    AthleteProfile {
        gender: Gender::Male,
        age: 45,
        weight_lb: 220.0,
        height_in: 70.0,
        weekly_training_hours: 8.0,
        training_days: TrainingDays::parse_lossy("mon,tue,thu,sat"),
        sport: Sport::Triathlon,
        racing_goal: RacingGoal::Finish,
        target_weight_lb: Some(200.0),
        race_date: None,
        weekly_rate: WeeklyRate::OnePound,
    }
}

/// Olympic triathlon, male, 170 lb, Medium / 75°F / Light / Humid / Partly
pub fn scenario_b_form() -> RaceForm {
    RaceForm {
        race_type: "Olympic Triathlon".into(),
        gender: "male".into(),
        weight: "170".into(),
        height: "70".into(),
        sweat_type: "Medium".into(),
        avg_temp: "75".into(),
        wind: "Light".into(),
        humidity: "Humid".into(),
        sun: "Partly".into(),
    }
}

/// Race profile with no conditions selected
pub fn bare_race_profile(race: RaceType, gender: Gender, weight_lb: f64) -> RaceProfile {
    RaceProfile {
        race,
        gender,
        weight_lb,
        height_in: 68.0,
        conditions: RaceConditions::default(),
    }
}

/// Complete weight-goal form for a 180 lb female aiming for 165 lb
pub fn weight_goal_form() -> WeightGoalForm {
    WeightGoalForm {
        gender: "female".into(),
        age: "34".into(),
        weight: "180".into(),
        height: "66".into(),
        weekly_hours: "9".into(),
        training_days: "mon,wed,fri,sat".into(),
        sport: "running".into(),
        racing_goal: "pb".into(),
        target_weight: "165".into(),
        race_date: "2026-06-14".into(),
        weekly_rate: "1.0".into(),
    }
}
