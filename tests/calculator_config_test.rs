// ABOUTME: Integration tests for calculator configuration loading
// ABOUTME: Validates defaults, KEYSTONE_* environment overrides and validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;

use keystone_fuel::config::{CalculatorConfig, ConfigError};
use keystone_fuel::errors::{AppError, ErrorCode};
use keystone_fuel::intelligence::calculate_race_plan;
use keystone_fuel::models::{Gender, RaceType};
use serial_test::serial;

const OVERRIDES: [&str; 4] = [
    "KEYSTONE_MALE_FLUID_OZ_PER_HOUR",
    "KEYSTONE_TRAINING_CARB_SHARE",
    "KEYSTONE_DEFAULT_AGE",
    "KEYSTONE_MODERATE_ACTIVITY_FACTOR",
];

fn clear_overrides() {
    for name in OVERRIDES {
        env::remove_var(name);
    }
}

#[test]
fn test_defaults_validate() {
    let config = CalculatorConfig::default();
    assert!(config.validate().is_ok());
    assert!((config.nutrition.activity_tiers.training_factor(8.0) - 1.65).abs() < f64::EPSILON);
    assert!((config.hydration.male_fluid_oz_per_hour - 24.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_env_overrides_apply() {
    clear_overrides();
    env::set_var("KEYSTONE_MALE_FLUID_OZ_PER_HOUR", "30");
    env::set_var("KEYSTONE_DEFAULT_AGE", " 50 ");

    let config = CalculatorConfig::load();
    clear_overrides();
    let config = config.unwrap();

    assert!((config.hydration.male_fluid_oz_per_hour - 30.0).abs() < f64::EPSILON);
    assert_eq!(config.inputs.defaults.age, 50);

    let plan = calculate_race_plan(
        &common::bare_race_profile(RaceType::TenK, Gender::Male, 160.0),
        &config,
    );
    // 30 oz/h in the default 70°F warm band
    assert_eq!(plan.during_race.fluid_oz_per_hour, 36);
}

#[test]
#[serial]
fn test_unparsable_override_is_rejected() {
    clear_overrides();
    env::set_var("KEYSTONE_TRAINING_CARB_SHARE", "most");

    let result = CalculatorConfig::load();
    clear_overrides();

    match result {
        Err(ConfigError::Parse(message)) => {
            assert!(message.contains("KEYSTONE_TRAINING_CARB_SHARE"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_out_of_order_tiers_fail_validation() {
    clear_overrides();
    env::set_var("KEYSTONE_MODERATE_ACTIVITY_FACTOR", "1.2");

    let result = CalculatorConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError = ConfigError::ValueOutOfRange("carb share must be within 0..=1").into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert_eq!(error.code.exit_code(), 3);
}

#[test]
fn test_missing_sections_take_defaults() {
    let config: CalculatorConfig = serde_json::from_str(
        r#"{
            "hydration": {
                "male_fluid_oz_per_hour": 26.0,
                "female_fluid_oz_per_hour": 18.0,
                "long_race_sodium_mg_per_hour": 650.0,
                "short_race_sodium_mg_per_hour": 400.0
            }
        }"#,
    )
    .unwrap();

    assert!((config.hydration.female_fluid_oz_per_hour - 18.0).abs() < f64::EPSILON);
    assert!((config.nutrition.bmr.msj_weight_coef - 10.0).abs() < f64::EPSILON);
    assert!(config.validate().is_ok());
}
