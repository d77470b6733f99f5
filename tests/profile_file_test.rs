// ABOUTME: Integration tests for loading wizard forms from profile files
// ABOUTME: Validates JSON and YAML parsing, camelCase aliases and read/parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;
use std::path::Path;

use keystone_fuel::config::CalculatorConfig;
use keystone_fuel::errors::ErrorCode;
use keystone_fuel::models::{RaceType, WeeklyRate};
use keystone_fuel::wizard::{load_form, FormFlow, InputPolicy, RaceForm, WeightGoalForm};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_yaml_weight_goal_profile() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "athlete.yaml",
        "gender: male\n\
         age: 45\n\
         currentWeight: 220\n\
         height: 70\n\
         weeklyHours: 8\n\
         trainingDays: [mon, tue, thu, sat]\n\
         targetWeight: 200\n\
         weeklyRate: \"1.0\"\n",
    );

    let form: WeightGoalForm = load_form(&path).unwrap();
    assert_eq!(form.weight, "220");
    assert_eq!(form.training_days, "mon,tue,thu,sat");

    let config = CalculatorConfig::default();
    let plan = form
        .compute(&common::flow(&config, InputPolicy::Strict))
        .unwrap();
    assert_eq!(plan.bmr, 1889);
    assert_eq!(plan.advice.selected, WeeklyRate::OnePound);
}

#[test]
fn test_json_race_profile() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "race.json",
        r#"{"raceType": "Full Marathon", "gender": "female", "weight": 128.5, "height": 64, "avgTemp": 88}"#,
    );

    let form: RaceForm = load_form(&path).unwrap();
    assert_eq!(form.avg_temp, "88");

    let config = CalculatorConfig::default();
    let plan = form
        .compute(&common::flow(&config, InputPolicy::Strict))
        .unwrap();
    assert_eq!(plan.race.race, RaceType::Marathon);
    // 20 oz/h in the hot band
    assert_eq!(plan.during_race.fluid_oz_per_hour, 28);
}

#[test]
fn test_missing_file_is_storage_error() {
    let result: Result<RaceForm, _> = load_form(Path::new("/nonexistent/keystone/profile.json"));
    assert_eq!(result.unwrap_err().code, ErrorCode::StorageError);
}

#[test]
fn test_malformed_yaml_is_invalid_format() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.yml", "gender: [male\n");

    let result: Result<WeightGoalForm, _> = load_form(&path);
    assert_eq!(result.unwrap_err().code, ErrorCode::InvalidFormat);
}

#[test]
fn test_nested_values_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "nested.json", r#"{"weight": {"value": 170}}"#);

    let error = load_form::<RaceForm>(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
    assert_eq!(error.field(), Some("weight"));
}
