// ABOUTME: Integration tests for the weight-loss timeline projection
// ABOUTME: Validates weeks to goal, goal dates and race-day alignment classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, NaiveDate};
use keystone_fuel::config::intelligence::WeightProjectionConfig;
use keystone_fuel::intelligence::weight_projection::{weekly_loss_lb, weeks_until};
use keystone_fuel::intelligence::{project_weight_goal, RaceAlignment};
use keystone_fuel::models::WeeklyRate;

#[test]
fn test_weekly_loss_matches_rate() {
    for rate in WeeklyRate::ALL {
        assert!((weekly_loss_lb(rate) - rate.pounds_per_week()).abs() < 1e-9);
    }
}

#[test]
fn test_weeks_and_goal_date() {
    let config = WeightProjectionConfig::default();
    let goal = project_weight_goal(&common::scenario_a_profile(), common::as_of(), &config);

    assert!((goal.weight_to_lose_lb - 20.0).abs() < 1e-9);
    assert_eq!(goal.weeks_to_goal, 20);
    assert_eq!(goal.goal_date, Some(common::date(2026, 5, 25)));
    assert!(goal.race.is_none());
}

#[test]
fn test_weeks_round_up() {
    let config = WeightProjectionConfig::default();
    let mut profile = common::scenario_a_profile();
    profile.target_weight_lb = Some(207.5);
    profile.weekly_rate = WeeklyRate::OneAndHalfPounds;

    let goal = project_weight_goal(&profile, common::as_of(), &config);
    // 12.5 lb at 1.5 lb/week
    assert_eq!(goal.weeks_to_goal, 9);
}

#[test]
fn test_no_weeks_without_loss_or_rate() {
    let config = WeightProjectionConfig::default();

    let mut maintain = common::scenario_a_profile();
    maintain.weekly_rate = WeeklyRate::Maintain;
    let goal = project_weight_goal(&maintain, common::as_of(), &config);
    assert_eq!(goal.weeks_to_goal, 0);
    assert!(goal.goal_date.is_none());

    let mut gaining = common::scenario_a_profile();
    gaining.target_weight_lb = Some(230.0);
    let goal = project_weight_goal(&gaining, common::as_of(), &config);
    assert!((goal.weight_to_lose_lb + 10.0).abs() < 1e-9);
    assert_eq!(goal.weeks_to_goal, 0);

    let mut no_target = common::scenario_a_profile();
    no_target.target_weight_lb = None;
    let goal = project_weight_goal(&no_target, common::as_of(), &config);
    assert!(goal.weight_to_lose_lb.abs() < f64::EPSILON);
    assert_eq!(goal.weeks_to_goal, 0);
}

#[test]
fn test_race_alignment() {
    let config = WeightProjectionConfig::default();
    let mut profile = common::scenario_a_profile();

    // 22 weeks at 1 lb/week: 198 lb against a 200 lb target
    profile.race_date = Some(common::date(2026, 6, 14));
    let race = project_weight_goal(&profile, common::as_of(), &config)
        .race
        .unwrap();
    assert_eq!(race.weeks_to_race, 22);
    assert!((race.projected_weight_lb - 198.0).abs() < 1e-9);
    assert_eq!(race.alignment, Some(RaceAlignment::Aligned));

    // 8 weeks: 212 lb
    profile.race_date = Some(common::date(2026, 3, 2));
    let race = project_weight_goal(&profile, common::as_of(), &config)
        .race
        .unwrap();
    assert_eq!(race.weeks_to_race, 8);
    assert_eq!(race.alignment, Some(RaceAlignment::BehindSchedule));

    // Target 215 lb, projected 198 lb
    profile.race_date = Some(common::date(2026, 6, 14));
    profile.target_weight_lb = Some(215.0);
    let race = project_weight_goal(&profile, common::as_of(), &config)
        .race
        .unwrap();
    assert_eq!(race.alignment, Some(RaceAlignment::AheadOfSchedule));
}

#[test]
fn test_race_without_target_has_no_gap() {
    let config = WeightProjectionConfig::default();
    let mut profile = common::scenario_a_profile();
    profile.target_weight_lb = None;
    profile.race_date = Some(common::date(2026, 6, 14));

    let race = project_weight_goal(&profile, common::as_of(), &config)
        .race
        .unwrap();
    assert!(race.gap_lb.is_none());
    assert!(race.alignment.is_none());
}

#[test]
fn test_weeks_until_clamps_past_dates() {
    assert_eq!(weeks_until(common::as_of(), common::date(2025, 12, 1)), 0);
    assert_eq!(weeks_until(common::as_of(), common::date(2026, 1, 11)), 0);
    assert_eq!(weeks_until(common::as_of(), common::date(2026, 1, 12)), 1);
}

#[test]
fn test_goal_date_past_calendar_end_is_none() {
    let config = WeightProjectionConfig::default();
    let as_of = NaiveDate::MAX - Duration::days(30);

    let goal = project_weight_goal(&common::scenario_a_profile(), as_of, &config);
    assert_eq!(goal.weeks_to_goal, 20);
    assert!(goal.goal_date.is_none());
}
