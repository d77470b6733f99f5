// ABOUTME: Integration tests for the race-day fueling plan
// ABOUTME: Validates environmental multipliers, duration tiers, hydration, taper and recovery targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use keystone_fuel::config::CalculatorConfig;
use keystone_fuel::intelligence::{calculate_race_plan, FuelingStrategy, MealWindow};
use keystone_fuel::models::{Gender, RaceType};
use keystone_fuel::wizard::{FormFlow, InputPolicy};

#[test]
fn test_scenario_b_olympic_in_warm_humid_conditions() {
    common::init_test_logging();
    let config = CalculatorConfig::default();
    let plan = common::scenario_b_form()
        .compute(&common::flow(&config, InputPolicy::Strict))
        .unwrap();

    let during = &plan.during_race;
    assert!((during.environmental_multiplier - 1.32).abs() < 1e-9);
    assert_eq!(during.fluid_oz_per_hour, 32);
    assert_eq!(during.sodium_mg_per_hour, 792);
    assert_eq!(during.carbs_per_hour_g, 60);
    assert_eq!(during.total_carbs_g, 180);
    assert_eq!(during.strategy, FuelingStrategy::High);
    assert_eq!(during.conditions.temperature, "75°F, Warm (70-79°F)");
    assert_eq!(during.conditions.wind, "Light Breeze");

    assert_eq!(plan.race.breakdown, "0.93 mi swim, 24.8 mi bike, 6.2 mi run");
    assert_eq!(plan.race_morning.meal_window, MealWindow::ThreeToFourHours);
    assert_eq!(plan.race_morning.caffeine_mg, 308);
    assert!(plan.taper.carb_loading);
}

#[test]
fn test_multiplier_is_product_of_bounded_factors() {
    let config = CalculatorConfig::default();
    let plan = common::scenario_b_form()
        .compute(&common::flow(&config, InputPolicy::Lenient))
        .unwrap();
    let factors = plan.during_race.factors.factors();

    assert!(factors.iter().all(|f| (0.7..=1.6).contains(f)));
    let product: f64 = factors.iter().product();
    assert!((product - plan.during_race.environmental_multiplier).abs() < 1e-12);
}

#[test]
fn test_unknown_conditions_are_neutral_when_lenient() {
    let config = CalculatorConfig::default();
    let mut form = common::scenario_b_form();
    form.sweat_type = "drenched".into();
    form.wind = "gale".into();
    form.humidity = String::new();
    form.sun = "eclipse".into();

    let plan = form
        .compute(&common::flow(&config, InputPolicy::Lenient))
        .unwrap();
    let during = &plan.during_race;

    assert!((during.factors.sweat - 1.0).abs() < f64::EPSILON);
    assert!((during.factors.wind - 1.0).abs() < f64::EPSILON);
    assert!((during.factors.humidity - 1.0).abs() < f64::EPSILON);
    assert!((during.factors.sun - 1.0).abs() < f64::EPSILON);
    assert_eq!(during.conditions.sweat, "Not specified");
    // Only the 75°F warm band remains
    assert_eq!(during.fluid_oz_per_hour, 29);
}

#[test]
fn test_zero_temperature_uses_default_band() {
    let config = CalculatorConfig::default();
    let mut form = common::scenario_b_form();
    form.avg_temp = "0".into();
    form.sweat_type = String::new();
    form.wind = String::new();
    form.humidity = String::new();
    form.sun = String::new();

    for policy in [InputPolicy::Lenient, InputPolicy::Strict] {
        let plan = form.compute(&common::flow(&config, policy)).unwrap();
        let during = &plan.during_race;

        assert!((during.factors.temperature - 1.2).abs() < f64::EPSILON);
        assert!((during.environmental_multiplier - 1.2).abs() < 1e-9);
        assert_eq!(during.conditions.temperature, "70°F, Warm (70-79°F)");
        assert_eq!(during.fluid_oz_per_hour, 29);
    }
}

#[test]
fn test_short_race_needs_no_in_race_carbs() {
    let config = CalculatorConfig::default();
    let profile = common::bare_race_profile(RaceType::FiveK, Gender::Female, 130.0);
    let plan = calculate_race_plan(&profile, &config);

    assert!(!plan.during_race.fueling_needed);
    assert_eq!(plan.during_race.carbs_per_hour_g, 0);
    assert_eq!(plan.during_race.strategy, FuelingStrategy::None);
    assert_eq!(plan.race_morning.meal_window, MealWindow::TwoToThreeHours);
    assert_eq!(plan.race_morning.caffeine_mg, 0);
    assert_eq!(plan.race_morning.pre_start_carbs_g, 20);
    assert!(!plan.taper.carb_loading);
}

#[test]
fn test_ironman_uses_ultra_tier() {
    let config = CalculatorConfig::default();
    let profile = common::bare_race_profile(RaceType::FullIronman, Gender::Male, 180.0);
    let plan = calculate_race_plan(&profile, &config);

    assert_eq!(plan.during_race.carbs_per_hour_g, 75);
    assert_eq!(plan.during_race.total_carbs_g, 900);
    assert_eq!(plan.race_morning.pre_start_carbs_g, 30);
}

#[test]
fn test_all_races_reconcile_meal_calories() {
    let config = CalculatorConfig::default();
    for race in RaceType::ALL {
        for gender in [Gender::Male, Gender::Female] {
            let profile = common::bare_race_profile(race, gender, 150.0);
            let plan = calculate_race_plan(&profile, &config);

            assert_eq!(plan.taper.calories, plan.taper.macros.calories(), "{race}");
            assert_eq!(
                plan.recovery.immediate.calories,
                plan.recovery.immediate.macros.calories()
            );
            assert_eq!(
                plan.recovery.follow_up.calories,
                plan.recovery.follow_up.macros.calories()
            );
            assert_eq!(
                plan.race_morning.meal_calories,
                plan.race_morning.meal_carbs_g * 4 + plan.race_morning.meal_protein_g * 4
            );
        }
    }
}

#[test]
fn test_female_base_fluid_is_lower() {
    let config = CalculatorConfig::default();
    let male = calculate_race_plan(
        &common::bare_race_profile(RaceType::Marathon, Gender::Male, 150.0),
        &config,
    );
    let female = calculate_race_plan(
        &common::bare_race_profile(RaceType::Marathon, Gender::Female, 150.0),
        &config,
    );

    assert!(female.during_race.fluid_oz_per_hour < male.during_race.fluid_oz_per_hour);
    assert_eq!(
        female.during_race.sodium_mg_per_hour,
        male.during_race.sodium_mg_per_hour
    );
}
