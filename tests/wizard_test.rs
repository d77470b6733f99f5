// ABOUTME: Integration tests for the five-step wizard sessions
// ABOUTME: Validates step gating, guards, back/reset behaviour and input policies end to end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use keystone_fuel::config::CalculatorConfig;
use keystone_fuel::errors::ErrorCode;
use keystone_fuel::models::{RaceType, WeeklyRate};
use keystone_fuel::wizard::{
    FormFlow, InputPolicy, RaceForm, WeightGoalForm, WizardSession, WizardStep,
};

#[test]
fn test_race_session_walks_to_results() {
    common::init_test_logging();
    let config = CalculatorConfig::default();
    let ctx = common::flow(&config, InputPolicy::Lenient);
    let mut session = WizardSession::new(RaceForm::default());

    assert_eq!(session.advance(&ctx).unwrap(), WizardStep::One);

    session.update(|form| form.set_field("race", "70.3").unwrap());
    assert_eq!(session.advance(&ctx).unwrap(), WizardStep::Two);
    session.update(|form| form.set_field("gender", "female").unwrap());
    assert_eq!(session.advance(&ctx).unwrap(), WizardStep::Three);
    session.update(|form| {
        form.set_field("weight", "135").unwrap();
        form.set_field("height", "65").unwrap();
    });
    assert_eq!(session.advance(&ctx).unwrap(), WizardStep::Four);
    assert!(session.plan().is_none());

    // Conditions are optional
    assert_eq!(session.advance(&ctx).unwrap(), WizardStep::Results);
    let plan = session.plan().unwrap();
    assert_eq!(plan.race.race, RaceType::HalfIronman);
    assert_eq!(plan.during_race.carbs_per_hour_g, 75);
}

#[test]
fn test_finish_names_first_missing_field() {
    let config = CalculatorConfig::default();
    let ctx = common::flow(&config, InputPolicy::Lenient);
    let mut session = WizardSession::new(RaceForm {
        race_type: "marathon".into(),
        ..RaceForm::default()
    });

    let error = session.finish(&ctx).unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.details["field"], "gender");
    assert_eq!(error.details["step"], 2);
    assert_eq!(session.step(), WizardStep::Two);
}

#[test]
fn test_back_from_results_discards_plan() {
    let config = CalculatorConfig::default();
    let ctx = common::flow(&config, InputPolicy::Lenient);
    let mut session = WizardSession::new(common::scenario_b_form());
    session.finish(&ctx).unwrap();
    assert_eq!(session.step(), WizardStep::Results);

    assert_eq!(session.back(), WizardStep::Four);
    assert!(session.plan().is_none());

    session.reset();
    assert_eq!(session.step(), WizardStep::One);
    assert_eq!(session.form(), &RaceForm::default());
}

#[test]
fn test_weight_goal_session_computes_plan() {
    let config = CalculatorConfig::default();
    let ctx = common::flow(&config, InputPolicy::Strict);
    let mut session = WizardSession::new(common::weight_goal_form());

    let plan = session.finish(&ctx).unwrap();
    assert_eq!(plan.schedule.training_days, 4);
    assert_eq!(plan.weight_goal.weeks_to_goal, 15);
    assert_eq!(plan.advice.selected, WeeklyRate::OnePound);
}

#[test]
fn test_guard_redirects_when_target_cleared() {
    let config = CalculatorConfig::default();
    let ctx = common::flow(&config, InputPolicy::Lenient);
    let mut session = WizardSession::new(common::weight_goal_form());
    session.finish(&ctx).unwrap();

    session.update(|form| form.target_weight.clear());
    assert_eq!(session.step(), WizardStep::One);
    assert!(session.plan().is_none());
}

#[test]
fn test_weight_goal_step_three_needs_target() {
    let mut form = common::weight_goal_form();
    form.target_weight = String::new();
    assert!(form.can_continue(WizardStep::Two));
    assert!(!form.can_continue(WizardStep::Three));
}

#[test]
fn test_strict_parse_error_keeps_step() {
    let config = CalculatorConfig::default();
    let ctx = common::flow(&config, InputPolicy::Strict);
    let mut form = common::weight_goal_form();
    form.age = "forty".into();
    let mut session = WizardSession::new(form);

    let error = session.finish(&ctx).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
    assert_eq!(session.step(), WizardStep::Four);

    // The same form falls back to the default age when lenient
    let lenient = common::flow(&config, InputPolicy::Lenient);
    let plan = session.finish(&lenient).unwrap();
    assert!(plan.bmr > 0);
}

#[test]
fn test_step_metadata() {
    for step in WizardStep::ALL {
        assert!(!RaceForm::step_title(step).is_empty());
        assert!(!WeightGoalForm::step_title(step).is_empty());
    }
    assert_eq!(RaceForm::step_fields(WizardStep::Three), ["weight", "height"]);
    assert_eq!(WeightGoalForm::step_fields(WizardStep::Four), ["weekly_rate"]);
    assert!(RaceForm::step_fields(WizardStep::Results).is_empty());
}

#[test]
fn test_displayed_rate_is_accepted_back() {
    let config = CalculatorConfig::default();
    let mut form = common::weight_goal_form();
    form.weekly_rate = WeeklyRate::OneAndHalfPounds.to_string();

    for policy in [InputPolicy::Lenient, InputPolicy::Strict] {
        let plan = form.compute(&common::flow(&config, policy)).unwrap();
        assert_eq!(plan.advice.selected, WeeklyRate::OneAndHalfPounds);
    }
}
