// ABOUTME: Weight-goal nutrition calculator using peer-reviewed formulas
// ABOUTME: BMR, training/rest/event day targets with safety floors, weekly schedule and plan assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Day targets for an athlete losing weight while training.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Helms, E.R., et al. (2014). A systematic review of dietary protein during caloric
//!   restriction in resistance trained lean athletes.
//!   *Journal of the International Society of Sports Nutrition*, 11, 20.
//!   <https://doi.org/10.1186/1550-2783-11-20>
//!
//! - Impey, S.G., et al. (2018). Fuel for the work required.
//!   *Sports Medicine*, 48, 1031-1048.
//!   <https://doi.org/10.1007/s40279-018-0867-7>

use std::fmt;

use chrono::{NaiveDate, Weekday};
use keystone_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use keystone_core::constants::units::{inches_to_cm, pounds_to_kg};
use keystone_core::models::{AthleteProfile, Gender, TrainingDays, WeeklyRate, ALL_WEEKDAYS};
use serde::Serialize;
use tracing::debug;

use super::rate_advisor::{recommend_rate, RateAdvice};
use super::weight_projection::{project_weight_goal, WeightGoal};
use super::{grams_per_kg, round_whole, MacroGrams};
use crate::config::intelligence::{BmrConfig, NutritionConfig};
use crate::config::CalculatorConfig;

/// Kind of day a target applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Scheduled training session
    Training,
    /// No training
    Rest,
    /// Race or key event; fuelled at maintenance
    Event,
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Training => write!(f, "training"),
            Self::Rest => write!(f, "rest"),
            Self::Event => write!(f, "event"),
        }
    }
}

/// Calorie and macro target for one day type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayTarget {
    /// Day type
    pub day_type: DayType,
    /// Calories, reconciled from the rounded grams
    pub calories: u32,
    /// Whole-gram macros
    #[serde(flatten)]
    pub macros: MacroGrams,
    /// TDEE for this day type
    pub maintenance_calories: u32,
    /// Deficit actually applied: maintenance minus the (possibly raised) target
    pub deficit: u32,
    /// Deficit the selected weekly rate asks for
    pub selected_deficit: u32,
    /// Minimum calories for this day type
    pub safety_floor: u32,
    /// Whether the deficit target was raised to the floor
    pub hit_minimum: bool,
}

/// One weekday in the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduledDay {
    /// Weekday
    pub weekday: Weekday,
    /// Day type
    pub day_type: DayType,
    /// Calories for the day
    pub calories: u32,
}

/// Week of day types in Monday-first order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklySchedule {
    /// Seven days, Monday first
    pub days: Vec<ScheduledDay>,
    /// Number of training days
    pub training_days: u32,
    /// Sum of the seven days
    pub weekly_calories: u32,
    /// Weekly calories over seven days, rounded
    pub average_daily_calories: u32,
}

/// Complete weight-goal nutrition plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionPlan {
    /// Reference date for every date-dependent figure
    pub as_of: NaiveDate,
    /// Body mass (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Basal metabolic rate (kcal/day)
    pub bmr: u32,
    /// Training-day target
    pub training_day: DayTarget,
    /// Rest-day target
    pub rest_day: DayTarget,
    /// Event-day target
    pub event_day: DayTarget,
    /// Weekly schedule
    pub schedule: WeeklySchedule,
    /// Weight-loss timeline
    pub weight_goal: WeightGoal,
    /// Rate recommendation
    pub advice: RateAdvice,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor formula
///
/// Formula:
/// - Men: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(years) + 5
/// - Women: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(years) - 161
///
/// Rounded to the nearest kcal.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> u32 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    round_whole(weight_component + height_component + age_component + gender_constant)
}

/// Minimum calories for a day type: `ceil(factor x BMR)`
#[must_use]
pub fn safety_floor(bmr: u32, day_type: DayType, config: &NutritionConfig) -> u32 {
    let factor = match day_type {
        DayType::Training | DayType::Event => config.safety_floor.training_bmr_factor,
        DayType::Rest => config.safety_floor.rest_bmr_factor,
    };
    let floor = (f64::from(bmr) * factor).ceil();
    if floor.is_finite() && floor > 0.0 {
        floor as u32
    } else {
        0
    }
}

/// Calculate the target for one day type
///
/// Protein is fixed per kg; the remaining calories are split between carbohydrate
/// and fat, with fat as the residual. Calories are recomputed from the rounded
/// grams and, if rounding dropped them under the floor, carbohydrate is topped up.
#[must_use]
pub fn calculate_day_target(
    day_type: DayType,
    bmr: u32,
    weekly_training_hours: f64,
    weight_kg: f64,
    rate: WeeklyRate,
    config: &NutritionConfig,
) -> DayTarget {
    let activity_factor = match day_type {
        DayType::Training | DayType::Event => {
            config.activity_tiers.training_factor(weekly_training_hours)
        }
        DayType::Rest => config.activity_tiers.rest_day_factor,
    };
    let maintenance_calories = round_whole(f64::from(bmr) * activity_factor);
    let selected_deficit = match day_type {
        DayType::Event => 0,
        DayType::Training | DayType::Rest => rate.daily_deficit_kcal(),
    };
    let floor = safety_floor(bmr, day_type, config);

    let target = maintenance_calories.saturating_sub(selected_deficit);
    let hit_minimum = day_type != DayType::Event && target < floor;
    let target = if hit_minimum { floor } else { target };
    let deficit = maintenance_calories.saturating_sub(target);

    let carb_share = match day_type {
        DayType::Training | DayType::Event => config.macros.training_carb_share,
        DayType::Rest => config.macros.rest_carb_share,
    };
    let protein_g = grams_per_kg(weight_kg, config.macros.protein_g_per_kg);
    let remaining = f64::from(target.saturating_sub(protein_g * KCAL_PER_GRAM_PROTEIN));
    let mut macros = MacroGrams::new(
        protein_g,
        round_whole(remaining * carb_share / f64::from(KCAL_PER_GRAM_CARBS)),
        round_whole(remaining * (1.0 - carb_share) / f64::from(KCAL_PER_GRAM_FAT)),
    );

    let reconciled = macros.calories();
    if reconciled < floor {
        macros.carbs_g += (floor - reconciled).div_ceil(KCAL_PER_GRAM_CARBS);
    }

    debug!(
        %day_type,
        maintenance_calories,
        selected_deficit,
        deficit,
        floor,
        hit_minimum,
        calories = macros.calories(),
        "Calculated day target"
    );

    DayTarget {
        day_type,
        calories: macros.calories(),
        macros,
        maintenance_calories,
        deficit,
        selected_deficit,
        safety_floor: floor,
        hit_minimum,
    }
}

/// Lay out the week: selected training days are training days, the rest are rest days
#[must_use]
pub fn build_weekly_schedule(
    training_days: &TrainingDays,
    training: &DayTarget,
    rest: &DayTarget,
) -> WeeklySchedule {
    let days: Vec<ScheduledDay> = ALL_WEEKDAYS
        .into_iter()
        .map(|weekday| {
            let target = if training_days.contains(weekday) {
                training
            } else {
                rest
            };
            ScheduledDay {
                weekday,
                day_type: target.day_type,
                calories: target.calories,
            }
        })
        .collect();
    let weekly_calories: u32 = days.iter().map(|day| day.calories).sum();

    WeeklySchedule {
        training_days: training_days.count() as u32,
        average_daily_calories: round_whole(f64::from(weekly_calories) / days.len() as f64),
        weekly_calories,
        days,
    }
}

/// Calculate the complete weight-goal plan as of `as_of`
#[must_use]
pub fn calculate_nutrition_plan(
    profile: &AthleteProfile,
    as_of: NaiveDate,
    config: &CalculatorConfig,
) -> NutritionPlan {
    let weight_kg = pounds_to_kg(profile.weight_lb);
    let height_cm = inches_to_cm(profile.height_in);
    let nutrition = &config.nutrition;
    let bmr = calculate_mifflin_st_jeor(
        weight_kg,
        height_cm,
        profile.age,
        profile.gender,
        &nutrition.bmr,
    );

    debug!(
        weight_kg,
        height_cm,
        age = profile.age,
        bmr,
        weekly_hours = profile.weekly_training_hours,
        rate = %profile.weekly_rate,
        "Calculating nutrition plan"
    );

    let day = |day_type| {
        calculate_day_target(
            day_type,
            bmr,
            profile.weekly_training_hours,
            weight_kg,
            profile.weekly_rate,
            nutrition,
        )
    };
    let training_day = day(DayType::Training);
    let rest_day = day(DayType::Rest);
    let event_day = day(DayType::Event);

    let schedule = build_weekly_schedule(&profile.training_days, &training_day, &rest_day);
    let weight_goal = project_weight_goal(profile, as_of, &config.weight_goal.projection);
    let advice = recommend_rate(profile, &weight_goal, as_of, &config.weight_goal.advisor);

    NutritionPlan {
        as_of,
        weight_kg,
        height_cm,
        bmr,
        training_day,
        rest_day,
        event_day,
        schedule,
        weight_goal,
        advice,
    }
}
