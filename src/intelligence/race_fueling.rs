// ABOUTME: Race-day fueling calculator covering taper, race morning, in-race and recovery
// ABOUTME: Duration tiers and per-kg coefficients scaled by the environmental multiplier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Race Fueling Calculator
//!
//! # Scientific References
//!
//! - Jeukendrup, A. (2014). A step towards personalized sports nutrition: carbohydrate
//!   intake during exercise. *Sports Medicine*, 44(Suppl 1), S25-S33.
//!   <https://doi.org/10.1007/s40279-014-0148-z>
//!
//! - Burke, L.M., et al. (2011). Carbohydrates for training and competition.
//!   *Journal of Sports Sciences*, 29(sup1), S17-S27.
//!   <https://doi.org/10.1080/02640414.2011.585473>
//!
//! - Sawka, M.N., et al. (2007). Exercise and fluid replacement.
//!   *Medicine & Science in Sports & Exercise*, 39(2), 377-390.

use std::fmt;

use keystone_core::constants::units::pounds_to_kg;
use keystone_core::models::{Gender, RaceCategory, RaceProfile, RaceType};
use serde::Serialize;
use tracing::debug;

use super::environment::{ConditionLabels, EnvironmentalFactors};
use super::{grams_per_kg, round_whole, MacroGrams};
use crate::config::intelligence::{
    DurationCarbTiers, HydrationConfig, RaceFuelingConfig, RaceMorningConfig, RecoveryConfig,
    TaperConfig,
};
use crate::config::CalculatorConfig;

/// In-race fueling intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelingStrategy {
    /// Under an hour: water and electrolytes only
    None,
    /// Up to 2.5 hours
    Moderate,
    /// 2.5 hours and longer
    High,
}

impl fmt::Display for FuelingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Moderate => write!(f, "moderate"),
            Self::High => write!(f, "high"),
        }
    }
}

/// When to eat the race-morning meal relative to the start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MealWindow {
    /// 3-4 hours before the start
    ThreeToFourHours,
    /// 2-3 hours before the start
    TwoToThreeHours,
}

impl MealWindow {
    /// Earliest and latest hours before the start
    #[must_use]
    pub const fn hours_before_start(self) -> (u32, u32) {
        match self {
            Self::ThreeToFourHours => (4, 3),
            Self::TwoToThreeHours => (3, 2),
        }
    }
}

impl fmt::Display for MealWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (earliest, latest) = self.hours_before_start();
        write!(f, "{latest}-{earliest} hours before start")
    }
}

/// Race description carried into the plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceSummary {
    /// Race type
    pub race: RaceType,
    /// Race name
    pub name: &'static str,
    /// Distance label
    pub distance: &'static str,
    /// Course breakdown (legs for triathlons)
    pub breakdown: String,
    /// Expected duration (hours)
    pub duration_hours: f64,
    /// Category
    pub category: RaceCategory,
}

/// Daily targets for the days before the race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaperPlan {
    /// Per-day macros
    #[serde(flatten)]
    pub macros: MacroGrams,
    /// Per-day calories, reconciled from grams
    pub calories: u32,
    /// Whether the carbohydrate target is a carb load
    pub carb_loading: bool,
}

/// Race-morning meal and pre-start targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RaceMorningPlan {
    /// Meal timing
    pub meal_window: MealWindow,
    /// Meal carbohydrate (g)
    pub meal_carbs_g: u32,
    /// Meal protein (g)
    pub meal_protein_g: u32,
    /// Meal calories from carbohydrate and protein
    pub meal_calories: u32,
    /// Quick carbohydrate in the last 15 minutes before the start (g)
    pub pre_start_carbs_g: u32,
    /// Optional caffeine (mg); 0 when not recommended
    pub caffeine_mg: u32,
}

/// In-race carbohydrate, fluid and sodium targets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuringRacePlan {
    /// Whether the race is long enough to need in-race fuel
    pub fueling_needed: bool,
    /// Fueling intensity
    pub strategy: FuelingStrategy,
    /// Carbohydrate per hour (g)
    pub carbs_per_hour_g: u32,
    /// Carbohydrate for the whole race (g)
    pub total_carbs_g: u32,
    /// Fluid per hour (oz)
    pub fluid_oz_per_hour: u32,
    /// Fluid for the whole race (oz)
    pub total_fluid_oz: u32,
    /// Sodium per hour (mg)
    pub sodium_mg_per_hour: u32,
    /// Product of the five condition multipliers
    pub environmental_multiplier: f64,
    /// Individual condition multipliers
    pub factors: EnvironmentalFactors,
    /// Condition labels
    pub conditions: ConditionLabels,
}

/// One post-race meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecoveryMeal {
    /// Meal macros
    #[serde(flatten)]
    pub macros: MacroGrams,
    /// Calories, reconciled from grams
    pub calories: u32,
}

impl RecoveryMeal {
    fn from_macros(macros: MacroGrams) -> Self {
        Self {
            macros,
            calories: macros.calories(),
        }
    }
}

/// Post-race recovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecoveryPlan {
    /// Within 30 minutes of finishing
    pub immediate: RecoveryMeal,
    /// Full meal about two hours later
    pub follow_up: RecoveryMeal,
}

/// Complete race-day fueling plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceFuelingPlan {
    /// Body mass used for per-kg targets
    pub weight_kg: f64,
    /// Race description
    pub race: RaceSummary,
    /// Days before the race
    pub taper: TaperPlan,
    /// Race morning
    pub race_morning: RaceMorningPlan,
    /// During the race
    pub during_race: DuringRacePlan,
    /// After the race
    pub recovery: RecoveryPlan,
}

/// Calculate the full race-day fueling plan
///
/// Every target is a pure function of the profile and configuration; the
/// expected race duration comes from the static race table.
#[must_use]
pub fn calculate_race_plan(profile: &RaceProfile, config: &CalculatorConfig) -> RaceFuelingPlan {
    let definition = profile.race.definition();
    let duration = definition.duration_hours;
    let weight_kg = pounds_to_kg(profile.weight_lb);
    let fueling = &config.race_fueling;
    let long_race = is_long_race(profile.race, fueling);

    debug!(
        race = %profile.race,
        duration_hours = duration,
        weight_kg,
        long_race,
        "Calculating race fueling plan"
    );

    let factors = EnvironmentalFactors::from_conditions(
        &profile.conditions,
        config.inputs.defaults.temperature_f,
    );

    RaceFuelingPlan {
        weight_kg,
        race: RaceSummary {
            race: profile.race,
            name: definition.name,
            distance: definition.distance,
            breakdown: definition.breakdown(),
            duration_hours: duration,
            category: definition.category,
        },
        taper: calculate_taper(weight_kg, long_race, &fueling.taper),
        race_morning: calculate_race_morning(
            weight_kg,
            duration,
            long_race,
            fueling.quick_carb_threshold_hours,
            &fueling.race_morning,
        ),
        during_race: calculate_during_race(
            profile,
            duration,
            long_race,
            factors,
            &fueling.carb_tiers,
            &config.hydration,
        ),
        recovery: calculate_recovery(weight_kg, &fueling.recovery),
    }
}

/// Taper-day macros; carb-loads before long races
#[must_use]
pub fn calculate_taper(weight_kg: f64, long_race: bool, config: &TaperConfig) -> TaperPlan {
    let carb_factor = if long_race {
        config.carb_load_g_per_kg
    } else {
        config.carb_g_per_kg
    };
    let macros = MacroGrams::new(
        grams_per_kg(weight_kg, config.protein_g_per_kg),
        grams_per_kg(weight_kg, carb_factor),
        grams_per_kg(weight_kg, config.fat_g_per_kg),
    );

    TaperPlan {
        macros,
        calories: macros.calories(),
        carb_loading: long_race,
    }
}

/// Race-morning meal, pre-start top-up and caffeine
#[must_use]
pub fn calculate_race_morning(
    weight_kg: f64,
    duration_hours: f64,
    long_race: bool,
    quick_carb_threshold_hours: f64,
    config: &RaceMorningConfig,
) -> RaceMorningPlan {
    let (meal_window, carb_factor, caffeine_mg) = if long_race {
        (
            MealWindow::ThreeToFourHours,
            config.long_race_carb_g_per_kg,
            round_whole(weight_kg * config.caffeine_mg_per_kg),
        )
    } else {
        (
            MealWindow::TwoToThreeHours,
            config.short_race_carb_g_per_kg,
            0,
        )
    };
    let meal = MacroGrams::new(
        grams_per_kg(weight_kg, config.protein_g_per_kg),
        grams_per_kg(weight_kg, carb_factor),
        0,
    );
    let pre_start_carbs_g = if duration_hours > quick_carb_threshold_hours {
        config.quick_carbs_long_g
    } else {
        config.quick_carbs_short_g
    };

    RaceMorningPlan {
        meal_window,
        meal_carbs_g: meal.carbs_g,
        meal_protein_g: meal.protein_g,
        meal_calories: meal.calories(),
        pre_start_carbs_g,
        caffeine_mg,
    }
}

/// Hourly carbohydrate and strategy for a race duration
#[must_use]
pub fn carbs_per_hour(duration_hours: f64, tiers: &DurationCarbTiers) -> (u32, FuelingStrategy) {
    if duration_hours < tiers.fueling_threshold_hours {
        (0, FuelingStrategy::None)
    } else if duration_hours < tiers.moderate_max_hours {
        (tiers.moderate_g_per_hour, FuelingStrategy::Moderate)
    } else if duration_hours < tiers.high_max_hours {
        (tiers.high_g_per_hour, FuelingStrategy::High)
    } else {
        (tiers.ultra_g_per_hour, FuelingStrategy::High)
    }
}

fn calculate_during_race(
    profile: &RaceProfile,
    duration_hours: f64,
    long_race: bool,
    factors: EnvironmentalFactors,
    tiers: &DurationCarbTiers,
    hydration: &HydrationConfig,
) -> DuringRacePlan {
    let (carbs_per_hour_g, strategy) = carbs_per_hour(duration_hours, tiers);
    let multiplier = factors.combined();

    let base_fluid = match profile.gender {
        Gender::Male => hydration.male_fluid_oz_per_hour,
        Gender::Female => hydration.female_fluid_oz_per_hour,
    };
    let base_sodium = if long_race {
        hydration.long_race_sodium_mg_per_hour
    } else {
        hydration.short_race_sodium_mg_per_hour
    };
    let fluid_oz_per_hour = round_whole(base_fluid * multiplier);
    let sodium_mg_per_hour = round_whole(base_sodium * multiplier);

    debug!(
        multiplier,
        fluid_oz_per_hour, sodium_mg_per_hour, carbs_per_hour_g, "Resolved in-race targets"
    );

    DuringRacePlan {
        fueling_needed: duration_hours >= tiers.fueling_threshold_hours,
        strategy,
        carbs_per_hour_g,
        total_carbs_g: round_whole(f64::from(carbs_per_hour_g) * duration_hours),
        fluid_oz_per_hour,
        total_fluid_oz: round_whole(f64::from(fluid_oz_per_hour) * duration_hours),
        sodium_mg_per_hour,
        environmental_multiplier: multiplier,
        factors,
        conditions: ConditionLabels::describe(&profile.conditions, &factors),
    }
}

/// Immediate and follow-up recovery meals
#[must_use]
pub fn calculate_recovery(weight_kg: f64, config: &RecoveryConfig) -> RecoveryPlan {
    RecoveryPlan {
        immediate: RecoveryMeal::from_macros(MacroGrams::new(
            grams_per_kg(weight_kg, config.protein_g_per_kg),
            grams_per_kg(weight_kg, config.carb_g_per_kg),
            0,
        )),
        follow_up: RecoveryMeal::from_macros(MacroGrams::new(
            grams_per_kg(weight_kg, config.follow_up_protein_g_per_kg),
            grams_per_kg(weight_kg, config.follow_up_carb_g_per_kg),
            grams_per_kg(weight_kg, config.follow_up_fat_g_per_kg),
        )),
    }
}

/// Whether a race counts as long under `config`
#[must_use]
pub fn is_long_race(race: RaceType, config: &RaceFuelingConfig) -> bool {
    race.definition().duration_hours > config.long_race_hours
}
