// ABOUTME: Pure nutrition calculators for race-day fueling and weight-goal planning
// ABOUTME: Shared rounding helpers and the whole-gram macro record used by every plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Stateless calculators that turn a validated profile plus configuration into a
//! serializable plan. Nothing here reads the clock or the environment: any
//! date-dependent calculation takes its reference date as an argument, so
//! identical inputs always produce identical plans.

/// Environmental multiplier for fluid and sodium
pub mod environment;
/// BMR, TDEE, day targets and weekly schedule for weight-goal planning
pub mod nutrition_calculator;
/// Taper, race-morning, in-race and recovery targets
pub mod race_fueling;
/// Loss-rate recommendation and advisories
pub mod rate_advisor;
/// Weight-loss timeline and race-day projection
pub mod weight_projection;

use keystone_core::constants::energy;
use serde::{Deserialize, Serialize};

pub use environment::{ConditionLabels, EnvironmentalFactors};
pub use nutrition_calculator::{
    calculate_day_target, calculate_mifflin_st_jeor, calculate_nutrition_plan, DayTarget, DayType,
    NutritionPlan, WeeklySchedule,
};
pub use race_fueling::{
    calculate_race_plan, DuringRacePlan, FuelingStrategy, MealWindow, RaceFuelingPlan,
    RaceMorningPlan, RaceSummary, RecoveryMeal, RecoveryPlan, TaperPlan,
};
pub use rate_advisor::{recommend_rate, AdvisoryWarning, RateAdvice};
pub use weight_projection::{project_weight_goal, RaceAlignment, RaceProjection, WeightGoal};

/// Round a quantity to the nearest whole unit, clamping negatives and non-finite values to 0
#[must_use]
pub fn round_whole(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}

/// Whole grams of `per_kg` times body mass
#[must_use]
pub fn grams_per_kg(weight_kg: f64, per_kg: f64) -> u32 {
    round_whole(weight_kg * per_kg)
}

/// Whole-gram macronutrient amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MacroGrams {
    /// Protein (g)
    pub protein_g: u32,
    /// Carbohydrate (g)
    pub carbs_g: u32,
    /// Fat (g)
    pub fat_g: u32,
}

impl MacroGrams {
    /// Build from gram amounts
    #[must_use]
    pub const fn new(protein_g: u32, carbs_g: u32, fat_g: u32) -> Self {
        Self {
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    /// Calories implied by the rounded grams (4/4/9)
    #[must_use]
    pub const fn calories(&self) -> u32 {
        energy::macro_calories(self.protein_g, self.carbs_g, self.fat_g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_whole_clamps() {
        assert_eq!(round_whole(12.5), 13);
        assert_eq!(round_whole(12.49), 12);
        assert_eq!(round_whole(-4.0), 0);
        assert_eq!(round_whole(f64::NAN), 0);
        assert_eq!(round_whole(f64::INFINITY), 0);
    }

    #[test]
    fn test_macro_calories() {
        assert_eq!(MacroGrams::new(200, 300, 80).calories(), 800 + 1200 + 720);
    }
}
