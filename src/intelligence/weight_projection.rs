// ABOUTME: Weight-loss timeline projection from the selected weekly deficit
// ABOUTME: Weeks to goal, goal date and race-day weight compared against the target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weight Projection
//!
//! Uses the 3500 kcal per pound approximation (Wishnofsky, 1958). It overstates
//! long-term loss because energy expenditure adapts, so projections are guidance,
//! not predictions.

use chrono::{Duration, NaiveDate};
use keystone_core::constants::{calendar::DAYS_PER_WEEK, energy::KCAL_PER_POUND_BODY_MASS};
use keystone_core::models::{AthleteProfile, WeeklyRate};
use serde::Serialize;
use tracing::debug;

use crate::config::intelligence::WeightProjectionConfig;

/// How the projected race-day weight compares with the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceAlignment {
    /// Within the tolerance of the target
    Aligned,
    /// Still above the target on race day
    BehindSchedule,
    /// Below the target on race day
    AheadOfSchedule,
}

/// Race-day projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RaceProjection {
    /// Race date
    pub race_date: NaiveDate,
    /// Whole weeks from the reference date to the race, 0 once it has passed
    pub weeks_to_race: u32,
    /// Current weight minus expected loss up to the race (lb)
    pub projected_weight_lb: f64,
    /// Projected minus target weight (lb); absent without a target
    pub gap_lb: Option<f64>,
    /// Gap classification; absent without a target
    pub alignment: Option<RaceAlignment>,
}

/// Weight-loss timeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightGoal {
    /// Current weight (lb)
    pub current_weight_lb: f64,
    /// Target weight (lb)
    pub target_weight_lb: Option<f64>,
    /// Current minus target (lb); 0 without a target, negative when already below it
    pub weight_to_lose_lb: f64,
    /// Expected loss per week at the selected rate (lb)
    pub weekly_loss_lb: f64,
    /// Weeks until the target is reached; 0 when nothing to lose or maintaining
    pub weeks_to_goal: u32,
    /// Reference date plus `weeks_to_goal` weeks
    pub goal_date: Option<NaiveDate>,
    /// Race-day projection when a race date is set
    pub race: Option<RaceProjection>,
}

/// Expected weekly loss for a daily deficit
#[must_use]
pub fn weekly_loss_lb(rate: WeeklyRate) -> f64 {
    f64::from(rate.daily_deficit_kcal()) * DAYS_PER_WEEK as f64 / KCAL_PER_POUND_BODY_MASS
}

/// Whole weeks from `as_of` to `race_date`, floored and clamped at 0
#[must_use]
pub fn weeks_until(as_of: NaiveDate, race_date: NaiveDate) -> u32 {
    let days = (race_date - as_of).num_days();
    u32::try_from(days.div_euclid(DAYS_PER_WEEK)).unwrap_or(0)
}

/// Classify a race-day gap (projected minus target)
#[must_use]
pub fn classify_gap(gap_lb: f64, tolerance_lb: f64) -> RaceAlignment {
    if gap_lb.abs() <= tolerance_lb {
        RaceAlignment::Aligned
    } else if gap_lb > 0.0 {
        RaceAlignment::BehindSchedule
    } else {
        RaceAlignment::AheadOfSchedule
    }
}

/// Project the weight-loss timeline as of `as_of`
#[must_use]
pub fn project_weight_goal(
    profile: &AthleteProfile,
    as_of: NaiveDate,
    config: &WeightProjectionConfig,
) -> WeightGoal {
    let weight_to_lose_lb = profile
        .target_weight_lb
        .map_or(0.0, |target| profile.weight_lb - target);
    let weekly_loss_lb = weekly_loss_lb(profile.weekly_rate);

    let weeks_to_goal = if weight_to_lose_lb > 0.0 && weekly_loss_lb > 0.0 {
        let weeks = (weight_to_lose_lb / weekly_loss_lb).ceil();
        if weeks.is_finite() {
            weeks as u32
        } else {
            0
        }
    } else {
        0
    };
    // None when the date would overflow the calendar
    let goal_date = if weeks_to_goal > 0 {
        let offset = Duration::days(i64::from(weeks_to_goal) * DAYS_PER_WEEK);
        as_of.checked_add_signed(offset)
    } else {
        None
    };

    let race = profile.race_date.map(|race_date| {
        let weeks_to_race = weeks_until(as_of, race_date);
        let projected_weight_lb =
            weekly_loss_lb.mul_add(-f64::from(weeks_to_race), profile.weight_lb);
        let gap_lb = profile
            .target_weight_lb
            .map(|target| projected_weight_lb - target);
        RaceProjection {
            race_date,
            weeks_to_race,
            projected_weight_lb,
            gap_lb,
            alignment: gap_lb.map(|gap| classify_gap(gap, config.aligned_tolerance_lb)),
        }
    });

    debug!(
        weight_to_lose_lb,
        weekly_loss_lb,
        weeks_to_goal,
        has_race = race.is_some(),
        "Projected weight goal"
    );

    WeightGoal {
        current_weight_lb: profile.weight_lb,
        target_weight_lb: profile.target_weight_lb,
        weight_to_lose_lb,
        weekly_loss_lb,
        weeks_to_goal,
        goal_date,
        race,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    #[test]
    fn test_weekly_loss_per_rate() {
        assert!((weekly_loss_lb(WeeklyRate::Maintain)).abs() < f64::EPSILON);
        assert!((weekly_loss_lb(WeeklyRate::OnePound) - 1.0).abs() < 1e-9);
        assert!((weekly_loss_lb(WeeklyRate::TwoPounds) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_weeks_until_floors_and_clamps() {
        let today = date(2026, 1, 1);
        assert_eq!(weeks_until(today, date(2026, 1, 14)), 1);
        assert_eq!(weeks_until(today, date(2026, 1, 15)), 2);
        assert_eq!(weeks_until(today, date(2025, 12, 1)), 0);
        assert_eq!(weeks_until(today, today), 0);
    }

    #[test]
    fn test_gap_bands() {
        assert_eq!(classify_gap(3.0, 3.0), RaceAlignment::Aligned);
        assert_eq!(classify_gap(-3.0, 3.0), RaceAlignment::Aligned);
        assert_eq!(classify_gap(3.5, 3.0), RaceAlignment::BehindSchedule);
        assert_eq!(classify_gap(-7.0, 3.0), RaceAlignment::AheadOfSchedule);
    }
}
