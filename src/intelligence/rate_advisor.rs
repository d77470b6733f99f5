// ABOUTME: Recommends a weekly weight-loss rate from goal size, race date and training volume
// ABOUTME: Produces typed advisories; the advice never changes the calculated day targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::NaiveDate;
use keystone_core::models::{AthleteProfile, WeeklyRate};
use serde::Serialize;
use tracing::debug;

use super::weight_projection::WeightGoal;
use crate::config::intelligence::RateAdvisorConfig;

/// Presentation-facing advisory attached to a rate recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdvisoryWarning {
    /// Aggressive deficit on a high training load
    HighVolumeAggressiveRate {
        /// Weekly training hours
        weekly_hours: f64,
        /// Selected rate
        selected: WeeklyRate,
    },
    /// Any substantial deficit on a very high training load
    VeryHighVolumeDeficit {
        /// Weekly training hours
        weekly_hours: f64,
        /// Selected rate
        selected: WeeklyRate,
    },
    /// Selected rate is faster than the recommendation
    FasterThanRecommended {
        /// Selected rate
        selected: WeeklyRate,
        /// Recommended rate
        recommended: WeeklyRate,
    },
    /// The goal needs more than 2 lb/week before the race
    UnrealisticTimeline {
        /// Pounds per week required to hit the target by race day, when computable
        required_lb_per_week: Option<f64>,
    },
    /// The race date is before the reference date
    RaceDatePassed {
        /// Race date
        race_date: NaiveDate,
    },
}

impl fmt::Display for AdvisoryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HighVolumeAggressiveRate {
                weekly_hours,
                selected,
            } => write!(
                f,
                "{weekly_hours} training hours per week with a {selected} deficit risks under-fueling key sessions; consider a slower rate"
            ),
            Self::VeryHighVolumeDeficit {
                weekly_hours,
                selected,
            } => write!(
                f,
                "At {weekly_hours} training hours per week even a {selected} deficit can compromise recovery; prioritize fueling training"
            ),
            Self::FasterThanRecommended {
                selected,
                recommended,
            } => write!(
                f,
                "Selected rate ({selected}) is faster than recommended ({recommended})"
            ),
            Self::UnrealisticTimeline {
                required_lb_per_week: Some(required),
            } => write!(
                f,
                "Reaching the target by race day needs {required:.1} lb/week, above the 2.0 lb/week maximum; consider a later race or a higher target weight"
            ),
            Self::UnrealisticTimeline {
                required_lb_per_week: None,
            } => write!(
                f,
                "The race is less than a week away; there is not enough time to reach the target weight"
            ),
            Self::RaceDatePassed { race_date } => {
                write!(f, "Race date {race_date} has already passed")
            }
        }
    }
}

/// Rate recommendation with its reasoning
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateAdvice {
    /// Recommended rate
    pub recommended: WeeklyRate,
    /// Rate suggested by goal size alone
    pub goal_size_rate: WeeklyRate,
    /// Minimum rate needed to reach the target by race day
    pub race_required_rate: Option<WeeklyRate>,
    /// Weight to lose divided by weeks to race (lb/week)
    pub ideal_lb_per_week: Option<f64>,
    /// Rate the athlete selected
    pub selected: WeeklyRate,
    /// Advisories, in display order
    pub warnings: Vec<AdvisoryWarning>,
}

/// Rate suggested by the amount of weight to lose
#[must_use]
pub fn rate_for_goal_size(weight_to_lose_lb: f64, config: &RateAdvisorConfig) -> WeeklyRate {
    if weight_to_lose_lb <= 0.0 {
        WeeklyRate::Maintain
    } else if weight_to_lose_lb < config.small_goal_lb {
        WeeklyRate::HalfPound
    } else if weight_to_lose_lb < config.moderate_goal_lb {
        WeeklyRate::OnePound
    } else if weight_to_lose_lb < config.large_goal_lb {
        WeeklyRate::OneAndHalfPounds
    } else {
        WeeklyRate::TwoPounds
    }
}

/// Minimum tier that covers an ideal weekly rate; `None` when the goal-size tier already does
fn rate_for_ideal(ideal_lb_per_week: f64, config: &RateAdvisorConfig) -> Option<WeeklyRate> {
    if ideal_lb_per_week <= config.race_pace_covered_lb {
        None
    } else if ideal_lb_per_week <= config.race_pace_moderate_lb {
        Some(WeeklyRate::OneAndHalfPounds)
    } else {
        Some(WeeklyRate::TwoPounds)
    }
}

/// Recommend a weekly rate for the profile and its projected timeline
#[must_use]
pub fn recommend_rate(
    profile: &AthleteProfile,
    goal: &WeightGoal,
    as_of: NaiveDate,
    config: &RateAdvisorConfig,
) -> RateAdvice {
    let weight_to_lose = goal.weight_to_lose_lb;
    let goal_size_rate = rate_for_goal_size(weight_to_lose, config);
    let mut warnings = Vec::new();

    let mut race_required_rate = None;
    let mut ideal_lb_per_week = None;
    if let Some(race_date) = profile.race_date {
        if race_date < as_of {
            warnings.push(AdvisoryWarning::RaceDatePassed { race_date });
        } else if weight_to_lose > 0.0 {
            let weeks = goal.race.map_or(0, |race| race.weeks_to_race);
            if weeks == 0 {
                race_required_rate = Some(WeeklyRate::TwoPounds);
                warnings.push(AdvisoryWarning::UnrealisticTimeline {
                    required_lb_per_week: None,
                });
            } else {
                let ideal = weight_to_lose / f64::from(weeks);
                ideal_lb_per_week = Some(ideal);
                race_required_rate = rate_for_ideal(ideal, config);
                if ideal > WeeklyRate::TwoPounds.pounds_per_week() {
                    warnings.push(AdvisoryWarning::UnrealisticTimeline {
                        required_lb_per_week: Some(ideal),
                    });
                }
            }
        }
    }

    let recommended =
        race_required_rate.map_or(goal_size_rate, |required| required.max(goal_size_rate));

    let selected = profile.weekly_rate;
    let hours = profile.weekly_training_hours;
    let selected_lb = selected.pounds_per_week();
    if hours >= config.very_high_volume_hours
        && selected_lb >= config.very_high_volume_rate_limit_lb
    {
        warnings.push(AdvisoryWarning::VeryHighVolumeDeficit {
            weekly_hours: hours,
            selected,
        });
    } else if hours >= config.high_volume_hours
        && selected_lb >= config.high_volume_rate_limit_lb
    {
        warnings.push(AdvisoryWarning::HighVolumeAggressiveRate {
            weekly_hours: hours,
            selected,
        });
    }
    if selected > recommended {
        warnings.push(AdvisoryWarning::FasterThanRecommended {
            selected,
            recommended,
        });
    }

    debug!(
        %recommended,
        %goal_size_rate,
        ?race_required_rate,
        warnings = warnings.len(),
        "Rate recommendation"
    );

    RateAdvice {
        recommended,
        goal_size_rate,
        race_required_rate,
        ideal_lb_per_week,
        selected,
        warnings,
    }
}
