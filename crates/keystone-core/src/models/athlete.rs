// ABOUTME: Athlete profile model for weight-goal nutrition planning
// ABOUTME: Gender, sport, racing goal, weekly loss rate, and training-day selection types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::normalize_key;

/// Monday-first week used for schedules and display
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Gender for BMR and sweat-rate calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal Mifflin constant, 24 oz/h base fluid)
    Male,
    /// Female (-161 kcal Mifflin constant, 20 oz/h base fluid)
    Female,
}

impl Gender {
    /// Parse gender from a form value
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match normalize_key(s).as_str() {
            "male" | "m" | "man" => Some(Self::Male),
            "female" | "f" | "woman" => Some(Self::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

/// Primary sport of the athlete
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    /// Road or trail running
    #[default]
    Running,
    /// Road, gravel or track cycling
    Cycling,
    /// Pool or open-water swimming
    Swimming,
    /// Multisport
    Triathlon,
    /// Anything else
    Other,
}

impl Sport {
    /// Parse sport from a form value, unknown values map to `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match normalize_key(s).as_str() {
            "running" | "run" | "runner" => Self::Running,
            "cycling" | "bike" | "ride" | "cyclist" => Self::Cycling,
            "swimming" | "swim" | "swimmer" => Self::Swimming,
            "triathlon" | "tri" | "triathlete" => Self::Triathlon,
            _ => Self::Other,
        }
    }
}

/// What the athlete wants from the target race (descriptive only)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum RacingGoal {
    /// Cross the line
    #[default]
    Finish,
    /// Beat a previous time
    PersonalBest,
    /// Age-group podium
    Podium,
    /// Qualify for a championship event
    Qualify,
}

impl RacingGoal {
    /// Parse racing goal from a form value, unknown values map to `Finish`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match normalize_key(s).as_str() {
            "pb" | "pr" | "personalbest" | "personalrecord" => Self::PersonalBest,
            "podium" | "place" => Self::Podium,
            "qualify" | "bq" | "kona" => Self::Qualify,
            _ => Self::Finish,
        }
    }
}

/// Weekly weight-loss rate selection
///
/// Variants are declared slowest to fastest so `Ord` compares aggressiveness.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeeklyRate {
    /// No deficit
    Maintain,
    /// 0.5 lb per week
    HalfPound,
    /// 1.0 lb per week
    OnePound,
    /// 1.5 lb per week
    OneAndHalfPounds,
    /// 2.0 lb per week
    TwoPounds,
}

impl WeeklyRate {
    /// All selectable rates, slowest first
    pub const ALL: [Self; 5] = [
        Self::Maintain,
        Self::HalfPound,
        Self::OnePound,
        Self::OneAndHalfPounds,
        Self::TwoPounds,
    ];

    /// Daily calorie deficit for this rate (kcal/day)
    #[must_use]
    pub const fn daily_deficit_kcal(self) -> u32 {
        match self {
            Self::Maintain => 0,
            Self::HalfPound => 250,
            Self::OnePound => 500,
            Self::OneAndHalfPounds => 750,
            Self::TwoPounds => 1000,
        }
    }

    /// Nominal pounds per week
    #[must_use]
    pub const fn pounds_per_week(self) -> f64 {
        match self {
            Self::Maintain => 0.0,
            Self::HalfPound => 0.5,
            Self::OnePound => 1.0,
            Self::OneAndHalfPounds => 1.5,
            Self::TwoPounds => 2.0,
        }
    }

    /// Parse a rate selection such as `"1.5"`, `"maintain"`, `"2 lb"` or `"1.0 lb/week"`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        let key = normalize_key(s);
        let key = ["perweek", "week", "wk"]
            .iter()
            .find_map(|suffix| key.strip_suffix(*suffix))
            .unwrap_or(&key);
        let key = key.trim_end_matches("lbs").trim_end_matches("lb");
        match key {
            "maintain" | "maintenance" | "0" | "0.0" | "none" => Some(Self::Maintain),
            "0.5" | ".5" | "half" => Some(Self::HalfPound),
            "1" | "1.0" => Some(Self::OnePound),
            "1.5" => Some(Self::OneAndHalfPounds),
            "2" | "2.0" => Some(Self::TwoPounds),
            _ => None,
        }
    }
}

impl fmt::Display for WeeklyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Maintain => write!(f, "maintain"),
            rate => write!(f, "{:.1} lb/week", rate.pounds_per_week()),
        }
    }
}

/// Set of weekdays the athlete trains on, kept in Monday-first order without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct TrainingDays(Vec<Weekday>);

impl TrainingDays {
    /// Whether the athlete trains on `day`
    #[must_use]
    pub fn contains(&self, day: Weekday) -> bool {
        self.0.contains(&day)
    }

    /// Number of training days per week
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.len()
    }

    /// Training days in Monday-first order
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.iter().copied()
    }

    /// Parse a comma or space separated list (`"mon, wed fri"`); unknown tokens are skipped
    #[must_use]
    pub fn parse_lossy(s: &str) -> Self {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .filter_map(|token| token.parse::<Weekday>().ok())
            .collect()
    }
}

impl FromIterator<Weekday> for TrainingDays {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let selected: Vec<Weekday> = iter.into_iter().collect();
        Self(
            ALL_WEEKDAYS
                .into_iter()
                .filter(|day| selected.contains(day))
                .collect(),
        )
    }
}

impl From<Vec<Weekday>> for TrainingDays {
    fn from(days: Vec<Weekday>) -> Self {
        days.into_iter().collect()
    }
}

impl From<TrainingDays> for Vec<Weekday> {
    fn from(days: TrainingDays) -> Self {
        days.0
    }
}

/// Validated input record for the weight-goal planner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Gender
    pub gender: Gender,
    /// Age in years
    pub age: u32,
    /// Current weight (lb)
    pub weight_lb: f64,
    /// Height (in)
    pub height_in: f64,
    /// Weekly training volume (hours)
    pub weekly_training_hours: f64,
    /// Days of the week with training sessions
    pub training_days: TrainingDays,
    /// Primary sport
    pub sport: Sport,
    /// Racing goal
    pub racing_goal: RacingGoal,
    /// Target race weight (lb)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub target_weight_lb: Option<f64>,
    /// Target race date
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub race_date: Option<NaiveDate>,
    /// Selected weekly loss rate
    pub weekly_rate: WeeklyRate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deficit_table_is_exhaustive() {
        let deficits: Vec<u32> = WeeklyRate::ALL
            .iter()
            .map(|rate| rate.daily_deficit_kcal())
            .collect();
        assert_eq!(deficits, vec![0, 250, 500, 750, 1000]);
    }

    #[test]
    fn test_deficit_matches_3500_kcal_rule() {
        for rate in WeeklyRate::ALL {
            let weekly = f64::from(rate.daily_deficit_kcal()) * 7.0 / 3500.0;
            assert!((weekly - rate.pounds_per_week()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_weekly_rate_parsing() {
        assert_eq!(WeeklyRate::from_str_lossy("1.5"), Some(WeeklyRate::OneAndHalfPounds));
        assert_eq!(WeeklyRate::from_str_lossy("2 lb"), Some(WeeklyRate::TwoPounds));
        assert_eq!(WeeklyRate::from_str_lossy("Maintain"), Some(WeeklyRate::Maintain));
        assert_eq!(WeeklyRate::from_str_lossy("3"), None);
        assert_eq!(
            WeeklyRate::from_str_lossy("1.5 lbs per week"),
            Some(WeeklyRate::OneAndHalfPounds)
        );
    }

    #[test]
    fn test_weekly_rate_parses_its_display() {
        for rate in WeeklyRate::ALL {
            assert_eq!(WeeklyRate::from_str_lossy(&rate.to_string()), Some(rate));
        }
    }

    #[test]
    fn test_rate_ordering_is_by_aggressiveness() {
        assert!(WeeklyRate::TwoPounds > WeeklyRate::OnePound);
        assert!(WeeklyRate::Maintain < WeeklyRate::HalfPound);
    }

    #[test]
    fn test_training_days_are_normalized() {
        let days = TrainingDays::parse_lossy("sat, mon,  Wednesday mon xyz");
        let ordered: Vec<Weekday> = days.iter().collect();
        assert_eq!(ordered, vec![Weekday::Mon, Weekday::Wed, Weekday::Sat]);
        assert_eq!(days.count(), 3);
    }

    #[test]
    fn test_gender_parsing() {
        assert_eq!(Gender::from_str_lossy(" Female "), Some(Gender::Female));
        assert_eq!(Gender::from_str_lossy("M"), Some(Gender::Male));
        assert_eq!(Gender::from_str_lossy(""), None);
    }
}
