// ABOUTME: Raw wizard forms holding untyped field strings for both calculators
// ABOUTME: Field assignment by name and conversion into validated profiles under an input policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Raw forms
//!
//! Forms mirror what a user typed: every field is a string, blank until filled.
//! They deserialize from JSON or YAML profile files (camelCase aliases are
//! accepted) and convert into typed profiles through a [`FieldParser`].

use keystone_core::constants::units::kg_to_pounds;
use keystone_core::errors::{AppError, AppResult};
use keystone_core::models::{
    AthleteProfile, ConditionCategory, Gender, HumidityLevel, RaceConditions, RaceProfile,
    RaceType, RacingGoal, Sport, SunExposure, SweatType, TrainingDays, WeeklyRate, WindCondition,
};
use serde::{Deserialize, Serialize};

use super::fields::{FieldParser, InputPolicy, NumericField};
use crate::config::intelligence::InputConfig;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn unknown_field(field: &str) -> AppError {
    AppError::invalid_input(format!("Unknown form field '{field}'"))
        .with_details(serde_json::json!({ "field": field }))
}

/// Race-day fueling form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceForm {
    /// Race type name or shorthand
    #[serde(alias = "raceType")]
    pub race_type: String,
    /// Gender
    pub gender: String,
    /// Weight (lb)
    pub weight: String,
    /// Height (in)
    pub height: String,
    /// Sweat type key or label
    #[serde(alias = "sweatType")]
    pub sweat_type: String,
    /// Average temperature (°F)
    #[serde(alias = "avgTemp")]
    pub avg_temp: String,
    /// Wind key or label
    #[serde(alias = "windCondition")]
    pub wind: String,
    /// Humidity key or label
    pub humidity: String,
    /// Sun exposure key or label
    #[serde(alias = "sunExposure")]
    pub sun: String,
}

impl RaceForm {
    /// Field names accepted by [`Self::set_field`]
    pub const FIELDS: [&'static str; 9] = [
        "race_type",
        "gender",
        "weight",
        "height",
        "sweat_type",
        "avg_temp",
        "wind",
        "humidity",
        "sun",
    ];

    /// Assign a field by name
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown field name
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> AppResult<()> {
        let slot = match field {
            "race_type" | "race" => &mut self.race_type,
            "gender" => &mut self.gender,
            "weight" => &mut self.weight,
            "height" => &mut self.height,
            "sweat_type" | "sweat" => &mut self.sweat_type,
            "avg_temp" | "temp" | "temperature" => &mut self.avg_temp,
            "wind" => &mut self.wind,
            "humidity" => &mut self.humidity,
            "sun" | "sun_exposure" => &mut self.sun,
            _ => return Err(unknown_field(field)),
        };
        *slot = value.into();
        Ok(())
    }

    /// Whether the race selection step is complete
    #[must_use]
    pub fn has_race(&self) -> bool {
        !is_blank(&self.race_type)
    }

    /// Whether the gender step is complete
    #[must_use]
    pub fn has_gender(&self) -> bool {
        !is_blank(&self.gender)
    }

    /// Whether the body stats step is complete
    #[must_use]
    pub fn has_body_stats(&self) -> bool {
        !is_blank(&self.weight) && !is_blank(&self.height)
    }

    /// Parse into a race profile
    ///
    /// # Errors
    ///
    /// Race type and gender are required under both policies; strict parsing
    /// also rejects malformed or out-of-range numbers and unknown conditions
    pub fn to_profile(&self, policy: InputPolicy, inputs: &InputConfig) -> AppResult<RaceProfile> {
        let parser = FieldParser::new(policy);
        let limits = &inputs.limits;
        let defaults = &inputs.defaults;

        let race = parser.required_choice("race_type", &self.race_type, RaceType::from_str_lossy)?;
        let gender = parser.required_choice("gender", &self.gender, Gender::from_str_lossy)?;
        let weight_lb = parser.number(
            &NumericField {
                name: "weight",
                default: kg_to_pounds(defaults.weight_kg),
                min: limits.min_weight_lb,
                max: limits.max_weight_lb,
            },
            &self.weight,
        )?;
        let height_in = parser.number(
            &NumericField {
                name: "height",
                default: defaults.height_in,
                min: limits.min_height_in,
                max: limits.max_height_in,
            },
            &self.height,
        )?;

        let conditions = RaceConditions {
            sweat: parser.optional_choice(
                "sweat_type",
                &self.sweat_type,
                SweatType::from_str_lossy,
            )?,
            temperature_f: parser.optional_number(
                &NumericField {
                    name: "avg_temp",
                    default: defaults.temperature_f,
                    min: limits.min_temperature_f,
                    max: limits.max_temperature_f,
                },
                &self.avg_temp,
            )?,
            wind: parser.optional_choice("wind", &self.wind, WindCondition::from_str_lossy)?,
            humidity: parser.optional_choice(
                "humidity",
                &self.humidity,
                HumidityLevel::from_str_lossy,
            )?,
            sun: parser.optional_choice("sun", &self.sun, SunExposure::from_str_lossy)?,
        };

        Ok(RaceProfile {
            race,
            gender,
            weight_lb,
            height_in,
            conditions,
        })
    }
}

/// Weight-goal planning form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightGoalForm {
    /// Gender
    pub gender: String,
    /// Age (years)
    pub age: String,
    /// Current weight (lb)
    #[serde(alias = "currentWeight")]
    pub weight: String,
    /// Height (in)
    pub height: String,
    /// Weekly training hours
    #[serde(alias = "weeklyHours", alias = "trainingHours")]
    pub weekly_hours: String,
    /// Comma separated weekdays
    #[serde(alias = "trainingDays")]
    pub training_days: String,
    /// Primary sport
    #[serde(alias = "primarySport")]
    pub sport: String,
    /// Racing goal
    #[serde(alias = "racingGoal")]
    pub racing_goal: String,
    /// Target race weight (lb)
    #[serde(alias = "targetWeight")]
    pub target_weight: String,
    /// Target race date (`YYYY-MM-DD`)
    #[serde(alias = "raceDate")]
    pub race_date: String,
    /// Weekly loss rate
    #[serde(alias = "weeklyRate", alias = "weightLossRate")]
    pub weekly_rate: String,
}

impl WeightGoalForm {
    /// Field names accepted by [`Self::set_field`]
    pub const FIELDS: [&'static str; 11] = [
        "gender",
        "age",
        "weight",
        "height",
        "weekly_hours",
        "training_days",
        "sport",
        "racing_goal",
        "target_weight",
        "race_date",
        "weekly_rate",
    ];

    /// Assign a field by name
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown field name
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> AppResult<()> {
        let slot = match field {
            "gender" => &mut self.gender,
            "age" => &mut self.age,
            "weight" | "current_weight" => &mut self.weight,
            "height" => &mut self.height,
            "weekly_hours" | "hours" => &mut self.weekly_hours,
            "training_days" | "days" => &mut self.training_days,
            "sport" => &mut self.sport,
            "racing_goal" | "goal" => &mut self.racing_goal,
            "target_weight" => &mut self.target_weight,
            "race_date" => &mut self.race_date,
            "weekly_rate" | "rate" => &mut self.weekly_rate,
            _ => return Err(unknown_field(field)),
        };
        *slot = value.into();
        Ok(())
    }

    /// Whether the body stats step is complete
    #[must_use]
    pub fn has_body_stats(&self) -> bool {
        [&self.gender, &self.age, &self.weight, &self.height]
            .iter()
            .all(|value| !is_blank(value))
    }

    /// Whether the training step is complete
    #[must_use]
    pub fn has_training(&self) -> bool {
        !is_blank(&self.weekly_hours)
    }

    /// Whether a current weight has been entered
    #[must_use]
    pub fn has_weight(&self) -> bool {
        !is_blank(&self.weight)
    }

    /// Whether a target weight has been entered
    #[must_use]
    pub fn has_target_weight(&self) -> bool {
        !is_blank(&self.target_weight)
    }

    /// Whether a weekly rate has been selected
    #[must_use]
    pub fn has_rate(&self) -> bool {
        !is_blank(&self.weekly_rate)
    }

    /// Parse into an athlete profile
    ///
    /// # Errors
    ///
    /// Gender is required under both policies; strict parsing also rejects
    /// missing, malformed or out-of-range values
    pub fn to_profile(
        &self,
        policy: InputPolicy,
        inputs: &InputConfig,
    ) -> AppResult<AthleteProfile> {
        let parser = FieldParser::new(policy);
        let limits = &inputs.limits;
        let defaults = &inputs.defaults;

        let gender = parser.required_choice("gender", &self.gender, Gender::from_str_lossy)?;
        let age = parser.number(
            &NumericField {
                name: "age",
                default: f64::from(defaults.age),
                min: f64::from(limits.min_age),
                max: f64::from(limits.max_age),
            },
            &self.age,
        )?;
        let weight_field = NumericField {
            name: "weight",
            default: kg_to_pounds(defaults.weight_kg),
            min: limits.min_weight_lb,
            max: limits.max_weight_lb,
        };
        let weight_lb = parser.number(&weight_field, &self.weight)?;
        let height_in = parser.number(
            &NumericField {
                name: "height",
                default: defaults.height_in,
                min: limits.min_height_in,
                max: limits.max_height_in,
            },
            &self.height,
        )?;
        let weekly_training_hours = parser.number(
            &NumericField {
                name: "weekly_hours",
                default: defaults.weekly_training_hours,
                min: 0.0,
                max: limits.max_weekly_hours,
            },
            &self.weekly_hours,
        )?;
        let target_weight_lb = parser.optional_number(
            &NumericField {
                name: "target_weight",
                ..weight_field
            },
            &self.target_weight,
        )?;
        let race_date = parser.optional_date("race_date", &self.race_date)?;
        let weekly_rate = parser.choice_or(
            "weekly_rate",
            &self.weekly_rate,
            WeeklyRate::Maintain,
            WeeklyRate::from_str_lossy,
        )?;

        let sport = if is_blank(&self.sport) {
            Sport::default()
        } else {
            Sport::from_str_lossy(&self.sport)
        };
        let racing_goal = if is_blank(&self.racing_goal) {
            RacingGoal::default()
        } else {
            RacingGoal::from_str_lossy(&self.racing_goal)
        };

        Ok(AthleteProfile {
            gender,
            age: age.round() as u32,
            weight_lb,
            height_in,
            weekly_training_hours,
            training_days: TrainingDays::parse_lossy(&self.training_days),
            sport,
            racing_goal,
            target_weight_lb,
            race_date,
            weekly_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use keystone_core::errors::ErrorCode;

    use super::*;

    fn olympic_form() -> RaceForm {
        RaceForm {
            race_type: "Olympic Triathlon".into(),
            gender: "male".into(),
            weight: "170".into(),
            height: "70".into(),
            sweat_type: "Medium".into(),
            avg_temp: "75".into(),
            wind: "Light".into(),
            humidity: "Humid".into(),
            sun: "Partly".into(),
        }
    }

    #[test]
    fn test_race_form_parses() {
        let profile = olympic_form()
            .to_profile(InputPolicy::Strict, &InputConfig::default())
            .ok();
        let profile = profile.as_ref();
        assert_eq!(profile.map(|p| p.race), Some(RaceType::OlympicTriathlon));
        assert_eq!(
            profile.and_then(|p| p.conditions.humidity),
            Some(HumidityLevel::Humid)
        );
    }

    #[test]
    fn test_lenient_default_weight_is_70_kg() {
        let mut form = olympic_form();
        form.weight = "lots".into();
        let weight = form
            .to_profile(InputPolicy::Lenient, &InputConfig::default())
            .map(|p| p.weight_lb)
            .unwrap_or_default();
        assert!((weight - kg_to_pounds(70.0)).abs() < 1e-9);
    }

    #[test]
    fn test_race_type_required_even_when_lenient() {
        let mut form = olympic_form();
        form.race_type.clear();
        let err = form.to_profile(InputPolicy::Lenient, &InputConfig::default());
        assert!(matches!(err, Err(e) if e.code == ErrorCode::MissingRequiredField));
    }

    #[test]
    fn test_set_field_rejects_unknown_names() {
        let mut form = WeightGoalForm::default();
        assert!(form.set_field("rate", "1.0").is_ok());
        assert_eq!(form.weekly_rate, "1.0");
        assert!(form.set_field("shoe_size", "11").is_err());
    }

    #[test]
    fn test_camel_case_aliases() {
        let form: RaceForm =
            serde_json::from_str(r#"{"raceType":"10K","gender":"female","avgTemp":"88"}"#)
                .unwrap_or_default();
        assert_eq!(form.race_type, "10K");
        assert_eq!(form.avg_temp, "88");
        assert!(form.weight.is_empty());
    }
}
