// ABOUTME: Combines the five race-day condition multipliers into one fluid/sodium factor
// ABOUTME: Resolves missing selections to neutral values and produces display labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use keystone_core::models::{
    ConditionCategory, HumidityLevel, RaceConditions, SunExposure, SweatType, TemperatureBand,
    WindCondition,
};
use serde::Serialize;
use tracing::debug;

/// Label shown for a condition that was not selected
const NOT_SPECIFIED: &str = "Not specified";

/// Per-condition multipliers for a race
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnvironmentalFactors {
    /// Sweat type multiplier
    pub sweat: f64,
    /// Temperature band multiplier
    pub temperature: f64,
    /// Wind multiplier
    pub wind: f64,
    /// Humidity multiplier
    pub humidity: f64,
    /// Sun exposure multiplier
    pub sun: f64,
    /// Temperature actually used (°F)
    pub temperature_f: f64,
    /// Band the temperature falls in
    pub temperature_band: TemperatureBand,
}

impl EnvironmentalFactors {
    /// Resolve the conditions into multipliers
    ///
    /// A missing, zero or non-finite temperature is replaced with `default_temperature_f`;
    /// a reading of exactly 0°F is how an unset form field arrives.
    #[must_use]
    pub fn from_conditions(conditions: &RaceConditions, default_temperature_f: f64) -> Self {
        let temperature_f = match conditions.temperature_f {
            Some(t) if t.is_finite() && t != 0.0 => t,
            other => {
                debug!(
                    reading = ?other,
                    fallback = default_temperature_f,
                    "Using default race temperature"
                );
                default_temperature_f
            }
        };
        let temperature_band = TemperatureBand::from_fahrenheit(temperature_f);

        Self {
            sweat: SweatType::multiplier_or_neutral(conditions.sweat),
            temperature: temperature_band.multiplier(),
            wind: WindCondition::multiplier_or_neutral(conditions.wind),
            humidity: HumidityLevel::multiplier_or_neutral(conditions.humidity),
            sun: SunExposure::multiplier_or_neutral(conditions.sun),
            temperature_f,
            temperature_band,
        }
    }

    /// The five factors in application order
    #[must_use]
    pub const fn factors(&self) -> [f64; 5] {
        [self.sweat, self.temperature, self.wind, self.humidity, self.sun]
    }

    /// Product of the five factors
    #[must_use]
    pub fn combined(&self) -> f64 {
        self.factors().iter().product()
    }
}

/// Display labels for the selected conditions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionLabels {
    /// Sweat type label
    pub sweat: &'static str,
    /// Temperature with its band, e.g. `"75°F, Warm (70-79°F)"`
    pub temperature: String,
    /// Wind label
    pub wind: &'static str,
    /// Humidity label
    pub humidity: &'static str,
    /// Sun exposure label
    pub sun: &'static str,
}

impl ConditionLabels {
    /// Labels for the conditions as resolved by `factors`
    #[must_use]
    pub fn describe(conditions: &RaceConditions, factors: &EnvironmentalFactors) -> Self {
        fn label_of<C: ConditionCategory>(selection: Option<C>) -> &'static str {
            selection.map_or(NOT_SPECIFIED, C::label)
        }

        Self {
            sweat: label_of(conditions.sweat),
            temperature: format!(
                "{}°F, {}",
                factors.temperature_f,
                factors.temperature_band.label()
            ),
            wind: label_of(conditions.wind),
            humidity: label_of(conditions.humidity),
            sun: label_of(conditions.sun),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_conditions_use_default_temperature_only() {
        let factors = EnvironmentalFactors::from_conditions(&RaceConditions::default(), 70.0);
        assert_eq!(factors.temperature_band, TemperatureBand::Warm);
        assert!((factors.combined() - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_nan_temperature_falls_back() {
        let conditions = RaceConditions {
            temperature_f: Some(f64::NAN),
            ..RaceConditions::default()
        };
        let factors = EnvironmentalFactors::from_conditions(&conditions, 65.0);
        assert!((factors.temperature_f - 65.0).abs() < f64::EPSILON);
        assert_eq!(factors.temperature_band, TemperatureBand::Mild);
    }

    #[test]
    fn test_zero_temperature_is_treated_as_unset() {
        let conditions = RaceConditions {
            temperature_f: Some(0.0),
            ..RaceConditions::default()
        };
        let factors = EnvironmentalFactors::from_conditions(&conditions, 70.0);
        assert!((factors.temperature_f - 70.0).abs() < f64::EPSILON);
        assert!((factors.temperature - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_labels_for_missing_selections() {
        let conditions = RaceConditions {
            sweat: Some(SweatType::Heavy),
            temperature_f: Some(85.0),
            ..RaceConditions::default()
        };
        let factors = EnvironmentalFactors::from_conditions(&conditions, 70.0);
        let labels = ConditionLabels::describe(&conditions, &factors);
        assert_eq!(labels.sweat, "Heavy Sweater");
        assert_eq!(labels.temperature, "85°F, Hot (80-89°F)");
        assert_eq!(labels.wind, NOT_SPECIFIED);
    }
}
