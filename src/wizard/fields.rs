// ABOUTME: Policy-aware parsing of raw form strings into typed values
// ABOUTME: Lenient parsing substitutes configured defaults, strict parsing reports field errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use keystone_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How to treat blank or malformed form fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Fall back to configured defaults and drop unrecognized selections
    #[default]
    Lenient,
    /// Reject missing, malformed or out-of-range values
    Strict,
}

/// A numeric form field with its fallback and accepted range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericField {
    /// Field name used in errors and logs
    pub name: &'static str,
    /// Lenient fallback
    pub default: f64,
    /// Inclusive minimum
    pub min: f64,
    /// Inclusive maximum
    pub max: f64,
}

/// Parses raw field strings under an [`InputPolicy`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldParser {
    policy: InputPolicy,
}

impl FieldParser {
    /// Parser for `policy`
    #[must_use]
    pub const fn new(policy: InputPolicy) -> Self {
        Self { policy }
    }

    /// Active policy
    #[must_use]
    pub const fn policy(&self) -> InputPolicy {
        self.policy
    }

    /// Parse a required number
    ///
    /// Lenient: a blank, unreadable, non-finite or out-of-range value becomes the default.
    ///
    /// # Errors
    ///
    /// Strict only: missing, malformed or out-of-range values
    pub fn number(&self, field: &NumericField, raw: &str) -> AppResult<f64> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return self.fallback(field, raw, AppError::missing_field(field.name));
        }
        let Some(value) = trimmed.parse::<f64>().ok().filter(|v| v.is_finite()) else {
            return self.fallback(field, raw, AppError::invalid_format(field.name, trimmed));
        };
        if value < field.min || value > field.max {
            return self.fallback(
                field,
                raw,
                AppError::out_of_range(
                    field.name,
                    format!(
                        "Field '{}' must be between {} and {}, got {value}",
                        field.name, field.min, field.max
                    ),
                ),
            );
        }
        Ok(value)
    }

    /// Parse an optional number; blank is `None`
    ///
    /// # Errors
    ///
    /// Strict only: malformed or out-of-range values
    pub fn optional_number(&self, field: &NumericField, raw: &str) -> AppResult<Option<f64>> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        match self.policy {
            InputPolicy::Strict => self.number(field, raw).map(Some),
            InputPolicy::Lenient => {
                let parsed = raw
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite() && (field.min..=field.max).contains(v));
                if parsed.is_none() {
                    debug!(field = field.name, raw, "Ignoring unusable optional number");
                }
                Ok(parsed)
            }
        }
    }

    /// Parse a required selection that has no sensible default
    ///
    /// # Errors
    ///
    /// Under both policies: blank or unrecognized values
    pub fn required_choice<T>(
        &self,
        field: &'static str,
        raw: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> AppResult<T> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::missing_field(field));
        }
        parse(trimmed).ok_or_else(|| AppError::invalid_format(field, trimmed))
    }

    /// Parse a selection with a default; blank or unrecognized values become `default` when lenient
    ///
    /// # Errors
    ///
    /// Strict only: blank or unrecognized values
    pub fn choice_or<T: std::fmt::Debug>(
        &self,
        field: &'static str,
        raw: &str,
        default: T,
        parse: impl Fn(&str) -> Option<T>,
    ) -> AppResult<T> {
        match self.policy {
            InputPolicy::Strict => self.required_choice(field, raw, parse),
            InputPolicy::Lenient => Ok(parse(raw.trim()).unwrap_or_else(|| {
                debug!(field, raw, ?default, "Using default selection");
                default
            })),
        }
    }

    /// Parse an optional selection; blank is `None`
    ///
    /// # Errors
    ///
    /// Strict only: unrecognized values
    pub fn optional_choice<T>(
        &self,
        field: &'static str,
        raw: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> AppResult<Option<T>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match (parse(trimmed), self.policy) {
            (Some(value), _) => Ok(Some(value)),
            (None, InputPolicy::Strict) => Err(AppError::invalid_format(field, trimmed)),
            (None, InputPolicy::Lenient) => {
                debug!(field, raw, "Unrecognized selection treated as not specified");
                Ok(None)
            }
        }
    }

    /// Parse an optional `YYYY-MM-DD` date; blank is `None`
    ///
    /// # Errors
    ///
    /// Strict only: malformed dates
    pub fn optional_date(&self, field: &'static str, raw: &str) -> AppResult<Option<NaiveDate>> {
        self.optional_choice(field, raw, |s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
        })
    }

    fn fallback(&self, field: &NumericField, raw: &str, error: AppError) -> AppResult<f64> {
        match self.policy {
            InputPolicy::Strict => Err(error),
            InputPolicy::Lenient => {
                debug!(
                    field = field.name,
                    raw,
                    default = field.default,
                    reason = %error,
                    "Using default value"
                );
                Ok(field.default)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use keystone_core::errors::ErrorCode;

    use super::*;

    const WEIGHT: NumericField = NumericField {
        name: "weight",
        default: 154.32,
        min: 66.0,
        max: 660.0,
    };

    #[test]
    fn test_lenient_falls_back() {
        let parser = FieldParser::new(InputPolicy::Lenient);
        for raw in ["", "   ", "heavy", "NaN", "inf", "5"] {
            let value = parser.number(&WEIGHT, raw);
            assert!(matches!(value, Ok(v) if (v - 154.32).abs() < f64::EPSILON), "{raw}");
        }
        assert!(matches!(
            parser.number(&WEIGHT, " 180.5 "),
            Ok(v) if (v - 180.5).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn test_strict_reports_error_codes() {
        let parser = FieldParser::new(InputPolicy::Strict);
        let code = |raw: &str| parser.number(&WEIGHT, raw).err().map(|e| e.code);
        assert_eq!(code(""), Some(ErrorCode::MissingRequiredField));
        assert_eq!(code("abc"), Some(ErrorCode::InvalidFormat));
        assert_eq!(code("5"), Some(ErrorCode::ValueOutOfRange));
        assert_eq!(code("170"), None);
    }

    #[test]
    fn test_required_choice_is_required_in_both_policies() {
        for policy in [InputPolicy::Lenient, InputPolicy::Strict] {
            let parser = FieldParser::new(policy);
            let result = parser.required_choice("gender", "", |_| Some(()));
            assert!(matches!(result, Err(e) if e.code == ErrorCode::MissingRequiredField));
        }
    }

    #[test]
    fn test_optional_date() {
        let lenient = FieldParser::new(InputPolicy::Lenient);
        let strict = FieldParser::new(InputPolicy::Strict);
        assert!(matches!(lenient.optional_date("race_date", "next spring"), Ok(None)));
        assert!(strict.optional_date("race_date", "next spring").is_err());
        assert!(matches!(
            strict.optional_date("race_date", "2026-06-14"),
            Ok(Some(d)) if d == NaiveDate::from_ymd_opt(2026, 6, 14).unwrap_or_default()
        ));
    }
}
