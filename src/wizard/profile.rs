// ABOUTME: Loads raw wizard forms from JSON or YAML profile files
// ABOUTME: Scalar and list values are flattened to the strings a form field holds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use keystone_core::errors::{AppError, AppResult, ErrorCode};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

/// Profile file syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
}

impl ProfileFormat {
    /// Format for a path, by extension; anything unrecognized is read as JSON
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Parse a form from profile text
///
/// Numbers and booleans become their string form, lists are joined with
/// commas and `null` becomes blank, so `weight: 170` and
/// `training_days: [mon, wed]` both fill their fields.
///
/// # Errors
///
/// Returns an error if the text is not valid for `format`, is not a mapping,
/// or holds a nested mapping
pub fn parse_form<F: DeserializeOwned>(content: &str, format: ProfileFormat) -> AppResult<F> {
    let raw: Value = match format {
        ProfileFormat::Json => serde_json::from_str(content).map_err(|e| {
            AppError::new(ErrorCode::InvalidFormat, format!("Invalid JSON profile: {e}"))
        })?,
        ProfileFormat::Yaml => serde_yaml::from_str(content).map_err(|e| {
            AppError::new(ErrorCode::InvalidFormat, format!("Invalid YAML profile: {e}"))
        })?,
    };

    let Value::Object(fields) = raw else {
        return Err(AppError::new(
            ErrorCode::InvalidFormat,
            "Profile must be a mapping of field names to values",
        ));
    };

    let mut flattened = Map::with_capacity(fields.len());
    for (name, value) in fields {
        let text = flatten_value(&name, value)?;
        flattened.insert(name, Value::String(text));
    }

    serde_json::from_value(Value::Object(flattened)).map_err(|e| {
        AppError::serialization(format!("Profile does not match the form: {e}")).with_source(e)
    })
}

/// Load a form from a JSON or YAML file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_form<F: DeserializeOwned>(path: &Path) -> AppResult<F> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("Failed to read profile file {}: {e}", path.display()))
            .with_source(e)
    })?;
    let format = ProfileFormat::from_path(path);
    debug!(path = %path.display(), ?format, "Loading profile");
    parse_form(&content, format)
}

fn flatten_value(field: &str, value: Value) -> AppResult<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Array(items) => {
            let parts = items
                .into_iter()
                .map(|item| flatten_value(field, item))
                .collect::<AppResult<Vec<_>>>()?;
            Ok(parts.join(","))
        }
        Value::Object(_) => Err(AppError::invalid_format(field, "nested mapping")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::WeightGoalForm;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ProfileFormat::from_path(Path::new("a.YML")), ProfileFormat::Yaml);
        assert_eq!(ProfileFormat::from_path(Path::new("a.yaml")), ProfileFormat::Yaml);
        assert_eq!(ProfileFormat::from_path(Path::new("a.json")), ProfileFormat::Json);
        assert_eq!(ProfileFormat::from_path(Path::new("profile")), ProfileFormat::Json);
    }

    #[test]
    fn test_yaml_scalars_and_lists_flatten() {
        let yaml = "gender: female\nweight: 140.5\ntrainingDays: [mon, thu]\nrace_date: ~\n";
        let form: WeightGoalForm = parse_form(yaml, ProfileFormat::Yaml).unwrap_or_default();
        assert_eq!(form.gender, "female");
        assert_eq!(form.weight, "140.5");
        assert_eq!(form.training_days, "mon,thu");
        assert!(form.race_date.is_empty());
    }

    #[test]
    fn test_non_mapping_rejected() {
        let result: AppResult<WeightGoalForm> = parse_form("[1, 2]", ProfileFormat::Json);
        assert!(matches!(result, Err(e) if e.code == ErrorCode::InvalidFormat));
    }
}
