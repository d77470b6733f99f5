// ABOUTME: Configuration error type shared by every calculator configuration section
// ABOUTME: Covers range, parse and weighting failures raised during load and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use keystone_core::errors::AppError;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Thresholds are not in the required order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// An environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A single value lies outside its accepted bounds
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
