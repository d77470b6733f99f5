// ABOUTME: Configuration management module for calculator coefficients and input handling
// ABOUTME: Re-exports the calculator configuration and its domain sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! - **Intelligence**: domain sections (nutrition, race fueling, weight goal, inputs)
//! - **Intelligence config**: the composed [`CalculatorConfig`] with environment
//!   overrides, validation and a global singleton

/// Domain configuration sections
pub mod intelligence;
/// Composed calculator configuration
pub mod intelligence_config;

pub use intelligence::ConfigError;
pub use intelligence_config::CalculatorConfig;
