// ABOUTME: Core types and constants for Keystone endurance nutrition planning
// ABOUTME: Foundation crate with error handling, unit constants, and static lookup tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Keystone Core
//!
//! Foundation crate providing shared types and constants for the Keystone
//! fueling calculators. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Unit conversions, energy densities and physiological constants
//! - **models**: Athlete and race models plus the immutable race/environment tables

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (athlete profile, race definitions, environment categories)
pub mod models;
