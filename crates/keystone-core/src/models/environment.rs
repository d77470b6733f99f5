// ABOUTME: Race-day environment categories with their hydration/sodium multipliers
// ABOUTME: Sweat type, temperature band, wind, humidity and sun exposure lookup tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environmental lookup tables
//!
//! Each category is an immutable enum. An absent or unrecognized selection is
//! represented as `None` and contributes a neutral 1.0 multiplier, so incomplete
//! input degrades the estimate instead of aborting it.
//!
//! Reference: Sawka, M.N., et al. (2007). ACSM position stand: Exercise and fluid
//! replacement. *Medicine & Science in Sports & Exercise*, 39(2), 377-390.

use serde::{Deserialize, Serialize};

use super::normalize_key;

/// Common interface of the selectable environment categories
pub trait ConditionCategory: Copy + Sized + 'static {
    /// Every variant, in display order
    const ALL: &'static [Self];

    /// Form key (e.g. `"Medium"`)
    fn key(self) -> &'static str;

    /// Display label
    fn label(self) -> &'static str;

    /// One-line description shown next to the option
    fn description(self) -> &'static str;

    /// Fluid/sodium multiplier for this selection
    fn multiplier(self) -> f64;

    /// Parse a selection by key or label, case-insensitively
    fn from_str_lossy(s: &str) -> Option<Self> {
        let wanted = normalize_key(s);
        if wanted.is_empty() {
            return None;
        }
        Self::ALL.iter().copied().find(|variant| {
            normalize_key(variant.key()) == wanted || normalize_key(variant.label()) == wanted
        })
    }

    /// Multiplier of an optional selection, 1.0 when absent
    fn multiplier_or_neutral(selection: Option<Self>) -> f64 {
        selection.map_or(1.0, Self::multiplier)
    }
}

/// How heavily the athlete sweats
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SweatType {
    /// Minimal sweat
    Dry,
    /// Light perspiration
    Light,
    /// Average sweater
    Medium,
    /// Soaked clothing
    Heavy,
    /// Dripping constantly
    Excessive,
}

impl ConditionCategory for SweatType {
    const ALL: &'static [Self] = &[
        Self::Dry,
        Self::Light,
        Self::Medium,
        Self::Heavy,
        Self::Excessive,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Dry => "Dry",
            Self::Light => "Light",
            Self::Medium => "Medium",
            Self::Heavy => "Heavy",
            Self::Excessive => "Excessive",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Dry => "Dry Sweater",
            Self::Light => "Light Sweater",
            Self::Medium => "Average Sweater",
            Self::Heavy => "Heavy Sweater",
            Self::Excessive => "Excessive Sweater",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Dry => "Minimal sweat, stay relatively dry",
            Self::Light => "Light perspiration, small sweat patches",
            Self::Medium => "Moderate sweating, visible perspiration",
            Self::Heavy => "Heavy sweating, soaked clothing",
            Self::Excessive => "Profuse sweating, dripping constantly",
        }
    }

    fn multiplier(self) -> f64 {
        match self {
            Self::Dry => 0.7,
            Self::Light => 0.85,
            Self::Medium => 1.0,
            Self::Heavy => 1.3,
            Self::Excessive => 1.6,
        }
    }
}

/// Typical wind during the race
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WindCondition {
    /// No air movement, less evaporative cooling
    Still,
    /// Gentle breeze
    Light,
    /// Strong wind
    Windy,
}

impl ConditionCategory for WindCondition {
    const ALL: &'static [Self] = &[Self::Still, Self::Light, Self::Windy];

    fn key(self) -> &'static str {
        match self {
            Self::Still => "Still",
            Self::Light => "Light",
            Self::Windy => "Windy",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Still => "Still/Calm",
            Self::Light => "Light Breeze",
            Self::Windy => "Windy",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Still => "No wind, air feels stagnant",
            Self::Light => "Gentle wind, noticeable but mild",
            Self::Windy => "Strong winds, significant air movement",
        }
    }

    fn multiplier(self) -> f64 {
        match self {
            Self::Still => 1.2,
            Self::Light => 1.0,
            Self::Windy => 0.85,
        }
    }
}

/// Typical humidity during the race
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HumidityLevel {
    /// Sweat evaporates quickly
    Dry,
    /// Some difficulty cooling
    Humid,
    /// Sweat barely evaporates
    Muggy,
}

impl ConditionCategory for HumidityLevel {
    const ALL: &'static [Self] = &[Self::Dry, Self::Humid, Self::Muggy];

    fn key(self) -> &'static str {
        match self {
            Self::Dry => "Dry",
            Self::Humid => "Humid",
            Self::Muggy => "Muggy",
        }
    }

    fn label(self) -> &'static str {
        self.key()
    }

    fn description(self) -> &'static str {
        match self {
            Self::Dry => "Low humidity, sweat evaporates quickly",
            Self::Humid => "Moderate humidity, some difficulty cooling",
            Self::Muggy => "High humidity, sweat doesn't evaporate easily",
        }
    }

    fn multiplier(self) -> f64 {
        match self {
            Self::Dry => 0.9,
            Self::Humid => 1.1,
            Self::Muggy => 1.3,
        }
    }
}

/// Sun exposure on the course
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SunExposure {
    /// Cloud cover
    Overcast,
    /// Mix of sun and clouds
    Partly,
    /// Clear skies
    Sunny,
    /// Extreme UV
    Tropical,
}

impl ConditionCategory for SunExposure {
    const ALL: &'static [Self] = &[Self::Overcast, Self::Partly, Self::Sunny, Self::Tropical];

    fn key(self) -> &'static str {
        match self {
            Self::Overcast => "Overcast",
            Self::Partly => "Partly",
            Self::Sunny => "Sunny",
            Self::Tropical => "Tropical",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Overcast => "Overcast/Cloudy",
            Self::Partly => "Partly Sunny/Cloudy",
            Self::Sunny => "Sunny",
            Self::Tropical => "Tropical/Intense Sun",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Overcast => "No direct sun, cloud cover",
            Self::Partly => "Mix of sun and clouds",
            Self::Sunny => "Clear skies, direct sunlight",
            Self::Tropical => "Extreme sun exposure, high UV",
        }
    }

    fn multiplier(self) -> f64 {
        match self {
            Self::Overcast => 0.9,
            Self::Partly => 1.0,
            Self::Sunny => 1.2,
            Self::Tropical => 1.3,
        }
    }
}

/// Average race temperature band (°F)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    /// Below 60°F
    Cool,
    /// 60-69°F
    Mild,
    /// 70-79°F
    Warm,
    /// 80-89°F
    Hot,
    /// 90°F and above
    VeryHot,
}

impl TemperatureBand {
    /// Band for a Fahrenheit temperature; callers substitute a default for non-finite input
    #[must_use]
    pub fn from_fahrenheit(temp_f: f64) -> Self {
        if temp_f < 60.0 {
            Self::Cool
        } else if temp_f < 70.0 {
            Self::Mild
        } else if temp_f < 80.0 {
            Self::Warm
        } else if temp_f < 90.0 {
            Self::Hot
        } else {
            Self::VeryHot
        }
    }

    /// Fluid/sodium multiplier for this band
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Cool => 0.8,
            Self::Mild => 1.0,
            Self::Warm => 1.2,
            Self::Hot => 1.4,
            Self::VeryHot => 1.6,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cool => "Cool (<60°F)",
            Self::Mild => "Mild (60-69°F)",
            Self::Warm => "Warm (70-79°F)",
            Self::Hot => "Hot (80-89°F)",
            Self::VeryHot => "Very hot (90°F+)",
        }
    }
}

/// Race-day environment as selected on the conditions step
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RaceConditions {
    /// Sweat type
    #[serde(default)]
    pub sweat: Option<SweatType>,
    /// Average temperature (°F)
    #[serde(default)]
    pub temperature_f: Option<f64>,
    /// Wind
    #[serde(default)]
    pub wind: Option<WindCondition>,
    /// Humidity
    #[serde(default)]
    pub humidity: Option<HumidityLevel>,
    /// Sun exposure
    #[serde(default)]
    pub sun: Option<SunExposure>,
}
