// ABOUTME: Static race table and the race-day fueling input record
// ABOUTME: Maps each race type to its distance label, expected duration and triathlon legs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use super::athlete::Gender;
use super::environment::RaceConditions;
use super::normalize_key;

/// Race category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RaceCategory {
    /// Single-discipline running race
    Run,
    /// Swim/bike/run
    Triathlon,
}

/// Swim/bike/run leg distances of a triathlon
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TriathlonLegs {
    /// Swim distance label
    pub swim: &'static str,
    /// Bike distance label
    pub bike: &'static str,
    /// Run distance label
    pub run: &'static str,
}

/// Static description of a race type
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RaceDefinition {
    /// Race name as shown on the selection step
    pub name: &'static str,
    /// Distance label
    pub distance: &'static str,
    /// Expected duration used for every duration tier (hours)
    pub duration_hours: f64,
    /// Leg distances for triathlons
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legs: Option<TriathlonLegs>,
    /// Category
    pub category: RaceCategory,
}

impl RaceDefinition {
    /// Human-readable course breakdown (`"0.93 mi swim, 24.8 mi bike, 6.2 mi run"`)
    #[must_use]
    pub fn breakdown(&self) -> String {
        self.legs.map_or_else(
            || self.distance.to_owned(),
            |legs| format!("{} swim, {} bike, {} run", legs.swim, legs.bike, legs.run),
        )
    }
}

/// Supported race types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RaceType {
    /// Sprint triathlon
    SprintTriathlon,
    /// Olympic triathlon
    OlympicTriathlon,
    /// Half Ironman (70.3)
    HalfIronman,
    /// Full Ironman (140.6)
    FullIronman,
    /// 5K run
    FiveK,
    /// 10K run
    TenK,
    /// Half marathon
    HalfMarathon,
    /// Full marathon
    Marathon,
}

impl RaceType {
    /// All race types in selection order
    pub const ALL: [Self; 8] = [
        Self::SprintTriathlon,
        Self::OlympicTriathlon,
        Self::HalfIronman,
        Self::FullIronman,
        Self::FiveK,
        Self::TenK,
        Self::HalfMarathon,
        Self::Marathon,
    ];

    /// Static definition of this race
    #[must_use]
    pub const fn definition(self) -> RaceDefinition {
        match self {
            Self::SprintTriathlon => RaceDefinition {
                name: "Sprint Triathlon",
                distance: "Sprint Distance",
                duration_hours: 1.5,
                legs: Some(TriathlonLegs {
                    swim: "0.5 mi",
                    bike: "12.4 mi",
                    run: "3.1 mi",
                }),
                category: RaceCategory::Triathlon,
            },
            Self::OlympicTriathlon => RaceDefinition {
                name: "Olympic Triathlon",
                distance: "Olympic Distance",
                duration_hours: 3.0,
                legs: Some(TriathlonLegs {
                    swim: "0.93 mi",
                    bike: "24.8 mi",
                    run: "6.2 mi",
                }),
                category: RaceCategory::Triathlon,
            },
            Self::HalfIronman => RaceDefinition {
                name: "Half Ironman (70.3)",
                distance: "70.3 Miles",
                duration_hours: 6.0,
                legs: Some(TriathlonLegs {
                    swim: "1.2 mi",
                    bike: "56 mi",
                    run: "13.1 mi",
                }),
                category: RaceCategory::Triathlon,
            },
            Self::FullIronman => RaceDefinition {
                name: "Full Ironman (140.6)",
                distance: "140.6 Miles",
                duration_hours: 12.0,
                legs: Some(TriathlonLegs {
                    swim: "2.4 mi",
                    bike: "112 mi",
                    run: "26.2 mi",
                }),
                category: RaceCategory::Triathlon,
            },
            Self::FiveK => RaceDefinition {
                name: "5K Run",
                distance: "5K (3.1 miles)",
                duration_hours: 0.5,
                legs: None,
                category: RaceCategory::Run,
            },
            Self::TenK => RaceDefinition {
                name: "10K Run",
                distance: "10K (6.2 miles)",
                duration_hours: 1.0,
                legs: None,
                category: RaceCategory::Run,
            },
            Self::HalfMarathon => RaceDefinition {
                name: "Half Marathon",
                distance: "13.1 Miles",
                duration_hours: 2.5,
                legs: None,
                category: RaceCategory::Run,
            },
            Self::Marathon => RaceDefinition {
                name: "Full Marathon",
                distance: "26.2 Miles",
                duration_hours: 4.5,
                legs: None,
                category: RaceCategory::Run,
            },
        }
    }

    /// Parse a race selection by display name or common shorthand
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        let key = normalize_key(s);
        let by_alias = match key.as_str() {
            "sprint" | "sprinttri" | "sprinttriathlon" => Some(Self::SprintTriathlon),
            "olympic" | "olympictri" | "olympictriathlon" => Some(Self::OlympicTriathlon),
            "70.3" | "halfironman" | "halfironman70.3" | "halfiron" => Some(Self::HalfIronman),
            "140.6" | "ironman" | "fullironman" | "fullironman140.6" => Some(Self::FullIronman),
            "5k" | "5krun" => Some(Self::FiveK),
            "10k" | "10krun" => Some(Self::TenK),
            "half" | "halfmarathon" => Some(Self::HalfMarathon),
            "marathon" | "fullmarathon" => Some(Self::Marathon),
            _ => None,
        };
        by_alias.or_else(|| {
            Self::ALL
                .into_iter()
                .find(|race| normalize_key(race.definition().name) == key)
        })
    }
}

impl fmt::Display for RaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.definition().name)
    }
}

/// Validated input record for the race-day fueling calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceProfile {
    /// Selected race
    pub race: RaceType,
    /// Gender
    pub gender: Gender,
    /// Body weight (lb)
    pub weight_lb: f64,
    /// Height (in); collected for completeness, not used by the fueling formulas
    pub height_in: f64,
    /// Race-day environment
    #[serde(default)]
    pub conditions: RaceConditions,
}
