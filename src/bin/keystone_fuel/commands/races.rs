// ABOUTME: Races command listing supported races and race-day condition options
// ABOUTME: Prints the static race table with durations and optional multiplier tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use clap::Args;
use keystone_fuel::models::{
    ConditionCategory, HumidityLevel, RaceType, SunExposure, SweatType, WindCondition,
};
use serde_json::{json, Value};

use super::CommandContext;
use crate::helpers::display::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct RacesArgs {
    /// Also list sweat, wind, humidity and sun options with their multipliers
    #[arg(long)]
    pub conditions: bool,
}

fn race_rows() -> Vec<Value> {
    RaceType::ALL
        .into_iter()
        .map(|race| {
            let definition = race.definition();
            json!({
                "race": race,
                "name": definition.name,
                "distance": definition.distance,
                "breakdown": definition.breakdown(),
                "duration_hours": definition.duration_hours,
                "category": definition.category,
            })
        })
        .collect()
}

fn condition_rows<C: ConditionCategory>() -> Vec<Value> {
    C::ALL
        .iter()
        .copied()
        .map(|option| {
            json!({
                "key": option.key(),
                "label": option.label(),
                "description": option.description(),
                "multiplier": option.multiplier(),
            })
        })
        .collect()
}

/// Print the race table
pub fn run(ctx: &CommandContext<'_>, args: &RacesArgs) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let mut body = serde_json::Map::new();
            body.insert("races".into(), Value::Array(race_rows()));
            if args.conditions {
                body.insert("sweat_type".into(), Value::Array(condition_rows::<SweatType>()));
                body.insert("wind".into(), Value::Array(condition_rows::<WindCondition>()));
                body.insert("humidity".into(), Value::Array(condition_rows::<HumidityLevel>()));
                body.insert("sun".into(), Value::Array(condition_rows::<SunExposure>()));
            }
            display::print_json(&body)?;
        }
        OutputFormat::Text => {
            display::render_race_table();
            if args.conditions {
                display::render_condition_options::<SweatType>("Sweat type");
                display::render_condition_options::<WindCondition>("Wind");
                display::render_condition_options::<HumidityLevel>("Humidity");
                display::render_condition_options::<SunExposure>("Sun exposure");
            }
        }
    }
    Ok(())
}
