// ABOUTME: Race command computing a race-day fueling plan
// ABOUTME: Builds a race form from the profile and flags, then renders the plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use clap::Args;
use keystone_fuel::wizard::{FormFlow, RaceForm};
use tracing::info;

use super::{apply_overrides, today, CommandContext};
use crate::helpers::display::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct RaceArgs {
    /// Race type ("Olympic Triathlon", "70.3", "marathon", ...)
    #[arg(long)]
    pub race: Option<String>,

    /// Gender (male or female)
    #[arg(long)]
    pub gender: Option<String>,

    /// Weight in pounds
    #[arg(long)]
    pub weight: Option<String>,

    /// Height in inches
    #[arg(long)]
    pub height: Option<String>,

    /// Sweat type (Dry, Light, Medium, Heavy, Excessive)
    #[arg(long)]
    pub sweat: Option<String>,

    /// Average race temperature in °F
    #[arg(long)]
    pub temp: Option<String>,

    /// Wind (Still, Light, Windy)
    #[arg(long)]
    pub wind: Option<String>,

    /// Humidity (Dry, Humid, Muggy)
    #[arg(long)]
    pub humidity: Option<String>,

    /// Sun exposure (Overcast, Partly, Sunny, Tropical)
    #[arg(long)]
    pub sun: Option<String>,
}

impl RaceArgs {
    fn into_overrides(self) -> [(&'static str, Option<String>); 9] {
        [
            ("race_type", self.race),
            ("gender", self.gender),
            ("weight", self.weight),
            ("height", self.height),
            ("sweat_type", self.sweat),
            ("avg_temp", self.temp),
            ("wind", self.wind),
            ("humidity", self.humidity),
            ("sun", self.sun),
        ]
    }
}

/// Compute and print a race-day fueling plan
pub fn run(ctx: &CommandContext<'_>, args: RaceArgs) -> Result<()> {
    let mut form: RaceForm = ctx.base_form()?;
    apply_overrides(&mut form, args.into_overrides())?;

    let plan = form.compute(&ctx.flow(today()))?;
    info!(
        race = %plan.race.race,
        carbs_per_hour = plan.during_race.carbs_per_hour_g,
        "Race plan ready"
    );

    match ctx.format {
        OutputFormat::Json => display::print_json(&plan)?,
        OutputFormat::Text => {
            display::render_race_plan(&plan);
            display::print_footer();
        }
    }
    Ok(())
}
