// ABOUTME: Plan command computing a weight-goal nutrition plan
// ABOUTME: Defines the goal flags shared with the advise command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use keystone_fuel::wizard::{FormFlow, WeightGoalForm};
use tracing::info;

use super::{apply_overrides, today, CommandContext};
use crate::helpers::display::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct GoalArgs {
    /// Gender (male or female)
    #[arg(long)]
    pub gender: Option<String>,

    /// Age in years
    #[arg(long)]
    pub age: Option<String>,

    /// Current weight in pounds
    #[arg(long)]
    pub weight: Option<String>,

    /// Height in inches
    #[arg(long)]
    pub height: Option<String>,

    /// Weekly training hours
    #[arg(long)]
    pub hours: Option<String>,

    /// Training weekdays, comma separated (mon,wed,fri)
    #[arg(long)]
    pub days: Option<String>,

    /// Primary sport
    #[arg(long)]
    pub sport: Option<String>,

    /// Racing goal (finish, pb, podium, qualify)
    #[arg(long)]
    pub goal: Option<String>,

    /// Target race weight in pounds
    #[arg(long)]
    pub target_weight: Option<String>,

    /// Target race date (YYYY-MM-DD)
    #[arg(long)]
    pub race_date: Option<String>,

    /// Weekly loss rate (maintain, 0.5, 1.0, 1.5, 2.0)
    #[arg(long)]
    pub rate: Option<String>,

    /// Reference date for timelines (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

impl GoalArgs {
    /// Goal form from the profile and flags, plus the reference date
    pub fn into_form(self, ctx: &CommandContext<'_>) -> Result<(WeightGoalForm, NaiveDate)> {
        let as_of = self.as_of.unwrap_or_else(today);
        let mut form: WeightGoalForm = ctx.base_form()?;
        apply_overrides(
            &mut form,
            [
                ("gender", self.gender),
                ("age", self.age),
                ("weight", self.weight),
                ("height", self.height),
                ("weekly_hours", self.hours),
                ("training_days", self.days),
                ("sport", self.sport),
                ("racing_goal", self.goal),
                ("target_weight", self.target_weight),
                ("race_date", self.race_date),
                ("weekly_rate", self.rate),
            ],
        )?;
        Ok((form, as_of))
    }
}

/// Compute and print a weight-goal nutrition plan
pub fn run(ctx: &CommandContext<'_>, args: GoalArgs) -> Result<()> {
    let (form, as_of) = args.into_form(ctx)?;
    let plan = form.compute(&ctx.flow(as_of))?;
    info!(
        %as_of,
        bmr = plan.bmr,
        recommended = %plan.advice.recommended,
        "Nutrition plan ready"
    );

    match ctx.format {
        OutputFormat::Json => display::print_json(&plan)?,
        OutputFormat::Text => {
            display::render_nutrition_plan(&plan);
            display::print_footer();
        }
    }
    Ok(())
}
