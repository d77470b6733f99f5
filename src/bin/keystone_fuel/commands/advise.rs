// ABOUTME: Advise command printing the weight-loss timeline and rate recommendation
// ABOUTME: Runs the projection and advisor without the day-target calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use keystone_fuel::intelligence::{project_weight_goal, recommend_rate};
use serde_json::json;
use tracing::info;

use super::CommandContext;
use crate::helpers::display::{self, OutputFormat};

pub use super::plan::GoalArgs as AdviseArgs;

/// Print the projected timeline and recommended weekly rate
pub fn run(ctx: &CommandContext<'_>, args: AdviseArgs) -> Result<()> {
    let (form, as_of) = args.into_form(ctx)?;
    let profile = form.to_profile(ctx.policy, &ctx.config.inputs)?;

    let goal = project_weight_goal(&profile, as_of, &ctx.config.weight_goal.projection);
    let advice = recommend_rate(&profile, &goal, as_of, &ctx.config.weight_goal.advisor);
    info!(
        recommended = %advice.recommended,
        warnings = advice.warnings.len(),
        "Rate advice ready"
    );

    match ctx.format {
        OutputFormat::Json => display::print_json(&json!({
            "as_of": as_of,
            "weight_goal": goal,
            "advice": advice,
        }))?,
        OutputFormat::Text => {
            display::render_weight_goal(&goal);
            display::render_advice(&advice);
            display::print_footer();
        }
    }
    Ok(())
}
