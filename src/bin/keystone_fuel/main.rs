// ABOUTME: keystone-fuel - command-line front end for the endurance nutrition calculators
// ABOUTME: Race-day fueling, weight-goal plans, rate advice, the race table and an interactive wizard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Race-day fueling plan
//! keystone-fuel race --race olympic --gender male --weight 170 --height 70 \
//!     --sweat Medium --temp 75 --wind Light --humidity Humid --sun Partly
//!
//! # Weight-goal plan as JSON
//! keystone-fuel --format json plan --gender male --age 45 --weight 220 --height 70 \
//!     --hours 8 --days mon,tue,thu,sat --target-weight 200 --rate 1.0
//!
//! # Rate recommendation only, from a saved profile
//! keystone-fuel --profile athlete.yaml advise --race-date 2026-09-20
//!
//! # Race table with the condition options
//! keystone-fuel races --conditions
//!
//! # Step-by-step wizard
//! keystone-fuel wizard plan
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use keystone_fuel::config::CalculatorConfig;
use keystone_fuel::logging::LoggingConfig;
use keystone_fuel::wizard::InputPolicy;
use tracing::debug;

use commands::{
    advise::AdviseArgs, plan::GoalArgs, race::RaceArgs, races::RacesArgs, wizard::WizardArgs,
    CommandContext,
};
use helpers::display::{report_error, OutputFormat};

#[derive(Parser)]
#[command(
    name = "keystone-fuel",
    version,
    about = "Keystone Endurance fueling calculator",
    long_about = "Race-day fueling and weight-goal nutrition planning for endurance athletes. \
                  Text output goes to stdout, logs go to stderr."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Reject blank, malformed or out-of-range values instead of using defaults
    #[arg(long, global = true)]
    strict: bool,

    /// JSON or YAML file with raw form values; flags override its fields
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Race-day fueling plan: taper, race morning, during the race and recovery
    Race(RaceArgs),

    /// Weight-goal nutrition plan with day targets, weekly schedule and timeline
    Plan(GoalArgs),

    /// Recommended weekly loss rate and advisories
    Advise(AdviseArgs),

    /// List supported races
    Races(RacesArgs),

    /// Fill in a form step by step
    Wizard(WizardArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().with_verbosity(cli.verbose).init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let format = cli.format;
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => ExitCode::from(report_error(&error, format)),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = CalculatorConfig::global();
    let ctx = CommandContext {
        config,
        policy: if cli.strict {
            InputPolicy::Strict
        } else {
            InputPolicy::Lenient
        },
        format: cli.format,
        profile: cli.profile.as_deref(),
    };
    debug!(policy = ?ctx.policy, format = ?ctx.format, "Running command");

    match cli.command {
        Command::Race(args) => commands::race::run(&ctx, args),
        Command::Plan(args) => commands::plan::run(&ctx, args),
        Command::Advise(args) => commands::advise::run(&ctx, args),
        Command::Races(args) => commands::races::run(&ctx, &args),
        Command::Wizard(args) => commands::wizard::run(&ctx, &args),
    }
}
