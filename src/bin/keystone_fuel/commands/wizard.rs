// ABOUTME: Interactive wizard command walking a form through its steps on stdin
// ABOUTME: Supports going back, resetting and quitting; renders the plan on the results step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use keystone_fuel::constants::service_names;
use keystone_fuel::models::{
    ConditionCategory, HumidityLevel, RaceType, SunExposure, SweatType, WeeklyRate, WindCondition,
};
use keystone_fuel::wizard::{
    FlowContext, FormFlow, RaceForm, WeightGoalForm, WizardSession, WizardStep,
};
use tracing::{debug, info};

use super::{today, CommandContext, EditableForm};
use crate::helpers::display::{self, OutputFormat};

const BACK: &str = ":back";
const RESET: &str = ":reset";
const QUIT: &str = ":quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WizardKind {
    /// Race-day fueling
    Race,
    /// Weight-goal planning
    Plan,
}

#[derive(Debug, Args)]
pub struct WizardArgs {
    /// Which calculator to fill in
    #[arg(value_enum, default_value_t = WizardKind::Plan)]
    pub kind: WizardKind,

    /// Reference date for timelines (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

/// Run the interactive wizard
pub fn run(ctx: &CommandContext<'_>, args: &WizardArgs) -> Result<()> {
    let flow = ctx.flow(args.as_of.unwrap_or_else(today));
    let stdin = io::stdin();
    let mut input = stdin.lock();

    match args.kind {
        WizardKind::Race => {
            let form: RaceForm = ctx.base_form()?;
            if let Some(plan) = drive(WizardSession::new(form), &flow, &mut input)? {
                match ctx.format {
                    OutputFormat::Json => display::print_json(&plan)?,
                    OutputFormat::Text => display::render_race_plan(&plan),
                }
            }
        }
        WizardKind::Plan => {
            let form: WeightGoalForm = ctx.base_form()?;
            if let Some(plan) = drive(WizardSession::new(form), &flow, &mut input)? {
                match ctx.format {
                    OutputFormat::Json => display::print_json(&plan)?,
                    OutputFormat::Text => display::render_nutrition_plan(&plan),
                }
            }
        }
    }

    if ctx.format == OutputFormat::Text {
        display::print_footer();
    }
    Ok(())
}

/// Prompt for each step's fields until the results step; `None` when the user quits
fn drive<F, R>(
    mut session: WizardSession<F>,
    flow: &FlowContext<'_>,
    input: &mut R,
) -> Result<Option<F::Plan>>
where
    F: FormFlow + EditableForm,
    R: BufRead,
{
    println!("{}", service_names::DISPLAY_NAME);
    println!("Enter keeps the current value. {BACK} goes back, {RESET} starts over, {QUIT} exits.");

    'steps: while session.step() != WizardStep::Results {
        let step = session.step();
        println!("\nStep {} of 5: {}", step.number(), F::step_title(step));

        for &field in F::step_fields(step) {
            match field_hint(field) {
                Some(hint) => print!("  {field} ({hint}): "),
                None => print!("  {field}: "),
            }
            io::stdout().flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                debug!("Input closed, leaving wizard");
                return Ok(None);
            }

            match line.trim() {
                QUIT => return Ok(None),
                BACK => {
                    session.back();
                    continue 'steps;
                }
                RESET => {
                    session.reset();
                    continue 'steps;
                }
                "" => {}
                value => {
                    let mut outcome = Ok(());
                    session.update(|form| outcome = form.set(field, value.to_owned()));
                    outcome?;
                }
            }
        }

        match session.advance(flow) {
            Ok(next) if next == step => {
                println!("  Please complete {}.", F::step_fields(step).join(", "));
            }
            Ok(next) if next < step => {
                println!("  Current and target weight are needed first.");
            }
            Ok(_) => {}
            Err(error) => println!("  {error}"),
        }
    }

    info!("Wizard finished");
    Ok(session.into_plan())
}

fn keys<C: ConditionCategory>() -> String {
    C::ALL
        .iter()
        .map(|option| option.key())
        .collect::<Vec<_>>()
        .join(" | ")
}

fn field_hint(field: &str) -> Option<String> {
    let hint = match field {
        "race_type" => RaceType::ALL
            .into_iter()
            .map(|race| race.definition().name)
            .collect::<Vec<_>>()
            .join(" | "),
        "gender" => "male | female".into(),
        "weight" | "target_weight" => "lb".into(),
        "height" => "in".into(),
        "avg_temp" => "°F, optional".into(),
        "sweat_type" => keys::<SweatType>() + ", optional",
        "wind" => keys::<WindCondition>() + ", optional",
        "humidity" => keys::<HumidityLevel>() + ", optional",
        "sun" => keys::<SunExposure>() + ", optional",
        "weekly_hours" => "hours per week".into(),
        "training_days" => "mon,wed,fri".into(),
        "race_date" => "YYYY-MM-DD, optional".into(),
        "weekly_rate" => WeeklyRate::ALL
            .into_iter()
            .map(|rate| rate.to_string())
            .collect::<Vec<_>>()
            .join(" | "),
        _ => return None,
    };
    Some(hint)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use keystone_fuel::config::CalculatorConfig;
    use keystone_fuel::wizard::InputPolicy;

    use super::*;

    fn flow(config: &CalculatorConfig) -> FlowContext<'_> {
        FlowContext {
            config,
            policy: InputPolicy::Lenient,
            as_of: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap_or_default(),
        }
    }

    #[test]
    fn test_race_wizard_reaches_results() {
        let config = CalculatorConfig::default();
        let mut input = Cursor::new("olympic\nmale\n170\n70\nMedium\n75\nLight\nHumid\nPartly\n");
        let plan = drive(WizardSession::new(RaceForm::default()), &flow(&config), &mut input);
        let carbs = plan.ok().flatten().map(|p| p.during_race.carbs_per_hour_g);
        assert_eq!(carbs, Some(60));
    }

    #[test]
    fn test_quit_and_eof_return_no_plan() {
        let config = CalculatorConfig::default();
        let mut quit = Cursor::new("olympic\n:quit\n");
        let outcome = drive(WizardSession::new(RaceForm::default()), &flow(&config), &mut quit);
        assert!(matches!(outcome, Ok(None)));

        let mut eof = Cursor::new("");
        let outcome = drive(
            WizardSession::new(WeightGoalForm::default()),
            &flow(&config),
            &mut eof,
        );
        assert!(matches!(outcome, Ok(None)));
    }

    #[test]
    fn test_back_revisits_previous_step() {
        let config = CalculatorConfig::default();
        let mut input = Cursor::new("marathon\n:back\nhalf\nfemale\n130\n64\n\n\n\n\n\n");
        let plan = drive(WizardSession::new(RaceForm::default()), &flow(&config), &mut input);
        let race = plan.ok().flatten().map(|p| p.race.race);
        assert_eq!(race, Some(RaceType::HalfMarathon));
    }
}
