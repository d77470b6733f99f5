// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for keystone-fuel
// ABOUTME: Text rendering of plans, advice and tables, JSON output and error reporting

use anyhow::Result;
use clap::ValueEnum;
use keystone_fuel::constants::{contact, service_names};
use keystone_fuel::errors::{AppError, ErrorResponse};
use keystone_fuel::intelligence::{
    DayTarget, NutritionPlan, RaceAlignment, RaceFuelingPlan, RateAdvice, WeightGoal,
};
use keystone_fuel::models::{ConditionCategory, RaceType};
use serde::Serialize;

/// Output format for plans and errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print an error on stderr and return the process exit code for it
pub fn report_error(error: &anyhow::Error, format: OutputFormat) -> u8 {
    let app_error = error.downcast_ref::<AppError>();
    let code = app_error.map_or(1, |e| e.code.exit_code());

    match format {
        OutputFormat::Json => {
            let response = app_error.map_or_else(
                || ErrorResponse::from(&AppError::internal(format!("{error:#}"))),
                ErrorResponse::from,
            );
            match serde_json::to_string_pretty(&response) {
                Ok(body) => eprintln!("{body}"),
                Err(_) => eprintln!("Error: {error:#}"),
            }
        }
        OutputFormat::Text => eprintln!("Error: {error:#}"),
    }

    u8::try_from(code).unwrap_or(1)
}

fn heading(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(60));
}

/// Render a race-day fueling plan
pub fn render_race_plan(plan: &RaceFuelingPlan) {
    let race = &plan.race;
    println!("\n{}", service_names::DISPLAY_NAME);
    println!("{} ({}): {}", race.name, race.distance, race.breakdown);
    println!("Expected duration: {} hours", race.duration_hours);

    let taper = &plan.taper;
    heading(if taper.carb_loading {
        "Pre-race (2-3 days before): carb loading"
    } else {
        "Pre-race (2-3 days before): taper"
    });
    println!("   Carbs:    {} g", taper.macros.carbs_g);
    println!("   Protein:  {} g", taper.macros.protein_g);
    println!("   Fat:      {} g", taper.macros.fat_g);
    println!("   Calories: {} kcal/day", taper.calories);

    let morning = &plan.race_morning;
    heading("Race morning");
    println!("   Meal {}", morning.meal_window);
    println!(
        "   {} g carbs, {} g protein ({} kcal)",
        morning.meal_carbs_g, morning.meal_protein_g, morning.meal_calories
    );
    println!(
        "   30-60 minutes before start: {} g quick carbs",
        morning.pre_start_carbs_g
    );
    println!("   Optional caffeine: {} mg", morning.caffeine_mg);

    let during = &plan.during_race;
    heading("During the race");
    if during.fueling_needed {
        println!(
            "   Carbs:  {} g/hour ({} g total, {} strategy)",
            during.carbs_per_hour_g, during.total_carbs_g, during.strategy
        );
    } else {
        println!("   Carbs:  not needed, water and electrolytes only");
    }
    println!(
        "   Fluid:  {} oz/hour ({} oz total)",
        during.fluid_oz_per_hour, during.total_fluid_oz
    );
    println!("   Sodium: {} mg/hour", during.sodium_mg_per_hour);
    println!(
        "   Conditions: {} | {} | {} wind | {} | {} (x{:.2})",
        during.conditions.sweat,
        during.conditions.temperature,
        during.conditions.wind,
        during.conditions.humidity,
        during.conditions.sun,
        during.environmental_multiplier
    );

    let recovery = &plan.recovery;
    heading("Recovery");
    println!(
        "   Within 30 minutes: {} g carbs, {} g protein ({} kcal)",
        recovery.immediate.macros.carbs_g,
        recovery.immediate.macros.protein_g,
        recovery.immediate.calories
    );
    println!(
        "   2 hours later:     {} g carbs, {} g protein, {} g fat ({} kcal)",
        recovery.follow_up.macros.carbs_g,
        recovery.follow_up.macros.protein_g,
        recovery.follow_up.macros.fat_g,
        recovery.follow_up.calories
    );
}

fn render_day(label: &str, day: &DayTarget) {
    println!(
        "   {label:<9} {:>5} kcal  P {:>3} g  C {:>3} g  F {:>3} g{}",
        day.calories,
        day.macros.protein_g,
        day.macros.carbs_g,
        day.macros.fat_g,
        if day.hit_minimum {
            "  (raised to safety minimum)"
        } else {
            ""
        }
    );
}

/// Render a weight-goal nutrition plan
pub fn render_nutrition_plan(plan: &NutritionPlan) {
    println!("\n{}", service_names::DISPLAY_NAME);
    println!(
        "BMR {} kcal | maintenance {} kcal on training days, {} kcal on rest days",
        plan.bmr, plan.training_day.maintenance_calories, plan.rest_day.maintenance_calories
    );

    heading("Daily targets");
    render_day("Training", &plan.training_day);
    render_day("Rest", &plan.rest_day);
    render_day("Race day", &plan.event_day);
    if plan.training_day.selected_deficit > 0 {
        println!(
            "   Deficit: {} kcal/day applied on training days and {} kcal/day on rest days \
             (rate asks for {}); never below {} or {} kcal",
            plan.training_day.deficit,
            plan.rest_day.deficit,
            plan.training_day.selected_deficit,
            plan.training_day.safety_floor,
            plan.rest_day.safety_floor
        );
    }

    heading("Weekly schedule");
    for day in &plan.schedule.days {
        println!(
            "   {:<4} {:<9} {:>5} kcal",
            day.weekday.to_string(),
            day.day_type.to_string(),
            day.calories
        );
    }
    println!(
        "   {} training days | {} kcal/week | {} kcal/day average",
        plan.schedule.training_days,
        plan.schedule.weekly_calories,
        plan.schedule.average_daily_calories
    );

    render_weight_goal(&plan.weight_goal);
    render_advice(&plan.advice);
}

/// Render the weight-loss timeline
pub fn render_weight_goal(goal: &WeightGoal) {
    heading("Timeline");
    match goal.target_weight_lb {
        Some(target) => println!(
            "   {:.1} lb -> {target:.1} lb ({:.1} lb to lose)",
            goal.current_weight_lb, goal.weight_to_lose_lb
        ),
        None => println!("   {:.1} lb, no target weight", goal.current_weight_lb),
    }
    if let Some(goal_date) = goal.goal_date {
        println!(
            "   {} weeks at {:.1} lb/week, reached around {goal_date}",
            goal.weeks_to_goal, goal.weekly_loss_lb
        );
    }
    if let Some(race) = &goal.race {
        println!(
            "   Race {} in {} weeks, projected {:.1} lb",
            race.race_date, race.weeks_to_race, race.projected_weight_lb
        );
        if let (Some(gap), Some(alignment)) = (race.gap_lb, race.alignment) {
            let verdict = match alignment {
                RaceAlignment::Aligned => "on track",
                RaceAlignment::BehindSchedule => "behind schedule",
                RaceAlignment::AheadOfSchedule => "ahead of schedule",
            };
            println!("   {verdict} ({gap:+.1} lb versus target)");
        }
    }
}

/// Render the rate recommendation and its advisories
pub fn render_advice(advice: &RateAdvice) {
    heading("Recommended rate");
    println!("   {} (selected: {})", advice.recommended, advice.selected);
    if let Some(ideal) = advice.ideal_lb_per_week {
        println!("   Race date needs about {ideal:.1} lb/week");
    }
    for warning in &advice.warnings {
        println!("   ! {warning}");
    }
}

/// Render the race table
pub fn render_race_table() {
    heading("Races");
    for race in RaceType::ALL {
        let definition = race.definition();
        println!(
            "   {:<18} {:>5.1} h  {}",
            definition.name,
            definition.duration_hours,
            definition.breakdown()
        );
    }
}

/// Render the options of one race-day condition
pub fn render_condition_options<C: ConditionCategory>(title: &str) {
    heading(title);
    for option in C::ALL.iter().copied() {
        println!(
            "   {:<10} x{:<5} {}: {}",
            option.key(),
            option.multiplier(),
            option.label(),
            option.description()
        );
    }
}

/// Print the coaching contact footer
pub fn print_footer() {
    println!("\n{}", "-".repeat(60));
    println!("{}", contact::DISCLAIMER);
    println!(
        "Questions? {} | {}",
        contact::COACHING_EMAIL,
        contact::SOCIAL_HANDLE
    );
}
