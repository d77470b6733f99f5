// ABOUTME: Five-step form wizard as a pure step sequence decoupled from the calculators
// ABOUTME: Step transitions, per-flow completeness rules, guards and plan computation on finish
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Wizard
//!
//! A wizard walks a raw form through four input steps to a results step.
//! [`WizardStep`] transitions are pure; a [`FormFlow`] decides whether a step is
//! complete and where to redirect when earlier input is missing; a
//! [`WizardSession`] owns the form, the current step and the computed plan.
//!
//! | Step | Race flow | Weight-goal flow |
//! |------|-----------|------------------|
//! | 1 | race type | body stats |
//! | 2 | gender | training |
//! | 3 | weight and height | targets |
//! | 4 | conditions | strategy |
//! | 5 | results | results |

/// Policy-aware field parsing
pub mod fields;
/// Raw form records
pub mod forms;
/// JSON and YAML profile files
pub mod profile;

use std::fmt;

use chrono::NaiveDate;
use keystone_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::CalculatorConfig;
use crate::intelligence::{
    calculate_nutrition_plan, calculate_race_plan, NutritionPlan, RaceFuelingPlan,
};

pub use fields::{FieldParser, InputPolicy, NumericField};
pub use forms::{RaceForm, WeightGoalForm};
pub use profile::{load_form, parse_form, ProfileFormat};

/// Wizard position
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// First input step
    #[default]
    One,
    /// Second input step
    Two,
    /// Third input step
    Three,
    /// Last input step; advancing computes the plan
    Four,
    /// Plan display
    Results,
}

impl WizardStep {
    /// All steps in order
    pub const ALL: [Self; 5] = [Self::One, Self::Two, Self::Three, Self::Four, Self::Results];

    /// Step number, 1 through 5
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Results => 5,
        }
    }

    /// Step for a number, 1 through 5
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Results),
            _ => None,
        }
    }

    /// Following step; `Results` stays put
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::Three,
            Self::Three => Self::Four,
            Self::Four | Self::Results => Self::Results,
        }
    }

    /// Preceding step; `One` stays put
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::One | Self::Two => Self::One,
            Self::Three => Self::Two,
            Self::Four => Self::Three,
            Self::Results => Self::Four,
        }
    }

    /// First step
    #[must_use]
    pub const fn reset() -> Self {
        Self::One
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}", self.number())
    }
}

/// Everything a flow needs to compute its plan
#[derive(Debug, Clone, Copy)]
pub struct FlowContext<'a> {
    /// Calculator configuration
    pub config: &'a CalculatorConfig,
    /// Input parsing policy
    pub policy: InputPolicy,
    /// Reference date for date-dependent figures
    pub as_of: NaiveDate,
}

/// Per-calculator wizard behaviour
pub trait FormFlow: Default {
    /// Plan produced on finishing the wizard
    type Plan;

    /// Title of an input step
    fn step_title(step: WizardStep) -> &'static str;

    /// Fields collected on an input step
    fn step_fields(step: WizardStep) -> &'static [&'static str];

    /// Whether the form holds enough input to leave `step`
    fn can_continue(&self, step: WizardStep) -> bool;

    /// Step to redirect to when earlier input is missing at `step`
    fn guard(&self, _step: WizardStep) -> Option<WizardStep> {
        None
    }

    /// Parse the form and run the calculator
    ///
    /// # Errors
    ///
    /// Returns an error if the form cannot be parsed under the context's policy
    fn compute(&self, ctx: &FlowContext<'_>) -> AppResult<Self::Plan>;
}

impl FormFlow for RaceForm {
    type Plan = RaceFuelingPlan;

    fn step_title(step: WizardStep) -> &'static str {
        match step {
            WizardStep::One => "Choose your race",
            WizardStep::Two => "Gender",
            WizardStep::Three => "Body stats",
            WizardStep::Four => "Race conditions",
            WizardStep::Results => "Your race-day fueling plan",
        }
    }

    fn step_fields(step: WizardStep) -> &'static [&'static str] {
        match step {
            WizardStep::One => &["race_type"],
            WizardStep::Two => &["gender"],
            WizardStep::Three => &["weight", "height"],
            WizardStep::Four => &["sweat_type", "avg_temp", "wind", "humidity", "sun"],
            WizardStep::Results => &[],
        }
    }

    fn can_continue(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::One => self.has_race(),
            WizardStep::Two => self.has_gender(),
            WizardStep::Three => self.has_body_stats(),
            WizardStep::Four => true,
            WizardStep::Results => false,
        }
    }

    fn compute(&self, ctx: &FlowContext<'_>) -> AppResult<Self::Plan> {
        let profile = self.to_profile(ctx.policy, &ctx.config.inputs)?;
        Ok(calculate_race_plan(&profile, ctx.config))
    }
}

impl FormFlow for WeightGoalForm {
    type Plan = NutritionPlan;

    fn step_title(step: WizardStep) -> &'static str {
        match step {
            WizardStep::One => "About you",
            WizardStep::Two => "Training",
            WizardStep::Three => "Race targets",
            WizardStep::Four => "Weight-loss strategy",
            WizardStep::Results => "Your nutrition plan",
        }
    }

    fn step_fields(step: WizardStep) -> &'static [&'static str] {
        match step {
            WizardStep::One => &["gender", "age", "weight", "height"],
            WizardStep::Two => &["weekly_hours", "training_days", "sport", "racing_goal"],
            WizardStep::Three => &["target_weight", "race_date"],
            WizardStep::Four => &["weekly_rate"],
            WizardStep::Results => &[],
        }
    }

    fn can_continue(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::One => self.has_body_stats(),
            WizardStep::Two => self.has_training(),
            WizardStep::Three => self.has_target_weight(),
            WizardStep::Four => self.has_rate(),
            WizardStep::Results => false,
        }
    }

    fn guard(&self, step: WizardStep) -> Option<WizardStep> {
        (step >= WizardStep::Four && !(self.has_weight() && self.has_target_weight()))
            .then_some(WizardStep::One)
    }

    fn compute(&self, ctx: &FlowContext<'_>) -> AppResult<Self::Plan> {
        let profile = self.to_profile(ctx.policy, &ctx.config.inputs)?;
        Ok(calculate_nutrition_plan(&profile, ctx.as_of, ctx.config))
    }
}

/// A form moving through the wizard
pub struct WizardSession<F: FormFlow> {
    form: F,
    step: WizardStep,
    plan: Option<F::Plan>,
}

impl<F: FormFlow> WizardSession<F> {
    /// Start at step 1 with `form`
    #[must_use]
    pub fn new(form: F) -> Self {
        Self {
            form,
            step: WizardStep::reset(),
            plan: None,
        }
    }

    /// Current step
    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// Current form
    #[must_use]
    pub const fn form(&self) -> &F {
        &self.form
    }

    /// Plan, once computed
    #[must_use]
    pub const fn plan(&self) -> Option<&F::Plan> {
        self.plan.as_ref()
    }

    /// Consume the session, returning its plan
    #[must_use]
    pub fn into_plan(self) -> Option<F::Plan> {
        self.plan
    }

    /// Edit the form, then apply the flow's guard
    pub fn update(&mut self, edit: impl FnOnce(&mut F)) {
        edit(&mut self.form);
        self.apply_guard();
    }

    /// Move forward one step
    ///
    /// Incomplete steps and the results step are left unchanged. Leaving step 4
    /// computes the plan.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the plan cannot be computed; the step is unchanged
    pub fn advance(&mut self, ctx: &FlowContext<'_>) -> AppResult<WizardStep> {
        if !self.form.can_continue(self.step) {
            debug!(step = %self.step, "Step incomplete, not advancing");
            return Ok(self.step);
        }
        if self.step == WizardStep::Four {
            self.plan = Some(self.form.compute(ctx)?);
            info!("Plan computed");
        }
        self.step = self.step.next();
        self.apply_guard();
        Ok(self.step)
    }

    /// Move back one step; leaving the results step discards the plan
    pub fn back(&mut self) -> WizardStep {
        if self.step == WizardStep::Results {
            self.plan = None;
        }
        self.step = self.step.prev();
        self.step
    }

    /// Clear the form and plan and return to step 1
    pub fn reset(&mut self) {
        self.form = F::default();
        self.plan = None;
        self.step = WizardStep::reset();
    }

    /// Advance until the results step
    ///
    /// # Errors
    ///
    /// Returns a missing-field error naming the first incomplete step, or the
    /// parse error from computing the plan
    pub fn finish(&mut self, ctx: &FlowContext<'_>) -> AppResult<&F::Plan> {
        while self.step != WizardStep::Results {
            let before = self.step;
            let after = self.advance(ctx)?;
            if after <= before {
                let field = F::step_fields(after).first().copied().unwrap_or("form");
                return Err(AppError::missing_field(field).with_details(serde_json::json!({
                    "field": field,
                    "step": after.number(),
                    "title": F::step_title(after),
                })));
            }
        }
        self.plan
            .as_ref()
            .ok_or_else(|| AppError::internal("Wizard finished without a plan"))
    }

    fn apply_guard(&mut self) {
        if let Some(target) = self.form.guard(self.step) {
            debug!(from = %self.step, to = %target, "Wizard guard redirect");
            self.step = target;
            self.plan = None;
        }
    }
}
