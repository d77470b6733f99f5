// ABOUTME: Command modules for keystone-fuel and the context they share
// ABOUTME: Profile loading, flag overrides and calculator context construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod advise;
pub mod plan;
pub mod race;
pub mod races;
pub mod wizard;

use std::path::Path;

use chrono::{Local, NaiveDate};
use keystone_fuel::config::CalculatorConfig;
use keystone_fuel::errors::AppResult;
use keystone_fuel::wizard::{load_form, FlowContext, InputPolicy, RaceForm, WeightGoalForm};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::helpers::display::OutputFormat;

/// Settings every command runs with
pub struct CommandContext<'a> {
    pub config: &'a CalculatorConfig,
    pub policy: InputPolicy,
    pub format: OutputFormat,
    pub profile: Option<&'a Path>,
}

impl CommandContext<'_> {
    /// Calculator context for a reference date
    pub fn flow(&self, as_of: NaiveDate) -> FlowContext<'_> {
        FlowContext {
            config: self.config,
            policy: self.policy,
            as_of,
        }
    }

    /// Form from `--profile`, or a blank form
    pub fn base_form<F: DeserializeOwned + Default>(&self) -> AppResult<F> {
        match self.profile {
            Some(path) => {
                info!(path = %path.display(), "Loading profile");
                load_form(path)
            }
            None => Ok(F::default()),
        }
    }
}

/// Forms whose fields can be assigned by name
pub trait EditableForm {
    fn set(&mut self, field: &str, value: String) -> AppResult<()>;
}

impl EditableForm for RaceForm {
    fn set(&mut self, field: &str, value: String) -> AppResult<()> {
        self.set_field(field, value)
    }
}

impl EditableForm for WeightGoalForm {
    fn set(&mut self, field: &str, value: String) -> AppResult<()> {
        self.set_field(field, value)
    }
}

/// Apply the flags that were given on top of the loaded form
pub fn apply_overrides<F: EditableForm>(
    form: &mut F,
    overrides: impl IntoIterator<Item = (&'static str, Option<String>)>,
) -> AppResult<()> {
    for (field, value) in overrides {
        if let Some(value) = value {
            form.set(field, value)?;
        }
    }
    Ok(())
}

/// Today's date on the local clock
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
