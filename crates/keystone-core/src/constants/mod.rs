// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy densities, body-mass energy equivalents, and static presentation strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion and measurement constants
pub mod units;

/// Energy density of macronutrients (kcal per gram)
///
/// Reference: Atwater general factors, USDA Agriculture Handbook No. 74
pub mod energy {
    /// Protein: 4 kcal/g
    pub const KCAL_PER_GRAM_PROTEIN: u32 = 4;
    /// Carbohydrate: 4 kcal/g
    pub const KCAL_PER_GRAM_CARBS: u32 = 4;
    /// Fat: 9 kcal/g
    pub const KCAL_PER_GRAM_FAT: u32 = 9;

    /// Energy equivalent of one pound of body mass.
    ///
    /// Wishnofsky (1958) approximation, used for weekly loss projections.
    pub const KCAL_PER_POUND_BODY_MASS: f64 = 3500.0;

    /// Calories for the given macro grams (4/4/9)
    #[must_use]
    pub const fn macro_calories(protein_g: u32, carbs_g: u32, fat_g: u32) -> u32 {
        protein_g * KCAL_PER_GRAM_PROTEIN
            + carbs_g * KCAL_PER_GRAM_CARBS
            + fat_g * KCAL_PER_GRAM_FAT
    }
}

/// Calendar constants
pub mod calendar {
    /// Days per week
    pub const DAYS_PER_WEEK: i64 = 7;
}

/// Service identity strings
pub mod service_names {
    /// Binary / tracing target name
    pub const KEYSTONE_FUEL: &str = "keystone_fuel";
    /// Display name used in banners
    pub const DISPLAY_NAME: &str = "Keystone Endurance Fueling Calculator";
}

/// Static contact details printed with every plan
pub mod contact {
    /// Coaching contact address
    pub const COACHING_EMAIL: &str = "coach@keystoneendurance.com";
    /// Social handle
    pub const SOCIAL_HANDLE: &str = "@keystoneendurance";
    /// Footer line shown below rendered plans
    pub const DISCLAIMER: &str = "General guidance based on sports nutrition research. \
        Consult a sports dietitian or physician for personalized medical advice.";
}
