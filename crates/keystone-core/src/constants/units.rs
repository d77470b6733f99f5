// ABOUTME: Unit conversion constants and helpers for imperial form inputs
// ABOUTME: Pounds/kilograms and inches/centimeters conversions used by every calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Kilograms per pound (exact international avoirdupois pound, truncated)
pub const KG_PER_POUND: f64 = 0.453_592;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Convert pounds to kilograms
#[must_use]
pub fn pounds_to_kg(pounds: f64) -> f64 {
    pounds * KG_PER_POUND
}

/// Convert kilograms to pounds
#[must_use]
pub fn kg_to_pounds(kg: f64) -> f64 {
    kg / KG_PER_POUND
}

/// Convert inches to centimeters
#[must_use]
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pounds_to_kg() {
        assert!((pounds_to_kg(220.0) - 99.790_24).abs() < 1e-9);
        assert!((pounds_to_kg(170.0) - 77.110_64).abs() < 1e-9);
    }

    #[test]
    fn test_inches_to_cm() {
        assert!((inches_to_cm(70.0) - 177.8).abs() < 1e-9);
    }

    #[test]
    fn test_kg_to_pounds_inverts() {
        assert!((kg_to_pounds(pounds_to_kg(154.0)) - 154.0).abs() < 1e-9);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(pounds_to_kg(f64::NAN).is_nan());
    }
}
