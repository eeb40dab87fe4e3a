// ABOUTME: Fixed nutrition and behavior thresholds used by the rule engine
// ABOUTME: Values mirror established dietary guidance; tunables live in config instead
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

//! Nutrition and behavior constants
//!
//! Fixed thresholds used by the recommendation rules. These are product
//! decisions backed by common dietary guidance, distinct from the tunable
//! analysis parameters in [`crate::config::intelligence_config`].

/// Adherence thresholds for the meal-plan rules
pub mod adherence {
    /// Below this adherence percentage the meal-plan rule fires
    pub const LOW_ADHERENCE_THRESHOLD: u8 = 70;

    /// Below this adherence percentage the meal-plan rule escalates to high
    /// priority
    pub const VERY_LOW_ADHERENCE_THRESHOLD: u8 = 50;
}

/// Calorie-target safety limits
pub mod calories {
    /// Daily calorie targets below this are flagged as unsustainable.
    /// Matches the commonly cited minimum intake for adults outside
    /// medical supervision.
    pub const MIN_SAFE_DAILY_CALORIES: u32 = 1200;
}

/// Weight-progress rule thresholds
pub mod progress {
    /// Weekly change magnitude (kg) below which progress counts as slow
    /// rather than steady
    pub const SLOW_PROGRESS_WINDOW_KG: f64 = 0.5;
}

/// Fixed rule confidences, in [0, 1]
pub mod confidence {
    /// Slow weight-loss / gradual weight-gain progress rules
    pub const PROGRESS_SLOW: f64 = 0.75;

    /// Stalled weight-loss rule
    pub const PROGRESS_STALLED: f64 = 0.85;

    /// Low meal-plan adherence rule
    pub const ADHERENCE: f64 = 0.8;

    /// Very low calorie target rule
    pub const CALORIE_FLOOR: f64 = 0.9;

    /// Sedentary activity rule
    pub const ACTIVITY: f64 = 0.7;

    /// Profile completeness rule
    pub const PROFILE_COMPLETENESS: f64 = 1.0;
}
