// ABOUTME: User profile model with health goal and body composition fields
// ABOUTME: Source of goal targets and calorie/activity settings for the analyzers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of the user's weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthGoal {
    /// Lose weight toward a lower target
    Lose,
    /// Gain weight toward a higher target
    Gain,
    /// Hold current weight
    Maintain,
}

/// Self-reported baseline activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days per week
    LightlyActive,
    /// Moderate exercise 3-5 days per week
    ModeratelyActive,
    /// Hard exercise 6-7 days per week
    VeryActive,
}

/// User profile as supplied by the external identity/persistence layer.
///
/// Optional fields are genuinely optional in the product: the profile
/// completeness rule in the recommendation engine fires when any of
/// height, current weight, or age is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Owning user id
    pub user_id: Uuid,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Current weight in kilograms
    pub current_weight: Option<f64>,
    /// Target weight in kilograms; unset means no goal is configured
    pub target_weight: Option<f64>,
    /// Age in years
    pub age: Option<u32>,
    /// Weight goal direction
    pub health_goal: HealthGoal,
    /// Baseline activity level
    pub activity_level: ActivityLevel,
    /// Daily calorie target in kcal
    pub daily_calorie_target: Option<u32>,
    /// Optional self-imposed deadline for reaching the target weight
    pub target_date: Option<NaiveDate>,
}

impl UserProfile {
    /// Whether a weight goal is configured
    #[must_use]
    pub const fn has_goal(&self) -> bool {
        self.target_weight.is_some()
    }

    /// Whether the profile carries the fields needed for calorie and
    /// nutrition calculations
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.height_cm.is_some() && self.current_weight.is_some() && self.age.is_some()
    }
}
