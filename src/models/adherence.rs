// ABOUTME: Meal-plan adherence records and completed plan periods
// ABOUTME: Raw facts produced by the meal-plan subsystem; this core only reads them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Between-meal snack
    Snack,
}

impl MealType {
    /// All meal slots in display order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];
}

/// One planned meal slot and whether it was actually consumed.
///
/// Produced by the external meal-plan subsystem, one record per
/// (user, date, meal slot). This core aggregates these, never writes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdherenceRecord {
    /// Owning user id
    pub user_id: Uuid,
    /// Plan date
    pub date: NaiveDate,
    /// Meal slot
    pub meal_type: MealType,
    /// Whether the user marked the meal consumed
    pub consumed: bool,
}

/// A concluded meal-plan cycle paired with its net weight change, the unit
/// of correlation analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanPeriod {
    /// Owning user id
    pub user_id: Uuid,
    /// Display name of the meal plan
    pub plan_name: String,
    /// Date the plan concluded
    pub completed_at: NaiveDate,
    /// Overall adherence over the plan, whole percent
    pub adherence_percentage: u8,
    /// Net weight change over the plan in kilograms (signed; negative = lost)
    pub weight_change_kg: f64,
}
