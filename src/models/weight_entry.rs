// ABOUTME: Weekly weigh-in entry model with wellbeing context fields
// ABOUTME: Validates new entries before they reach the persistence layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of the free-text notes field
const MAX_NOTES_LEN: usize = 500;

/// Self-reported mood at weigh-in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Feeling great
    Great,
    /// Feeling good
    Good,
    /// Neither good nor bad
    Neutral,
    /// Feeling low
    Low,
    /// Feeling stressed
    Stressed,
}

/// A logged weigh-in with optional wellbeing context.
///
/// Entries are created at most once per allowed cycle (see the weigh-in
/// gate) and are treated as immutable once aggregated; edits and deletes
/// happen in the persistence layer, outside this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Record id
    pub id: Uuid,
    /// Owning user id
    pub user_id: Uuid,
    /// Calendar date of the weigh-in
    pub date: NaiveDate,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Energy level on a 1-5 scale
    pub energy_level: u8,
    /// Self-reported mood
    pub mood: Mood,
    /// Hours slept the previous night
    pub sleep_hours: Option<f64>,
    /// Water intake in liters
    pub water_intake_liters: Option<f64>,
    /// Minutes of physical activity
    pub activity_minutes: Option<u32>,
    /// Free-text notes, capped at 500 characters
    pub notes: Option<String>,
}

/// Payload for logging a new weigh-in; identity and date are attached by the
/// service once the weigh-in gate has approved the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWeightEntry {
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Energy level on a 1-5 scale
    pub energy_level: u8,
    /// Self-reported mood
    pub mood: Mood,
    /// Hours slept the previous night
    pub sleep_hours: Option<f64>,
    /// Water intake in liters
    pub water_intake_liters: Option<f64>,
    /// Minutes of physical activity
    pub activity_minutes: Option<u32>,
    /// Free-text notes, capped at 500 characters
    pub notes: Option<String>,
}

impl NewWeightEntry {
    /// Validate the payload before persistence.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput`/`ValueOutOfRange` for non-positive weight,
    /// an energy level outside 1-5, or over-long notes. No partial state
    /// is mutated on rejection.
    pub fn validate(&self) -> AppResult<()> {
        if self.weight_kg <= 0.0 || !self.weight_kg.is_finite() {
            return Err(AppError::invalid_input(format!(
                "Weight must be positive, got {}",
                self.weight_kg
            )));
        }
        if !(1..=5).contains(&self.energy_level) {
            return Err(AppError::out_of_range(format!(
                "Energy level must be between 1 and 5, got {}",
                self.energy_level
            )));
        }
        if let Some(hours) = self.sleep_hours {
            if !(0.0..=24.0).contains(&hours) {
                return Err(AppError::out_of_range(format!(
                    "Sleep hours must be between 0 and 24, got {hours}"
                )));
            }
        }
        if let Some(notes) = &self.notes {
            if notes.chars().count() > MAX_NOTES_LEN {
                return Err(AppError::invalid_input(format!(
                    "Notes exceed the {MAX_NOTES_LEN} character limit"
                )));
            }
        }
        Ok(())
    }

    /// Materialize a persistable entry for the given user and date
    #[must_use]
    pub fn into_entry(self, user_id: Uuid, date: NaiveDate) -> WeightEntry {
        WeightEntry {
            id: Uuid::new_v4(),
            user_id,
            date,
            weight_kg: self.weight_kg,
            energy_level: self.energy_level,
            mood: self.mood,
            sleep_hours: self.sleep_hours,
            water_intake_liters: self.water_intake_liters,
            activity_minutes: self.activity_minutes,
            notes: self.notes,
        }
    }
}
