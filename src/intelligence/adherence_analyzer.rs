// ABOUTME: Aggregates raw per-meal consumption records into daily and per-meal-type adherence
// ABOUTME: Keeps "no data" distinct from 0% so streaks and correlations stay honest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

//! Adherence aggregation over a date window

use super::streak::{Streak, StreakCalculator};
use crate::config::intelligence_config::AdherenceConfig;
use crate::models::{AdherenceRecord, MealType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Adherence for one tracked day.
///
/// `percentage` is `None` when no meals were planned that day. A day with
/// no plan is excluded from averages and breaks streaks, but is never
/// reported as 0%.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyAdherence {
    /// Plan date
    pub date: NaiveDate,
    /// Meals marked consumed
    pub consumed_meals: u32,
    /// Meals planned
    pub total_meals: u32,
    /// Whole-percent adherence, `None` when nothing was planned
    pub percentage: Option<u8>,
}

/// Window-wide totals for one meal slot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealTypeStats {
    /// Meals marked consumed
    pub consumed: u32,
    /// Meals planned
    pub total: u32,
    /// Whole-percent adherence, `None` when nothing was planned
    pub percentage: Option<u8>,
}

/// Column-wise adherence per meal slot across the whole window
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealTypeBreakdown {
    /// Breakfast totals
    pub breakfast: MealTypeStats,
    /// Lunch totals
    pub lunch: MealTypeStats,
    /// Dinner totals
    pub dinner: MealTypeStats,
    /// Snack totals
    pub snacks: MealTypeStats,
}

impl MealTypeBreakdown {
    /// Totals for the given slot
    #[must_use]
    pub const fn stats(&self, meal_type: MealType) -> &MealTypeStats {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snack => &self.snacks,
        }
    }

    fn stats_mut(&mut self, meal_type: MealType) -> &mut MealTypeStats {
        match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snack => &mut self.snacks,
        }
    }
}

/// Window-wide summary figures for the adherence dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdherenceSummary {
    /// Consumed/planned over the whole window, whole percent
    pub overall_adherence: u8,
    /// Mean of per-day percentages (no-data days excluded), whole percent
    pub avg_adherence: u8,
    /// Days with a percentage at or above the streak threshold
    pub days_above_threshold: u32,
    /// Days with any planned meals in the window
    pub total_days: u32,
}

/// Full adherence analytics payload for one user and window.
///
/// An empty window yields `has_data = false` with an explanatory message
/// instead of zero-filled figures, so callers can distinguish "no plan yet"
/// from genuine 0% adherence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdherenceAnalytics {
    /// Whether any adherence records exist in the window
    pub has_data: bool,
    /// Explanation shown when `has_data` is false
    pub message: Option<String>,
    /// Per-day adherence ordered by date
    pub daily_data: Vec<DailyAdherence>,
    /// Per-meal-slot totals over the window
    pub meal_type_breakdown: MealTypeBreakdown,
    /// Current/longest consecutive-day streaks
    pub streaks: Streak,
    /// Window-wide summary figures
    pub summary: AdherenceSummary,
}

/// Turns raw [`AdherenceRecord`]s into daily series, per-meal breakdowns,
/// streaks, and summary figures.
#[derive(Debug, Clone)]
pub struct AdherenceAnalyzer {
    threshold: u8,
    streaks: StreakCalculator,
}

impl Default for AdherenceAnalyzer {
    fn default() -> Self {
        Self::new(&AdherenceConfig::default())
    }
}

impl AdherenceAnalyzer {
    /// Create an analyzer with the configured streak threshold
    #[must_use]
    pub fn new(config: &AdherenceConfig) -> Self {
        Self {
            threshold: config.streak_threshold,
            streaks: StreakCalculator::new(config.streak_threshold),
        }
    }

    /// Group records by date into an ordered daily series
    #[must_use]
    pub fn aggregate_daily(records: &[AdherenceRecord]) -> Vec<DailyAdherence> {
        let mut by_date: BTreeMap<NaiveDate, (u32, u32)> = BTreeMap::new();
        for record in records {
            let (consumed, total) = by_date.entry(record.date).or_default();
            *total += 1;
            if record.consumed {
                *consumed += 1;
            }
        }

        by_date
            .into_iter()
            .map(|(date, (consumed, total))| DailyAdherence {
                date,
                consumed_meals: consumed,
                total_meals: total,
                percentage: super::percentage(consumed, total),
            })
            .collect()
    }

    /// Column-wise totals per meal slot, independent of the date grouping
    #[must_use]
    pub fn meal_type_breakdown(records: &[AdherenceRecord]) -> MealTypeBreakdown {
        let mut breakdown = MealTypeBreakdown::default();
        for record in records {
            let stats = breakdown.stats_mut(record.meal_type);
            stats.total += 1;
            if record.consumed {
                stats.consumed += 1;
            }
        }
        for meal_type in MealType::ALL {
            let stats = breakdown.stats_mut(meal_type);
            stats.percentage = super::percentage(stats.consumed, stats.total);
        }
        breakdown
    }

    /// Full analytics for a window of records
    #[must_use]
    pub fn analyze(&self, records: &[AdherenceRecord]) -> AdherenceAnalytics {
        if records.is_empty() {
            return AdherenceAnalytics {
                has_data: false,
                message: Some(
                    "No meal plan data yet. Start a meal plan to track your adherence.".into(),
                ),
                daily_data: Vec::new(),
                meal_type_breakdown: MealTypeBreakdown::default(),
                streaks: Streak::default(),
                summary: AdherenceSummary::default(),
            };
        }

        let daily_data = Self::aggregate_daily(records);
        let meal_type_breakdown = Self::meal_type_breakdown(records);
        let streaks = self.streaks.calculate(&daily_data);
        let summary = self.summarize(&daily_data);

        AdherenceAnalytics {
            has_data: true,
            message: None,
            daily_data,
            meal_type_breakdown,
            streaks,
            summary,
        }
    }

    fn summarize(&self, daily_data: &[DailyAdherence]) -> AdherenceSummary {
        let consumed: u32 = daily_data.iter().map(|d| d.consumed_meals).sum();
        let total: u32 = daily_data.iter().map(|d| d.total_meals).sum();

        let tracked: Vec<u8> = daily_data.iter().filter_map(|d| d.percentage).collect();
        let avg_adherence = if tracked.is_empty() {
            0
        } else {
            (tracked.iter().map(|&p| f64::from(p)).sum::<f64>() / tracked.len() as f64).round()
                as u8
        };

        AdherenceSummary {
            overall_adherence: super::percentage(consumed, total).unwrap_or(0),
            avg_adherence,
            days_above_threshold: tracked.iter().filter(|&&p| p >= self.threshold).count() as u32,
            total_days: tracked.len() as u32,
        }
    }
}
