// ABOUTME: Analytics engines for nutrition progress data
// ABOUTME: Weigh-in gating, adherence aggregation, streaks, projections, correlation, rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

//! # Intelligence Module
//!
//! The computational core of the platform. Every component here is a pure
//! function of one user's record snapshot: no shared mutable state, no I/O,
//! no hidden coupling between analyzers. Persistence and presentation are
//! external collaborators reached through the `database` and `services`
//! modules.

pub mod adherence_analyzer;
pub mod correlation;
pub mod goal_projector;
pub mod nutrition_constants;
pub mod recommendation_engine;
pub mod streak;
pub mod weigh_in;

pub use adherence_analyzer::{
    AdherenceAnalytics, AdherenceAnalyzer, AdherenceSummary, DailyAdherence, MealTypeBreakdown,
    MealTypeStats,
};
pub use correlation::{
    CorrelationAnalyzer, CorrelationBucket, CorrelationInsights, CorrelationReport,
    CorrelationSummary, PeriodPoint,
};
pub use goal_projector::{
    Goal, GoalInsights, GoalProgress, GoalProjector, GoalReport, Projection, Projections,
};
pub use recommendation_engine::{RecommendationEngine, RecommendationInput};
pub use streak::{Streak, StreakCalculator};
pub use weigh_in::{WeighInGate, WeighInStatus};

/// Round a weight or kg delta to one decimal place, the display precision
/// used everywhere in the product. Repeated formatting is idempotent.
#[must_use]
pub fn round_kg(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Whole-percent share of `consumed` out of `total`, or `None` when there is
/// nothing planned. "No data" is distinct from 0% throughout the analyzers.
#[must_use]
pub fn percentage(consumed: u32, total: u32) -> Option<u8> {
    if total == 0 {
        return None;
    }
    Some((f64::from(consumed) / f64::from(total) * 100.0).round() as u8)
}
