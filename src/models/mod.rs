// ABOUTME: Domain data structures shared across the insights engine
// ABOUTME: Users, weight entries, adherence records, and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

//! Domain models for nutrition progress tracking

pub mod adherence;
pub mod recommendation;
pub mod user;
pub mod weight_entry;

pub use adherence::{AdherenceRecord, MealType, PlanPeriod};
pub use recommendation::{
    ActionStep, GeneratedBy, NewRecommendation, Recommendation, RecommendationPriority,
    RecommendationStatus, RecommendationType,
};
pub use user::{ActivityLevel, HealthGoal, UserProfile};
pub use weight_entry::{Mood, NewWeightEntry, WeightEntry};
