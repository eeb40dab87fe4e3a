// ABOUTME: Storage abstraction for profiles, weigh-ins, adherence, and recommendations
// ABOUTME: Services depend on the trait; backends implement it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

//! Storage abstraction
//!
//! [`ProgressStore`] is the seam between the analytics services and whatever
//! persistence backs them. [`MemoryStore`] is the bundled backend, suitable
//! for tests and single-process deployments.

pub mod memory;

pub use memory::MemoryStore;

use crate::errors::AppResult;
use crate::models::{AdherenceRecord, PlanPeriod, Recommendation, UserProfile, WeightEntry};
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

/// Persistence operations the analytics services rely on.
///
/// Read methods return `Ok(None)` or an empty collection for unknown users;
/// only genuine backend failures surface as errors.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Fetch a user's profile
    async fn get_user_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>>;

    /// Create or replace a user's profile
    async fn upsert_user_profile(&self, profile: UserProfile) -> AppResult<()>;

    /// All weigh-ins for a user, ordered by date ascending
    async fn weight_entries(&self, user_id: Uuid) -> AppResult<Vec<WeightEntry>>;

    /// Append a weigh-in
    async fn insert_weight_entry(&self, entry: WeightEntry) -> AppResult<()>;

    /// Adherence records for a user with dates in `[from, to]`
    async fn adherence_records(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<AdherenceRecord>>;

    /// Record one meal's adherence outcome
    async fn insert_adherence_record(&self, record: AdherenceRecord) -> AppResult<()>;

    /// All completed plan periods for a user
    async fn completed_periods(&self, user_id: Uuid) -> AppResult<Vec<PlanPeriod>>;

    /// Record a completed plan period
    async fn insert_plan_period(&self, period: PlanPeriod) -> AppResult<()>;

    /// Adherence percentage of the user's active meal plan, if any
    async fn active_plan_adherence(&self, user_id: Uuid) -> AppResult<Option<u8>>;

    /// Set or clear the active-plan adherence figure
    async fn set_active_plan_adherence(&self, user_id: Uuid, adherence: Option<u8>)
        -> AppResult<()>;

    /// Persist a batch of recommendations
    async fn insert_recommendations(&self, recommendations: Vec<Recommendation>) -> AppResult<()>;

    /// Fetch one recommendation by id
    async fn get_recommendation(&self, id: Uuid) -> AppResult<Option<Recommendation>>;

    /// Replace a stored recommendation
    async fn update_recommendation(&self, recommendation: Recommendation) -> AppResult<()>;

    /// A user's active recommendations, highest priority first, newest first
    /// within a priority
    async fn active_recommendations(&self, user_id: Uuid) -> AppResult<Vec<Recommendation>>;
}
