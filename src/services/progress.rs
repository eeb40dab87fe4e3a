// ABOUTME: Progress analytics service: weigh-ins, adherence, goals, correlations, recommendations
// ABOUTME: Orchestrates the pure analyzers over a ProgressStore backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

//! Progress analytics service

use crate::config::intelligence_config::IntelligenceConfig;
use crate::database::ProgressStore;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{
    AdherenceAnalytics, AdherenceAnalyzer, CorrelationAnalyzer, CorrelationReport, GoalProjector,
    GoalReport, RecommendationEngine, RecommendationInput, WeighInGate, WeighInStatus,
};
use crate::models::{
    ActionStep, GeneratedBy, NewRecommendation, NewWeightEntry, Recommendation,
    RecommendationPriority, RecommendationType, WeightEntry,
};
use chrono::{Duration, NaiveDate, Utc};
use serde::Deserialize;
use tracing::{debug, info};
use uuid::Uuid;

/// Active recommendations returned per listing, matching what the dashboard
/// renders
const MAX_ACTIVE_RECOMMENDATIONS: usize = 10;

/// Payload for a manually authored recommendation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecommendationRequest {
    /// Category
    pub recommendation_type: RecommendationType,
    /// Urgency, defaults to medium when omitted
    pub priority: Option<RecommendationPriority>,
    /// Short headline
    pub title: String,
    /// What the user should consider doing
    pub description: String,
    /// Optional rationale
    pub reasoning: Option<String>,
    /// Ordered step texts
    #[serde(default)]
    pub action_steps: Vec<String>,
}

/// Facade over the progress analytics pipeline.
///
/// All date-sensitive operations take `today` explicitly so callers (and
/// tests) control the clock; wall-clock timestamps are only attached to
/// persisted records.
pub struct ProgressService<S> {
    store: S,
    gate: WeighInGate,
    adherence: AdherenceAnalyzer,
    projector: GoalProjector,
    correlation: CorrelationAnalyzer,
    engine: RecommendationEngine,
}

impl<S: ProgressStore> ProgressService<S> {
    /// Create a service with the process-wide analysis tunables
    /// ([`IntelligenceConfig::global`], environment overrides included)
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_config(store, IntelligenceConfig::global())
    }

    /// Create a service with explicit analysis tunables
    #[must_use]
    pub fn with_config(store: S, config: &IntelligenceConfig) -> Self {
        Self {
            store,
            gate: WeighInGate::new(&config.weigh_in),
            adherence: AdherenceAnalyzer::new(&config.adherence),
            projector: GoalProjector::new(config.projection.clone()),
            correlation: CorrelationAnalyzer::new(config.correlation.clone()),
            engine: RecommendationEngine::new(),
        }
    }

    /// Access the underlying store, e.g. for seeding
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Evaluate the weigh-in gate for `today`
    ///
    /// # Errors
    ///
    /// Returns an error only when the backend fails.
    pub async fn weigh_in_status(&self, user_id: Uuid, today: NaiveDate) -> AppResult<WeighInStatus> {
        let entries = self.store.weight_entries(user_id).await?;
        Ok(self.gate.status(today, entries.last()))
    }

    /// Validate and persist a weigh-in for `today`, gated by the weekly
    /// cadence. Also rolls the profile's current weight forward when a
    /// profile exists.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the entry fails validation or the gate
    /// blocks logging today.
    pub async fn log_weight_entry(
        &self,
        user_id: Uuid,
        today: NaiveDate,
        new_entry: NewWeightEntry,
    ) -> AppResult<WeightEntry> {
        new_entry.validate()?;

        let entries = self.store.weight_entries(user_id).await?;
        let status = self.gate.status(today, entries.last());
        if !status.can_weigh_in {
            return Err(AppError::invalid_input(status.message));
        }

        let entry = new_entry.into_entry(user_id, today);
        self.store.insert_weight_entry(entry.clone()).await?;

        if let Some(mut profile) = self.store.get_user_profile(user_id).await? {
            profile.current_weight = Some(entry.weight_kg);
            self.store.upsert_user_profile(profile).await?;
        }

        info!(%user_id, date = %entry.date, weight_kg = entry.weight_kg, "logged weigh-in");
        Ok(entry)
    }

    /// Adherence analytics over the trailing `window_days` ending `today`
    ///
    /// # Errors
    ///
    /// Returns an error only when the backend fails.
    pub async fn adherence_analytics(
        &self,
        user_id: Uuid,
        today: NaiveDate,
        window_days: u32,
    ) -> AppResult<AdherenceAnalytics> {
        let from = today - Duration::days(i64::from(window_days.saturating_sub(1)));
        let records = self.store.adherence_records(user_id, from, today).await?;
        debug!(%user_id, window_days, records = records.len(), "computing adherence analytics");
        Ok(self.adherence.analyze(&records))
    }

    /// Goal progress and completion-date projections
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the user has no profile.
    pub async fn goal_progress(&self, user_id: Uuid, today: NaiveDate) -> AppResult<GoalReport> {
        let profile = self
            .store
            .get_user_profile(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Profile for user {user_id}")))?;
        let entries = self.store.weight_entries(user_id).await?;
        Ok(self.projector.report(&profile, &entries, today))
    }

    /// Adherence/outcome correlation over completed plan periods
    ///
    /// # Errors
    ///
    /// Returns an error only when the backend fails.
    pub async fn correlations(&self, user_id: Uuid) -> AppResult<CorrelationReport> {
        let periods = self.store.completed_periods(user_id).await?;
        Ok(self.correlation.analyze(&periods))
    }

    /// Run the rule engine against the user's current snapshot and persist
    /// whatever fires
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the user has no profile.
    pub async fn generate_recommendations(&self, user_id: Uuid) -> AppResult<Vec<Recommendation>> {
        let profile = self
            .store
            .get_user_profile(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Profile for user {user_id}")))?;
        let entries = self.store.weight_entries(user_id).await?;
        let active_plan_adherence = self.store.active_plan_adherence(user_id).await?;

        let input = RecommendationInput {
            profile: &profile,
            entries: &entries,
            active_plan_adherence,
        };
        let now = Utc::now();
        let generated: Vec<Recommendation> = self
            .engine
            .generate(&input)
            .into_iter()
            .map(|g| Recommendation::from_generated(user_id, g, now))
            .collect();

        info!(%user_id, count = generated.len(), "generated recommendations");
        self.store.insert_recommendations(generated.clone()).await?;
        Ok(generated)
    }

    /// Persist a manually authored recommendation
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when title or description is blank.
    pub async fn create_recommendation(
        &self,
        user_id: Uuid,
        request: CreateRecommendationRequest,
    ) -> AppResult<Recommendation> {
        if request.title.trim().is_empty() {
            return Err(AppError::invalid_input("Recommendation title is required"));
        }
        if request.description.trim().is_empty() {
            return Err(AppError::invalid_input(
                "Recommendation description is required",
            ));
        }

        let recommendation = Recommendation::from_generated(
            user_id,
            NewRecommendation {
                recommendation_type: request.recommendation_type,
                priority: request.priority.unwrap_or(RecommendationPriority::Medium),
                title: request.title,
                description: request.description,
                reasoning: request.reasoning.unwrap_or_default(),
                action_steps: request.action_steps.into_iter().map(ActionStep::new).collect(),
                generated_by: GeneratedBy::Manual,
                confidence: 1.0,
            },
            Utc::now(),
        );

        self.store
            .insert_recommendations(vec![recommendation.clone()])
            .await?;
        Ok(recommendation)
    }

    /// The user's active recommendations, highest priority first, capped to
    /// what the dashboard shows
    ///
    /// # Errors
    ///
    /// Returns an error only when the backend fails.
    pub async fn active_recommendations(&self, user_id: Uuid) -> AppResult<Vec<Recommendation>> {
        let mut active = self.store.active_recommendations(user_id).await?;
        active.truncate(MAX_ACTIVE_RECOMMENDATIONS);
        Ok(active)
    }

    /// Dismiss a recommendation the user owns
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the id is unknown or owned by another
    /// user.
    pub async fn dismiss_recommendation(
        &self,
        user_id: Uuid,
        recommendation_id: Uuid,
    ) -> AppResult<Recommendation> {
        let mut recommendation = self.owned_recommendation(user_id, recommendation_id).await?;
        recommendation.dismiss(Utc::now());
        self.store.update_recommendation(recommendation.clone()).await?;
        Ok(recommendation)
    }

    /// Mark a recommendation the user owns as applied
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the id is unknown or owned by another
    /// user.
    pub async fn apply_recommendation(
        &self,
        user_id: Uuid,
        recommendation_id: Uuid,
    ) -> AppResult<Recommendation> {
        let mut recommendation = self.owned_recommendation(user_id, recommendation_id).await?;
        recommendation.apply(Utc::now());
        self.store.update_recommendation(recommendation.clone()).await?;
        Ok(recommendation)
    }

    /// Complete one action step on a recommendation the user owns
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown or foreign recommendations and
    /// `InvalidInput` for an out-of-range step index.
    pub async fn complete_action_step(
        &self,
        user_id: Uuid,
        recommendation_id: Uuid,
        step_index: usize,
    ) -> AppResult<Recommendation> {
        let mut recommendation = self.owned_recommendation(user_id, recommendation_id).await?;
        recommendation.complete_action_step(step_index, Utc::now())?;
        self.store.update_recommendation(recommendation.clone()).await?;
        Ok(recommendation)
    }

    /// Ownership check folded into lookup: a foreign recommendation is
    /// indistinguishable from a missing one.
    async fn owned_recommendation(
        &self,
        user_id: Uuid,
        recommendation_id: Uuid,
    ) -> AppResult<Recommendation> {
        self.store
            .get_recommendation(recommendation_id)
            .await?
            .filter(|r| r.user_id == user_id)
            .ok_or_else(|| AppError::not_found(format!("Recommendation {recommendation_id}")))
    }
}
