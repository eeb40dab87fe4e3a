// ABOUTME: Recommendation records with prioritized action steps and lifecycle state
// ABOUTME: Created by the rule engine or manual authoring; mutated by dismiss/apply/step ops
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    /// Weight-goal progress feedback
    Progress,
    /// Meal-plan adherence feedback
    Meal,
    /// Nutrition settings feedback
    Nutrition,
    /// Physical activity feedback
    Exercise,
    /// Profile and housekeeping feedback
    General,
}

/// Urgency of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    /// Needs attention immediately
    Critical,
    /// Should be addressed soon
    High,
    /// Worth addressing
    Medium,
    /// Nice to have
    Low,
}

impl RecommendationPriority {
    /// Numeric rank for sorting, higher is more urgent
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

/// Provenance of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratedBy {
    /// Produced by the adaptive analysis path
    Ai,
    /// Produced by a fixed rule
    RuleBased,
    /// Authored directly by the user
    Manual,
}

/// Lifecycle state of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationStatus {
    /// Visible and actionable
    Active,
    /// Hidden by the user
    Dismissed,
    /// Applied or finished
    Completed,
}

/// One ordered step the user can check off
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionStep {
    /// What to do
    pub step: String,
    /// Whether the user marked it done
    pub completed: bool,
    /// When the user marked it done
    pub completed_at: Option<DateTime<Utc>>,
}

impl ActionStep {
    /// A fresh, uncompleted step
    #[must_use]
    pub fn new(step: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            completed: false,
            completed_at: None,
        }
    }
}

/// Rule-engine output: recommendation content without persistence identity.
///
/// The engine is pure and idempotent: identical inputs produce identical
/// `NewRecommendation` values. Ids and timestamps are attached by the
/// service at persistence time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecommendation {
    /// Category
    pub recommendation_type: RecommendationType,
    /// Urgency
    pub priority: RecommendationPriority,
    /// Short headline
    pub title: String,
    /// What the user should consider doing
    pub description: String,
    /// Why the rule fired, interpolating the triggering values
    pub reasoning: String,
    /// Ordered, initially-uncompleted steps
    pub action_steps: Vec<ActionStep>,
    /// Provenance marker
    pub generated_by: GeneratedBy,
    /// Confidence in [0, 1]
    pub confidence: f64,
}

/// A persisted recommendation owned by one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Record id
    pub id: Uuid,
    /// Owning user id
    pub user_id: Uuid,
    /// Category
    pub recommendation_type: RecommendationType,
    /// Urgency
    pub priority: RecommendationPriority,
    /// Short headline
    pub title: String,
    /// What the user should consider doing
    pub description: String,
    /// Why this was recommended
    pub reasoning: String,
    /// Ordered action steps
    pub action_steps: Vec<ActionStep>,
    /// Provenance marker
    pub generated_by: GeneratedBy,
    /// Confidence in [0, 1]
    pub confidence: f64,
    /// Lifecycle state, starts `Active`
    pub status: RecommendationStatus,
    /// Whether the user applied this recommendation
    pub applied: bool,
    /// When the user applied it
    pub applied_at: Option<DateTime<Utc>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

impl Recommendation {
    /// Materialize engine output as a persistable record for the given user
    #[must_use]
    pub fn from_generated(user_id: Uuid, generated: NewRecommendation, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            recommendation_type: generated.recommendation_type,
            priority: generated.priority,
            title: generated.title,
            description: generated.description,
            reasoning: generated.reasoning,
            action_steps: generated.action_steps,
            generated_by: generated.generated_by,
            confidence: generated.confidence,
            status: RecommendationStatus::Active,
            applied: false,
            applied_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Hide this recommendation from the active list
    pub fn dismiss(&mut self, now: DateTime<Utc>) {
        self.status = RecommendationStatus::Dismissed;
        self.updated_at = now;
    }

    /// Mark this recommendation as applied and completed
    pub fn apply(&mut self, now: DateTime<Utc>) {
        self.applied = true;
        self.applied_at = Some(now);
        self.status = RecommendationStatus::Completed;
        self.updated_at = now;
    }

    /// Mark the indexed action step completed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the index is out of range; no state is
    /// mutated in that case.
    pub fn complete_action_step(&mut self, index: usize, now: DateTime<Utc>) -> AppResult<()> {
        let step_count = self.action_steps.len();
        let step = self.action_steps.get_mut(index).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Invalid action step index {index}: recommendation has {step_count} steps"
            ))
        })?;
        step.completed = true;
        step.completed_at = Some(now);
        self.updated_at = now;
        Ok(())
    }
}
