// ABOUTME: In-memory ProgressStore backed by concurrent maps
// ABOUTME: Default backend for tests and single-process deployments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

//! In-memory storage backend

use super::ProgressStore;
use crate::errors::AppResult;
use crate::models::{
    AdherenceRecord, PlanPeriod, Recommendation, RecommendationStatus, UserProfile, WeightEntry,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use uuid::Uuid;

/// Concurrent in-memory implementation of [`ProgressStore`].
///
/// Every operation is infallible here; the `AppResult` signatures exist for
/// parity with backends that can actually fail.
#[derive(Debug, Default)]
pub struct MemoryStore {
    profiles: DashMap<Uuid, UserProfile>,
    weight_entries: DashMap<Uuid, Vec<WeightEntry>>,
    adherence: DashMap<Uuid, Vec<AdherenceRecord>>,
    plan_periods: DashMap<Uuid, Vec<PlanPeriod>>,
    active_adherence: DashMap<Uuid, u8>,
    recommendations: DashMap<Uuid, Recommendation>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgressStore for MemoryStore {
    async fn get_user_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        Ok(self.profiles.get(&user_id).map(|p| p.clone()))
    }

    async fn upsert_user_profile(&self, profile: UserProfile) -> AppResult<()> {
        self.profiles.insert(profile.user_id, profile);
        Ok(())
    }

    async fn weight_entries(&self, user_id: Uuid) -> AppResult<Vec<WeightEntry>> {
        let mut entries = self
            .weight_entries
            .get(&user_id)
            .map(|e| e.clone())
            .unwrap_or_default();
        entries.sort_by_key(|e| e.date);
        Ok(entries)
    }

    async fn insert_weight_entry(&self, entry: WeightEntry) -> AppResult<()> {
        self.weight_entries
            .entry(entry.user_id)
            .or_default()
            .push(entry);
        Ok(())
    }

    async fn adherence_records(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<AdherenceRecord>> {
        Ok(self
            .adherence
            .get(&user_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| r.date >= from && r.date <= to)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn insert_adherence_record(&self, record: AdherenceRecord) -> AppResult<()> {
        self.adherence.entry(record.user_id).or_default().push(record);
        Ok(())
    }

    async fn completed_periods(&self, user_id: Uuid) -> AppResult<Vec<PlanPeriod>> {
        let mut periods = self
            .plan_periods
            .get(&user_id)
            .map(|p| p.clone())
            .unwrap_or_default();
        periods.sort_by_key(|p| p.completed_at);
        Ok(periods)
    }

    async fn insert_plan_period(&self, period: PlanPeriod) -> AppResult<()> {
        self.plan_periods
            .entry(period.user_id)
            .or_default()
            .push(period);
        Ok(())
    }

    async fn active_plan_adherence(&self, user_id: Uuid) -> AppResult<Option<u8>> {
        Ok(self.active_adherence.get(&user_id).map(|a| *a))
    }

    async fn set_active_plan_adherence(
        &self,
        user_id: Uuid,
        adherence: Option<u8>,
    ) -> AppResult<()> {
        match adherence {
            Some(value) => {
                self.active_adherence.insert(user_id, value);
            }
            None => {
                self.active_adherence.remove(&user_id);
            }
        }
        Ok(())
    }

    async fn insert_recommendations(&self, recommendations: Vec<Recommendation>) -> AppResult<()> {
        for recommendation in recommendations {
            self.recommendations
                .insert(recommendation.id, recommendation);
        }
        Ok(())
    }

    async fn get_recommendation(&self, id: Uuid) -> AppResult<Option<Recommendation>> {
        Ok(self.recommendations.get(&id).map(|r| r.clone()))
    }

    async fn update_recommendation(&self, recommendation: Recommendation) -> AppResult<()> {
        self.recommendations
            .insert(recommendation.id, recommendation);
        Ok(())
    }

    async fn active_recommendations(&self, user_id: Uuid) -> AppResult<Vec<Recommendation>> {
        let mut active: Vec<Recommendation> = self
            .recommendations
            .iter()
            .filter(|r| r.user_id == user_id && r.status == RecommendationStatus::Active)
            .map(|r| r.clone())
            .collect();
        active.sort_by(|a, b| {
            b.priority
                .rank()
                .cmp(&a.priority.rank())
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GeneratedBy, NewRecommendation, RecommendationPriority, RecommendationType};
    use chrono::Utc;

    fn recommendation(
        user_id: Uuid,
        priority: RecommendationPriority,
        title: &str,
    ) -> Recommendation {
        Recommendation::from_generated(
            user_id,
            NewRecommendation {
                recommendation_type: RecommendationType::General,
                priority,
                title: title.into(),
                description: "d".into(),
                reasoning: "r".into(),
                action_steps: Vec::new(),
                generated_by: GeneratedBy::RuleBased,
                confidence: 1.0,
            },
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_weight_entries_come_back_date_ordered() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();
        let day = |n| NaiveDate::from_ymd_opt(2024, 3, n).unwrap();

        for (date, weight) in [(day(11), 79.0), (day(4), 80.0), (day(18), 78.5)] {
            store
                .insert_weight_entry(WeightEntry {
                    id: Uuid::new_v4(),
                    user_id,
                    date,
                    weight_kg: weight,
                    energy_level: 3,
                    mood: crate::models::Mood::Good,
                    sleep_hours: None,
                    water_intake_liters: None,
                    activity_minutes: None,
                    notes: None,
                })
                .await
                .unwrap();
        }

        let entries = store.weight_entries(user_id).await.unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[tokio::test]
    async fn test_active_recommendations_sorted_by_priority() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();

        store
            .insert_recommendations(vec![
                recommendation(user_id, RecommendationPriority::Low, "low"),
                recommendation(user_id, RecommendationPriority::Critical, "critical"),
                recommendation(user_id, RecommendationPriority::Medium, "medium"),
            ])
            .await
            .unwrap();

        let active = store.active_recommendations(user_id).await.unwrap();
        assert_eq!(active[0].title, "critical");
        assert_eq!(active[2].title, "low");
    }

    #[tokio::test]
    async fn test_unknown_user_reads_are_empty_not_errors() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();
        assert!(store.get_user_profile(user_id).await.unwrap().is_none());
        assert!(store.weight_entries(user_id).await.unwrap().is_empty());
        assert!(store.completed_periods(user_id).await.unwrap().is_empty());
        assert!(store
            .active_plan_adherence(user_id)
            .await
            .unwrap()
            .is_none());
    }
}
