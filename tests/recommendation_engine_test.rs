// ABOUTME: Integration tests for the recommendation rule table
// ABOUTME: Covers rule triggers, priority escalation, ordering, and determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, NaiveDate};
use nutritrack_insights::intelligence::{RecommendationEngine, RecommendationInput};
use nutritrack_insights::models::{
    ActivityLevel, GeneratedBy, HealthGoal, Mood, RecommendationPriority, RecommendationType,
    UserProfile, WeightEntry,
};
use uuid::Uuid;

fn complete_profile() -> UserProfile {
    UserProfile {
        user_id: Uuid::new_v4(),
        height_cm: Some(175.0),
        current_weight: Some(75.0),
        target_weight: Some(70.0),
        age: Some(30),
        health_goal: HealthGoal::Lose,
        activity_level: ActivityLevel::ModeratelyActive,
        daily_calorie_target: Some(2000),
        target_date: None,
    }
}

fn weekly_entries(weights: &[f64]) -> Vec<WeightEntry> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    weights
        .iter()
        .enumerate()
        .map(|(i, &weight_kg)| WeightEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            date: start + Duration::weeks(i as i64),
            weight_kg,
            energy_level: 3,
            mood: Mood::Good,
            sleep_hours: None,
            water_intake_liters: None,
            activity_minutes: None,
            notes: None,
        })
        .collect()
}

#[test]
fn test_healthy_snapshot_generates_nothing() {
    let profile = complete_profile();
    let entries = weekly_entries(&[80.0, 78.0, 76.0, 75.0]);
    let input = RecommendationInput {
        profile: &profile,
        entries: &entries,
        active_plan_adherence: Some(90),
    };
    let generated = RecommendationEngine::new().generate(&input);
    assert!(generated.is_empty());
}

#[test]
fn test_steady_loser_is_not_flagged_as_stalled() {
    // The latest entry is the one that set the current weight; progress is
    // judged against the entry before it.
    let profile = complete_profile();
    let entries = weekly_entries(&[80.0, 78.0, 76.0, 75.0]);
    let input = RecommendationInput {
        profile: &profile,
        entries: &entries,
        active_plan_adherence: None,
    };
    let generated = RecommendationEngine::new().generate(&input);
    assert!(generated
        .iter()
        .all(|r| r.recommendation_type != RecommendationType::Progress));
}

#[test]
fn test_plateau_fires_critical_stall() {
    let profile = complete_profile();
    let entries = weekly_entries(&[76.0, 75.0, 75.0, 75.0]);
    let input = RecommendationInput {
        profile: &profile,
        entries: &entries,
        active_plan_adherence: None,
    };
    let generated = RecommendationEngine::new().generate(&input);
    assert_eq!(generated.len(), 1);
    assert_eq!(generated[0].title, "Weight Loss Stalled");
    assert_eq!(generated[0].priority, RecommendationPriority::Critical);
    assert_eq!(generated[0].action_steps.len(), 3);
}

#[test]
fn test_slow_loss_interpolates_the_amount() {
    let profile = complete_profile();
    let entries = weekly_entries(&[76.0, 75.3, 75.0]);
    let input = RecommendationInput {
        profile: &profile,
        entries: &entries,
        active_plan_adherence: None,
    };
    let generated = RecommendationEngine::new().generate(&input);
    assert_eq!(generated[0].title, "Weight Loss Progress");
    assert!(generated[0].reasoning.contains("0.3kg"));
    assert!((generated[0].confidence - 0.75).abs() < f64::EPSILON);
}

#[test]
fn test_very_low_calorie_target_fires_exactly_one_critical() {
    let mut profile = complete_profile();
    profile.daily_calorie_target = Some(1100);
    let input = RecommendationInput {
        profile: &profile,
        entries: &[],
        active_plan_adherence: None,
    };
    let generated = RecommendationEngine::new().generate(&input);
    let critical: Vec<_> = generated
        .iter()
        .filter(|r| r.priority == RecommendationPriority::Critical)
        .collect();
    assert_eq!(critical.len(), 1);
    assert_eq!(critical[0].title, "Very Low Calorie Target");
    assert!(critical[0].description.contains("1100 calories"));
    assert_eq!(critical[0].generated_by, GeneratedBy::RuleBased);
}

#[test]
fn test_boundary_values_do_not_fire() {
    let mut profile = complete_profile();
    profile.daily_calorie_target = Some(1200);
    let input = RecommendationInput {
        profile: &profile,
        entries: &[],
        active_plan_adherence: Some(70),
    };
    // 1200 calories and 70% adherence sit exactly on the thresholds.
    let generated = RecommendationEngine::new().generate(&input);
    assert!(generated.is_empty());
}

#[test]
fn test_sedentary_maintainer_is_left_alone() {
    let mut profile = complete_profile();
    profile.activity_level = ActivityLevel::Sedentary;
    profile.health_goal = HealthGoal::Maintain;
    let input = RecommendationInput {
        profile: &profile,
        entries: &[],
        active_plan_adherence: None,
    };
    let generated = RecommendationEngine::new().generate(&input);
    assert!(generated
        .iter()
        .all(|r| r.recommendation_type != RecommendationType::Exercise));
}

#[test]
fn test_sedentary_loser_gets_activity_nudge() {
    let mut profile = complete_profile();
    profile.activity_level = ActivityLevel::Sedentary;
    let input = RecommendationInput {
        profile: &profile,
        entries: &[],
        active_plan_adherence: None,
    };
    let generated = RecommendationEngine::new().generate(&input);
    let exercise = generated
        .iter()
        .find(|r| r.recommendation_type == RecommendationType::Exercise)
        .unwrap();
    assert!(exercise.description.contains("lose"));
    assert_eq!(exercise.priority, RecommendationPriority::Medium);
}

#[test]
fn test_incomplete_profile_fires_low_priority_nudge() {
    let mut profile = complete_profile();
    profile.age = None;
    let input = RecommendationInput {
        profile: &profile,
        entries: &[],
        active_plan_adherence: None,
    };
    let generated = RecommendationEngine::new().generate(&input);
    assert_eq!(generated.len(), 1);
    assert_eq!(generated[0].title, "Complete Your Profile");
    assert_eq!(generated[0].priority, RecommendationPriority::Low);
    assert!((generated[0].confidence - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_rules_fire_in_fixed_order() {
    let mut profile = complete_profile();
    profile.daily_calorie_target = Some(1000);
    profile.activity_level = ActivityLevel::Sedentary;
    profile.height_cm = None;
    let entries = weekly_entries(&[76.0, 75.0, 75.0]);
    let input = RecommendationInput {
        profile: &profile,
        entries: &entries,
        active_plan_adherence: Some(45),
    };
    let generated = RecommendationEngine::new().generate(&input);

    let types: Vec<RecommendationType> =
        generated.iter().map(|r| r.recommendation_type).collect();
    assert_eq!(
        types,
        vec![
            RecommendationType::Progress,
            RecommendationType::Meal,
            RecommendationType::Nutrition,
            RecommendationType::Exercise,
            RecommendationType::General,
        ]
    );
}

#[test]
fn test_same_snapshot_same_output() {
    let mut profile = complete_profile();
    profile.daily_calorie_target = Some(1000);
    let entries = weekly_entries(&[76.0, 75.0, 75.0]);
    let input = RecommendationInput {
        profile: &profile,
        entries: &entries,
        active_plan_adherence: Some(60),
    };
    let engine = RecommendationEngine::new();
    assert_eq!(engine.generate(&input), engine.generate(&input));
}
