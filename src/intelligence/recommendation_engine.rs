// ABOUTME: Rule-based recommendation generation from a user's progress snapshot
// ABOUTME: Fixed-order table of pure rules; same snapshot always yields same output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

//! Rule-based recommendation generation

use super::nutrition_constants::{adherence, calories, confidence, progress};
use crate::models::{
    ActionStep, ActivityLevel, GeneratedBy, HealthGoal, NewRecommendation, RecommendationPriority,
    RecommendationType, UserProfile, WeightEntry,
};

/// Everything a rule may look at, captured up front.
///
/// Rules are pure functions of this snapshot; they never touch storage, the
/// clock, or each other's output.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationInput<'a> {
    /// The user's profile
    pub profile: &'a UserProfile,
    /// Weigh-in history, ordered by date ascending
    pub entries: &'a [WeightEntry],
    /// Adherence percentage of the active meal plan, if one exists
    pub active_plan_adherence: Option<u8>,
}

impl RecommendationInput<'_> {
    /// Weight change since the last weigh-in, positive when weight was lost.
    ///
    /// The baseline is the most recent entry, except when that entry is the
    /// one that set the profile's current weight (same value, with at least
    /// one earlier entry to fall back to); comparing the current weight
    /// against its own source entry would always read as stalled.
    fn progress_diff(&self) -> Option<f64> {
        let current = self.profile.current_weight?;
        let latest = self.entries.last()?;
        let baseline = if (latest.weight_kg - current).abs() < f64::EPSILON
            && self.entries.len() >= 2
        {
            self.entries[self.entries.len() - 2].weight_kg
        } else {
            latest.weight_kg
        };
        Some(baseline - current)
    }
}

type Rule = fn(&RecommendationInput<'_>) -> Option<NewRecommendation>;

/// Rules fire in this order, so generated batches are deterministically
/// ordered regardless of how the snapshot was assembled.
const RULES: [Rule; 5] = [
    weight_progress,
    meal_plan_adherence,
    calorie_floor,
    activity_level,
    profile_completeness,
];

/// Evaluates the fixed rule table against one user snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Create the engine
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Run every rule in order and collect the ones that fire
    #[must_use]
    pub fn generate(&self, input: &RecommendationInput<'_>) -> Vec<NewRecommendation> {
        RULES.iter().filter_map(|rule| rule(input)).collect()
    }
}

fn steps(texts: [&str; 3]) -> Vec<ActionStep> {
    texts.into_iter().map(ActionStep::new).collect()
}

fn weight_progress(input: &RecommendationInput<'_>) -> Option<NewRecommendation> {
    let profile = input.profile;
    let current = profile.current_weight?;
    let target = profile.target_weight?;
    let diff = input.progress_diff()?;

    match profile.health_goal {
        HealthGoal::Lose if current > target => {
            if diff > 0.0 && diff < progress::SLOW_PROGRESS_WINDOW_KG {
                Some(NewRecommendation {
                    recommendation_type: RecommendationType::Progress,
                    priority: RecommendationPriority::High,
                    title: "Weight Loss Progress".into(),
                    description: "You're making progress! Consider increasing your activity level or adjusting your calorie intake slightly.".into(),
                    reasoning: format!(
                        "You've lost {:.1}kg, but progress is slow. Small adjustments can help accelerate results.",
                        diff.abs()
                    ),
                    action_steps: steps([
                        "Increase daily activity by 15-20 minutes",
                        "Review your meal plan adherence",
                        "Consider consulting with a nutritionist",
                    ]),
                    generated_by: GeneratedBy::Ai,
                    confidence: confidence::PROGRESS_SLOW,
                })
            } else if diff <= 0.0 {
                Some(NewRecommendation {
                    recommendation_type: RecommendationType::Progress,
                    priority: RecommendationPriority::Critical,
                    title: "Weight Loss Stalled".into(),
                    description: "Your weight loss has stalled. It's time to reassess your approach.".into(),
                    reasoning: "No weight loss detected. This could be due to plateaus, inaccurate tracking, or need for plan adjustment.".into(),
                    action_steps: steps([
                        "Verify you're tracking all meals accurately",
                        "Consider recalculating your calorie needs",
                        "Review and adjust your meal plan",
                    ]),
                    generated_by: GeneratedBy::Ai,
                    confidence: confidence::PROGRESS_STALLED,
                })
            } else {
                None
            }
        }
        HealthGoal::Gain
            if current < target && diff < 0.0 && diff.abs() < progress::SLOW_PROGRESS_WINDOW_KG =>
        {
            Some(NewRecommendation {
                recommendation_type: RecommendationType::Progress,
                priority: RecommendationPriority::High,
                title: "Weight Gain Progress".into(),
                description: "You're gaining weight gradually. Ensure you're consuming enough calories and protein.".into(),
                reasoning: format!(
                    "You've gained {:.1}kg. Continue monitoring to ensure steady progress.",
                    diff.abs()
                ),
                action_steps: steps([
                    "Ensure you're meeting daily calorie targets",
                    "Focus on protein-rich meals",
                    "Track your progress weekly",
                ]),
                generated_by: GeneratedBy::Ai,
                confidence: confidence::PROGRESS_SLOW,
            })
        }
        _ => None,
    }
}

fn meal_plan_adherence(input: &RecommendationInput<'_>) -> Option<NewRecommendation> {
    let adherence_pct = input.active_plan_adherence?;
    if adherence_pct >= adherence::LOW_ADHERENCE_THRESHOLD {
        return None;
    }

    let priority = if adherence_pct < adherence::VERY_LOW_ADHERENCE_THRESHOLD {
        RecommendationPriority::High
    } else {
        RecommendationPriority::Medium
    };

    Some(NewRecommendation {
        recommendation_type: RecommendationType::Meal,
        priority,
        title: "Low Meal Plan Adherence".into(),
        description: format!(
            "Your meal plan adherence is {adherence_pct}%. Improving adherence will help you reach your goals faster."
        ),
        reasoning: "Low adherence suggests difficulty following the plan. Consider adjusting meal preferences or simplifying the plan.".into(),
        action_steps: steps([
            "Review meals you're skipping and why",
            "Update your dietary preferences if needed",
            "Set daily reminders for meals",
        ]),
        generated_by: GeneratedBy::Ai,
        confidence: confidence::ADHERENCE,
    })
}

fn calorie_floor(input: &RecommendationInput<'_>) -> Option<NewRecommendation> {
    let calorie_target = input.profile.daily_calorie_target?;
    if calorie_target >= calories::MIN_SAFE_DAILY_CALORIES {
        return None;
    }

    Some(NewRecommendation {
        recommendation_type: RecommendationType::Nutrition,
        priority: RecommendationPriority::Critical,
        title: "Very Low Calorie Target".into(),
        description: format!(
            "Your daily calorie target ({calorie_target} calories) is very low. This may not be sustainable."
        ),
        reasoning: "Extremely low calorie targets can lead to nutrient deficiencies and metabolic slowdown.".into(),
        action_steps: steps([
            "Consult with a healthcare professional",
            "Consider a more moderate calorie deficit",
            "Focus on nutrient-dense foods",
        ]),
        generated_by: GeneratedBy::RuleBased,
        confidence: confidence::CALORIE_FLOOR,
    })
}

fn activity_level(input: &RecommendationInput<'_>) -> Option<NewRecommendation> {
    let profile = input.profile;
    if profile.activity_level != ActivityLevel::Sedentary
        || profile.health_goal == HealthGoal::Maintain
    {
        return None;
    }

    let goal_word = match profile.health_goal {
        HealthGoal::Lose => "lose",
        HealthGoal::Gain => "gain",
        HealthGoal::Maintain => "maintain",
    };

    Some(NewRecommendation {
        recommendation_type: RecommendationType::Exercise,
        priority: RecommendationPriority::Medium,
        title: "Increase Physical Activity".into(),
        description: format!(
            "Increasing your activity level can help you reach your {goal_word} weight goal faster."
        ),
        reasoning: "Sedentary lifestyle combined with weight goals benefits from increased activity.".into(),
        action_steps: steps([
            "Start with 15-20 minutes of daily walking",
            "Gradually increase activity level in profile",
            "Find activities you enjoy",
        ]),
        generated_by: GeneratedBy::Ai,
        confidence: confidence::ACTIVITY,
    })
}

fn profile_completeness(input: &RecommendationInput<'_>) -> Option<NewRecommendation> {
    if input.profile.is_complete() {
        return None;
    }

    Some(NewRecommendation {
        recommendation_type: RecommendationType::General,
        priority: RecommendationPriority::Low,
        title: "Complete Your Profile".into(),
        description: "Complete your profile information for more accurate meal plan recommendations.".into(),
        reasoning: "Missing profile data prevents accurate calorie and nutrition calculations.".into(),
        action_steps: steps([
            "Add your height, weight, and age",
            "Update your health goals",
            "Set your dietary preferences",
        ]),
        generated_by: GeneratedBy::RuleBased,
        confidence: confidence::PROFILE_COMPLETENESS,
    })
}
