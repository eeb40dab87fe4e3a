// ABOUTME: Weight-goal progress tracking and completion-date projection engine
// ABOUTME: Derives optimistic/realistic/conservative ETAs from weigh-in history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

//! Goal progress and completion-date projections

use crate::config::intelligence_config::ProjectionConfig;
use crate::models::{HealthGoal, UserProfile, WeightEntry};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Two entries are "at goal" within this tolerance (kg)
const GOAL_REACHED_TOLERANCE_KG: f64 = 0.05;

/// Rates slower than this count as no measurable movement (kg/week); they
/// produce no projection rather than an ETA years or centuries out
const MIN_PROJECTION_RATE_KG: f64 = 0.01;

/// The user's weight goal, resolved from profile and history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Weight at the first recorded weigh-in
    pub start_weight: f64,
    /// Weight at the most recent weigh-in
    pub current_weight: f64,
    /// Target weight from the profile
    pub target_weight: f64,
    /// Goal direction
    pub health_goal: HealthGoal,
}

/// Derived progress figures toward the goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Percent of the start-to-target distance covered, clamped at 0 below
    /// but allowed to exceed 100 when the user overshoots
    pub progress_percentage: f64,
    /// Magnitude of the change so far (kg, one decimal)
    pub total_change: f64,
    /// Magnitude still to go (kg, one decimal)
    pub remaining_change: f64,
    /// Mean week-over-week change across the history (signed kg/week)
    pub avg_weekly_change: f64,
}

/// One completion-date projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projection {
    /// Assumed weekly rate (signed kg/week)
    pub weekly_rate: f64,
    /// Weeks until the target at that rate (one decimal)
    pub weeks_to_goal: f64,
    /// Projected completion date
    pub estimated_date: NaiveDate,
    /// What the rate assumes, for the UI
    pub description: String,
}

/// The three projections, exposed together or not at all. A UI must never
/// show an optimistic date without its conservative counterpart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projections {
    /// Best recent week, capped at a plausible ceiling
    pub optimistic: Projection,
    /// Mean pace across the whole history
    pub realistic: Projection,
    /// Slower half of the observed pace
    pub conservative: Projection,
}

/// Qualitative read on the trajectory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalInsights {
    /// Whether the realistic trajectory satisfies the user's deadline (or,
    /// absent one, a configured fraction of the implied reference rate)
    pub is_on_track: bool,
    /// Status line for the UI
    pub message: String,
}

/// Full goal-progress payload for one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalReport {
    /// Whether a target weight is configured
    pub has_goal: bool,
    /// Whether enough history exists to project (at least two weigh-ins)
    pub has_data: bool,
    /// Explanation shown when the goal or the data is missing
    pub message: Option<String>,
    /// Resolved goal figures
    pub goal: Option<Goal>,
    /// Progress figures
    pub progress: Option<GoalProgress>,
    /// The three projections, all-or-none
    pub projections: Option<Projections>,
    /// Trajectory insights
    pub insights: Option<GoalInsights>,
}

impl GoalReport {
    fn without_goal() -> Self {
        Self {
            has_goal: false,
            has_data: false,
            message: Some(
                "Set a target weight in your profile to track your goal progress.".into(),
            ),
            goal: None,
            progress: None,
            projections: None,
            insights: None,
        }
    }
}

/// Projects goal completion from the weigh-in history.
#[derive(Debug, Clone)]
pub struct GoalProjector {
    config: ProjectionConfig,
}

impl Default for GoalProjector {
    fn default() -> Self {
        Self::new(ProjectionConfig::default())
    }
}

impl GoalProjector {
    /// Create a projector with the given tunables
    #[must_use]
    pub const fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Build the goal report from the profile and the date-ordered weigh-in
    /// history. Pure: the same snapshot always yields the same report.
    #[must_use]
    pub fn report(
        &self,
        profile: &UserProfile,
        entries: &[WeightEntry],
        today: NaiveDate,
    ) -> GoalReport {
        let Some(target_weight) = profile.target_weight else {
            return GoalReport::without_goal();
        };

        let (Some(first), Some(last)) = (entries.first(), entries.last()) else {
            return Self::without_data(profile, target_weight);
        };
        if entries.len() < 2 {
            return Self::without_data(profile, target_weight);
        }

        let goal = Goal {
            start_weight: super::round_kg(first.weight_kg),
            current_weight: super::round_kg(last.weight_kg),
            target_weight: super::round_kg(target_weight),
            health_goal: profile.health_goal,
        };

        let deltas: Vec<f64> = entries
            .windows(2)
            .map(|pair| pair[1].weight_kg - pair[0].weight_kg)
            .collect();
        let avg_weekly_change = deltas.iter().sum::<f64>() / deltas.len() as f64;

        // Signed distance still to cover; its sign defines "toward the goal".
        let needed = target_weight - last.weight_kg;
        let progress = Self::progress_figures(&goal, avg_weekly_change);

        if needed.abs() < GOAL_REACHED_TOLERANCE_KG {
            return GoalReport {
                has_goal: true,
                has_data: true,
                message: None,
                insights: Some(GoalInsights {
                    is_on_track: true,
                    message: format!(
                        "You've reached your target of {:.1}kg. Great work!",
                        goal.target_weight
                    ),
                }),
                goal: Some(goal),
                progress: Some(progress),
                projections: None,
            };
        }

        let projections = self.build_projections(&deltas, last.weight_kg, needed, today);
        let insights = self.build_insights(
            profile,
            &goal,
            avg_weekly_change,
            needed,
            projections.as_ref(),
        );

        GoalReport {
            has_goal: true,
            has_data: true,
            message: None,
            goal: Some(goal),
            progress: Some(progress),
            projections,
            insights: Some(insights),
        }
    }

    fn without_data(profile: &UserProfile, target_weight: f64) -> GoalReport {
        let goal = profile.current_weight.map(|current| Goal {
            start_weight: super::round_kg(current),
            current_weight: super::round_kg(current),
            target_weight: super::round_kg(target_weight),
            health_goal: profile.health_goal,
        });
        GoalReport {
            has_goal: true,
            has_data: false,
            message: Some("Log at least two weekly weigh-ins to unlock projections.".into()),
            goal,
            progress: None,
            projections: None,
            insights: None,
        }
    }

    fn progress_figures(goal: &Goal, avg_weekly_change: f64) -> GoalProgress {
        let span = goal.start_weight - goal.target_weight;
        let covered = goal.start_weight - goal.current_weight;
        let progress_percentage = if span.abs() < f64::EPSILON {
            100.0
        } else {
            (covered / span * 100.0).round().max(0.0)
        };

        GoalProgress {
            progress_percentage,
            total_change: super::round_kg(covered.abs()),
            remaining_change: super::round_kg((goal.current_weight - goal.target_weight).abs()),
            avg_weekly_change: round_rate(avg_weekly_change),
        }
    }

    /// Derive the three candidate rates. All three projections are returned
    /// together or none are; a rate that points away from the target voids
    /// the whole set rather than exposing a partial one.
    fn build_projections(
        &self,
        deltas: &[f64],
        current_weight: f64,
        needed: f64,
        today: NaiveDate,
    ) -> Option<Projections> {
        let toward =
            |rate: f64| rate.abs() >= MIN_PROJECTION_RATE_KG && rate.signum() == needed.signum();

        let mean = deltas.iter().sum::<f64>() / deltas.len() as f64;
        if !toward(mean) {
            return None;
        }

        // Optimistic: best correctly-signed week among the last 4 data
        // points, capped so the ETA never assumes more than the plausible
        // ceiling of bodyweight change per week. Never slower than the
        // realistic rate, which keeps the projected dates ordered.
        let recent = &deltas[deltas.len().saturating_sub(3)..];
        let best_recent = recent
            .iter()
            .copied()
            .filter(|&d| toward(d))
            .max_by(|a, b| a.abs().total_cmp(&b.abs()))?;
        let cap = current_weight * self.config.optimistic_cap_pct / 100.0;
        let optimistic_rate = best_recent.abs().min(cap).max(mean.abs()).copysign(needed);

        // Conservative: mean of the slower half of the correctly-signed
        // weeks, or the configured floor when progress was not monotonic.
        // Never faster than the realistic rate, for the same ordering.
        let mut toward_goal: Vec<f64> = deltas.iter().copied().filter(|&d| toward(d)).collect();
        let conservative_mag = if toward_goal.len() == deltas.len() {
            toward_goal.sort_by(|a, b| a.abs().total_cmp(&b.abs()));
            let half = &toward_goal[..toward_goal.len().div_ceil(2)];
            (half.iter().sum::<f64>() / half.len() as f64).abs()
        } else {
            self.config.conservative_floor_kg
        };
        let conservative_rate = conservative_mag.min(mean.abs()).copysign(needed);

        Some(Projections {
            optimistic: Self::projection(
                optimistic_rate,
                needed,
                today,
                "If you match your best recent week",
            ),
            realistic: Self::projection(mean, needed, today, "At your average pace so far"),
            conservative: Self::projection(
                conservative_rate,
                needed,
                today,
                "Even at your slowest steady pace",
            ),
        })
    }

    fn projection(rate: f64, needed: f64, today: NaiveDate, description: &str) -> Projection {
        let weeks = needed.abs() / rate.abs();
        Projection {
            weekly_rate: round_rate(rate),
            weeks_to_goal: (weeks * 10.0).round() / 10.0,
            estimated_date: today
                .checked_add_signed(Duration::days((weeks * 7.0).round() as i64))
                .unwrap_or(NaiveDate::MAX),
            description: description.into(),
        }
    }

    fn build_insights(
        &self,
        profile: &UserProfile,
        goal: &Goal,
        avg_weekly_change: f64,
        needed: f64,
        projections: Option<&Projections>,
    ) -> GoalInsights {
        let is_on_track = match (profile.target_date, projections) {
            (Some(deadline), Some(p)) => p.realistic.estimated_date <= deadline,
            (None, Some(_)) => {
                let implied_rate = (goal.start_weight - goal.target_weight).abs()
                    / self.config.reference_horizon_weeks;
                avg_weekly_change.signum() == needed.signum()
                    && avg_weekly_change.abs() >= implied_rate * self.config.on_track_rate_ratio
            }
            _ => false,
        };

        let message = if is_on_track {
            format!(
                "You're on track to reach {:.1}kg. Keep doing what you're doing!",
                goal.target_weight
            )
        } else {
            format!(
                "Your progress needs attention. Current pace: {:.2}kg/week toward a {:.1}kg target.",
                round_rate(avg_weekly_change),
                goal.target_weight
            )
        };

        GoalInsights {
            is_on_track,
            message,
        }
    }
}

/// Weekly rates keep two decimals so slow-but-real progress (0.05 kg/week)
/// survives display rounding
fn round_rate(rate: f64) -> f64 {
    (rate * 100.0).round() / 100.0
}
