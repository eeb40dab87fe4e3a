// ABOUTME: Correlates completed meal-plan adherence with weight-change outcomes
// ABOUTME: Buckets periods into high/medium/low adherence and compares results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

//! Adherence/outcome correlation over completed plan periods

use crate::config::intelligence_config::CorrelationConfig;
use crate::models::PlanPeriod;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate outcome for one adherence bucket
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorrelationBucket {
    /// Completed periods in this bucket
    pub count: u32,
    /// Mean weight-change magnitude per period (kg, one decimal)
    pub avg_weight_change: f64,
    /// Signed sum of weight changes across the bucket (kg, one decimal)
    pub net_change: f64,
}

/// The three adherence buckets compared against each other
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorrelationInsights {
    /// Periods at or above the high-adherence threshold
    pub high_adherence: CorrelationBucket,
    /// Periods between the medium and high thresholds
    pub medium_adherence: CorrelationBucket,
    /// Periods below the medium threshold
    pub low_adherence: CorrelationBucket,
}

/// One completed period as a scatter-plot point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodPoint {
    /// Plan name for the tooltip
    pub plan_name: String,
    /// Date the plan period ended
    pub completed_at: NaiveDate,
    /// Adherence over the period, whole percent
    pub adherence: u8,
    /// Signed weight change over the period (kg, one decimal)
    pub weight_change: f64,
}

/// Headline figures across all completed periods
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorrelationSummary {
    /// One-line takeaway naming the strongest pattern
    pub message: String,
    /// Completed plan periods analyzed
    pub total_plans: u32,
    /// Mean adherence across all periods, whole percent
    pub avg_adherence: u8,
}

/// Full correlation payload for one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationReport {
    /// Whether any completed periods exist
    pub has_data: bool,
    /// Per-bucket outcome comparison
    pub insights: CorrelationInsights,
    /// Headline figures
    pub summary: CorrelationSummary,
    /// Scatter points, present only once enough periods exist to plot
    pub weekly_data: Option<Vec<PeriodPoint>>,
}

/// Compares weight outcomes across adherence levels.
///
/// Each completed plan period carries one adherence percentage and one signed
/// weight change; the analyzer buckets periods by adherence and reports how
/// outcomes differ between buckets. It never claims causation, only the
/// observed association in this user's own history.
#[derive(Debug, Clone)]
pub struct CorrelationAnalyzer {
    config: CorrelationConfig,
}

impl Default for CorrelationAnalyzer {
    fn default() -> Self {
        Self::new(CorrelationConfig::default())
    }
}

impl CorrelationAnalyzer {
    /// Create an analyzer with the configured bucket thresholds
    #[must_use]
    pub const fn new(config: CorrelationConfig) -> Self {
        Self { config }
    }

    /// Analyze all completed plan periods for one user
    #[must_use]
    pub fn analyze(&self, periods: &[PlanPeriod]) -> CorrelationReport {
        if periods.is_empty() {
            return CorrelationReport {
                has_data: false,
                insights: CorrelationInsights::default(),
                summary: CorrelationSummary {
                    message: "Complete a meal plan to see how adherence affects your results."
                        .into(),
                    total_plans: 0,
                    avg_adherence: 0,
                },
                weekly_data: None,
            };
        }

        let insights = self.bucket(periods);
        let total_plans = periods.len() as u32;
        let avg_adherence = (periods
            .iter()
            .map(|p| f64::from(p.adherence_percentage))
            .sum::<f64>()
            / f64::from(total_plans))
        .round() as u8;

        let weekly_data = (periods.len() >= self.config.scatter_min_periods).then(|| {
            periods
                .iter()
                .map(|p| PeriodPoint {
                    plan_name: p.plan_name.clone(),
                    completed_at: p.completed_at,
                    adherence: p.adherence_percentage,
                    weight_change: super::round_kg(p.weight_change_kg),
                })
                .collect()
        });

        CorrelationReport {
            has_data: true,
            summary: CorrelationSummary {
                message: self.summary_message(&insights),
                total_plans,
                avg_adherence,
            },
            insights,
            weekly_data,
        }
    }

    fn bucket(&self, periods: &[PlanPeriod]) -> CorrelationInsights {
        let mut sums = [(0u32, 0.0f64, 0.0f64); 3];
        for period in periods {
            let index = if period.adherence_percentage >= self.config.high_threshold {
                0
            } else if period.adherence_percentage >= self.config.medium_threshold {
                1
            } else {
                2
            };
            sums[index].0 += 1;
            sums[index].1 += period.weight_change_kg.abs();
            sums[index].2 += period.weight_change_kg;
        }

        let finish = |(count, abs_sum, net): (u32, f64, f64)| CorrelationBucket {
            count,
            avg_weight_change: if count == 0 {
                0.0
            } else {
                super::round_kg(abs_sum / f64::from(count))
            },
            net_change: super::round_kg(net),
        };

        CorrelationInsights {
            high_adherence: finish(sums[0]),
            medium_adherence: finish(sums[1]),
            low_adherence: finish(sums[2]),
        }
    }

    fn summary_message(&self, insights: &CorrelationInsights) -> String {
        let high = &insights.high_adherence;
        let low = &insights.low_adherence;

        if high.count > 0 && low.count > 0 {
            if high.avg_weight_change >= low.avg_weight_change {
                return format!(
                    "Plans with {}%+ adherence averaged {:.1}kg of change, versus {:.1}kg below {}%. Sticking to the plan is working.",
                    self.config.high_threshold,
                    high.avg_weight_change,
                    low.avg_weight_change,
                    self.config.medium_threshold
                );
            }
            return format!(
                "Your results don't clearly track adherence yet ({:.1}kg at high adherence vs {:.1}kg at low). More completed plans will sharpen the picture.",
                high.avg_weight_change, low.avg_weight_change
            );
        }
        if high.count > 0 {
            return format!(
                "Your high-adherence plans averaged {:.1}kg of change. Keep that consistency up.",
                high.avg_weight_change
            );
        }
        if insights.medium_adherence.count > 0 {
            return "You're landing in the middle adherence range. Pushing consistency higher should improve results.".into();
        }
        "Adherence has been low on completed plans. Small, consistent improvements beat occasional perfect days.".into()
    }
}
