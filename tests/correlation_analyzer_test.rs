// ABOUTME: Integration tests for adherence/outcome correlation bucketing
// ABOUTME: Covers bucket edges, signed vs magnitude aggregation, and scatter gating
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use nutritrack_insights::config::intelligence_config::CorrelationConfig;
use nutritrack_insights::intelligence::CorrelationAnalyzer;
use nutritrack_insights::models::PlanPeriod;
use uuid::Uuid;

fn period(name: &str, adherence: u8, change_kg: f64) -> PlanPeriod {
    PlanPeriod {
        user_id: Uuid::new_v4(),
        plan_name: name.into(),
        completed_at: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        adherence_percentage: adherence,
        weight_change_kg: change_kg,
    }
}

#[test]
fn test_zero_periods_is_no_data() {
    let report = CorrelationAnalyzer::default().analyze(&[]);
    assert!(!report.has_data);
    assert_eq!(report.summary.total_plans, 0);
    assert_eq!(report.summary.avg_adherence, 0);
    assert!(report.weekly_data.is_none());
    assert_eq!(report.insights.high_adherence.count, 0);
}

#[test]
fn test_every_period_lands_in_exactly_one_bucket() {
    let periods: Vec<PlanPeriod> = (0..=100)
        .step_by(5)
        .map(|a| period("p", a as u8, -0.5))
        .collect();
    let report = CorrelationAnalyzer::default().analyze(&periods);

    let insights = &report.insights;
    let bucketed = insights.high_adherence.count
        + insights.medium_adherence.count
        + insights.low_adherence.count;
    assert_eq!(bucketed, periods.len() as u32);
    assert_eq!(report.summary.total_plans, periods.len() as u32);
}

#[test]
fn test_default_thresholds_split_at_85_and_70() {
    let report = CorrelationAnalyzer::default().analyze(&[
        period("a", 85, -1.0),
        period("b", 84, -1.0),
        period("c", 70, -1.0),
        period("d", 69, -1.0),
    ]);
    assert_eq!(report.insights.high_adherence.count, 1);
    assert_eq!(report.insights.medium_adherence.count, 2);
    assert_eq!(report.insights.low_adherence.count, 1);
}

#[test]
fn test_mixed_direction_changes_in_one_bucket() {
    // A loss and a gain of equal size: magnitude average stays 1.5,
    // the signed net cancels to -1.0.
    let report = CorrelationAnalyzer::default().analyze(&[
        period("cut", 90, -2.0),
        period("bulk", 92, 1.0),
        period("filler", 40, 0.0),
    ]);
    let high = &report.insights.high_adherence;
    assert_eq!(high.count, 2);
    assert!((high.avg_weight_change - 1.5).abs() < f64::EPSILON);
    assert!((high.net_change - (-1.0)).abs() < f64::EPSILON);
}

#[test]
fn test_scatter_detail_appears_at_three_periods() {
    let analyzer = CorrelationAnalyzer::default();
    let base = vec![period("a", 90, -1.0), period("b", 75, -0.6)];
    assert!(analyzer.analyze(&base).weekly_data.is_none());

    let mut three = base;
    three.push(period("c", 55, -0.1));
    let report = analyzer.analyze(&three);
    let points = report.weekly_data.unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].plan_name, "a");
    assert_eq!(points[0].adherence, 90);
}

#[test]
fn test_summary_calls_out_high_adherence_payoff() {
    let report = CorrelationAnalyzer::default().analyze(&[
        period("strict", 95, -2.4),
        period("loose", 50, -0.2),
    ]);
    assert_eq!(report.summary.avg_adherence, 73);
    assert!(report.summary.message.contains("85%+"));
}

#[test]
fn test_custom_thresholds_move_the_buckets() {
    let analyzer = CorrelationAnalyzer::new(CorrelationConfig {
        high_threshold: 90,
        medium_threshold: 60,
        scatter_min_periods: 3,
    });
    let report = analyzer.analyze(&[period("a", 85, -1.0), period("b", 59, -0.3)]);
    assert_eq!(report.insights.high_adherence.count, 0);
    assert_eq!(report.insights.medium_adherence.count, 1);
    assert_eq!(report.insights.low_adherence.count, 1);
}
