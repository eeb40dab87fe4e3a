// ABOUTME: Integration tests for the weekly weigh-in gate
// ABOUTME: Covers designated-day logic, countdowns, and one-entry-per-cycle blocking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, NaiveDate, Weekday};
use nutritrack_insights::config::intelligence_config::WeighInConfig;
use nutritrack_insights::intelligence::WeighInGate;
use nutritrack_insights::models::{Mood, WeightEntry};
use uuid::Uuid;

fn entry(date: NaiveDate, weight_kg: f64) -> WeightEntry {
    WeightEntry {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        date,
        weight_kg,
        energy_level: 3,
        mood: Mood::Good,
        sleep_hours: Some(7.5),
        water_intake_liters: None,
        activity_minutes: None,
        notes: None,
    }
}

fn gate(day: Weekday) -> WeighInGate {
    WeighInGate::new(&WeighInConfig {
        designated_day: day,
    })
}

// 2024-03-04 is a Monday.
const MONDAY: (i32, u32, u32) = (2024, 3, 4);

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(MONDAY.0, MONDAY.1, MONDAY.2).unwrap()
}

#[test]
fn test_countdown_over_a_full_week() {
    let gate = gate(Weekday::Mon);
    let expected = [0, 6, 5, 4, 3, 2, 1];
    for (offset, days_until) in expected.into_iter().enumerate() {
        let today = monday() + Duration::days(offset as i64);
        let status = gate.status(today, None);
        assert_eq!(status.days_until_next, days_until, "offset {offset}");
        assert_eq!(status.can_weigh_in, days_until == 0);
    }
}

#[test]
fn test_configured_day_moves_the_window() {
    let gate = gate(Weekday::Sun);
    // Sunday 2024-03-10
    let sunday = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    assert!(gate.status(sunday, None).can_weigh_in);
    assert!(!gate.status(monday(), None).can_weigh_in);
    assert_eq!(gate.status(monday(), None).days_until_next, 6);
}

#[test]
fn test_second_entry_same_day_is_blocked() {
    let gate = gate(Weekday::Mon);
    let logged = entry(monday(), 80.0);
    let status = gate.status(monday(), Some(&logged));
    assert!(!status.can_weigh_in);
    assert_eq!(status.days_until_next, 7);
    assert_eq!(status.last_weight, Some(80.0));
}

#[test]
fn test_missed_week_does_not_block_the_next() {
    let gate = gate(Weekday::Mon);
    // Last entry two weeks ago; user skipped one Monday entirely.
    let stale = entry(monday() - Duration::weeks(2), 81.4);
    let status = gate.status(monday(), Some(&stale));
    assert!(status.can_weigh_in);
    assert_eq!(status.last_weight, Some(81.4));
}

#[test]
fn test_blocked_status_names_the_designated_day() {
    let gate = gate(Weekday::Fri);
    let status = gate.status(monday(), None);
    assert!(!status.can_weigh_in);
    assert!(status.message.contains("Friday"));
}
