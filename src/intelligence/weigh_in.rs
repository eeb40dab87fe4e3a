// ABOUTME: Weigh-in gate enforcing the weekly logging cadence
// ABOUTME: Pure decision from today's date and the user's last entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

//! Weigh-in cadence gate

use crate::config::intelligence_config::WeighInConfig;
use crate::models::WeightEntry;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Gate decision for a weigh-in attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeighInStatus {
    /// Whether the user may log a weight entry right now
    pub can_weigh_in: bool,
    /// Human-readable explanation for the UI banner
    pub message: String,
    /// Days until the next designated weigh-in day (0 when allowed today)
    pub days_until_next: u32,
    /// Weight of the most recent entry, if any
    pub last_weight: Option<f64>,
}

/// Decides whether a user is permitted to log a weight entry this cycle.
///
/// Weigh-ins happen once per calendar week on a designated day. The decision
/// is deterministic from `today` and the date of the user's last entry; the
/// gate never mutates anything.
#[derive(Debug, Clone)]
pub struct WeighInGate {
    designated_day: Weekday,
}

impl Default for WeighInGate {
    fn default() -> Self {
        Self::new(&WeighInConfig::default())
    }
}

impl WeighInGate {
    /// Create a gate for the configured designated weekday
    #[must_use]
    pub const fn new(config: &WeighInConfig) -> Self {
        Self {
            designated_day: config.designated_day,
        }
    }

    /// Evaluate the gate for `today` given the user's most recent entry.
    /// A user who has never logged a weight is gated by weekday only.
    #[must_use]
    pub fn status(&self, today: NaiveDate, last_entry: Option<&WeightEntry>) -> WeighInStatus {
        let last_weight = last_entry.map(|e| e.weight_kg);
        let days_until_next = self.days_until(today);

        if days_until_next > 0 {
            return WeighInStatus {
                can_weigh_in: false,
                message: format!(
                    "Weigh-ins happen every {}. Come back then to log your weight.",
                    weekday_name(self.designated_day)
                ),
                days_until_next,
                last_weight,
            };
        }

        // Designated day, but at most one entry per cycle.
        if last_entry.is_some_and(|e| e.date == today) {
            return WeighInStatus {
                can_weigh_in: false,
                message: "You already logged your weight today. See you next week!".into(),
                days_until_next: 7,
                last_weight,
            };
        }

        WeighInStatus {
            can_weigh_in: true,
            message: "It's weigh-in day! Log your weight to track your progress.".into(),
            days_until_next: 0,
            last_weight,
        }
    }

    /// Days from `today` until the next designated day; 0 when today is it
    fn days_until(&self, today: NaiveDate) -> u32 {
        let today_index = today.weekday().num_days_from_monday();
        let target_index = self.designated_day.num_days_from_monday();
        (target_index + 7 - today_index) % 7
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
