// ABOUTME: Consecutive-day adherence streak calculation
// ABOUTME: Gaps and no-data days break streaks; they never count as tracked days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

//! Adherence streak calculation

use super::adherence_analyzer::DailyAdherence;
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Current and longest consecutive-day streaks at or above the threshold
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Streak {
    /// Length of the trailing run ending on the most recent tracked day
    pub current: u32,
    /// Longest run over the whole series
    pub longest: u32,
    /// Short motivational line for the UI
    pub message: String,
}

/// Computes streaks from a chronological daily adherence series.
///
/// A day breaks the streak when its percentage is below the threshold, when
/// it has no data, or when it is not the calendar day right after the
/// previous tracked day (a gap in the series is a broken streak, not a
/// pause). If the final day is itself below threshold, `current` is 0
/// regardless of any preceding run.
#[derive(Debug, Clone)]
pub struct StreakCalculator {
    threshold: u8,
}

impl StreakCalculator {
    /// Create a calculator for the given adherence threshold
    #[must_use]
    pub const fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    /// Scan the series and report current/longest streaks
    #[must_use]
    pub fn calculate(&self, daily_data: &[DailyAdherence]) -> Streak {
        let mut run: u32 = 0;
        let mut longest: u32 = 0;
        let mut previous_date = None;

        for day in daily_data {
            let consecutive = previous_date
                .is_none_or(|prev| day.date - prev == Duration::days(1));
            if !consecutive {
                run = 0;
            }

            match day.percentage {
                Some(pct) if pct >= self.threshold => {
                    run += 1;
                    longest = longest.max(run);
                }
                _ => run = 0,
            }

            previous_date = Some(day.date);
        }

        Streak {
            current: run,
            longest,
            message: Self::message(run, longest),
        }
    }

    fn message(current: u32, longest: u32) -> String {
        match current {
            0 if longest > 0 => {
                format!("Start a new streak today! Your record is {longest} days.")
            }
            0 => "Hit your adherence target today to start a streak!".into(),
            1 => "1 day strong. Keep the momentum going!".into(),
            n => format!("{n} days strong. Keep it up!"),
        }
    }
}
