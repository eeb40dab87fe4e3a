// ABOUTME: Intelligence configuration for adherence, projection, and correlation analysis
// ABOUTME: Tunable parameters with environment overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

//! Intelligence Configuration Module
//!
//! Type-safe configuration for the analysis components: weigh-in cadence,
//! adherence streak threshold, goal projection rates, and correlation
//! bucketing. The projection cap and on-track ratio are deliberately
//! tunable parameters, not fixed constants.
//!
//! Configuration sources, in priority order:
//!
//! 1. Environment variables (`NUTRITRACK_*`)
//! 2. Built-in defaults
//!
//! ```bash
//! export NUTRITRACK_STREAK_THRESHOLD=75
//! export NUTRITRACK_WEIGH_IN_DAY=sun
//! ```

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::OnceLock;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A parameter is outside its valid range
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// An environment variable could not be parsed
    #[error("Parse error for {variable}: {value}")]
    Parse {
        /// Variable name
        variable: &'static str,
        /// Offending value
        value: String,
    },
}

/// Weigh-in cadence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeighInConfig {
    /// Designated weekday for weigh-ins
    #[serde(default = "default_weigh_in_day", with = "weekday_serde")]
    pub designated_day: Weekday,
}

const fn default_weigh_in_day() -> Weekday {
    Weekday::Mon
}

impl Default for WeighInConfig {
    fn default() -> Self {
        Self {
            designated_day: default_weigh_in_day(),
        }
    }
}

/// Adherence analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdherenceConfig {
    /// Daily adherence percentage at or above which a day extends a streak
    #[serde(default = "default_streak_threshold")]
    pub streak_threshold: u8,
}

const fn default_streak_threshold() -> u8 {
    70
}

impl Default for AdherenceConfig {
    fn default() -> Self {
        Self {
            streak_threshold: default_streak_threshold(),
        }
    }
}

/// Goal projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Ceiling on the optimistic weekly rate, as percent of current
    /// bodyweight per week
    #[serde(default = "default_optimistic_cap_pct")]
    pub optimistic_cap_pct: f64,
    /// Minimum conservative weekly rate in kg/week when progress is not
    /// monotonic toward the goal
    #[serde(default = "default_conservative_floor_kg")]
    pub conservative_floor_kg: f64,
    /// Fraction of the reference rate the realistic rate must reach for the
    /// user to count as on track (when no explicit target date is set)
    #[serde(default = "default_on_track_rate_ratio")]
    pub on_track_rate_ratio: f64,
    /// Reference horizon in weeks for deriving the implied goal rate
    #[serde(default = "default_reference_horizon_weeks")]
    pub reference_horizon_weeks: f64,
}

const fn default_optimistic_cap_pct() -> f64 {
    1.0
}

const fn default_conservative_floor_kg() -> f64 {
    0.25
}

const fn default_on_track_rate_ratio() -> f64 {
    0.5
}

const fn default_reference_horizon_weeks() -> f64 {
    12.0
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            optimistic_cap_pct: default_optimistic_cap_pct(),
            conservative_floor_kg: default_conservative_floor_kg(),
            on_track_rate_ratio: default_on_track_rate_ratio(),
            reference_horizon_weeks: default_reference_horizon_weeks(),
        }
    }
}

/// Correlation analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationConfig {
    /// Adherence percentage at or above which a period counts as high
    #[serde(default = "default_high_threshold")]
    pub high_threshold: u8,
    /// Adherence percentage at or above which a period counts as medium
    #[serde(default = "default_medium_threshold")]
    pub medium_threshold: u8,
    /// Minimum completed periods before the scatter-style detail is exposed
    #[serde(default = "default_scatter_min_periods")]
    pub scatter_min_periods: usize,
}

const fn default_high_threshold() -> u8 {
    85
}

const fn default_medium_threshold() -> u8 {
    70
}

const fn default_scatter_min_periods() -> usize {
    3
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            high_threshold: default_high_threshold(),
            medium_threshold: default_medium_threshold(),
            scatter_min_periods: default_scatter_min_periods(),
        }
    }
}

/// Top-level intelligence configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Weigh-in cadence parameters
    #[serde(default)]
    pub weigh_in: WeighInConfig,
    /// Adherence analysis parameters
    #[serde(default)]
    pub adherence: AdherenceConfig,
    /// Goal projection parameters
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Correlation bucketing parameters
    #[serde(default)]
    pub correlation: CorrelationConfig,
}

static GLOBAL_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

impl IntelligenceConfig {
    /// Global configuration instance, initialized from the environment on
    /// first access (falling back to defaults on any parse failure).
    pub fn global() -> &'static Self {
        GLOBAL_CONFIG.get_or_init(|| {
            Self::from_environment().unwrap_or_else(|e| {
                tracing::warn!("Invalid intelligence configuration, using defaults: {e}");
                Self::default()
            })
        })
    }

    /// Build a configuration from environment variables on top of defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is present but unparseable
    /// or when validation fails.
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(value) = env::var("NUTRITRACK_WEIGH_IN_DAY") {
            config.weigh_in.designated_day =
                parse_weekday(&value).ok_or(ConfigError::Parse {
                    variable: "NUTRITRACK_WEIGH_IN_DAY",
                    value,
                })?;
        }
        if let Ok(value) = env::var("NUTRITRACK_STREAK_THRESHOLD") {
            config.adherence.streak_threshold =
                value.parse().map_err(|_| ConfigError::Parse {
                    variable: "NUTRITRACK_STREAK_THRESHOLD",
                    value,
                })?;
        }
        if let Ok(value) = env::var("NUTRITRACK_OPTIMISTIC_CAP_PCT") {
            config.projection.optimistic_cap_pct =
                value.parse().map_err(|_| ConfigError::Parse {
                    variable: "NUTRITRACK_OPTIMISTIC_CAP_PCT",
                    value,
                })?;
        }
        if let Ok(value) = env::var("NUTRITRACK_ON_TRACK_RATE_RATIO") {
            config.projection.on_track_rate_ratio =
                value.parse().map_err(|_| ConfigError::Parse {
                    variable: "NUTRITRACK_ON_TRACK_RATE_RATIO",
                    value,
                })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRange`] for out-of-range parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.adherence.streak_threshold > 100 {
            return Err(ConfigError::InvalidRange(
                "streak_threshold must be at most 100",
            ));
        }
        if self.correlation.medium_threshold >= self.correlation.high_threshold {
            return Err(ConfigError::InvalidRange(
                "medium_threshold must be below high_threshold",
            ));
        }
        if self.projection.optimistic_cap_pct <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "optimistic_cap_pct must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.projection.on_track_rate_ratio) {
            return Err(ConfigError::InvalidRange(
                "on_track_rate_ratio must be within [0, 1]",
            ));
        }
        if self.projection.reference_horizon_weeks <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "reference_horizon_weeks must be positive",
            ));
        }
        Ok(())
    }
}

fn parse_weekday(value: &str) -> Option<Weekday> {
    match value.to_ascii_lowercase().as_str() {
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "sat" | "saturday" => Some(Weekday::Sat),
        "sun" | "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

mod weekday_serde {
    use chrono::Weekday;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&day.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let value = String::deserialize(deserializer)?;
        super::parse_weekday(&value)
            .ok_or_else(|| de::Error::custom(format!("unknown weekday: {value}")))
    }
}
