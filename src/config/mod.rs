// ABOUTME: Configuration management for the insights engine
// ABOUTME: Groups tunable analysis parameters with environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

//! Configuration management

pub mod intelligence_config;

pub use intelligence_config::{
    AdherenceConfig, ConfigError, CorrelationConfig, IntelligenceConfig, ProjectionConfig,
    WeighInConfig,
};
