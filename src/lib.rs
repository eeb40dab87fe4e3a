// ABOUTME: Main library entry point for the NutriTrack insights engine
// ABOUTME: Provides adherence analytics, goal projections, and rule-based recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

#![deny(unsafe_code)]

//! # NutriTrack Insights
//!
//! Analytics and recommendation core for the NutriTrack nutrition platform.
//! Turns raw logged facts (weekly weight entries and daily meal-plan
//! consumption) into derived insight: adherence streaks, goal-completion
//! projections, adherence/weight correlation, and prioritized behavioral
//! recommendations.
//!
//! ## Architecture
//!
//! The crate follows a modular architecture:
//! - **Models**: domain records (weight entries, adherence records, recommendations)
//! - **Intelligence**: pure analyzers for weigh-in gating, adherence
//!   aggregation, streaks, goal projection, correlation, and recommendations
//! - **Database**: the `ProgressStore` seam to the external persistence layer
//! - **Services**: the user-scoped query/write operations callers invoke
//! - **Config**: tunable analysis parameters with environment overrides
//!
//! All computation is synchronous, pure, and scoped to a single user's
//! snapshot; derived entities are recomputable from the underlying history.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use nutritrack_insights::database::memory::MemoryStore;
//! use nutritrack_insights::services::progress::ProgressService;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = ProgressService::new(MemoryStore::new());
//!     let analytics = service
//!         .adherence_analytics(Uuid::new_v4(), Utc::now().date_naive(), 30)
//!         .await?;
//!     println!("tracked days: {}", analytics.summary.total_days);
//!     Ok(())
//! }
//! ```

/// Configuration management for tunable analysis parameters
pub mod config;

/// Persistence seam: `ProgressStore` trait and the in-memory implementation
pub mod database;

/// Unified error handling system
pub mod errors;

/// Analytics engines: gate, aggregation, streaks, projection, correlation,
/// recommendation rules
pub mod intelligence;

/// Structured logging configuration
pub mod logging;

/// Domain data structures
pub mod models;

/// User-scoped progress operations (the external interface of this core)
pub mod services;

pub use errors::{AppError, AppResult, ErrorCode};
