// ABOUTME: Service layer tying analyzers to storage
// ABOUTME: One facade per bounded area; currently progress analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Labs

//! Service layer
//!
//! Services orchestrate the pure analyzers in [`crate::intelligence`] over a
//! [`crate::database::ProgressStore`] backend and own all input validation
//! and ownership checks.

pub mod progress;

pub use progress::{CreateRecommendationRequest, ProgressService};
