// ABOUTME: Core data models for the composition engine
// ABOUTME: Exercises, annotations, day snapshots and the plan-save payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Trainday

//! # Data Models
//!
//! The engine distinguishes three record families:
//!
//! - **Catalog records** ([`Exercise`], [`Muscle`]) arrive from the external
//!   catalog and are copied, never edited.
//! - **Annotation records** ([`ExerciseAnnotation`], [`SetRow`]) are owned by
//!   the engine, keyed by exercise id, and shared across days.
//! - **Persisted records** ([`DaySnapshot`], [`PlanSavePayload`]) are the wire
//!   shapes handed to external persistence and the plan-save endpoint; they
//!   serialize with camelCase field names.

/// Set rows, drop-sets and the per-exercise annotation record.
pub mod annotation;
/// Catalog exercise record plus muscle/training-type/weekday vocabulary.
pub mod exercise;
/// Plan-save payload assembled from every saved day.
pub mod payload;
/// Persisted day snapshot schema.
pub mod snapshot;

pub use annotation::{DropSet, ExerciseAnnotation, SetRow};
pub use exercise::{Exercise, Muscle, TrainingType, Weekday};
pub use payload::{PlanDay, PlanExercise, PlanMeta, PlanSavePayload};
pub use snapshot::{DaySnapshot, SnapshotExercise, SnapshotItem};
