// ABOUTME: Per-exercise log data: set rows with reps/weight/rest and optional drop-sets
// ABOUTME: Annotation records outlive editing sessions and are shared across training days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Trainday

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A drop-set appended to a set row: reduced weight, continued repetitions.
///
/// Values are independent of the parent row's reps and weight.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DropSet {
    /// Repetitions performed at the reduced weight.
    pub reps: u32,
    /// Weight for this drop, in the user's display unit.
    pub weight: f64,
}

/// One planned set of an exercise.
///
/// Rows are created zeroed and edited in place through the annotation
/// editor; the `id` is stable across reorders so drag gestures can
/// reference a row regardless of its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetRow {
    /// Stable row identity, generated when the row is created.
    pub id: Uuid,
    /// Planned repetitions.
    pub reps: u32,
    /// Planned weight, in the user's display unit.
    pub weight: f64,
    /// Rest after the set, in seconds.
    pub rest: u32,
    /// Drop-sets performed directly after the last repetition.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropsets: Vec<DropSet>,
}

impl SetRow {
    /// Create a zeroed row with a fresh id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            reps: 0,
            weight: 0.0,
            rest: 0,
            dropsets: Vec::new(),
        }
    }

    /// Deep-copy this row under a fresh id, drop-sets included.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            reps: self.reps,
            weight: self.weight,
            rest: self.rest,
            dropsets: self.dropsets.clone(),
        }
    }
}

impl Default for SetRow {
    fn default() -> Self {
        Self::new()
    }
}

/// The full log data attached to one exercise.
///
/// Stored keyed by exercise id; the persisted record carries no id field
/// of its own. Shared across every day that references the exercise.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExerciseAnnotation {
    /// Free-form coaching or execution notes.
    #[serde(default)]
    pub instructions: String,
    /// Ordered set rows.
    #[serde(default)]
    pub rows: Vec<SetRow>,
}

impl ExerciseAnnotation {
    /// Create an annotation with the given parts.
    #[must_use]
    pub const fn new(instructions: String, rows: Vec<SetRow>) -> Self {
        Self { instructions, rows }
    }
}
