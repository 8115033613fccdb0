// ABOUTME: Per-exercise annotation records, keyed by catalog id and shared across days
// ABOUTME: Written only by the annotation editor's commit and the day-delete cascade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Trainday

//! # Annotation Store
//!
//! One record per exercise id, independent of which days reference the
//! exercise. Records outlive the editing session: they are created or
//! replaced when the annotation editor commits, and removed only by the
//! day-delete cascade or an explicit reset.

use std::collections::HashMap;

use tracing::debug;

use crate::models::ExerciseAnnotation;

/// Registry of annotation records keyed by exercise id.
#[derive(Debug, Clone, Default)]
pub struct AnnotationStore {
    records: HashMap<String, ExerciseAnnotation>,
}

impl AnnotationStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the store from persisted records.
    #[must_use]
    pub fn from_records(records: HashMap<String, ExerciseAnnotation>) -> Self {
        Self { records }
    }

    /// Insert or replace the record for an exercise.
    pub fn upsert(&mut self, exercise_id: impl Into<String>, annotation: ExerciseAnnotation) {
        let exercise_id = exercise_id.into();
        debug!(exercise_id = %exercise_id, rows = annotation.rows.len(), "annotation stored");
        self.records.insert(exercise_id, annotation);
    }

    /// Record for an exercise, if one exists.
    #[must_use]
    pub fn get(&self, exercise_id: &str) -> Option<&ExerciseAnnotation> {
        self.records.get(exercise_id)
    }

    /// Whether the exercise has a stored record.
    #[must_use]
    pub fn contains(&self, exercise_id: &str) -> bool {
        self.records.contains_key(exercise_id)
    }

    /// Remove the record for an exercise. Idempotent.
    pub fn remove(&mut self, exercise_id: &str) -> bool {
        let removed = self.records.remove(exercise_id).is_some();
        if removed {
            debug!(exercise_id = %exercise_id, "annotation removed");
        }
        removed
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ids with a stored record, in no particular order.
    #[must_use]
    pub fn exercise_ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// All records, for persistence.
    #[must_use]
    pub const fn records(&self) -> &HashMap<String, ExerciseAnnotation> {
        &self.records
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
