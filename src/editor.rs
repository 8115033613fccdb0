// ABOUTME: Modal editor for one exercise's annotation: set rows, dropsets, instructions
// ABOUTME: Works on a private copy; nothing reaches the annotation store until commit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Trainday

//! # Annotation Editor
//!
//! Opened for exactly one exercise at a time. The editor seeds its working
//! copy from the stored annotation (or with a single zeroed row for an
//! exercise that has never been annotated), applies row and field edits to
//! that copy, and writes the result back to the [`AnnotationStore`] only on
//! [`commit`](AnnotationEditor::commit). Dropping the editor without
//! committing discards the edits.
//!
//! Numeric fields never go below zero: adjustments clamp instead of failing.

use tracing::debug;
use uuid::Uuid;

use crate::annotations::AnnotationStore;
use crate::constants::defaults::INITIAL_SET_ROWS;
use crate::models::{DropSet, ExerciseAnnotation, SetRow};

/// Numeric field of a set row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    /// Repetition count.
    Reps,
    /// Working weight.
    Weight,
    /// Rest after the set, in seconds.
    Rest,
}

/// Numeric field of a dropset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropsetField {
    /// Repetition count.
    Reps,
    /// Dropset weight.
    Weight,
}

/// How a numeric field changes: nudged by a delta or set outright.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldChange {
    /// Add to the current value (negative deltas allowed).
    Delta(f64),
    /// Replace the current value.
    Set(f64),
}

impl FieldChange {
    fn apply(self, current: f64) -> f64 {
        let next = match self {
            Self::Delta(delta) => current + delta,
            Self::Set(value) => value,
        };
        next.max(0.0)
    }

    fn apply_count(self, current: u32) -> u32 {
        let next = self.apply(f64::from(current));
        next.round() as u32
    }
}

/// Working state for editing one exercise's annotation.
#[derive(Debug, Clone)]
pub struct AnnotationEditor {
    exercise_id: String,
    instructions: String,
    rows: Vec<SetRow>,
}

impl AnnotationEditor {
    /// Open the editor for an exercise, seeding from its stored annotation.
    ///
    /// An exercise without a stored record starts with zeroed rows so the
    /// at-least-one-row invariant holds from the first render.
    #[must_use]
    pub fn open(exercise_id: impl Into<String>, existing: Option<&ExerciseAnnotation>) -> Self {
        let (instructions, rows) = match existing {
            Some(annotation) if !annotation.rows.is_empty() => {
                (annotation.instructions.clone(), annotation.rows.clone())
            }
            Some(annotation) => (
                annotation.instructions.clone(),
                (0..INITIAL_SET_ROWS).map(|_| SetRow::new()).collect(),
            ),
            None => (
                String::new(),
                (0..INITIAL_SET_ROWS).map(|_| SetRow::new()).collect(),
            ),
        };
        Self {
            exercise_id: exercise_id.into(),
            instructions,
            rows,
        }
    }

    /// Exercise this editor is bound to.
    #[must_use]
    pub fn exercise_id(&self) -> &str {
        &self.exercise_id
    }

    /// Current instruction text.
    #[must_use]
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Replace the instruction text.
    pub fn set_instructions(&mut self, instructions: impl Into<String>) {
        self.instructions = instructions.into();
    }

    /// Rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[SetRow] {
        &self.rows
    }

    // ------------------------------------------------------------------
    // Row operations
    // ------------------------------------------------------------------

    /// Append a zeroed row and return its id.
    pub fn add_row(&mut self) -> Uuid {
        let row = SetRow::new();
        let id = row.id;
        self.rows.push(row);
        id
    }

    /// Insert a deep copy right after the source row.
    ///
    /// Returns the new row's id, or `None` when the source is unknown.
    pub fn duplicate_row(&mut self, row_id: Uuid) -> Option<Uuid> {
        let position = self.rows.iter().position(|row| row.id == row_id)?;
        let copy = self.rows.get(position)?.duplicate();
        let id = copy.id;
        self.rows.insert(position + 1, copy);
        Some(id)
    }

    /// Delete a row. The last remaining row cannot be deleted.
    pub fn delete_row(&mut self, row_id: Uuid) -> bool {
        if self.rows.len() <= 1 {
            debug!(exercise_id = %self.exercise_id, "last set row kept");
            return false;
        }
        let Some(position) = self.rows.iter().position(|row| row.id == row_id) else {
            return false;
        };
        self.rows.remove(position);
        true
    }

    /// Splice the dragged row out and re-insert it at the target's position.
    ///
    /// No-op when either id is unknown or they are equal.
    pub fn reorder_rows(&mut self, dragged_id: Uuid, target_id: Uuid) -> bool {
        if dragged_id == target_id {
            return false;
        }
        let Some(dragged) = self.rows.iter().position(|row| row.id == dragged_id) else {
            return false;
        };
        if !self.rows.iter().any(|row| row.id == target_id) {
            return false;
        }
        let row = self.rows.remove(dragged);
        let insert_at = self
            .rows
            .iter()
            .position(|row| row.id == target_id)
            .unwrap_or(self.rows.len());
        self.rows.insert(insert_at, row);
        true
    }

    /// Adjust one numeric field of a row, clamping the result to zero.
    pub fn adjust_field(&mut self, row_id: Uuid, field: RowField, change: FieldChange) -> bool {
        let Some(row) = self.row_mut(row_id) else {
            return false;
        };
        match field {
            RowField::Reps => row.reps = change.apply_count(row.reps),
            RowField::Weight => row.weight = change.apply(row.weight),
            RowField::Rest => row.rest = change.apply_count(row.rest),
        }
        true
    }

    // ------------------------------------------------------------------
    // Dropset operations
    // ------------------------------------------------------------------

    /// Append a zeroed dropset to a row.
    pub fn add_dropset(&mut self, row_id: Uuid) -> bool {
        let Some(row) = self.row_mut(row_id) else {
            return false;
        };
        row.dropsets.push(DropSet::default());
        true
    }

    /// Remove the dropset at `index` from a row. Idempotent.
    pub fn remove_dropset(&mut self, row_id: Uuid, index: usize) -> bool {
        let Some(row) = self.row_mut(row_id) else {
            return false;
        };
        if index >= row.dropsets.len() {
            return false;
        }
        row.dropsets.remove(index);
        true
    }

    /// Adjust one dropset field, clamping the result to zero.
    ///
    /// Dropset values are independent of the parent row's values.
    pub fn adjust_dropset(
        &mut self,
        row_id: Uuid,
        index: usize,
        field: DropsetField,
        change: FieldChange,
    ) -> bool {
        let Some(row) = self.row_mut(row_id) else {
            return false;
        };
        let Some(dropset) = row.dropsets.get_mut(index) else {
            return false;
        };
        match field {
            DropsetField::Reps => dropset.reps = change.apply_count(dropset.reps),
            DropsetField::Weight => dropset.weight = change.apply(dropset.weight),
        }
        true
    }

    // ------------------------------------------------------------------
    // Commit
    // ------------------------------------------------------------------

    /// Snapshot of the working state as an annotation record.
    #[must_use]
    pub fn annotation(&self) -> ExerciseAnnotation {
        ExerciseAnnotation {
            instructions: self.instructions.clone(),
            rows: self.rows.clone(),
        }
    }

    /// Write the working state into the store and close the editor.
    ///
    /// Returns the exercise id so callers can dismiss the matching modal.
    pub fn commit(self, store: &mut AnnotationStore) -> String {
        store.upsert(
            self.exercise_id.clone(),
            ExerciseAnnotation {
                instructions: self.instructions,
                rows: self.rows,
            },
        );
        self.exercise_id
    }

    fn row_mut(&mut self, row_id: Uuid) -> Option<&mut SetRow> {
        self.rows.iter_mut().find(|row| row.id == row_id)
    }
}
