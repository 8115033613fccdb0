// ABOUTME: Day snapshot records keyed by weekday, one per day, newest write wins
// ABOUTME: Builds snapshots from live composition state and rebuilds compositions from them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Trainday

//! # Snapshot Store
//!
//! One [`DaySnapshot`] per weekday. Saving a day that already has a snapshot
//! overwrites it. The store itself does no validation; save limits, empty
//! checks, and the delete cascade are the session's job.
//!
//! Listing order is always Monday through Sunday, independent of insertion
//! order.

use std::collections::HashMap;

use tracing::debug;

use crate::annotations::AnnotationStore;
use crate::composition::{CompositionStore, Superset, TrainingItem};
use crate::models::{
    DaySnapshot, Exercise, ExerciseAnnotation, Muscle, SnapshotExercise, SnapshotItem,
    TrainingType, Weekday,
};

/// Registry of saved day snapshots.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    records: HashMap<Weekday, DaySnapshot>,
}

impl SnapshotStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the store from persisted records.
    #[must_use]
    pub fn from_records(records: HashMap<Weekday, DaySnapshot>) -> Self {
        Self { records }
    }

    /// Store a snapshot under its day, returning any replaced snapshot.
    pub fn insert(&mut self, snapshot: DaySnapshot) -> Option<DaySnapshot> {
        debug!(day = snapshot.day.as_str(), items = snapshot.items.len(), "day snapshot stored");
        self.records.insert(snapshot.day, snapshot)
    }

    /// Snapshot for a day, if one was saved.
    #[must_use]
    pub fn get(&self, day: Weekday) -> Option<&DaySnapshot> {
        self.records.get(&day)
    }

    /// Whether a snapshot exists for the day.
    #[must_use]
    pub fn contains(&self, day: Weekday) -> bool {
        self.records.contains_key(&day)
    }

    /// Remove and return the snapshot for a day.
    pub fn remove(&mut self, day: Weekday) -> Option<DaySnapshot> {
        let removed = self.records.remove(&day);
        if removed.is_some() {
            debug!(day = day.as_str(), "day snapshot removed");
        }
        removed
    }

    /// Number of saved days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no day has been saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Saved days in week order.
    #[must_use]
    pub fn days(&self) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|day| self.records.contains_key(day))
            .collect()
    }

    /// Saved snapshots in week order.
    #[must_use]
    pub fn snapshots(&self) -> Vec<&DaySnapshot> {
        Weekday::ALL
            .iter()
            .filter_map(|day| self.records.get(day))
            .collect()
    }

    /// All records, for persistence.
    #[must_use]
    pub const fn records(&self) -> &HashMap<Weekday, DaySnapshot> {
        &self.records
    }

    /// Whether any day other than `excluding` references the exercise.
    #[must_use]
    pub fn references_elsewhere(&self, exercise_id: &str, excluding: Weekday) -> bool {
        self.records
            .values()
            .any(|snapshot| snapshot.day != excluding && snapshot.references(exercise_id))
    }

    /// Drop every snapshot.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

/// Capture the live composition and its annotations as a day snapshot.
///
/// Each exercise embeds its current annotation (empty instructions and no
/// rows when none was ever committed) so the persisted record is
/// self-contained.
#[must_use]
pub fn build_snapshot(
    day: Weekday,
    training_type: TrainingType,
    selected_muscles: Vec<Muscle>,
    composition: &CompositionStore,
    annotations: &AnnotationStore,
) -> DaySnapshot {
    let items = composition
        .items()
        .into_iter()
        .map(|item| match item {
            TrainingItem::Exercise(exercise) => {
                SnapshotItem::Exercise(snapshot_exercise(&exercise, annotations))
            }
            TrainingItem::Superset(superset) => SnapshotItem::Superset {
                id: superset.id,
                exercises: superset
                    .exercises
                    .iter()
                    .map(|exercise| snapshot_exercise(exercise, annotations))
                    .collect(),
            },
        })
        .collect();

    DaySnapshot {
        day,
        training_type,
        selected_muscles,
        items,
    }
}

/// Rebuild composition items from a snapshot's hierarchy.
#[must_use]
pub fn composition_items(snapshot: &DaySnapshot) -> Vec<TrainingItem> {
    snapshot
        .items
        .iter()
        .map(|item| match item {
            SnapshotItem::Exercise(exercise) => TrainingItem::Exercise(live_exercise(exercise)),
            SnapshotItem::Superset { id, exercises } => TrainingItem::Superset(Superset {
                id: *id,
                exercises: exercises.iter().map(live_exercise).collect(),
            }),
        })
        .collect()
}

/// Annotation embedded in a snapshot exercise, as a standalone record.
#[must_use]
pub fn embedded_annotation(exercise: &SnapshotExercise) -> ExerciseAnnotation {
    ExerciseAnnotation {
        instructions: exercise.instructions.clone(),
        rows: exercise.rows.clone(),
    }
}

fn snapshot_exercise(exercise: &Exercise, annotations: &AnnotationStore) -> SnapshotExercise {
    let (instructions, rows) = match annotations.get(&exercise.id) {
        Some(record) => (record.instructions.clone(), record.rows.clone()),
        None => (String::new(), Vec::new()),
    };
    SnapshotExercise {
        id: exercise.id.clone(),
        name: exercise.name.clone(),
        thumbnail: exercise.thumbnail.clone(),
        metadata: exercise.metadata.clone(),
        instructions,
        rows,
    }
}

fn live_exercise(exercise: &SnapshotExercise) -> Exercise {
    Exercise {
        id: exercise.id.clone(),
        name: exercise.name.clone(),
        thumbnail: exercise.thumbnail.clone(),
        metadata: exercise.metadata.clone(),
    }
}
