// ABOUTME: Persisted day snapshot schema: selected muscles plus the item hierarchy
// ABOUTME: Snapshot exercises embed annotation rows so a day can be rebuilt offline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Trainday

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::annotation::SetRow;
use super::exercise::{Muscle, TrainingType, Weekday};

/// An exercise as persisted inside a day snapshot.
///
/// Carries the catalog descriptor (so a load never has to re-query the
/// catalog) together with the annotation data that was current at save
/// time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotExercise {
    /// Catalog exercise id.
    pub id: String,
    /// Display name at save time.
    pub name: String,
    /// Thumbnail reference at save time.
    #[serde(default)]
    pub thumbnail: String,
    /// Catalog metadata blob, passed through untouched.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub metadata: Value,
    /// Annotation instructions at save time.
    #[serde(default)]
    pub instructions: String,
    /// Annotation set rows at save time.
    #[serde(default)]
    pub rows: Vec<SetRow>,
}

/// One entry of a persisted day: a plain exercise or a superset group.
///
/// Serialized with a `kind` tag (`"exercise"` / `"superset"`), the shape
/// the external persistence layer stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SnapshotItem {
    /// A plain exercise at the top level of the day.
    Exercise(SnapshotExercise),
    /// A superset and its member exercises, in performance order.
    Superset {
        /// Superset identity.
        id: Uuid,
        /// Members in performance order.
        exercises: Vec<SnapshotExercise>,
    },
}

impl SnapshotItem {
    /// Number of exercises this item contributes to the day.
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        match self {
            Self::Exercise(_) => 1,
            Self::Superset { exercises, .. } => exercises.len(),
        }
    }
}

/// The persisted record of one finished composition, keyed by weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySnapshot {
    /// Weekday this session belongs to.
    pub day: Weekday,
    /// Training focus of the session.
    pub training_type: TrainingType,
    /// Muscle groups that were selected while composing.
    pub selected_muscles: Vec<Muscle>,
    /// The item hierarchy, in display order.
    pub items: Vec<SnapshotItem>,
}

impl DaySnapshot {
    /// All exercises of the day in document order, supersets inlined.
    #[must_use]
    pub fn exercises(&self) -> Vec<&SnapshotExercise> {
        let mut out = Vec::new();
        for item in &self.items {
            match item {
                SnapshotItem::Exercise(exercise) => out.push(exercise),
                SnapshotItem::Superset { exercises, .. } => out.extend(exercises.iter()),
            }
        }
        out
    }

    /// Ids of every exercise referenced anywhere in the day.
    #[must_use]
    pub fn exercise_ids(&self) -> Vec<&str> {
        self.exercises()
            .into_iter()
            .map(|exercise| exercise.id.as_str())
            .collect()
    }

    /// Whether the given exercise id appears anywhere in the day.
    #[must_use]
    pub fn references(&self, exercise_id: &str) -> bool {
        self.exercises()
            .into_iter()
            .any(|exercise| exercise.id == exercise_id)
    }
}
