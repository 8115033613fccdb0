// ABOUTME: Plan-save payload sent to the external endpoint when a plan is finalized
// ABOUTME: Supersets are flattened into plain exercise lists; the server has no group concept
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Trainday

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::annotation::SetRow;
use super::exercise::{TrainingType, Weekday};

/// Plan metadata captured by the surrounding form.
///
/// The engine does not edit these fields; they are combined with the saved
/// day snapshots when the payload is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMeta {
    /// Plan name.
    pub name: String,
    /// Plan description.
    pub description: String,
    /// First day of the plan.
    pub week_start: NaiveDate,
    /// Plan duration in weeks.
    pub duration: u32,
}

/// One exercise entry of the payload.
///
/// The `exercise` field carries the catalog id; `sets` carries the
/// annotation rows that were persisted with the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanExercise {
    /// Catalog exercise id.
    pub exercise: String,
    /// Execution notes for this exercise.
    #[serde(default)]
    pub instructions: String,
    /// Planned set rows.
    #[serde(default)]
    pub sets: Vec<SetRow>,
}

/// One training day of the payload.
///
/// Exercises appear in document order with superset members inlined;
/// grouping information is not transmitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDay {
    /// Weekday of the session.
    pub day: Weekday,
    /// Training focus of the session.
    pub training_type: TrainingType,
    /// Flattened exercise list.
    pub exercises: Vec<PlanExercise>,
}

/// The complete multi-day plan sent to the external save endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSavePayload {
    /// Plan name.
    pub name: String,
    /// Plan description.
    pub description: String,
    /// First day of the plan.
    pub week_start: NaiveDate,
    /// Plan duration in weeks.
    pub duration: u32,
    /// Configured sessions per week.
    pub trainings_per_week: u32,
    /// Number of training days actually saved.
    pub amount_of_trainings: u32,
    /// Saved days in weekday order, Monday first.
    pub training_days: Vec<PlanDay>,
}
