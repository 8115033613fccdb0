// ABOUTME: Facade over session, annotation store, and snapshot store for one plan
// ABOUTME: Owns save/load/delete of days, the annotation cascade, and plan submission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Trainday

//! # Session Composer
//!
//! One [`SessionComposer`] exists per plan being built. It owns the three
//! stores with distinct lifetimes: the [`BuilderSession`] (one day on
//! screen, reset constantly), the [`AnnotationStore`] and the
//! [`SnapshotStore`] (both live until the plan is submitted or abandoned).
//!
//! Day-level operations validate before they mutate. A rejected save leaves
//! the session exactly as it was; a deleted day cascades into the
//! annotation store so no orphaned records accumulate.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::annotations::AnnotationStore;
use crate::catalog::CatalogProvider;
use crate::constants::{defaults, limits};
use crate::errors::{ComposerError, ComposerResult};
use crate::models::{Exercise, PlanDay, PlanExercise, PlanMeta, PlanSavePayload, Weekday};
use crate::session::BuilderSession;
use crate::snapshots::{build_snapshot, embedded_annotation, SnapshotStore};

/// Plan-level configuration captured from the plan form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanSettings {
    sessions_per_week: u32,
}

impl PlanSettings {
    /// Settings with the given weekly session count, clamped to the
    /// supported range.
    #[must_use]
    pub const fn new(sessions_per_week: u32) -> Self {
        let clamped = if sessions_per_week < limits::MIN_SESSIONS_PER_WEEK {
            limits::MIN_SESSIONS_PER_WEEK
        } else if sessions_per_week > limits::MAX_SESSIONS_PER_WEEK {
            limits::MAX_SESSIONS_PER_WEEK
        } else {
            sessions_per_week
        };
        Self {
            sessions_per_week: clamped,
        }
    }

    /// Configured sessions per week.
    #[must_use]
    pub const fn sessions_per_week(self) -> u32 {
        self.sessions_per_week
    }
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_SESSIONS_PER_WEEK)
    }
}

/// Async seam to the external plan-save endpoint.
#[async_trait]
pub trait PlanSaver: Send + Sync {
    /// Persist the finalized plan.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::PlanSave`] when the endpoint rejects the
    /// plan or is unreachable. The composer's state stays untouched so the
    /// submission can be retried.
    async fn save_plan(&self, payload: &PlanSavePayload) -> ComposerResult<()>;
}

/// Top-level engine state for composing one training plan.
#[derive(Debug, Clone, Default)]
pub struct SessionComposer {
    session: BuilderSession,
    annotations: AnnotationStore,
    snapshots: SnapshotStore,
    settings: PlanSettings,
}

impl SessionComposer {
    /// Composer with default settings and empty stores.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Composer with the given plan settings.
    #[must_use]
    pub fn with_settings(settings: PlanSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Composer rehydrated from persisted stores, e.g. after a reload.
    #[must_use]
    pub fn from_parts(
        annotations: AnnotationStore,
        snapshots: SnapshotStore,
        settings: PlanSettings,
    ) -> Self {
        Self {
            session: BuilderSession::new(),
            annotations,
            snapshots,
            settings,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The active editing session.
    #[must_use]
    pub const fn session(&self) -> &BuilderSession {
        &self.session
    }

    /// Mutable access to the active editing session.
    pub const fn session_mut(&mut self) -> &mut BuilderSession {
        &mut self.session
    }

    /// The shared annotation store.
    #[must_use]
    pub const fn annotations(&self) -> &AnnotationStore {
        &self.annotations
    }

    /// The saved day snapshots.
    #[must_use]
    pub const fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }

    /// Current plan settings.
    #[must_use]
    pub const fn settings(&self) -> PlanSettings {
        self.settings
    }

    /// Update the weekly session count, clamped to the supported range.
    pub fn set_sessions_per_week(&mut self, sessions_per_week: u32) {
        self.settings = PlanSettings::new(sessions_per_week);
    }

    // ------------------------------------------------------------------
    // Annotation editing
    // ------------------------------------------------------------------

    /// Open the annotation editor for an exercise in the composition.
    pub fn open_editor(&mut self, exercise_id: &str) -> bool {
        self.session.open_editor(exercise_id, &self.annotations)
    }

    /// Commit the open editor into the annotation store and close it.
    pub fn commit_editor(&mut self) -> Option<String> {
        self.session.commit_editor(&mut self.annotations)
    }

    // ------------------------------------------------------------------
    // Day lifecycle
    // ------------------------------------------------------------------

    /// Persist the current composition under the selected weekday.
    ///
    /// On success the snapshot replaces any earlier one for that day and
    /// the session resets for the next day.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::NoDaySelected`] without a selected day,
    /// [`ComposerError::EmptyDay`] for a composition with no items, and
    /// [`ComposerError::SessionLimitReached`] when the weekly limit is hit
    /// and the day is not already saved. Nothing is mutated on any of them.
    pub fn save_day(&mut self) -> ComposerResult<Weekday> {
        let Some(day) = self.session.selected_day() else {
            warn!("save rejected: no day selected");
            return Err(ComposerError::NoDaySelected);
        };
        if self.session.composition().is_empty() {
            warn!(day = day.as_str(), "save rejected: empty composition");
            return Err(ComposerError::EmptyDay { day });
        }
        let limit = self.settings.sessions_per_week();
        if self.snapshots.len() as u32 >= limit && !self.snapshots.contains(day) {
            warn!(day = day.as_str(), limit, "save rejected: weekly session limit");
            return Err(ComposerError::SessionLimitReached { limit });
        }

        let snapshot = build_snapshot(
            day,
            self.session.training_type().clone(),
            self.session.selected_muscles().to_vec(),
            self.session.composition(),
            &self.annotations,
        );
        let replaced = self.snapshots.insert(snapshot).is_some();
        self.session.reset();
        info!(day = day.as_str(), replaced, "day saved");
        Ok(day)
    }

    /// Load a saved day into the session for editing.
    ///
    /// Unsaved work in the current session is discarded. Annotations
    /// embedded in the snapshot are restored into the store for exercises
    /// it has no record for, so a day loads intact even when only the
    /// snapshots survived persistence.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::DayNotFound`] when the day has no snapshot.
    pub fn load_day(&mut self, day: Weekday) -> ComposerResult<()> {
        let Some(snapshot) = self.snapshots.get(day) else {
            return Err(ComposerError::DayNotFound { day });
        };

        let mut restored = 0_usize;
        for exercise in snapshot.exercises() {
            let embed_empty = exercise.instructions.is_empty() && exercise.rows.is_empty();
            if !embed_empty && !self.annotations.contains(&exercise.id) {
                self.annotations
                    .upsert(exercise.id.clone(), embedded_annotation(exercise));
                restored += 1;
            }
        }
        self.session.load_snapshot(snapshot);
        info!(day = day.as_str(), restored, "day loaded");
        Ok(())
    }

    /// Delete a saved day and cascade into the annotation store.
    ///
    /// `confirmed` models the confirmation dialog; deletion never proceeds
    /// without it. Annotations are removed only for exercises no remaining
    /// day references. The session resets afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::DeleteNotConfirmed`] without confirmation
    /// and [`ComposerError::DayNotFound`] when the day has no snapshot.
    pub fn delete_day(&mut self, day: Weekday, confirmed: bool) -> ComposerResult<()> {
        if !confirmed {
            return Err(ComposerError::DeleteNotConfirmed { day });
        }
        let Some(snapshot) = self.snapshots.remove(day) else {
            return Err(ComposerError::DayNotFound { day });
        };

        let mut cascaded = 0_usize;
        for exercise_id in snapshot.exercise_ids() {
            if !self.snapshots.references_elsewhere(exercise_id, day)
                && self.annotations.remove(exercise_id)
            {
                cascaded += 1;
            }
        }
        self.session.reset();
        info!(day = day.as_str(), cascaded, "day deleted");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------

    /// Query the catalog for the session's muscle selection and filters.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::NoMusclesSelected`] before the provider is
    /// contacted, or [`ComposerError::Catalog`] from the provider. State is
    /// untouched either way.
    pub async fn query_catalog(
        &self,
        provider: &dyn CatalogProvider,
    ) -> ComposerResult<Vec<Exercise>> {
        let query = self.session.catalog_query()?;
        provider.query(&query).await
    }

    // ------------------------------------------------------------------
    // Plan assembly
    // ------------------------------------------------------------------

    /// Assemble the plan-save payload from the saved days.
    ///
    /// Days appear Monday first; superset members are flattened into each
    /// day's exercise list in document order.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::EmptyPlan`] when no day has been saved.
    pub fn plan_payload(&self, meta: &PlanMeta) -> ComposerResult<PlanSavePayload> {
        if self.snapshots.is_empty() {
            return Err(ComposerError::EmptyPlan);
        }

        let training_days: Vec<PlanDay> = self
            .snapshots
            .snapshots()
            .into_iter()
            .map(|snapshot| PlanDay {
                day: snapshot.day,
                training_type: snapshot.training_type.clone(),
                exercises: snapshot
                    .exercises()
                    .into_iter()
                    .map(|exercise| PlanExercise {
                        exercise: exercise.id.clone(),
                        instructions: exercise.instructions.clone(),
                        sets: exercise.rows.clone(),
                    })
                    .collect(),
            })
            .collect();

        Ok(PlanSavePayload {
            name: meta.name.clone(),
            description: meta.description.clone(),
            week_start: meta.week_start,
            duration: meta.duration,
            trainings_per_week: self.settings.sessions_per_week(),
            amount_of_trainings: training_days.len() as u32,
            training_days,
        })
    }

    /// Submit the finalized plan and clear all composer state on success.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::EmptyPlan`] when nothing was saved and
    /// [`ComposerError::PlanSave`] from the endpoint; every store is left
    /// untouched on failure so the submission can be retried.
    pub async fn submit_plan(
        &mut self,
        saver: &dyn PlanSaver,
        meta: &PlanMeta,
    ) -> ComposerResult<()> {
        let payload = self.plan_payload(meta)?;
        saver.save_plan(&payload).await?;

        self.snapshots.clear();
        self.annotations.clear();
        self.session.reset();
        info!(
            plan = %meta.name,
            days = payload.training_days.len(),
            "plan submitted"
        );
        Ok(())
    }
}
