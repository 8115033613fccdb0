// ABOUTME: Working state for one day being composed: hierarchy, gesture, selection, editor
// ABOUTME: Discarded wholesale on save, on day delete, and when another day is loaded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Trainday

//! # Builder Session
//!
//! Everything scoped to the day currently on screen: the composition
//! hierarchy, the drag controller, the selected weekday and training type,
//! the muscle selection and catalog filters, and the annotation editor when
//! one is open. None of it outlives the session; saving, deleting, or
//! loading a different day resets it.

use tracing::debug;

use crate::annotations::AnnotationStore;
use crate::catalog::CatalogQuery;
use crate::composition::CompositionStore;
use crate::drag::{DragController, DragSource, DropTarget};
use crate::editor::AnnotationEditor;
use crate::errors::{ComposerError, ComposerResult};
use crate::models::{DaySnapshot, Muscle, TrainingType, Weekday};
use crate::snapshots::composition_items;

/// Secondary catalog filters beside the muscle selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilters {
    /// Equipment filter.
    pub equipment: Option<String>,
    /// Movement-pattern filter.
    pub movement: Option<String>,
    /// Category filter.
    pub category: Option<String>,
    /// Free-text name search.
    pub search: Option<String>,
}

impl CatalogFilters {
    /// Whether every filter is unset.
    #[must_use]
    pub const fn is_clear(&self) -> bool {
        self.equipment.is_none()
            && self.movement.is_none()
            && self.category.is_none()
            && self.search.is_none()
    }
}

/// In-memory state for the active editing session.
#[derive(Debug, Clone, Default)]
pub struct BuilderSession {
    composition: CompositionStore,
    drag: DragController,
    selected_day: Option<Weekday>,
    training_type: TrainingType,
    selected_muscles: Vec<Muscle>,
    filters: CatalogFilters,
    editor: Option<AnnotationEditor>,
}

impl BuilderSession {
    /// Fresh session with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Day and training type
    // ------------------------------------------------------------------

    /// Pick the weekday the composition will be saved under.
    pub fn select_day(&mut self, day: Weekday) {
        self.selected_day = Some(day);
    }

    /// Currently selected weekday.
    #[must_use]
    pub const fn selected_day(&self) -> Option<Weekday> {
        self.selected_day
    }

    /// Set the day's training type.
    pub fn set_training_type(&mut self, training_type: TrainingType) {
        self.training_type = training_type;
    }

    /// Current training type.
    #[must_use]
    pub const fn training_type(&self) -> &TrainingType {
        &self.training_type
    }

    // ------------------------------------------------------------------
    // Muscle selection and filters
    // ------------------------------------------------------------------

    /// Toggle a muscle in the selection. Returns whether it is now selected.
    pub fn toggle_muscle(&mut self, muscle: Muscle) -> bool {
        if let Some(position) = self
            .selected_muscles
            .iter()
            .position(|selected| selected.name == muscle.name)
        {
            self.selected_muscles.remove(position);
            false
        } else {
            self.selected_muscles.push(muscle);
            true
        }
    }

    /// Replace the muscle selection.
    pub fn set_muscles(&mut self, muscles: Vec<Muscle>) {
        self.selected_muscles = muscles;
    }

    /// Selected muscles in selection order.
    #[must_use]
    pub fn selected_muscles(&self) -> &[Muscle] {
        &self.selected_muscles
    }

    /// Replace the secondary catalog filters.
    pub fn set_filters(&mut self, filters: CatalogFilters) {
        self.filters = filters;
    }

    /// Current secondary filters.
    #[must_use]
    pub const fn filters(&self) -> &CatalogFilters {
        &self.filters
    }

    /// Assemble the catalog query for the current selection.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::NoMusclesSelected`] when no muscle is
    /// selected; querying the whole catalog is never intended.
    pub fn catalog_query(&self) -> ComposerResult<CatalogQuery> {
        if self.selected_muscles.is_empty() {
            return Err(ComposerError::NoMusclesSelected);
        }
        Ok(CatalogQuery {
            muscles: self
                .selected_muscles
                .iter()
                .map(|muscle| muscle.name.clone())
                .collect(),
            equipment: self.filters.equipment.clone(),
            movement: self.filters.movement.clone(),
            training_type: Some(self.training_type.as_str().to_owned()),
            category: self.filters.category.clone(),
            search: self.filters.search.clone(),
        })
    }

    // ------------------------------------------------------------------
    // Composition and drag
    // ------------------------------------------------------------------

    /// The hierarchy being composed.
    #[must_use]
    pub const fn composition(&self) -> &CompositionStore {
        &self.composition
    }

    /// Mutable access for direct structural edits.
    pub const fn composition_mut(&mut self) -> &mut CompositionStore {
        &mut self.composition
    }

    /// Arm a relocation gesture.
    pub fn begin_drag(&mut self, source: DragSource) {
        self.drag.begin(source);
    }

    /// Discard the in-flight gesture.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Whether a gesture is in flight.
    #[must_use]
    pub const fn drag_armed(&self) -> bool {
        self.drag.is_armed()
    }

    /// Resolve the in-flight gesture against a drop target.
    pub fn drop_onto(&mut self, target: DropTarget) -> bool {
        self.drag.drop_onto(&mut self.composition, target)
    }

    // ------------------------------------------------------------------
    // Annotation editor
    // ------------------------------------------------------------------

    /// Open the editor for an exercise in the composition.
    ///
    /// No-op returning `false` when the exercise is not part of the
    /// composition. An already open editor is replaced, discarding its
    /// uncommitted edits.
    pub fn open_editor(&mut self, exercise_id: &str, annotations: &AnnotationStore) -> bool {
        if !self.composition.contains_exercise(exercise_id) {
            debug!(exercise_id = %exercise_id, "editor open for unknown exercise ignored");
            return false;
        }
        self.editor = Some(AnnotationEditor::open(
            exercise_id,
            annotations.get(exercise_id),
        ));
        true
    }

    /// The open editor, if any.
    #[must_use]
    pub const fn editor(&self) -> Option<&AnnotationEditor> {
        self.editor.as_ref()
    }

    /// Mutable access to the open editor.
    pub const fn editor_mut(&mut self) -> Option<&mut AnnotationEditor> {
        self.editor.as_mut()
    }

    /// Commit the open editor into the store and close it.
    ///
    /// Returns the committed exercise id, or `None` when no editor is open.
    pub fn commit_editor(&mut self, annotations: &mut AnnotationStore) -> Option<String> {
        self.editor.take().map(|editor| editor.commit(annotations))
    }

    /// Close the editor, discarding uncommitted edits.
    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Replace the session with a saved day's state.
    ///
    /// Unsaved work in the current session is discarded. Secondary filters
    /// reset; they are not part of the snapshot.
    pub fn load_snapshot(&mut self, snapshot: &DaySnapshot) {
        self.composition = CompositionStore::from_items(composition_items(snapshot));
        self.selected_muscles = snapshot.selected_muscles.clone();
        self.training_type = snapshot.training_type.clone();
        self.selected_day = Some(snapshot.day);
        self.filters = CatalogFilters::default();
        self.drag.cancel();
        self.editor = None;
        debug!(day = snapshot.day.as_str(), items = self.composition.len(), "session restored");
    }

    /// Discard all session state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
