// ABOUTME: Ordered two-level hierarchy of exercises and supersets for one training day
// ABOUTME: Arena of records keyed by id; containment is ordered id lists, never references
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Trainday

//! # Composition Store
//!
//! Holds the day currently being built: an ordered top level of plain
//! exercises and supersets, where each superset owns an ordered list of
//! member exercises. The central invariant is exclusivity: an exercise id
//! appears in exactly one container (the top level or exactly one superset),
//! never twice.
//!
//! All mutators are synchronous and total. Invalid combinations (duplicate
//! drops, stale ids, self-moves) degrade to no-ops because the UI gesture
//! that triggered them may be stale by the time it lands. Every mutator
//! reports whether it changed state.
//!
//! Internally the store is an arena: flat maps of exercise and superset
//! records plus ordered id lists. [`TrainingItem`] is the materialized view
//! handed to callers and serialization.

use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use crate::models::Exercise;

/// Identity of one top-level entry: a plain exercise or a superset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemKey {
    /// A plain exercise, identified by its catalog id.
    Exercise(String),
    /// A superset, identified by its generated id.
    Superset(Uuid),
}

/// Container an exercise currently lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerId {
    /// The top-level item list.
    TopLevel,
    /// A specific superset.
    Superset(Uuid),
}

/// A superset materialized for display: its id and member exercises in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Superset {
    /// Generated superset identity.
    pub id: Uuid,
    /// Member exercises in performance order.
    pub exercises: Vec<Exercise>,
}

/// One materialized entry of the composition.
#[derive(Debug, Clone, PartialEq)]
pub enum TrainingItem {
    /// A plain exercise at the top level.
    Exercise(Exercise),
    /// A superset with its members.
    Superset(Superset),
}

/// The ordered hierarchy of items for the day being composed.
#[derive(Debug, Clone, Default)]
pub struct CompositionStore {
    // Arena: every exercise record in the composition, keyed by catalog id.
    exercises: HashMap<String, Exercise>,
    // Member id lists per superset. Ids here never appear in `order` as
    // ItemKey::Exercise at the same time.
    supersets: HashMap<Uuid, Vec<String>>,
    // Top-level display order.
    order: Vec<ItemKey>,
}

impl CompositionStore {
    /// Create an empty composition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a composition from materialized items, e.g. a loaded snapshot.
    ///
    /// Duplicate exercise and superset ids are skipped (first occurrence
    /// wins) so the exclusivity invariant holds even for records produced by
    /// older versions of the app.
    #[must_use]
    pub fn from_items(items: Vec<TrainingItem>) -> Self {
        let mut store = Self::new();
        for item in items {
            match item {
                TrainingItem::Exercise(exercise) => {
                    store.insert_from_catalog(exercise);
                }
                TrainingItem::Superset(superset) => {
                    if store.supersets.contains_key(&superset.id) {
                        debug!(superset_id = %superset.id, "duplicate superset id ignored");
                        continue;
                    }
                    let superset_id = store.add_superset_with_id(superset.id);
                    for exercise in superset.exercises {
                        store.insert_into_superset(exercise, superset_id);
                    }
                }
            }
        }
        store
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    /// Append a catalog exercise at the end of the top level.
    ///
    /// No-op when the id is already present anywhere in the hierarchy, so a
    /// repeated drop of the same catalog row cannot create duplicates.
    pub fn insert_from_catalog(&mut self, exercise: Exercise) -> bool {
        if self.exercises.contains_key(&exercise.id) {
            debug!(exercise_id = %exercise.id, "duplicate catalog insert ignored");
            return false;
        }
        self.order.push(ItemKey::Exercise(exercise.id.clone()));
        self.exercises.insert(exercise.id.clone(), exercise);
        true
    }

    /// Append a catalog exercise to a superset's member list.
    ///
    /// No-op when the id is already present anywhere or the superset does
    /// not exist.
    pub fn insert_into_superset(&mut self, exercise: Exercise, superset_id: Uuid) -> bool {
        if self.exercises.contains_key(&exercise.id) {
            debug!(exercise_id = %exercise.id, "duplicate superset insert ignored");
            return false;
        }
        let Some(members) = self.supersets.get_mut(&superset_id) else {
            debug!(%superset_id, "insert into unknown superset ignored");
            return false;
        };
        members.push(exercise.id.clone());
        self.exercises.insert(exercise.id.clone(), exercise);
        true
    }

    /// Create an empty superset at the end of the top level.
    pub fn add_superset(&mut self) -> Uuid {
        self.add_superset_with_id(Uuid::new_v4())
    }

    /// Delete a superset together with all member exercises.
    ///
    /// Members are removed from the composition entirely, not returned to
    /// the top level.
    pub fn remove_superset(&mut self, superset_id: Uuid) -> bool {
        let Some(members) = self.supersets.remove(&superset_id) else {
            return false;
        };
        for member in &members {
            self.exercises.remove(member);
        }
        self.order
            .retain(|key| !matches!(key, ItemKey::Superset(id) if *id == superset_id));
        debug!(%superset_id, removed_members = members.len(), "superset removed");
        true
    }

    /// Remove a top-level item. Removing a superset removes its members too.
    ///
    /// Idempotent: unknown items and nested exercises are no-ops.
    pub fn remove_top_level(&mut self, item: &ItemKey) -> bool {
        let Some(position) = self.order.iter().position(|key| key == item) else {
            return false;
        };
        match self.order.remove(position) {
            ItemKey::Exercise(id) => {
                self.exercises.remove(&id);
            }
            ItemKey::Superset(id) => {
                if let Some(members) = self.supersets.remove(&id) {
                    for member in &members {
                        self.exercises.remove(member);
                    }
                }
            }
        }
        true
    }

    /// Remove one exercise from a superset's member list.
    ///
    /// Idempotent: unknown supersets or non-members are no-ops.
    pub fn remove_from_superset(&mut self, superset_id: Uuid, exercise_id: &str) -> bool {
        let Some(members) = self.supersets.get_mut(&superset_id) else {
            return false;
        };
        let Some(position) = members.iter().position(|id| id == exercise_id) else {
            return false;
        };
        members.remove(position);
        self.exercises.remove(exercise_id);
        true
    }

    /// Move a top-level item to `target_index` (clamped to the list length).
    ///
    /// No-op when the item is not at the top level or the move would not
    /// change its position.
    pub fn reorder_top_level(&mut self, item: &ItemKey, target_index: usize) -> bool {
        let Some(current) = self.order.iter().position(|key| key == item) else {
            return false;
        };
        let target = target_index.min(self.order.len().saturating_sub(1));
        if current == target {
            return false;
        }
        let key = self.order.remove(current);
        self.order.insert(target, key);
        true
    }

    /// Move a member exercise to `target_index` within its superset.
    pub fn reorder_within_superset(
        &mut self,
        superset_id: Uuid,
        exercise_id: &str,
        target_index: usize,
    ) -> bool {
        let Some(members) = self.supersets.get_mut(&superset_id) else {
            return false;
        };
        let Some(current) = members.iter().position(|id| id == exercise_id) else {
            return false;
        };
        let target = target_index.min(members.len().saturating_sub(1));
        if current == target {
            return false;
        }
        let id = members.remove(current);
        members.insert(target, id);
        true
    }

    /// Relocate an exercise already in the composition into a superset.
    ///
    /// Detaches it from the top level or from its current superset, then
    /// appends it to the target's member list. No-op when the target does
    /// not exist, the exercise is unknown, or it is already a member.
    pub fn move_into_superset(&mut self, exercise_id: &str, superset_id: Uuid) -> bool {
        if !self.supersets.contains_key(&superset_id) {
            debug!(%superset_id, "move into unknown superset ignored");
            return false;
        }
        match self.container_of(exercise_id) {
            None => false,
            Some(ContainerId::Superset(current)) if current == superset_id => false,
            Some(location) => {
                self.detach(exercise_id, location);
                if let Some(members) = self.supersets.get_mut(&superset_id) {
                    members.push(exercise_id.to_owned());
                }
                true
            }
        }
    }

    /// Relocate a superset member back to the end of the top level.
    ///
    /// No-op when the exercise is unknown or already top-level.
    pub fn move_to_top_level(&mut self, exercise_id: &str) -> bool {
        match self.container_of(exercise_id) {
            Some(ContainerId::Superset(superset_id)) => {
                self.detach(exercise_id, ContainerId::Superset(superset_id));
                self.order.push(ItemKey::Exercise(exercise_id.to_owned()));
                true
            }
            Some(ContainerId::TopLevel) | None => false,
        }
    }

    /// Discard every item.
    pub fn clear(&mut self) {
        self.exercises.clear();
        self.supersets.clear();
        self.order.clear();
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Whether the exercise id appears anywhere in the hierarchy.
    #[must_use]
    pub fn contains_exercise(&self, exercise_id: &str) -> bool {
        self.exercises.contains_key(exercise_id)
    }

    /// The container an exercise currently lives in, if it is present.
    #[must_use]
    pub fn container_of(&self, exercise_id: &str) -> Option<ContainerId> {
        if !self.exercises.contains_key(exercise_id) {
            return None;
        }
        for (superset_id, members) in &self.supersets {
            if members.iter().any(|id| id == exercise_id) {
                return Some(ContainerId::Superset(*superset_id));
            }
        }
        Some(ContainerId::TopLevel)
    }

    /// Exercise record by id.
    #[must_use]
    pub fn exercise(&self, exercise_id: &str) -> Option<&Exercise> {
        self.exercises.get(exercise_id)
    }

    /// Member exercises of a superset, in order.
    #[must_use]
    pub fn superset_members(&self, superset_id: Uuid) -> Option<Vec<&Exercise>> {
        let members = self.supersets.get(&superset_id)?;
        Some(
            members
                .iter()
                .filter_map(|id| self.exercises.get(id))
                .collect(),
        )
    }

    /// Top-level item keys in display order.
    #[must_use]
    pub fn top_level(&self) -> &[ItemKey] {
        &self.order
    }

    /// Number of top-level items (supersets count as one item each).
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the composition holds no items at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of exercises across the whole hierarchy.
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    /// Every exercise id in document order, superset members inlined.
    #[must_use]
    pub fn exercise_ids(&self) -> Vec<&str> {
        let mut ids = Vec::with_capacity(self.exercises.len());
        for key in &self.order {
            match key {
                ItemKey::Exercise(id) => ids.push(id.as_str()),
                ItemKey::Superset(superset_id) => {
                    if let Some(members) = self.supersets.get(superset_id) {
                        ids.extend(members.iter().map(String::as_str));
                    }
                }
            }
        }
        ids
    }

    /// Materialize the composition for display or snapshotting.
    #[must_use]
    pub fn items(&self) -> Vec<TrainingItem> {
        self.order
            .iter()
            .filter_map(|key| match key {
                ItemKey::Exercise(id) => self
                    .exercises
                    .get(id)
                    .cloned()
                    .map(TrainingItem::Exercise),
                ItemKey::Superset(superset_id) => {
                    self.supersets.get(superset_id).map(|members| {
                        TrainingItem::Superset(Superset {
                            id: *superset_id,
                            exercises: members
                                .iter()
                                .filter_map(|id| self.exercises.get(id).cloned())
                                .collect(),
                        })
                    })
                }
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn add_superset_with_id(&mut self, superset_id: Uuid) -> Uuid {
        self.supersets.insert(superset_id, Vec::new());
        self.order.push(ItemKey::Superset(superset_id));
        superset_id
    }

    // Unlink the id from its container, keeping the arena record.
    fn detach(&mut self, exercise_id: &str, location: ContainerId) {
        match location {
            ContainerId::TopLevel => {
                self.order
                    .retain(|key| !matches!(key, ItemKey::Exercise(id) if id == exercise_id));
            }
            ContainerId::Superset(superset_id) => {
                if let Some(members) = self.supersets.get_mut(&superset_id) {
                    members.retain(|id| id != exercise_id);
                }
            }
        }
    }
}
