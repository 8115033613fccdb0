// ABOUTME: Single in-flight relocation gesture and its dispatch onto the composition store
// ABOUTME: Idle/Armed state machine; begin supersedes, drop consumes, cancel discards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Trainday

//! # Drag Session Controller
//!
//! At most one relocation gesture is live at a time. `begin` arms the
//! controller with the dragged source; a later `begin` silently supersedes
//! it (single-pointer interaction, only the most recent gesture counts).
//! `drop_onto` consumes the session and dispatches exactly one composition
//! mutation chosen from the source/target combination; `cancel` consumes it
//! without touching the store. The controller returns to [`DragState::Idle`]
//! unconditionally after either.
//!
//! A drop with no armed session is a stale gesture and is ignored.

use std::mem;

use tracing::debug;
use uuid::Uuid;

use crate::composition::{CompositionStore, ItemKey};
use crate::models::Exercise;

/// What is being dragged and where it came from.
///
/// Catalog rows are read-only copies, so that variant carries the full
/// exercise record rather than an id into the composition.
#[derive(Debug, Clone, PartialEq)]
pub enum DragSource {
    /// A row from the exercise catalog panel.
    Catalog(Exercise),
    /// An item already at the top level of the composition.
    TopLevel(ItemKey),
    /// A member exercise inside a superset.
    SupersetMember {
        /// Superset the member currently belongs to.
        superset_id: Uuid,
        /// Catalog id of the dragged member.
        exercise_id: String,
    },
}

impl DragSource {
    /// Short label for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Catalog(_) => "catalog",
            Self::TopLevel(ItemKey::Exercise(_)) => "top_level_exercise",
            Self::TopLevel(ItemKey::Superset(_)) => "top_level_superset",
            Self::SupersetMember { .. } => "superset_member",
        }
    }
}

/// Container a gesture ends on, with an optional position inside it.
///
/// A missing index means the end of the target list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// The top-level item list.
    TopLevel {
        /// Position among top-level items.
        index: Option<usize>,
    },
    /// A superset's member list.
    Superset {
        /// Target superset.
        superset_id: Uuid,
        /// Position among its members.
        index: Option<usize>,
    },
}

/// The armed gesture: constructed by `begin`, consumed by `drop_onto` or
/// `cancel`.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Dragged item and origin container.
    pub source: DragSource,
}

/// Controller state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    /// No gesture in flight.
    #[default]
    Idle,
    /// One gesture armed and awaiting its drop.
    Armed(DragSession),
}

/// Tracks the in-flight gesture and interprets drops against the store.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Create an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a new gesture, superseding any existing one.
    pub fn begin(&mut self, source: DragSource) {
        if let DragState::Armed(previous) = &self.state {
            debug!(
                previous = previous.source.kind(),
                next = source.kind(),
                "drag session superseded"
            );
        }
        self.state = DragState::Armed(DragSession { source });
    }

    /// Discard the armed gesture without mutating the composition.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Whether a gesture is currently armed.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        matches!(self.state, DragState::Armed(_))
    }

    /// The armed session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Armed(session) => Some(session),
            DragState::Idle => None,
        }
    }

    /// Resolve the armed gesture against `target`, mutating `store`.
    ///
    /// Consumes the session and returns to idle regardless of whether the
    /// dispatched operation changed anything. Returns whether it did.
    pub fn drop_onto(&mut self, store: &mut CompositionStore, target: DropTarget) -> bool {
        let DragState::Armed(session) = mem::take(&mut self.state) else {
            debug!("drop without an armed drag session ignored");
            return false;
        };
        Self::dispatch(store, session.source, target)
    }

    fn dispatch(store: &mut CompositionStore, source: DragSource, target: DropTarget) -> bool {
        match (source, target) {
            // Catalog rows are copies: a drop inserts a fresh record.
            (DragSource::Catalog(exercise), DropTarget::TopLevel { .. }) => {
                store.insert_from_catalog(exercise)
            }
            (DragSource::Catalog(exercise), DropTarget::Superset { superset_id, .. }) => {
                store.insert_into_superset(exercise, superset_id)
            }

            (DragSource::TopLevel(item), DropTarget::TopLevel { index }) => {
                // Missing index lands at the end; the store clamps.
                store.reorder_top_level(&item, index.unwrap_or(usize::MAX))
            }
            (
                DragSource::TopLevel(ItemKey::Exercise(exercise_id)),
                DropTarget::Superset { superset_id, .. },
            ) => store.move_into_superset(&exercise_id, superset_id),
            // Supersets never nest.
            (
                DragSource::TopLevel(ItemKey::Superset(dragged)),
                DropTarget::Superset { superset_id, .. },
            ) => {
                debug!(dragged = %dragged, target = %superset_id, "superset onto superset ignored");
                false
            }

            (
                DragSource::SupersetMember {
                    superset_id,
                    exercise_id,
                },
                DropTarget::Superset {
                    superset_id: target_id,
                    index,
                },
            ) if superset_id == target_id => {
                let target_index = index.unwrap_or(usize::MAX);
                store.reorder_within_superset(superset_id, &exercise_id, target_index)
            }
            (
                DragSource::SupersetMember { exercise_id, .. },
                DropTarget::Superset { superset_id, .. },
            ) => store.move_into_superset(&exercise_id, superset_id),
            (DragSource::SupersetMember { exercise_id, .. }, DropTarget::TopLevel { .. }) => {
                store.move_to_top_level(&exercise_id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(id: &str) -> Exercise {
        Exercise::new(id, format!("Exercise {id}"))
    }

    #[test]
    fn test_drop_without_session_is_ignored() {
        let mut controller = DragController::new();
        let mut store = CompositionStore::new();

        assert!(!controller.drop_onto(&mut store, DropTarget::TopLevel { index: None }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_begin_supersedes_previous_session() {
        let mut controller = DragController::new();
        let mut store = CompositionStore::new();

        controller.begin(DragSource::Catalog(exercise("a")));
        controller.begin(DragSource::Catalog(exercise("b")));
        assert!(controller.drop_onto(&mut store, DropTarget::TopLevel { index: None }));

        assert_eq!(store.exercise_ids(), vec!["b"]);
        assert!(!controller.is_armed());
    }

    #[test]
    fn test_cancel_leaves_store_untouched() {
        let mut controller = DragController::new();
        let mut store = CompositionStore::new();

        controller.begin(DragSource::Catalog(exercise("a")));
        controller.cancel();

        assert!(!controller.is_armed());
        assert!(store.is_empty());
        assert!(!controller.drop_onto(&mut store, DropTarget::TopLevel { index: None }));
    }

    #[test]
    fn test_catalog_drop_onto_superset_inserts_member() {
        let mut controller = DragController::new();
        let mut store = CompositionStore::new();
        let superset_id = store.add_superset();

        controller.begin(DragSource::Catalog(exercise("a")));
        assert!(controller.drop_onto(
            &mut store,
            DropTarget::Superset { superset_id, index: None }
        ));
        assert_eq!(store.superset_members(superset_id).map(|members| members.len()), Some(1));
    }

    #[test]
    fn test_superset_dropped_onto_superset_is_rejected() {
        let mut controller = DragController::new();
        let mut store = CompositionStore::new();
        let s1 = store.add_superset();
        let s2 = store.add_superset();

        controller.begin(DragSource::TopLevel(ItemKey::Superset(s1)));
        assert!(!controller.drop_onto(
            &mut store,
            DropTarget::Superset { superset_id: s2, index: None }
        ));
        assert_eq!(store.len(), 2);
        assert!(!controller.is_armed());
    }

    #[test]
    fn test_member_dropped_in_own_superset_reorders() {
        let mut controller = DragController::new();
        let mut store = CompositionStore::new();
        let superset_id = store.add_superset();
        store.insert_into_superset(exercise("a"), superset_id);
        store.insert_into_superset(exercise("b"), superset_id);

        controller.begin(DragSource::SupersetMember {
            superset_id,
            exercise_id: "b".to_owned(),
        });
        assert!(controller.drop_onto(
            &mut store,
            DropTarget::Superset { superset_id, index: Some(0) }
        ));
        assert_eq!(store.exercise_ids(), vec!["b", "a"]);
    }

    #[test]
    fn test_member_dropped_on_top_level_moves_out() {
        let mut controller = DragController::new();
        let mut store = CompositionStore::new();
        let superset_id = store.add_superset();
        store.insert_into_superset(exercise("a"), superset_id);

        controller.begin(DragSource::SupersetMember {
            superset_id,
            exercise_id: "a".to_owned(),
        });
        assert!(controller.drop_onto(&mut store, DropTarget::TopLevel { index: None }));
        assert_eq!(store.superset_members(superset_id).map(|members| members.len()), Some(0));
        assert_eq!(store.exercise_ids(), vec!["a"]);
    }
}
