// ABOUTME: Library entry point for the Trainday session composition engine
// ABOUTME: Composition hierarchy, drag dispatch, annotation editing, day snapshots, plan assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Trainday

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy; nothing here needs it
#![deny(unsafe_code)]

//! # Trainday Composer
//!
//! The composition engine behind the Trainday training-plan builder: it
//! assembles an ordered list of exercises and supersets for each training
//! day via relocation gestures, edits per-exercise set data in a modal
//! editor, and persists day snapshots that are later flattened into the
//! plan-save payload.
//!
//! ## Features
//!
//! - **Two-level hierarchy**: Plain exercises and supersets with exclusive
//!   membership; no exercise ever appears twice
//! - **Gesture dispatch**: A single armed drag session resolved against six
//!   source/target combinations
//! - **Annotation editing**: Set rows with dropsets, duplicated, reordered,
//!   and clamped at zero
//! - **Day snapshots**: One per weekday with a delete cascade that keeps
//!   the annotation store free of orphans
//! - **Plan assembly**: Saved days flattened into the external payload,
//!   supersets inlined in order
//!
//! ## Architecture
//!
//! State is split by lifetime:
//! - **[`session::BuilderSession`]**: the day on screen, reset constantly
//! - **[`annotations::AnnotationStore`]** and
//!   **[`snapshots::SnapshotStore`]**: shared across days, cleared when the
//!   plan is submitted
//! - **[`composer::SessionComposer`]**: owns all three and enforces the
//!   save/load/delete rules between them
//!
//! ## Example Usage
//!
//! ```rust
//! use trainday_composer::composer::SessionComposer;
//! use trainday_composer::drag::{DragSource, DropTarget};
//! use trainday_composer::errors::ComposerResult;
//! use trainday_composer::models::{Exercise, Weekday};
//!
//! fn main() -> ComposerResult<()> {
//!     let mut composer = SessionComposer::new();
//!     composer.session_mut().select_day(Weekday::Monday);
//!
//!     // Drag one exercise out of the catalog onto the day.
//!     composer.session_mut().begin_drag(DragSource::Catalog(
//!         Exercise::new("bench-press", "Barbell Bench Press"),
//!     ));
//!     composer.session_mut().drop_onto(DropTarget::TopLevel { index: None });
//!
//!     composer.save_day()?;
//!     assert_eq!(composer.snapshots().len(), 1);
//!     Ok(())
//! }
//! ```

/// Per-exercise annotation records shared across days
pub mod annotations;

/// Read-only exercise catalog contract and synthetic provider
pub mod catalog;

/// Facade owning session, annotations, and snapshots for one plan
pub mod composer;

/// Ordered exercise/superset hierarchy for the day being built
pub mod composition;

/// Engine-wide limits and defaults
pub mod constants;

/// Drag session state machine and drop dispatch
pub mod drag;

/// Modal editor for one exercise's set rows and dropsets
pub mod editor;

/// Error types and the engine-wide result alias
pub mod errors;

/// Data structures for exercises, annotations, snapshots, and payloads
pub mod models;

/// Working state scoped to the active editing session
pub mod session;

/// Day snapshot store and composition capture/restore
pub mod snapshots;
