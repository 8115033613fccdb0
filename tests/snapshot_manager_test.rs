// ABOUTME: Integration tests for the day lifecycle: save, load, delete
// ABOUTME: Covers validation failures, overwrite, the weekly limit, and the annotation cascade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Trainday

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{chest, compose_day, composer_with_saved_day, exercise, init_test_logging};
use trainday_composer::annotations::AnnotationStore;
use trainday_composer::composer::{PlanSettings, SessionComposer};
use trainday_composer::editor::{FieldChange, RowField};
use trainday_composer::errors::ComposerError;
use trainday_composer::models::{TrainingType, Weekday};

/// Commit an annotation for `id` through the editor, setting the first
/// row's reps so the record is distinguishable from the zeroed default.
fn annotate(composer: &mut SessionComposer, id: &str, reps: f64) {
    assert!(composer.open_editor(id), "exercise should be in the composition");
    let editor = composer.session_mut().editor_mut().unwrap();
    let row = editor.rows()[0].id;
    editor.adjust_field(row, RowField::Reps, FieldChange::Set(reps));
    assert_eq!(composer.commit_editor().as_deref(), Some(id));
}

#[test]
fn test_save_without_a_selected_day_changes_nothing() {
    init_test_logging();
    let mut composer = SessionComposer::new();
    composer
        .session_mut()
        .composition_mut()
        .insert_from_catalog(exercise("bench-press"));

    let result = composer.save_day();

    assert!(matches!(result, Err(ComposerError::NoDaySelected)));
    assert_eq!(composer.session().composition().exercise_count(), 1);
    assert!(composer.snapshots().is_empty());
}

#[test]
fn test_save_of_an_empty_composition_changes_nothing() {
    init_test_logging();
    let mut composer = SessionComposer::new();
    composer.session_mut().select_day(Weekday::Tuesday);

    let result = composer.save_day();

    assert!(matches!(
        result,
        Err(ComposerError::EmptyDay {
            day: Weekday::Tuesday
        })
    ));
    assert_eq!(composer.session().selected_day(), Some(Weekday::Tuesday));
    assert!(composer.snapshots().is_empty());
}

#[test]
fn test_save_beyond_the_weekly_limit_is_rejected() {
    init_test_logging();
    let mut composer = SessionComposer::with_settings(PlanSettings::new(1));
    compose_day(&mut composer, Weekday::Monday, &["bench-press"]);
    composer.save_day().unwrap();

    compose_day(&mut composer, Weekday::Tuesday, &["back-squat"]);
    let result = composer.save_day();

    assert!(matches!(
        result,
        Err(ComposerError::SessionLimitReached { limit: 1 })
    ));
    // The rejected session keeps its work so the user can delete a day first.
    assert_eq!(composer.session().selected_day(), Some(Weekday::Tuesday));
    assert_eq!(composer.session().composition().exercise_count(), 1);
    assert_eq!(composer.snapshots().len(), 1);
}

#[test]
fn test_resaving_an_already_saved_day_bypasses_the_limit() {
    let mut composer = composer_with_saved_day(Weekday::Monday, &["bench-press"]);
    composer.set_sessions_per_week(1);

    composer.load_day(Weekday::Monday).unwrap();
    composer
        .session_mut()
        .composition_mut()
        .insert_from_catalog(exercise("cable-fly"));

    composer.save_day().unwrap();
    assert_eq!(composer.snapshots().len(), 1);
    assert_eq!(
        composer.snapshots().get(Weekday::Monday).unwrap().exercises().len(),
        2
    );
}

#[test]
fn test_saving_the_same_day_twice_overwrites() {
    let mut composer = composer_with_saved_day(Weekday::Monday, &["bench-press"]);

    compose_day(&mut composer, Weekday::Monday, &["back-squat"]);
    composer.save_day().unwrap();

    let snapshot = composer.snapshots().get(Weekday::Monday).unwrap();
    let ids: Vec<&str> = snapshot
        .exercises()
        .into_iter()
        .map(|exercise| exercise.id.as_str())
        .collect();
    assert_eq!(ids, vec!["back-squat"]);
    assert_eq!(composer.snapshots().len(), 1);
}

#[test]
fn test_save_embeds_committed_annotations() {
    init_test_logging();
    let mut composer = SessionComposer::new();
    compose_day(&mut composer, Weekday::Monday, &["bench-press", "cable-fly"]);
    annotate(&mut composer, "bench-press", 8.0);

    composer.save_day().unwrap();

    let snapshot = composer.snapshots().get(Weekday::Monday).unwrap();
    let exercises = snapshot.exercises();
    assert_eq!(exercises[0].rows[0].reps, 8);
    // Never-annotated exercises persist with empty log data.
    assert!(exercises[1].rows.is_empty());
}

#[test]
fn test_save_resets_the_session_for_the_next_day() {
    let composer = composer_with_saved_day(Weekday::Monday, &["bench-press"]);

    let session = composer.session();
    assert!(session.selected_day().is_none());
    assert!(session.composition().is_empty());
    assert!(session.selected_muscles().is_empty());
    assert!(!session.drag_armed());
    assert!(session.editor().is_none());
}

#[test]
fn test_load_restores_structure_and_selection() {
    init_test_logging();
    let mut composer = SessionComposer::new();
    compose_day(&mut composer, Weekday::Thursday, &["bench-press"]);
    composer
        .session_mut()
        .set_training_type(TrainingType::Hypertrophy);
    composer.session_mut().toggle_muscle(chest());
    let superset_id = composer.session_mut().composition_mut().add_superset();
    composer
        .session_mut()
        .composition_mut()
        .insert_into_superset(exercise("incline-dumbbell-press"), superset_id);
    let saved_items = composer.session().composition().items();

    composer.save_day().unwrap();
    composer.load_day(Weekday::Thursday).unwrap();

    let session = composer.session();
    assert_eq!(session.selected_day(), Some(Weekday::Thursday));
    assert_eq!(session.training_type(), &TrainingType::Hypertrophy);
    assert_eq!(session.selected_muscles().len(), 1);
    assert_eq!(session.composition().items(), saved_items);
}

#[test]
fn test_load_of_an_unsaved_day_fails() {
    let mut composer = composer_with_saved_day(Weekday::Monday, &["bench-press"]);

    let result = composer.load_day(Weekday::Friday);

    assert!(matches!(
        result,
        Err(ComposerError::DayNotFound {
            day: Weekday::Friday
        })
    ));
}

#[test]
fn test_load_discards_unsaved_work() {
    let mut composer = composer_with_saved_day(Weekday::Monday, &["bench-press"]);

    compose_day(&mut composer, Weekday::Tuesday, &["back-squat"]);
    composer.load_day(Weekday::Monday).unwrap();

    let session = composer.session();
    assert_eq!(session.selected_day(), Some(Weekday::Monday));
    assert_eq!(session.composition().exercise_ids(), vec!["bench-press"]);
    assert!(!composer.snapshots().contains(Weekday::Tuesday));
}

#[test]
fn test_hydrated_composer_restores_annotations_from_snapshots() {
    init_test_logging();
    let mut composer = SessionComposer::new();
    compose_day(&mut composer, Weekday::Monday, &["bench-press", "cable-fly"]);
    annotate(&mut composer, "bench-press", 8.0);
    composer.save_day().unwrap();

    // Only the snapshots survived persistence; the annotation store did not.
    let mut hydrated = SessionComposer::from_parts(
        AnnotationStore::new(),
        composer.snapshots().clone(),
        PlanSettings::default(),
    );
    assert!(hydrated.annotations().is_empty());

    hydrated.load_day(Weekday::Monday).unwrap();

    let record = hydrated.annotations().get("bench-press").unwrap();
    assert_eq!(record.rows.len(), 1);
    assert_eq!(record.rows[0].reps, 8);
    // Never-annotated exercises stay absent instead of gaining empty records.
    assert!(!hydrated.annotations().contains("cable-fly"));
}

#[test]
fn test_delete_without_confirmation_changes_nothing() {
    init_test_logging();
    let mut composer = SessionComposer::new();
    compose_day(&mut composer, Weekday::Monday, &["bench-press"]);
    annotate(&mut composer, "bench-press", 5.0);
    composer.save_day().unwrap();

    let result = composer.delete_day(Weekday::Monday, false);

    assert!(matches!(
        result,
        Err(ComposerError::DeleteNotConfirmed {
            day: Weekday::Monday
        })
    ));
    assert!(composer.snapshots().contains(Weekday::Monday));
    assert!(composer.annotations().contains("bench-press"));
}

#[test]
fn test_delete_of_an_unsaved_day_fails_even_when_confirmed() {
    let mut composer = composer_with_saved_day(Weekday::Monday, &["bench-press"]);

    let result = composer.delete_day(Weekday::Sunday, true);

    assert!(matches!(
        result,
        Err(ComposerError::DayNotFound {
            day: Weekday::Sunday
        })
    ));
}

#[test]
fn test_delete_cascades_only_day_exclusive_annotations() {
    init_test_logging();
    let mut composer = SessionComposer::new();

    compose_day(&mut composer, Weekday::Monday, &["bench-press", "back-squat"]);
    annotate(&mut composer, "bench-press", 8.0);
    annotate(&mut composer, "back-squat", 5.0);
    composer.save_day().unwrap();

    compose_day(&mut composer, Weekday::Wednesday, &["bench-press"]);
    composer.save_day().unwrap();

    composer.delete_day(Weekday::Monday, true).unwrap();

    // back-squat appeared only on Monday; bench-press survives via Wednesday.
    assert!(!composer.annotations().contains("back-squat"));
    assert!(composer.annotations().contains("bench-press"));
    assert!(!composer.snapshots().contains(Weekday::Monday));
    assert!(composer.snapshots().contains(Weekday::Wednesday));
}

#[test]
fn test_delete_cascades_superset_members_too() {
    init_test_logging();
    let mut composer = SessionComposer::new();
    compose_day(&mut composer, Weekday::Monday, &["bench-press"]);
    let superset_id = composer.session_mut().composition_mut().add_superset();
    composer
        .session_mut()
        .composition_mut()
        .insert_into_superset(exercise("cable-fly"), superset_id);
    annotate(&mut composer, "cable-fly", 12.0);
    composer.save_day().unwrap();

    composer.delete_day(Weekday::Monday, true).unwrap();

    assert!(!composer.annotations().contains("cable-fly"));
    assert!(composer.annotations().is_empty());
}

#[test]
fn test_delete_resets_the_session() {
    let mut composer = composer_with_saved_day(Weekday::Monday, &["bench-press"]);
    compose_day(&mut composer, Weekday::Tuesday, &["back-squat"]);

    composer.delete_day(Weekday::Monday, true).unwrap();

    assert!(composer.session().selected_day().is_none());
    assert!(composer.session().composition().is_empty());
}

#[test]
fn test_lowering_the_limit_applies_to_later_saves() {
    let mut composer = composer_with_saved_day(Weekday::Monday, &["bench-press"]);
    composer.set_sessions_per_week(1);

    compose_day(&mut composer, Weekday::Tuesday, &["back-squat"]);
    assert!(matches!(
        composer.save_day(),
        Err(ComposerError::SessionLimitReached { limit: 1 })
    ));

    // Already-saved days stay; the limit only gates new ones.
    assert_eq!(composer.snapshots().len(), 1);
}
