// ABOUTME: Shared fixtures and logging setup for integration tests
// ABOUTME: Exercise and muscle builders plus composers pre-loaded with saved days
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Trainday
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::expect_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `trainday_composer`
//!
//! Common builders to reduce duplication across integration tests.

use std::sync::Once;

use chrono::NaiveDate;
use trainday_composer::composer::SessionComposer;
use trainday_composer::models::{Exercise, Muscle, PlanMeta, Weekday};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Catalog-style exercise record with a generated display name
pub fn exercise(id: &str) -> Exercise {
    Exercise::new(id, format!("Exercise {id}"))
}

/// Muscle record as the selection UI produces it
pub fn muscle(name: &str, latin_name: &str) -> Muscle {
    Muscle {
        name: name.to_owned(),
        latin_name: latin_name.to_owned(),
    }
}

/// The chest muscle fixture used across flow tests
pub fn chest() -> Muscle {
    muscle("Chest", "Pectoralis major")
}

/// Plan metadata as the surrounding form would supply it
pub fn plan_meta(name: &str) -> PlanMeta {
    PlanMeta {
        name: name.to_owned(),
        description: "integration test plan".to_owned(),
        week_start: NaiveDate::from_ymd_opt(2026, 8, 24).expect("valid date"),
        duration: 8,
    }
}

/// Composer with one day already saved under `day` containing `ids`
pub fn composer_with_saved_day(day: Weekday, ids: &[&str]) -> SessionComposer {
    init_test_logging();
    let mut composer = SessionComposer::new();
    compose_day(&mut composer, day, ids);
    composer.save_day().expect("day should save");
    composer
}

/// Select `day` and insert `ids` at the top level without saving
pub fn compose_day(composer: &mut SessionComposer, day: Weekday, ids: &[&str]) {
    composer.session_mut().select_day(day);
    for id in ids {
        composer
            .session_mut()
            .composition_mut()
            .insert_from_catalog(exercise(id));
    }
}
