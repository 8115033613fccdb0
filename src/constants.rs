// ABOUTME: Engine-wide limits and default values for session composition
// ABOUTME: Centralizes tunable numbers so stores and validation agree on bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Trainday

/// Hard limits enforced by validation.
pub mod limits {
    /// A plan can never schedule more sessions than there are weekdays.
    pub const MAX_SESSIONS_PER_WEEK: u32 = 7;

    /// A plan must schedule at least one session per week.
    pub const MIN_SESSIONS_PER_WEEK: u32 = 1;
}

/// Default values applied when the caller has not configured anything.
pub mod defaults {
    /// Sessions-per-week limit used until the plan form provides one.
    pub const DEFAULT_SESSIONS_PER_WEEK: u32 = 3;

    /// Number of zeroed set rows seeded when an exercise is opened for the
    /// first time in the annotation editor.
    pub const INITIAL_SET_ROWS: usize = 1;
}
