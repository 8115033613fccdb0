// ABOUTME: Unified error types for the session composition engine
// ABOUTME: Distinguishes validation failures, not-found lookups, and external faults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Trainday

//! # Error Handling
//!
//! Every fallible operation in the engine returns [`ComposerResult`]. The error
//! taxonomy mirrors how the UI presents failures:
//!
//! - **Validation** errors block an action the user explicitly requested
//!   (saving an empty day, exceeding the weekly session limit) and are shown
//!   as messages; no state is mutated.
//! - **Not found** errors cover lookups of days that were never saved.
//! - **External** errors wrap catalog or plan-save failures; in-memory state
//!   is untouched and the triggering action can simply be retried.
//!
//! Structural no-ops (duplicate drops, stale gestures) are deliberately *not*
//! errors: store mutators report `false` and trace at debug level instead.

use crate::models::Weekday;
use thiserror::Error;

/// Broad classification of a [`ComposerError`], used by callers to pick a
/// presentation style (inline form message vs. toast vs. retry prompt).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A precondition supplied by the user is missing or violated.
    Validation,
    /// The requested record does not exist.
    NotFound,
    /// An external collaborator (catalog, plan endpoint) failed.
    External,
}

/// Error type for all engine operations.
#[derive(Debug, Error)]
pub enum ComposerError {
    /// A catalog query was requested without any muscle selection.
    #[error("Select at least one muscle group before searching the catalog")]
    NoMusclesSelected,

    /// A day save was requested without an active weekday.
    #[error("Select a weekday before saving the session")]
    NoDaySelected,

    /// A day save was requested while the composition holds no items.
    #[error("Training day '{day}' has no exercises to save")]
    EmptyDay {
        /// Day the save targeted.
        day: Weekday,
    },

    /// Saving a new day would exceed the plan's sessions-per-week limit.
    #[error("Weekly session limit of {limit} reached")]
    SessionLimitReached {
        /// Configured sessions-per-week limit.
        limit: u32,
    },

    /// No snapshot exists for the requested weekday.
    #[error("No saved session for '{day}'")]
    DayNotFound {
        /// Day that was looked up.
        day: Weekday,
    },

    /// A day deletion was invoked without the caller confirming it.
    #[error("Deleting the session for '{day}' requires confirmation")]
    DeleteNotConfirmed {
        /// Day the deletion targeted.
        day: Weekday,
    },

    /// A plan payload was requested while no day has been saved yet.
    #[error("The plan has no saved training days")]
    EmptyPlan,

    /// The exercise catalog could not be queried.
    #[error("Exercise catalog request failed: {reason}")]
    Catalog {
        /// Short description of the failure, suitable for display.
        reason: String,
    },

    /// The external plan-save endpoint rejected or failed the request.
    #[error("Plan save failed: {reason}")]
    PlanSave {
        /// Short description of the failure, suitable for display.
        reason: String,
    },
}

impl ComposerError {
    /// Classify this error for presentation.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NoMusclesSelected
            | Self::NoDaySelected
            | Self::EmptyDay { .. }
            | Self::SessionLimitReached { .. }
            | Self::DeleteNotConfirmed { .. }
            | Self::EmptyPlan => ErrorKind::Validation,
            Self::DayNotFound { .. } => ErrorKind::NotFound,
            Self::Catalog { .. } | Self::PlanSave { .. } => ErrorKind::External,
        }
    }

    /// Wrap a catalog adapter failure.
    #[must_use]
    pub fn catalog(reason: impl Into<String>) -> Self {
        Self::Catalog {
            reason: reason.into(),
        }
    }

    /// Wrap a plan-save endpoint failure.
    #[must_use]
    pub fn plan_save(reason: impl Into<String>) -> Self {
        Self::PlanSave {
            reason: reason.into(),
        }
    }
}

/// Result type alias for engine operations.
pub type ComposerResult<T> = Result<T, ComposerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_cover_taxonomy() {
        assert_eq!(
            ComposerError::NoMusclesSelected.kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            ComposerError::SessionLimitReached { limit: 5 }.kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            ComposerError::DayNotFound {
                day: Weekday::Monday
            }
            .kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            ComposerError::catalog("timeout").kind(),
            ErrorKind::External
        );
    }

    #[test]
    fn test_messages_name_the_day() {
        let err = ComposerError::DayNotFound {
            day: Weekday::Tuesday,
        };
        assert!(err.to_string().contains("Tuesday"));
    }
}
