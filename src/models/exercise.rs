// ABOUTME: Catalog exercise record plus the muscle, training-type and weekday vocabulary
// ABOUTME: Exercises are catalog-owned; the engine copies them and never edits their fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Trainday

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single exercise as delivered by the catalog service.
///
/// The catalog owns these records; the engine copies them into compositions
/// and treats every field as read-only. Identity is the catalog `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Catalog identifier, unique across the whole exercise catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Thumbnail image reference.
    #[serde(default)]
    pub thumbnail: String,
    /// Catalog-owned metadata blob (muscle groups, equipment, media). The
    /// engine passes it through untouched.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub metadata: Value,
}

impl Exercise {
    /// Create an exercise record with empty thumbnail and metadata.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumbnail: String::new(),
            metadata: Value::Null,
        }
    }
}

/// A muscle group as presented by the selection UI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Muscle {
    /// Common name shown to the user (e.g. "Chest").
    pub name: String,
    /// Latin name used by the catalog (e.g. "Pectoralis major").
    pub latin_name: String,
}

impl Muscle {
    /// Create a muscle descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, latin_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            latin_name: latin_name.into(),
        }
    }
}

/// Training focus of a session.
///
/// The catalog also filters on this value. The `Other` variant carries
/// any focus the app introduces without a schema change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrainingType {
    /// Maximal-strength work with low repetitions.
    #[default]
    Strength,
    /// Muscle-growth focused volume work.
    Hypertrophy,
    /// Muscular-endurance and conditioning work.
    Endurance,
    /// Explosive power and speed work.
    Power,
    /// Mobility and flexibility sessions.
    Mobility,
    /// Training focus not covered by the standard categories.
    Other(String),
}

impl TrainingType {
    /// String form used in filters and logs.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Strength => "strength",
            Self::Hypertrophy => "hypertrophy",
            Self::Endurance => "endurance",
            Self::Power => "power",
            Self::Mobility => "mobility",
            Self::Other(name) => name,
        }
    }

    /// Parse from a filter string, falling back to `Other` for
    /// unrecognized values.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "strength" => Self::Strength,
            "hypertrophy" => Self::Hypertrophy,
            "endurance" => Self::Endurance,
            "power" => Self::Power,
            "mobility" => Self::Mobility,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for TrainingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weekday a training session is keyed by.
///
/// Serialized as the full English name ("Monday"), the format the
/// persisted snapshot schema and the plan-save payload use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    /// First day of the training week.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Last day of the training week.
    Sunday,
}

impl Weekday {
    /// All weekdays in plan order, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Full English name, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Parse a weekday from its English name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "monday" => Some(Self::Monday),
            "tuesday" => Some(Self::Tuesday),
            "wednesday" => Some(Self::Wednesday),
            "thursday" => Some(Self::Thursday),
            "friday" => Some(Self::Friday),
            "saturday" => Some(Self::Saturday),
            "sunday" => Some(Self::Sunday),
            _ => None,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_roundtrips_through_name() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::parse(day.as_str()), Some(day));
        }
        assert_eq!(Weekday::parse("friDAY"), Some(Weekday::Friday));
        assert_eq!(Weekday::parse("someday"), None);
    }

    #[test]
    fn test_weekday_serializes_as_full_name() {
        let json = serde_json::to_string(&Weekday::Wednesday).unwrap();
        assert_eq!(json, "\"Wednesday\"");
    }

    #[test]
    fn test_training_type_parse_keeps_unknown_values() {
        assert_eq!(TrainingType::parse("strength"), TrainingType::Strength);
        assert_eq!(
            TrainingType::parse("calisthenics"),
            TrainingType::Other("calisthenics".to_owned())
        );
    }

    #[test]
    fn test_exercise_new_leaves_metadata_null() {
        let ex = Exercise::new("ex-1", "Bench Press");
        assert_eq!(ex.id, "ex-1");
        assert!(ex.metadata.is_null());
    }
}
