// ABOUTME: Read-only exercise catalog boundary: query contract, provider trait, synthetic data
// ABOUTME: Composition code copies returned records; it never writes back through this interface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Trainday

//! # Exercise Catalog
//!
//! The catalog is an external, read-only data source. This module defines
//! the query contract ([`CatalogQuery`] in, [`CatalogResponse`] out), the
//! async [`CatalogProvider`] seam, and [`SyntheticCatalog`], an in-memory
//! provider with realistic seed data used by demos and tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::{ComposerError, ComposerResult};
use crate::models::Exercise;

/// Filter set sent to the catalog service.
///
/// `muscles` is the primary filter; the rest narrow the result further when
/// present. Serialized with the service's field names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    /// Muscle names the exercises must train.
    pub muscles: Vec<String>,
    /// Equipment filter, e.g. "barbell".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    /// Movement-pattern filter, e.g. "push".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement: Option<String>,
    /// Training-type filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_type: Option<String>,
    /// Category filter, e.g. "compound".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-text name search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl CatalogQuery {
    /// Query filtered by muscle names only.
    #[must_use]
    pub fn for_muscles<I, S>(muscles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            muscles: muscles.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Narrow by free-text name search.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Narrow by equipment.
    #[must_use]
    pub fn with_equipment(mut self, equipment: impl Into<String>) -> Self {
        self.equipment = Some(equipment.into());
        self
    }
}

/// Wire response from the catalog service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    /// Service status, `"success"` on a usable result.
    pub status: String,
    /// Matching exercise records.
    #[serde(default)]
    pub data: Vec<Exercise>,
}

impl CatalogResponse {
    /// Extract the records, or a catalog error for a non-success status.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::Catalog`] when the service reported a status
    /// other than `"success"`.
    pub fn into_data(self) -> ComposerResult<Vec<Exercise>> {
        if self.status == "success" {
            Ok(self.data)
        } else {
            Err(ComposerError::catalog(format!(
                "catalog returned status {}",
                self.status
            )))
        }
    }
}

/// Async seam to whatever serves the exercise catalog.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the exercises matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::Catalog`] when the service is unreachable or
    /// reports a failure. Callers leave their state untouched and retry.
    async fn query(&self, query: &CatalogQuery) -> ComposerResult<Vec<Exercise>>;
}

/// One synthetic catalog record with its filterable attributes.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// The record handed out on a match.
    pub exercise: Exercise,
    /// Muscles the exercise trains.
    pub muscles: Vec<String>,
    /// Equipment used.
    pub equipment: String,
    /// Movement pattern.
    pub movement: String,
    /// Training focuses the exercise suits.
    pub training_types: Vec<String>,
    /// Category, e.g. "compound".
    pub category: String,
}

impl CatalogEntry {
    fn matches(&self, query: &CatalogQuery) -> bool {
        let muscle_hit = query.muscles.is_empty()
            || query.muscles.iter().any(|wanted| {
                self.muscles
                    .iter()
                    .any(|muscle| muscle.eq_ignore_ascii_case(wanted))
            });
        if !muscle_hit {
            return false;
        }
        if let Some(equipment) = &query.equipment {
            if !self.equipment.eq_ignore_ascii_case(equipment) {
                return false;
            }
        }
        if let Some(movement) = &query.movement {
            if !self.movement.eq_ignore_ascii_case(movement) {
                return false;
            }
        }
        if let Some(training_type) = &query.training_type {
            if !self
                .training_types
                .iter()
                .any(|focus| focus.eq_ignore_ascii_case(training_type))
            {
                return false;
            }
        }
        if let Some(category) = &query.category {
            if !self.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(search) = &query.search {
            let needle = search.to_lowercase();
            if !self.exercise.name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        true
    }
}

/// In-memory catalog with deterministic seed data.
///
/// Always compiled in: demos, tests, and offline runs use it in place of a
/// real catalog service.
#[derive(Debug, Clone, Default)]
pub struct SyntheticCatalog {
    entries: Vec<CatalogEntry>,
}

impl SyntheticCatalog {
    /// Empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with a small realistic exercise set.
    #[must_use]
    pub fn with_default_exercises() -> Self {
        let mut catalog = Self::new();
        catalog.add(entry(
            "bench-press",
            "Barbell Bench Press",
            &["Chest", "Triceps"],
            "barbell",
            "push",
            &["strength", "hypertrophy", "power"],
            "compound",
        ));
        catalog.add(entry(
            "incline-dumbbell-press",
            "Incline Dumbbell Press",
            &["Chest", "Shoulders"],
            "dumbbell",
            "push",
            &["strength", "hypertrophy"],
            "compound",
        ));
        catalog.add(entry(
            "back-squat",
            "Barbell Back Squat",
            &["Quadriceps", "Glutes"],
            "barbell",
            "squat",
            &["strength", "hypertrophy", "power"],
            "compound",
        ));
        catalog.add(entry(
            "romanian-deadlift",
            "Romanian Deadlift",
            &["Hamstrings", "Glutes"],
            "barbell",
            "hinge",
            &["strength", "hypertrophy"],
            "compound",
        ));
        catalog.add(entry(
            "lat-pulldown",
            "Lat Pulldown",
            &["Back", "Biceps"],
            "cable",
            "pull",
            &["strength", "hypertrophy"],
            "compound",
        ));
        catalog.add(entry(
            "dumbbell-curl",
            "Dumbbell Curl",
            &["Biceps"],
            "dumbbell",
            "pull",
            &["hypertrophy", "endurance"],
            "isolation",
        ));
        catalog.add(entry(
            "cable-fly",
            "Cable Fly",
            &["Chest"],
            "cable",
            "push",
            &["strength", "hypertrophy"],
            "isolation",
        ));
        catalog.add(entry(
            "plank",
            "Plank",
            &["Core"],
            "bodyweight",
            "hold",
            &["endurance"],
            "isolation",
        ));
        catalog
    }

    /// Add one entry.
    pub fn add(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CatalogProvider for SyntheticCatalog {
    async fn query(&self, query: &CatalogQuery) -> ComposerResult<Vec<Exercise>> {
        Ok(self
            .entries
            .iter()
            .filter(|candidate| candidate.matches(query))
            .map(|candidate| candidate.exercise.clone())
            .collect())
    }
}

fn entry(
    id: &str,
    name: &str,
    muscles: &[&str],
    equipment: &str,
    movement: &str,
    training_types: &[&str],
    category: &str,
) -> CatalogEntry {
    CatalogEntry {
        exercise: Exercise::new(id, name),
        muscles: muscles.iter().map(|muscle| (*muscle).to_owned()).collect(),
        equipment: equipment.to_owned(),
        movement: movement.to_owned(),
        training_types: training_types
            .iter()
            .map(|focus| (*focus).to_owned())
            .collect(),
        category: category.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_muscle_filter_matches_any_selected_muscle() {
        let catalog = SyntheticCatalog::with_default_exercises();
        let results = catalog
            .query(&CatalogQuery::for_muscles(["Chest"]))
            .await
            .unwrap();

        assert!(!results.is_empty());
        assert!(results.iter().any(|exercise| exercise.id == "bench-press"));
        assert!(results.iter().all(|exercise| exercise.id != "back-squat"));
    }

    #[tokio::test]
    async fn test_search_narrows_within_muscle_matches() {
        let catalog = SyntheticCatalog::with_default_exercises();
        let query = CatalogQuery::for_muscles(["Chest"]).with_search("fly");
        let results = catalog.query(&query).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "cable-fly");
    }

    #[tokio::test]
    async fn test_training_type_filter_excludes_other_focuses() {
        let catalog = SyntheticCatalog::with_default_exercises();
        let unfiltered = catalog
            .query(&CatalogQuery::for_muscles(["Biceps"]))
            .await
            .unwrap();
        assert_eq!(unfiltered.len(), 2);

        let mut query = CatalogQuery::for_muscles(["Biceps"]);
        query.training_type = Some("strength".to_owned());
        let results = catalog.query(&query).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "lat-pulldown");
    }

    #[test]
    fn test_non_success_status_becomes_catalog_error() {
        let response = CatalogResponse {
            status: "error".to_owned(),
            data: Vec::new(),
        };
        let err = response.into_data().unwrap_err();
        assert!(matches!(err, ComposerError::Catalog { .. }));
    }

    #[test]
    fn test_query_serializes_with_service_field_names() {
        let query = CatalogQuery::for_muscles(["Chest"]).with_equipment("barbell");
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["muscles"][0], "Chest");
        assert_eq!(json["equipment"], "barbell");
        assert!(json.get("trainingType").is_none());
    }
}
