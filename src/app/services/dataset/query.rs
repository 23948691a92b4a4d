//! Dataset filtering
//!
//! This module implements the query side of the catalog: a set of optional,
//! named criteria that narrow the loaded collection. Criteria arrive as the
//! raw strings the request layer received, compose with logical AND, and
//! never produce an error; a malformed bound is simply ignored.

use super::Dataset;
use crate::app::models::Munro;

/// Optional criteria for narrowing a dataset
///
/// Each field carries the criterion text exactly as supplied by the caller.
/// An absent field imposes no constraint on its dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive exact match on the derived classification
    pub classification: Option<String>,

    /// Inclusive lower bound on height in meters; ignored if non-numeric
    pub min_height: Option<String>,

    /// Case-insensitive substring match on the SMC section
    pub section: Option<String>,

    /// Case-insensitive substring match on the summit name
    pub search: Option<String>,
}

impl FilterCriteria {
    /// Parsed height bound, or `None` when absent or malformed
    pub fn min_height_meters(&self) -> Option<f64> {
        self.min_height
            .as_deref()
            .and_then(|value| value.trim().parse::<f64>().ok())
    }

    /// Check whether the criteria impose no constraint at all
    pub fn is_unconstrained(&self) -> bool {
        self.classification.is_none()
            && self.min_height.is_none()
            && self.section.is_none()
            && self.search.is_none()
    }

    fn matches(&self, munro: &Munro) -> bool {
        if let Some(ref classification) = self.classification {
            if !munro.classification.matches(classification) {
                return false;
            }
        }

        if let Some(bound) = self.min_height_meters() {
            if munro.height_m < bound {
                return false;
            }
        }

        if let Some(ref section) = self.section {
            if !contains_ignore_case(&munro.smc_section, section) {
                return false;
            }
        }

        if let Some(ref search) = self.search {
            if !contains_ignore_case(&munro.name, search) {
                return false;
            }
        }

        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl Dataset {
    /// Return the subset of records matching all present criteria
    ///
    /// The result is a new dataset with the same record type and the same
    /// relative order; the input is never mutated. No matches yields an
    /// empty dataset, not an error, and filtering is idempotent.
    pub fn filter(&self, criteria: &FilterCriteria) -> Dataset {
        Dataset::new(
            self.iter()
                .filter(|munro| criteria.matches(munro))
                .cloned()
                .collect(),
        )
    }
}
