//! In-memory munro dataset service
//!
//! This module provides the ordered, immutable collection of decoded summit
//! records plus its loading and filtering operations. A dataset is built in
//! one sequential pass over the backing CSV and never mutated afterwards, so
//! concurrent readers need no locking.

use crate::app::models::Munro;

pub mod decoder;
pub mod loader;
pub mod query;

// Re-export key types for convenience
pub use loader::LoadStats;
pub use query::FilterCriteria;

/// Ordered collection of summit records
///
/// Preserves source row order; no deduplication or merging. The loader owns
/// the only reference to the backing vector while building and returns the
/// dataset by value, so every load produces an independent result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Munro>,
}

impl Dataset {
    /// Create a dataset from already-decoded records
    pub fn new(records: Vec<Munro>) -> Self {
        Self { records }
    }

    /// All records in source order
    pub fn records(&self) -> &[Munro] {
        &self.records
    }

    /// Iterate over records in source order
    pub fn iter(&self) -> std::slice::Iter<'_, Munro> {
        self.records.iter()
    }

    /// Number of records in the dataset
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl IntoIterator for Dataset {
    type Item = Munro;
    type IntoIter = std::vec::IntoIter<Munro>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Munro;
    type IntoIter = std::slice::Iter<'a, Munro>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
