//! Collection of learned winning shapes.
//!
//! The database never holds two records where one shape contains the other:
//! when a new record is narrower than some stored ones, those are evicted; when
//! it is broader than a stored one, it is dropped. The narrowest shapes are the
//! ones that match the most live boards, so they are the ones worth keeping.

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::learning::record::FinishedGame;

/// What happened to a record passed to [`Database::insert`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// Draws carry no winning shape and are never stored.
    Draw,
    /// A stored record already describes a narrower shape.
    Redundant,
    /// The record was appended after evicting the given number of broader
    /// records.
    Inserted {
        /// Number of stored records the new one replaced.
        evicted: usize,
    },
}

/// Deduplicated winning shapes of a single variant.
#[derive(Clone, Debug)]
pub struct Database {
    size: usize,
    records: Vec<FinishedGame>,
}

impl Database {
    /// Creates an empty database for boards with `size` cells.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self {
            size,
            records: Vec::new(),
        }
    }

    /// Board size this database accepts.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been learned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Stored records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[FinishedGame] {
        &self.records
    }

    /// Iterates over the stored records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, FinishedGame> {
        self.records.iter()
    }

    /// Merges a finished game into the database.
    ///
    /// Every stored record is compared against the candidate exactly once,
    /// evictions do not change which records are visited. A stored record
    /// whose shape contains the candidate's is evicted; otherwise, if the
    /// candidate's shape contains the stored one, the candidate is redundant.
    ///
    /// # Errors
    ///
    /// If the record belongs to a different variant. The database is not
    /// modified in that case.
    pub fn insert(&mut self, candidate: FinishedGame) -> Result<Insertion> {
        if candidate.size() != self.size {
            return Err(Error::TypeMismatch {
                expected: self.size,
                actual: candidate.size(),
            });
        }
        if candidate.is_draw() {
            return Ok(Insertion::Draw);
        }
        let before = self.records.len();
        let mut redundant = false;
        self.records.retain(|stored| {
            if stored.covers(&candidate) {
                debug!(evicted = %stored, by = %candidate, "evicting broader record");
                return false;
            }
            if candidate.covers(stored) {
                redundant = true;
            }
            true
        });
        let evicted = before - self.records.len();
        if redundant {
            debug_assert_eq!(evicted, 0);
            return Ok(Insertion::Redundant);
        }
        debug!(record = %candidate, evicted, "storing record");
        self.records.push(candidate);
        Ok(Insertion::Inserted { evicted })
    }
}

impl<'a> IntoIterator for &'a Database {
    type Item = &'a FinishedGame;
    type IntoIter = std::slice::Iter<'a, FinishedGame>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Database {
    /// One record per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{record}")?;
        }
        Ok(())
    }
}
