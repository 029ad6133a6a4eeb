//! The read-only knowledge store.
//!
//! Lookups are exact matches. Callers normalize keys (lowercase) before
//! asking; there is no fuzzy or partial matching.

use std::collections::HashMap;

use crate::data::{PLANTS, ZONES};
use crate::plant::PlantRecord;
use crate::zone::{MAX_ZONE, MIN_ZONE, ZoneRecord};

/// Immutable plant and zone tables.
///
/// Plants keep their table insertion order; `plant_keys` and `plants` are
/// stable across calls.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    plants: Vec<(&'static str, PlantRecord)>,
    index: HashMap<&'static str, usize>,
    zones: Vec<ZoneRecord>,
}

impl KnowledgeStore {
    /// Build the store from the tables compiled into the binary.
    pub fn builtin() -> Self {
        Self::from_parts(PLANTS.to_vec(), ZONES.to_vec())
    }

    /// Build a store from explicit tables. `zones[0]` is zone 1.
    ///
    /// A repeated key keeps its first position and its last record.
    pub fn from_parts(plants: Vec<(&'static str, PlantRecord)>, zones: Vec<ZoneRecord>) -> Self {
        let mut ordered: Vec<(&'static str, PlantRecord)> = Vec::with_capacity(plants.len());
        let mut index = HashMap::with_capacity(plants.len());
        for (key, record) in plants {
            match index.get(key) {
                Some(&i) => ordered[i] = (key, record),
                None => {
                    index.insert(key, ordered.len());
                    ordered.push((key, record));
                }
            }
        }
        Self {
            plants: ordered,
            index,
            zones,
        }
    }

    /// Look up a plant by its exact key.
    pub fn lookup_plant(&self, key: &str) -> Option<&PlantRecord> {
        self.index.get(key).map(|&i| &self.plants[i].1)
    }

    /// Look up a hardiness zone. `None` for anything outside the table.
    pub fn lookup_zone(&self, zone: i64) -> Option<&ZoneRecord> {
        if !(MIN_ZONE..=MAX_ZONE).contains(&zone) {
            return None;
        }
        self.zones.get((zone - MIN_ZONE) as usize)
    }

    /// Plant keys in insertion order.
    pub fn plant_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.plants.iter().map(|(key, _)| *key)
    }

    /// `(key, record)` pairs in insertion order.
    pub fn plants(&self) -> impl Iterator<Item = (&'static str, &PlantRecord)> + '_ {
        self.plants.iter().map(|(key, record)| (*key, record))
    }

    /// `(zone, record)` pairs in ascending zone order.
    pub fn zones(&self) -> impl Iterator<Item = (i64, &ZoneRecord)> + '_ {
        self.zones
            .iter()
            .enumerate()
            .map(|(i, record)| (i as i64 + MIN_ZONE, record))
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Check the table invariants: keys are lowercase snake_case, names and
    /// list fields are non-empty, and zones cover exactly 1..=10.
    pub fn validate(&self) -> Result<(), KnowledgeError> {
        for (key, record) in &self.plants {
            if !is_snake_case(key) {
                return Err(KnowledgeError::InvalidKey(key.to_string()));
            }
            if record.name.trim().is_empty() {
                return Err(KnowledgeError::EmptyName(key.to_string()));
            }
            for (field, entries) in record.lists() {
                if entries.is_empty() || entries.iter().any(|e| e.trim().is_empty()) {
                    return Err(KnowledgeError::EmptyList {
                        key: key.to_string(),
                        field,
                    });
                }
            }
        }

        let expected = (MAX_ZONE - MIN_ZONE + 1) as usize;
        if self.zones.len() != expected {
            return Err(KnowledgeError::ZoneCount {
                expected,
                found: self.zones.len(),
            });
        }

        Ok(())
    }
}

fn is_snake_case(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('_')
        && !key.ends_with('_')
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// A broken table invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KnowledgeError {
    #[error("Plant key '{0}' is not lowercase snake_case")]
    InvalidKey(String),

    #[error("Plant '{0}' has an empty display name")]
    EmptyName(String),

    #[error("Plant '{key}' has an empty or blank entry in '{field}'")]
    EmptyList { key: String, field: &'static str },

    #[error("Zone table must hold {expected} zones, found {found}")]
    ZoneCount { expected: usize, found: usize },
}
