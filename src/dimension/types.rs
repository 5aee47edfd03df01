//! Dimension table and surrogate-key mapping types

use std::collections::HashMap;
use crate::row::Value;

/// A dimension's value-tuple in registry column order
pub type ValueTuple = Vec<Option<Value>>;

/// One row of a built dimension table: surrogate key plus value-tuple
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionRow {
    pub key: u64,
    pub values: ValueTuple,
}

/// A built dimension table
///
/// Rows hold the unique value-tuples in first-seen order; keys are dense
/// positive integers starting at 1.
#[derive(Debug, Clone)]
pub struct DimensionTable {
    /// Dimension name (e.g. "place")
    pub name: String,
    /// Surrogate key column name (e.g. "place_id")
    pub key_column: String,
    /// Declared column names in registry order
    pub columns: Vec<String>,
    pub rows: Vec<DimensionRow>,
}

impl DimensionTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The file header: surrogate key column followed by the declared columns
    pub fn header(&self) -> Vec<String> {
        let mut header = Vec::with_capacity(self.columns.len() + 1);
        header.push(self.key_column.to_uppercase());
        header.extend(self.columns.iter().map(|c| c.to_uppercase()));
        header
    }
}

/// Injective mapping from a dimension's value-tuple to its surrogate key
///
/// Built in the same pass as the dimension table and handed to the fact
/// builder in memory, so the mapping and the written table cannot diverge
/// within one run. Discarded after the fact table is emitted.
#[derive(Debug, Clone, Default)]
pub struct KeyMapping {
    map: HashMap<ValueTuple, u64>,
}

impl KeyMapping {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register a tuple, returning its key; reuses the key on a repeat
    pub(crate) fn assign(&mut self, tuple: &ValueTuple) -> (u64, bool) {
        if let Some(existing) = self.map.get(tuple) {
            return (*existing, false);
        }
        let key = self.map.len() as u64 + 1;
        self.map.insert(tuple.clone(), key);
        (key, true)
    }

    /// Look up the surrogate key for a value-tuple
    pub fn key_for(&self, tuple: &[Option<Value>]) -> Option<u64> {
        self.map.get(tuple).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
