//! Fact table types

use crate::row::Value;

/// What to do when a fact row's value-tuple is absent from a dimension's
/// key mapping
///
/// A miss should not occur when the dimension builder consumed the same
/// canonical rows first, so a miss is a consistency signal. `NullReference`
/// degrades to a null foreign key with a warning; `Fail` aborts the build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissPolicy {
    #[default]
    NullReference,
    Fail,
}

/// One fact row: generated key, measure values, dimension foreign keys
#[derive(Debug, Clone, PartialEq)]
pub struct FactRow {
    pub key: u64,
    pub measures: Vec<Option<Value>>,
    pub dimension_keys: Vec<Option<u64>>,
}

/// The built fact table
#[derive(Debug, Clone)]
pub struct FactTable {
    /// Physical table name (e.g. "damage_fact")
    pub name: String,
    /// Generated key column name (e.g. "damage_id")
    pub key_column: String,
    /// Measure column names in registry order
    pub measure_columns: Vec<String>,
    /// Foreign key column names in registry dimension order (e.g. "place_id")
    pub dimension_key_columns: Vec<String>,
    pub rows: Vec<FactRow>,
}

impl FactTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The file header: fact key, measures, then one foreign key per dimension
    pub fn header(&self) -> Vec<String> {
        let mut header = Vec::with_capacity(1 + self.measure_columns.len() + self.dimension_key_columns.len());
        header.push(self.key_column.to_uppercase());
        header.extend(self.measure_columns.iter().map(|c| c.to_uppercase()));
        header.extend(self.dimension_key_columns.iter().map(|c| c.to_uppercase()));
        header
    }
}
