//! Canonical rows: validated, typed-or-null fields

use std::collections::HashMap;
use super::value::Value;

/// Why a canonical field ended up null
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullReason {
    /// The source column was absent from the row
    Missing,
    /// The raw value was the empty string
    Empty,
    /// The raw value was the missing-data marker ("NaN")
    MissingMarker,
    /// The raw value could not be cast to the declared type
    CastFailed,
    /// A bit column held something other than the accepted true/false spellings
    UnrecognizedBit,
}

/// The outcome of validating one field: a typed value or a tagged null
///
/// Nulls carry their reason so tests and diagnostics can assert on *why* a
/// field is null, not just that it is.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOutcome {
    Value(Value),
    Null(NullReason),
}

impl FieldOutcome {
    /// The typed value, if the cast succeeded
    pub fn value(&self) -> Option<&Value> {
        match self {
            FieldOutcome::Value(v) => Some(v),
            FieldOutcome::Null(_) => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldOutcome::Null(_))
    }

    pub fn null_reason(&self) -> Option<NullReason> {
        match self {
            FieldOutcome::Value(_) => None,
            FieldOutcome::Null(reason) => Some(*reason),
        }
    }
}

/// A row that has passed validation against the registry
///
/// Contains exactly the registry's declared columns, each either correctly
/// typed or null - never the raw string for a type it could not satisfy.
/// Columns are keyed by their registry (lower-case) names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalRow {
    fields: HashMap<String, FieldOutcome>,
}

impl CanonicalRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: &str, outcome: FieldOutcome) {
        self.fields.insert(column.to_string(), outcome);
    }

    /// The full outcome for a declared column
    pub fn outcome(&self, column: &str) -> Option<&FieldOutcome> {
        self.fields.get(column)
    }

    /// The typed value for a declared column, None when null or undeclared
    pub fn value(&self, column: &str) -> Option<&Value> {
        self.fields.get(column).and_then(FieldOutcome::value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
