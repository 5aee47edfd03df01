//! Left-outer join of two row sets

use std::collections::HashMap;
use crate::source::RowSet;

/// How join key values are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyNormalization {
    /// Raw text, matched exactly
    Exact,
    /// Free-form numeric text, truncated to an integer ("1234.0" -> 1234);
    /// empty or unparseable keys become null and never match on either side
    Numeric,
}

/// Left-join `extension` onto `base`
///
/// Builds an index of extension rows by `extension_key` (later duplicates
/// overwrite earlier ones), then emits exactly one output row per base row in
/// base order. On a hit, every extension column except the join key is merged
/// into the base row; on a miss the extension columns stay absent, which
/// validation reads as null. Extension rows that match nothing are dropped;
/// an extension row matching several base rows is repeated.
pub fn left_join(
    base: &RowSet,
    extension: &RowSet,
    base_key: &str,
    extension_key: &str,
    normalization: KeyNormalization,
) -> RowSet {
    let mut index: HashMap<String, usize> = HashMap::new();
    for (position, row) in extension.rows.iter().enumerate() {
        if let Some(key) = key_of(row.get(extension_key), normalization) {
            index.insert(key, position);
        }
    }

    // Output column order: base columns, then extension columns minus the
    // join key and anything the base already carries.
    let mut columns = base.columns.clone();
    let extension_key_upper = extension_key.to_uppercase();
    let merged_columns: Vec<&String> = extension
        .columns
        .iter()
        .filter(|c| **c != extension_key_upper && !base.columns.contains(c))
        .collect();
    columns.extend(merged_columns.iter().map(|c| (*c).to_string()));

    let mut rows = Vec::with_capacity(base.rows.len());
    for base_row in &base.rows {
        let mut row = base_row.clone();
        if let Some(key) = key_of(base_row.get(base_key), normalization) {
            if let Some(position) = index.get(&key) {
                let extension_row = &extension.rows[*position];
                for column in &merged_columns {
                    if let Some(value) = extension_row.get(column) {
                        row.insert(column, value);
                    }
                }
            }
        }
        rows.push(row);
    }

    RowSet { columns, rows }
}

/// Normalize a free-form unit identifier to an integer key
///
/// The extracts carry identifiers like "1234.0"; parse as a real number and
/// truncate. Empty or unparseable text yields None.
pub fn normalize_unit_key(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed: f64 = trimmed.parse().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    Some(parsed.trunc() as i64)
}

fn key_of(raw: Option<&str>, normalization: KeyNormalization) -> Option<String> {
    let raw = raw?;
    match normalization {
        KeyNormalization::Exact => Some(raw.to_string()),
        KeyNormalization::Numeric => normalize_unit_key(raw).map(|k| k.to_string()),
    }
}
