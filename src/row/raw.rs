//! Raw rows as read from the extracts

use std::collections::HashMap;

/// A raw row: column name to raw text value
///
/// Column names are matched after upper-casing, so "rd_no" and "RD_NO"
/// address the same field. A missing key means the field is absent, which
/// downstream stages treat the same as empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, upper-casing the column name
    pub fn insert(&mut self, column: &str, value: impl Into<String>) {
        self.fields.insert(column.to_uppercase(), value.into());
    }

    /// Get a field's raw text, if present
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(&column.to_uppercase()).map(String::as_str)
    }

    /// Remove a field, returning its raw text
    pub fn remove(&mut self, column: &str) -> Option<String> {
        self.fields.remove(&column.to_uppercase())
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(&column.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Build a row from (column, value) pairs - mostly a test convenience
impl<C: AsRef<str>, V: Into<String>> FromIterator<(C, V)> for RawRow {
    fn from_iter<T: IntoIterator<Item = (C, V)>>(iter: T) -> Self {
        let mut row = RawRow::new();
        for (column, value) in iter {
            row.insert(column.as_ref(), value);
        }
        row
    }
}
