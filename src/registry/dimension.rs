//! Dimension and column declarations

use serde::Deserialize;
use super::types::ColumnType;

/// A declared column within a dimension
#[derive(Debug, Clone, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

/// A dimension declaration: a named, ordered list of columns
///
/// Column order is load-bearing: it governs value-tuple construction for
/// surrogate key assignment and the column order of the written dimension
/// table, so it must be stable.
#[derive(Debug, Clone, Deserialize)]
pub struct Dimension {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Dimension {
    /// Get a column by name
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// All column names in declaration order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// The surrogate key column name for this dimension (e.g. "place_id")
    pub fn key_column(&self) -> String {
        format!("{}_id", self.name)
    }

    /// The physical table name for this dimension (e.g. "place_dim")
    pub fn table_name(&self) -> String {
        format!("{}_dim", self.name)
    }
}
