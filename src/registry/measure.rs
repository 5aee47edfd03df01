//! Measure declarations

use serde::Deserialize;
use super::types::ColumnType;

/// A measure declaration - a fact value stored once per fact row
#[derive(Debug, Clone, Deserialize)]
pub struct Measure {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}
