//! Column type definitions for the registry

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Declared types a registry column can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Float,
    /// Bounded-length text
    Text(u32),
    /// Boolean bit
    Bit,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Int => write!(f, "int"),
            ColumnType::Float => write!(f, "float"),
            ColumnType::Text(len) => write!(f, "text({})", len),
            ColumnType::Bit => write!(f, "bit"),
        }
    }
}

/// Error when parsing a column type string
#[derive(Debug, Clone)]
pub struct ParseColumnTypeError {
    pub input: String,
    pub message: String,
}

impl fmt::Display for ParseColumnTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid column type '{}': {}", self.input, self.message)
    }
}

impl std::error::Error for ParseColumnTypeError {}

impl FromStr for ColumnType {
    type Err = ParseColumnTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();

        // Bounded text carries its length in parentheses
        for prefix in ["text(", "nvarchar(", "varchar("] {
            if lower.starts_with(prefix) && lower.ends_with(')') {
                return parse_text(s, &lower[prefix.len()..lower.len() - 1]);
            }
        }

        match lower.as_str() {
            "int" | "integer" | "bigint" => Ok(ColumnType::Int),
            "float" | "double" | "real" => Ok(ColumnType::Float),
            "bit" | "bool" | "boolean" => Ok(ColumnType::Bit),
            _ => Err(ParseColumnTypeError {
                input: s.to_string(),
                message: "unknown type".to_string(),
            }),
        }
    }
}

fn parse_text(input: &str, len: &str) -> Result<ColumnType, ParseColumnTypeError> {
    let len: u32 = len.trim().parse().map_err(|_| ParseColumnTypeError {
        input: input.to_string(),
        message: "invalid length".to_string(),
    })?;

    if len == 0 {
        return Err(ParseColumnTypeError {
            input: input.to_string(),
            message: "length must be positive".to_string(),
        });
    }

    Ok(ColumnType::Text(len))
}

// Custom deserialize from string
impl<'de> Deserialize<'de> for ColumnType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ColumnType::from_str(&s).map_err(serde::de::Error::custom)
    }
}

// Serialize back to string
impl Serialize for ColumnType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl ColumnType {
    /// Check if this is a numeric type (integer or floating point)
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Int | ColumnType::Float)
    }

    /// The warehouse column type this declaration maps to
    pub fn sql_type(&self) -> String {
        match self {
            ColumnType::Int => "INT".to_string(),
            ColumnType::Float => "FLOAT".to_string(),
            ColumnType::Text(len) => format!("NVARCHAR({})", len),
            ColumnType::Bit => "BIT".to_string(),
        }
    }
}
