//! Per-row casting against the registry

use tracing::warn;

use crate::registry::{ColumnType, Registry};
use crate::row::{CanonicalRow, FieldOutcome, NullReason, RawRow, Value};

/// The literal some upstream tools write for missing data
const MISSING_MARKER: &str = "NaN";

/// Validate a raw row against the registry's declared columns
///
/// Iterates every dimension's columns, then the measures, and casts each raw
/// value to its declared type. Casting is best-effort: a malformed value is
/// replaced with a tagged null and logged, never kept as raw text and never
/// fatal for the row. Partial data beats dropping the row.
pub fn validate_row(registry: &Registry, row: &RawRow) -> CanonicalRow {
    let mut canonical = CanonicalRow::new();
    for (column, column_type) in registry.declared_columns() {
        let outcome = cast_field(row.get(column), column_type, column);
        canonical.insert(column, outcome);
    }
    canonical
}

/// Validate every row, preserving order
pub fn validate_rows(registry: &Registry, rows: &[RawRow]) -> Vec<CanonicalRow> {
    rows.iter().map(|row| validate_row(registry, row)).collect()
}

fn cast_field(raw: Option<&str>, column_type: ColumnType, column: &str) -> FieldOutcome {
    let Some(raw) = raw else {
        return FieldOutcome::Null(NullReason::Missing);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldOutcome::Null(NullReason::Empty);
    }
    if trimmed == MISSING_MARKER {
        return FieldOutcome::Null(NullReason::MissingMarker);
    }

    match column_type {
        // Integers arrive as decimal text that may carry a fractional
        // suffix ("26.0"); truncate it.
        ColumnType::Int => match trimmed.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => FieldOutcome::Value(Value::Int(parsed.trunc() as i64)),
            _ => {
                warn!("could not cast '{}' to {} for column {}", raw, column_type, column);
                FieldOutcome::Null(NullReason::CastFailed)
            }
        },
        ColumnType::Float => match trimmed.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => FieldOutcome::Value(Value::Float(parsed)),
            _ => {
                warn!("could not cast '{}' to {} for column {}", raw, column_type, column);
                FieldOutcome::Null(NullReason::CastFailed)
            }
        },
        ColumnType::Text(_) => FieldOutcome::Value(Value::Text(trimmed.to_string())),
        ColumnType::Bit => match trimmed {
            "1" | "True" | "TRUE" => FieldOutcome::Value(Value::Bit(true)),
            "0" | "False" | "FALSE" => FieldOutcome::Value(Value::Bit(false)),
            _ => {
                warn!("could not cast '{}' to {} for column {}", raw, column_type, column);
                FieldOutcome::Null(NullReason::UnrecognizedBit)
            }
        },
    }
}
