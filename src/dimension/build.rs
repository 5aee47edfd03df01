//! Building dimension tables with surrogate keys

use crate::registry::Dimension;
use crate::row::CanonicalRow;
use super::types::{DimensionRow, DimensionTable, KeyMapping, ValueTuple};

/// A canonical row's value-tuple over a dimension's columns
///
/// Tuple construction is order-sensitive per the registry's column order and
/// is the single convention shared by the dimension and fact builders.
pub fn value_tuple(row: &CanonicalRow, dimension: &Dimension) -> ValueTuple {
    dimension
        .columns
        .iter()
        .map(|column| row.value(&column.name).cloned())
        .collect()
}

/// Build one dimension table and its surrogate-key mapping
///
/// Walks the canonical rows once: the first occurrence of a value-tuple gets
/// the next dense key (1-based) and a table row; repeats reuse the existing
/// key. Table and mapping come out of the same pass, so they always agree on
/// key assignment.
pub fn build_dimension(rows: &[CanonicalRow], dimension: &Dimension) -> (DimensionTable, KeyMapping) {
    let mut mapping = KeyMapping::new();
    let mut table_rows = Vec::new();

    for row in rows {
        let tuple = value_tuple(row, dimension);
        let (key, first_seen) = mapping.assign(&tuple);
        if first_seen {
            table_rows.push(DimensionRow { key, values: tuple });
        }
    }

    let table = DimensionTable {
        name: dimension.name.clone(),
        key_column: dimension.key_column(),
        columns: dimension.columns.iter().map(|c| c.name.clone()).collect(),
        rows: table_rows,
    };
    (table, mapping)
}
