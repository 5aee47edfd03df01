//! DDL generation (verb module)
//!
//! Renders CREATE TABLE statements for the declared star schema so the
//! written tables can be bulk-loaded into a warehouse. Dimension tables come
//! first since the fact table references their keys.

use crate::registry::{Dimension, Registry};

/// CREATE TABLE statements for every dimension table and the fact table,
/// in load order
pub fn create_table_statements(registry: &Registry) -> Vec<String> {
    let mut statements: Vec<String> = registry
        .dimensions
        .iter()
        .map(dimension_table)
        .collect();
    statements.push(fact_table(registry));
    statements
}

fn dimension_table(dimension: &Dimension) -> String {
    let mut columns = vec![format!("{} INT PRIMARY KEY", dimension.key_column())];
    for column in &dimension.columns {
        columns.push(format!("{} {}", column.name, column.column_type.sql_type()));
    }
    format!(
        "CREATE TABLE {} ({});",
        dimension.table_name(),
        columns.join(", ")
    )
}

fn fact_table(registry: &Registry) -> String {
    let mut columns = vec![format!("{} INT PRIMARY KEY", registry.fact_key_column())];
    for measure in &registry.measures {
        columns.push(format!("{} {}", measure.name, measure.column_type.sql_type()));
    }
    for dimension in &registry.dimensions {
        columns.push(format!("{} INT", dimension.key_column()));
    }
    format!(
        "CREATE TABLE {} ({});",
        registry.fact_table_name(),
        columns.join(", ")
    )
}
