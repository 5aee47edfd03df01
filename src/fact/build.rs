//! Building the fact table

use tracing::warn;

use crate::dimension::{value_tuple, KeyMapping};
use crate::registry::Registry;
use crate::row::CanonicalRow;
use super::error::FactError;
use super::types::{FactRow, FactTable, MissPolicy};

/// Build the fact table from the canonical rows and the dimension mappings
///
/// `mappings` must line up with `registry.dimensions`, one per dimension in
/// declaration order - the pipeline builds them that way. Emits exactly one
/// fact row per canonical row, in original order, with dense 1-based keys.
/// Measures are copied verbatim; each dimension reference is resolved through
/// its mapping by the row's own value-tuple.
pub fn build_fact(
    registry: &Registry,
    rows: &[CanonicalRow],
    mappings: &[KeyMapping],
    policy: MissPolicy,
) -> Result<FactTable, FactError> {
    if mappings.len() != registry.dimensions.len() {
        return Err(FactError::MappingMismatch {
            expected: registry.dimensions.len(),
            actual: mappings.len(),
        });
    }

    let mut fact_rows = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let key = index as u64 + 1;

        let measures = registry
            .measures
            .iter()
            .map(|measure| row.value(&measure.name).cloned())
            .collect();

        let mut dimension_keys = Vec::with_capacity(registry.dimensions.len());
        for (dimension, mapping) in registry.dimensions.iter().zip(mappings) {
            let tuple = value_tuple(row, dimension);
            match mapping.key_for(&tuple) {
                Some(surrogate) => dimension_keys.push(Some(surrogate)),
                None => {
                    warn!(
                        "fact row {} has no surrogate key in dimension '{}'",
                        key, dimension.name
                    );
                    if policy == MissPolicy::Fail {
                        return Err(FactError::KeyMiss {
                            dimension: dimension.name.clone(),
                            fact_key: key,
                        });
                    }
                    dimension_keys.push(None);
                }
            }
        }

        fact_rows.push(FactRow {
            key,
            measures,
            dimension_keys,
        });
    }

    Ok(FactTable {
        name: registry.fact_table_name(),
        key_column: registry.fact_key_column(),
        measure_columns: registry.measures.iter().map(|m| m.name.clone()).collect(),
        dimension_key_columns: registry.dimensions.iter().map(|d| d.key_column()).collect(),
        rows: fact_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::build_dimension;
    use crate::row::{FieldOutcome, NullReason, Value};

    fn registry() -> Registry {
        Registry::from_str(
            r#"
name: damage
dimensions:
  - name: place
    columns:
      - { name: street_name, type: "text(100)" }
  - name: person
    columns:
      - { name: age, type: int }
measures:
  - { name: damage_amount, type: float }
"#,
        )
        .unwrap()
    }

    fn canonical(street: &str, age: i64, damage: f64) -> CanonicalRow {
        let mut row = CanonicalRow::new();
        row.insert("street_name", FieldOutcome::Value(Value::Text(street.to_string())));
        row.insert("age", FieldOutcome::Value(Value::Int(age)));
        row.insert("damage_amount", FieldOutcome::Value(Value::Float(damage)));
        row
    }

    fn build_mappings(registry: &Registry, rows: &[CanonicalRow]) -> Vec<KeyMapping> {
        registry
            .dimensions
            .iter()
            .map(|d| build_dimension(rows, d).1)
            .collect()
    }

    #[test]
    fn test_fact_count_equals_canonical_count() {
        let registry = registry();
        let rows = vec![
            canonical("STATE ST", 34, 500.0),
            canonical("STATE ST", 51, 1200.0),
            canonical("CLARK ST", 34, 0.0),
        ];
        let mappings = build_mappings(&registry, &rows);

        let fact = build_fact(&registry, &rows, &mappings, MissPolicy::default()).unwrap();
        assert_eq!(fact.len(), 3);
        let keys: Vec<u64> = fact.rows.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![1, 2, 3]);
    }

    #[test]
    fn test_shared_tuples_reference_the_same_key() {
        let registry = registry();
        let rows = vec![canonical("STATE ST", 34, 1.0), canonical("STATE ST", 51, 2.0)];
        let mappings = build_mappings(&registry, &rows);

        let fact = build_fact(&registry, &rows, &mappings, MissPolicy::default()).unwrap();
        // Both rows share the place tuple -> same place_id
        assert_eq!(fact.rows[0].dimension_keys[0], Some(1));
        assert_eq!(fact.rows[1].dimension_keys[0], Some(1));
        // Distinct ages -> distinct person_ids
        assert_eq!(fact.rows[0].dimension_keys[1], Some(1));
        assert_eq!(fact.rows[1].dimension_keys[1], Some(2));
    }

    #[test]
    fn test_measures_copied_verbatim() {
        let registry = registry();
        let rows = vec![canonical("STATE ST", 34, 1500.50)];
        let mappings = build_mappings(&registry, &rows);

        let fact = build_fact(&registry, &rows, &mappings, MissPolicy::default()).unwrap();
        assert_eq!(fact.rows[0].measures, vec![Some(Value::Float(1500.50))]);
    }

    #[test]
    fn test_null_measure_stays_null() {
        let registry = registry();
        let mut row = canonical("STATE ST", 34, 0.0);
        row.insert("damage_amount", FieldOutcome::Null(NullReason::Empty));
        let rows = vec![row];
        let mappings = build_mappings(&registry, &rows);

        let fact = build_fact(&registry, &rows, &mappings, MissPolicy::default()).unwrap();
        assert_eq!(fact.rows[0].measures, vec![None]);
    }

    #[test]
    fn test_key_miss_resolves_to_null_by_default() {
        let registry = registry();
        let seen = vec![canonical("STATE ST", 34, 1.0)];
        let mappings = build_mappings(&registry, &seen);

        // A row the dimension stage never saw
        let unseen = vec![canonical("ELSEWHERE", 99, 1.0)];
        let fact = build_fact(&registry, &unseen, &mappings, MissPolicy::NullReference).unwrap();
        assert_eq!(fact.rows[0].dimension_keys, vec![None, None]);
    }

    #[test]
    fn test_key_miss_fails_under_fail_policy() {
        let registry = registry();
        let seen = vec![canonical("STATE ST", 34, 1.0)];
        let mappings = build_mappings(&registry, &seen);

        let unseen = vec![canonical("ELSEWHERE", 34, 1.0)];
        let err = build_fact(&registry, &unseen, &mappings, MissPolicy::Fail).unwrap_err();
        assert!(matches!(err, FactError::KeyMiss { ref dimension, fact_key: 1 } if dimension == "place"));
    }

    #[test]
    fn test_mapping_count_mismatch() {
        let registry = registry();
        let err = build_fact(&registry, &[], &[], MissPolicy::default()).unwrap_err();
        assert!(matches!(err, FactError::MappingMismatch { expected: 2, actual: 0 }));
    }

    #[test]
    fn test_header_layout() {
        let registry = registry();
        let rows = vec![canonical("STATE ST", 34, 1.0)];
        let mappings = build_mappings(&registry, &rows);
        let fact = build_fact(&registry, &rows, &mappings, MissPolicy::default()).unwrap();

        assert_eq!(
            fact.header(),
            vec!["DAMAGE_ID", "DAMAGE_AMOUNT", "PLACE_ID", "PERSON_ID"]
        );
    }
}
