//! Required-column check

use tracing::warn;

use crate::registry::Registry;
use crate::source::RowSet;
use super::error::ValidateError;

/// Verify every declared column is present in the joined extract
///
/// Runs before any row is processed. A missing declared column is fatal and
/// the error lists both the missing columns and the source columns nothing
/// declares. When nothing is missing, unused columns are only logged.
pub fn check_columns(registry: &Registry, rows: &RowSet) -> Result<(), ValidateError> {
    let required: Vec<String> = registry
        .declared_columns()
        .iter()
        .map(|(name, _)| name.to_uppercase())
        .collect();

    let missing: Vec<String> = required
        .iter()
        .filter(|column| !rows.columns.contains(column))
        .cloned()
        .collect();
    let unused: Vec<String> = rows
        .columns
        .iter()
        .filter(|column| !required.contains(column))
        .cloned()
        .collect();

    if !missing.is_empty() {
        return Err(ValidateError::MissingColumns { missing, unused });
    }
    if !unused.is_empty() {
        warn!("source columns not declared in the registry: [{}]", unused.join(", "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::from_str(
            r#"
name: damage
dimensions:
  - name: person
    columns:
      - { name: city, type: "text(50)" }
      - { name: age, type: int }
measures:
  - { name: damage_amount, type: float }
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_all_present_passes() {
        let rows = RowSet::new(&["CITY", "AGE", "DAMAGE_AMOUNT"]);
        assert!(check_columns(&registry(), &rows).is_ok());
    }

    #[test]
    fn test_unused_columns_are_tolerated() {
        let rows = RowSet::new(&["CITY", "AGE", "DAMAGE_AMOUNT", "RD_NO"]);
        assert!(check_columns(&registry(), &rows).is_ok());
    }

    #[test]
    fn test_missing_column_is_fatal_and_listed() {
        let rows = RowSet::new(&["CITY", "RD_NO"]);
        let err = check_columns(&registry(), &rows).unwrap_err();
        let ValidateError::MissingColumns { missing, unused } = err;
        assert_eq!(missing, vec!["AGE", "DAMAGE_AMOUNT"]);
        assert_eq!(unused, vec!["RD_NO"]);
    }

    #[test]
    fn test_error_display_lists_both() {
        let rows = RowSet::new(&["CITY", "RD_NO"]);
        let message = check_columns(&registry(), &rows).unwrap_err().to_string();
        assert!(message.contains("AGE"));
        assert!(message.contains("DAMAGE_AMOUNT"));
        assert!(message.contains("RD_NO"));
    }
}
