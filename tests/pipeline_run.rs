//! Integration tests for the end-to-end pipeline
//!
//! Runs the pipeline over real files in a temp directory and asserts on the
//! written mart, including the rerun-idempotence guarantee.

mod common;

use std::fs;

use crashmart::pipeline::{run, Cleaning, PipelineConfig, PipelineError};
use crashmart::{read_rows, Registry};

#[test]
fn test_run_writes_every_mart_table() {
    let dir = tempfile::tempdir().unwrap();
    common::write_extracts(dir.path());
    let config = PipelineConfig::from_dir(dir.path());

    let report = run(&common::registry(), &config).unwrap();

    assert_eq!(report.joined_rows, 3);
    assert_eq!(report.fact_rows, 3);
    assert_eq!(
        report.dimension_rows,
        vec![
            ("person".to_string(), 2),
            ("crash".to_string(), 3),
            ("vehicle".to_string(), 3),
        ]
    );
    for table in ["person_dim", "crash_dim", "vehicle_dim", "damage_fact"] {
        assert!(config.out_dir.join(format!("{}.csv", table)).exists());
    }
}

#[test]
fn test_fact_rows_reference_dimension_keys() {
    let dir = tempfile::tempdir().unwrap();
    common::write_extracts(dir.path());
    let config = PipelineConfig::from_dir(dir.path());
    run(&common::registry(), &config).unwrap();

    let fact = read_rows(config.out_dir.join("damage_fact.csv")).unwrap();
    assert_eq!(
        fact.columns,
        vec!["DAMAGE_ID", "DAMAGE_AMOUNT", "PERSON_ID", "CRASH_ID", "VEHICLE_ID"]
    );
    assert_eq!(fact.len(), 3);

    // JC1 and JC3 share the person tuple (CHICAGO, 34)
    assert_eq!(fact.rows[0].get("PERSON_ID"), Some("1"));
    assert_eq!(fact.rows[2].get("PERSON_ID"), Some("1"));
    assert_eq!(fact.rows[1].get("PERSON_ID"), Some("2"));

    // JC2's unit id "1002.0" matched vehicle 1002 through normalization
    let vehicles = read_rows(config.out_dir.join("vehicle_dim.csv")).unwrap();
    let ford = vehicles.rows.iter().find(|r| r.get("MAKE") == Some("FORD")).unwrap();
    assert_eq!(fact.rows[1].get("VEHICLE_ID"), ford.get("VEHICLE_ID"));

    // JC3's "NaN" damage marker became a null measure
    assert_eq!(fact.rows[2].get("DAMAGE_AMOUNT"), Some(""));
    assert_eq!(fact.rows[0].get("DAMAGE_AMOUNT"), Some("1500.5"));
}

#[test]
fn test_unmatched_base_row_gets_null_extension_tuple() {
    let dir = tempfile::tempdir().unwrap();
    common::write_extracts(dir.path());
    let config = PipelineConfig::from_dir(dir.path());
    run(&common::registry(), &config).unwrap();

    // JC3 matched no crash, so the crash dimension holds an all-null tuple
    let crashes = read_rows(config.out_dir.join("crash_dim.csv")).unwrap();
    assert_eq!(crashes.len(), 3);
    assert_eq!(crashes.rows[2].get("CRASH_TYPE"), Some(""));
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    common::write_extracts(dir.path());
    let config = PipelineConfig::from_dir(dir.path());
    let registry = common::registry();

    run(&registry, &config).unwrap();
    let first: Vec<String> = ["person_dim", "crash_dim", "vehicle_dim", "damage_fact"]
        .iter()
        .map(|t| common::read_file(&config.out_dir.join(format!("{}.csv", t))))
        .collect();

    run(&registry, &config).unwrap();
    let second: Vec<String> = ["person_dim", "crash_dim", "vehicle_dim", "damage_fact"]
        .iter()
        .map(|t| common::read_file(&config.out_dir.join(format!("{}.csv", t))))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_missing_declared_column_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    common::write_extracts(dir.path());
    // Drop the AGE column the registry declares
    fs::write(
        dir.path().join("people.csv"),
        "RD_NO,VEHICLE_ID,CITY,DAMAGE_AMOUNT\nJC1,1001,CHICAGO,100\n",
    )
    .unwrap();
    let config = PipelineConfig::from_dir(dir.path());

    let err = run(&common::registry(), &config).unwrap_err();
    assert!(matches!(err, PipelineError::Validate(_)));
    assert!(err.to_string().contains("AGE"));
}

#[test]
fn test_cleaning_stage_supplies_the_date_dimension() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("people.csv"),
        "RD_NO,VEHICLE_ID,DAMAGE,DAMAGE_CATEGORY\nJC1,1001,,$500 OR LESS\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("crashes.csv"),
        "RD_NO,CRASH_DATE,DATE_POLICE_NOTIFIED\n\
         JC1,09/03/2018 02:30:00 PM,09/03/2018 03:00:00 PM\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("vehicles.csv"),
        "VEHICLE_ID,VEHICLE_YEAR\n1001,2015\n",
    )
    .unwrap();

    let registry = Registry::from_str(
        r#"
name: damage
dimensions:
  - name: date
    columns:
      - { name: day, type: int }
      - { name: month, type: int }
      - { name: year, type: int }
      - { name: hour, type: int }
      - { name: is_holiday, type: bit }
measures:
  - { name: damage_amount, type: float }
"#,
    )
    .unwrap();

    let mut config = PipelineConfig::from_dir(dir.path());
    config.cleaning = Some(Cleaning::default());
    let report = run(&registry, &config).unwrap();
    assert_eq!(report.fact_rows, 1);

    // 09/03/2018 is Labor Day; the cleaning stage derived the date columns
    let dates = read_rows(config.out_dir.join("date_dim.csv")).unwrap();
    assert_eq!(dates.len(), 1);
    assert_eq!(dates.rows[0].get("DAY"), Some("3"));
    assert_eq!(dates.rows[0].get("HOUR"), Some("14"));
    assert_eq!(dates.rows[0].get("IS_HOLIDAY"), Some("1"));

    // The empty damage amount was zero-filled for the low category
    let fact = read_rows(config.out_dir.join("damage_fact.csv")).unwrap();
    assert_eq!(fact.rows[0].get("DAMAGE_AMOUNT"), Some("0"));
}
