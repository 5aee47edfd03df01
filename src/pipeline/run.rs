//! End-to-end pipeline run

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::clean::{clean_crashes, clean_people, clean_vehicles};
use crate::dimension::{build_dimension, KeyMapping};
use crate::external::{
    BeatResolver, Geocoder, HolidayCalendar, NameCorrector, NullBeatResolver, NullGeocoder,
    UsHolidays,
};
use crate::fact::{build_fact, FactTable, MissPolicy};
use crate::join::{left_join, KeyNormalization};
use crate::registry::Registry;
use crate::row::Value;
use crate::source::{read_rows, write_table};
use crate::validate::{check_columns, validate_rows};
use super::error::PipelineError;

/// Collaborators and reference data for the cleaning stage
///
/// The defaults clean offline: statutory US holidays, no geocoding, no beat
/// resolution, no crime averages, no name correction.
pub struct Cleaning {
    pub calendar: Box<dyn HolidayCalendar>,
    pub geocoder: Box<dyn Geocoder>,
    pub beats: Box<dyn BeatResolver>,
    pub crime_averages: HashMap<i64, i64>,
    pub cities: Option<NameCorrector>,
    pub plate_states: Option<NameCorrector>,
}

impl Default for Cleaning {
    fn default() -> Self {
        Cleaning {
            calendar: Box::new(UsHolidays),
            geocoder: Box::new(NullGeocoder),
            beats: Box::new(NullBeatResolver),
            crime_averages: HashMap::new(),
            cities: None,
            plate_states: None,
        }
    }
}

/// A pipeline run's inputs and knobs
///
/// `cleaning: None` means the extracts are already clean and go straight to
/// the joins.
pub struct PipelineConfig {
    pub people: PathBuf,
    pub crashes: PathBuf,
    pub vehicles: PathBuf,
    pub out_dir: PathBuf,
    pub miss_policy: MissPolicy,
    pub cleaning: Option<Cleaning>,
}

impl PipelineConfig {
    /// A config over one directory holding people.csv, crashes.csv and
    /// vehicles.csv, writing the mart next to them under `mart/`
    pub fn from_dir<P: Into<PathBuf>>(dir: P) -> Self {
        let dir = dir.into();
        PipelineConfig {
            people: dir.join("people.csv"),
            crashes: dir.join("crashes.csv"),
            vehicles: dir.join("vehicles.csv"),
            out_dir: dir.join("mart"),
            miss_policy: MissPolicy::default(),
            cleaning: None,
        }
    }
}

/// Counts from a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Rows in the fully joined extract (equals the People row count)
    pub joined_rows: usize,
    /// Unique rows written per dimension, in registry order
    pub dimension_rows: Vec<(String, usize)>,
    pub fact_rows: usize,
}

/// Run the pipeline: extracts in, star-schema mart files out
pub fn run(registry: &Registry, config: &PipelineConfig) -> Result<RunReport, PipelineError> {
    // 1. Read the three extracts.
    let mut people = read_rows(&config.people)?;
    let mut crashes = read_rows(&config.crashes)?;
    let mut vehicles = read_rows(&config.vehicles)?;
    info!(
        "read extracts: {} people, {} crashes, {} vehicles",
        people.len(),
        crashes.len(),
        vehicles.len()
    );

    // 2. Clean each extract in place, when configured.
    if let Some(cleaning) = &config.cleaning {
        clean_people(&mut people, cleaning.cities.as_ref());
        clean_vehicles(&mut vehicles, cleaning.plate_states.as_ref());
        clean_crashes(
            &mut crashes,
            cleaning.calendar.as_ref(),
            cleaning.geocoder.as_ref(),
            cleaning.beats.as_ref(),
            &cleaning.crime_averages,
        )?;
    }

    // 3. Join: People with Crashes on the report number, then the result
    //    with Vehicles on the normalized unit id.
    let joined = left_join(&people, &crashes, "RD_NO", "RD_NO", KeyNormalization::Exact);
    let joined = left_join(
        &joined,
        &vehicles,
        "VEHICLE_ID",
        "VEHICLE_ID",
        KeyNormalization::Numeric,
    );

    // 4. Fatal column check, then per-field validation.
    check_columns(registry, &joined)?;
    let canonical = validate_rows(registry, &joined.rows);

    fs::create_dir_all(&config.out_dir).map_err(|e| PipelineError::OutDir {
        path: config.out_dir.display().to_string(),
        source: e,
    })?;

    // 5. Build and write each dimension, keeping its key mapping for the
    //    fact stage.
    let mut mappings: Vec<KeyMapping> = Vec::with_capacity(registry.dimensions.len());
    let mut dimension_rows = Vec::with_capacity(registry.dimensions.len());
    for dimension in &registry.dimensions {
        let (table, mapping) = build_dimension(&canonical, dimension);
        let path = config.out_dir.join(format!("{}.csv", dimension.table_name()));
        let rows = table.rows.iter().map(|row| {
            let mut record = Vec::with_capacity(row.values.len() + 1);
            record.push(row.key.to_string());
            record.extend(row.values.iter().map(|v| Value::render(v.as_ref())));
            record
        });
        write_table(&path, &table.header(), rows)?;
        info!("wrote {}: {} rows", dimension.table_name(), table.len());
        dimension_rows.push((dimension.name.clone(), table.len()));
        mappings.push(mapping);
    }

    // 6. Build and write the fact table.
    let fact = build_fact(registry, &canonical, &mappings, config.miss_policy)?;
    write_fact(&config.out_dir, &fact)?;
    info!("wrote {}: {} rows", fact.name, fact.len());

    Ok(RunReport {
        joined_rows: joined.len(),
        dimension_rows,
        fact_rows: fact.len(),
    })
}

fn write_fact(out_dir: &std::path::Path, fact: &FactTable) -> Result<(), PipelineError> {
    let path = out_dir.join(format!("{}.csv", fact.name));
    let rows = fact.rows.iter().map(|row| {
        let mut record =
            Vec::with_capacity(1 + row.measures.len() + row.dimension_keys.len());
        record.push(row.key.to_string());
        record.extend(row.measures.iter().map(|v| Value::render(v.as_ref())));
        record.extend(
            row.dimension_keys
                .iter()
                .map(|k| k.map(|k| k.to_string()).unwrap_or_default()),
        );
        record
    });
    write_table(&path, &fact.header(), rows)?;
    Ok(())
}
