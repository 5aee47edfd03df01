//! Root registry declaration

use serde::Deserialize;
use std::path::Path;
use super::dimension::{Column, Dimension};
use super::measure::Measure;
use super::types::ColumnType;
use crate::error::ParseError;

/// The star-schema declaration: dimensions, measures and the fact name
///
/// The registry is configuration, not logic, but its declarations are
/// load-bearing for every stage: a column absent here is invisible to
/// validation, dimension extraction and fact resolution. It is immutable
/// once constructed and passed explicitly to each stage.
#[derive(Debug, Clone, Deserialize)]
pub struct Registry {
    /// Base name of the fact table: "<name>_fact" with key "<name>_id"
    pub name: String,
    pub dimensions: Vec<Dimension>,
    pub measures: Vec<Measure>,
}

impl Registry {
    /// Load a registry from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let path_str = path.as_ref().display().to_string();
        let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
            path: path_str,
            source: e,
        })?;
        Self::from_str(&contents)
    }

    /// Parse a registry from a YAML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(yaml: &str) -> Result<Self, ParseError> {
        serde_yaml::from_str(yaml).map_err(ParseError::from)
    }

    /// Get a dimension by name
    pub fn get_dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    /// Get a measure by name
    pub fn get_measure(&self, name: &str) -> Option<&Measure> {
        self.measures.iter().find(|m| m.name == name)
    }

    /// All declared columns in registry iteration order: every dimension's
    /// columns first, then the measures
    pub fn declared_columns(&self) -> Vec<(&str, ColumnType)> {
        let mut columns: Vec<(&str, ColumnType)> = Vec::new();
        for dimension in &self.dimensions {
            for column in &dimension.columns {
                columns.push((column.name.as_str(), column.column_type));
            }
        }
        for measure in &self.measures {
            columns.push((measure.name.as_str(), measure.column_type));
        }
        columns
    }

    /// The fact table name (e.g. "damage_fact")
    pub fn fact_table_name(&self) -> String {
        format!("{}_fact", self.name)
    }

    /// The fact key column name (e.g. "damage_id")
    pub fn fact_key_column(&self) -> String {
        format!("{}_id", self.name)
    }

    /// The built-in Chicago crash data-mart declaration
    pub fn crash_datamart() -> Self {
        Registry {
            name: "damage".to_string(),
            dimensions: vec![
                dimension(
                    "place",
                    vec![
                        column("latitude", ColumnType::Float),
                        column("longitude", ColumnType::Float),
                        column("street_no", ColumnType::Int),
                        column("street_direction", ColumnType::Text(10)),
                        column("street_name", ColumnType::Text(100)),
                        column("beat_of_occurrence", ColumnType::Int),
                        column("beat_crimes_average", ColumnType::Int),
                    ],
                ),
                dimension(
                    "date",
                    vec![
                        column("day", ColumnType::Int),
                        column("month", ColumnType::Int),
                        column("year", ColumnType::Int),
                        column("hour", ColumnType::Int),
                        column("is_holiday", ColumnType::Bit),
                    ],
                ),
                dimension(
                    "crash",
                    vec![
                        column("crash_type", ColumnType::Text(50)),
                        column("report_type", ColumnType::Text(50)),
                        column("num_units", ColumnType::Int),
                        column("first_crash_type", ColumnType::Text(50)),
                        column("prim_contributory_cause", ColumnType::Text(100)),
                        column("sec_contributory_cause", ColumnType::Text(100)),
                    ],
                ),
                dimension(
                    "vehicle",
                    vec![
                        column("unit_type", ColumnType::Text(50)),
                        column("make", ColumnType::Text(100)),
                        column("model", ColumnType::Text(100)),
                        column("lic_plate_state", ColumnType::Text(20)),
                        column("vehicle_year", ColumnType::Int),
                        column("vehicle_defect", ColumnType::Text(50)),
                        column("vehicle_type", ColumnType::Text(50)),
                        column("vehicle_use", ColumnType::Text(50)),
                        column("travel_direction", ColumnType::Text(50)),
                        column("maneuver", ColumnType::Text(50)),
                        column("occupant_cnt", ColumnType::Int),
                        column("first_contact_point", ColumnType::Text(50)),
                    ],
                ),
                dimension(
                    "person",
                    vec![
                        column("city", ColumnType::Text(50)),
                        column("state", ColumnType::Text(50)),
                        column("sex", ColumnType::Text(10)),
                        column("age", ColumnType::Int),
                    ],
                ),
                dimension(
                    "road_condition",
                    vec![
                        column("posted_speed_limit", ColumnType::Int),
                        column("traffic_control_device", ColumnType::Text(50)),
                        column("device_condition", ColumnType::Text(50)),
                        column("road_defect", ColumnType::Text(50)),
                        column("trafficway_type", ColumnType::Text(50)),
                        column("alignment", ColumnType::Text(50)),
                        column("weather_condition", ColumnType::Text(50)),
                        column("lighting_condition", ColumnType::Text(50)),
                        column("roadway_surface_cond", ColumnType::Text(50)),
                    ],
                ),
                dimension(
                    "safety",
                    vec![
                        column("safety_equipment", ColumnType::Text(50)),
                        column("airbag_deployed", ColumnType::Text(50)),
                        column("ejection", ColumnType::Text(50)),
                        column("driver_action", ColumnType::Text(50)),
                        column("driver_vision", ColumnType::Text(50)),
                        column("physical_condition", ColumnType::Text(50)),
                        column("bac_result", ColumnType::Text(50)),
                    ],
                ),
                dimension(
                    "injuries",
                    vec![
                        column("most_severe_injury", ColumnType::Text(50)),
                        column("injuries_total", ColumnType::Int),
                        column("injuries_fatal", ColumnType::Int),
                        column("injuries_incapacitating", ColumnType::Int),
                        column("injuries_non_incapacitating", ColumnType::Int),
                        column("injuries_reported_not_evident", ColumnType::Int),
                        column("injuries_no_indication", ColumnType::Int),
                    ],
                ),
            ],
            measures: vec![Measure {
                name: "damage_amount".to_string(),
                column_type: ColumnType::Float,
            }],
        }
    }
}

fn column(name: &str, column_type: ColumnType) -> Column {
    Column {
        name: name.to_string(),
        column_type,
    }
}

fn dimension(name: &str, columns: Vec<Column>) -> Dimension {
    Dimension {
        name: name.to_string(),
        columns,
    }
}
