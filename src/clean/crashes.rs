//! Cleaning the Crashes extract

use std::collections::HashMap;

use tracing::warn;

use crate::external::{BeatResolver, Coordinates, Geocoder, HolidayCalendar};
use crate::join::normalize_unit_key;
use crate::row::RawRow;
use crate::source::RowSet;
use super::date::split_datetime;
use super::error::CleanError;

/// Chicago bounding box. Coordinates outside it are treated as bogus and
/// re-geocoded from the street address.
const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = 41.644..=42.023;
const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -87.940..=-87.524;

const DERIVED_COLUMNS: [&str; 11] = [
    "DAY",
    "MONTH",
    "YEAR",
    "HOUR",
    "POLICE_NOTIFY_DAY",
    "POLICE_NOTIFY_MONTH",
    "POLICE_NOTIFY_YEAR",
    "POLICE_NOTIFY_HOUR",
    "IS_HOLIDAY",
    "POLICE_NOTIFY_IS_HOLIDAY",
    "BEAT_CRIMES_AVERAGE",
];

/// Clean the Crashes extract in place
///
/// Splits the crash and police-notification timestamps into date dimension
/// components, flags holidays, repairs missing or out-of-area coordinates,
/// resolves missing beats, and annotates each row with the beat's average
/// yearly crime count. A malformed timestamp aborts the pass.
pub fn clean_crashes(
    rows: &mut RowSet,
    calendar: &dyn HolidayCalendar,
    geocoder: &dyn Geocoder,
    beats: &dyn BeatResolver,
    crime_averages: &HashMap<i64, i64>,
) -> Result<(), CleanError> {
    for required in ["CRASH_DATE", "DATE_POLICE_NOTIFIED"] {
        if !rows.has_column(required) {
            return Err(CleanError::MissingColumn {
                column: required.to_string(),
            });
        }
    }
    for column in DERIVED_COLUMNS {
        rows.add_column(column);
    }

    for row in &mut rows.rows {
        split_dates(row, calendar)?;
        fix_coordinates(row, geocoder);
        fix_beat(row, beats);
        annotate_crimes(row, crime_averages);
    }
    Ok(())
}

fn split_dates(row: &mut RawRow, calendar: &dyn HolidayCalendar) -> Result<(), CleanError> {
    let crash = split_datetime("CRASH_DATE", row.get("CRASH_DATE").unwrap_or(""))?;
    row.insert("DAY", crash.day.to_string());
    row.insert("MONTH", crash.month.to_string());
    row.insert("YEAR", crash.year.to_string());
    row.insert("HOUR", crash.hour.to_string());
    row.insert("IS_HOLIDAY", flag(calendar.is_holiday(crash.date)));

    let notified = split_datetime(
        "DATE_POLICE_NOTIFIED",
        row.get("DATE_POLICE_NOTIFIED").unwrap_or(""),
    )?;
    row.insert("POLICE_NOTIFY_DAY", notified.day.to_string());
    row.insert("POLICE_NOTIFY_MONTH", notified.month.to_string());
    row.insert("POLICE_NOTIFY_YEAR", notified.year.to_string());
    row.insert("POLICE_NOTIFY_HOUR", notified.hour.to_string());
    row.insert(
        "POLICE_NOTIFY_IS_HOLIDAY",
        flag(calendar.is_holiday(notified.date)),
    );
    Ok(())
}

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Re-geocode rows whose coordinates are missing or outside the city
fn fix_coordinates(row: &mut RawRow, geocoder: &dyn Geocoder) {
    if coordinates_of(row).is_some() {
        return;
    }

    let street_no = row.get("STREET_NO").unwrap_or("").trim().to_string();
    let direction = row.get("STREET_DIRECTION").unwrap_or("").trim().to_string();
    let street = row.get("STREET_NAME").unwrap_or("").trim().to_string();
    if street.is_empty() {
        return;
    }

    match geocoder.locate(&street_no, &direction, &street) {
        Some(point) => {
            row.insert("LATITUDE", point.latitude.to_string());
            row.insert("LONGITUDE", point.longitude.to_string());
            row.insert(
                "LOCATION",
                format!("POINT ({} {})", point.longitude, point.latitude),
            );
        }
        None => warn!("could not geocode '{} {} {}'", street_no, direction, street),
    }
}

/// Resolve the beat from coordinates when the extract left it empty,
/// then normalize it to a plain integer ("1935.0" becomes "1935")
fn fix_beat(row: &mut RawRow, beats: &dyn BeatResolver) {
    let current = row.get("BEAT_OF_OCCURRENCE").unwrap_or("").trim().to_string();
    if current.is_empty() {
        if let Some(point) = coordinates_of(row) {
            match beats.beat_containing(point) {
                Some(beat) => row.insert("BEAT_OF_OCCURRENCE", beat.to_string()),
                None => warn!(
                    "no beat contains ({}, {})",
                    point.latitude, point.longitude
                ),
            }
        }
        return;
    }

    if let Some(beat) = normalize_unit_key(&current) {
        row.insert("BEAT_OF_OCCURRENCE", beat.to_string());
    }
}

fn annotate_crimes(row: &mut RawRow, crime_averages: &HashMap<i64, i64>) {
    let average = row
        .get("BEAT_OF_OCCURRENCE")
        .and_then(normalize_unit_key)
        .and_then(|beat| crime_averages.get(&beat));
    match average {
        Some(average) => row.insert("BEAT_CRIMES_AVERAGE", average.to_string()),
        None => row.insert("BEAT_CRIMES_AVERAGE", ""),
    }
}

/// The row's coordinates, if present and inside the city bounding box
fn coordinates_of(row: &RawRow) -> Option<Coordinates> {
    let latitude: f64 = row.get("LATITUDE")?.trim().parse().ok()?;
    let longitude: f64 = row.get("LONGITUDE")?.trim().parse().ok()?;
    if LATITUDE_RANGE.contains(&latitude) && LONGITUDE_RANGE.contains(&longitude) {
        Some(Coordinates {
            latitude,
            longitude,
        })
    } else {
        None
    }
}
