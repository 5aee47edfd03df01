//! Cleaning the Vehicles extract

use tracing::warn;

use crate::external::NameCorrector;
use crate::source::RowSet;

/// Model years outside this range are data-entry noise and are cleared
const VEHICLE_YEAR_RANGE: std::ops::RangeInclusive<i64> = 1900..=2019;

/// Clean the Vehicles extract in place
///
/// Clears implausible vehicle model years and optionally corrects license
/// plate state codes against a reference set.
pub fn clean_vehicles(rows: &mut RowSet, plate_states: Option<&NameCorrector>) {
    for row in &mut rows.rows {
        if let Some(raw) = row.get("VEHICLE_YEAR") {
            let raw = raw.trim();
            if !raw.is_empty() && !is_plausible_year(raw) {
                warn!("clearing implausible vehicle year '{}'", raw);
                row.insert("VEHICLE_YEAR", "");
            }
        }

        if let Some(corrector) = plate_states {
            if let Some(state) = row.get("LIC_PLATE_STATE") {
                let corrected = corrector.correct(state);
                row.insert("LIC_PLATE_STATE", corrected);
            }
        }
    }
}

fn is_plausible_year(raw: &str) -> bool {
    // years arrive as "2015" or "2015.0" depending on the export
    raw.parse::<f64>()
        .ok()
        .filter(|y| y.is_finite() && y.fract() == 0.0)
        .map(|y| VEHICLE_YEAR_RANGE.contains(&(y as i64)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::RawRow;

    fn vehicles(rows: Vec<RawRow>) -> RowSet {
        let mut set = RowSet::new(&["VEHICLE_ID", "VEHICLE_YEAR", "LIC_PLATE_STATE"]);
        set.rows = rows;
        set
    }

    #[test]
    fn test_plausible_year_kept() {
        let mut set = vehicles(vec![RawRow::from_iter([("VEHICLE_YEAR", "2015")])]);
        clean_vehicles(&mut set, None);
        assert_eq!(set.rows[0].get("VEHICLE_YEAR"), Some("2015"));
    }

    #[test]
    fn test_out_of_range_year_cleared() {
        let mut set = vehicles(vec![
            RawRow::from_iter([("VEHICLE_YEAR", "1776")]),
            RawRow::from_iter([("VEHICLE_YEAR", "2115")]),
            RawRow::from_iter([("VEHICLE_YEAR", "unknown")]),
        ]);
        clean_vehicles(&mut set, None);
        for row in &set.rows {
            assert_eq!(row.get("VEHICLE_YEAR"), Some(""));
        }
    }

    #[test]
    fn test_empty_year_left_alone() {
        let mut set = vehicles(vec![RawRow::from_iter([("VEHICLE_YEAR", "")])]);
        clean_vehicles(&mut set, None);
        assert_eq!(set.rows[0].get("VEHICLE_YEAR"), Some(""));
    }

    #[test]
    fn test_plate_state_correction() {
        let corrector = NameCorrector::new(["IL", "IN", "WI"]);
        let mut set = vehicles(vec![RawRow::from_iter([
            ("VEHICLE_YEAR", "2015"),
            ("LIC_PLATE_STATE", "IL"),
        ])]);
        clean_vehicles(&mut set, Some(&corrector));
        assert_eq!(set.rows[0].get("LIC_PLATE_STATE"), Some("IL"));
    }
}
