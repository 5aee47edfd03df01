//! Per-beat crime averages from a crimes extract

use std::collections::HashMap;
use crate::source::RowSet;

/// Average yearly crime count per beat
///
/// Expects a crimes extract with YEAR and BEAT columns, counts incidents per
/// beat per year, and averages over the years each beat appears in. Rows with
/// an unparseable year or beat are skipped.
pub fn beat_crime_averages(rows: &RowSet) -> HashMap<i64, i64> {
    let mut counts: HashMap<i64, HashMap<i64, i64>> = HashMap::new();
    for row in &rows.rows {
        let Some(year) = row.get("YEAR").and_then(|v| v.trim().parse::<i64>().ok()) else {
            continue;
        };
        let Some(beat) = row.get("BEAT").and_then(|v| v.trim().parse::<i64>().ok()) else {
            continue;
        };
        *counts.entry(beat).or_default().entry(year).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(beat, years)| {
            let total: i64 = years.values().sum();
            (beat, total / years.len() as i64)
        })
        .collect()
}
