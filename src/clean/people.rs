//! Cleaning the People extract

use tracing::warn;

use crate::external::NameCorrector;
use crate::row::RawRow;
use crate::source::RowSet;

/// Clean the People extract in place
///
/// Renames DAMAGE to DAMAGE_AMOUNT, zero-fills the amount for the
/// "$500 OR LESS" damage category, rounds amounts to two decimals, and
/// optionally corrects city names against a reference set.
pub fn clean_people(rows: &mut RowSet, cities: Option<&NameCorrector>) {
    for column in &mut rows.columns {
        if column == "DAMAGE" {
            *column = "DAMAGE_AMOUNT".to_string();
        }
    }

    for row in &mut rows.rows {
        if let Some(damage) = row.remove("DAMAGE") {
            row.insert("DAMAGE_AMOUNT", damage);
        }
        fix_damage_amount(row);

        if let Some(corrector) = cities {
            if let Some(city) = row.get("CITY") {
                let corrected = corrector.correct(city);
                row.insert("CITY", corrected);
            }
        }
    }
}

fn fix_damage_amount(row: &mut RawRow) {
    let amount = row.get("DAMAGE_AMOUNT").unwrap_or("").trim().to_string();
    let category = row.get("DAMAGE_CATEGORY").unwrap_or("");

    if amount.is_empty() {
        if category == "$500 OR LESS" {
            row.insert("DAMAGE_AMOUNT", "0");
        } else {
            warn!("missing damage amount for category '{}'", category);
        }
        return;
    }

    match amount.parse::<f64>() {
        Ok(parsed) => {
            let rounded = (parsed * 100.0).round() / 100.0;
            row.insert("DAMAGE_AMOUNT", rounded.to_string());
        }
        Err(_) => warn!("unparseable damage amount '{}'", amount),
    }
}
