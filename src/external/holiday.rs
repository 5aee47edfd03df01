//! Public holiday calendar

use chrono::{Datelike, NaiveDate, Weekday};

/// Answers whether a date is a public holiday for a fixed locale
pub trait HolidayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

/// US federal holidays
///
/// Marks the statutory dates only; holidays falling on a weekend are not
/// shifted to their observed weekday.
#[derive(Debug, Default, Clone, Copy)]
pub struct UsHolidays;

impl HolidayCalendar for UsHolidays {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        let year = date.year();
        let fixed = [
            (1, 1),   // New Year's Day
            (7, 4),   // Independence Day
            (11, 11), // Veterans Day
            (12, 25), // Christmas Day
        ];
        if fixed.iter().any(|&(m, d)| date.month() == m && date.day() == d) {
            return true;
        }
        // Juneteenth became a federal holiday in 2021
        if year >= 2021 && date.month() == 6 && date.day() == 19 {
            return true;
        }

        let floating = [
            nth_weekday(year, 1, Weekday::Mon, 3),  // Martin Luther King Jr. Day
            nth_weekday(year, 2, Weekday::Mon, 3),  // Washington's Birthday
            last_weekday(year, 5, Weekday::Mon),    // Memorial Day
            nth_weekday(year, 9, Weekday::Mon, 1),  // Labor Day
            nth_weekday(year, 10, Weekday::Mon, 2), // Columbus Day
            nth_weekday(year, 11, Weekday::Thu, 4), // Thanksgiving
        ];
        floating.into_iter().flatten().any(|holiday| holiday == date)
    }
}

/// The nth occurrence of a weekday in a month (1-based)
fn nth_weekday(year: i32, month: u32, weekday: Weekday, nth: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = (7 + weekday.num_days_from_monday() - first.weekday().num_days_from_monday()) % 7;
    let day = 1 + offset + (nth - 1) * 7;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// The last occurrence of a weekday in a month
fn last_weekday(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let last_day = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?.pred_opt()?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?.pred_opt()?
    };
    let offset = (7 + last_day.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    last_day.checked_sub_days(chrono::Days::new(offset as u64))
}
