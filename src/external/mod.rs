//! External collaborators (contracts and pure implementations)
//!
//! The cleaning stage enriches rows with data that lives outside the
//! extracts. Geocoding and beat polygon lookup are injectable contracts;
//! the holiday calendar, the fuzzy name corrector and the crime averages
//! are pure and implemented here.

mod corrector;
mod crimes;
mod geocode;
mod holiday;

pub use corrector::NameCorrector;
pub use crimes::beat_crime_averages;
pub use geocode::{BeatResolver, Coordinates, Geocoder, NullBeatResolver, NullGeocoder};
pub use holiday::{HolidayCalendar, UsHolidays};
