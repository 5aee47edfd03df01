//! Geographic collaborator contracts
//!
//! Geocoding and beat polygon lookup live outside the pipeline; the cleaning
//! stage only depends on these narrow contracts. Accuracy, rate limiting and
//! retries are the implementation's concern.

/// A WGS84 point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Resolve address components to coordinates
///
/// Invoked at most once per row needing coordinates. Returns None for
/// addresses the service cannot resolve (including timeouts); the row then
/// keeps whatever coordinates it already had.
pub trait Geocoder {
    fn locate(&self, street_no: &str, street_direction: &str, street_name: &str) -> Option<Coordinates>;
}

/// Resolve a point to the administrative beat containing it
pub trait BeatResolver {
    fn beat_containing(&self, point: Coordinates) -> Option<i64>;
}

/// A geocoder that resolves nothing - the default when no service is wired up
#[derive(Debug, Default, Clone, Copy)]
pub struct NullGeocoder;

impl Geocoder for NullGeocoder {
    fn locate(&self, _: &str, _: &str, _: &str) -> Option<Coordinates> {
        None
    }
}

/// A beat resolver that resolves nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBeatResolver;

impl BeatResolver for NullBeatResolver {
    fn beat_containing(&self, _: Coordinates) -> Option<i64> {
        None
    }
}
