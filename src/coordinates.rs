//! Validated geographic coordinates with a dual representation.
//!
//! A [`Coordinate`] holds a point as regular degrees (latitude -90..90,
//! longitude -180..180) and exposes the equivalent normalized form
//! (0.0 = South/West pole, 1.0 = North/East pole) used for proportional
//! placement on the map surface. Both forms always describe the same
//! physical point.
//!
//! Construction goes through validating factories only: a `Coordinate` is
//! either fully valid or was never produced. Out-of-range input is rejected,
//! never clamped.

use serde::Serialize;

use crate::constants::{
    MAX_LATITUDE, MAX_LONGITUDE, MAX_NORMALIZED, MIN_LATITUDE, MIN_LONGITUDE, MIN_NORMALIZED,
};

/// Validation failure for coordinate construction.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    #[error("latitude {0} is outside [{MIN_LATITUDE}, {MAX_LATITUDE}]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [{MIN_LONGITUDE}, {MAX_LONGITUDE}]")]
    LongitudeOutOfRange(f64),
    #[error("normalized latitude {0} is outside [{MIN_NORMALIZED}, {MAX_NORMALIZED}]")]
    NormalizedLatitudeOutOfRange(f64),
    #[error("normalized longitude {0} is outside [{MIN_NORMALIZED}, {MAX_NORMALIZED}]")]
    NormalizedLongitudeOutOfRange(f64),
}

/// Check a value against a symmetric bound: valid iff `-|bound| <= v <= |bound|`.
///
/// Serves both axes with the same primitive (bound 90 for latitude,
/// 180 for longitude). NaN fails both comparisons and is rejected.
pub(crate) fn symmetric_check(value: f64, bound: f64) -> bool {
    let high = bound.abs();
    -high <= value && value <= high
}

/// Scale a value from `[lo, hi]` into `[0, 1]`.
pub(crate) fn to_normalized(value: f64, lo: f64, hi: f64) -> f64 {
    (value - lo) / (hi - lo)
}

/// Scale a normalized value from `[0, 1]` back into `[lo, hi]`.
///
/// Exact inverse of [`to_normalized`] up to floating-point rounding.
pub(crate) fn from_normalized(normalized: f64, lo: f64, hi: f64) -> f64 {
    normalized * (hi - lo) + lo
}

fn is_proper_normalized(value: f64) -> bool {
    MIN_NORMALIZED <= value && value <= MAX_NORMALIZED
}

/// A validated geographic point.
///
/// Serializes as `{"latitude": f64, "longitude": f64}` in regular degrees;
/// the normalized form is derived and never part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from regular degrees.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !symmetric_check(latitude, MAX_LATITUDE) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !symmetric_check(longitude, MAX_LONGITUDE) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a coordinate from the normalized `[0, 1]` form.
    ///
    /// Out-of-range input fails; it is never clamped into range.
    pub fn from_normalized(
        normalized_latitude: f64,
        normalized_longitude: f64,
    ) -> Result<Self, CoordinateError> {
        if !is_proper_normalized(normalized_latitude) {
            return Err(CoordinateError::NormalizedLatitudeOutOfRange(
                normalized_latitude,
            ));
        }
        if !is_proper_normalized(normalized_longitude) {
            return Err(CoordinateError::NormalizedLongitudeOutOfRange(
                normalized_longitude,
            ));
        }
        Ok(Self {
            latitude: from_normalized(normalized_latitude, MIN_LATITUDE, MAX_LATITUDE),
            longitude: from_normalized(normalized_longitude, MIN_LONGITUDE, MAX_LONGITUDE),
        })
    }

    /// Latitude in regular degrees, -90.0 South through 90.0 North.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in regular degrees, -180.0 West through 180.0 East.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude scaled to 0.0 South through 1.0 North.
    pub fn normalized_latitude(&self) -> f64 {
        to_normalized(self.latitude, MIN_LATITUDE, MAX_LATITUDE)
    }

    /// Longitude scaled to 0.0 West through 1.0 East.
    pub fn normalized_longitude(&self) -> f64 {
        to_normalized(self.longitude, MIN_LONGITUDE, MAX_LONGITUDE)
    }
}

impl Default for Coordinate {
    /// The null island default the application starts from.
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_check_covers_both_axes() {
        assert!(symmetric_check(0.0, 90.0));
        assert!(symmetric_check(-90.0, 90.0));
        assert!(symmetric_check(90.0, 90.0));
        assert!(!symmetric_check(90.0001, 90.0));
        assert!(!symmetric_check(-90.0001, 90.0));
        assert!(symmetric_check(180.0, 180.0));
        assert!(!symmetric_check(-180.5, 180.0));
        // A negative bound means the same interval as its absolute value
        assert!(symmetric_check(45.0, -90.0));
        // NaN never validates
        assert!(!symmetric_check(f64::NAN, 90.0));
    }

    #[test]
    fn construction_rejects_out_of_domain_degrees() {
        assert_eq!(
            Coordinate::new(91.0, 0.0),
            Err(CoordinateError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            Coordinate::new(-90.5, 0.0),
            Err(CoordinateError::LatitudeOutOfRange(-90.5))
        );
        assert_eq!(
            Coordinate::new(0.0, 181.0),
            Err(CoordinateError::LongitudeOutOfRange(181.0))
        );
        assert_eq!(
            Coordinate::new(0.0, -360.0),
            Err(CoordinateError::LongitudeOutOfRange(-360.0))
        );
    }

    #[test]
    fn construction_accepts_domain_boundaries() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn from_normalized_rejects_out_of_range_without_clamping() {
        assert_eq!(
            Coordinate::from_normalized(1.0001, 0.5),
            Err(CoordinateError::NormalizedLatitudeOutOfRange(1.0001))
        );
        assert_eq!(
            Coordinate::from_normalized(0.5, -0.2),
            Err(CoordinateError::NormalizedLongitudeOutOfRange(-0.2))
        );
    }

    #[test]
    fn origin_normalizes_to_midpoint() {
        let origin = Coordinate::new(0.0, 0.0).unwrap();
        assert_eq!(origin.latitude(), 0.0);
        assert_eq!(origin.longitude(), 0.0);
        assert_eq!(origin.normalized_latitude(), 0.5);
        assert_eq!(origin.normalized_longitude(), 0.5);
    }

    #[test]
    fn normalized_poles_map_to_degree_extremes() {
        let north_east = Coordinate::from_normalized(1.0, 1.0).unwrap();
        assert_eq!(north_east.latitude(), 90.0);
        assert_eq!(north_east.longitude(), 180.0);

        let south_west = Coordinate::from_normalized(0.0, 0.0).unwrap();
        assert_eq!(south_west.latitude(), -90.0);
        assert_eq!(south_west.longitude(), -180.0);
    }

    #[test]
    fn both_representations_stay_consistent() {
        let coordinate = Coordinate::new(40.7128, -74.006).unwrap();
        let via_normalized = Coordinate::from_normalized(
            coordinate.normalized_latitude(),
            coordinate.normalized_longitude(),
        )
        .unwrap();
        assert!((via_normalized.latitude() - 40.7128).abs() < 1e-9);
        assert!((via_normalized.longitude() - (-74.006)).abs() < 1e-9);
    }

    #[test]
    fn serializes_regular_degrees_only() {
        let coordinate = Coordinate::new(-33.8688, 151.2093).unwrap();
        let json = serde_json::to_value(coordinate).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"latitude": -33.8688, "longitude": 151.2093})
        );
    }
}
