//! Longitude to sign mapping.
//!
//! The zodiac divides the ecliptic into 12 equal 30-degree segments starting
//! at 0 degrees Aries. Mapping is total over finite longitudes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{ZodiacSign, SIGN_ORDER};

pub const SIGN_SEGMENT_SIZE: f64 = 30.0;

#[derive(Error, Debug)]
pub enum ZodiacError {
    #[error("cannot map non-finite longitude {value} onto the zodiac")]
    InvalidLongitude { value: f64 },
}

/// A longitude expressed as a sign placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacPlacement {
    pub sign: ZodiacSign,
    /// Degrees into the sign, [0, 30).
    pub degrees_in_sign: f64,
    /// Normalized ecliptic longitude, [0, 360).
    pub absolute_degrees: f64,
}

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let mut normalized = value % 360.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }
    // Adding 360 to a tiny negative remainder rounds to exactly 360.
    if normalized >= 360.0 {
        normalized = 0.0;
    }
    normalized
}

/// Map an ecliptic longitude to its sign placement.
pub fn map_longitude(longitude: f64) -> Result<ZodiacPlacement, ZodiacError> {
    if !longitude.is_finite() {
        return Err(ZodiacError::InvalidLongitude { value: longitude });
    }
    let absolute = normalize_degrees(longitude);
    let index = (absolute / SIGN_SEGMENT_SIZE) as usize % 12;
    Ok(ZodiacPlacement {
        sign: SIGN_ORDER[index],
        degrees_in_sign: absolute % SIGN_SEGMENT_SIZE,
        absolute_degrees: absolute,
    })
}

/// Minimum step count between two signs on the wheel, 0-6.
pub fn sign_distance(a: ZodiacSign, b: ZodiacSign) -> u8 {
    let diff = (a.index() as i32 - b.index() as i32).abs();
    diff.min(12 - diff) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(370.0), 10.0);
    }

    #[test]
    fn test_segment_boundaries() {
        let just_under = map_longitude(29.999999).unwrap();
        assert_eq!(just_under.sign, ZodiacSign::Aries);
        let exact = map_longitude(30.0).unwrap();
        assert_eq!(exact.sign, ZodiacSign::Taurus);
        assert_eq!(exact.degrees_in_sign, 0.0);
    }

    #[test]
    fn test_tiny_negative_stays_below_360() {
        let normalized = normalize_degrees(-1e-14);
        assert!((0.0..360.0).contains(&normalized), "got {}", normalized);
        let placement = map_longitude(-1e-14).unwrap();
        assert_eq!(placement.sign, ZodiacSign::Aries);
        assert!(placement.absolute_degrees < 360.0);
        assert!(placement.degrees_in_sign < 30.0);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(map_longitude(f64::NAN).is_err());
        assert!(map_longitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_distance_symmetry() {
        for a in SIGN_ORDER {
            assert_eq!(sign_distance(a, a), 0);
            for b in SIGN_ORDER {
                assert_eq!(sign_distance(a, b), sign_distance(b, a));
                assert!(sign_distance(a, b) <= 6);
            }
        }
    }

    #[test]
    fn test_opposition_distance() {
        assert_eq!(sign_distance(ZodiacSign::Aries, ZodiacSign::Libra), 6);
        assert_eq!(sign_distance(ZodiacSign::Pisces, ZodiacSign::Aries), 1);
    }
}
