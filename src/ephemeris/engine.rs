//! The engine contract consumed by the position calculator.
//!
//! Everything upstream of the zodiac mapper goes through this trait so the
//! rest of the crate depends on a normalized numeric contract, never on a
//! particular ephemeris library's calling convention.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::path::Path;

use crate::zodiac::Planet;

use super::types::{EphemerisError, HouseSystem};

#[async_trait]
pub trait AstronomicalEngine: Send + Sync {
    /// Best-effort hint at where file-backed ephemeris data lives. Engines
    /// without data files ignore it.
    fn set_ephemeris_data_path(&self, _path: &Path) {}

    /// Continuous day count for the given UTC instant.
    fn julian_day(&self, instant: DateTime<Utc>) -> Result<f64, EphemerisError>;

    /// Geocentric ecliptic longitude of a body, degrees [0, 360).
    async fn ecliptic_longitude(&self, julian_day: f64, planet: Planet)
        -> Result<f64, EphemerisError>;

    /// First house cusp (the ascendant) for an instant and place, degrees
    /// [0, 360).
    async fn ascendant_degrees(
        &self,
        julian_day: f64,
        lat: f64,
        lng: f64,
        house_system: HouseSystem,
    ) -> Result<f64, EphemerisError>;
}

/// Pull a single numeric longitude out of a loosely shaped engine result.
///
/// This is the integration seam for [`AstronomicalEngine`] implementations
/// outside this crate that wrap JSON-speaking backends (sidecar processes,
/// HTTP ephemeris services). The built-in engines compute natively and do
/// not need it. Backends disagree on result shape: a bare number, an
/// array-indexed payload with longitude first, a field-named object
/// (`longitude` or `lon`), or either of those nested under `position` or
/// `data`. Anything else is rejected.
pub fn extract_longitude(raw: &Value) -> Result<f64, EphemerisError> {
    if let Some(value) = raw.as_f64() {
        if value.is_finite() {
            return Ok(value);
        }
    }
    if let Some(first) = raw.as_array().and_then(|a| a.first()) {
        if let Some(value) = first.as_f64() {
            if value.is_finite() {
                return Ok(value);
            }
        }
    }
    for key in ["longitude", "lon"] {
        if let Some(value) = raw.get(key).and_then(Value::as_f64) {
            if value.is_finite() {
                return Ok(value);
            }
        }
    }
    for key in ["position", "data"] {
        if let Some(inner) = raw.get(key) {
            if let Ok(value) = extract_longitude(inner) {
                return Ok(value);
            }
        }
    }
    Err(EphemerisError::UnrecognizedShape {
        raw: raw.to_string(),
    })
}
