//! Swiss Ephemeris backed engine, behind the `swisseph` cargo feature.
//!
//! When the data files are missing the library computes from its built-in
//! Moshier series instead; that fallback is logged once and otherwise
//! silent, per the engine contract.

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use swisseph::swe::{calc_ut, houses_ex, julday};
use swisseph::AscMc;

use crate::zodiac::{normalize_degrees, Planet};

use super::engine::AstronomicalEngine;
use super::types::{EphemerisError, HouseSystem};

// Swiss Ephemeris body codes.
const SWE_BODIES: &[(Planet, u32)] = &[
    (Planet::Sun, 0),
    (Planet::Moon, 1),
    (Planet::Mercury, 2),
    (Planet::Venus, 3),
    (Planet::Mars, 4),
    (Planet::Jupiter, 5),
    (Planet::Saturn, 6),
];

// FLG_SWIEPH
const SWE_FLAGS: u32 = 2;
// Gregorian calendar flag for julday.
const GREG_CAL: i32 = 1;

pub struct SwissEphemerisAdapter {
    data_path: Mutex<Option<PathBuf>>,
}

impl SwissEphemerisAdapter {
    pub fn new(data_path: Option<PathBuf>) -> Self {
        match &data_path {
            Some(path) if !path.exists() => {
                log::warn!(
                    "ephemeris data path {} does not exist; falling back to built-in series",
                    path.display()
                );
            }
            None => {
                log::warn!("no ephemeris data path configured; using built-in series");
            }
            _ => {}
        }
        Self {
            data_path: Mutex::new(data_path),
        }
    }

    fn body_code(planet: Planet) -> Result<u32, EphemerisError> {
        SWE_BODIES
            .iter()
            .find(|(p, _)| *p == planet)
            .map(|(_, code)| *code)
            .ok_or_else(|| EphemerisError::UnsupportedBody {
                body: planet.name().to_string(),
            })
    }
}

#[async_trait]
impl AstronomicalEngine for SwissEphemerisAdapter {
    fn set_ephemeris_data_path(&self, path: &Path) {
        if !path.exists() {
            log::warn!(
                "ephemeris data path {} does not exist; keeping built-in series",
                path.display()
            );
            return;
        }
        if let Ok(mut guard) = self.data_path.lock() {
            *guard = Some(path.to_path_buf());
        }
    }

    fn julian_day(&self, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        let decimal_hour = instant.hour() as f64
            + instant.minute() as f64 / 60.0
            + instant.second() as f64 / 3600.0;
        Ok(julday(
            instant.year(),
            instant.month() as i32,
            instant.day() as i32,
            decimal_hour,
            GREG_CAL,
        ))
    }

    async fn ecliptic_longitude(
        &self,
        julian_day: f64,
        planet: Planet,
    ) -> Result<f64, EphemerisError> {
        let code = Self::body_code(planet)?;
        let result =
            calc_ut(julian_day, code, SWE_FLAGS).map_err(|e| EphemerisError::CalculationFailed {
                body: planet.name().to_string(),
                julian_day,
                message: format!("swiss ephemeris error: {}", e),
            })?;
        Ok(normalize_degrees(result.out[0]))
    }

    async fn ascendant_degrees(
        &self,
        julian_day: f64,
        lat: f64,
        lng: f64,
        house_system: HouseSystem,
    ) -> Result<f64, EphemerisError> {
        let (_cusps, ascmc) = houses_ex(
            julian_day,
            SWE_FLAGS as i32,
            lat,
            lng,
            house_system.swe_byte() as i32,
        );
        let ascmc = AscMc::from_array(ascmc);
        let asc = ascmc.ascendant;
        if !asc.is_finite() {
            return Err(EphemerisError::HouseCalculationFailed {
                julian_day,
                lat,
                message: format!("{} cusps could not be resolved", house_system.name()),
            });
        }
        Ok(normalize_degrees(asc))
    }
}
