use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during ephemeris calculations.
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("failed to convert {instant} to a julian day: {message}")]
    JulianDay { instant: DateTime<Utc>, message: String },
    #[error("failed to calculate {body} longitude at jd {julian_day}: {message}")]
    CalculationFailed {
        body: String,
        julian_day: f64,
        message: String,
    },
    #[error("house calculation failed at jd {julian_day}, latitude {lat}: {message}")]
    HouseCalculationFailed {
        julian_day: f64,
        lat: f64,
        message: String,
    },
    #[error("unsupported body: {body}")]
    UnsupportedBody { body: String },
    #[error("unrecognized engine result shape: {raw}")]
    UnrecognizedShape { raw: String },
    #[error("ephemeris task aborted: {0}")]
    TaskAborted(String),
}

/// House division convention. Only the first cusp (the ascendant) is needed
/// by this crate, but the system still decides polar-latitude behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    Placidus,
    WholeSign,
    Koch,
    Equal,
    Regiomontanus,
    Campanus,
}

impl HouseSystem {
    pub const ALL: [HouseSystem; 6] = [
        HouseSystem::Placidus,
        HouseSystem::WholeSign,
        HouseSystem::Koch,
        HouseSystem::Equal,
        HouseSystem::Regiomontanus,
        HouseSystem::Campanus,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HouseSystem::Placidus => "placidus",
            HouseSystem::WholeSign => "whole_sign",
            HouseSystem::Koch => "koch",
            HouseSystem::Equal => "equal",
            HouseSystem::Regiomontanus => "regiomontanus",
            HouseSystem::Campanus => "campanus",
        }
    }

    pub fn from_name(name: &str) -> Option<HouseSystem> {
        HouseSystem::ALL
            .iter()
            .copied()
            .find(|h| h.name().eq_ignore_ascii_case(name))
    }

    /// Swiss Ephemeris house system byte.
    pub fn swe_byte(&self) -> u8 {
        match self {
            HouseSystem::Placidus => b'P',
            HouseSystem::WholeSign => b'W',
            HouseSystem::Koch => b'K',
            HouseSystem::Equal => b'E',
            HouseSystem::Regiomontanus => b'R',
            HouseSystem::Campanus => b'C',
        }
    }

    /// Quadrant systems cannot divide the sky inside the polar circles.
    pub fn is_quadrant(&self) -> bool {
        matches!(
            self,
            HouseSystem::Placidus
                | HouseSystem::Koch
                | HouseSystem::Regiomontanus
                | HouseSystem::Campanus
        )
    }
}

impl Default for HouseSystem {
    fn default() -> Self {
        HouseSystem::Placidus
    }
}
