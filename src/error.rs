use thiserror::Error;

use crate::assembly::AssemblyError;
use crate::birth::BirthMomentError;
use crate::config::ConfigError;
use crate::ephemeris::EphemerisError;
use crate::zodiac::ZodiacError;

/// Top-level error for the produced interfaces. Each stage keeps its own
/// error type; this enum exists so callers get a single `Result` currency.
#[derive(Error, Debug)]
pub enum AstroError {
    #[error(transparent)]
    BirthMoment(#[from] BirthMomentError),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error(transparent)]
    Zodiac(#[from] ZodiacError),
    #[error(transparent)]
    Assembly(#[from] AssemblyError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
