pub mod approx;
pub mod engine;
pub mod types;

#[cfg(feature = "swisseph")]
pub mod swiss;

pub use approx::ApproxEphemeris;
pub use engine::{extract_longitude, AstronomicalEngine};
pub use types::{EphemerisError, HouseSystem};

#[cfg(feature = "swisseph")]
pub use swiss::SwissEphemerisAdapter;
