pub mod calculator;
pub mod types;

pub use calculator::PositionCalculator;
pub use types::{Body, CoreAstrology, CoreSigns, PlanetaryPosition};
