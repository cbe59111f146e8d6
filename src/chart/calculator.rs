//! Core position calculation: birth facts to five zodiac placements.

use std::sync::Arc;

use tokio::task::JoinSet;

use crate::birth::{resolve_birth_moment, BirthFacts};
use crate::ephemeris::{AstronomicalEngine, EphemerisError, HouseSystem};
use crate::error::AstroError;
use crate::zodiac::map_longitude;

use super::types::{Body, CoreAstrology, PlanetaryPosition};

pub struct PositionCalculator {
    engine: Arc<dyn AstronomicalEngine>,
    house_system: HouseSystem,
}

impl PositionCalculator {
    pub fn new(engine: Arc<dyn AstronomicalEngine>) -> Self {
        Self {
            engine,
            house_system: HouseSystem::default(),
        }
    }

    pub fn with_house_system(mut self, house_system: HouseSystem) -> Self {
        self.house_system = house_system;
        self
    }

    /// Compute placements for the requested bodies.
    ///
    /// The instant is resolved once and the julian day computed once; each
    /// body then gets its own concurrent engine call. All sibling tasks are
    /// joined before any failure is surfaced, and one failed body fails the
    /// whole chart: a chart missing a required placement is not meaningful.
    pub async fn calculate_core_astrology(
        &self,
        facts: &BirthFacts,
        bodies: &[Body],
    ) -> Result<CoreAstrology, AstroError> {
        let instant = resolve_birth_moment(facts)?;
        let julian_day = self.engine.julian_day(instant)?;
        log::debug!(
            "calculating {} bodies at jd {julian_day} for {instant}",
            bodies.len()
        );

        let mut tasks: JoinSet<(Body, Result<f64, EphemerisError>)> = JoinSet::new();
        for &body in bodies {
            let engine = Arc::clone(&self.engine);
            let lat = facts.coordinates.lat;
            let lng = facts.coordinates.lng;
            let house_system = self.house_system;
            tasks.spawn(async move {
                let longitude = match body.as_planet() {
                    Some(planet) => engine.ecliptic_longitude(julian_day, planet).await,
                    None => {
                        engine
                            .ascendant_degrees(julian_day, lat, lng, house_system)
                            .await
                    }
                };
                (body, longitude)
            });
        }

        let mut longitudes = Vec::with_capacity(bodies.len());
        let mut first_error: Option<EphemerisError> = None;
        while let Some(joined) = tasks.join_next().await {
            let (body, result) =
                joined.map_err(|e| EphemerisError::TaskAborted(e.to_string()))?;
            match result {
                Ok(longitude) => longitudes.push((body, longitude)),
                Err(e) => {
                    // Siblings keep running to completion; only the first
                    // failure is reported.
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }
        if let Some(error) = first_error {
            return Err(error.into());
        }

        let mut chart = CoreAstrology::default();
        for (body, longitude) in longitudes {
            let placement = map_longitude(longitude)?;
            chart.set_position(PlanetaryPosition {
                body,
                sign: placement.sign,
                degrees_in_sign: placement.degrees_in_sign,
                absolute_degrees: placement.absolute_degrees,
            });
        }
        Ok(chart)
    }
}
