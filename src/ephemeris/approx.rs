//! Built-in reduced-precision ephemeris.
//!
//! Analytic low-precision series: solar longitude after Meeus ch. 25, a
//! truncated lunar longitude series, and Kepler orbital elements for the
//! planets. Accuracy is on the order of arcminutes, ample for 30-degree
//! sign bucketing. Used whenever no file-backed engine is configured.

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::path::Path;

use crate::zodiac::{normalize_degrees, Planet};

use super::engine::AstronomicalEngine;
use super::types::{EphemerisError, HouseSystem};

/// Quadrant house systems degenerate approaching the polar circles.
const MAX_QUADRANT_LATITUDE: f64 = 66.0;

const J2000: f64 = 2451545.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxEphemeris;

impl ApproxEphemeris {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AstronomicalEngine for ApproxEphemeris {
    fn set_ephemeris_data_path(&self, path: &Path) {
        log::warn!(
            "built-in ephemeris runs in reduced-precision mode and has no data files; ignoring {}",
            path.display()
        );
    }

    fn julian_day(&self, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        Ok(julian_day(instant))
    }

    async fn ecliptic_longitude(
        &self,
        julian_day: f64,
        planet: Planet,
    ) -> Result<f64, EphemerisError> {
        if !julian_day.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                body: planet.name().to_string(),
                julian_day,
                message: "julian day is not finite".to_string(),
            });
        }
        let longitude = match planet {
            Planet::Sun => solar_longitude(julian_day),
            Planet::Moon => lunar_longitude(julian_day),
            other => planet_geocentric_longitude(julian_day, other)?,
        };
        Ok(normalize_degrees(longitude))
    }

    async fn ascendant_degrees(
        &self,
        julian_day: f64,
        lat: f64,
        lng: f64,
        house_system: HouseSystem,
    ) -> Result<f64, EphemerisError> {
        if house_system.is_quadrant() && lat.abs() > MAX_QUADRANT_LATITUDE {
            return Err(EphemerisError::HouseCalculationFailed {
                julian_day,
                lat,
                message: format!(
                    "{} houses are undefined at polar latitudes",
                    house_system.name()
                ),
            });
        }
        Ok(ascendant_longitude(julian_day, lat, lng))
    }
}

/// Gregorian date to julian day, Meeus 7.1.
fn julian_day(dt: DateTime<Utc>) -> f64 {
    let (year, month) = if dt.month() <= 2 {
        (dt.year() - 1, dt.month() + 12)
    } else {
        (dt.year(), dt.month())
    };
    let century = (year as f64 / 100.0).floor();
    let gregorian = 2.0 - century + (century / 4.0).floor();
    let day = dt.day() as f64
        + (dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0) / 24.0;
    (365.25 * (year as f64 + 4716.0)).floor()
        + (30.6001 * (month as f64 + 1.0)).floor()
        + day
        + gregorian
        - 1524.5
}

/// Geometric solar longitude, Meeus ch. 25.
fn solar_longitude(jd: f64) -> f64 {
    let t = (jd - J2000) / 36525.0;
    let mean_longitude = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let mean_anomaly = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();
    let center = (1.914602 - 0.004817 * t - 0.000014 * t * t) * mean_anomaly.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * mean_anomaly).sin()
        + 0.000289 * (3.0 * mean_anomaly).sin();
    mean_longitude + center
}

/// Lunar longitude, the largest terms of the Meeus ch. 47 series.
fn lunar_longitude(jd: f64) -> f64 {
    let t = (jd - J2000) / 36525.0;
    let mean_longitude = 218.3164477 + 481267.88123421 * t;
    let elongation = (297.8501921 + 445267.1114034 * t).to_radians();
    let sun_anomaly = (357.5291092 + 35999.0502909 * t).to_radians();
    let moon_anomaly = (134.9633964 + 477198.8675055 * t).to_radians();
    let latitude_arg = (93.2720950 + 483202.0175233 * t).to_radians();

    mean_longitude
        + 6.288774 * moon_anomaly.sin()
        + 1.274027 * (2.0 * elongation - moon_anomaly).sin()
        + 0.658314 * (2.0 * elongation).sin()
        + 0.213618 * (2.0 * moon_anomaly).sin()
        - 0.185116 * sun_anomaly.sin()
        - 0.114332 * (2.0 * latitude_arg).sin()
        + 0.058793 * (2.0 * elongation - 2.0 * moon_anomaly).sin()
        + 0.057066 * (2.0 * elongation - sun_anomaly - moon_anomaly).sin()
        + 0.053322 * (2.0 * elongation + moon_anomaly).sin()
        + 0.045758 * (2.0 * elongation - sun_anomaly).sin()
}

/// Osculating elements for the classical planets (Schlyter), valid for a few
/// centuries around J2000. `d` is days from 2000-01-00.0.
struct OrbitalElements {
    ascending_node: f64,
    inclination: f64,
    perihelion_arg: f64,
    semi_major_axis: f64,
    eccentricity: f64,
    mean_anomaly: f64,
}

fn orbital_elements(planet: Planet, d: f64) -> Option<OrbitalElements> {
    let elements = match planet {
        Planet::Mercury => OrbitalElements {
            ascending_node: 48.3313 + 3.24587e-5 * d,
            inclination: 7.0047 + 5.00e-8 * d,
            perihelion_arg: 29.1241 + 1.01444e-5 * d,
            semi_major_axis: 0.387098,
            eccentricity: 0.205635 + 5.59e-10 * d,
            mean_anomaly: 168.6562 + 4.0923344368 * d,
        },
        Planet::Venus => OrbitalElements {
            ascending_node: 76.6799 + 2.46590e-5 * d,
            inclination: 3.3946 + 2.75e-8 * d,
            perihelion_arg: 54.8910 + 1.38374e-5 * d,
            semi_major_axis: 0.723330,
            eccentricity: 0.006773 - 1.302e-9 * d,
            mean_anomaly: 48.0052 + 1.6021302244 * d,
        },
        Planet::Mars => OrbitalElements {
            ascending_node: 49.5574 + 2.11081e-5 * d,
            inclination: 1.8497 - 1.78e-8 * d,
            perihelion_arg: 286.5016 + 2.92961e-5 * d,
            semi_major_axis: 1.523688,
            eccentricity: 0.093405 + 2.516e-9 * d,
            mean_anomaly: 18.6021 + 0.5240207766 * d,
        },
        Planet::Jupiter => OrbitalElements {
            ascending_node: 100.4542 + 2.76854e-5 * d,
            inclination: 1.3030 - 1.557e-7 * d,
            perihelion_arg: 273.8777 + 1.64505e-5 * d,
            semi_major_axis: 5.20256,
            eccentricity: 0.048498 + 4.469e-9 * d,
            mean_anomaly: 19.8950 + 0.0830853001 * d,
        },
        Planet::Saturn => OrbitalElements {
            ascending_node: 113.6634 + 2.38980e-5 * d,
            inclination: 2.4886 - 1.081e-7 * d,
            perihelion_arg: 339.3939 + 2.97661e-5 * d,
            semi_major_axis: 9.55475,
            eccentricity: 0.055546 - 9.499e-9 * d,
            mean_anomaly: 316.9670 + 0.0334442282 * d,
        },
        Planet::Sun | Planet::Moon => return None,
    };
    Some(elements)
}

/// Solve Kepler's equation for the eccentric anomaly, radians.
fn eccentric_anomaly(mean_anomaly_deg: f64, eccentricity: f64) -> f64 {
    let m = normalize_degrees(mean_anomaly_deg).to_radians();
    let mut e = m + eccentricity * m.sin() * (1.0 + eccentricity * m.cos());
    for _ in 0..10 {
        let delta = (e - eccentricity * e.sin() - m) / (1.0 - eccentricity * e.cos());
        e -= delta;
        if delta.abs() < 1e-8 {
            break;
        }
    }
    e
}

/// Heliocentric ecliptic rectangular coordinates, AU.
fn heliocentric_position(el: &OrbitalElements) -> (f64, f64, f64) {
    let e = eccentric_anomaly(el.mean_anomaly, el.eccentricity);
    let xv = el.semi_major_axis * (e.cos() - el.eccentricity);
    let yv = el.semi_major_axis * ((1.0 - el.eccentricity * el.eccentricity).sqrt() * e.sin());
    let true_anomaly = yv.atan2(xv);
    let radius = (xv * xv + yv * yv).sqrt();

    let node = el.ascending_node.to_radians();
    let incl = el.inclination.to_radians();
    let arg = true_anomaly + el.perihelion_arg.to_radians();

    let x = radius * (node.cos() * arg.cos() - node.sin() * arg.sin() * incl.cos());
    let y = radius * (node.sin() * arg.cos() + node.cos() * arg.sin() * incl.cos());
    let z = radius * (arg.sin() * incl.sin());
    (x, y, z)
}

/// Geocentric rectangular position of the Sun, AU.
fn sun_rectangular(d: f64) -> (f64, f64) {
    let perihelion = 282.9404 + 4.70935e-5 * d;
    let eccentricity = 0.016709 - 1.151e-9 * d;
    let mean_anomaly = 356.0470 + 0.9856002585 * d;

    let e = eccentric_anomaly(mean_anomaly, eccentricity);
    let xv = e.cos() - eccentricity;
    let yv = (1.0 - eccentricity * eccentricity).sqrt() * e.sin();
    let true_anomaly = yv.atan2(xv);
    let radius = (xv * xv + yv * yv).sqrt();
    let longitude = true_anomaly + perihelion.to_radians();
    (radius * longitude.cos(), radius * longitude.sin())
}

fn planet_geocentric_longitude(jd: f64, planet: Planet) -> Result<f64, EphemerisError> {
    let d = jd - 2451543.5;
    let elements = orbital_elements(planet, d).ok_or_else(|| EphemerisError::UnsupportedBody {
        body: planet.name().to_string(),
    })?;
    let (xh, yh, _zh) = heliocentric_position(&elements);
    let (xs, ys) = sun_rectangular(d);
    // Longitude only; ecliptic latitude never moves a body across a sign
    // boundary by more than its own few degrees and is ignored here.
    Ok((yh + ys).atan2(xh + xs).to_degrees())
}

/// Mean obliquity of the ecliptic, degrees.
fn obliquity(jd: f64) -> f64 {
    23.4393 - 3.563e-7 * (jd - 2451543.5)
}

/// Local sidereal time expressed in degrees (the RAMC).
fn sidereal_degrees(jd: f64, lng_east: f64) -> f64 {
    let t = (jd - J2000) / 36525.0;
    let gmst = 280.46061837 + 360.98564736629 * (jd - J2000) + 0.000387933 * t * t;
    normalize_degrees(gmst + lng_east)
}

/// Ecliptic longitude of the ascendant. All quadrant systems share the
/// first cusp, so the house system only matters for the polar guard above.
fn ascendant_longitude(jd: f64, lat: f64, lng: f64) -> f64 {
    let ramc = sidereal_degrees(jd, lng).to_radians();
    let eps = obliquity(jd).to_radians();
    let phi = lat.to_radians();
    let asc = (-ramc.cos()).atan2(ramc.sin() * eps.cos() + phi.tan() * eps.sin());
    normalize_degrees(asc.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn angular_separation(a: f64, b: f64) -> f64 {
        let diff = (a - b).abs() % 360.0;
        diff.min(360.0 - diff)
    }

    #[test]
    fn test_julian_day_epochs() {
        let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((julian_day(j2000) - 2451545.0).abs() < 1e-6);
        let sputnik = Utc.with_ymd_and_hms(1957, 10, 4, 19, 26, 24).unwrap();
        assert!((julian_day(sputnik) - 2436116.31).abs() < 0.01);
    }

    #[test]
    fn test_solar_longitude_j2000() {
        // Geometric solar longitude at J2000.0 is close to 280.37 degrees.
        let lon = normalize_degrees(solar_longitude(J2000));
        assert!(angular_separation(lon, 280.37) < 0.2, "got {}", lon);
    }

    #[test]
    fn test_lunar_longitude_j2000() {
        // Moon stood in Scorpio at J2000.0, around 223 degrees.
        let lon = normalize_degrees(lunar_longitude(J2000));
        assert!(angular_separation(lon, 223.0) < 2.0, "got {}", lon);
    }

    #[tokio::test]
    async fn test_inner_planet_elongation_bound() {
        // Venus never strays more than about 48 degrees from the Sun,
        // Mercury about 28. A gross series error would break this.
        let engine = ApproxEphemeris::new();
        for offset in [0.0, 1000.0, 10000.0, -15000.0] {
            let jd = J2000 + offset;
            let sun = engine.ecliptic_longitude(jd, Planet::Sun).await.unwrap();
            let venus = engine.ecliptic_longitude(jd, Planet::Venus).await.unwrap();
            let mercury = engine.ecliptic_longitude(jd, Planet::Mercury).await.unwrap();
            assert!(angular_separation(sun, venus) < 48.5);
            assert!(angular_separation(sun, mercury) < 29.0);
        }
    }

    #[tokio::test]
    async fn test_polar_latitude_rejected_for_quadrant_systems() {
        let engine = ApproxEphemeris::new();
        let polar = engine
            .ascendant_degrees(J2000, 78.2, 15.6, HouseSystem::Placidus)
            .await;
        assert!(matches!(
            polar,
            Err(EphemerisError::HouseCalculationFailed { .. })
        ));
        let whole_sign = engine
            .ascendant_degrees(J2000, 78.2, 15.6, HouseSystem::WholeSign)
            .await;
        assert!(whole_sign.is_ok());
    }

    #[tokio::test]
    async fn test_ascendant_range() {
        let engine = ApproxEphemeris::new();
        for hour in 0..24 {
            let instant = Utc.with_ymd_and_hms(1990, 6, 15, hour, 30, 0).unwrap();
            let jd = engine.julian_day(instant).unwrap();
            let asc = engine
                .ascendant_degrees(jd, 40.7128, -74.0060, HouseSystem::Placidus)
                .await
                .unwrap();
            assert!((0.0..360.0).contains(&asc));
        }
    }
}
