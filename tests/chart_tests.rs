use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use synastria::birth::{BirthFacts, BirthMomentError, GeoLocation};
use synastria::chart::{Body, PositionCalculator};
use synastria::ephemeris::{ApproxEphemeris, AstronomicalEngine, EphemerisError, HouseSystem};
use synastria::error::AstroError;
use synastria::zodiac::{Planet, ZodiacSign};

/// Engine double with a call counter and a switchable failing body.
struct StubEngine {
    calls: AtomicUsize,
    fail_planet: Option<Planet>,
}

impl StubEngine {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_planet: None,
        }
    }

    fn failing(planet: Planet) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_planet: Some(planet),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AstronomicalEngine for StubEngine {
    fn julian_day(&self, _instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(2451545.0)
    }

    async fn ecliptic_longitude(
        &self,
        julian_day: f64,
        planet: Planet,
    ) -> Result<f64, EphemerisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_planet == Some(planet) {
            return Err(EphemerisError::CalculationFailed {
                body: planet.name().to_string(),
                julian_day,
                message: "stub failure".to_string(),
            });
        }
        Ok(match planet {
            Planet::Sun => 84.5,    // Gemini
            Planet::Moon => 210.0,  // Scorpio
            Planet::Venus => 45.0,  // Taurus
            Planet::Mars => 350.0,  // Pisces
            _ => 0.0,
        })
    }

    async fn ascendant_degrees(
        &self,
        _julian_day: f64,
        _lat: f64,
        _lng: f64,
        _house_system: HouseSystem,
    ) -> Result<f64, EphemerisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(184.2) // Libra
    }
}

fn birth_facts() -> BirthFacts {
    BirthFacts {
        date_of_birth: "1990-06-15".parse().unwrap(),
        time_of_birth: "14:30".to_string(),
        timezone_name: "America/New_York".to_string(),
        coordinates: GeoLocation {
            lat: 40.7128,
            lng: -74.0060,
        },
    }
}

#[tokio::test]
async fn test_full_chart_from_stub() {
    let engine = Arc::new(StubEngine::new());
    let calculator = PositionCalculator::new(engine.clone());
    let chart = calculator
        .calculate_core_astrology(&birth_facts(), &Body::ALL)
        .await
        .unwrap();

    assert_eq!(chart.sun.as_ref().unwrap().sign, ZodiacSign::Gemini);
    assert_eq!(chart.moon.as_ref().unwrap().sign, ZodiacSign::Scorpio);
    assert_eq!(chart.rising.as_ref().unwrap().sign, ZodiacSign::Libra);
    assert_eq!(chart.venus.as_ref().unwrap().sign, ZodiacSign::Taurus);
    assert_eq!(chart.mars.as_ref().unwrap().sign, ZodiacSign::Pisces);
    // One julian day conversion plus one call per body.
    assert_eq!(engine.call_count(), 6);
}

#[tokio::test]
async fn test_subset_request_populates_only_requested_bodies() {
    let engine = Arc::new(StubEngine::new());
    let calculator = PositionCalculator::new(engine);
    let chart = calculator
        .calculate_core_astrology(&birth_facts(), &[Body::Sun, Body::Moon])
        .await
        .unwrap();

    assert!(chart.sun.is_some());
    assert!(chart.moon.is_some());
    assert!(chart.rising.is_none());
    assert!(chart.venus.is_none());
    assert!(chart.mars.is_none());
    assert_eq!(chart.populated_bodies(), vec![Body::Sun, Body::Moon]);
}

#[tokio::test]
async fn test_validation_runs_before_any_engine_call() {
    let engine = Arc::new(StubEngine::new());
    let calculator = PositionCalculator::new(engine.clone());
    let mut facts = birth_facts();
    facts.time_of_birth = "25:99".to_string();

    let result = calculator.calculate_core_astrology(&facts, &Body::ALL).await;
    assert!(matches!(
        result,
        Err(AstroError::BirthMoment(BirthMomentError::Validation { .. }))
    ));
    assert_eq!(engine.call_count(), 0);
}

#[tokio::test]
async fn test_single_body_failure_fails_whole_chart() {
    let engine = Arc::new(StubEngine::failing(Planet::Venus));
    let calculator = PositionCalculator::new(engine.clone());
    let result = calculator
        .calculate_core_astrology(&birth_facts(), &Body::ALL)
        .await;

    assert!(matches!(result, Err(AstroError::Ephemeris(_))));
    // Siblings still ran to completion before the failure surfaced.
    assert_eq!(engine.call_count(), 6);
}

#[tokio::test]
async fn test_approx_engine_sun_sign() {
    // 1990-06-15 14:30 in New York resolves to 18:30 UTC; the Sun sat
    // around 84 degrees, solidly in Gemini.
    let calculator = PositionCalculator::new(Arc::new(ApproxEphemeris::new()));
    let chart = calculator
        .calculate_core_astrology(&birth_facts(), &Body::ALL)
        .await
        .unwrap();

    let sun = chart.sun.as_ref().unwrap();
    assert_eq!(sun.sign, ZodiacSign::Gemini);
    assert!((0.0..30.0).contains(&sun.degrees_in_sign));
    for body in Body::ALL {
        let position = chart.position(body).unwrap();
        assert!((0.0..360.0).contains(&position.absolute_degrees));
    }
}

#[tokio::test]
async fn test_approx_engine_is_deterministic() {
    let calculator = PositionCalculator::new(Arc::new(ApproxEphemeris::new()));
    let first = calculator
        .calculate_core_astrology(&birth_facts(), &Body::ALL)
        .await
        .unwrap();
    let second = calculator
        .calculate_core_astrology(&birth_facts(), &Body::ALL)
        .await
        .unwrap();
    for body in Body::ALL {
        assert_eq!(
            first.position(body).unwrap().absolute_degrees,
            second.position(body).unwrap().absolute_degrees
        );
    }
}

#[tokio::test]
async fn test_polar_birthplace_fails_with_placidus() {
    let calculator = PositionCalculator::new(Arc::new(ApproxEphemeris::new()));
    let mut facts = birth_facts();
    facts.coordinates = GeoLocation { lat: 78.22, lng: 15.65 }; // Svalbard
    facts.timezone_name = "Arctic/Longyearbyen".to_string();

    let result = calculator.calculate_core_astrology(&facts, &Body::ALL).await;
    assert!(matches!(result, Err(AstroError::Ephemeris(_))));

    // Whole-sign houses still resolve there.
    let whole_sign = PositionCalculator::new(Arc::new(ApproxEphemeris::new()))
        .with_house_system(HouseSystem::WholeSign);
    assert!(whole_sign
        .calculate_core_astrology(&facts, &Body::ALL)
        .await
        .is_ok());
}
