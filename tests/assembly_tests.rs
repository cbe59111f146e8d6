use std::sync::Arc;

use async_trait::async_trait;

use synastria::assembly::{AssemblyError, AssemblyOrchestrator};
use synastria::birth::{BirthFacts, GeoLocation};
use synastria::catalog::{ReferenceCatalog, SignRecord, SignRepository};
use synastria::chart::{Body, CoreSigns};
use synastria::error::AstroError;
use synastria::service::AstrologyService;
use synastria::zodiac::ZodiacSign;

fn core_signs() -> CoreSigns {
    CoreSigns {
        sun: ZodiacSign::Leo,
        moon: ZodiacSign::Scorpio,
        rising: ZodiacSign::Aquarius,
        venus: ZodiacSign::Taurus,
        mars: ZodiacSign::Cancer,
    }
}

#[tokio::test]
async fn test_calculated_scores_cover_all_pairs() {
    let orchestrator = AssemblyOrchestrator::new(ReferenceCatalog::in_memory());
    let calculated = orchestrator
        .calculate_user_astrology_data(&core_signs(), None)
        .await
        .unwrap();

    assert_eq!(calculated.body_scores.len(), 5);
    for body_score in &calculated.body_scores {
        assert_eq!(body_score.interactions.len(), 4);
        assert!(body_score.total_score.abs() <= 1.0);
        for interaction in &body_score.interactions {
            assert_eq!(interaction.body, body_score.body);
            assert!(interaction.total_score.abs() <= 1.0);
            assert!(interaction.distance <= 6);
        }
    }
    assert!(calculated.total_score.abs() <= 1.0);
    assert_eq!(calculated.created_at, calculated.last_calculated_at);
    assert!(calculated.positions.is_none());
}

#[tokio::test]
async fn test_complete_assembly_shape() {
    let orchestrator = AssemblyOrchestrator::new(ReferenceCatalog::in_memory());
    let calculated = orchestrator
        .calculate_user_astrology_data(&core_signs(), None)
        .await
        .unwrap();
    let complete = orchestrator
        .assemble_complete_astrology_data(&calculated)
        .await
        .unwrap();

    assert_eq!(complete.bodies.len(), 5);
    for body in &complete.bodies {
        // Nested reference data is fully populated by the built-in catalog.
        assert!(body.sign.element.is_some());
        assert!(body.sign.modality.is_some());
        assert!(body.sign.polarity.is_some());
        assert!(body.sign.energy_type.is_some());
        assert!(body.sign.house.is_some());
        assert!(body.sign.ruling_planet.is_some());
        // Rising is not a classical planet.
        match body.body {
            Body::Rising => assert!(body.planet.is_none()),
            _ => assert!(body.planet.is_some()),
        }
    }

    assert_eq!(complete.planetary_interactions.len(), 10);
    for pair in &complete.planetary_interactions {
        assert!(pair.sign_interaction.is_some());
        let involves_rising = pair.body1 == Body::Rising || pair.body2 == Body::Rising;
        assert_eq!(pair.planet_interaction.is_none(), involves_rising);
    }
}

#[tokio::test]
async fn test_sign_interaction_complete() {
    let orchestrator = AssemblyOrchestrator::new(ReferenceCatalog::in_memory());
    let complete = orchestrator
        .find_sign_interaction_complete(ZodiacSign::Leo, ZodiacSign::Aries)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(complete.interaction.base.entity1, "leo");
    assert_eq!(complete.interaction.base.entity2, "aries");
    assert_eq!(complete.sign1.sign.name, "leo");
    assert_eq!(complete.sign2.sign.name, "aries");
    assert!(complete.element_interaction.is_some());
    assert!(complete.modality_interaction.is_some());
    assert!(complete.polarity_interaction.is_some());
    assert!(complete.dynamic.is_some());
}

/// Sign repository double that has lost all its records.
struct EmptySigns;

#[async_trait]
impl SignRepository for EmptySigns {
    async fn find_by_name(&self, _name: &str) -> Option<SignRecord> {
        None
    }
}

#[tokio::test]
async fn test_missing_sign_record_is_fatal() {
    let mut catalog = ReferenceCatalog::in_memory();
    catalog.signs = Arc::new(EmptySigns);
    let orchestrator = AssemblyOrchestrator::new(catalog);

    let calculated = orchestrator
        .calculate_user_astrology_data(&core_signs(), None)
        .await
        .unwrap();
    let result = orchestrator.assemble_complete_astrology_data(&calculated).await;
    assert!(matches!(
        result,
        Err(AssemblyError::ReferenceDataNotFound { kind: "sign", .. })
    ));
}

#[tokio::test]
async fn test_service_end_to_end() {
    let service = AstrologyService::builtin();
    let facts = BirthFacts {
        date_of_birth: "1990-06-15".parse().unwrap(),
        time_of_birth: "14:30".to_string(),
        timezone_name: "America/New_York".to_string(),
        coordinates: GeoLocation {
            lat: 40.7128,
            lng: -74.0060,
        },
    };

    let chart = service.calculate_core_astrology(&facts, None).await.unwrap();
    let signs = chart.signs().expect("all five bodies populated");
    let calculated = service
        .calculate_user_astrology_data(&signs, Some(&chart))
        .await
        .unwrap();
    assert!(calculated.positions.is_some());

    let complete = service
        .assemble_complete_astrology_data(&calculated)
        .await
        .unwrap();
    assert_eq!(complete.bodies.len(), 5);
    for body in &complete.bodies {
        assert!(body.position.is_some());
    }

    let best = service.find_best_interaction(signs.sun).await.unwrap();
    let worst = service.find_worst_interaction(signs.sun).await.unwrap();
    assert!(best.total_score >= worst.total_score);
}

#[tokio::test]
async fn test_service_validation_error_surfaces() {
    let service = AstrologyService::builtin();
    let facts = BirthFacts {
        date_of_birth: "1990-06-15".parse().unwrap(),
        time_of_birth: "noonish".to_string(),
        timezone_name: "America/New_York".to_string(),
        coordinates: GeoLocation { lat: 0.0, lng: 0.0 },
    };
    let result = service.calculate_core_astrology(&facts, None).await;
    assert!(matches!(result, Err(AstroError::BirthMoment(_))));
}
