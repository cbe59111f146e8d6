use synastria::catalog::ReferenceCatalog;
use synastria::compat::CompatibilityEngine;
use synastria::zodiac::{sign_distance, Element, Modality, Planet, Polarity, ZodiacSign, SIGN_ORDER};

fn engine() -> CompatibilityEngine {
    CompatibilityEngine::new(ReferenceCatalog::in_memory())
}

#[tokio::test]
async fn test_sign_interaction_scores_bounded() {
    let engine = engine();
    for a in SIGN_ORDER {
        for b in SIGN_ORDER {
            let row = engine.sign_interaction(a, b).await.unwrap();
            assert!(row.total_score.abs() <= 1.0);
            assert!(row.element_score.abs() <= 1.0);
            assert!(row.modality_score.abs() <= 1.0);
            assert!(row.polarity_score.abs() <= 1.0);
            assert!(row.dynamic_score.abs() <= 1.0);
            assert!(row.distance <= 6);
        }
    }
}

#[tokio::test]
async fn test_queried_sign_always_first() {
    let engine = engine();
    for a in SIGN_ORDER {
        for b in SIGN_ORDER {
            let row = engine.sign_interaction(a, b).await.unwrap();
            assert_eq!(row.base.entity1, a.name());
            assert_eq!(row.base.entity2, b.name());
        }
    }
}

#[tokio::test]
async fn test_direction_normalization_idempotent() {
    let engine = engine();
    let forward = engine
        .sign_interaction(ZodiacSign::Taurus, ZodiacSign::Aries)
        .await
        .unwrap();
    let backward = engine
        .sign_interaction(ZodiacSign::Aries, ZodiacSign::Taurus)
        .await
        .unwrap();
    // Identical modulo the entity swap.
    assert_eq!(forward.base.entity1, backward.base.entity2);
    assert_eq!(forward.base.entity2, backward.base.entity1);
    assert_eq!(forward.total_score, backward.total_score);
    assert_eq!(forward.element_score, backward.element_score);
    assert_eq!(forward.distance, backward.distance);
    assert_eq!(forward.base.dynamic, backward.base.dynamic);
}

#[tokio::test]
async fn test_dimension_lookups_normalize_direction() {
    let engine = engine();
    let row = engine
        .element_interaction(Element::Air, Element::Fire)
        .await
        .unwrap();
    assert_eq!(row.entity1, "air");
    assert_eq!(row.entity2, "fire");

    let row = engine
        .modality_interaction(Modality::Mutable, Modality::Cardinal)
        .await
        .unwrap();
    assert_eq!(row.entity1, "mutable");

    let row = engine
        .polarity_interaction(Polarity::Negative, Polarity::Positive)
        .await
        .unwrap();
    assert_eq!(row.entity1, "negative");

    let row = engine
        .planet_interaction(Planet::Saturn, Planet::Venus)
        .await
        .unwrap();
    assert_eq!(row.entity1, "saturn");
    assert!(row.score.abs() <= 1.0);
}

#[tokio::test]
async fn test_best_interaction_is_extremal() {
    let engine = engine();
    for sign in SIGN_ORDER {
        let best = engine.best_interaction(sign).await.unwrap();
        let worst = engine.worst_interaction(sign).await.unwrap();
        assert_eq!(best.base.entity1, sign.name());
        assert_eq!(worst.base.entity1, sign.name());

        for other in SIGN_ORDER {
            let row = engine.sign_interaction(sign, other).await.unwrap();
            assert!(
                best.total_score >= row.total_score,
                "{} best beaten by {}",
                sign.name(),
                other.name()
            );
            assert!(worst.total_score <= row.total_score);
            // Tie-break: the closer sign wins among equal totals.
            if row.total_score == best.total_score {
                assert!(best.distance <= row.distance);
            }
            if row.total_score == worst.total_score {
                assert!(worst.distance <= row.distance);
            }
        }
    }
}

#[tokio::test]
async fn test_distance_matches_wheel_geometry() {
    let engine = engine();
    let row = engine
        .sign_interaction(ZodiacSign::Aries, ZodiacSign::Libra)
        .await
        .unwrap();
    assert_eq!(row.distance, 6);
    let row = engine
        .sign_interaction(ZodiacSign::Leo, ZodiacSign::Leo)
        .await
        .unwrap();
    assert_eq!(row.distance, 0);
    assert_eq!(
        sign_distance(ZodiacSign::Capricorn, ZodiacSign::Gemini),
        engine
            .sign_interaction(ZodiacSign::Capricorn, ZodiacSign::Gemini)
            .await
            .unwrap()
            .distance
    );
}
