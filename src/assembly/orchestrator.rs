//! Assembly of complete, reference-enriched results.
//!
//! Each stage fans its independent lookups out concurrently and joins them
//! before the next stage starts. A missing required record (a sign) aborts
//! the assembly; missing optional nested records become None slots.

use std::collections::HashMap;

use chrono::Utc;
use thiserror::Error;
use tokio::task::JoinSet;

use crate::catalog::ReferenceCatalog;
use crate::chart::{Body, CoreAstrology, CoreSigns};
use crate::compat::{clamp_score, CompatibilityEngine, SignInteraction};
use crate::zodiac::ZodiacSign;

use super::types::{
    AstrologyCalculated, AstrologyComplete, BodyComplete, BodyInteractionScore, BodyScore,
    PlanetaryInteractionComplete, SignComplete, SignInteractionComplete,
};

/// The ten unordered pairs over the five core bodies, fixed order.
pub const BODY_PAIRS: [(Body, Body); 10] = [
    (Body::Sun, Body::Moon),
    (Body::Sun, Body::Rising),
    (Body::Sun, Body::Venus),
    (Body::Sun, Body::Mars),
    (Body::Moon, Body::Rising),
    (Body::Moon, Body::Venus),
    (Body::Moon, Body::Mars),
    (Body::Rising, Body::Venus),
    (Body::Rising, Body::Mars),
    (Body::Venus, Body::Mars),
];

#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error("required {kind} record {name} is missing from the reference catalog")]
    ReferenceDataNotFound { kind: &'static str, name: String },
    #[error("assembly task aborted: {0}")]
    TaskAborted(String),
}

#[derive(Clone)]
pub struct AssemblyOrchestrator {
    catalog: ReferenceCatalog,
    engine: CompatibilityEngine,
}

impl AssemblyOrchestrator {
    pub fn new(catalog: ReferenceCatalog) -> Self {
        let engine = CompatibilityEngine::new(catalog.clone());
        Self { catalog, engine }
    }

    pub fn scoring_engine(&self) -> &CompatibilityEngine {
        &self.engine
    }

    /// Score a chart: each body against the other four, plus the overall
    /// total over the ten fixed pairs.
    pub async fn calculate_user_astrology_data(
        &self,
        signs: &CoreSigns,
        positions: Option<&CoreAstrology>,
    ) -> Result<AstrologyCalculated, AssemblyError> {
        let mut tasks: JoinSet<((Body, Body), Option<SignInteraction>)> = JoinSet::new();
        for &(a, b) in &BODY_PAIRS {
            let engine = self.engine.clone();
            let sign_a = signs.sign_of(a);
            let sign_b = signs.sign_of(b);
            tasks.spawn(async move { ((a, b), engine.sign_interaction(sign_a, sign_b).await) });
        }

        let mut pair_rows: HashMap<(Body, Body), SignInteraction> = HashMap::new();
        while let Some(joined) = tasks.join_next().await {
            let ((a, b), row) = joined.map_err(|e| AssemblyError::TaskAborted(e.to_string()))?;
            let row = row.ok_or_else(|| AssemblyError::ReferenceDataNotFound {
                kind: "signInteraction",
                name: format!("{}/{}", signs.sign_of(a).name(), signs.sign_of(b).name()),
            })?;
            pair_rows.insert((a, b), row);
        }

        let mut body_scores = Vec::with_capacity(Body::ALL.len());
        for body in Body::ALL {
            let mut interactions = Vec::with_capacity(4);
            for &(a, b) in &BODY_PAIRS {
                let other = match (a == body, b == body) {
                    (true, _) => b,
                    (_, true) => a,
                    _ => continue,
                };
                let row = &pair_rows[&(a, b)];
                interactions.push(BodyInteractionScore {
                    body,
                    other_body: other,
                    sign: signs.sign_of(body),
                    other_sign: signs.sign_of(other),
                    distance: row.distance,
                    element_score: row.element_score,
                    modality_score: row.modality_score,
                    polarity_score: row.polarity_score,
                    dynamic_score: row.dynamic_score,
                    total_score: row.total_score,
                });
            }
            let total = interactions.iter().map(|i| i.total_score).sum::<f64>()
                / interactions.len().max(1) as f64;
            body_scores.push(BodyScore {
                body,
                sign: signs.sign_of(body),
                total_score: clamp_score(total),
                interactions,
            });
        }

        let overall = pair_rows.values().map(|r| r.total_score).sum::<f64>()
            / pair_rows.len().max(1) as f64;
        let now = Utc::now();
        Ok(AstrologyCalculated {
            signs: *signs,
            positions: positions.cloned(),
            body_scores,
            total_score: clamp_score(overall),
            created_at: now,
            last_calculated_at: now,
        })
    }

    /// One sign with all its nested reference records. The sign record is
    /// required; everything nested degrades to None.
    pub async fn sign_complete(&self, sign: ZodiacSign) -> Result<SignComplete, AssemblyError> {
        let record = self
            .catalog
            .signs
            .find_by_name(sign.name())
            .await
            .ok_or_else(|| AssemblyError::ReferenceDataNotFound {
                kind: "sign",
                name: sign.name().to_string(),
            })?;

        let (element, modality, polarity, energy_type, house, ruling_planet) = tokio::join!(
            self.catalog.elements.find_by_name(&record.element),
            self.catalog.modalities.find_by_name(&record.modality),
            self.catalog.polarities.find_by_name(&record.polarity),
            self.catalog.energy_types.find_by_name(&record.energy_type),
            self.catalog.houses.find_by_number(record.natural_house),
            self.catalog.planets.find_by_name(&record.ruling_planet),
        );

        Ok(SignComplete {
            sign: record,
            element,
            modality,
            polarity,
            energy_type,
            house,
            ruling_planet,
        })
    }

    /// The fully annotated chart for an already-scored calculation.
    pub async fn assemble_complete_astrology_data(
        &self,
        calculated: &AstrologyCalculated,
    ) -> Result<AstrologyComplete, AssemblyError> {
        let signs = calculated.signs;
        let (sun, moon, rising, venus, mars) = tokio::join!(
            self.body_complete(Body::Sun, &signs, calculated.positions.as_ref()),
            self.body_complete(Body::Moon, &signs, calculated.positions.as_ref()),
            self.body_complete(Body::Rising, &signs, calculated.positions.as_ref()),
            self.body_complete(Body::Venus, &signs, calculated.positions.as_ref()),
            self.body_complete(Body::Mars, &signs, calculated.positions.as_ref()),
        );
        let bodies = vec![sun?, moon?, rising?, venus?, mars?];

        let mut tasks: JoinSet<(usize, PlanetaryInteractionComplete)> = JoinSet::new();
        for (index, &(a, b)) in BODY_PAIRS.iter().enumerate() {
            let engine = self.engine.clone();
            let sign_a = signs.sign_of(a);
            let sign_b = signs.sign_of(b);
            tasks.spawn(async move {
                let planet_interaction = match (a.as_planet(), b.as_planet()) {
                    (Some(pa), Some(pb)) => engine.planet_interaction(pa, pb).await,
                    // Rising has no classical planet behind it.
                    _ => None,
                };
                let sign_interaction = engine.sign_interaction(sign_a, sign_b).await;
                (
                    index,
                    PlanetaryInteractionComplete {
                        body1: a,
                        body2: b,
                        planet_interaction,
                        sign_interaction,
                    },
                )
            });
        }
        let mut planetary_interactions: Vec<Option<PlanetaryInteractionComplete>> =
            vec![None; BODY_PAIRS.len()];
        while let Some(joined) = tasks.join_next().await {
            let (index, row) = joined.map_err(|e| AssemblyError::TaskAborted(e.to_string()))?;
            planetary_interactions[index] = Some(row);
        }

        Ok(AstrologyComplete {
            calculated: calculated.clone(),
            bodies,
            planetary_interactions: planetary_interactions.into_iter().flatten().collect(),
        })
    }

    async fn body_complete(
        &self,
        body: Body,
        signs: &CoreSigns,
        positions: Option<&CoreAstrology>,
    ) -> Result<BodyComplete, AssemblyError> {
        let sign = signs.sign_of(body);
        let planet = match body.as_planet() {
            Some(planet) => self.catalog.planets.find_by_name(planet.name()).await,
            None => None,
        };
        Ok(BodyComplete {
            body,
            position: positions.and_then(|p| p.position(body).cloned()),
            planet,
            sign: self.sign_complete(sign).await?,
        })
    }

    /// A sign pair with both sides and the dimension interactions expanded.
    /// None when no interaction row exists for the pair.
    pub async fn find_sign_interaction_complete(
        &self,
        a: ZodiacSign,
        b: ZodiacSign,
    ) -> Result<Option<SignInteractionComplete>, AssemblyError> {
        let interaction = match self.engine.sign_interaction(a, b).await {
            Some(row) => row,
            None => return Ok(None),
        };

        let (sign1, sign2) = tokio::join!(self.sign_complete(a), self.sign_complete(b));
        let (element_interaction, modality_interaction, polarity_interaction, dynamic) = tokio::join!(
            self.engine.element_interaction(a.element(), b.element()),
            self.engine.modality_interaction(a.modality(), b.modality()),
            self.engine.polarity_interaction(a.polarity(), b.polarity()),
            self.catalog
                .dynamics
                .find_by_name(interaction.base.dynamic.name()),
        );

        Ok(Some(SignInteractionComplete {
            interaction,
            sign1: sign1?,
            sign2: sign2?,
            element_interaction,
            modality_interaction,
            polarity_interaction,
            dynamic,
        }))
    }
}
