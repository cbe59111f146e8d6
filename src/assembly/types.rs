//! Fully annotated result shapes assembled from reference data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{
    DynamicRecord, ElementRecord, EnergyTypeRecord, HouseRecord, ModalityRecord, PlanetRecord,
    PolarityRecord, SignRecord,
};
use crate::chart::{Body, CoreAstrology, CoreSigns, PlanetaryPosition};
use crate::compat::{PairInteraction, SignInteraction};
use crate::zodiac::ZodiacSign;

/// A sign with every nested reference record attached. The sign record
/// itself is required; nested records degrade to None when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignComplete {
    pub sign: SignRecord,
    pub element: Option<ElementRecord>,
    pub modality: Option<ModalityRecord>,
    pub polarity: Option<PolarityRecord>,
    pub energy_type: Option<EnergyTypeRecord>,
    pub house: Option<HouseRecord>,
    pub ruling_planet: Option<PlanetRecord>,
}

/// A sign-pair interaction with both signs and the per-dimension
/// interactions expanded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInteractionComplete {
    pub interaction: SignInteraction,
    pub sign1: SignComplete,
    pub sign2: SignComplete,
    pub element_interaction: Option<PairInteraction>,
    pub modality_interaction: Option<PairInteraction>,
    pub polarity_interaction: Option<PairInteraction>,
    pub dynamic: Option<DynamicRecord>,
}

/// One body's scored relation to another body in the same chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyInteractionScore {
    pub body: Body,
    pub other_body: Body,
    pub sign: ZodiacSign,
    pub other_sign: ZodiacSign,
    pub distance: u8,
    pub element_score: f64,
    pub modality_score: f64,
    pub polarity_score: f64,
    pub dynamic_score: f64,
    pub total_score: f64,
}

/// A body's placement plus its aggregate score against the other four.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyScore {
    pub body: Body,
    pub sign: ZodiacSign,
    pub total_score: f64,
    pub interactions: Vec<BodyInteractionScore>,
}

/// The numeric scoring rollup for one chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstrologyCalculated {
    pub signs: CoreSigns,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<CoreAstrology>,
    pub body_scores: Vec<BodyScore>,
    pub total_score: f64,
    pub created_at: DateTime<Utc>,
    pub last_calculated_at: DateTime<Utc>,
}

/// One of the ten fixed body pairs, annotated. `planet_interaction` is None
/// for pairs involving Rising, which is not a classical planet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetaryInteractionComplete {
    pub body1: Body,
    pub body2: Body,
    pub planet_interaction: Option<PairInteraction>,
    pub sign_interaction: Option<SignInteraction>,
}

/// A body with its placement and reference records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyComplete {
    pub body: Body,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PlanetaryPosition>,
    pub planet: Option<PlanetRecord>,
    pub sign: SignComplete,
}

/// The fully annotated chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstrologyComplete {
    pub calculated: AstrologyCalculated,
    pub bodies: Vec<BodyComplete>,
    pub planetary_interactions: Vec<PlanetaryInteractionComplete>,
}
