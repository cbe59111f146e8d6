//! In-memory catalog built from the authored tables in [`data`].

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::compat::{clamp_score, InteractionDynamic, PairInteraction, SignInteraction};
use crate::zodiac::{sign_distance, Planet, ZodiacSign, SIGN_ORDER};

use super::data::{
    DISTANCE_ASPECTS, DYNAMIC_DATA, ELEMENT_DATA, ELEMENT_PAIRS, ENERGY_DATA, HOUSE_DATA,
    MODALITY_DATA, MODALITY_PAIRS, PLANET_DATA, POLARITY_DATA, POLARITY_PAIRS, NATURE_PAIRS,
    SIGN_DATA, W_DYNAMIC, W_ELEMENT, W_MODALITY, W_POLARITY,
};
use super::types::{
    DynamicRecord, ElementRecord, EnergyTypeRecord, HouseRecord, ModalityRecord, PlanetRecord,
    PolarityRecord, SignRecord,
};
use super::{
    DynamicRepository, ElementRepository, EnergyTypeRepository, HouseRepository,
    ModalityRepository, PairInteractionRepository, PlanetRepository, PolarityRepository,
    ReferenceCatalog, SignInteractionRepository, SignRepository,
};

/// Records addressed by lowercase name.
pub struct NamedTable<T> {
    rows: HashMap<String, T>,
}

impl<T: Clone + Send + Sync> NamedTable<T> {
    pub fn new(rows: impl IntoIterator<Item = (String, T)>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), v))
                .collect(),
        }
    }

    fn get(&self, name: &str) -> Option<T> {
        self.rows.get(&name.to_ascii_lowercase()).cloned()
    }
}

#[async_trait]
impl SignRepository for NamedTable<SignRecord> {
    async fn find_by_name(&self, name: &str) -> Option<SignRecord> {
        self.get(name)
    }
}

#[async_trait]
impl PlanetRepository for NamedTable<PlanetRecord> {
    async fn find_by_name(&self, name: &str) -> Option<PlanetRecord> {
        self.get(name)
    }
}

#[async_trait]
impl ElementRepository for NamedTable<ElementRecord> {
    async fn find_by_name(&self, name: &str) -> Option<ElementRecord> {
        self.get(name)
    }
}

#[async_trait]
impl ModalityRepository for NamedTable<ModalityRecord> {
    async fn find_by_name(&self, name: &str) -> Option<ModalityRecord> {
        self.get(name)
    }
}

#[async_trait]
impl PolarityRepository for NamedTable<PolarityRecord> {
    async fn find_by_name(&self, name: &str) -> Option<PolarityRecord> {
        self.get(name)
    }
}

#[async_trait]
impl EnergyTypeRepository for NamedTable<EnergyTypeRecord> {
    async fn find_by_name(&self, name: &str) -> Option<EnergyTypeRecord> {
        self.get(name)
    }
}

#[async_trait]
impl DynamicRepository for NamedTable<DynamicRecord> {
    async fn find_by_name(&self, name: &str) -> Option<DynamicRecord> {
        self.get(name)
    }
}

pub struct HouseTable {
    rows: HashMap<u8, HouseRecord>,
}

#[async_trait]
impl HouseRepository for HouseTable {
    async fn find_by_number(&self, number: u8) -> Option<HouseRecord> {
        self.rows.get(&number).cloned()
    }
}

/// Pair rows stored in authored direction, matched in either direction.
pub struct PairTable {
    rows: HashMap<(String, String), PairInteraction>,
}

impl PairTable {
    pub fn new(rows: impl IntoIterator<Item = PairInteraction>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|r| {
                    (
                        (r.entity1.to_ascii_lowercase(), r.entity2.to_ascii_lowercase()),
                        r,
                    )
                })
                .collect(),
        }
    }
}

#[async_trait]
impl PairInteractionRepository for PairTable {
    async fn find_by_pair(&self, a: &str, b: &str) -> Option<PairInteraction> {
        let a = a.to_ascii_lowercase();
        let b = b.to_ascii_lowercase();
        self.rows
            .get(&(a.clone(), b.clone()))
            .or_else(|| self.rows.get(&(b, a)))
            .cloned()
    }
}

pub struct SignPairTable {
    rows: Vec<SignInteraction>,
}

#[async_trait]
impl SignInteractionRepository for SignPairTable {
    async fn find_by_pair(&self, a: ZodiacSign, b: ZodiacSign) -> Option<SignInteraction> {
        self.rows
            .iter()
            .find(|r| {
                (r.base.entity1 == a.name() && r.base.entity2 == b.name())
                    || (r.base.entity1 == b.name() && r.base.entity2 == a.name())
            })
            .cloned()
    }

    async fn find_for_sign(&self, sign: ZodiacSign) -> Vec<SignInteraction> {
        self.rows
            .iter()
            .filter(|r| r.base.involves(sign.name()))
            .cloned()
            .collect()
    }
}

fn owned(strings: &[&str]) -> Vec<String> {
    strings.iter().map(|s| s.to_string()).collect()
}

fn guidance_for(dynamic: InteractionDynamic) -> String {
    DYNAMIC_DATA
        .iter()
        .find(|(d, _, _)| *d == dynamic)
        .map(|(_, _, guidance)| guidance.to_string())
        .unwrap_or_default()
}

fn signs_with(predicate: impl Fn(ZodiacSign) -> bool) -> Vec<String> {
    SIGN_ORDER
        .iter()
        .copied()
        .filter(|s| predicate(*s))
        .map(|s| s.name().to_string())
        .collect()
}

fn build_signs() -> NamedTable<SignRecord> {
    NamedTable::new(SIGN_DATA.iter().map(|(slug, description, keywords)| {
        // Table order mirrors wheel order; derive the dimensions from the enum.
        let sign = ZodiacSign::from_name(slug).unwrap_or(ZodiacSign::Aries);
        (
            slug.to_string(),
            SignRecord {
                name: sign.name().to_string(),
                display_name: sign.display_name().to_string(),
                element: sign.element().name().to_string(),
                modality: sign.modality().name().to_string(),
                polarity: sign.polarity().name().to_string(),
                energy_type: sign.energy_type().name().to_string(),
                ruling_planet: sign.ruling_planet().name().to_string(),
                natural_house: sign.natural_house(),
                description: description.to_string(),
                keywords: owned(keywords),
            },
        )
    }))
}

fn build_planets() -> NamedTable<PlanetRecord> {
    NamedTable::new(PLANET_DATA.iter().map(|(slug, description, keywords)| {
        let planet = Planet::from_name(slug).unwrap_or(Planet::Sun);
        (
            slug.to_string(),
            PlanetRecord {
                name: planet.name().to_string(),
                display_name: planet.display_name().to_string(),
                nature: format!("{:?}", planet.nature()).to_ascii_lowercase(),
                rules: signs_with(|s| s.ruling_planet() == planet),
                description: description.to_string(),
                keywords: owned(keywords),
            },
        )
    }))
}

fn build_houses() -> HouseTable {
    HouseTable {
        rows: HOUSE_DATA
            .iter()
            .map(|(number, name, life_area, keywords)| {
                (
                    *number,
                    HouseRecord {
                        number: *number,
                        name: name.to_string(),
                        natural_sign: ZodiacSign::from_index(*number as usize - 1)
                            .name()
                            .to_string(),
                        life_area: life_area.to_string(),
                        keywords: owned(keywords),
                    },
                )
            })
            .collect(),
    }
}

fn build_elements() -> NamedTable<ElementRecord> {
    NamedTable::new(ELEMENT_DATA.iter().map(|(element, description, keywords)| {
        (
            element.name().to_string(),
            ElementRecord {
                name: element.name().to_string(),
                display_name: capitalize(element.name()),
                description: description.to_string(),
                keywords: owned(keywords),
                signs: signs_with(|s| s.element() == *element),
            },
        )
    }))
}

fn build_modalities() -> NamedTable<ModalityRecord> {
    NamedTable::new(MODALITY_DATA.iter().map(|(modality, description, keywords)| {
        (
            modality.name().to_string(),
            ModalityRecord {
                name: modality.name().to_string(),
                display_name: capitalize(modality.name()),
                description: description.to_string(),
                keywords: owned(keywords),
                signs: signs_with(|s| s.modality() == *modality),
            },
        )
    }))
}

fn build_polarities() -> NamedTable<PolarityRecord> {
    NamedTable::new(POLARITY_DATA.iter().map(|(polarity, description)| {
        (
            polarity.name().to_string(),
            PolarityRecord {
                name: polarity.name().to_string(),
                display_name: capitalize(polarity.name()),
                description: description.to_string(),
                signs: signs_with(|s| s.polarity() == *polarity),
            },
        )
    }))
}

fn build_energy_types() -> NamedTable<EnergyTypeRecord> {
    NamedTable::new(ENERGY_DATA.iter().map(|(name, display, description)| {
        (
            name.to_string(),
            EnergyTypeRecord {
                name: name.to_string(),
                display_name: display.to_string(),
                description: description.to_string(),
            },
        )
    }))
}

fn build_dynamics() -> NamedTable<DynamicRecord> {
    NamedTable::new(DYNAMIC_DATA.iter().map(|(dynamic, description, guidance)| {
        (
            dynamic.name().to_string(),
            DynamicRecord {
                name: dynamic.name().to_string(),
                display_name: capitalize(dynamic.name()),
                description: description.to_string(),
                guidance: guidance.to_string(),
            },
        )
    }))
}

fn dimension_pair(
    entity1: &str,
    entity2: &str,
    score: f64,
    dynamic: InteractionDynamic,
) -> PairInteraction {
    PairInteraction {
        entity1: entity1.to_string(),
        entity2: entity2.to_string(),
        dynamic,
        score: clamp_score(score),
        description: format!(
            "{} and {} form a {} pairing.",
            capitalize(entity1),
            capitalize(entity2),
            dynamic.name()
        ),
        keywords: vec![dynamic.name().to_string()],
        action_guidance: guidance_for(dynamic),
    }
}

fn build_element_pairs() -> PairTable {
    PairTable::new(
        ELEMENT_PAIRS
            .iter()
            .map(|(a, b, score, dynamic)| dimension_pair(a.name(), b.name(), *score, *dynamic)),
    )
}

fn build_modality_pairs() -> PairTable {
    PairTable::new(
        MODALITY_PAIRS
            .iter()
            .map(|(a, b, score, dynamic)| dimension_pair(a.name(), b.name(), *score, *dynamic)),
    )
}

fn build_polarity_pairs() -> PairTable {
    PairTable::new(
        POLARITY_PAIRS
            .iter()
            .map(|(a, b, score, dynamic)| dimension_pair(a.name(), b.name(), *score, *dynamic)),
    )
}

fn nature_pair_score(a: Planet, b: Planet) -> (f64, InteractionDynamic) {
    let na = a.nature();
    let nb = b.nature();
    NATURE_PAIRS
        .iter()
        .find(|(x, y, _, _)| (*x == na && *y == nb) || (*x == nb && *y == na))
        .map(|(_, _, score, dynamic)| (*score, *dynamic))
        .unwrap_or((0.0, InteractionDynamic::Complementary))
}

fn build_planet_pairs() -> PairTable {
    let mut rows = Vec::new();
    for (i, &a) in Planet::ALL.iter().enumerate() {
        for &b in &Planet::ALL[i..] {
            let (score, dynamic) = nature_pair_score(a, b);
            rows.push(dimension_pair(a.name(), b.name(), score, dynamic));
        }
    }
    PairTable::new(rows)
}

fn element_pair_score(a: ZodiacSign, b: ZodiacSign) -> f64 {
    let (ea, eb) = (a.element(), b.element());
    ELEMENT_PAIRS
        .iter()
        .find(|(x, y, _, _)| (*x == ea && *y == eb) || (*x == eb && *y == ea))
        .map(|(_, _, score, _)| *score)
        .unwrap_or(0.0)
}

fn modality_pair_score(a: ZodiacSign, b: ZodiacSign) -> f64 {
    let (ma, mb) = (a.modality(), b.modality());
    MODALITY_PAIRS
        .iter()
        .find(|(x, y, _, _)| (*x == ma && *y == mb) || (*x == mb && *y == ma))
        .map(|(_, _, score, _)| *score)
        .unwrap_or(0.0)
}

fn polarity_pair_score(a: ZodiacSign, b: ZodiacSign) -> f64 {
    let (pa, pb) = (a.polarity(), b.polarity());
    POLARITY_PAIRS
        .iter()
        .find(|(x, y, _, _)| (*x == pa && *y == pb) || (*x == pb && *y == pa))
        .map(|(_, _, score, _)| *score)
        .unwrap_or(0.0)
}

fn build_sign_pairs() -> SignPairTable {
    let mut rows = Vec::new();
    for (i, &a) in SIGN_ORDER.iter().enumerate() {
        for &b in &SIGN_ORDER[i..] {
            let distance = sign_distance(a, b);
            let (aspect, dynamic_score, dynamic) = DISTANCE_ASPECTS
                .iter()
                .find(|(d, _, _, _)| *d == distance)
                .map(|(_, aspect, score, dynamic)| (*aspect, *score, *dynamic))
                .unwrap_or(("conjunction", 0.0, InteractionDynamic::Complementary));

            let element_score = element_pair_score(a, b);
            let modality_score = modality_pair_score(a, b);
            let polarity_score = polarity_pair_score(a, b);
            let total_score = clamp_score(
                W_ELEMENT * element_score
                    + W_MODALITY * modality_score
                    + W_POLARITY * polarity_score
                    + W_DYNAMIC * dynamic_score,
            );

            rows.push(SignInteraction {
                base: PairInteraction {
                    entity1: a.name().to_string(),
                    entity2: b.name().to_string(),
                    dynamic,
                    score: total_score,
                    description: format!(
                        "{} and {} stand {} signs apart, a {} {}.",
                        a.display_name(),
                        b.display_name(),
                        distance,
                        dynamic.name(),
                        aspect
                    ),
                    keywords: vec![aspect.to_string(), dynamic.name().to_string()],
                    action_guidance: guidance_for(dynamic),
                },
                distance,
                element_score: clamp_score(element_score),
                modality_score: clamp_score(modality_score),
                polarity_score: clamp_score(polarity_score),
                dynamic_score: clamp_score(dynamic_score),
                total_score,
            });
        }
    }
    SignPairTable { rows }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Assemble the full in-memory catalog.
pub fn build_catalog() -> ReferenceCatalog {
    ReferenceCatalog {
        signs: Arc::new(build_signs()),
        planets: Arc::new(build_planets()),
        houses: Arc::new(build_houses()),
        elements: Arc::new(build_elements()),
        modalities: Arc::new(build_modalities()),
        polarities: Arc::new(build_polarities()),
        energy_types: Arc::new(build_energy_types()),
        dynamics: Arc::new(build_dynamics()),
        element_interactions: Arc::new(build_element_pairs()),
        modality_interactions: Arc::new(build_modality_pairs()),
        polarity_interactions: Arc::new(build_polarity_pairs()),
        planet_interactions: Arc::new(build_planet_pairs()),
        sign_interactions: Arc::new(build_sign_pairs()),
    }
}
