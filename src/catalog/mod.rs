//! Reference-data repositories.
//!
//! One repository per dimension, all read-only. Pair repositories match
//! direction-agnostically but return rows exactly as stored; putting the
//! queried entity first is the scoring engine's job.

pub mod data;
pub mod memory;
pub mod types;

use std::sync::Arc;

use async_trait::async_trait;

use crate::compat::{PairInteraction, SignInteraction};
use crate::zodiac::ZodiacSign;

pub use memory::{NamedTable, PairTable, SignPairTable};
pub use types::{
    DynamicRecord, ElementRecord, EnergyTypeRecord, HouseRecord, ModalityRecord, PlanetRecord,
    PolarityRecord, SignRecord,
};

#[async_trait]
pub trait SignRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Option<SignRecord>;
}

#[async_trait]
pub trait PlanetRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Option<PlanetRecord>;
}

#[async_trait]
pub trait HouseRepository: Send + Sync {
    async fn find_by_number(&self, number: u8) -> Option<HouseRecord>;
}

#[async_trait]
pub trait ElementRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Option<ElementRecord>;
}

#[async_trait]
pub trait ModalityRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Option<ModalityRecord>;
}

#[async_trait]
pub trait PolarityRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Option<PolarityRecord>;
}

#[async_trait]
pub trait EnergyTypeRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Option<EnergyTypeRecord>;
}

#[async_trait]
pub trait DynamicRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Option<DynamicRecord>;
}

/// Pair lookup over one dimension (elements, modalities, polarities,
/// planets). Matches either storage direction.
#[async_trait]
pub trait PairInteractionRepository: Send + Sync {
    async fn find_by_pair(&self, a: &str, b: &str) -> Option<PairInteraction>;
}

#[async_trait]
pub trait SignInteractionRepository: Send + Sync {
    async fn find_by_pair(&self, a: ZodiacSign, b: ZodiacSign) -> Option<SignInteraction>;
    /// Every stored row involving the sign, in storage order and direction.
    async fn find_for_sign(&self, sign: ZodiacSign) -> Vec<SignInteraction>;
}

/// Handle bundle over every dimension repository. Cheap to clone; slots can
/// be swapped individually, which is how tests inject missing-data doubles.
#[derive(Clone)]
pub struct ReferenceCatalog {
    pub signs: Arc<dyn SignRepository>,
    pub planets: Arc<dyn PlanetRepository>,
    pub houses: Arc<dyn HouseRepository>,
    pub elements: Arc<dyn ElementRepository>,
    pub modalities: Arc<dyn ModalityRepository>,
    pub polarities: Arc<dyn PolarityRepository>,
    pub energy_types: Arc<dyn EnergyTypeRepository>,
    pub dynamics: Arc<dyn DynamicRepository>,
    pub element_interactions: Arc<dyn PairInteractionRepository>,
    pub modality_interactions: Arc<dyn PairInteractionRepository>,
    pub polarity_interactions: Arc<dyn PairInteractionRepository>,
    pub planet_interactions: Arc<dyn PairInteractionRepository>,
    pub sign_interactions: Arc<dyn SignInteractionRepository>,
}

impl ReferenceCatalog {
    /// Catalog backed by the built-in authored tables.
    pub fn in_memory() -> ReferenceCatalog {
        memory::build_catalog()
    }
}
