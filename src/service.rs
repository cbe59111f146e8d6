//! Service facade over the calculator, scoring engine, and orchestrator.
//!
//! This is the surface an HTTP layer consumes; nothing here caches,
//! paginates, or persists.

use std::sync::Arc;

use crate::assembly::{
    AssemblyOrchestrator, AstrologyCalculated, AstrologyComplete, SignInteractionComplete,
};
use crate::birth::BirthFacts;
use crate::catalog::ReferenceCatalog;
use crate::chart::{Body, CoreAstrology, CoreSigns, PositionCalculator};
use crate::compat::SignInteraction;
use crate::config::SynastriaConfig;
use crate::ephemeris::{ApproxEphemeris, AstronomicalEngine};
use crate::error::AstroError;
use crate::zodiac::ZodiacSign;

pub struct AstrologyService {
    calculator: PositionCalculator,
    orchestrator: AssemblyOrchestrator,
    default_bodies: Vec<Body>,
}

impl AstrologyService {
    pub fn new(engine: Arc<dyn AstronomicalEngine>, catalog: ReferenceCatalog) -> Self {
        Self::with_config(engine, catalog, &SynastriaConfig::default())
    }

    pub fn with_config(
        engine: Arc<dyn AstronomicalEngine>,
        catalog: ReferenceCatalog,
        config: &SynastriaConfig,
    ) -> Self {
        if let Some(path) = &config.ephemeris_path {
            engine.set_ephemeris_data_path(path);
        }
        Self {
            calculator: PositionCalculator::new(engine).with_house_system(config.house_system),
            orchestrator: AssemblyOrchestrator::new(catalog),
            default_bodies: config.default_bodies.clone(),
        }
    }

    /// Built-in reduced-precision engine plus the authored catalog.
    pub fn builtin() -> Self {
        Self::new(Arc::new(ApproxEphemeris::new()), ReferenceCatalog::in_memory())
    }

    /// Placements for the requested bodies, or the configured default set
    /// when `bodies` is None.
    pub async fn calculate_core_astrology(
        &self,
        facts: &BirthFacts,
        bodies: Option<&[Body]>,
    ) -> Result<CoreAstrology, AstroError> {
        let requested = bodies.unwrap_or(&self.default_bodies);
        self.calculator.calculate_core_astrology(facts, requested).await
    }

    pub async fn calculate_user_astrology_data(
        &self,
        signs: &CoreSigns,
        positions: Option<&CoreAstrology>,
    ) -> Result<AstrologyCalculated, AstroError> {
        Ok(self
            .orchestrator
            .calculate_user_astrology_data(signs, positions)
            .await?)
    }

    pub async fn assemble_complete_astrology_data(
        &self,
        calculated: &AstrologyCalculated,
    ) -> Result<AstrologyComplete, AstroError> {
        Ok(self
            .orchestrator
            .assemble_complete_astrology_data(calculated)
            .await?)
    }

    pub async fn find_sign_interaction_complete(
        &self,
        sign1: ZodiacSign,
        sign2: ZodiacSign,
    ) -> Result<Option<SignInteractionComplete>, AstroError> {
        Ok(self
            .orchestrator
            .find_sign_interaction_complete(sign1, sign2)
            .await?)
    }

    pub async fn find_best_interaction(&self, sign: ZodiacSign) -> Option<SignInteraction> {
        self.orchestrator.scoring_engine().best_interaction(sign).await
    }

    pub async fn find_worst_interaction(&self, sign: ZodiacSign) -> Option<SignInteraction> {
        self.orchestrator.scoring_engine().worst_interaction(sign).await
    }
}
