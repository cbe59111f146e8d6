pub mod orchestrator;
pub mod types;

pub use orchestrator::{AssemblyError, AssemblyOrchestrator};
pub use types::{
    AstrologyCalculated, AstrologyComplete, BodyComplete, BodyInteractionScore, BodyScore,
    PlanetaryInteractionComplete, SignComplete, SignInteractionComplete,
};
