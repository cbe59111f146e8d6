pub mod engine;
pub mod types;

pub use engine::CompatibilityEngine;
pub use types::{clamp_score, InteractionDynamic, PairInteraction, SignInteraction};
