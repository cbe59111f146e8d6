use serde::{Deserialize, Serialize};

/// Categorical classification of how two entities interact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionDynamic {
    Harmony,
    Tension,
    Complementary,
    Amplification,
}

impl InteractionDynamic {
    pub const ALL: [InteractionDynamic; 4] = [
        InteractionDynamic::Harmony,
        InteractionDynamic::Tension,
        InteractionDynamic::Complementary,
        InteractionDynamic::Amplification,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            InteractionDynamic::Harmony => "harmony",
            InteractionDynamic::Tension => "tension",
            InteractionDynamic::Complementary => "complementary",
            InteractionDynamic::Amplification => "amplification",
        }
    }

    pub fn from_name(name: &str) -> Option<InteractionDynamic> {
        InteractionDynamic::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }
}

/// All interaction scores live in [-1, 1].
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

/// A scored interaction between two entities of one dimension. Content is
/// symmetric but storage is directional: rows are kept as authored and the
/// scoring engine swaps entity1/entity2 so the queried entity comes first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairInteraction {
    pub entity1: String,
    pub entity2: String,
    pub dynamic: InteractionDynamic,
    pub score: f64,
    pub description: String,
    pub keywords: Vec<String>,
    pub action_guidance: String,
}

impl PairInteraction {
    /// The same record with the entities reversed.
    pub fn swapped(&self) -> PairInteraction {
        PairInteraction {
            entity1: self.entity2.clone(),
            entity2: self.entity1.clone(),
            ..self.clone()
        }
    }

    pub fn involves(&self, entity: &str) -> bool {
        self.entity1.eq_ignore_ascii_case(entity) || self.entity2.eq_ignore_ascii_case(entity)
    }
}

/// A sign-pair interaction: the base record plus wheel distance and the four
/// authored sub-scores behind the combined total.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInteraction {
    #[serde(flatten)]
    pub base: PairInteraction,
    /// Minimum wheel steps between the signs, 0-6.
    pub distance: u8,
    pub element_score: f64,
    pub modality_score: f64,
    pub polarity_score: f64,
    pub dynamic_score: f64,
    pub total_score: f64,
}

impl SignInteraction {
    pub fn swapped(&self) -> SignInteraction {
        SignInteraction {
            base: self.base.swapped(),
            ..self.clone()
        }
    }
}
