//! Authored reference tables.
//!
//! Dimension pair scores are authored here; sign-pair rows are assembled
//! from them once at catalog construction with the fixed weights below.
//! Scores combine into a total as
//! `0.35 * element + 0.25 * modality + 0.15 * polarity + 0.25 * dynamic`.

use crate::compat::InteractionDynamic;
use crate::zodiac::{Element, Modality, PlanetNature, Polarity};

pub const W_ELEMENT: f64 = 0.35;
pub const W_MODALITY: f64 = 0.25;
pub const W_POLARITY: f64 = 0.15;
pub const W_DYNAMIC: f64 = 0.25;

// (slug, description, keywords)
pub const SIGN_DATA: &[(&str, &str, &[&str])] = &[
    ("aries", "The initiator of the zodiac, direct and impulsive.", &["bold", "pioneering", "impatient"]),
    ("taurus", "Grounded and steady, devoted to comfort and persistence.", &["steadfast", "sensual", "stubborn"]),
    ("gemini", "Quick-minded and curious, a collector of ideas.", &["curious", "versatile", "restless"]),
    ("cancer", "Protective and intuitive, oriented to home and memory.", &["nurturing", "intuitive", "guarded"]),
    ("leo", "Radiant and expressive, born for the center of the stage.", &["generous", "proud", "dramatic"]),
    ("virgo", "Precise and service-minded, a craftsman of the everyday.", &["analytical", "practical", "exacting"]),
    ("libra", "Diplomatic and aesthetic, always weighing both sides.", &["charming", "fair", "indecisive"]),
    ("scorpio", "Intense and probing, drawn to what lies beneath.", &["passionate", "private", "unyielding"]),
    ("sagittarius", "Expansive and candid, aimed at the far horizon.", &["adventurous", "honest", "blunt"]),
    ("capricorn", "Ambitious and disciplined, a builder of structures.", &["strategic", "patient", "severe"]),
    ("aquarius", "Inventive and detached, loyal to the idea of the future.", &["original", "humanitarian", "aloof"]),
    ("pisces", "Porous and imaginative, dissolving every boundary.", &["compassionate", "dreamy", "elusive"]),
];

// (slug, description, keywords)
pub const PLANET_DATA: &[(&str, &str, &[&str])] = &[
    ("sun", "Identity and vitality, the center the chart organizes around.", &["identity", "vitality", "purpose"]),
    ("moon", "Instinct and emotional memory, the inner weather.", &["emotion", "instinct", "security"]),
    ("mercury", "Perception and exchange, the messenger function.", &["communication", "reason", "trade"]),
    ("venus", "Attraction and valuation, what is loved and why.", &["love", "beauty", "value"]),
    ("mars", "Drive and assertion, the engine of pursuit.", &["desire", "courage", "conflict"]),
    ("jupiter", "Expansion and meaning, the impulse to grow.", &["growth", "faith", "abundance"]),
    ("saturn", "Limit and structure, the discipline of time.", &["boundary", "duty", "mastery"]),
];

// (number, name, life_area, keywords)
pub const HOUSE_DATA: &[(u8, &str, &str, &[&str])] = &[
    (1, "First House", "self and appearance", &["identity", "beginnings"]),
    (2, "Second House", "resources and worth", &["money", "values"]),
    (3, "Third House", "communication and kin", &["learning", "siblings"]),
    (4, "Fourth House", "home and roots", &["family", "foundation"]),
    (5, "Fifth House", "creativity and pleasure", &["romance", "play"]),
    (6, "Sixth House", "work and health", &["service", "routine"]),
    (7, "Seventh House", "partnership", &["marriage", "contracts"]),
    (8, "Eighth House", "shared resources and transformation", &["intimacy", "inheritance"]),
    (9, "Ninth House", "philosophy and travel", &["belief", "distance"]),
    (10, "Tenth House", "career and reputation", &["ambition", "authority"]),
    (11, "Eleventh House", "community and hopes", &["friends", "causes"]),
    (12, "Twelfth House", "solitude and the unseen", &["retreat", "dreams"]),
];

// (element, description, keywords)
pub const ELEMENT_DATA: &[(Element, &str, &[&str])] = &[
    (Element::Fire, "Spirited, spontaneous, oriented to action.", &["energy", "enthusiasm"]),
    (Element::Earth, "Practical, embodied, oriented to material reality.", &["stability", "substance"]),
    (Element::Air, "Mental, social, oriented to ideas and exchange.", &["thought", "connection"]),
    (Element::Water, "Feeling, receptive, oriented to emotional currents.", &["depth", "empathy"]),
];

// (modality, description, keywords)
pub const MODALITY_DATA: &[(Modality, &str, &[&str])] = &[
    (Modality::Cardinal, "Initiates; opens each season of the wheel.", &["initiative", "leadership"]),
    (Modality::Fixed, "Sustains; holds the middle of each season.", &["persistence", "loyalty"]),
    (Modality::Mutable, "Adapts; closes each season and hands it on.", &["flexibility", "change"]),
];

// (polarity, description)
pub const POLARITY_DATA: &[(Polarity, &str)] = &[
    (Polarity::Positive, "Outward-directed, expressive, self-propelling."),
    (Polarity::Negative, "Inward-directed, receptive, self-containing."),
];

pub const ENERGY_DATA: &[(&str, &str, &str)] = &[
    ("yang", "Yang", "Active, radiating energy."),
    ("yin", "Yin", "Receptive, absorbing energy."),
];

// (dynamic, description, guidance)
pub const DYNAMIC_DATA: &[(InteractionDynamic, &str, &str)] = &[
    (
        InteractionDynamic::Harmony,
        "The two energies flow together with little resistance.",
        "Enjoy the ease, but build habits so the bond does not coast.",
    ),
    (
        InteractionDynamic::Tension,
        "The two energies pull in different directions.",
        "Name the friction early and negotiate roles instead of repeating it.",
    ),
    (
        InteractionDynamic::Complementary,
        "Each energy supplies what the other lacks.",
        "Trade strengths deliberately rather than splitting into camps.",
    ),
    (
        InteractionDynamic::Amplification,
        "Like energies reinforce each other, for better and worse.",
        "Channel the shared intensity into a project before it turns inward.",
    ),
];

// Element pair scores, authored in canonical element order.
pub const ELEMENT_PAIRS: &[(Element, Element, f64, InteractionDynamic)] = &[
    (Element::Fire, Element::Fire, 0.70, InteractionDynamic::Amplification),
    (Element::Earth, Element::Earth, 0.60, InteractionDynamic::Amplification),
    (Element::Air, Element::Air, 0.65, InteractionDynamic::Amplification),
    (Element::Water, Element::Water, 0.75, InteractionDynamic::Amplification),
    (Element::Fire, Element::Air, 0.60, InteractionDynamic::Harmony),
    (Element::Earth, Element::Water, 0.60, InteractionDynamic::Harmony),
    (Element::Fire, Element::Earth, -0.40, InteractionDynamic::Tension),
    (Element::Fire, Element::Water, -0.55, InteractionDynamic::Tension),
    (Element::Earth, Element::Air, -0.45, InteractionDynamic::Tension),
    (Element::Air, Element::Water, -0.30, InteractionDynamic::Tension),
];

// Modality pair scores. Same-modality signs square or oppose each other on
// the wheel, hence the friction.
pub const MODALITY_PAIRS: &[(Modality, Modality, f64, InteractionDynamic)] = &[
    (Modality::Cardinal, Modality::Cardinal, -0.30, InteractionDynamic::Tension),
    (Modality::Fixed, Modality::Fixed, -0.45, InteractionDynamic::Tension),
    (Modality::Mutable, Modality::Mutable, -0.10, InteractionDynamic::Tension),
    (Modality::Cardinal, Modality::Fixed, 0.40, InteractionDynamic::Complementary),
    (Modality::Cardinal, Modality::Mutable, 0.45, InteractionDynamic::Complementary),
    (Modality::Fixed, Modality::Mutable, 0.35, InteractionDynamic::Complementary),
];

pub const POLARITY_PAIRS: &[(Polarity, Polarity, f64, InteractionDynamic)] = &[
    (Polarity::Positive, Polarity::Positive, 0.40, InteractionDynamic::Amplification),
    (Polarity::Negative, Polarity::Negative, 0.45, InteractionDynamic::Amplification),
    (Polarity::Positive, Polarity::Negative, 0.35, InteractionDynamic::Complementary),
];

// Planet pair scores are authored by nature combination.
pub const NATURE_PAIRS: &[(PlanetNature, PlanetNature, f64, InteractionDynamic)] = &[
    (PlanetNature::Luminary, PlanetNature::Luminary, 0.70, InteractionDynamic::Harmony),
    (PlanetNature::Luminary, PlanetNature::Benefic, 0.65, InteractionDynamic::Harmony),
    (PlanetNature::Luminary, PlanetNature::Malefic, -0.35, InteractionDynamic::Tension),
    (PlanetNature::Luminary, PlanetNature::Neutral, 0.30, InteractionDynamic::Complementary),
    (PlanetNature::Benefic, PlanetNature::Benefic, 0.75, InteractionDynamic::Harmony),
    (PlanetNature::Benefic, PlanetNature::Malefic, -0.25, InteractionDynamic::Tension),
    (PlanetNature::Benefic, PlanetNature::Neutral, 0.40, InteractionDynamic::Complementary),
    (PlanetNature::Malefic, PlanetNature::Malefic, -0.60, InteractionDynamic::Amplification),
    (PlanetNature::Malefic, PlanetNature::Neutral, -0.15, InteractionDynamic::Tension),
    (PlanetNature::Neutral, PlanetNature::Neutral, 0.25, InteractionDynamic::Amplification),
];

// The classical aspect ladder over wheel distance: conjunction, semi-sextile,
// sextile, square, trine, quincunx, opposition. Supplies each sign pair's
// dynamic sub-score and its overall classification.
pub const DISTANCE_ASPECTS: &[(u8, &str, f64, InteractionDynamic)] = &[
    (0, "conjunction", 0.80, InteractionDynamic::Amplification),
    (1, "semi-sextile", 0.10, InteractionDynamic::Complementary),
    (2, "sextile", 0.50, InteractionDynamic::Harmony),
    (3, "square", -0.60, InteractionDynamic::Tension),
    (4, "trine", 0.80, InteractionDynamic::Harmony),
    (5, "quincunx", -0.30, InteractionDynamic::Tension),
    (6, "opposition", -0.20, InteractionDynamic::Complementary),
];
