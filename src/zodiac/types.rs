//! Sign taxonomy: the 12 signs and their classification dimensions.

use serde::{Deserialize, Serialize};

/// The four classical elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn name(&self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Water => "water",
        }
    }
}

/// The three modalities (quadruplicities).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Cardinal, Modality::Fixed, Modality::Mutable];

    pub fn name(&self) -> &'static str {
        match self {
            Modality::Cardinal => "cardinal",
            Modality::Fixed => "fixed",
            Modality::Mutable => "mutable",
        }
    }
}

/// Sign polarity. Fire and air signs are positive, earth and water negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub const ALL: [Polarity; 2] = [Polarity::Positive, Polarity::Negative];

    pub fn name(&self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
        }
    }
}

/// Energy type, the yang/yin reading of a sign's polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnergyType {
    Yang,
    Yin,
}

impl EnergyType {
    pub const ALL: [EnergyType; 2] = [EnergyType::Yang, EnergyType::Yin];

    pub fn name(&self) -> &'static str {
        match self {
            EnergyType::Yang => "yang",
            EnergyType::Yin => "yin",
        }
    }
}

/// The seven classical planets, the pair dimension used by the planetary
/// interaction tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// Traditional benefic/malefic grouping, used to author planet-pair scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanetNature {
    Luminary,
    Benefic,
    Malefic,
    Neutral,
}

impl Planet {
    pub const ALL: [Planet; 7] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Planet::Sun => "sun",
            Planet::Moon => "moon",
            Planet::Mercury => "mercury",
            Planet::Venus => "venus",
            Planet::Mars => "mars",
            Planet::Jupiter => "jupiter",
            Planet::Saturn => "saturn",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
        }
    }

    pub fn nature(&self) -> PlanetNature {
        match self {
            Planet::Sun | Planet::Moon => PlanetNature::Luminary,
            Planet::Venus | Planet::Jupiter => PlanetNature::Benefic,
            Planet::Mars | Planet::Saturn => PlanetNature::Malefic,
            Planet::Mercury => PlanetNature::Neutral,
        }
    }

    pub fn from_name(name: &str) -> Option<Planet> {
        Planet::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }
}

/// The twelve zodiac signs in wheel order, Aries at 0 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub const SIGN_ORDER: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// Position on the wheel, 0 = Aries.
    pub fn index(&self) -> usize {
        SIGN_ORDER
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: usize) -> ZodiacSign {
        SIGN_ORDER[index % 12]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "aries",
            ZodiacSign::Taurus => "taurus",
            ZodiacSign::Gemini => "gemini",
            ZodiacSign::Cancer => "cancer",
            ZodiacSign::Leo => "leo",
            ZodiacSign::Virgo => "virgo",
            ZodiacSign::Libra => "libra",
            ZodiacSign::Scorpio => "scorpio",
            ZodiacSign::Sagittarius => "sagittarius",
            ZodiacSign::Capricorn => "capricorn",
            ZodiacSign::Aquarius => "aquarius",
            ZodiacSign::Pisces => "pisces",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub fn from_name(name: &str) -> Option<ZodiacSign> {
        SIGN_ORDER
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// Elements repeat fire/earth/air/water around the wheel.
    pub fn element(&self) -> Element {
        Element::ALL[self.index() % 4]
    }

    /// Modalities repeat cardinal/fixed/mutable around the wheel.
    pub fn modality(&self) -> Modality {
        Modality::ALL[self.index() % 3]
    }

    /// Polarity alternates around the wheel, Aries positive.
    pub fn polarity(&self) -> Polarity {
        Polarity::ALL[self.index() % 2]
    }

    pub fn energy_type(&self) -> EnergyType {
        match self.polarity() {
            Polarity::Positive => EnergyType::Yang,
            Polarity::Negative => EnergyType::Yin,
        }
    }

    /// The house this sign rules in the natural chart, 1-12.
    pub fn natural_house(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// Classical (pre-modern) rulerships.
    pub fn ruling_planet(&self) -> Planet {
        match self {
            ZodiacSign::Aries | ZodiacSign::Scorpio => Planet::Mars,
            ZodiacSign::Taurus | ZodiacSign::Libra => Planet::Venus,
            ZodiacSign::Gemini | ZodiacSign::Virgo => Planet::Mercury,
            ZodiacSign::Cancer => Planet::Moon,
            ZodiacSign::Leo => Planet::Sun,
            ZodiacSign::Sagittarius | ZodiacSign::Pisces => Planet::Jupiter,
            ZodiacSign::Capricorn | ZodiacSign::Aquarius => Planet::Saturn,
        }
    }
}
