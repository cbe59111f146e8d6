use serde::{Deserialize, Serialize};

use crate::zodiac::{Planet, ZodiacSign};

/// The five core chart points. Rising is a house cusp, not a planet, and
/// goes through the ascendant computation instead of a body longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Body {
    Sun,
    Moon,
    Rising,
    Venus,
    Mars,
}

impl Body {
    pub const ALL: [Body; 5] = [Body::Sun, Body::Moon, Body::Rising, Body::Venus, Body::Mars];

    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Moon => "moon",
            Body::Rising => "rising",
            Body::Venus => "venus",
            Body::Mars => "mars",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Rising => "Rising",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
        }
    }

    pub fn from_name(name: &str) -> Option<Body> {
        Body::ALL
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }

    /// The classical planet behind this chart point, None for Rising.
    pub fn as_planet(&self) -> Option<Planet> {
        match self {
            Body::Sun => Some(Planet::Sun),
            Body::Moon => Some(Planet::Moon),
            Body::Venus => Some(Planet::Venus),
            Body::Mars => Some(Planet::Mars),
            Body::Rising => None,
        }
    }
}

/// A single chart point's zodiac placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetaryPosition {
    pub body: Body,
    pub sign: ZodiacSign,
    /// Degrees into the sign, [0, 30).
    pub degrees_in_sign: f64,
    /// Normalized ecliptic longitude, [0, 360).
    pub absolute_degrees: f64,
}

/// The computed core placements. Bodies not requested stay None and are
/// omitted when serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreAstrology {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sun: Option<PlanetaryPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moon: Option<PlanetaryPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rising: Option<PlanetaryPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venus: Option<PlanetaryPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mars: Option<PlanetaryPosition>,
}

impl CoreAstrology {
    pub fn position(&self, body: Body) -> Option<&PlanetaryPosition> {
        match body {
            Body::Sun => self.sun.as_ref(),
            Body::Moon => self.moon.as_ref(),
            Body::Rising => self.rising.as_ref(),
            Body::Venus => self.venus.as_ref(),
            Body::Mars => self.mars.as_ref(),
        }
    }

    pub fn set_position(&mut self, position: PlanetaryPosition) {
        let slot = match position.body {
            Body::Sun => &mut self.sun,
            Body::Moon => &mut self.moon,
            Body::Rising => &mut self.rising,
            Body::Venus => &mut self.venus,
            Body::Mars => &mut self.mars,
        };
        *slot = Some(position);
    }

    pub fn populated_bodies(&self) -> Vec<Body> {
        Body::ALL
            .iter()
            .copied()
            .filter(|b| self.position(*b).is_some())
            .collect()
    }

    /// The five signs, when every body is populated.
    pub fn signs(&self) -> Option<CoreSigns> {
        Some(CoreSigns {
            sun: self.sun.as_ref()?.sign,
            moon: self.moon.as_ref()?.sign,
            rising: self.rising.as_ref()?.sign,
            venus: self.venus.as_ref()?.sign,
            mars: self.mars.as_ref()?.sign,
        })
    }
}

/// Sign placements for all five bodies, the input to compatibility scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreSigns {
    pub sun: ZodiacSign,
    pub moon: ZodiacSign,
    pub rising: ZodiacSign,
    pub venus: ZodiacSign,
    pub mars: ZodiacSign,
}

impl CoreSigns {
    pub fn sign_of(&self, body: Body) -> ZodiacSign {
        match body {
            Body::Sun => self.sun,
            Body::Moon => self.moon,
            Body::Rising => self.rising,
            Body::Venus => self.venus,
            Body::Mars => self.mars,
        }
    }
}
