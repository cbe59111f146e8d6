pub mod mapper;
pub mod types;

pub use mapper::{map_longitude, normalize_degrees, sign_distance, ZodiacError, ZodiacPlacement};
pub use types::{Element, EnergyType, Modality, Planet, PlanetNature, Polarity, ZodiacSign, SIGN_ORDER};
