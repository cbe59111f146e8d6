pub mod assembly;
pub mod birth;
pub mod catalog;
pub mod chart;
pub mod compat;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod service;
pub mod zodiac;

pub use error::AstroError;
pub use service::AstrologyService;
