//! TOML-backed settings for the service facade.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::chart::Body;
use crate::ephemeris::HouseSystem;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown house system: {0}")]
    UnknownHouseSystem(String),
    #[error("unknown body: {0}")]
    UnknownBody(String),
}

#[derive(Debug, Clone)]
pub struct SynastriaConfig {
    pub house_system: HouseSystem,
    /// File-backed ephemeris data, when a real engine is available.
    pub ephemeris_path: Option<PathBuf>,
    /// Bodies computed when a caller does not request a subset.
    pub default_bodies: Vec<Body>,
}

impl Default for SynastriaConfig {
    fn default() -> Self {
        Self {
            house_system: HouseSystem::default(),
            ephemeris_path: None,
            default_bodies: Body::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct SynastriaToml {
    #[serde(default)]
    house_system: Option<String>,
    #[serde(default)]
    ephemeris_path: Option<PathBuf>,
    #[serde(default)]
    bodies: Option<Vec<String>>,
}

impl SynastriaConfig {
    pub fn from_toml_str(text: &str) -> Result<SynastriaConfig, ConfigError> {
        let raw: SynastriaToml = toml::from_str(text)?;
        let mut config = SynastriaConfig::default();
        if let Some(name) = raw.house_system {
            config.house_system = HouseSystem::from_name(&name)
                .ok_or(ConfigError::UnknownHouseSystem(name))?;
        }
        if let Some(names) = raw.bodies {
            let mut bodies = Vec::with_capacity(names.len());
            for name in names {
                bodies.push(Body::from_name(&name).ok_or(ConfigError::UnknownBody(name))?);
            }
            config.default_bodies = bodies;
        }
        config.ephemeris_path = raw.ephemeris_path;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<SynastriaConfig, ConfigError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SynastriaConfig::default();
        assert_eq!(config.house_system, HouseSystem::Placidus);
        assert_eq!(config.default_bodies.len(), 5);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = SynastriaConfig::from_toml_str(
            r#"
house_system = "whole_sign"
bodies = ["sun", "moon"]
"#,
        )
        .unwrap();
        assert_eq!(config.house_system, HouseSystem::WholeSign);
        assert_eq!(config.default_bodies, vec![Body::Sun, Body::Moon]);
        assert!(config.ephemeris_path.is_none());
    }

    #[test]
    fn test_unknown_house_system_rejected() {
        let result = SynastriaConfig::from_toml_str(r#"house_system = "topocentric_deluxe""#);
        assert!(matches!(result, Err(ConfigError::UnknownHouseSystem(_))));
    }
}
