//! Reference catalog record shapes. These are read-only, precomputed data;
//! the computation core only ever looks them up.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignRecord {
    pub name: String,
    pub display_name: String,
    pub element: String,
    pub modality: String,
    pub polarity: String,
    pub energy_type: String,
    pub ruling_planet: String,
    pub natural_house: u8,
    pub description: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetRecord {
    pub name: String,
    pub display_name: String,
    pub nature: String,
    pub rules: Vec<String>,
    pub description: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseRecord {
    pub number: u8,
    pub name: String,
    pub natural_sign: String,
    pub life_area: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRecord {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub signs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalityRecord {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub signs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolarityRecord {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub signs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyTypeRecord {
    pub name: String,
    pub display_name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicRecord {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub guidance: String,
}
