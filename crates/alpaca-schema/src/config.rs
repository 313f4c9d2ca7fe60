use crate::object::ObjectMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read descriptor file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse descriptor: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
}

/// A parsed alpaca descriptor.
///
/// Every field is optional in the source document; unknown top-level keys
/// are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub author: String,
    #[serde(default, rename = "bundle-id")]
    pub bundle_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub objects: ObjectMap,
    #[serde(default)]
    pub readme: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
    #[serde(default)]
    pub version: String,
}

pub fn parse_config_str(input: &str) -> Result<Config, ConfigError> {
    Ok(serde_yaml::from_str(input)?)
}

pub fn parse_config_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config_str(&content)
}
