use crate::{
    conf::{AdminConfig, AemConfig, RefreshConfig},
    core::HeadlessError::{self, ConfigParsingError},
};
use config::Config as CConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub aem: AemConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub admin: AdminConfig,
}

impl Config {
    pub fn from_str(toml_str: &str) -> Result<Config, HeadlessError> {
        let config = CConfig::builder()
            .add_source(config::File::from_str(toml_str, config::FileFormat::Toml))
            .build()
            .map_err(|e| ConfigParsingError(e.to_string()))?
            .try_deserialize::<Config>()
            .map_err(|e| ConfigParsingError(e.to_string()))?;
        return Ok(config);
    }

    pub fn from_file(path: &str) -> Result<Config, HeadlessError> {
        let config = CConfig::builder()
            .add_source(config::File::with_name(path))
            .build()
            .map_err(|e| ConfigParsingError(e.to_string()))?
            .try_deserialize::<Config>()
            .map_err(|e| ConfigParsingError(e.to_string()))?;
        return Ok(config);
    }
}
