//! RON configuration loading. A missing or malformed file is a startup
//! error; there is no partial default.

use std::fs;
use std::path::Path;

use harvest_core::HarvestConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("invalid RON config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

pub fn load(path: &Path) -> Result<HarvestConfig, ConfigError> {
    let text = fs::read_to_string(path)?;
    Ok(ron::from_str(&text)?)
}
