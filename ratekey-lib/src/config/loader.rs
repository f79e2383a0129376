use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::validator::validate;
use crate::config::Config;
use crate::error::{RateKeyError, Result};

pub fn load_from_path<P: AsRef<Path>>(p: P) -> Result<Config> {
    let path = p.as_ref();
    let txt = fs::read_to_string(path)?;
    let cfg = from_toml_str(&txt)?;
    debug!(path = %path.display(), "configuration loaded");
    Ok(cfg)
}

pub fn from_toml_str(txt: &str) -> Result<Config> {
    let cfg: Config = toml::from_str(txt)
        .map_err(|e| RateKeyError::Config(format!("Failed to parse config: {e}")))?;

    validate(&cfg)?;

    Ok(cfg)
}
