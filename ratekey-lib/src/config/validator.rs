use std::collections::HashSet;

use http::HeaderName;

use crate::config::types::{Config, FingerprintConfig};
use crate::error::{RateKeyError, Result};

pub fn validate(config: &Config) -> Result<()> {
    config.fingerprint.validate()?;
    if config.logging.level.trim().is_empty() {
        return Err(RateKeyError::Config("logging.level cannot be empty".into()));
    }
    Ok(())
}

impl FingerprintConfig {
    /// Check that every `ip_headers` entry is a valid, non-repeated header name.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.ip_headers.len());
        for name in &self.ip_headers {
            let parsed = HeaderName::from_bytes(name.trim().as_bytes())
                .map_err(|_| RateKeyError::InvalidHeaderName { name: name.clone() })?;
            if !seen.insert(parsed) {
                return Err(RateKeyError::Config(format!(
                    "ip_headers lists {name:?} more than once"
                )));
            }
        }
        Ok(())
    }
}
