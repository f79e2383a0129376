use serde::Deserialize;

use crate::fingerprinting::headers::default_ip_headers;
use crate::fingerprinting::normalize::collapse_ids;
use crate::fingerprinting::FingerprintOptions;

/// Built-in path normalization strategies
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PathNormalization {
    /// Use the request path as-is
    #[default]
    None,
    /// Replace numeric and UUID segments with `:id` / `:uuid`
    CollapseIds,
}

/// Fingerprinting configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FingerprintConfig {
    /// Trusted client IP headers, highest precedence first
    /// Only list headers your edge proxy sets or overwrites
    /// Default: cf-connecting-ip, fastly-client-ip, fly-client-ip, true-client-ip,
    /// forwarded, x-forwarded-for, x-real-ip
    #[serde(default = "default_ip_headers")]
    pub ip_headers: Vec<String>,
    /// Include the request method in the fingerprint
    /// Default: false
    #[serde(default)]
    pub include_method: bool,
    /// Include the request path in the fingerprint
    /// Default: false
    #[serde(default)]
    pub include_path: bool,
    /// Normalization applied to the path when `include_path` is set
    /// Default: "none"
    #[serde(default)]
    pub path_normalization: PathNormalization,
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            ip_headers: default_ip_headers(),
            include_method: false,
            include_path: false,
            path_normalization: PathNormalization::None,
        }
    }
}

impl FingerprintConfig {
    /// Per-call options equivalent to this configuration.
    ///
    /// Header names are lowercased. Call [`validate`](Self::validate) first
    /// when the configuration comes from outside.
    pub fn to_options(&self) -> FingerprintOptions {
        let options = FingerprintOptions::new()
            .with_ip_headers(self.ip_headers.iter().map(|h| h.trim().to_ascii_lowercase()))
            .include_method(self.include_method)
            .include_path(self.include_path);

        match self.path_normalization {
            PathNormalization::None => options,
            PathNormalization::CollapseIds => options.with_path_normalizer(collapse_ids),
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    /// Default: "info"
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Show module path (target) in log messages
    /// Default: false
    #[serde(default)]
    pub show_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), show_target: false }
    }
}

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Fingerprinting configuration
    #[serde(default)]
    pub fingerprint: FingerprintConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}
