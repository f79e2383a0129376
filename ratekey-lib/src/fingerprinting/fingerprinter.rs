use tracing::trace;

use super::extractor::{extract_traits, FingerprintOptions};
use super::hash::hash_bytes;
use super::payload::{build_parts, join_parts};
use super::source::RequestSource;
use super::types::{FingerprintResult, Traits};
use crate::config::FingerprintConfig;
use crate::error::Result;

/// Derive the rate-limit fingerprint of a request.
///
/// Extracts [`Traits`], serializes them with [`build_parts`], joins the parts
/// with `|` and hashes the UTF-8 bytes with `options.hash_fn`, or FNV-1a when
/// none is set. Panics raised by a caller-supplied hash function or path
/// normalizer are not caught.
pub fn fingerprint<S>(source: &S, options: &FingerprintOptions) -> FingerprintResult
where
    S: RequestSource + ?Sized,
{
    let traits = extract_traits(source, options);
    let parts = build_parts(&traits);
    let payload = join_parts(&parts);

    let hash = match &options.hash_fn {
        Some(hash_fn) => hash_fn(payload.as_bytes()),
        None => hash_bytes(payload.as_bytes()),
    };

    trace!(hash = %hash, segments = parts.len(), "computed request fingerprint");

    FingerprintResult { hash, parts, traits }
}

/// Reusable fingerprinting configuration.
///
/// Cheap to clone and safe to share between threads; holds no per-request state.
#[derive(Debug, Clone, Default)]
pub struct Fingerprinter {
    options: FingerprintOptions,
}

impl Fingerprinter {
    pub fn new(options: FingerprintOptions) -> Self {
        Self { options }
    }

    /// Build from a configuration, validating header names first.
    pub fn from_config(config: &FingerprintConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.to_options()))
    }

    pub fn options(&self) -> &FingerprintOptions {
        &self.options
    }

    pub fn fingerprint<S: RequestSource + ?Sized>(&self, source: &S) -> FingerprintResult {
        fingerprint(source, &self.options)
    }

    pub fn traits<S: RequestSource + ?Sized>(&self, source: &S) -> Traits {
        extract_traits(source, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprinting::RequestParts;
    use http::{HeaderMap, HeaderValue};

    fn source() -> RequestParts {
        let mut headers = HeaderMap::new();
        headers.insert("cf-connecting-ip", HeaderValue::from_static("203.0.113.10"));
        headers.insert("user-agent", HeaderValue::from_static("TestAgent/1.0"));
        headers.insert("accept-language", HeaderValue::from_static("en-US,en;q=0.9"));
        RequestParts::new(headers).with_method("POST").with_url("/v1/resource")
    }

    #[test]
    fn test_default_hash_is_fnv_of_payload() {
        let result = fingerprint(&source(), &FingerprintOptions::default());
        assert_eq!(result.payload(), "ip:203.0.113.10|ua:TestAgent/1.0|al:en-US,en;q=0.9");
        assert_eq!(result.hash, hash_bytes(result.payload().as_bytes()));
    }

    #[test]
    fn test_custom_hash_bypasses_fnv() {
        let options =
            FingerprintOptions::new().with_hash_fn(|bytes: &[u8]| format!("len={}", bytes.len()));
        let result = fingerprint(&source(), &options);
        assert_eq!(result.hash, format!("len={}", result.payload().len()));
    }

    #[test]
    fn test_fingerprinter_matches_free_function() {
        let options = FingerprintOptions::new().include_method(true);
        let fingerprinter = Fingerprinter::new(options.clone());
        assert_eq!(fingerprinter.fingerprint(&source()), fingerprint(&source(), &options));
        assert_eq!(fingerprinter.traits(&source()).method.as_deref(), Some("POST"));
    }
}
