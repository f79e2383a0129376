#![forbid(unsafe_code)]

//! Deterministic, low-entropy request fingerprints for rate limiting.
//!
//! A fingerprint combines the client IP taken from trusted proxy headers with
//! `User-Agent`, `Accept-Language` and, optionally, the request method and
//! path. It is a rate-limit bucket key, not an identity: clients behind the
//! same NAT or VPN egress share one on purpose.
//!
//! ```
//! use http::{HeaderMap, HeaderValue};
//! use ratekey_lib::{fingerprint, FingerprintOptions, RequestParts};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert("x-forwarded-for", HeaderValue::from_static("198.51.100.8, 10.0.0.1"));
//! headers.insert("user-agent", HeaderValue::from_static("curl/8.5.0"));
//!
//! let request = RequestParts::new(headers).with_method("GET").with_url("/search?q=x");
//! let result = fingerprint(&request, &FingerprintOptions::new().include_path(true));
//!
//! assert_eq!(result.traits.ip.as_deref(), Some("198.51.100.8"));
//! assert_eq!(result.parts, ["ip:198.51.100.8", "ua:curl/8.5.0", "al:", "path:/search"]);
//! assert_eq!(result.hash.len(), 16);
//! ```

pub mod config;
pub mod error;
pub mod fingerprinting;
pub mod telemetry;

pub use config::{from_toml_str, load_from_path, Config, FingerprintConfig, LoggingConfig};
pub use error::{RateKeyError, Result};
pub use fingerprinting::{
    extract_traits, fingerprint, hash_bytes, names, resolve_client_ip, FingerprintOptions,
    FingerprintResult, Fingerprinter, RequestParts, RequestSource, Traits, DEFAULT_IP_HEADERS,
};
pub use telemetry::init_tracing;
