pub mod extractor;
pub mod fingerprinter;
pub mod forwarded;
pub mod hash;
pub mod headers;
pub mod ip;
pub mod normalize;
pub mod payload;
pub mod source;
pub mod types;

pub use extractor::{extract_traits, FingerprintOptions, PathNormalizer};
pub use fingerprinter::{fingerprint, Fingerprinter};
pub use hash::{hash_bytes, HashFn};
pub use headers::{names, DEFAULT_IP_HEADERS};
pub use ip::{normalize_ip_candidate, resolve_client_ip};
pub use payload::build_parts;
pub use source::{RequestParts, RequestSource, RequestUrl, UrlValue};
pub use types::{FingerprintResult, Traits};
