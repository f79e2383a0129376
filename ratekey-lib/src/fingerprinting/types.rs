use serde::Serialize;

use super::payload::join_parts;

/// Coarse request traits a fingerprint is derived from.
///
/// Every field is a true absence when missing: an empty `Some` never
/// appears for `ip`, `user_agent` or `accept_language`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Traits {
    /// Client IP resolved from trusted headers.
    pub ip: Option<String>,
    /// Trimmed `User-Agent`.
    pub user_agent: Option<String>,
    /// Trimmed `Accept-Language`.
    pub accept_language: Option<String>,
    /// Request method; only set when method scoping is enabled.
    pub method: Option<String>,
    /// Request path, after the optional normalizer; only set when path scoping is enabled.
    pub path: Option<String>,
}

/// Outcome of [`fingerprint`](super::fingerprint).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FingerprintResult {
    /// Digest of the joined `parts`.
    pub hash: String,
    /// Exact segments that were joined and hashed.
    pub parts: Vec<String>,
    pub traits: Traits,
}

impl FingerprintResult {
    /// The `|`-joined payload that was fed to the hash function.
    pub fn payload(&self) -> String {
        join_parts(&self.parts)
    }
}
