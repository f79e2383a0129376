/// HTTP header names read by the trait extractor
///
/// All names are lowercase, which is how [`http::HeaderMap`] stores them.
pub mod names {
    /// Cloudflare's client address header
    pub const CF_CONNECTING_IP: &str = "cf-connecting-ip";

    /// Fastly's client address header
    pub const FASTLY_CLIENT_IP: &str = "fastly-client-ip";

    /// Fly.io's client address header
    pub const FLY_CLIENT_IP: &str = "fly-client-ip";

    /// Akamai / Cloudflare Enterprise client address header
    pub const TRUE_CLIENT_IP: &str = "true-client-ip";

    /// Standard proxy-chain header, defined in RFC 7239
    ///
    /// Example: `for=192.0.2.60;proto=http;by=203.0.113.43, for=198.51.100.17`
    pub const FORWARDED: &str = "forwarded";

    /// De-facto proxy-chain header
    ///
    /// Contains the client IP address followed by every proxy hop, comma-separated.
    /// Only the leftmost entry is used.
    pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

    /// Single-address header set by nginx-style proxies
    pub const X_REAL_IP: &str = "x-real-ip";

    pub const USER_AGENT: &str = "user-agent";

    pub const ACCEPT_LANGUAGE: &str = "accept-language";
}

/// Default header precedence for client IP resolution.
///
/// CDN-specific headers come first since the edge overwrites them, then the
/// RFC 7239 header, then the easily spoofed `X-Forwarded-For` / `X-Real-IP`.
/// First match wins.
pub const DEFAULT_IP_HEADERS: [&str; 7] = [
    names::CF_CONNECTING_IP,
    names::FASTLY_CLIENT_IP,
    names::FLY_CLIENT_IP,
    names::TRUE_CLIENT_IP,
    names::FORWARDED,
    names::X_FORWARDED_FOR,
    names::X_REAL_IP,
];

/// Placeholder values proxies emit when they have no address to report.
///
/// Compared case-insensitively.
pub const INVALID_IP_TOKENS: [&str; 4] = ["", "unknown", "null", "none"];

/// Returns `DEFAULT_IP_HEADERS` as owned strings, e.g. for config defaults.
pub fn default_ip_headers() -> Vec<String> {
    DEFAULT_IP_HEADERS.iter().map(|h| (*h).to_string()).collect()
}
