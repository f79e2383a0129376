use std::fmt;
use std::sync::Arc;

use http::HeaderMap;
use tracing::trace;
use url::Url;

use super::hash::HashFn;
use super::headers::{names, DEFAULT_IP_HEADERS};
use super::ip::resolve_client_ip;
use super::source::{header_value, RequestSource, RequestUrl};
use super::types::Traits;

/// Base authority used to resolve root-relative URL strings.
///
/// Only the path of the result is ever read.
pub const PLACEHOLDER_BASE: &str = "http://localhost/";

/// Rewrites a request path before it is hashed, e.g. `/users/42` -> `/users/:id`.
///
/// The returned string is used verbatim.
pub type PathNormalizer = dyn Fn(&str) -> String + Send + Sync;

/// Per-call fingerprinting settings.
///
/// The default resolves the IP from [`DEFAULT_IP_HEADERS`], leaves method and
/// path out of the fingerprint and hashes with FNV-1a.
#[derive(Clone, Default)]
pub struct FingerprintOptions {
    /// Trusted IP headers in precedence order; `None` means [`DEFAULT_IP_HEADERS`].
    pub ip_headers: Option<Vec<String>>,
    /// Scope the fingerprint by request method
    pub include_method: bool,
    /// Scope the fingerprint by request path
    pub include_path: bool,
    /// Applied to the resolved path when `include_path` is set
    pub path_normalizer: Option<Arc<PathNormalizer>>,
    /// Replaces the default FNV-1a digest
    pub hash_fn: Option<Arc<HashFn>>,
}

impl FingerprintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ip_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ip_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn include_method(mut self, include: bool) -> Self {
        self.include_method = include;
        self
    }

    pub fn include_path(mut self, include: bool) -> Self {
        self.include_path = include;
        self
    }

    pub fn with_path_normalizer<F>(mut self, normalizer: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.path_normalizer = Some(Arc::new(normalizer));
        self
    }

    pub fn with_hash_fn<F>(mut self, hash_fn: F) -> Self
    where
        F: Fn(&[u8]) -> String + Send + Sync + 'static,
    {
        self.hash_fn = Some(Arc::new(hash_fn));
        self
    }
}

impl fmt::Debug for FingerprintOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FingerprintOptions")
            .field("ip_headers", &self.ip_headers)
            .field("include_method", &self.include_method)
            .field("include_path", &self.include_path)
            .field("path_normalizer", &self.path_normalizer.is_some())
            .field("hash_fn", &self.hash_fn.is_some())
            .finish()
    }
}

/// Extract the coarse traits of a request.
///
/// Pure: the result depends only on the source and the options.
pub fn extract_traits<S>(source: &S, options: &FingerprintOptions) -> Traits
where
    S: RequestSource + ?Sized,
{
    let headers = source.headers();

    let ip = match &options.ip_headers {
        Some(precedence) => resolve_client_ip(headers, precedence.as_slice()),
        None => resolve_client_ip(headers, DEFAULT_IP_HEADERS.as_slice()),
    };

    let method = if options.include_method {
        source.method().map(str::to_string)
    } else {
        None
    };

    let path = if options.include_path {
        source.url().and_then(resolve_path).map(|path| {
            match &options.path_normalizer {
                Some(normalize) => normalize(&path),
                None => path,
            }
        })
    } else {
        None
    };

    Traits {
        ip,
        user_agent: trimmed_header(headers, names::USER_AGENT),
        accept_language: trimmed_header(headers, names::ACCEPT_LANGUAGE),
        method,
        path,
    }
}

/// Path component of a request URL.
///
/// Strings are resolved against [`PLACEHOLDER_BASE`]; if that fails, the raw
/// string is kept only when it already looks like a root-relative path.
pub fn resolve_path(url: RequestUrl<'_>) -> Option<String> {
    let path = match url {
        RequestUrl::Uri(uri) => uri.path().to_string(),
        RequestUrl::Url(url) => url.path().to_string(),
        RequestUrl::Raw(raw) => match Url::parse(PLACEHOLDER_BASE).and_then(|base| base.join(raw)) {
            Ok(resolved) => resolved.path().to_string(),
            Err(err) => {
                trace!(error = %err, "request URL did not parse");
                if !raw.starts_with('/') {
                    return None;
                }
                raw.to_string()
            }
        },
    };

    (!path.is_empty()).then_some(path)
}

fn trimmed_header(headers: &HeaderMap, name: &str) -> Option<String> {
    let value = header_value(headers, name)?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprinting::source::RequestParts;
    use http::{HeaderValue, Uri};

    fn parts_with(headers: &[(&'static str, &'static str)]) -> RequestParts {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            map.append(*name, HeaderValue::from_static(*value));
        }
        RequestParts::new(map)
    }

    #[test]
    fn test_blank_headers_are_absent() {
        let source = parts_with(&[("user-agent", "   "), ("accept-language", "")]);
        let traits = extract_traits(&source, &FingerprintOptions::default());
        assert_eq!(traits.user_agent, None);
        assert_eq!(traits.accept_language, None);
    }

    #[test]
    fn test_headers_trimmed() {
        let source = parts_with(&[("user-agent", " curl/8.5.0 "), ("accept-language", "fr ")]);
        let traits = extract_traits(&source, &FingerprintOptions::default());
        assert_eq!(traits.user_agent.as_deref(), Some("curl/8.5.0"));
        assert_eq!(traits.accept_language.as_deref(), Some("fr"));
    }

    #[test]
    fn test_method_and_path_are_opt_in() {
        let source = parts_with(&[]).with_method("POST").with_url("/v1/resource");
        let traits = extract_traits(&source, &FingerprintOptions::default());
        assert_eq!(traits.method, None);
        assert_eq!(traits.path, None);

        let options = FingerprintOptions::new().include_method(true).include_path(true);
        let traits = extract_traits(&source, &options);
        assert_eq!(traits.method.as_deref(), Some("POST"));
        assert_eq!(traits.path.as_deref(), Some("/v1/resource"));
    }

    #[test]
    fn test_missing_method_stays_absent() {
        let source = parts_with(&[]);
        let options = FingerprintOptions::new().include_method(true).include_path(true);
        let traits = extract_traits(&source, &options);
        assert_eq!(traits.method, None);
        assert_eq!(traits.path, None);
    }

    #[test]
    fn test_empty_precedence_yields_no_ip() {
        let source = parts_with(&[("x-real-ip", "203.0.113.1")]);
        let options = FingerprintOptions::new().with_ip_headers(Vec::<String>::new());
        assert_eq!(extract_traits(&source, &options).ip, None);
        assert_eq!(
            extract_traits(&source, &FingerprintOptions::default()).ip.as_deref(),
            Some("203.0.113.1")
        );
    }

    #[test]
    fn test_resolve_path_from_strings() {
        assert_eq!(resolve_path(RequestUrl::Raw("/a/b?q=1#frag")).as_deref(), Some("/a/b"));
        assert_eq!(
            resolve_path(RequestUrl::Raw("https://example.com/x/y?z")).as_deref(),
            Some("/x/y")
        );
        assert_eq!(resolve_path(RequestUrl::Raw("")).as_deref(), Some("/"));
    }

    #[test]
    fn test_resolve_path_fallback_requires_leading_slash() {
        // Invalid port makes the URL unparseable
        assert_eq!(resolve_path(RequestUrl::Raw("http://example.com:99999/a")), None);
    }

    #[test]
    fn test_resolve_path_fallback_keeps_root_relative_raw() {
        // Scheme-relative with an invalid port: unparseable, but starts with '/'
        assert_eq!(
            resolve_path(RequestUrl::Raw("//example.com:99999/a")).as_deref(),
            Some("//example.com:99999/a")
        );
    }

    #[test]
    fn test_resolve_path_from_parsed_values(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let uri: Uri = "/items/7?x=1".parse()?;
        assert_eq!(resolve_path(RequestUrl::Uri(&uri)).as_deref(), Some("/items/7"));

        let url = Url::parse("https://api.example.com/v2/things")?;
        assert_eq!(resolve_path(RequestUrl::Url(&url)).as_deref(), Some("/v2/things"));
        Ok(())
    }

    #[test]
    fn test_normalizer_applied_verbatim() {
        let source = parts_with(&[]).with_url("/users/123/profile");
        let options = FingerprintOptions::new()
            .include_path(true)
            .with_path_normalizer(|_: &str| "not even a path".to_string());
        assert_eq!(extract_traits(&source, &options).path.as_deref(), Some("not even a path"));
    }

    #[test]
    fn test_options_debug_hides_callbacks() {
        let options = FingerprintOptions::new().with_hash_fn(|_: &[u8]| String::new());
        let rendered = format!("{options:?}");
        assert!(rendered.contains("hash_fn: true"));
        assert!(rendered.contains("path_normalizer: false"));
    }
}
