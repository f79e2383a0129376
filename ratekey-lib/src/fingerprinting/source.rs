//! Request views consumed by the trait extractor.
//!
//! Anything that can hand out headers, and optionally a method and a URL, can
//! be fingerprinted. Full `http` requests report their own method and URI; the
//! minimal [`RequestParts`] record reports only what the caller put in it.

use std::borrow::Cow;

use http::{HeaderMap, HeaderValue, Uri};
use url::Url;

/// Read-only capabilities the extractor needs from a request.
pub trait RequestSource {
    /// Request headers (case-insensitive, possibly multi-valued).
    fn headers(&self) -> &HeaderMap;

    /// Request method, if the source carries one.
    fn method(&self) -> Option<&str>;

    /// Request URL, if the source carries one.
    fn url(&self) -> Option<RequestUrl<'_>>;
}

/// Borrowed view of a request URL.
#[derive(Debug, Clone, Copy)]
pub enum RequestUrl<'a> {
    /// Unparsed string, either absolute or root-relative
    Raw(&'a str),
    /// Already parsed request target
    Uri(&'a Uri),
    /// Already parsed absolute URL
    Url(&'a Url),
}

/// Owned URL value for [`RequestParts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlValue {
    Raw(String),
    Uri(Uri),
    Url(Url),
}

impl UrlValue {
    pub fn as_request_url(&self) -> RequestUrl<'_> {
        match self {
            Self::Raw(raw) => RequestUrl::Raw(raw),
            Self::Uri(uri) => RequestUrl::Uri(uri),
            Self::Url(url) => RequestUrl::Url(url),
        }
    }
}

impl From<String> for UrlValue {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl From<&str> for UrlValue {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<Uri> for UrlValue {
    fn from(uri: Uri) -> Self {
        Self::Uri(uri)
    }
}

impl From<Url> for UrlValue {
    fn from(url: Url) -> Self {
        Self::Url(url)
    }
}

/// Minimal request shape: headers plus an optional method and URL.
///
/// Useful when the host runtime does not hand out an [`http::Request`].
#[derive(Debug, Clone, Default)]
pub struct RequestParts {
    pub headers: HeaderMap,
    pub method: Option<String>,
    pub url: Option<UrlValue>,
}

impl RequestParts {
    pub fn new(headers: HeaderMap) -> Self {
        Self { headers, method: None, url: None }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<UrlValue>) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl RequestSource for RequestParts {
    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    fn url(&self) -> Option<RequestUrl<'_>> {
        self.url.as_ref().map(UrlValue::as_request_url)
    }
}

impl<B> RequestSource for http::Request<B> {
    fn headers(&self) -> &HeaderMap {
        self.headers()
    }

    fn method(&self) -> Option<&str> {
        Some(self.method().as_str())
    }

    fn url(&self) -> Option<RequestUrl<'_>> {
        Some(RequestUrl::Uri(self.uri()))
    }
}

impl RequestSource for http::request::Parts {
    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn method(&self) -> Option<&str> {
        Some(self.method.as_str())
    }

    fn url(&self) -> Option<RequestUrl<'_>> {
        Some(RequestUrl::Uri(&self.uri))
    }
}

impl<T: RequestSource + ?Sized> RequestSource for &T {
    fn headers(&self) -> &HeaderMap {
        (**self).headers()
    }

    fn method(&self) -> Option<&str> {
        (**self).method()
    }

    fn url(&self) -> Option<RequestUrl<'_>> {
        (**self).url()
    }
}

/// Look up a header by (case-insensitive) name.
///
/// Repeated headers are joined with `", "`, the same as a comma-separated
/// list in a single line. Bytes outside visible ASCII are decoded as
/// Latin-1, so a present value is never dropped. Returns `None` when the
/// header is missing; an invalid header name never matches.
pub fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<Cow<'a, str>> {
    let mut values = headers.get_all(name).iter().map(decode_value);

    let first = values.next()?;
    match values.next() {
        None => Some(first),
        Some(second) => {
            let mut joined = format!("{first}, {second}");
            for value in values {
                joined.push_str(", ");
                joined.push_str(&value);
            }
            Some(Cow::Owned(joined))
        }
    }
}

/// Header bytes as a string, one `char` per byte for non-ASCII values.
fn decode_value(value: &HeaderValue) -> Cow<'_, str> {
    match value.to_str() {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(value.as_bytes().iter().map(|&b| char::from(b)).collect()),
    }
}
