use http::{HeaderMap, HeaderName, HeaderValue};

pub type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Build a header map, appending repeated names instead of overwriting them.
pub fn header_map(
    pairs: &[(&str, &str)],
) -> Result<HeaderMap, Box<dyn std::error::Error + Send + Sync>> {
    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        headers.append(HeaderName::from_bytes(name.as_bytes())?, HeaderValue::from_str(value)?);
    }
    Ok(headers)
}
