use super::types::Traits;

/// Separator placed between segments in the hashed payload.
pub const PART_SEPARATOR: &str = "|";

/// Serialize traits into labeled segments, in hashing order.
///
/// `ip`, `ua` and `al` are always emitted, with an empty value when the
/// trait is absent. `method` and `path` are emitted only when present.
/// Changing either the order or this asymmetry changes every fingerprint.
pub fn build_parts(traits: &Traits) -> Vec<String> {
    let mut parts = Vec::with_capacity(5);
    parts.push(format!("ip:{}", traits.ip.as_deref().unwrap_or_default()));
    parts.push(format!("ua:{}", traits.user_agent.as_deref().unwrap_or_default()));
    parts.push(format!("al:{}", traits.accept_language.as_deref().unwrap_or_default()));

    if let Some(method) = &traits.method {
        parts.push(format!("method:{method}"));
    }
    if let Some(path) = &traits.path {
        parts.push(format!("path:{path}"));
    }

    parts
}

/// Join segments into the payload that gets hashed.
pub fn join_parts<S: AsRef<str>>(parts: &[S]) -> String {
    let mut payload = String::new();
    for (idx, part) in parts.iter().enumerate() {
        if idx > 0 {
            payload.push_str(PART_SEPARATOR);
        }
        payload.push_str(part.as_ref());
    }
    payload
}
