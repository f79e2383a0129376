use http::HeaderMap;
use tracing::{debug, trace};

use super::forwarded;
use super::headers::{names, INVALID_IP_TOKENS};
use super::source::header_value;

/// Resolve the client IP from the first trusted header that yields a usable value.
///
/// `precedence` is walked in order and the first header whose candidate survives
/// [`normalize_ip_candidate`] wins; later headers are not consulted. How a raw
/// value is turned into a candidate depends on the header:
///
/// - `forwarded`: the `for=` value of the first element carrying one
///   (see [`forwarded::first_for_value`])
/// - `x-forwarded-for`: the leftmost comma-separated entry, i.e. the original client
/// - anything else: the whole value
///
/// Header names are matched case-insensitively. An empty `precedence` always
/// yields `None`, as does a request without any usable trusted header.
pub fn resolve_client_ip<S: AsRef<str>>(headers: &HeaderMap, precedence: &[S]) -> Option<String> {
    for name in precedence {
        let name = name.as_ref();
        let Some(raw) = header_value(headers, name) else {
            continue;
        };

        let resolved = if name.eq_ignore_ascii_case(names::FORWARDED) {
            forwarded::first_for_value(&raw).and_then(|value| normalize_ip_candidate(&value))
        } else if name.eq_ignore_ascii_case(names::X_FORWARDED_FOR) {
            raw.split(',').next().and_then(normalize_ip_candidate)
        } else {
            normalize_ip_candidate(&raw)
        };

        match resolved {
            Some(ip) => {
                debug!(header = name, ip = %ip, "resolved client IP");
                return Some(ip);
            }
            None => trace!(header = name, "no usable client IP in trusted header"),
        }
    }

    None
}

/// Normalize a single address candidate taken from a trusted header.
///
/// Returns `None` for empty values, proxy placeholders (`unknown`, `null`,
/// `none`), RFC 7239 obfuscated identifiers (`_hidden`) and empty or unclosed
/// IPv6 brackets. Otherwise:
///
/// - `[2001:db8::1]:443` and `[2001:db8::1]` become `2001:db8::1`
/// - `203.0.113.10:1234` becomes `203.0.113.10`
/// - everything else (bare IPv4, bare IPv6, `::ffff:203.0.113.10`) is returned trimmed
///
/// The value is not otherwise checked to be an IP address.
pub fn normalize_ip_candidate(candidate: &str) -> Option<String> {
    let value = candidate.trim();

    if INVALID_IP_TOKENS
        .iter()
        .any(|token| value.eq_ignore_ascii_case(token))
    {
        return None;
    }

    if value.starts_with('_') {
        return None;
    }

    if value.starts_with('[') {
        return match value.find(']') {
            Some(end) if end > 1 => Some(value[1..end].to_string()),
            _ => None,
        };
    }

    if is_ipv4_with_port(value) {
        if let Some((addr, _port)) = value.rsplit_once(':') {
            return Some(addr.to_string());
        }
    }

    Some(value.to_string())
}

/// Exactly `d{1,3}.d{1,3}.d{1,3}.d{1,3}:d+`, nothing more.
///
/// IPv6 literals with an embedded IPv4 tail contain both `.` and `:` but
/// never match, since everything before the last colon must be a dotted quad.
fn is_ipv4_with_port(value: &str) -> bool {
    let Some((addr, port)) = value.rsplit_once(':') else {
        return false;
    };
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let mut octets = 0usize;
    for octet in addr.split('.') {
        if octet.is_empty() || octet.len() > 3 || !octet.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        octets = octets.saturating_add(1);
    }
    octets == 4
}
