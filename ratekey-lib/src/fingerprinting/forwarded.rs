//! `Forwarded` header (RFC 7239) parsing, limited to what client IP
//! resolution needs: the `for=` directive of the first hop that carries one.
//!
//! ```plain
//! Forwarded: for="_gazonk", for=192.0.2.60;proto=http;by=203.0.113.43
//!            ^^^^^^^^^^^^^ first element        ^^^^^^^^^^ second element
//! ```

use std::borrow::Cow;

/// Returns the `for=` value of the first element that carries one.
///
/// Elements are the comma-separated groups of `;`-separated directives.
/// Scanning stops at the first element with a syntactically present `for=`,
/// even when its value is empty or not an address; later elements are never
/// consulted. The returned value has one pair of surrounding double quotes
/// removed and quoted-pairs unescaped, but is otherwise untouched.
///
/// Returns `None` if no element has a `for=` directive.
pub fn first_for_value(header: &str) -> Option<Cow<'_, str>> {
    split_unquoted(header, ',').into_iter().find_map(|element| {
        split_unquoted(element, ';').into_iter().find_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            name.trim().eq_ignore_ascii_case("for").then(|| unquote(value.trim()))
        })
    })
}

/// Splits `input` on `sep`, ignoring separators inside double-quoted strings.
fn split_unquoted(input: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;

    for (idx, ch) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            c if c == sep && !in_quotes => {
                parts.push(&input[start..idx]);
                start = idx.saturating_add(c.len_utf8());
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

/// Strips exactly one pair of surrounding double quotes and resolves
/// quoted-pairs (`\"` -> `"`). Unquoted values are returned as-is.
fn unquote(value: &str) -> Cow<'_, str> {
    let Some(inner) = value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return Cow::Borrowed(value);
    };

    if !inner.contains('\\') {
        return Cow::Borrowed(inner);
    }

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_for() {
        assert_eq!(first_for_value("for=192.0.2.60").as_deref(), Some("192.0.2.60"));
    }

    #[test]
    fn test_for_among_other_directives() {
        let value = first_for_value("proto=http; FOR=192.0.2.60 ;by=203.0.113.43");
        assert_eq!(value.as_deref(), Some("192.0.2.60"));
    }

    #[test]
    fn test_quoted_ipv6_with_port() {
        let value = first_for_value(r#"for="[2001:db8:cafe::17]:4711";proto=https"#);
        assert_eq!(value.as_deref(), Some("[2001:db8:cafe::17]:4711"));
    }

    #[test]
    fn test_first_element_wins() {
        let value = first_for_value("for=unknown, for=198.51.100.17");
        assert_eq!(value.as_deref(), Some("unknown"));
    }

    #[test]
    fn test_skips_elements_without_for() {
        let value = first_for_value("proto=https;by=203.0.113.43, for=198.51.100.17");
        assert_eq!(value.as_deref(), Some("198.51.100.17"));
    }

    #[test]
    fn test_empty_for_is_still_present() {
        assert_eq!(first_for_value("for=;proto=http, for=1.2.3.4").as_deref(), Some(""));
    }

    #[test]
    fn test_missing_for() {
        assert_eq!(first_for_value("proto=https;host=example.com"), None);
        assert_eq!(first_for_value(""), None);
        assert_eq!(first_for_value("garbage"), None);
    }

    #[test]
    fn test_separators_inside_quotes() {
        let value = first_for_value(r#"for="a,b;c", for=198.51.100.17"#);
        assert_eq!(value.as_deref(), Some("a,b;c"));
    }

    #[test]
    fn test_quoted_pair_unescaped() {
        let value = first_for_value(r#"for="x\"y""#);
        assert_eq!(value.as_deref(), Some(r#"x"y"#));
    }

    #[test]
    fn test_unbalanced_quote_kept() {
        assert_eq!(first_for_value(r#"for="1.2.3.4"#).as_deref(), Some(r#""1.2.3.4"#));
    }
}
