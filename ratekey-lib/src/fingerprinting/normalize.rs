//! Built-in path normalizers.
//!
//! Scoping a rate limit by path is only useful when every `/users/<id>` lands
//! in the same bucket. Any `Fn(&str) -> String` can be used instead.

/// Replacement for purely numeric segments
pub const ID_TOKEN: &str = ":id";

/// Replacement for UUID segments
pub const UUID_TOKEN: &str = ":uuid";

/// Replace numeric and UUID path segments with placeholder tokens.
///
/// `/users/123/orders/0b6c0d1e-6a1f-4c5e-9a57-2f3b1e9c7d10` becomes
/// `/users/:id/orders/:uuid`. Segments that merely contain digits
/// (`v1`, `page2`) are left alone.
pub fn collapse_ids(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            if is_numeric(segment) {
                ID_TOKEN
            } else if is_uuid(segment) {
                UUID_TOKEN
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Canonical 8-4-4-4-12 hex form, either case.
fn is_uuid(segment: &str) -> bool {
    segment.len() == 36
        && segment.bytes().enumerate().all(|(idx, b)| match idx {
            8 | 13 | 18 | 23 => b == b'-',
            _ => b.is_ascii_hexdigit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_segments() {
        assert_eq!(collapse_ids("/users/123/profile"), "/users/:id/profile");
        assert_eq!(collapse_ids("/a/1/b/22/"), "/a/:id/b/:id/");
    }

    #[test]
    fn test_uuid_segments() {
        assert_eq!(
            collapse_ids("/orders/0B6C0D1E-6A1F-4C5E-9A57-2F3B1E9C7D10/items"),
            "/orders/:uuid/items"
        );
    }

    #[test]
    fn test_mixed_segments_untouched() {
        assert_eq!(collapse_ids("/v1/page2/abc"), "/v1/page2/abc");
        assert_eq!(
            collapse_ids("/0b6c0d1e6a1f4c5e9a572f3b1e9c7d10"),
            "/0b6c0d1e6a1f4c5e9a572f3b1e9c7d10"
        );
    }

    #[test]
    fn test_root_and_empty() {
        assert_eq!(collapse_ids("/"), "/");
        assert_eq!(collapse_ids(""), "");
    }
}
