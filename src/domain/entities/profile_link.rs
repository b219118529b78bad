//! Profile link parsing

/// Marker every accepted profile link must contain
pub const PROFILE_MARKER: &str = "roblox.com/users/";

const USERS_SEGMENT: &str = "/users/";

/// Extract the user id from a profile link such as
/// `https://www.roblox.com/users/123/profile`.
///
/// Returns the path segment right after `/users/`, cut at the next `/`.
/// Links without the marker, or whose segment is not all digits, yield `None`.
pub fn extract_user_id(link: &str) -> Option<String> {
    if !link.contains(PROFILE_MARKER) {
        return None;
    }

    let (_, rest) = link.split_once(USERS_SEGMENT)?;
    let id = rest.split('/').next().unwrap_or_default();

    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        None
    } else {
        Some(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_id_before_next_separator() {
        assert_eq!(
            extract_user_id("https://www.roblox.com/users/123/profile"),
            Some("123".to_string())
        );
        assert_eq!(
            extract_user_id("https://roblox.com/users/98765"),
            Some("98765".to_string())
        );
    }

    #[test]
    fn test_rejects_links_without_marker() {
        assert_eq!(extract_user_id("https://example.com/users/123/profile"), None);
        assert_eq!(extract_user_id("not a link"), None);
        assert_eq!(extract_user_id(""), None);
    }

    #[test]
    fn test_rejects_empty_segment() {
        assert_eq!(extract_user_id("https://roblox.com/users/"), None);
        assert_eq!(extract_user_id("https://roblox.com/users//profile"), None);
    }

    #[test]
    fn test_rejects_non_numeric_segment() {
        assert_eq!(extract_user_id("https://www.roblox.com/users/123?ref=share"), None);
        assert_eq!(extract_user_id("https://www.roblox.com/users/abc/profile"), None);
        assert_eq!(extract_user_id("https://www.roblox.com/users/12a3/profile"), None);
    }
}
