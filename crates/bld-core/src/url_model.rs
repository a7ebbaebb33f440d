//! Display-name derivation from archive URLs.
//!
//! Skip messages name the URL's last path segment rather than the full URL.

/// Last path segment of `url`, for human-readable messages. Falls back to the
/// full URL string when the path is empty or the URL does not parse.
pub fn display_name(url: &str) -> String {
    last_path_segment(url).unwrap_or_else(|| url.to_string())
}

/// Extracts the last non-empty path segment, or `None` for root/empty paths.
fn last_path_segment(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal() {
        assert_eq!(
            display_name("https://example.com/a/b/bundle.zip"),
            "bundle.zip"
        );
        assert_eq!(display_name("https://example.com/single"), "single");
    }

    #[test]
    fn with_query() {
        assert_eq!(
            display_name("https://example.com/bundle.zip?token=abc"),
            "bundle.zip"
        );
    }

    #[test]
    fn root_path_falls_back_to_full_url() {
        assert_eq!(
            display_name("https://example.com/"),
            "https://example.com/"
        );
    }

    #[test]
    fn unparseable_falls_back_to_input() {
        assert_eq!(display_name("not a url"), "not a url");
    }
}
