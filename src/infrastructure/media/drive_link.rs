//! Cloud-drive share link normalization.

use regex::Regex;
use std::sync::LazyLock;

/// Rewrites a Google Drive share link into a directly embeddable URL.
///
/// The first `/d/<file-id>` path segment wins; anything without one passes
/// through unchanged.
#[must_use]
pub fn drive_share_to_direct(url: &str) -> String {
    static FILE_ID_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"/d/([a-zA-Z0-9_-]+)").unwrap());

    match FILE_ID_RE.captures(url).and_then(|caps| caps.get(1)) {
        Some(id) => format!("https://drive.google.com/uc?export=view&id={}", id.as_str()),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_link_becomes_direct_view() {
        let url = "https://drive.google.com/file/d/1aB_c-D234/view?usp=sharing";

        assert_eq!(
            drive_share_to_direct(url),
            "https://drive.google.com/uc?export=view&id=1aB_c-D234"
        );
    }

    #[test]
    fn test_first_file_id_wins() {
        let url = "https://host/d/first123/d/second456";

        assert_eq!(
            drive_share_to_direct(url),
            "https://drive.google.com/uc?export=view&id=first123"
        );
    }

    #[test]
    fn test_non_drive_url_unchanged() {
        let url = "https://example.com/image.png";

        assert_eq!(drive_share_to_direct(url), url);
    }

    #[test]
    fn test_empty_id_segment_unchanged() {
        // The character class requires at least one character, so a bare
        // `/d/` falls through.
        let url = "https://host/d//view";

        assert_eq!(drive_share_to_direct(url), url);
    }

    #[test]
    fn test_empty_string_unchanged() {
        assert_eq!(drive_share_to_direct(""), "");
    }
}
