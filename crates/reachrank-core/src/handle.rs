//! Free-form input → platform identifier extraction.
//!
//! Users paste handles (`@name`), full profile URLs, or bare usernames.
//! Unrecognized forms pass through unmodified as a best-effort identifier.

/// Extract a `YouTube` channel identifier from a handle, channel URL, or bare name.
#[must_use]
pub fn youtube_identifier(input: &str) -> String {
    let input = input.trim();
    if let Some(rest) = input.split_once("youtube.com/@").map(|(_, r)| r) {
        return strip_url_tail(rest);
    }
    if let Some(rest) = input.split_once("youtube.com/channel/").map(|(_, r)| r) {
        return strip_url_tail(rest);
    }
    if let Some(rest) = input.strip_prefix('@') {
        return rest.to_owned();
    }
    input.to_owned()
}

/// Extract an Instagram username from a handle, profile URL, or bare name.
#[must_use]
pub fn instagram_identifier(input: &str) -> String {
    let input = input.trim();
    if let Some(rest) = input.split_once("instagram.com/").map(|(_, r)| r) {
        return strip_url_tail(rest);
    }
    if let Some(rest) = input.strip_prefix('@') {
        return rest.to_owned();
    }
    input.to_owned()
}

/// Cut a URL path segment at the first `/` or `?`.
fn strip_url_tail(segment: &str) -> String {
    segment
        .split(['/', '?'])
        .next()
        .unwrap_or_default()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_handle_url_yields_handle() {
        assert_eq!(
            youtube_identifier("https://www.youtube.com/@SomeCreator?si=abc"),
            "SomeCreator"
        );
    }

    #[test]
    fn youtube_channel_url_yields_channel_id() {
        assert_eq!(
            youtube_identifier("https://youtube.com/channel/UC123xyz/videos"),
            "UC123xyz"
        );
    }

    #[test]
    fn youtube_at_handle_strips_prefix() {
        assert_eq!(youtube_identifier("@SomeCreator"), "SomeCreator");
    }

    #[test]
    fn youtube_bare_input_passes_through() {
        assert_eq!(youtube_identifier("SomeCreator"), "SomeCreator");
    }

    #[test]
    fn instagram_profile_url_yields_username() {
        assert_eq!(
            instagram_identifier("https://instagram.com/someuser/reels"),
            "someuser"
        );
    }

    #[test]
    fn instagram_at_handle_strips_prefix() {
        assert_eq!(instagram_identifier("@someuser"), "someuser");
    }

    #[test]
    fn instagram_bare_input_passes_through() {
        assert_eq!(instagram_identifier("someuser"), "someuser");
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(youtube_identifier("  @SomeCreator  "), "SomeCreator");
    }
}
