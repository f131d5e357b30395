//! Utility functions and helpers.

pub mod http;
pub mod input;

use url::Url;

/// Join a base URL and a path suffix with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim().trim_end_matches('/'),
        path.trim().trim_start_matches('/')
    )
}

/// Extract the percent-encoded path of a URL, used as the summary key.
pub fn escaped_path(url_str: &str) -> Option<String> {
    Url::parse(url_str).ok().map(|u| u.path().to_string())
}
