//! Manual image search link for when automatic resolution misses

use url::Url;

use super::LogoQuery;

const IMAGE_SEARCH_BASE_URL: &str = "https://www.google.com/search";

/// Build an image search link for finding a team logo by hand
///
/// Returns `None` when the query has no team name.
pub fn manual_search_url(query: &LogoQuery) -> Option<String> {
    if query.is_empty() {
        return None;
    }

    let term = format!("{} {} logo transparent", query.team(), query.sport());

    Url::parse_with_params(
        IMAGE_SEARCH_BASE_URL,
        &[("tbm", "isch"), ("q", term.as_str())],
    )
    .ok()
    .map(|url| url.to_string())
}
