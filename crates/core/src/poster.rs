//! Poster search response handling.
//!
//! The poster-lookup service answers a title search with a JSON body of the
//! shape `{ "results": [ { "poster_path": "/abc.jpg" }, ... ] }`. The display
//! URL is the fixed CDN base followed by the path without its leading `/`.

use serde::Deserialize;

/// CDN prefix for poster images.
pub const POSTER_CDN_BASE: &str = "https://image.tmdb.org/t/p/w500/";

/// Body returned by the title search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PosterSearchResponse {
    #[serde(default)]
    pub results: Vec<PosterSearchResult>,
}

/// One search hit. Hits without artwork carry a `null` path.
#[derive(Debug, Clone, Deserialize)]
pub struct PosterSearchResult {
    pub poster_path: Option<String>,
}

impl PosterSearchResponse {
    /// Display URL for the first hit that has artwork, if any.
    pub fn first_poster_url(&self) -> Option<String> {
        self.results
            .iter()
            .filter_map(|r| r.poster_path.as_deref())
            .find_map(poster_url)
    }
}

/// Compose the display URL for a poster path.
///
/// Returns `None` for an empty path.
pub fn poster_url(path: &str) -> Option<String> {
    let trimmed = path.trim().trim_start_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("{POSTER_CDN_BASE}{trimmed}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_separator_is_stripped() {
        assert_eq!(
            poster_url("/xyz.jpg").as_deref(),
            Some("https://image.tmdb.org/t/p/w500/xyz.jpg")
        );
        assert_eq!(
            poster_url("xyz.jpg").as_deref(),
            Some("https://image.tmdb.org/t/p/w500/xyz.jpg")
        );
    }

    #[test]
    fn empty_path_yields_none() {
        assert_eq!(poster_url(""), None);
        assert_eq!(poster_url("/"), None);
    }

    #[test]
    fn first_hit_with_artwork_wins() {
        let body: PosterSearchResponse = serde_json::from_value(serde_json::json!({
            "page": 1,
            "results": [
                { "title": "Alien", "poster_path": null },
                { "title": "Alien", "poster_path": "/first.jpg" },
                { "title": "Alien", "poster_path": "/second.jpg" }
            ]
        }))
        .unwrap();
        assert_eq!(
            body.first_poster_url().as_deref(),
            Some("https://image.tmdb.org/t/p/w500/first.jpg")
        );
    }

    #[test]
    fn empty_results_yield_none() {
        let body: PosterSearchResponse =
            serde_json::from_value(serde_json::json!({ "results": [] })).unwrap();
        assert_eq!(body.first_poster_url(), None);

        let missing: PosterSearchResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(missing.first_poster_url(), None);
    }
}
