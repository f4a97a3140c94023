use std::sync::LazyLock;

use regex::Regex;
use reqwest::{Client, StatusCode};

use crate::{
    config::Config,
    error::{Error, Result},
    types::{PlaylistTracksResponse, Token, TrackRecord},
};

/// Matches the identifier segment of a playlist reference, e.g. the
/// `37i9dQZF1DXcBWIGoYBM5M` in `https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=...`.
static PLAYLIST_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"playlist/([0-9A-Za-z_]+)").expect("playlist id regex is valid"));

/// Extracts the playlist identifier from a free-form reference string.
///
/// The identifier is the run of alphanumeric/underscore characters directly
/// following a `playlist/` path segment, returned verbatim with no
/// normalization. Trailing query strings or path separators end the match.
///
/// This is a pure function and must be called before any network request so
/// malformed input fails fast without wasting an authentication round trip.
///
/// # Errors
///
/// Returns [`Error::InvalidReference`] carrying the original input when no
/// playlist segment is present.
///
/// # Example
///
/// ```
/// let id = extract_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc")?;
/// assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");
/// ```
pub fn extract_playlist_id(reference: &str) -> Result<String> {
    PLAYLIST_ID
        .captures(reference)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
        .ok_or_else(|| Error::InvalidReference(reference.to_string()))
}

/// Retrieves one page of a playlist's track listing from the Spotify Web API.
///
/// Issues an authenticated GET against `/playlists/{id}/tracks`, or against
/// `page_url` when following pagination. Each response item is normalized into
/// a [`TrackRecord`] in response order; items whose nested track object is
/// absent still produce a defaulted record, so the returned count always
/// matches the response item count and row positions stay aligned with the
/// playlist's declared listing.
///
/// # Arguments
///
/// * `config` - Configuration holding the API base URL
/// * `token` - Bearer token from [`crate::spotify::auth::request_token`]
/// * `playlist_id` - Identifier from [`extract_playlist_id`]
/// * `page_url` - Continuation URL from a previous page, or `None` for the first page
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok((Vec<TrackRecord>, Option<String>))` - Normalized records and the
///   continuation URL of the next page, if any
/// - `Err(Error::CatalogFetch)` - Non-200 response; the status is always
///   surfaced, never replaced by a silent empty page
/// - `Err(Error::Http)` - Network failure or malformed response body
///
/// # Pagination
///
/// This function fetches exactly one page per call. Callers wanting the full
/// playlist follow the returned URL until it is `None`; see
/// [`crate::utils::fetch_entire_playlist`].
///
/// # Example
///
/// ```
/// let (tracks, next) = get_playlist_tracks(&config, &token, &id, None).await?;
/// if let Some(url) = next {
///     let (more, _) = get_playlist_tracks(&config, &token, &id, Some(&url)).await?;
/// }
/// ```
pub async fn get_playlist_tracks(
    config: &Config,
    token: &Token,
    playlist_id: &str,
    page_url: Option<&str>,
) -> Result<(Vec<TrackRecord>, Option<String>)> {
    let api_url = match page_url {
        Some(url) => url.to_string(),
        None => format!(
            "{uri}/playlists/{id}/tracks",
            uri = &config.api_url,
            id = playlist_id
        ),
    };

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(&token.access_token)
        .send()
        .await?;

    if response.status() != StatusCode::OK {
        return Err(Error::CatalogFetch(response.status()));
    }

    let page = response.json::<PlaylistTracksResponse>().await?;
    let next = page.next;
    let records = page.items.into_iter().map(TrackRecord::from_item).collect();

    Ok((records, next))
}
