use serde::Deserialize;
use tabled::Tabled;

/// Response of the token endpoint. Only the bearer value is used; expiry is
/// enforced remotely and a fresh token is requested for every pipeline run.
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub access_token: String,
}

/// One page of the playlist-tracks endpoint. `next` is the full URL of the
/// following page, if any.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
}

/// A single playlist entry. The nested track object can be entirely absent
/// (removed or market-restricted tracks); the entry itself still counts.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<TrackObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackObject {
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    pub album: Option<TrackAlbum>,
    pub duration_ms: Option<u64>,
    pub external_urls: Option<ExternalUrls>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackAlbum {
    pub name: Option<String>,
    #[serde(default)]
    pub images: Vec<AlbumImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumImage {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

/// Normalized, flat representation of one playlist entry.
///
/// Constructed once from a [`PlaylistItem`] and handed around by value. A
/// missing `track_url` means the entry cannot be dispatched for download.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackRecord {
    pub track_name: String,
    /// Comma-joined names of all contributing artists.
    pub artist_name: String,
    pub album_name: String,
    /// Track length in milliseconds, 0 if the catalog omits it.
    pub duration_ms: u64,
    /// First available album cover image.
    pub cover_url: Option<String>,
    /// Canonical external link handed to the downloader.
    pub track_url: Option<String>,
}

impl TrackRecord {
    /// Builds a record from one playlist entry, filling defaults for every
    /// absent field. An entry without a track object yields a fully defaulted
    /// record so the row count stays aligned with the playlist's listing.
    pub fn from_item(item: PlaylistItem) -> Self {
        let Some(track) = item.track else {
            return TrackRecord::default();
        };

        let artist_name = track
            .artists
            .iter()
            .filter_map(|artist| artist.name.as_deref())
            .collect::<Vec<_>>()
            .join(", ");

        let (album_name, cover_url) = match track.album {
            Some(album) => (
                album.name.unwrap_or_default(),
                album.images.into_iter().find_map(|image| image.url),
            ),
            None => (String::new(), None),
        };

        TrackRecord {
            track_name: track.name.unwrap_or_default(),
            artist_name,
            album_name,
            duration_ms: track.duration_ms.unwrap_or(0),
            cover_url,
            track_url: track.external_urls.and_then(|urls| urls.spotify),
        }
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub track: String,
    pub artist: String,
    pub album: String,
    pub length: String,
}
