use crate::{config::Config, error::Result, spotify, types::TrackRecord};

/// Formats a track length in milliseconds as zero-padded `mm:ss`.
/// Minutes are not wrapped into hours, so 3600000 ms renders as "60:00".
pub fn format_duration(duration_ms: u64) -> String {
    let total_seconds = duration_ms / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Runs the full retrieval pipeline for a playlist reference.
///
/// Resolves the identifier first so malformed input fails before any network
/// call, then requests a fresh token and follows the page cursor until the
/// listing is exhausted. Pages are concatenated in response order.
pub async fn fetch_entire_playlist(config: &Config, reference: &str) -> Result<Vec<TrackRecord>> {
    let playlist_id = spotify::playlist::extract_playlist_id(reference)?;
    let token = spotify::auth::request_token(config).await?;

    let mut tracks: Vec<TrackRecord> = Vec::new();
    let mut page_url: Option<String> = None;
    loop {
        let (mut page, next) =
            spotify::playlist::get_playlist_tracks(config, &token, &playlist_id, page_url.as_deref())
                .await?;
        tracks.append(&mut page);

        match next {
            Some(url) => page_url = Some(url),
            None => break,
        }
    }

    Ok(tracks)
}
