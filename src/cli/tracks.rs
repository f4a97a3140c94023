use tabled::Table;

use crate::{
    cli::fetch_tracks_or_exit, config::Config, info, success, types::TrackTableRow, utils,
};

pub async fn tracks(config: &Config, reference: String) {
    let tracks = fetch_tracks_or_exit(config, &reference).await;

    if tracks.is_empty() {
        info!("Playlist is empty.");
        return;
    }

    let table_rows: Vec<TrackTableRow> = tracks
        .iter()
        .enumerate()
        .map(|(index, track)| TrackTableRow {
            position: index + 1,
            track: track.track_name.clone(),
            artist: track.artist_name.clone(),
            album: track.album_name.clone(),
            length: utils::format_duration(track.duration_ms),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);

    success!("{} tracks in playlist.", tracks.len());
}
