use crate::{
    cli::fetch_tracks_or_exit, config::Config, downloader, info, success, types::TrackRecord,
    warning,
};

pub async fn download(config: &Config, reference: String, positions: Vec<usize>, all: bool) {
    let tracks = fetch_tracks_or_exit(config, &reference).await;

    if tracks.is_empty() {
        info!("Playlist is empty, nothing to download.");
        return;
    }

    let selected: Vec<(usize, &TrackRecord)> = if all {
        tracks.iter().enumerate().map(|(i, t)| (i + 1, t)).collect()
    } else {
        let mut picked = Vec::new();
        for position in positions {
            match position.checked_sub(1).and_then(|i| tracks.get(i)) {
                Some(track) => picked.push((position, track)),
                None => warning!(
                    "No track {} in this playlist ({} tracks), skipping.",
                    position,
                    tracks.len()
                ),
            }
        }
        picked
    };

    if selected.is_empty() {
        warning!("No tracks selected. Use --track <n> or --all.");
        return;
    }

    // dispatch everything first, then wait; downloads run independently
    let mut handles = Vec::new();
    for (position, track) in selected {
        let label = if track.track_name.is_empty() {
            format!("track {}", position)
        } else {
            format!("{} - {}", track.artist_name, track.track_name)
        };

        let Some(track_url) = track.track_url.as_deref() else {
            warning!("{} has no download link, skipping.", label);
            continue;
        };

        match downloader::dispatch(&config.downloader, track_url) {
            Ok(handle) => {
                info!("Downloading {}...", label);
                handles.push((label, handle));
            }
            Err(e) => warning!("Cannot download {}: {}", label, e),
        }
    }

    let mut failed = 0usize;
    for (label, handle) in handles {
        match handle.wait().await {
            Ok(()) => success!("Downloaded {}", label),
            Err(e) => {
                warning!("Download of {} failed: {}", label, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        warning!("{} download(s) failed.", failed);
    }
}
