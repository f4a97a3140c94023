//! # CLI Module
//!
//! User-facing command implementations for Playfetch. This layer is the
//! presentation collaborator on top of the retrieval pipeline: it collects the
//! playlist reference from the command line, renders normalized track records,
//! and triggers per-track download dispatches.
//!
//! ## Commands
//!
//! - [`tracks`] - Fetches a playlist and renders its track listing as a table
//! - [`download`] - Fetches a playlist and dispatches selected tracks to the
//!   external downloader
//!
//! ## Error Presentation
//!
//! Fatal conditions (missing configuration, unusable reference, failed fetch)
//! terminate with an error message. Per-track conditions (missing download
//! link, downloader failure) are reported as warnings and never affect other
//! tracks.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{config::Config, error, types::TrackRecord, utils};

mod download;
mod tracks;

pub use download::download;
pub use tracks::tracks;

/// Fetches the full playlist behind a spinner, exiting on any pipeline error.
pub(crate) async fn fetch_tracks_or_exit(config: &Config, reference: &str) -> Vec<TrackRecord> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlist tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = utils::fetch_entire_playlist(config, reference).await;
    pb.finish_and_clear();

    match result {
        Ok(tracks) => tracks,
        Err(e @ error::Error::InvalidReference(_)) => {
            error!("{}. Expected something like open.spotify.com/playlist/<id>.", e)
        }
        Err(e) => error!("Failed to fetch playlist: {}", e),
    }
}
