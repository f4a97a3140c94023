use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the playlist retrieval and download-dispatch pipeline.
///
/// Validation variants (`Configuration`, `InvalidReference`, `MissingLocator`)
/// are raised before any network or process side effect. Remote failures carry
/// the HTTP status so the caller can report it; nothing is retried here.
#[derive(Debug, Error)]
pub enum Error {
    /// A required configuration value is missing or empty.
    #[error("missing required configuration value: {0}")]
    Configuration(&'static str),

    /// The user-supplied reference does not contain a playlist identifier.
    #[error("no playlist reference found in '{0}'")]
    InvalidReference(String),

    /// The token endpoint rejected the client credentials.
    #[error("token request failed with status {status}: {body}")]
    Authentication { status: StatusCode, body: String },

    /// The playlist-tracks endpoint returned a non-success status.
    #[error("playlist fetch failed with status {0}")]
    CatalogFetch(StatusCode),

    /// The track has no canonical URL, so there is nothing to hand to the downloader.
    #[error("track has no download link")]
    MissingLocator,

    /// The external downloader exited with a non-zero status.
    #[error("downloader exited with code {0}")]
    DownloadFailed(i32),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to run downloader: {0}")]
    Io(#[from] std::io::Error),

    #[error("download task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Result alias used throughout the pipeline.
pub type Result<T> = std::result::Result<T, Error>;
