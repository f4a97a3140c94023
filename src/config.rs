//! Configuration management for the Spotify Playlist Fetcher.
//!
//! This module handles loading configuration from environment variables and
//! `.env` files. Credentials and endpoint URLs are collected once at startup
//! into a [`Config`] value that is passed explicitly into the pipeline
//! functions; nothing reads the environment after that point.

use std::{env, path::PathBuf};

use crate::error::{Error, Result};

const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_DOWNLOADER: &str = "spotdl";

/// Validated process-wide configuration.
///
/// `client_id` and `client_secret` are required; the endpoint URLs and the
/// downloader command fall back to well-known defaults and exist mainly so
/// tests can point the pipeline at a local mock server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Spotify application client ID.
    pub client_id: String,
    /// Spotify application client secret.
    pub client_secret: String,
    /// Base URL of the Spotify Web API.
    pub api_url: String,
    /// URL of the token endpoint used for the client-credentials exchange.
    pub token_url: String,
    /// Command invoked for each track download.
    pub downloader: String,
}

impl Config {
    /// Builds the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SPOTIFY_CLIENT_ID` (required)
    /// - `SPOTIFY_CLIENT_SECRET` (required)
    /// - `SPOTIFY_API_URL` (default: `https://api.spotify.com/v1`)
    /// - `SPOTIFY_API_TOKEN_URL` (default: `https://accounts.spotify.com/api/token`)
    /// - `DOWNLOADER_COMMAND` (default: `spotdl`)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] naming the first required variable that
    /// is missing or empty. Callers should treat this as fatal at startup
    /// rather than masking it per request.
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            client_id: require("SPOTIFY_CLIENT_ID")?,
            client_secret: require("SPOTIFY_CLIENT_SECRET")?,
            api_url: optional("SPOTIFY_API_URL", DEFAULT_API_URL),
            token_url: optional("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            downloader: optional("DOWNLOADER_COMMAND", DEFAULT_DOWNLOADER),
        })
    }
}

fn require(name: &'static str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::Configuration(name)),
    }
}

fn optional(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from `playfetch/.env` in the platform-specific local
/// data directory. If no file exists there, a `.env` in the working directory
/// is tried instead so development checkouts keep working.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/playfetch/.env`
/// - macOS: `~/Library/Application Support/playfetch/.env`
/// - Windows: `%LOCALAPPDATA%/playfetch/.env`
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created or an
/// existing `.env` file cannot be parsed. A missing file is not an error;
/// required values are checked later by [`Config::from_env`].
pub async fn load_env() -> std::result::Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playfetch/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    } else {
        dotenv::dotenv().ok();
    }
    Ok(())
}
