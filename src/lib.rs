//! Spotify Playlist Fetcher CLI Library
//!
//! This library implements the pipeline behind the `playfetch` binary: exchanging
//! application credentials for a bearer token, resolving a playlist identifier from
//! a user-supplied reference, fetching the playlist's track listing page by page,
//! and handing individual tracks to an external downloader process.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `downloader` - External downloader process dispatch
//! - `error` - Error types shared across the pipeline
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use playfetch::{config, utils};
//!
//! #[tokio::main]
//! async fn main() -> playfetch::error::Result<()> {
//!     config::load_env().await.ok();
//!     let config = config::Config::from_env()?;
//!     let tracks = utils::fetch_entire_playlist(
//!         &config,
//!         "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M",
//!     )
//!     .await?;
//!     println!("{} tracks", tracks.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod downloader;
pub mod error;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Fetching playlist tracks...");
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to provide positive feedback when operations complete successfully.
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// success!("Dispatched {} downloads", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Accepts the same arguments as `println!`.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It should only be used for fatal errors where
/// recovery is not possible.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues or important information that users should
/// notice. Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// warning!("Track {} has no download link, skipping", position);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
