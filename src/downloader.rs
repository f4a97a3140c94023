//! External downloader process dispatch.
//!
//! Each track download is a single invocation of the configured downloader
//! command with the track's canonical URL as its sole argument. Dispatches are
//! independent of each other and of the catalog fetch; several may run at the
//! same time, each with its own child process and no shared state.

use tokio::{process::Command, task::JoinHandle};

use crate::error::{Error, Result};

/// Handle for one in-flight download.
///
/// The underlying process runs in a spawned task, so callers are free to
/// dispatch several tracks and collect the handles before waiting. Awaiting
/// [`DownloadHandle::wait`] right after [`dispatch`] gives plain blocking
/// semantics. There is no cancellation; a dispatched download runs to
/// completion or failure.
#[derive(Debug)]
pub struct DownloadHandle {
    task: JoinHandle<Result<()>>,
}

impl DownloadHandle {
    /// Waits for the downloader process to finish.
    ///
    /// Returns `Ok(())` on exit code 0, [`Error::DownloadFailed`] carrying the
    /// exit code otherwise. Process output is not captured or relayed.
    pub async fn wait(self) -> Result<()> {
        self.task.await?
    }
}

/// Spawns the external downloader for a single track.
///
/// # Arguments
///
/// * `program` - Downloader command name, from [`crate::config::Config::downloader`]
/// * `track_url` - Canonical track URL passed as the sole argument
///
/// # Errors
///
/// Returns [`Error::MissingLocator`] without spawning anything when the URL is
/// empty or blank; a track lacking a canonical URL cannot be downloaded and
/// the caller should omit the action for such rows. Spawn failures (e.g. the
/// command is not installed) surface as [`Error::Io`] from the handle.
pub fn dispatch(program: &str, track_url: &str) -> Result<DownloadHandle> {
    if track_url.trim().is_empty() {
        return Err(Error::MissingLocator);
    }

    let program = program.to_string();
    let track_url = track_url.to_string();
    let task = tokio::spawn(async move {
        let status = Command::new(&program).arg(&track_url).status().await?;
        if status.success() {
            Ok(())
        } else {
            Err(Error::DownloadFailed(status.code().unwrap_or(-1)))
        }
    });

    Ok(DownloadHandle { task })
}
