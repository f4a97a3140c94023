use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use playfetch::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the tracks of a playlist
    Tracks(TracksOptions),

    /// Download tracks of a playlist via the external downloader
    Download(DownloadOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Playlist URL or any reference containing a playlist/<id> segment
    reference: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DownloadOptions {
    /// Playlist URL or any reference containing a playlist/<id> segment
    reference: String,

    /// Track position(s) to download (1-based); can be repeated
    #[clap(long = "track", action = ArgAction::Append, num_args = 1)]
    tracks: Vec<usize>,

    /// Download every track in the playlist
    #[clap(long, conflicts_with = "tracks")]
    all: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

/// Loads the environment and validates the configuration once, before any
/// network call. Missing credentials are fatal at startup, not per request.
async fn load_config() -> config::Config {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    match config::Config::from_env() {
        Ok(config) => config,
        Err(e @ error::Error::Configuration(_)) => {
            error!("{}. See .env.example for the expected settings.", e)
        }
        Err(e) => error!("{}", e),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Tracks(opt) => {
            let config = load_config().await;
            cli::tracks(&config, opt.reference).await
        }
        Command::Download(opt) => {
            let config = load_config().await;
            cli::download(&config, opt.reference, opt.tracks, opt.all).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
