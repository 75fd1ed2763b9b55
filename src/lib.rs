//! kworblist library
//!
//! Builds Spotify playlists out of kworb.net streaming statistics. A request
//! (artist name, chart period, or a JSON playlist file) is turned into a kworb
//! URL, the page's song table is parsed into ranked entries, each entry is
//! resolved to a Spotify track, and a new playlist is created and filled.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `cli` - Mode dispatch and the artist, period and file flows
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by the whole crate
//! - `kworb` - kworb.net URL building, page fetching and table parsing
//! - `management` - Token persistence and refresh
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client, search and playlist writing
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use kworblist::{cli, config, kworb::Kworb, management::TokenManager, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> kworblist::Res<()> {
//!     config::load_env().await?;
//!     let mut tokens = TokenManager::load().await?;
//!     let spotify = SpotifyClient::new(config::spotify_apiurl(), tokens.get_valid_token().await);
//!     let kworb = Kworb::new(config::kworb_url())?;
//!     cli::period_playlist(&spotify, &kworb, "2020", 25).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod kworb;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Error, Res};

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching kworb.net data: {}", url);
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
/// # Example
///
/// ```
/// success!("Found: {} -- {}", track.title, track.artist_name);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program
/// with status 1.
///
/// Only used at the top level for fatal errors; library code returns
/// [`Error`] instead.
///
/// # Example
///
/// ```
/// error!("Artist 'Nobody' not found on Spotify");
/// // Program exits here
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
/// Used for expected, non-fatal conditions such as a song that could not be
/// found on Spotify.
///
/// # Example
///
/// ```
/// warning!("Not found: {}", query);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
