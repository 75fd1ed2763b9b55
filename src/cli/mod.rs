//! # CLI Module
//!
//! Turns the command-line input into one of three playlist flows and runs it.
//!
//! ```text
//! classify(target, length)
//!     ├── Mode::Artist  → artist_playlist   (search artist → kworb artist page → URIs)
//!     ├── Mode::Period  → period_playlist   (kworb chart → search each song)
//!     └── Mode::File    → file_playlist     (JSON file → search each song)
//!                              ↓
//!                 create playlist + add tracks in batches
//! ```
//!
//! Every flow reports progress through the crate's output macros and ends
//! in an [`Outcome`]: a created playlist, or nothing created because no
//! songs or tracks were found. Fatal problems come back as [`crate::Error`].
//!
//! ## Usage Patterns
//!
//! ```bash
//! kworblist auth                     # authorize with Spotify once
//! kworblist "Aphex Twin" 20          # artist's top songs by daily streams
//! kworblist 2016 30                  # chart for a year
//! kworblist 1960 25                  # chart for a decade
//! kworblist all_time 50              # all-time chart
//! kworblist my_playlist.json         # songs listed in a file
//! ```

mod artist;
mod auth;
mod file;
mod period;

use std::{ffi::OsString, path::PathBuf};

use tabled::Table;

pub use artist::artist_playlist;
pub use auth::auth;
pub use file::{file_playlist, load_playlist_file};
pub use period::period_playlist;

use crate::{
    Res, info,
    kworb::{Kworb, is_period},
    spotify::{MusicService, playlist},
    success,
    types::{ChartEntry, CurrentUser},
    utils, warning,
};

/// Extension recognised as a playlist file argument.
pub const PLAYLIST_FILE_EXTENSION: &str = ".json";

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Artist { name: String, limit: usize },
    Period { token: String, limit: usize },
    File(PathBuf),
}

/// How a flow ended when nothing fatal happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created {
        playlist_id: String,
        name: String,
        tracks: usize,
    },
    NothingCreated,
}

/// Classifies the positional arguments.
///
/// A lone argument ending in `.json` is a playlist file. A target plus a
/// positive length is a chart period when [`is_period`] accepts it, and an
/// artist name otherwise. Any other shape is a usage error (`None`).
pub fn classify(target: Option<&str>, length: Option<u32>) -> Option<Mode> {
    match (target, length) {
        (Some(target), None) if target.ends_with(PLAYLIST_FILE_EXTENSION) => {
            Some(Mode::File(PathBuf::from(target)))
        }
        (Some(target), Some(length)) if length > 0 => {
            let limit = length as usize;
            if is_period(target) {
                Some(Mode::Period {
                    token: target.to_string(),
                    limit,
                })
            } else {
                Some(Mode::Artist {
                    name: target.to_string(),
                    limit,
                })
            }
        }
        _ => None,
    }
}

/// Rewrites a `<target> <length>` invocation so clap reads `target` as a
/// positional value.
///
/// Without the inserted `--`, an artist named like a subcommand (`auth`) is
/// dispatched as that subcommand and one starting with `-` (`-M-`) is taken
/// for a flag. Any other argument list is returned unchanged.
pub fn positional_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let is_length = |arg: &OsString| arg.to_str().is_some_and(|s| s.parse::<u32>().is_ok());

    if args.len() == 3 && args[1] != "--" && is_length(&args[2]) {
        args.insert(1, OsString::from("--"));
    }
    args
}

pub fn usage() -> String {
    let bin = env!("CARGO_PKG_NAME");
    format!(
        "Usage: {bin} <artist_or_period> <length>\n       {bin} <playlist.json>\n\n  artist:  {bin} \"Aphex Twin\" 20\n  year:    {bin} 2016 30\n  decade:  {bin} 1960 25\n  all:     {bin} all_time 50\n  json:    {bin} my_playlist.json"
    )
}

/// Runs the flow selected by `mode`.
pub async fn run<S: MusicService + ?Sized>(
    mode: &Mode,
    spotify: &S,
    kworb: &Kworb,
) -> Res<Outcome> {
    match mode {
        Mode::Artist { name, limit } => artist_playlist(spotify, kworb, name, *limit).await,
        Mode::Period { token, limit } => period_playlist(spotify, kworb, token, *limit).await,
        Mode::File(path) => file_playlist(spotify, path).await,
    }
}

/// Looks up and reports the account playlists will be created under.
pub async fn authenticate<S: MusicService + ?Sized>(spotify: &S) -> Res<CurrentUser> {
    info!("Authenticating with Spotify...");
    let user = spotify.current_user().await?;
    info!(
        "Logged in as: {} ({})",
        user.display_name.as_deref().unwrap_or(&user.id),
        user.id
    );
    Ok(user)
}

fn print_chart(entries: &[ChartEntry]) {
    info!("Top {} songs by daily streams:", entries.len());
    println!("{}", Table::new(utils::chart_table_rows(entries)));
}

/// Creates and fills the playlist, unless there is nothing to put in it.
async fn finish<S: MusicService + ?Sized>(
    spotify: &S,
    user: &CurrentUser,
    name: &str,
    description: &str,
    public: bool,
    uris: &[String],
) -> Res<Outcome> {
    if uris.is_empty() {
        warning!("No tracks found on Spotify. Playlist not created.");
        return Ok(Outcome::NothingCreated);
    }

    info!("Creating playlist '{}'...", name);
    let created = playlist::publish(spotify, &user.id, name, description, public, uris).await?;
    success!("Done! '{}' is ready with {} tracks.", name, uris.len());

    Ok(Outcome::Created {
        playlist_id: created.id,
        name: name.to_string(),
        tracks: uris.len(),
    })
}
