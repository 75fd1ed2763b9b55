//! Configuration management for kworblist.
//!
//! Configuration values come from environment variables, optionally seeded
//! from a `.env` file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::{Error, Res};

/// Scope needed to create public and private playlists.
pub const DEFAULT_SCOPE: &str = "playlist-modify-public playlist-modify-private";

const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_KWORB_URL: &str = "https://kworb.net/spotify";

/// Loads environment variables from `kworblist/.env` in the local data directory.
///
/// The directory is created if it does not exist. A missing `.env` file is
/// not an error; variables already present in the process environment are
/// never overwritten.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/kworblist/.env`
/// - macOS: `~/Library/Application Support/kworblist/.env`
/// - Windows: `%LOCALAPPDATA%/kworblist/.env`
///
/// # Errors
///
/// Fails if the directory cannot be created or the file cannot be parsed.
pub async fn load_env() -> Res<()> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    }
    Ok(())
}

/// Root of everything kworblist keeps on disk.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("kworblist");
    path
}

fn required(name: &str) -> Res<String> {
    env::var(name).map_err(|_| Error::Config(format!("{} must be set", name)))
}

fn with_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Address the local OAuth callback server binds to (`SERVER_ADDRESS`),
/// e.g. `127.0.0.1:8888`.
pub fn server_addr() -> Res<String> {
    required("SERVER_ADDRESS")
}

/// Spotify application client ID (`SPOTIFY_API_AUTH_CLIENT_ID`).
pub fn spotify_client_id() -> Res<String> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// OAuth redirect URI (`SPOTIFY_API_REDIRECT_URI`). Must match the one
/// registered for the Spotify application and point at [`server_addr`].
pub fn spotify_redirect_uri() -> Res<String> {
    required("SPOTIFY_API_REDIRECT_URI")
}

/// Requested OAuth scope (`SPOTIFY_API_AUTH_SCOPE`), defaults to [`DEFAULT_SCOPE`].
pub fn spotify_scope() -> String {
    with_default("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

/// Spotify authorization endpoint (`SPOTIFY_API_AUTH_URL`).
pub fn spotify_apiauth_url() -> String {
    with_default("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

/// Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    with_default("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// Spotify token endpoint (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    with_default("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

/// kworb.net Spotify section (`KWORB_BASE_URL`).
pub fn kworb_url() -> String {
    with_default("KWORB_BASE_URL", DEFAULT_KWORB_URL)
}
