//! # Spotify Integration Module
//!
//! The part of the Spotify Web API kworblist needs, behind the
//! [`MusicService`] trait so the playlist flows can run against a fake.
//!
//! ```text
//! Flows (cli)
//!      ↓
//! search / playlist helpers
//!      ↓
//! MusicService ── SpotifyClient (reqwest, bearer token)
//!      ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /search?type=track` - free-text track search
//! - `GET /search?type=artist` - artist lookup by name
//! - `GET /me` - current user
//! - `POST /users/{user_id}/playlists` - create a playlist
//! - `POST /playlists/{playlist_id}/tracks` - append up to 100 tracks
//!
//! Authentication (OAuth 2.0 PKCE) lives in [`auth`]; tokens are persisted and
//! refreshed by [`crate::management::TokenManager`].
//!
//! ## Error Handling
//!
//! Every call is made once. Transport errors and non-success statuses are
//! returned as [`crate::Error::Network`]; nothing is retried.

pub mod auth;
mod client;
pub mod playlist;
pub mod search;

use async_trait::async_trait;

pub use client::SpotifyClient;

use crate::{
    Res,
    types::{Artist, CreatePlaylistRequest, CreatePlaylistResponse, CurrentUser, ResolvedTrack},
};

/// Operations the playlist flows need from the music service.
#[async_trait]
pub trait MusicService {
    /// Track search, best match first.
    async fn search_tracks(&self, query: &str, limit: u32) -> Res<Vec<ResolvedTrack>>;

    /// Artist search, best match first.
    async fn search_artists(&self, name: &str, limit: u32) -> Res<Vec<Artist>>;

    async fn current_user(&self) -> Res<CurrentUser>;

    /// Creates a new playlist owned by `user_id`. Never reuses an existing one.
    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Res<CreatePlaylistResponse>;

    /// Appends `uris` to the playlist in one call. The service accepts at most
    /// [`playlist::PLAYLIST_BATCH_SIZE`] per call.
    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Res<()>;
}
