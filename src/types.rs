use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// Raw body of the Spotify token endpoint. `refresh_token` is absent when the
/// refresh grant does not rotate it.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

/// One ranked row of a kworb.net song table.
///
/// `source_reference` is only set for artist pages, where each row links to
/// the track and the link is turned into a `spotify:track:` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartEntry {
    pub display_name: String,
    pub source_reference: Option<String>,
    pub daily_streams: u64,
}

#[derive(Tabled)]
pub struct ChartTableRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    #[tabled(rename = "Song")]
    pub song: String,
    #[tabled(rename = "Daily")]
    pub daily: String,
}

/// A Spotify track found for a free-text query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTrack {
    pub title: String,
    pub artist_name: String,
    /// Spotify track URI, e.g. `spotify:track:4uLU6hMCjMI75M1A2tKUQC`.
    pub service_track_id: String,
}

impl From<Track> for ResolvedTrack {
    fn from(track: Track) -> Self {
        ResolvedTrack {
            title: track.name,
            artist_name: track
                .artists
                .into_iter()
                .next()
                .map(|a| a.name)
                .unwrap_or_default(),
            service_track_id: track.uri,
        }
    }
}

/// Playlist description loaded from a user-supplied JSON file.
///
/// ```json
/// {"name": "My Playlist", "description": "Test", "songs": ["Song A"], "public": false}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_public")]
    pub public: bool,
    #[serde(rename = "songs")]
    pub track_queries: Vec<String>,
}

fn default_public() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracksResponse {
    pub tracks: Page<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchArtistsResponse {
    pub artists: Page<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}
