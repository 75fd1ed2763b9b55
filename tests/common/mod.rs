#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use kworblist::{
    Error, Res,
    spotify::MusicService,
    types::{Artist, CreatePlaylistRequest, CreatePlaylistResponse, CurrentUser, ResolvedTrack},
};

/// Every call the fake received, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SearchTracks(String),
    SearchArtists(String),
    CurrentUser,
    CreatePlaylist(String, CreatePlaylistRequest),
    AddTracks(String, Vec<String>),
}

/// In-memory stand-in for Spotify. Queries without a registered answer come
/// back empty. The `add_tracks` call numbered `fail_add_call` (1-based)
/// fails after being recorded.
#[derive(Default)]
pub struct FakeSpotify {
    tracks: HashMap<String, ResolvedTrack>,
    artists: HashMap<String, Artist>,
    fail_add_call: Option<usize>,
    calls: Mutex<Vec<Call>>,
}

impl FakeSpotify {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_track(mut self, query: &str, title: &str, artist: &str, uri: &str) -> Self {
        self.tracks.insert(
            query.to_string(),
            ResolvedTrack {
                title: title.to_string(),
                artist_name: artist.to_string(),
                service_track_id: uri.to_string(),
            },
        );
        self
    }

    pub fn with_artist(mut self, name: &str, id: &str) -> Self {
        self.artists.insert(
            format!("artist:{}", name),
            Artist {
                id: id.to_string(),
                name: name.to_string(),
            },
        );
        self
    }

    pub fn failing_add_call(mut self, n: usize) -> Self {
        self.fail_add_call = Some(n);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<CreatePlaylistRequest> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::CreatePlaylist(_, req) => Some(req),
                _ => None,
            })
            .collect()
    }

    pub fn added(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::AddTracks(_, uris) => Some(uris),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl MusicService for FakeSpotify {
    async fn search_tracks(&self, query: &str, _limit: u32) -> Res<Vec<ResolvedTrack>> {
        self.record(Call::SearchTracks(query.to_string()));
        Ok(self.tracks.get(query).cloned().into_iter().collect())
    }

    async fn search_artists(&self, name: &str, _limit: u32) -> Res<Vec<Artist>> {
        self.record(Call::SearchArtists(name.to_string()));
        Ok(self.artists.get(name).cloned().into_iter().collect())
    }

    async fn current_user(&self) -> Res<CurrentUser> {
        self.record(Call::CurrentUser);
        Ok(CurrentUser {
            id: "user1".to_string(),
            display_name: Some("Test User".to_string()),
        })
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Res<CreatePlaylistResponse> {
        self.record(Call::CreatePlaylist(user_id.to_string(), request.clone()));
        Ok(CreatePlaylistResponse {
            id: "pl1".to_string(),
            name: request.name.clone(),
        })
    }

    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Res<()> {
        self.record(Call::AddTracks(playlist_id.to_string(), uris.to_vec()));
        if self.fail_add_call == Some(self.added().len()) {
            return Err(Error::Io(std::io::Error::other("playlist update rejected")));
        }
        Ok(())
    }
}

/// Minimal kworb artist page. Each row is (song, track id, daily); an empty
/// track id leaves the song without a link.
pub fn artist_html(rows: &[(&str, &str, &str)]) -> String {
    let trs: String = rows
        .iter()
        .map(|(name, track_id, daily)| {
            let link = if track_id.is_empty() {
                name.to_string()
            } else {
                format!(r#"<a href="/spotify/track/{}/">{}</a>"#, track_id, name)
            };
            format!(
                "<tr><td>{}</td><td>1,000,000</td><td>{}</td></tr>\n",
                link, daily
            )
        })
        .collect();
    format!(
        r#"<html><body><table class="sortable"><thead><tr><th>Song</th><th>Streams</th><th>Daily</th></tr></thead><tbody>{}</tbody></table></body></html>"#,
        trs
    )
}

/// Minimal kworb chart page. Each row is (query, daily).
pub fn chart_html(rows: &[(&str, &str)]) -> String {
    let trs: String = rows
        .iter()
        .map(|(query, daily)| {
            format!(
                "<tr><td>{}</td><td>1,000,000</td><td>{}</td></tr>\n",
                query, daily
            )
        })
        .collect();
    format!(
        r#"<html><body><table class="sortable"><tbody>{}</tbody></table></body></html>"#,
        trs
    )
}
