use async_trait::async_trait;
use reqwest::Client;

use crate::{
    Res,
    spotify::MusicService,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, Artist, CreatePlaylistRequest,
        CreatePlaylistResponse, CurrentUser, ResolvedTrack, SearchArtistsResponse,
        SearchTracksResponse,
    },
};

/// Spotify Web API client authenticated with a bearer token.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token: String,
}

impl SpotifyClient {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    async fn search<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
        kind: &str,
        limit: u32,
    ) -> Res<T> {
        let limit = limit.to_string();
        let response = self
            .http
            .get(format!("{}/search", self.api_url))
            .bearer_auth(&self.token)
            .query(&[("q", query), ("type", kind), ("limit", limit.as_str())])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl MusicService for SpotifyClient {
    async fn search_tracks(&self, query: &str, limit: u32) -> Res<Vec<ResolvedTrack>> {
        let res: SearchTracksResponse = self.search(query, "track", limit).await?;
        Ok(res.tracks.items.into_iter().map(ResolvedTrack::from).collect())
    }

    async fn search_artists(&self, name: &str, limit: u32) -> Res<Vec<Artist>> {
        let res: SearchArtistsResponse = self.search(name, "artist", limit).await?;
        Ok(res.artists.items)
    }

    async fn current_user(&self) -> Res<CurrentUser> {
        let response = self
            .http
            .get(format!("{}/me", self.api_url))
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<CurrentUser>().await?)
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Res<CreatePlaylistResponse> {
        let response = self
            .http
            .post(format!("{}/users/{}/playlists", self.api_url, user_id))
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<CreatePlaylistResponse>().await?)
    }

    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Res<()> {
        let body = AddTrackToPlaylistRequest {
            uris: uris.to_vec(),
        };

        let response = self
            .http
            .post(format!("{}/playlists/{}/tracks", self.api_url, playlist_id))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        response.json::<AddTrackToPlaylistResponse>().await?;
        Ok(())
    }
}
