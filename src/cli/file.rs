use std::path::Path;

use crate::{
    Res, info,
    spotify::{MusicService, search},
    types::PlaylistRequest,
};

use super::{Outcome, authenticate, finish};

/// Reads a playlist description from a JSON file.
pub async fn load_playlist_file(path: &Path) -> Res<PlaylistRequest> {
    let content = async_fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

/// Builds the playlist described in a JSON file, searching each listed song
/// in order. The file is read and validated before anything touches Spotify.
pub async fn file_playlist<S: MusicService + ?Sized>(spotify: &S, path: &Path) -> Res<Outcome> {
    let request = load_playlist_file(path).await?;
    let user = authenticate(spotify).await?;

    info!(
        "Searching for {} tracks on Spotify...",
        request.track_queries.len()
    );
    let uris = search::resolve_tracks(spotify, &request.track_queries).await?;

    finish(
        spotify,
        &user,
        &request.name,
        &request.description,
        request.public,
        &uris,
    )
    .await
}
