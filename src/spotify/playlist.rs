use crate::{
    Res,
    spotify::MusicService,
    types::{CreatePlaylistRequest, CreatePlaylistResponse},
};

/// Most track URIs Spotify accepts in one add-items call.
pub const PLAYLIST_BATCH_SIZE: usize = 100;

/// Creates a new, non-collaborative playlist for `user_id`.
pub async fn create_playlist<S: MusicService + ?Sized>(
    spotify: &S,
    user_id: &str,
    name: &str,
    description: &str,
    public: bool,
) -> Res<CreatePlaylistResponse> {
    let request = CreatePlaylistRequest {
        name: name.to_string(),
        description: description.to_string(),
        public,
        collaborative: false,
    };
    spotify.create_playlist(user_id, &request).await
}

/// Appends `uris` in batches of [`PLAYLIST_BATCH_SIZE`], in order.
///
/// Stops at the first failing batch. Batches already written stay in the
/// playlist.
pub async fn add_tracks<S: MusicService + ?Sized>(
    spotify: &S,
    playlist_id: &str,
    uris: &[String],
) -> Res<()> {
    for chunk in uris.chunks(PLAYLIST_BATCH_SIZE) {
        spotify.add_tracks(playlist_id, chunk).await?;
    }
    Ok(())
}

/// Creates the playlist and fills it with `uris`.
pub async fn publish<S: MusicService + ?Sized>(
    spotify: &S,
    user_id: &str,
    name: &str,
    description: &str,
    public: bool,
    uris: &[String],
) -> Res<CreatePlaylistResponse> {
    let playlist = create_playlist(spotify, user_id, name, description, public).await?;
    add_tracks(spotify, &playlist.id, uris).await?;
    Ok(playlist)
}
