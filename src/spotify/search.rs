use crate::{
    Error, Res, info,
    spotify::MusicService,
    success,
    types::ResolvedTrack,
    warning,
};

/// Resolves a free-text query to the best matching track.
///
/// `Ok(None)` means the search came back empty. That is an expected outcome
/// for chart entries and playlist files, not an error.
pub async fn search_track<S: MusicService + ?Sized>(
    spotify: &S,
    query: &str,
) -> Res<Option<ResolvedTrack>> {
    let tracks = spotify.search_tracks(query, 1).await?;
    Ok(tracks.into_iter().next())
}

/// Resolves every query in order and returns the track URIs that were found.
///
/// Each query is reported as found or not found. Queries without a match are
/// skipped; only transport or API failures abort.
pub async fn resolve_tracks<S, Q>(spotify: &S, queries: &[Q]) -> Res<Vec<String>>
where
    S: MusicService + ?Sized,
    Q: AsRef<str>,
{
    let mut uris = Vec::with_capacity(queries.len());
    for query in queries {
        let query = query.as_ref();
        match search_track(spotify, query).await? {
            Some(track) => {
                success!("Found: {} -- {}", track.title, track.artist_name);
                uris.push(track.service_track_id);
            }
            None => warning!("Not found: {}", query),
        }
    }
    Ok(uris)
}

/// Looks up an artist by name and returns the Spotify ID of the best match.
///
/// # Errors
///
/// [`Error::ArtistNotFound`] when the search has no results.
pub async fn get_artist_id<S: MusicService + ?Sized>(spotify: &S, artist_name: &str) -> Res<String> {
    let artist = spotify
        .search_artists(&format!("artist:{}", artist_name), 1)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| Error::ArtistNotFound(artist_name.to_string()))?;

    info!("Found artist: {} (ID: {})", artist.name, artist.id);
    Ok(artist.id)
}
