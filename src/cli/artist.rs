use crate::{
    Res, info,
    kworb::{Kworb, parse_artist_songs},
    spotify::{MusicService, search},
    warning,
};

use super::{Outcome, authenticate, finish, print_chart};

/// Builds "{artist} - Top Daily Streams" from the artist's kworb page.
///
/// The page links every song to its Spotify track, so no track search is
/// needed. Fails with [`crate::Error::ArtistNotFound`] when Spotify does not
/// know the artist.
pub async fn artist_playlist<S: MusicService + ?Sized>(
    spotify: &S,
    kworb: &Kworb,
    artist_name: &str,
    limit: usize,
) -> Res<Outcome> {
    let user = authenticate(spotify).await?;

    info!("Searching for artist: {}", artist_name);
    let artist_id = search::get_artist_id(spotify, artist_name).await?;

    let url = kworb.artist_url(&artist_id);
    info!("Fetching kworb.net data: {}", url);
    let songs = {
        let document = kworb.fetch_page(&url).await?;
        parse_artist_songs(&document, limit)?
    };

    if songs.is_empty() {
        warning!("No songs found on kworb.net for this artist.");
        return Ok(Outcome::NothingCreated);
    }
    print_chart(&songs);

    let uris: Vec<String> = songs
        .into_iter()
        .filter_map(|song| song.source_reference)
        .collect();

    let name = format!("{} - Top Daily Streams", artist_name);
    let description = format!(
        "Top {} daily streamed songs for {} from kworb.net",
        limit, artist_name
    );
    finish(spotify, &user, &name, &description, true, &uris).await
}
