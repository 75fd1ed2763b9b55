use crate::{
    Res, info,
    kworb::{Kworb, parse_songs_chart, period_label},
    spotify::{MusicService, search},
    warning,
};

use super::{Outcome, authenticate, finish, print_chart};

/// Builds "Top Daily Streams - {label}" from a kworb chart.
///
/// `period` must satisfy [`crate::kworb::is_period`]. Chart rows are plain
/// `Artist - Title` text, so each one is searched on Spotify in chart order;
/// rows without a match are reported and skipped.
pub async fn period_playlist<S: MusicService + ?Sized>(
    spotify: &S,
    kworb: &Kworb,
    period: &str,
    limit: usize,
) -> Res<Outcome> {
    let user = authenticate(spotify).await?;

    let url = kworb.songs_url(period);
    info!("Fetching kworb.net data: {}", url);
    let entries = {
        let document = kworb.fetch_page(&url).await?;
        parse_songs_chart(&document, limit)?
    };

    if entries.is_empty() {
        warning!("No songs found on kworb.net for this period.");
        return Ok(Outcome::NothingCreated);
    }
    print_chart(&entries);

    info!("Searching for tracks on Spotify...");
    let queries: Vec<&str> = entries.iter().map(|e| e.display_name.as_str()).collect();
    let uris = search::resolve_tracks(spotify, &queries).await?;

    let label = period_label(period);
    let name = format!("Top Daily Streams - {}", label);
    let description = format!("Top {} daily streamed songs ({}) from kworb.net", limit, label);
    finish(spotify, &user, &name, &description, true, &uris).await
}
