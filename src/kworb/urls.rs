use std::ops::RangeInclusive;

/// Public location of kworb's Spotify section.
pub const KWORB_BASE: &str = "https://kworb.net/spotify";

/// Period token selecting the all-time chart.
pub const ALL_TIME: &str = "all_time";

/// Decades kworb publishes a chart for.
pub const VALID_DECADES: [u32; 10] = [1960, 1970, 1980, 1990, 2000, 2005, 2010, 2015, 2020, 2025];

/// Years kworb publishes a chart for.
pub const VALID_YEARS: RangeInclusive<u32> = 2016..=2026;

/// Returns true if `token` selects a kworb chart: the all-time marker, a
/// known decade, or a year in [`VALID_YEARS`]. Anything else is an artist name.
pub fn is_period(token: &str) -> bool {
    if token == ALL_TIME {
        return true;
    }

    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    match token.parse::<u32>() {
        Ok(num) => VALID_DECADES.contains(&num) || VALID_YEARS.contains(&num),
        Err(_) => false,
    }
}

/// Human-readable label used in playlist names and descriptions.
pub fn period_label(period: &str) -> &str {
    if period == ALL_TIME { "All Time" } else { period }
}

/// Artist song-table URL under an arbitrary kworb `base`.
pub fn artist_url(base: &str, artist_id: &str) -> String {
    format!("{}/artist/{}_songs.html", base.trim_end_matches('/'), artist_id)
}

/// Chart URL for `period` under an arbitrary kworb `base`.
pub fn songs_url(base: &str, period: &str) -> String {
    let base = base.trim_end_matches('/');
    if period == ALL_TIME {
        format!("{}/songs.html", base)
    } else {
        format!("{}/songs_{}.html", base, period)
    }
}

/// URL of the song table for a Spotify artist ID on kworb.net.
pub fn build_kworb_artist_url(artist_id: &str) -> String {
    artist_url(KWORB_BASE, artist_id)
}

/// URL of the chart for a period token. The token must already have passed
/// [`is_period`].
pub fn build_kworb_songs_url(period: &str) -> String {
    songs_url(KWORB_BASE, period)
}
