//! # kworb.net Module
//!
//! Read-only access to the streaming statistics published on kworb.net.
//!
//! Two page shapes are used:
//!
//! ```text
//! {base}/artist/{spotify_artist_id}_songs.html   per-artist song table
//! {base}/songs.html                              all-time chart
//! {base}/songs_{year_or_decade}.html             chart for a year or decade
//! ```
//!
//! Both pages carry a `table.sortable` whose first cell names the song and
//! whose third cell holds the comma-grouped daily stream count.
//!
//! - [`urls`] - builds page URLs and classifies period tokens
//! - [`fetch`] - fetches a page and parses it into an HTML document
//! - [`parse`] - extracts ranked [`ChartEntry`](crate::types::ChartEntry) rows

pub mod fetch;
pub mod parse;
pub mod urls;

pub use fetch::Kworb;
pub use parse::{parse_artist_songs, parse_songs_chart};
pub use urls::{build_kworb_artist_url, build_kworb_songs_url, is_period, period_label};
