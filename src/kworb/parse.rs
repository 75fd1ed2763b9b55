use scraper::{ElementRef, Html, Selector};

use crate::{Error, Res, types::ChartEntry};

const TABLE_SELECTOR: &str = "table.sortable";
const ROW_SELECTOR: &str = "tbody > tr";
const LINK_SELECTOR: &str = "a[href]";

/// Prefix turning a kworb track link into a playable Spotify URI.
pub const TRACK_URI_PREFIX: &str = "spotify:track:";

struct Selectors {
    table: Selector,
    row: Selector,
    link: Selector,
}

impl Selectors {
    fn new() -> Res<Self> {
        Ok(Self {
            table: selector(TABLE_SELECTOR)?,
            row: selector(ROW_SELECTOR)?,
            link: selector(LINK_SELECTOR)?,
        })
    }
}

fn selector(css: &str) -> Res<Selector> {
    Selector::parse(css).map_err(|e| Error::Parse(format!("Invalid selector '{}': {}", css, e)))
}

/// Parses a kworb artist page into entries carrying a Spotify track URI.
///
/// Rows without a link in the first cell, or without a daily count in the
/// third cell, are skipped. The result is ordered by daily streams
/// (descending, ties keep page order) and cut to `limit`.
///
/// # Errors
///
/// [`Error::Parse`] if the page has no `table.sortable`, or a daily count is
/// not a number.
pub fn parse_artist_songs(document: &Html, limit: usize) -> Res<Vec<ChartEntry>> {
    let sel = Selectors::new()?;
    let table = find_table(document, &sel)?;

    let entries = data_rows(table, &sel)
        .filter_map(|cells| {
            let link = cells[0].select(&sel.link).next()?;
            let reference = track_uri(link.value().attr("href")?)?;
            let daily = daily_text(cells[2])?;
            Some((cell_text(link), reference, daily))
        })
        .map(|(name, reference, daily)| {
            Ok(ChartEntry {
                display_name: name,
                source_reference: Some(reference),
                daily_streams: parse_daily(&daily)?,
            })
        })
        .collect::<Res<Vec<_>>>()?;

    Ok(rank(entries, limit))
}

/// Parses a kworb chart page into entries whose display name is the
/// free-text `Artist - Title` used for a Spotify search.
///
/// Same table, skip, ordering and limit rules as [`parse_artist_songs`],
/// without the link requirement.
pub fn parse_songs_chart(document: &Html, limit: usize) -> Res<Vec<ChartEntry>> {
    let sel = Selectors::new()?;
    let table = find_table(document, &sel)?;

    let entries = data_rows(table, &sel)
        .filter_map(|cells| Some((cell_text(cells[0]), daily_text(cells[2])?)))
        .map(|(query, daily)| {
            Ok(ChartEntry {
                display_name: query,
                source_reference: None,
                daily_streams: parse_daily(&daily)?,
            })
        })
        .collect::<Res<Vec<_>>>()?;

    Ok(rank(entries, limit))
}

fn find_table<'a>(document: &'a Html, sel: &Selectors) -> Res<ElementRef<'a>> {
    document
        .select(&sel.table)
        .next()
        .ok_or_else(|| Error::Parse("Could not find songs table on page".to_string()))
}

/// Body rows with at least three `<td>` cells, in page order.
fn data_rows<'a>(
    table: ElementRef<'a>,
    sel: &'a Selectors,
) -> impl Iterator<Item = Vec<ElementRef<'a>>> + 'a {
    table
        .select(&sel.row)
        .map(|row| {
            row.children()
                .filter_map(ElementRef::wrap)
                .filter(|el| el.value().name() == "td")
                .collect::<Vec<_>>()
        })
        .filter(|cells| cells.len() >= 3)
}

fn rank(mut entries: Vec<ChartEntry>, limit: usize) -> Vec<ChartEntry> {
    // sort_by is stable: equal counts stay in page order
    entries.sort_by(|a, b| b.daily_streams.cmp(&a.daily_streams));
    entries.truncate(limit);
    entries
}

/// Text content with whitespace runs collapsed to single spaces.
fn cell_text(el: ElementRef<'_>) -> String {
    el.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Daily count with thousands separators removed, `None` when empty.
fn daily_text(cell: ElementRef<'_>) -> Option<String> {
    let text = cell_text(cell).replace(',', "");
    if text.is_empty() { None } else { Some(text) }
}

fn parse_daily(text: &str) -> Res<u64> {
    text.parse::<u64>()
        .map_err(|_| Error::Parse(format!("Invalid daily stream count '{}'", text)))
}

/// `spotify:track:{id}` from the last non-empty path segment of `href`.
pub fn track_uri(href: &str) -> Option<String> {
    href.split('/')
        .filter(|segment| !segment.is_empty())
        .last()
        .map(|id| format!("{}{}", TRACK_URI_PREFIX, id))
}
