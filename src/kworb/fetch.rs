use std::time::Duration;

use reqwest::Client;
use scraper::Html;

use crate::{Res, kworb::urls, utils};

/// Fixed network timeout for a kworb page.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Page fetcher bound to a kworb base URL.
///
/// Every call hits the network; nothing is cached between calls.
pub struct Kworb {
    http: Client,
    base_url: String,
}

impl Kworb {
    pub fn new(base_url: impl Into<String>) -> Res<Self> {
        let http = Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn artist_url(&self, artist_id: &str) -> String {
        urls::artist_url(&self.base_url, artist_id)
    }

    pub fn songs_url(&self, period: &str) -> String {
        urls::songs_url(&self.base_url, period)
    }

    /// Performs a single GET and parses the body as HTML.
    ///
    /// Transport failures and non-success statuses are returned as
    /// [`Error::Network`](crate::Error::Network). No retries.
    pub async fn fetch_page(&self, url: &str) -> Res<Html> {
        let pb = utils::spinner(format!("Fetching {}...", url));

        let result = async {
            let response = self.http.get(url).send().await?.error_for_status()?;
            response.text().await
        }
        .await;

        pb.finish_and_clear();
        Ok(Html::parse_document(&result?))
    }
}
