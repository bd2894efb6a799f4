//! Top-level search orchestration against the Wildberries catalog.
//!
//! `search` is the single entry point the front-ends call. Everything that
//! can go wrong underneath it — launch, navigation, render timeout, parsing
//! — is caught here and converted into an empty result list; the cause is
//! only visible through logs. Callers therefore cannot distinguish "no
//! matches" from "extraction failed", and must word empty-result messaging
//! accordingly.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use pricebot_core::Product;
use tracing::{info, warn};

use crate::error::ScraperError;
use crate::parse::{parse_results, CARD_MARKER};
use crate::session::{BrowserSession, SessionConfig};

/// Source-site identifier stamped into every extracted record.
pub const MARKETPLACE: &str = "Wildberries";

const SEARCH_URL: &str = "https://www.wildberries.ru/catalog/0/search.aspx";

/// Unreserved characters stay literal; everything else (spaces, Cyrillic,
/// punctuation) is percent-encoded.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Drives one reused browser session through catalog searches.
///
/// Not safe for concurrent searches: the underlying session handles one
/// navigation at a time, so callers hold a single scraper per worker or
/// serialize access behind a mutex.
pub struct WildberriesScraper {
    session: BrowserSession,
}

impl WildberriesScraper {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            session: BrowserSession::new(config),
        }
    }

    /// Searches the catalog and returns up to `limit` extracted products in
    /// document order.
    ///
    /// Never fails: any error in the session/navigation/parsing chain is
    /// logged and collapsed into an empty list.
    pub async fn search(&mut self, query: &str, limit: usize) -> Vec<Product> {
        match self.try_search(query, limit).await {
            Ok(products) => {
                info!(query, found = products.len(), "search finished");
                products
            }
            Err(error) => {
                warn!(query, %error, "search failed — returning no results");
                Vec::new()
            }
        }
    }

    async fn try_search(&mut self, query: &str, limit: usize) -> Result<Vec<Product>, ScraperError> {
        let url = search_url(query);
        info!(%url, "opening search page");
        let html = self.session.navigate_and_wait(&url, CARD_MARKER).await?;
        Ok(parse_results(&html, limit))
    }

    /// Releases the browser process. Safe to call repeatedly.
    pub async fn dispose(&mut self) {
        self.session.dispose().await;
    }
}

/// Builds the percent-encoded catalog search URL for a free-text query.
#[must_use]
pub fn search_url(query: &str) -> String {
    format!(
        "{SEARCH_URL}?search={}",
        utf8_percent_encode(query, QUERY_ENCODE_SET)
    )
}
