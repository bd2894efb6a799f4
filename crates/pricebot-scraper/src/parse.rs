//! Result-page and card parsers over a rendered HTML snapshot.
//!
//! The browser session hands over `page.content()` after the render wait;
//! everything here is pure DOM traversal via [`scraper`], so the whole layer
//! is testable against static fixtures. Failure containment follows the
//! card/page boundaries: a malformed card contributes nothing, a page whose
//! structure is gone yields an empty list.

use pricebot_core::Product;
use scraper::{ElementRef, Html, Selector};

use crate::extract::{extract_field, extract_text, parse_feedbacks, parse_price, parse_rating};
use crate::image::derive_image_url;
use crate::search::MARKETPLACE;

/// Structural marker for one result card; also the render-ready marker.
pub const CARD_MARKER: &str = ".product-card";

/// The site-native item identifier attribute. A card without it is skipped.
const ID_ATTR: &str = "data-nm-id";

const NAME_SELECTOR: &str = ".product-card__name";
const BRAND_SELECTOR: &str = ".product-card__brand";
const PRICE_SELECTOR: &str = ".price__lower-price";
const RATING_SELECTOR: &str = ".product-card__rating";
const COUNT_SELECTOR: &str = ".product-card__count";

const TITLE_FALLBACK: &str = "Название не указано";
const BRAND_FALLBACK: &str = "Бренд не указан";

/// Extracts up to `limit` products from a rendered search-results page, in
/// document order.
///
/// Per-card failures are isolated: a card that cannot produce a record is
/// logged and skipped, and parsing continues with the next one. If the page
/// has no recognizable result structure at all, the result is simply empty.
#[must_use]
pub fn parse_results(html: &str, limit: usize) -> Vec<Product> {
    let document = Html::parse_document(html);
    let Ok(card_selector) = Selector::parse(CARD_MARKER) else {
        return Vec::new();
    };

    let mut products = Vec::new();
    for card in document.select(&card_selector).take(limit) {
        match parse_card(card) {
            Some(product) => products.push(product),
            None => {
                tracing::warn!("skipping result card without a usable product identifier");
            }
        }
    }
    products
}

/// Parses one result card into a [`Product`], or `None` when the card has no
/// native identifier — the sole field whose absence invalidates the card.
///
/// Every other field is extracted through its fault-isolated extractor and
/// degrades to its default; the image and product URLs are derived from the
/// identifier alone and cannot fail.
pub(crate) fn parse_card(card: ElementRef<'_>) -> Option<Product> {
    let product_id = card.value().attr(ID_ATTR)?.trim();
    if product_id.is_empty() {
        return None;
    }

    let title =
        extract_text(card, NAME_SELECTOR).unwrap_or_else(|| TITLE_FALLBACK.to_string());
    let brand =
        extract_text(card, BRAND_SELECTOR).unwrap_or_else(|| BRAND_FALLBACK.to_string());
    let price = extract_field(card, PRICE_SELECTOR, parse_price).unwrap_or(0);
    let rating = extract_field(card, RATING_SELECTOR, parse_rating).unwrap_or(0.0);
    let feedbacks = extract_field(card, COUNT_SELECTOR, parse_feedbacks).unwrap_or(0);

    Some(Product {
        marketplace: MARKETPLACE.to_string(),
        name: format!("{brand} - {title}"),
        price,
        rating,
        feedbacks,
        image_url: derive_image_url(product_id),
        product_url: product_url(product_id),
        product_id: product_id.to_string(),
    })
}

/// Canonical detail-page deep link for an identifier.
fn product_url(product_id: &str) -> String {
    format!("https://www.wildberries.ru/catalog/{product_id}/detail.aspx")
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
