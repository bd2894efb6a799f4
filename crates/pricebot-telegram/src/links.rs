//! Search deep-links into marketplaces we do not scrape live.
//!
//! Pure URL templating: the user jumps straight into the other site's own
//! search for the same query.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::api::{InlineKeyboardButton, InlineKeyboardMarkup};

const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[must_use]
pub fn ozon_search_url(query: &str) -> String {
    format!(
        "https://www.ozon.ru/search/?text={}",
        utf8_percent_encode(query, QUERY_ENCODE_SET)
    )
}

#[must_use]
pub fn yandex_market_search_url(query: &str) -> String {
    format!(
        "https://market.yandex.ru/search?text={}",
        utf8_percent_encode(query, QUERY_ENCODE_SET)
    )
}

/// Keyboard offering the same search in other marketplaces.
#[must_use]
pub fn search_keyboard(query: &str) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup {
        inline_keyboard: vec![vec![
            InlineKeyboardButton {
                text: "🔍 Искать в OZON".to_string(),
                url: ozon_search_url(query),
            },
            InlineKeyboardButton {
                text: "🔍 Искать в Яндекс Маркете".to_string(),
                url: yandex_market_search_url(query),
            },
        ]],
    }
}

/// Single-button keyboard for the "compare elsewhere" prompt.
#[must_use]
pub fn compare_keyboard(query: &str) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup {
        inline_keyboard: vec![vec![InlineKeyboardButton {
            text: "🔄 Сравнить цены в других магазинах".to_string(),
            url: ozon_search_url(query),
        }]],
    }
}

/// Button opening a product's detail page.
#[must_use]
pub fn product_keyboard(product_url: &str) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup {
        inline_keyboard: vec![vec![InlineKeyboardButton {
            text: "🛒 Перейти к товару".to_string(),
            url: product_url.to_string(),
        }]],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ozon_url_encodes_query() {
        assert_eq!(
            ozon_search_url("redmi 15c"),
            "https://www.ozon.ru/search/?text=redmi%2015c"
        );
    }

    #[test]
    fn yandex_url_encodes_cyrillic() {
        assert_eq!(
            yandex_market_search_url("кеды"),
            "https://market.yandex.ru/search?text=%D0%BA%D0%B5%D0%B4%D1%8B"
        );
    }

    #[test]
    fn search_keyboard_has_both_marketplaces() {
        let keyboard = search_keyboard("кеды");
        assert_eq!(keyboard.inline_keyboard.len(), 1);
        assert_eq!(keyboard.inline_keyboard[0].len(), 2);
        assert!(keyboard.inline_keyboard[0][0].url.contains("ozon.ru"));
        assert!(keyboard.inline_keyboard[0][1].url.contains("market.yandex.ru"));
    }

    #[test]
    fn product_keyboard_links_to_detail_page() {
        let keyboard = product_keyboard("https://www.wildberries.ru/catalog/1/detail.aspx");
        assert_eq!(
            keyboard.inline_keyboard[0][0].url,
            "https://www.wildberries.ru/catalog/1/detail.aspx"
        );
    }
}
