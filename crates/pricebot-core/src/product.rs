use serde::{Deserialize, Serialize};

/// A product extracted from a marketplace search-results page, normalized
/// for ranking and presentation.
///
/// Records are assembled once per successfully-parsed result card and are
/// read-only afterward. The card parser guarantees `product_id` is non-empty
/// before construction; a card without a native identifier never becomes a
/// `Product`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Source site identifier (e.g., `"Wildberries"`).
    pub marketplace: String,
    /// Display name in `"<brand> - <title>"` form. Either side degrades to
    /// its placeholder text when the page did not render it.
    pub name: String,
    /// Price in the smallest whole currency unit. `0` means "price not
    /// determined", not "free".
    pub price: u64,
    /// Site-supplied rating; `0.0` when unavailable. No asserted bounds.
    pub rating: f64,
    /// Review count; `0` when unavailable.
    pub feedbacks: u64,
    /// Always populated: a derived CDN image URL, or the fixed placeholder
    /// when the identifier does not fit the sharding scheme.
    pub image_url: String,
    /// Canonical deep link to the item's detail page.
    pub product_url: String,
    /// Site-native identifier. Non-empty by construction.
    pub product_id: String,
}

impl Product {
    /// Returns `true` if the price was actually extracted (non-zero).
    #[must_use]
    pub fn has_price(&self) -> bool {
        self.price > 0
    }

    /// Returns `name` truncated to at most `max_chars` characters, for
    /// compact one-line summaries.
    #[must_use]
    pub fn short_name(&self, max_chars: usize) -> &str {
        match self.name.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.name[..idx],
            None => &self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: &str, price: u64) -> Product {
        Product {
            marketplace: "Wildberries".to_string(),
            name: "Nike - Кроссовки Air Max".to_string(),
            price,
            rating: 4.7,
            feedbacks: 1234,
            image_url: "https://basket-01.wbbasket.ru/vol1/part1234/1234567/images/c516x688/1.jpg"
                .to_string(),
            product_url: format!("https://www.wildberries.ru/catalog/{id}/detail.aspx"),
            product_id: id.to_string(),
        }
    }

    #[test]
    fn has_price_false_for_undetermined_price() {
        assert!(!make_product("1234567", 0).has_price());
    }

    #[test]
    fn has_price_true_for_extracted_price() {
        assert!(make_product("1234567", 12990).has_price());
    }

    #[test]
    fn short_name_returns_full_name_when_under_limit() {
        let product = make_product("1234567", 100);
        assert_eq!(product.short_name(60), "Nike - Кроссовки Air Max");
    }

    #[test]
    fn short_name_truncates_on_char_boundary() {
        let product = make_product("1234567", 100);
        // Cyrillic characters are multi-byte; a byte-index cut would panic.
        assert_eq!(product.short_name(10), "Nike - Кро");
    }

    #[test]
    fn serde_roundtrip_product() {
        let product = make_product("1234567", 12990);
        let json = serde_json::to_string(&product).expect("serialization failed");
        let decoded: Product = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded.product_id, product.product_id);
        assert_eq!(decoded.price, product.price);
        assert_eq!(decoded.name, product.name);
    }
}
