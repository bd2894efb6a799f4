//! Price comparison over extracted [`Product`] lists.
//!
//! Pure functions only: ranking is a stable sort, so records with equal
//! prices keep their document order from extraction.

use crate::product::Product;

/// How many entries the ranked summary shows.
const SUMMARY_LIMIT: usize = 5;

/// Returns the products sorted by ascending price.
///
/// The sort is stable: among equal prices, the original (document) order is
/// preserved. Note that `price == 0` means "price not determined", so such
/// records sort first; callers that want to exclude them should filter with
/// [`Product::has_price`] beforehand.
#[must_use]
pub fn rank(products: &[Product]) -> Vec<Product> {
    let mut ranked = products.to_vec();
    ranked.sort_by_key(|p| p.price);
    ranked
}

/// Returns the cheapest product, or `None` for an empty input.
///
/// When several products share the minimum price, the first of them in the
/// original order wins.
#[must_use]
pub fn cheapest(products: &[Product]) -> Option<&Product> {
    products.iter().min_by_key(|p| p.price)
}

/// Renders a plain-text price-comparison summary: the top entries by
/// ascending price and a callout for the cheapest one.
///
/// Returns an empty string for an empty input. The output carries no
/// platform markup; front-ends decorate it themselves.
#[must_use]
pub fn ranked_summary(products: &[Product], query: &str) -> String {
    let Some(best) = cheapest(products) else {
        return String::new();
    };

    let ranked = rank(products);
    let mut out = format!("Сравнение цен в Wildberries по запросу \"{query}\"\n\n");

    for (idx, product) in ranked.iter().take(SUMMARY_LIMIT).enumerate() {
        out.push_str(&format!(
            "{}. {}\n   {} ₽\n   ⭐ {} | отзывы: {}\n\n",
            idx + 1,
            product.short_name(60),
            group_digits(product.price),
            product.rating,
            product.feedbacks,
        ));
    }

    out.push_str(&format!(
        "Самый дешевый вариант: {} ₽\n{}",
        group_digits(best.price),
        best.product_url,
    ));
    out
}

/// Formats an integer with thin-space thousands separators, e.g.
/// `12990` → `"12 990"`.
#[must_use]
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (idx + 3 - offset) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: &str, price: u64) -> Product {
        Product {
            marketplace: "Wildberries".to_string(),
            name: format!("Бренд - Товар {id}"),
            price,
            rating: 4.5,
            feedbacks: 10,
            image_url: "https://via.placeholder.com/400x300/7100FF/FFFFFF?text=No+Image"
                .to_string(),
            product_url: format!("https://www.wildberries.ru/catalog/{id}/detail.aspx"),
            product_id: id.to_string(),
        }
    }

    // -----------------------------------------------------------------------
    // rank
    // -----------------------------------------------------------------------

    #[test]
    fn rank_sorts_by_ascending_price() {
        let products = vec![
            make_product("1", 300),
            make_product("2", 100),
            make_product("3", 200),
        ];
        let ranked = rank(&products);
        let prices: Vec<u64> = ranked.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![100, 200, 300]);
    }

    #[test]
    fn rank_is_stable_for_equal_prices() {
        let products = vec![
            make_product("a", 200),
            make_product("b", 100),
            make_product("c", 100),
        ];
        let ranked = rank(&products);
        assert_eq!(ranked[0].product_id, "b");
        assert_eq!(ranked[1].product_id, "c");
        assert_eq!(ranked[2].product_id, "a");
    }

    #[test]
    fn rank_of_empty_input_is_empty() {
        assert!(rank(&[]).is_empty());
    }

    #[test]
    fn rank_does_not_mutate_input() {
        let products = vec![make_product("1", 300), make_product("2", 100)];
        let _ = rank(&products);
        assert_eq!(products[0].product_id, "1");
    }

    // -----------------------------------------------------------------------
    // cheapest
    // -----------------------------------------------------------------------

    #[test]
    fn cheapest_returns_none_for_empty_input() {
        assert!(cheapest(&[]).is_none());
    }

    #[test]
    fn cheapest_returns_minimum_price() {
        let products = vec![
            make_product("1", 300),
            make_product("2", 100),
            make_product("3", 200),
        ];
        assert_eq!(cheapest(&products).map(|p| p.product_id.as_str()), Some("2"));
    }

    #[test]
    fn cheapest_ties_resolve_to_first_in_original_order() {
        let products = vec![
            make_product("x", 100),
            make_product("y", 100),
            make_product("z", 200),
        ];
        assert_eq!(cheapest(&products).map(|p| p.product_id.as_str()), Some("x"));
    }

    // -----------------------------------------------------------------------
    // ranked_summary
    // -----------------------------------------------------------------------

    #[test]
    fn ranked_summary_empty_input_yields_empty_string() {
        assert_eq!(ranked_summary(&[], "кеды"), "");
    }

    #[test]
    fn ranked_summary_contains_query_and_cheapest_url() {
        let products = vec![make_product("1", 300), make_product("2", 100)];
        let summary = ranked_summary(&products, "кеды");
        assert!(summary.contains("по запросу \"кеды\""));
        assert!(summary.contains("https://www.wildberries.ru/catalog/2/detail.aspx"));
    }

    #[test]
    fn ranked_summary_limits_to_five_entries() {
        let products: Vec<Product> = (0..8)
            .map(|i| make_product(&i.to_string(), 100 + i))
            .collect();
        let summary = ranked_summary(&products, "товар");
        assert!(summary.contains("5. "));
        assert!(!summary.contains("6. "));
    }

    #[test]
    fn ranked_summary_groups_price_digits() {
        let products = vec![make_product("1", 12990)];
        let summary = ranked_summary(&products, "телефон");
        assert!(summary.contains("12 990 ₽"));
    }

    // -----------------------------------------------------------------------
    // group_digits
    // -----------------------------------------------------------------------

    #[test]
    fn group_digits_small_numbers_unchanged() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
    }

    #[test]
    fn group_digits_inserts_separators() {
        assert_eq!(group_digits(1000), "1 000");
        assert_eq!(group_digits(12990), "12 990");
        assert_eq!(group_digits(1_234_567), "1 234 567");
    }
}
