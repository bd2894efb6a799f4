//! The `search` command: one query, printed records, ranked summary.
//!
//! An empty result prints a hint rather than erroring — the extraction core
//! reports failures only through logs, so "nothing found" and "site did not
//! render" look the same here by design.

use pricebot_core::compare::{group_digits, ranked_summary};
use pricebot_core::AppConfig;
use pricebot_scraper::{SessionConfig, WildberriesScraper};

/// Runs one search against the catalog and prints the outcome.
///
/// # Errors
///
/// Returns an error only for output serialization problems; the search
/// itself degrades to an empty list.
pub(crate) async fn run_search(
    config: &AppConfig,
    query: &str,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let limit = limit.unwrap_or(config.result_limit);
    let mut scraper = WildberriesScraper::new(SessionConfig::from_app_config(config));

    let products = scraper.search(query, limit).await;
    scraper.dispose().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    if products.is_empty() {
        println!("ничего не найдено по запросу \"{query}\" (подробности в логах)");
        return Ok(());
    }

    for (idx, product) in products.iter().enumerate() {
        println!(
            "{}. {}\n   цена: {} ₽ | рейтинг: {} | отзывы: {}\n   {}",
            idx + 1,
            product.name,
            group_digits(product.price),
            product.rating,
            product.feedbacks,
            product.product_url,
        );
    }

    println!("\n{}", ranked_summary(&products, query));
    Ok(())
}
