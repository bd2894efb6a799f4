//! Long-polling update loop and message handling.
//!
//! Each incoming message is handled in its own task so the polling loop
//! stays responsive while a multi-second search runs; the scraper sits
//! behind a mutex, making the one-search-at-a-time contract of the browser
//! session explicit.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use pricebot_core::AppConfig;
use pricebot_scraper::WildberriesScraper;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::api::BotApi;
use crate::{format, links};

/// Pause between consecutive product messages to one chat.
const PRODUCT_SEND_DELAY: Duration = Duration::from_millis(500);

/// Runs the polling loop until the task is cancelled.
///
/// # Errors
///
/// Currently never returns `Ok`; transport errors are retried in place, so
/// an `Err` only escapes for unrecoverable setup problems.
pub async fn run_bot(
    api: BotApi,
    scraper: Arc<Mutex<WildberriesScraper>>,
    config: AppConfig,
) -> Result<()> {
    info!("telegram bot polling started");
    let mut offset = 0i64;

    loop {
        let updates = match api.get_updates(offset).await {
            Ok(updates) => updates,
            Err(err) => {
                if err.to_string().contains("409") {
                    // Another instance is polling — back off and let it win.
                    warn!("getUpdates conflict (409) — waiting 15s before retrying");
                    tokio::time::sleep(Duration::from_secs(15)).await;
                } else {
                    warn!(error = %err, "getUpdates failed — retrying in 5s");
                    tokio::time::sleep(Duration::from_secs(5)).await;
                }
                continue;
            }
        };

        for update in updates {
            offset = update.update_id + 1;

            let Some(message) = update.message else {
                continue;
            };
            let Some(text) = message.text else {
                continue;
            };
            let chat_id = message.chat.id;

            let api = api.clone();
            let scraper = Arc::clone(&scraper);
            let config = config.clone();
            tokio::spawn(async move {
                if let Err(err) =
                    handle_message(&api, &scraper, &config, chat_id, text.trim()).await
                {
                    error!(chat_id, error = %err, "message handler failed");
                }
            });
        }
    }
}

async fn handle_message(
    api: &BotApi,
    scraper: &Mutex<WildberriesScraper>,
    config: &AppConfig,
    chat_id: i64,
    text: &str,
) -> Result<()> {
    match normalize_command(text).as_str() {
        "/start" => {
            api.send_message(chat_id, &format::start_text(), None).await?;
        }
        "/help" => {
            api.send_message(chat_id, &format::help_text(), None).await?;
        }
        "/search_ozon" => {
            api.send_message(chat_id, &format::search_ozon_hint_text(), None)
                .await?;
        }
        "/search_yandex" => {
            api.send_message(chat_id, &format::search_yandex_hint_text(), None)
                .await?;
        }
        _ => handle_query(api, scraper, config, chat_id, text).await?,
    }
    Ok(())
}

/// Strips the `@botname` suffix group chats append to commands, so
/// `/help@pricebot_bot` matches `/help`. Non-command text passes through
/// trimmed.
fn normalize_command(text: &str) -> String {
    let trimmed = text.trim();
    if !trimmed.starts_with('/') {
        return trimmed.to_string();
    }
    trimmed
        .split_once('@')
        .map_or_else(|| trimmed.to_string(), |(base, _)| base.to_string())
}

async fn handle_query(
    api: &BotApi,
    scraper: &Mutex<WildberriesScraper>,
    config: &AppConfig,
    chat_id: i64,
    query: &str,
) -> Result<()> {
    if query.chars().count() < config.min_query_len {
        api.send_message(chat_id, &format::query_too_short_text(), None)
            .await?;
        return Ok(());
    }

    let search_keyboard = links::search_keyboard(query);
    let compare_keyboard = links::compare_keyboard(query);

    let status_id = api
        .send_message(chat_id, &format::searching_text(), None)
        .await?;

    // One search in flight at a time; concurrent queries queue here.
    let products = {
        let mut scraper = scraper.lock().await;
        scraper.search(query, config.result_limit).await
    };

    if products.is_empty() {
        api.edit_message_text(chat_id, status_id, &format::empty_results_text(query), None)
            .await?;
        api.send_message(
            chat_id,
            &format::try_other_marketplaces_text(),
            Some(&search_keyboard),
        )
        .await?;
        return Ok(());
    }

    api.edit_message_text(
        chat_id,
        status_id,
        &format::found_header_text(products.len(), query),
        Some(&compare_keyboard),
    )
    .await?;

    for product in &products {
        let caption = format::product_caption(product);
        let keyboard = links::product_keyboard(&product.product_url);
        if let Err(err) = api
            .send_photo(chat_id, &product.image_url, &caption, Some(&keyboard))
            .await
        {
            warn!(
                product_id = %product.product_id,
                error = %err,
                "photo send failed — falling back to text"
            );
            api.send_message(chat_id, &format::product_fallback_text(product), Some(&keyboard))
                .await?;
        }
        tokio::time::sleep(PRODUCT_SEND_DELAY).await;
    }

    let comparison = format::comparison_text(&products, query);
    if !comparison.is_empty() {
        api.send_message(chat_id, &comparison, None).await?;
    }

    api.send_message(
        chat_id,
        &format::other_marketplaces_text(),
        Some(&search_keyboard),
    )
    .await?;

    Ok(())
}
