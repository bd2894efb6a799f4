//! HTML message bodies for the Telegram front-end.
//!
//! The extraction core hands over plain records; everything Telegram-specific
//! (HTML tags, emoji framing) happens here. User- and site-supplied strings
//! are escaped so a stray `<` in a product name cannot break parse mode.

use pricebot_core::compare::{cheapest, group_digits, rank};
use pricebot_core::Product;

/// Entries shown in the comparison message.
const COMPARISON_LIMIT: usize = 5;

#[must_use]
pub fn start_text() -> String {
    concat!(
        "👋 Привет! Я помогу найти товары по лучшим ценам!\n\n",
        "🔍 Просто отправь мне название товара, например:\n",
        "• \"кеды\"\n",
        "• \"кроссовки nike\"\n",
        "• \"телефон\"\n\n",
        "Я покажу товары из Wildberries и помогу сравнить цены в других маркетплейсах!"
    )
    .to_string()
}

#[must_use]
pub fn help_text() -> String {
    concat!(
        "ℹ️ <b>Как пользоваться ботом:</b>\n\n",
        "1. Отправь название товара\n",
        "2. Я найду товары в Wildberries\n",
        "3. Покажу цены, фото и ссылки\n",
        "4. Предоставлю кнопки для поиска в других магазинах\n\n",
        "<b>Примеры запросов:</b>\n",
        "• <code>кеды</code>\n",
        "• <code>куртка зимняя</code>\n",
        "• <code>redmi 15c</code>\n\n",
        "💡 <b>Совет:</b> Используйте кнопки под сообщениями для быстрого перехода ",
        "в другие маркетплейсы!"
    )
    .to_string()
}

#[must_use]
pub fn query_too_short_text() -> String {
    "❌ Слишком короткий запрос. Попробуйте ввести более конкретное название товара."
        .to_string()
}

#[must_use]
pub fn searching_text() -> String {
    "🔍 Ищу товары в Wildberries...".to_string()
}

/// Worded neutrally: an empty list may equally mean "nothing matched" or
/// "extraction failed"; the core does not tell us which.
#[must_use]
pub fn empty_results_text(query: &str) -> String {
    format!(
        "❌ По запросу \"{}\" ничего не найдено в Wildberries.\n\n\
         Попробуйте:\n\
         • Изменить формулировку\n\
         • Проверить орфографию\n\
         • Использовать более общий запрос",
        escape_html(query)
    )
}

#[must_use]
pub fn found_header_text(count: usize, query: &str) -> String {
    format!(
        "✅ Нашёл {count} товаров по запросу \"{}\" в Wildberries:",
        escape_html(query)
    )
}

#[must_use]
pub fn try_other_marketplaces_text() -> String {
    "💡 Попробуйте поискать в других маркетплейсах:".to_string()
}

#[must_use]
pub fn search_ozon_hint_text() -> String {
    "🔍 Для поиска в Ozon отправьте мне название товара, \
     и я предоставлю ссылку для быстрого перехода!"
        .to_string()
}

#[must_use]
pub fn search_yandex_hint_text() -> String {
    "🔍 Для поиска в Яндекс Маркете отправьте мне название товара, \
     и я предоставлю ссылку для быстрого перехода!"
        .to_string()
}

#[must_use]
pub fn other_marketplaces_text() -> String {
    "💡 <b>Хотите сравнить цены в других магазинах?</b>\n\n\
     Нажмите на кнопки ниже для быстрого перехода:"
        .to_string()
}

/// Caption for one product message.
#[must_use]
pub fn product_caption(product: &Product) -> String {
    format!(
        "🏷️ <b>{}</b>\n\n\
         💰 <b>Цена:</b> {} ₽\n\
         ⭐ <b>Рейтинг:</b> {}\n\
         💬 <b>Отзывы:</b> {}\n\
         🆔 <b>Артикул:</b> {}",
        escape_html(&product.name),
        group_digits(product.price),
        product.rating,
        product.feedbacks,
        escape_html(&product.product_id),
    )
}

/// Fallback body when the photo message is rejected.
#[must_use]
pub fn product_fallback_text(product: &Product) -> String {
    format!(
        "{}\n\n🔗 Ссылка: {}",
        product_caption(product),
        product.product_url
    )
}

/// Price-comparison message: ranked top entries plus the cheapest callout.
/// Empty input yields an empty string (the caller skips sending).
#[must_use]
pub fn comparison_text(products: &[Product], query: &str) -> String {
    let Some(best) = cheapest(products) else {
        return String::new();
    };

    let ranked = rank(products);
    let mut out = format!(
        "🏆 <b>Сравнение цен в Wildberries по запросу \"{}\"</b>\n\n",
        escape_html(query)
    );

    for (idx, product) in ranked.iter().take(COMPARISON_LIMIT).enumerate() {
        out.push_str(&format!(
            "{}. 🏷️ <b>{}</b>\n   💰 <b>{} ₽</b>\n   ⭐ {} | 💬 {}\n\n",
            idx + 1,
            escape_html(product.short_name(60)),
            group_digits(product.price),
            product.rating,
            product.feedbacks,
        ));
    }

    out.push_str(&format!(
        "💡 <b>Самый дешевый вариант:</b>\n💰 {} ₽\n🔗 {}",
        group_digits(best.price),
        best.product_url,
    ));
    out
}

/// Escapes the three characters HTML parse mode is sensitive to.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
