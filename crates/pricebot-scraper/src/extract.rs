//! Fault-isolated field extractors for result cards.
//!
//! Every product attribute goes through [`extract_field`]: look the element
//! up, take its text, run the field's parser. Any step failing yields `None`
//! and the caller substitutes the field's documented default — extraction of
//! one field never disturbs its siblings.
//!
//! The text parsers are kept free of DOM types so they can be tested
//! directly against the odd strings the site actually renders.

use scraper::{ElementRef, Selector};

/// Looks up `selector` inside `card` and returns its trimmed text content.
///
/// `None` when the selector does not parse, the element is missing, or its
/// text is empty.
pub(crate) fn extract_text(card: ElementRef<'_>, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    let element = card.select(&sel).next()?;
    let text = element.text().collect::<String>();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// The uniform lookup-then-parse combinator behind every numeric extractor.
pub(crate) fn extract_field<T>(
    card: ElementRef<'_>,
    selector: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    extract_text(card, selector).and_then(|text| parse(&text))
}

/// Parses a rendered price string by keeping digit characters in order.
///
/// Tolerates thousands separators and currency glyphs interleaved with the
/// digits: `"12 990 ₽"` → `12990`. `None` when the text has no digits.
pub(crate) fn parse_price(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u64>().ok()
}

/// Parses a rating string as a float. Negative or non-finite values are
/// rejected so the record invariant (never negative) holds.
pub(crate) fn parse_rating(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite() && *r >= 0.0)
}

/// Parses a review count like `"(1234)"`.
///
/// Parenthesis characters are stripped; the remainder must be all ASCII
/// digits, otherwise `None`. Deliberately stricter than [`parse_price`]:
/// `"(1 234)"` is rejected rather than de-separated. Preserved from the
/// source system — do not harmonize with the price parser.
pub(crate) fn parse_feedbacks(text: &str) -> Option<u64> {
    let stripped: String = text
        .trim()
        .chars()
        .filter(|c| *c != '(' && *c != ')')
        .collect();
    if stripped.is_empty() || !stripped.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    stripped.parse::<u64>().ok()
}
