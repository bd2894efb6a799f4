//! Image-URL derivation from the native product identifier.
//!
//! Wildberries shards product images across CDN hosts by identifier ranges;
//! no network or DOM lookup is needed to build the URL. The arithmetic
//! mirrors the site's internal layout and can change under us, so it lives
//! in this single function — a layout change is a one-function edit.

/// Served when the identifier does not fit the sharding scheme.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/400x300/7100FF/FFFFFF?text=No+Image";

/// Derives the CDN image URL for a product identifier.
///
/// `vol = id / 100_000` selects the basket host (zero-padded to two digits)
/// and the first path segment; `part = id / 1_000` selects the second.
/// A non-numeric or negative identifier yields [`PLACEHOLDER_IMAGE_URL`];
/// this function never fails.
#[must_use]
pub fn derive_image_url(product_id: &str) -> String {
    match product_id.trim().parse::<u64>() {
        Ok(id) => {
            let vol = id / 100_000;
            let part = id / 1_000;
            format!(
                "https://basket-{vol:02}.wbbasket.ru/vol{vol}/part{part}/{id}/images/c516x688/1.jpg"
            )
        }
        Err(_) => PLACEHOLDER_IMAGE_URL.to_string(),
    }
}
