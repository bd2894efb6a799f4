use super::*;

/// Renders one result card the way the live search page does, with hooks to
/// blank out individual pieces.
fn card_html(
    id: Option<&str>,
    brand: &str,
    name: &str,
    price: &str,
    rating: &str,
    count: &str,
) -> String {
    let id_attr = id.map_or(String::new(), |v| format!(" data-nm-id=\"{v}\""));
    format!(
        concat!(
            "<article class=\"product-card\"{id}>",
            "<span class=\"product-card__brand\">{brand}</span>",
            "<span class=\"product-card__name\">{name}</span>",
            "<ins class=\"price__lower-price\">{price}</ins>",
            "<span class=\"product-card__rating\">{rating}</span>",
            "<span class=\"product-card__count\">{count}</span>",
            "</article>"
        ),
        id = id_attr,
        brand = brand,
        name = name,
        price = price,
        rating = rating,
        count = count,
    )
}

fn full_card(id: &str) -> String {
    card_html(
        Some(id),
        "Nike",
        "Кроссовки Air Max",
        "12 990 ₽",
        "4.7",
        "(1234)",
    )
}

fn results_page(cards: &[String]) -> String {
    format!(
        "<html><body><div class=\"product-card-list\">{}</div></body></html>",
        cards.join("")
    )
}

// ---------------------------------------------------------------------------
// parse_results
// ---------------------------------------------------------------------------

#[test]
fn three_full_cards_yield_three_records_in_document_order() {
    let page = results_page(&[full_card("111"), full_card("222"), full_card("333")]);
    let products = parse_results(&page, 5);

    assert_eq!(products.len(), 3);
    let ids: Vec<&str> = products.iter().map(|p| p.product_id.as_str()).collect();
    assert_eq!(ids, vec!["111", "222", "333"]);
    for product in &products {
        assert!(product.price > 0);
        assert!(product.rating > 0.0);
        assert!(product.feedbacks > 0);
    }
}

#[test]
fn card_without_identifier_is_dropped_and_order_preserved() {
    let page = results_page(&[
        full_card("1"),
        full_card("2"),
        card_html(None, "Adidas", "Кеды", "5 990 ₽", "4.2", "(10)"),
        full_card("4"),
        full_card("5"),
    ]);
    let products = parse_results(&page, 5);

    assert_eq!(products.len(), 4);
    let ids: Vec<&str> = products.iter().map(|p| p.product_id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "4", "5"]);
}

#[test]
fn limit_caps_the_number_of_records() {
    let cards: Vec<String> = (1..=8).map(|i| full_card(&i.to_string())).collect();
    let products = parse_results(&results_page(&cards), 5);
    assert_eq!(products.len(), 5);
    assert_eq!(products[4].product_id, "5");
}

#[test]
fn page_without_result_structure_yields_empty() {
    let products = parse_results("<html><body><h1>Страница не найдена</h1></body></html>", 5);
    assert!(products.is_empty());
}

#[test]
fn empty_input_yields_empty() {
    assert!(parse_results("", 5).is_empty());
}

// ---------------------------------------------------------------------------
// parse_card — field degradation
// ---------------------------------------------------------------------------

fn parse_single(card: &str) -> Option<Product> {
    let page = results_page(&[card.to_string()]);
    parse_results(&page, 1).into_iter().next()
}

#[test]
fn fully_populated_card_maps_every_field() {
    let product = parse_single(&full_card("1234567")).expect("record");

    assert_eq!(product.marketplace, "Wildberries");
    assert_eq!(product.name, "Nike - Кроссовки Air Max");
    assert_eq!(product.price, 12990);
    assert!((product.rating - 4.7).abs() < f64::EPSILON);
    assert_eq!(product.feedbacks, 1234);
    assert_eq!(
        product.product_url,
        "https://www.wildberries.ru/catalog/1234567/detail.aspx"
    );
    assert_eq!(
        product.image_url,
        "https://basket-12.wbbasket.ru/vol12/part1234/1234567/images/c516x688/1.jpg"
    );
}

#[test]
fn blank_identifier_attribute_yields_no_record() {
    let card = card_html(Some("  "), "Nike", "Кеды", "1 000 ₽", "4.0", "(5)");
    assert!(parse_single(&card).is_none());
}

#[test]
fn missing_name_and_brand_fall_back_to_placeholders() {
    let card = "<article class=\"product-card\" data-nm-id=\"42\"></article>";
    let product = parse_single(card).expect("record");
    assert_eq!(product.name, "Бренд не указан - Название не указано");
    assert_eq!(product.price, 0);
    assert!((product.rating - 0.0).abs() < f64::EPSILON);
    assert_eq!(product.feedbacks, 0);
}

#[test]
fn unparseable_numeric_fields_degrade_independently() {
    let card = card_html(
        Some("777"),
        "Nike",
        "Кеды",
        "скоро в продаже",
        "новинка",
        "(1 234)",
    );
    let product = parse_single(&card).expect("record");
    // Each failure degrades to its own default; the name still extracts.
    assert_eq!(product.name, "Nike - Кеды");
    assert_eq!(product.price, 0);
    assert!((product.rating - 0.0).abs() < f64::EPSILON);
    assert_eq!(product.feedbacks, 0);
}

#[test]
fn rendered_price_and_rating_and_strict_count_follow_site_formats() {
    let card = card_html(Some("99"), "Bosch", "Дрель", "12 990 ₽", "4.7", "(1 234)");
    let product = parse_single(&card).expect("record");
    assert_eq!(product.price, 12990);
    assert!((product.rating - 4.7).abs() < f64::EPSILON);
    // Space inside the parentheses trips the strict-digits policy.
    assert_eq!(product.feedbacks, 0);
}

#[test]
fn record_urls_are_always_well_formed() {
    let product = parse_single(&full_card("1234567")).expect("record");
    url::Url::parse(&product.product_url).expect("product url must parse");
    url::Url::parse(&product.image_url).expect("image url must parse");
}

#[test]
fn non_numeric_identifier_still_yields_record_with_placeholder_image() {
    let card = card_html(Some("abc"), "Nike", "Кеды", "1 000 ₽", "4.0", "(5)");
    let product = parse_single(&card).expect("record");
    assert_eq!(product.product_id, "abc");
    assert_eq!(product.image_url, crate::image::PLACEHOLDER_IMAGE_URL);
    assert_eq!(
        product.product_url,
        "https://www.wildberries.ru/catalog/abc/detail.aspx"
    );
}
