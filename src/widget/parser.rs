use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::widget::models::{Capabilities, ProductRecord};

/// Fixed additive markup applied to every parsed listing price.
pub const PRICE_MARKUP: i64 = 1200;

/// Extracts product records from one listing fragment. Product entries are
/// identified by the backend's fixed structural contract; individual missing
/// sub-elements degrade to defaults rather than failing the fragment. An
/// empty result means "no products in this batch", not an error.
pub fn parse_products(html: &str, caps: &Capabilities) -> Vec<ProductRecord> {
    let doc = Html::parse_fragment(html);
    let card_sel = Selector::parse(".single-product").unwrap();

    doc.select(&card_sel)
        .map(|card| parse_card(card, caps))
        .collect()
}

fn parse_card(card: ElementRef<'_>, caps: &Capabilities) -> ProductRecord {
    let id = select_attr(card, ".product_add_to_cart_button", "data-product_id")
        .unwrap_or_else(|| "0".to_string());
    let image_url = select_attr(card, ".product-img-block img", "src").unwrap_or_default();
    let name =
        select_text(card, ".product-details h6").unwrap_or_else(|| "Unnamed Product".to_string());
    let detail_url =
        select_attr(card, ".product-details a", "href").unwrap_or_else(|| "#".to_string());
    let price = parse_price(select_text(card, ".price h6").as_deref().unwrap_or(""));

    let sizes = if caps.supports_sizes {
        extract_sizes(card)
    } else {
        Vec::new()
    };

    ProductRecord {
        id,
        image_url,
        name,
        detail_url,
        price,
        sizes,
    }
}

/// Strips everything but digits, parses (defaulting to 0), then applies the
/// fixed markup. `"₹ 10,999"` becomes `12199`.
pub fn parse_price(raw: &str) -> i64 {
    let digits = Regex::new(r"[^\d]").unwrap().replace_all(raw, "");
    digits.parse::<i64>().unwrap_or(0) + PRICE_MARKUP
}

/// Size labels on footwear cards.
fn extract_sizes(card: ElementRef<'_>) -> Vec<String> {
    let sel = Selector::parse("label.badge-primary").unwrap();
    card.select(&sel)
        .map(|label| collect_text(label))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Gallery image URLs from a product detail page.
pub fn parse_gallery_images(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse("#slider .main-image img").unwrap();
    doc.select(&sel)
        .filter_map(|img| img.value().attr("src"))
        .map(|src| src.to_string())
        .collect()
}

fn select_attr(card: ElementRef<'_>, selector: &str, attr: &str) -> Option<String> {
    let sel = Selector::parse(selector).unwrap();
    card.select(&sel)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(|v| v.to_string())
}

fn select_text(card: ElementRef<'_>, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).unwrap();
    card.select(&sel)
        .next()
        .map(collect_text)
        .filter(|s| !s.is_empty())
}

fn collect_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
