use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::widget::models::{DetailView, ProductRecord};

/// Groups a non-negative price with en-IN separators: last three digits,
/// then two-digit groups. `12199` -> `"12,199"`, `1234567` -> `"12,34,567"`.
pub fn format_price(value: i64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// One grid card. Text and attribute fields are escaped so arbitrary product
/// names cannot break the layout markup.
pub fn render_card(record: &ProductRecord) -> String {
    let name_attr = encode_double_quoted_attribute(&record.name);
    let name_text = encode_text(&record.name);
    let img = encode_double_quoted_attribute(&record.image_url);
    let id = encode_double_quoted_attribute(&record.id);
    let price = format_price(record.price);

    let sizes_html = if record.sizes.is_empty() {
        String::new()
    } else {
        let badges = record
            .sizes
            .iter()
            .map(|size| format!(r#"<span class="badge bg-primary me-1">{}</span>"#, encode_text(size)))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            r#"<b><h5>Sizes</h5></b> <div class="product-sizes mt-2">{badges}</div>"#
        )
    };

    format!(
        r#"<div class="col-lg-3 col-md-4 col-sm-6 col-12 d-flex">
  <div class="product-card w-100" data-id="{id}">
    <img src="{img}" alt="{name_attr}">
    <div class="product-name" title="{name_attr}">{name_text}</div>
    <div class="product-price"><strong>Price : </strong> ₹ {price}</div>
    {sizes_html}
  </div>
</div>"#
    )
}

/// Carousel slides plus, when there is more than one image, a thumbnail
/// strip. The slide and thumbnail at `active_index` carry the active class,
/// mutually exclusively.
pub fn render_modal_body(view: &DetailView) -> String {
    let slides = view
        .images
        .iter()
        .enumerate()
        .map(|(i, src)| {
            let active = if i == view.active_index { " active" } else { "" };
            format!(
                r#"<div class="carousel-item{active}"><img src="{}" class="d-block w-100" alt="Product Image {}"></div>"#,
                encode_double_quoted_attribute(src),
                i + 1,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    if view.images.len() <= 1 {
        return format!(r#"<div class="carousel-inner">{slides}</div>"#);
    }

    let thumbnails = view
        .images
        .iter()
        .enumerate()
        .map(|(i, src)| {
            let active = if i == view.active_index { " active" } else { "" };
            format!(
                r#"<div class="thumbnail-item{active}" data-slide="{i}"><img src="{}" alt="Thumbnail {}"></div>"#,
                encode_double_quoted_attribute(src),
                i + 1,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<div class="carousel-inner">{slides}</div>
<div class="modal-thumbnails">{thumbnails}</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProductRecord {
        ProductRecord {
            id: "42".into(),
            image_url: "https://cdn.example/42.jpg".into(),
            name: "Leather Tote".into(),
            detail_url: "https://shop.example/p/42".into(),
            price: 12_199,
            sizes: Vec::new(),
        }
    }

    #[test]
    fn price_grouping_uses_indian_separators() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(999), "999");
        assert_eq!(format_price(1_200), "1,200");
        assert_eq!(format_price(12_199), "12,199");
        assert_eq!(format_price(121_990), "1,21,990");
        assert_eq!(format_price(1_234_567), "12,34,567");
    }

    #[test]
    fn card_shows_grouped_price_with_currency() {
        let html = render_card(&record());
        assert!(html.contains("₹ 12,199"));
        assert!(html.contains(r#"data-id="42""#));
        assert!(html.contains("Leather Tote"));
    }

    #[test]
    fn card_escapes_hostile_name() {
        let mut rec = record();
        rec.name = r#"<script>"x"</script>"#.into();
        let html = render_card(&rec);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn sizes_block_rendered_only_when_present() {
        let html = render_card(&record());
        assert!(!html.contains("product-sizes"));

        let mut rec = record();
        rec.sizes = vec!["7".into(), "8".into()];
        let html = render_card(&rec);
        assert!(html.contains("product-sizes"));
        assert!(html.contains(r#"<span class="badge bg-primary me-1">7</span>"#));
    }

    #[test]
    fn single_image_modal_has_no_thumbnail_strip() {
        let view = DetailView {
            images: vec!["a.jpg".into()],
            active_index: 0,
        };
        let html = render_modal_body(&view);
        assert_eq!(html.matches("carousel-item").count(), 1);
        assert!(html.contains("carousel-item active"));
        assert!(!html.contains("modal-thumbnails"));
    }

    #[test]
    fn multi_image_modal_marks_one_active_slide_and_thumbnail() {
        let view = DetailView {
            images: vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()],
            active_index: 1,
        };
        let html = render_modal_body(&view);
        assert_eq!(html.matches(r#"class="carousel-item active""#).count(), 1);
        assert_eq!(html.matches(r#"class="thumbnail-item active""#).count(), 1);
        assert!(html.contains(r#"data-slide="1""#));
    }
}
