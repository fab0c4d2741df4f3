use crate::widget::render::format_price;

/// Destination address for inquiry messages, fixed per deployment.
pub const INQUIRY_ADDRESS: &str = "917567265142";

/// Builds the prefilled messaging deep link for one product. Pure string
/// construction; the whole multi-line template is percent-encoded so no raw
/// `&`, space, or newline survives into the query string.
pub fn build_inquiry_link(name: &str, price: i64, category: &str, image_url: &str) -> String {
    let message = format!(
        "*Product Inquiry*\n\
         \n\
         *Product Name:* {name}\n\
         *Price:* ₹{price}\n\
         *Category:* {category}\n\
         \n\
         *Product Image:* {image_url}\n\
         \n\
         Hello, I'm interested in this product. Could you please provide more details?",
        price = format_price(price),
    );

    format!(
        "https://wa.me/{INQUIRY_ADDRESS}?text={}",
        urlencoding::encode(&message)
    )
}
