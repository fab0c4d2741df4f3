use reqwest::Client;
use serde::Serialize;

/// Form body for the listing endpoints. Field set is fixed by the backend
/// contract; every load cycle re-requests the full cumulative window from
/// start 0.
#[derive(Debug, Serialize)]
pub struct ListingQuery<'a> {
    pub getresult: u32,
    pub category_slug: &'a str,
    pub searchkeyword: &'a str,
    pub orderby: &'a str,
    pub min_price: &'a str,
    pub max_price: &'a str,
    pub size_ids: &'a str,
    pub variant_status: u8,
    pub start: u32,
}

impl<'a> ListingQuery<'a> {
    pub fn new(category: &'a str, count: u32, keyword: &'a str) -> Self {
        Self {
            getresult: count,
            category_slug: category,
            searchkeyword: keyword,
            orderby: "featured",
            min_price: "",
            max_price: "",
            size_ids: "",
            variant_status: 0,
            start: 0,
        }
    }
}

pub fn build_client() -> Client {
    Client::builder()
        .user_agent("StorefrontWidget/1.0")
        .build()
        .expect("failed to build http client")
}

/// One listing request: urlencoded POST, body shared across the fan-out.
pub async fn post_listing(
    client: &Client,
    url: &str,
    query: &ListingQuery<'_>,
) -> anyhow::Result<String> {
    let res = client.post(url).form(query).send().await?;
    Ok(res.text().await?)
}

/// Detail-page fetch for the modal gallery.
pub async fn fetch_html(client: &Client, url: &str) -> anyhow::Result<String> {
    let res = client.get(url).send().await?;
    Ok(res.text().await?)
}
