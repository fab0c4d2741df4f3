use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::Client;
use tracing::{debug, error};

use crate::widget::fetcher;
use crate::widget::models::{DetailView, ProductRecord};
use crate::widget::parser;

/// Resolves a clicked card into its carousel view. The ticket counter makes
/// overlapping clicks last-click-wins: a resolution that finishes after a
/// newer click has been issued is discarded instead of overwriting it.
pub struct DetailResolver {
    client: Client,
    ticket: AtomicU64,
}

impl DetailResolver {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            ticket: AtomicU64::new(0),
        }
    }

    /// Fetches the product's detail page and assembles the image set. Fetch
    /// or parse failures fall back to the listing thumbnail and are never
    /// propagated to the caller.
    pub async fn resolve(&self, record: &ProductRecord) -> Option<DetailView> {
        let token = self.next_ticket();

        let images = match fetcher::fetch_html(&self.client, &record.detail_url).await {
            Ok(html) => parser::parse_gallery_images(&html),
            Err(e) => {
                error!(url = %record.detail_url, error = %e, "Error fetching product images");
                Vec::new()
            }
        };

        if !self.is_current(token) {
            debug!(id = %record.id, "Detail resolution superseded by a newer click");
            return None;
        }

        Some(assemble_view(images, &record.image_url))
    }

    fn next_ticket(&self) -> u64 {
        self.ticket.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, token: u64) -> bool {
        self.ticket.load(Ordering::SeqCst) == token
    }
}

/// Fetched images when non-empty, else the listing thumbnail as the sole
/// slide. The first slide starts active.
pub fn assemble_view(images: Vec<String>, thumbnail: &str) -> DetailView {
    let images = if images.is_empty() {
        vec![thumbnail.to_string()]
    } else {
        images
    };
    DetailView {
        images,
        active_index: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProductRecord {
        ProductRecord {
            id: "7".into(),
            image_url: "https://cdn.example/7.jpg".into(),
            name: "Runner".into(),
            // unroutable: the fetch fails fast without touching the network
            detail_url: "http://127.0.0.1:9/p/7".into(),
            price: 2_400,
            sizes: Vec::new(),
        }
    }

    #[test]
    fn empty_fetch_falls_back_to_listing_thumbnail() {
        let view = assemble_view(Vec::new(), "a.jpg");
        assert_eq!(view.images, vec!["a.jpg".to_string()]);
        assert_eq!(view.active_index, 0);
    }

    #[test]
    fn fetched_images_take_precedence_over_thumbnail() {
        let view = assemble_view(vec!["x.jpg".into(), "y.jpg".into()], "a.jpg");
        assert_eq!(view.images.len(), 2);
        assert_eq!(view.images[0], "x.jpg");
    }

    #[test]
    fn stale_ticket_is_not_current() {
        let resolver = DetailResolver::new(fetcher::build_client());
        let first = resolver.next_ticket();
        let second = resolver.next_ticket();
        assert!(!resolver.is_current(first));
        assert!(resolver.is_current(second));
    }

    #[tokio::test]
    async fn failed_detail_fetch_resolves_to_thumbnail_view() {
        let resolver = DetailResolver::new(fetcher::build_client());
        let view = resolver.resolve(&record()).await.expect("not superseded");
        assert_eq!(view.images, vec!["https://cdn.example/7.jpg".to_string()]);
    }
}
