use std::collections::HashMap;

use futures::future::try_join_all;
use reqwest::Client;
use tracing::{error, info, warn};

use crate::config::PageConfig;
use crate::widget::detail::DetailResolver;
use crate::widget::fetcher::{self, ListingQuery};
use crate::widget::inquiry::build_inquiry_link;
use crate::widget::models::{Capabilities, LoaderState, ModalView, PAGE_STEP, ProductRecord};
use crate::widget::parser::parse_products;
use crate::widget::render::{format_price, render_card, render_modal_body};

/// One widget instance per page: owns the loader state machine, the rendered
/// grid, and the id-to-record card table that click handling reads from.
pub struct Storefront {
    cfg: PageConfig,
    caps: Capabilities,
    client: Client,
    resolver: DetailResolver,
    state: LoaderState,
    cards: HashMap<String, ProductRecord>,
    grid: Vec<String>,
    show_load_more: bool,
    no_results: bool,
}

impl Storefront {
    pub fn new(cfg: PageConfig) -> Self {
        let caps = Capabilities {
            supports_search: cfg.supports_search,
            supports_sizes: cfg.supports_sizes,
        };
        let client = fetcher::build_client();
        let resolver = DetailResolver::new(client.clone());

        Self {
            cfg,
            caps,
            client,
            resolver,
            state: LoaderState::new(),
            cards: HashMap::new(),
            grid: Vec::new(),
            show_load_more: true,
            no_results: false,
        }
    }

    /// One load cycle. No-op while a previous cycle is in flight or when the
    /// page config is invalid. Each cycle re-requests the full cumulative
    /// window (start stays 0) and appends whatever it gets, preserving the
    /// backend's observed pagination contract.
    pub async fn load(&mut self, reset: bool) {
        if self.state.in_flight || !self.cfg.is_valid() {
            return;
        }
        self.state.in_flight = true;

        if reset {
            self.state.reset_window();
            self.cards.clear();
            self.grid.clear();
            self.no_results = false;
            self.show_load_more = true;
        }

        let keyword = if self.caps.supports_search {
            self.state.search_term.clone()
        } else {
            String::new()
        };
        let category = self.cfg.category.clone();
        let query = ListingQuery::new(&category, self.state.page_size, &keyword);

        let outcome = fetch_batch(&self.client, &self.cfg.endpoints, &query).await;
        match outcome {
            Ok(responses) => self.apply_batch(&responses),
            Err(e) => error!(error = %e, "Error fetching products"),
        }

        // cleared on every exit path so the widget stays usable after errors
        self.state.in_flight = false;
    }

    /// Load-more affordance: a no-op once the listing is exhausted.
    pub async fn load_more(&mut self) {
        if self.state.exhausted {
            return;
        }
        self.load(false).await;
    }

    /// New search: trims and stores the term, then re-enters loading with a
    /// reset window, discarding the previous grid.
    pub async fn search(&mut self, term: &str) {
        if !self.caps.supports_search {
            return;
        }
        self.state.search_term = term.trim().to_string();
        self.load(true).await;
    }

    /// Card click: look the record up in the card table, resolve its detail
    /// gallery, and assemble the modal. Returns None for unknown ids or when
    /// a newer click superseded this one.
    pub async fn open_product(&self, id: &str) -> Option<ModalView> {
        let record = match self.cards.get(id) {
            Some(r) => r,
            None => {
                warn!(id, "Click on unknown product id");
                return None;
            }
        };

        info!(name = %record.name, id = %record.id, "Product clicked");

        let view = self.resolver.resolve(record).await?;
        let image_url = view
            .images
            .first()
            .map(String::as_str)
            .unwrap_or(&record.image_url);
        let inquiry_url =
            build_inquiry_link(&record.name, record.price, &self.cfg.category, image_url);

        Some(ModalView {
            name: record.name.clone(),
            price_text: format!("₹ {}", format_price(record.price)),
            body_html: render_modal_body(&view),
            inquiry_url,
        })
    }

    /// Folds a batch of endpoint responses into the grid, in endpoint order
    /// then in-fragment order. Zero records across all endpoints ends the
    /// pagination; otherwise the cumulative window grows one step.
    fn apply_batch(&mut self, responses: &[String]) {
        let mut found = false;

        for html in responses {
            for record in parse_products(html, &self.caps) {
                found = true;
                self.grid.push(render_card(&record));
                self.cards.insert(record.id.clone(), record);
            }
        }

        if !found {
            self.state.exhausted = true;
            self.show_load_more = false;
            if self.caps.supports_search {
                self.no_results = true;
            }
            info!("No products in batch; pagination exhausted");
        } else {
            self.no_results = false;
            self.state.page_size += PAGE_STEP;
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.in_flight
    }

    pub fn show_load_more(&self) -> bool {
        self.show_load_more
    }

    pub fn no_results(&self) -> bool {
        self.no_results
    }

    pub fn card_count(&self) -> usize {
        self.grid.len()
    }

    pub fn grid_html(&self) -> String {
        self.grid.join("\n")
    }
}

/// Fan-out to every configured endpoint, awaiting all responses. Response
/// order follows endpoint configuration order; a single failure aborts the
/// whole batch.
async fn fetch_batch(
    client: &Client,
    endpoints: &[String],
    query: &ListingQuery<'_>,
) -> anyhow::Result<Vec<String>> {
    try_join_all(
        endpoints
            .iter()
            .map(|url| fetcher::post_listing(client, url, query)),
    )
    .await
}
