/// First window size, and the step each successful load cycle grows it by.
pub const INITIAL_PAGE_SIZE: u32 = 12;
pub const PAGE_STEP: u32 = 12;

/// One parsed product card. Never mutated after construction; owned by the
/// controller's card table once rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: String,
    pub image_url: String,
    pub name: String,
    pub detail_url: String,
    /// Minor-unit-free price, already adjusted by the fixed markup.
    pub price: i64,
    /// Variant-dependent size labels (footwear pages), empty otherwise.
    pub sizes: Vec<String>,
}

/// Which of the near-duplicate page variants this deployment is.
#[derive(Debug, Clone, Copy)]
pub struct Capabilities {
    pub supports_search: bool,
    pub supports_sizes: bool,
}

/// Pagination state, single instance per page, mutated only by the
/// controller.
#[derive(Debug)]
pub struct LoaderState {
    /// Cumulative window size requested from the backend.
    pub page_size: u32,
    /// Re-entrancy gate: at most one outstanding batched load.
    pub in_flight: bool,
    pub search_term: String,
    /// Once set, load-more is a no-op until the next search resets it.
    pub exhausted: bool,
}

impl LoaderState {
    pub fn new() -> Self {
        Self {
            page_size: INITIAL_PAGE_SIZE,
            in_flight: false,
            search_term: String::new(),
            exhausted: false,
        }
    }

    /// New search / reset load: back to the initial window.
    pub fn reset_window(&mut self) {
        self.page_size = INITIAL_PAGE_SIZE;
        self.exhausted = false;
    }
}

impl Default for LoaderState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient per-click carousel state. Discarded when the modal closes or a
/// newer click supersedes it.
#[derive(Debug, PartialEq)]
pub struct DetailView {
    pub images: Vec<String>,
    pub active_index: usize,
}

impl DetailView {
    /// Thumbnail click: seek the carousel. Out-of-range indices are ignored
    /// so the active marking stays mutually exclusive and valid.
    pub fn select(&mut self, index: usize) {
        if index < self.images.len() {
            self.active_index = index;
        }
    }
}

/// Everything a card click produces for the modal shell.
#[derive(Debug)]
pub struct ModalView {
    pub name: String,
    pub price_text: String,
    pub body_html: String,
    pub inquiry_url: String,
}
