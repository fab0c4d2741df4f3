use std::env;

use tracing::error;

/// Page-level widget configuration, supplied by the embedding deployment
/// before the controller initializes. Immutable for the page's lifetime.
pub struct PageConfig {
    pub category: String,
    pub endpoints: Vec<String>,
    pub supports_search: bool,
    pub supports_sizes: bool,
}

impl PageConfig {
    /// Reads the config from the environment. A missing category or endpoint
    /// list is not fatal for the process: the widget logs and stays inert.
    pub fn from_env() -> Self {
        let category = env::var("PAGE_CATEGORY").unwrap_or_default();
        let endpoints = env::var("PAGE_APIS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let cfg = Self {
            category,
            endpoints,
            supports_search: env_flag("PAGE_SEARCH"),
            supports_sizes: env_flag("PAGE_SIZES"),
        };

        if !cfg.is_valid() {
            error!("Missing PAGE_CATEGORY or PAGE_APIS; widget will stay inert");
        }

        cfg
    }

    pub fn is_valid(&self) -> bool {
        !self.category.is_empty() && !self.endpoints.is_empty()
    }
}

fn env_flag(key: &str) -> bool {
    matches!(
        env::var(key).unwrap_or_default().as_str(),
        "1" | "true" | "yes"
    )
}
