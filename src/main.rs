mod config;
mod widget;

use config::PageConfig;
use widget::Storefront;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cfg = PageConfig::from_env();
    let mut shop = Storefront::new(cfg);

    // optional search term from the command line, otherwise the initial load
    match std::env::args().nth(1) {
        Some(term) => shop.search(&term).await,
        None => shop.load(false).await,
    }

    println!("\n==============================");
    println!("TOTAL PRODUCTS RENDERED: {}", shop.card_count());
    println!("==============================\n");

    if shop.no_results() {
        println!("No products found.");
    } else {
        println!("{}", shop.grid_html());
    }

    if shop.show_load_more() {
        println!("\n[load more available]");
    }

    Ok(())
}
