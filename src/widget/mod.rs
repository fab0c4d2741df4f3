pub mod controller;
pub mod detail;
pub mod fetcher;
pub mod inquiry;
pub mod models;
pub mod parser;
pub mod render;

pub use controller::Storefront;
