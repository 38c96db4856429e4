pub mod cache;
pub mod client;
pub mod models;
pub mod sample;
pub mod service;

pub use client::FetchMode;
pub use models::{Article, Category, NewsResponse, Source};
pub use service::{NewsOutcome, NewsService};
