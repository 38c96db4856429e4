pub mod api;
pub mod config;
pub mod error;
pub mod news;

use std::sync::Arc;
use config::Config;
use news::NewsService;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub news: Arc<NewsService>,
}

impl AppState {
    pub fn new(config: Config) -> error::Result<Self> {
        let news = NewsService::new(&config.news)?;
        Ok(Self {
            config: Arc::new(config),
            news: Arc::new(news),
        })
    }
}
