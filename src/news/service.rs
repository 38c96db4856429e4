use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, info, warn};

use super::cache::NewsCache;
use super::client::NewsClient;
use super::models::{Category, NewsResponse};
use super::sample::sample_news;
use crate::config::NewsSettings;
use crate::error::Result;

/// Which path produced the response handed back by [`NewsService::get_news`].
#[derive(Debug, Clone)]
pub enum NewsOutcome {
    /// Cache entry younger than the freshness window.
    Cached(Arc<NewsResponse>),
    /// Just fetched from upstream and stored.
    Fresh(Arc<NewsResponse>),
    /// Upstream failed; the previous entry for the category, whatever its age.
    Stale(Arc<NewsResponse>),
    /// No credential, or upstream failed with nothing cached.
    Sample(Arc<NewsResponse>),
}

impl NewsOutcome {
    pub fn response(&self) -> &Arc<NewsResponse> {
        match self {
            NewsOutcome::Cached(r)
            | NewsOutcome::Fresh(r)
            | NewsOutcome::Stale(r)
            | NewsOutcome::Sample(r) => r,
        }
    }

    pub fn into_response(self) -> Arc<NewsResponse> {
        match self {
            NewsOutcome::Cached(r)
            | NewsOutcome::Fresh(r)
            | NewsOutcome::Stale(r)
            | NewsOutcome::Sample(r) => r,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            NewsOutcome::Cached(_) => "cached",
            NewsOutcome::Fresh(_) => "fresh",
            NewsOutcome::Stale(_) => "stale",
            NewsOutcome::Sample(_) => "sample",
        }
    }
}

pub struct NewsService {
    client: NewsClient,
    cache: NewsCache,
    freshness: Duration,
}

impl NewsService {
    pub fn new(settings: &NewsSettings) -> Result<Self> {
        let client = NewsClient::new(
            settings.base_url.clone(),
            settings.mode.clone(),
            settings.page_size,
        )?;

        info!(
            base_url = %settings.base_url,
            mode = ?settings.mode,
            freshness_hours = settings.freshness.num_hours(),
            "news service ready"
        );

        Ok(Self {
            client,
            cache: NewsCache::new(),
            freshness: settings.freshness,
        })
    }

    pub fn cache(&self) -> &NewsCache {
        &self.cache
    }

    /// Fresh cache, then upstream, then stale cache or the sample set.
    /// Upstream failures are logged and never returned.
    pub async fn get_news(&self, category: Category, api_key: Option<&str>) -> NewsOutcome {
        let key = category.cache_key();
        let cached = self.cache.get(&key);

        if let Some(entry) = &cached {
            if entry.is_fresh(self.freshness, Utc::now()) {
                debug!(%category, "cache hit");
                return NewsOutcome::Cached(Arc::clone(&entry.data));
            }
        }

        let Some(api_key) = api_key.filter(|k| !k.is_empty()) else {
            debug!(%category, "no api key configured, serving sample news");
            return NewsOutcome::Sample(sample_news());
        };

        match self.client.fetch(category, api_key).await {
            Ok(news) => {
                info!(%category, articles = news.articles.len(), "fetched news from upstream");
                let news = Arc::new(news);
                self.cache.insert(key, Arc::clone(&news));
                NewsOutcome::Fresh(news)
            }
            Err(e) => match cached {
                Some(entry) => {
                    warn!(%category, error = %e, stored_at = %entry.timestamp, "news fetch failed, serving stale cache");
                    NewsOutcome::Stale(entry.data)
                }
                None => {
                    warn!(%category, error = %e, "news fetch failed, serving sample news");
                    NewsOutcome::Sample(sample_news())
                }
            },
        }
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
        info!("news cache cleared");
    }
}
