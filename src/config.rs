use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use chrono::Duration;

use crate::error::{AppError, Result};
use crate::news::FetchMode;
use crate::news::client::{DEFAULT_BASE_URL, DEFAULT_SEARCH_QUERY};

pub const DEFAULT_API_KEY_VAR: &str = "NEWS_API_KEY";

#[derive(Debug, Clone)]
pub struct NewsSettings {
    pub base_url: String,
    pub mode: FetchMode,
    pub page_size: u32,
    /// Age below which a cache entry is served without going upstream.
    pub freshness: Duration,
}

impl Default for NewsSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            mode: FetchMode::default(),
            page_size: 20,
            freshness: Duration::hours(24),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub news: NewsSettings,
    /// Environment variable holding the upstream key, read per request.
    pub api_key_var: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

        let defaults = NewsSettings::default();

        let base_url = env::var("NEWS_API_BASE_URL").unwrap_or(defaults.base_url);
        let mode = match env::var("NEWS_FETCH_MODE") {
            Ok(raw) => raw.parse::<FetchMode>()?,
            Err(_) => defaults.mode,
        };
        let mode = match mode {
            FetchMode::TopHeadlines { .. } => FetchMode::TopHeadlines {
                country: env::var("NEWS_COUNTRY").unwrap_or_else(|_| "us".to_string()),
            },
            FetchMode::Search { .. } => FetchMode::Search {
                query: env::var("NEWS_SEARCH_QUERY").unwrap_or_else(|_| DEFAULT_SEARCH_QUERY.to_string()),
            },
        };
        let page_size = parse_var("NEWS_PAGE_SIZE", defaults.page_size)?;
        let freshness = match env::var("NEWS_CACHE_HOURS") {
            Ok(raw) => freshness_window(&raw)?,
            Err(_) => defaults.freshness,
        };

        let api_key_var = env::var("NEWS_API_KEY_VAR").unwrap_or_else(|_| DEFAULT_API_KEY_VAR.to_string());

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            news: NewsSettings {
                base_url,
                mode,
                page_size,
                freshness,
            },
            api_key_var,
        })
    }

    /// Upstream credential as currently set in the environment. Empty counts as unset.
    pub fn api_key(&self) -> Option<String> {
        env::var(&self.api_key_var).ok().filter(|k| !k.trim().is_empty())
    }
}

fn freshness_window(raw: &str) -> Result<Duration> {
    let hours = raw
        .trim()
        .parse::<i64>()
        .map_err(|e| AppError::Config(format!("Invalid NEWS_CACHE_HOURS: {}", e)))?;
    if hours <= 0 {
        return Err(AppError::Config(format!("Invalid NEWS_CACHE_HOURS: {} must be positive", hours)));
    }
    Duration::try_hours(hours)
        .ok_or_else(|| AppError::Config(format!("Invalid NEWS_CACHE_HOURS: {} is out of range", hours)))
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| AppError::Config(format!("Invalid {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}
