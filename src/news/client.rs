use std::str::FromStr;
use std::time::Duration;

use reqwest::{Client, ClientBuilder, header};

use super::models::{Category, NewsResponse};
use crate::error::{AppError, Result};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
pub const DEFAULT_SEARCH_QUERY: &str = "artificial intelligence OR AI OR machine learning OR deep learning OR neural network OR GPT OR OpenAI OR ChatGPT";

/// Which upstream endpoint a refresh goes through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchMode {
    /// `/top-headlines`, sliced by the requested category.
    TopHeadlines { country: String },
    /// `/everything` with a fixed query; the category only picks the cache slot.
    Search { query: String },
}

impl Default for FetchMode {
    fn default() -> Self {
        FetchMode::TopHeadlines {
            country: "us".to_string(),
        }
    }
}

impl FromStr for FetchMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top-headlines" | "headlines" => Ok(FetchMode::default()),
            "search" | "everything" => Ok(FetchMode::Search {
                query: DEFAULT_SEARCH_QUERY.to_string(),
            }),
            other => Err(AppError::Config(format!("Invalid fetch mode: {}", other))),
        }
    }
}

pub struct NewsClient {
    http: Client,
    base_url: String,
    mode: FetchMode,
    page_size: u32,
}

impl NewsClient {
    pub fn new(base_url: impl Into<String>, mode: FetchMode, page_size: u32) -> Result<Self> {
        let http = ClientBuilder::new()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            mode,
            page_size,
        })
    }

    fn request(&self, category: Category, api_key: &str) -> reqwest::RequestBuilder {
        let page_size = self.page_size.to_string();

        let request = match &self.mode {
            FetchMode::TopHeadlines { country } => self
                .http
                .get(format!("{}/top-headlines", self.base_url))
                .query(&[
                    ("category", category.as_str()),
                    ("country", country.as_str()),
                    ("pageSize", page_size.as_str()),
                ]),
            FetchMode::Search { query } => self
                .http
                .get(format!("{}/everything", self.base_url))
                .query(&[
                    ("q", query.as_str()),
                    ("sortBy", "publishedAt"),
                    ("pageSize", page_size.as_str()),
                    ("language", "en"),
                ]),
        };

        request
            .query(&[("apiKey", api_key)])
            .header(header::CACHE_CONTROL, "max-age=3600")
    }

    /// Single upstream attempt. Any non-2xx status is an error.
    pub async fn fetch(&self, category: Category, api_key: &str) -> Result<NewsResponse> {
        let response = self.request(category, api_key).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus(status));
        }

        let news = response.json::<NewsResponse>().await?;
        Ok(news)
    }
}
