use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: Source,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub url_to_image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub content: Option<String>,
}

/// Body returned by the upstream API and served as-is by `/api/news`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub status: String,
    pub total_results: u32,
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Technology,
    Business,
    Entertainment,
    Sports,
    Science,
    Health,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::General,
        Category::Technology,
        Category::Business,
        Category::Entertainment,
        Category::Sports,
        Category::Science,
        Category::Health,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Technology => "technology",
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::Sports => "sports",
            Category::Science => "science",
            Category::Health => "health",
        }
    }

    pub fn cache_key(&self) -> String {
        format!("news-{}", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_categories_case_insensitively() {
        assert_eq!("Technology".parse::<Category>(), Ok(Category::Technology));
        assert_eq!(" health ".parse::<Category>(), Ok(Category::Health));
        assert_eq!(
            "weather".parse::<Category>(),
            Err(UnknownCategory("weather".to_string()))
        );
    }

    #[test]
    fn cache_key_is_prefixed() {
        assert_eq!(Category::Business.cache_key(), "news-business");
    }

    #[test]
    fn deserializes_upstream_body() {
        let body = r#"{
            "status": "ok",
            "totalResults": 1,
            "articles": [{
                "source": { "id": null, "name": "Wire" },
                "author": null,
                "title": "Chips",
                "description": "Fabs everywhere",
                "url": "https://example.com/chips",
                "urlToImage": null,
                "publishedAt": "2024-05-01T12:00:00Z",
                "content": null
            }]
        }"#;

        let parsed: NewsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.total_results, 1);
        assert_eq!(parsed.articles[0].source.name, "Wire");
        assert_eq!(
            parsed.articles[0].published_at.to_rfc3339(),
            "2024-05-01T12:00:00+00:00"
        );

        let reencoded = serde_json::to_value(&parsed).unwrap();
        assert_eq!(reencoded["articles"][0]["urlToImage"], serde_json::Value::Null);
        assert_eq!(reencoded["totalResults"], 1);
    }
}
