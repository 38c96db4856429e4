use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

use super::models::{Article, NewsResponse, Source};

// Built once so every sample fallback hands out the same object.
static SAMPLE: Lazy<Arc<NewsResponse>> = Lazy::new(|| Arc::new(build()));

/// Fixed news set served when the upstream API cannot be used.
pub fn sample_news() -> Arc<NewsResponse> {
    Arc::clone(&SAMPLE)
}

fn published(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 4, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn article(
    source: &str,
    author: &str,
    title: &str,
    description: &str,
    slug: &str,
    image: &str,
    hour: u32,
    content: &str,
) -> Article {
    Article {
        source: Source {
            id: None,
            name: source.to_string(),
        },
        author: Some(author.to_string()),
        title: title.to_string(),
        description: Some(description.to_string()),
        url: format!("https://example.com/{slug}"),
        url_to_image: Some(format!("https://images.unsplash.com/{image}?w=800")),
        published_at: published(hour),
        content: Some(content.to_string()),
    }
}

fn build() -> NewsResponse {
    let articles = vec![
        article(
            "AI Tech Daily",
            "AI Reporter",
            "OpenAI Releases GPT-5 with Revolutionary Reasoning Capabilities",
            "OpenAI announces GPT-5 with breakthrough improvements in logical reasoning, multimodal understanding, and real-world problem solving.",
            "news1",
            "photo-1677442136019-21780ecad995",
            9,
            "OpenAI has unveiled GPT-5, showcasing unprecedented capabilities in AI reasoning...",
        ),
        article(
            "AI Innovation Hub",
            "Tech Analyst",
            "Google DeepMind Creates AI That Can Learn Like Humans",
            "DeepMind researchers develop neural networks that mimic human learning patterns, achieving faster adaptation and better generalization.",
            "news2",
            "photo-1485827404703-89b55fcc595e",
            10,
            "Google DeepMind announces breakthrough in AI learning algorithms...",
        ),
        article(
            "AI Weekly",
            "AI Journalist",
            "Microsoft Copilot AI Now Powers 100 Million Users Daily",
            "Microsoft reports massive adoption of AI-powered Copilot, transforming how people work with AI assistants in productivity tools.",
            "news3",
            "photo-1555255707-c07966088b7b",
            11,
            "Microsoft reveals staggering growth in AI assistant usage...",
        ),
        article(
            "AI Research Lab",
            "Science Writer",
            "Breakthrough: AI Discovers New Antibiotic Using Machine Learning",
            "MIT researchers use AI to identify a powerful new antibiotic compound, demonstrating AI's potential in drug discovery.",
            "news4",
            "photo-1559757148-5c0d4206c58b",
            12,
            "Artificial intelligence helps discover life-saving antibiotic...",
        ),
        article(
            "AI Business News",
            "Business Reporter",
            "NVIDIA Stock Soars as AI Chip Demand Reaches All-Time High",
            "NVIDIA reports record-breaking revenue driven by unprecedented demand for AI chips from tech giants and startups.",
            "news5",
            "photo-1591488320449-11f0d6c60f12",
            13,
            "NVIDIA dominates AI chip market with revolutionary hardware...",
        ),
    ];

    NewsResponse {
        status: "ok".to_string(),
        total_results: articles.len() as u32,
        articles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_five_articles() {
        let sample = sample_news();
        assert_eq!(sample.status, "ok");
        assert_eq!(sample.total_results, 5);
        assert_eq!(sample.articles.len(), 5);
    }

    #[test]
    fn sample_is_shared() {
        assert!(Arc::ptr_eq(&sample_news(), &sample_news()));
    }
}
