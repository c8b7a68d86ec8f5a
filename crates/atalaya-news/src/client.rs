//! FMP stock-news client implementation.

use crate::{Result, error::NewsError};
use async_trait::async_trait;
use atalaya_traits::{NewsItem, NewsSource, Record};
use reqwest::Client;
use serde_json::Value;
use std::env;
use std::time::Duration;
use tracing::warn;

/// Base URL for the FMP v3 API.
const FMP_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

/// Headlines fetched per request. More than the report keeps, so a source
/// filter still has items to choose from.
const FETCH_LIMIT: u32 = 10;

/// Bounded per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Stock-news client backed by the FMP `stock_news` endpoint.
#[derive(Debug, Clone)]
pub struct NewsClient {
    client: Client,
    api_key: String,
}

impl NewsClient {
    /// Create a new news client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a new news client from the `FMP_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_key = env::var("FMP_API_KEY").map_err(|_| NewsError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Fetch recent headlines for a ticker, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn fetch_headlines(&self, ticker: &str) -> Result<Vec<NewsItem>> {
        let url = format!(
            "{FMP_BASE_URL}/stock_news?tickers={}&limit={FETCH_LIMIT}&apikey={}",
            ticker.to_uppercase(),
            self.api_key
        );
        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(NewsError::Api(format!("HTTP {status}: {text}")));
        }

        let payload: Value = serde_json::from_str(&response.text().await?)?;
        Ok(items_from(payload))
    }
}

/// Translate a `stock_news` payload into news items; non-arrays yield
/// nothing.
fn items_from(payload: Value) -> Vec<NewsItem> {
    let Value::Array(entries) = payload else {
        return Vec::new();
    };
    entries
        .into_iter()
        .map(Record::from_value)
        .map(|entry| NewsItem {
            title: entry.text("title").to_string(),
            source: entry.text("site").to_string(),
            published_at: entry.text("publishedDate").to_string(),
            url: entry.text("url").to_string(),
        })
        .collect()
}

/// Keep only items whose source matches one of the requested names,
/// case-insensitively. An empty request list keeps everything.
fn filter_sources(items: Vec<NewsItem>, sources: &[String]) -> Vec<NewsItem> {
    if sources.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| {
            sources
                .iter()
                .any(|source| source.eq_ignore_ascii_case(&item.source))
        })
        .collect()
}

#[async_trait]
impl NewsSource for NewsClient {
    async fn headlines(&self, ticker: &str, sources: &[String]) -> Vec<NewsItem> {
        match self.fetch_headlines(ticker).await {
            Ok(items) => filter_sources(items, sources),
            Err(err) => {
                warn!(%ticker, %err, "news fetch failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn canned_items() -> Vec<NewsItem> {
        items_from(json!([
            {
                "title": "Apple announces results",
                "site": "Reuters",
                "publishedDate": "2024-05-01 16:30:00",
                "url": "https://example.com/a"
            },
            {
                "title": "Supplier update",
                "site": "Benzinga",
                "publishedDate": "2024-04-30 09:00:00",
                "url": "https://example.com/b"
            }
        ]))
    }

    #[test]
    fn test_items_from_payload() {
        let items = canned_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Apple announces results");
        assert_eq!(items[0].source, "Reuters");
        assert_eq!(items[0].published_at, "2024-05-01 16:30:00");
        assert_eq!(items[0].url, "https://example.com/a");
    }

    #[test]
    fn test_items_from_non_array_is_empty() {
        assert!(items_from(json!({"Error Message": "bad key"})).is_empty());
    }

    #[test]
    fn test_missing_fields_default_to_blank() {
        let items = items_from(json!([{"title": "Bare"}]));
        assert_eq!(items[0].title, "Bare");
        assert_eq!(items[0].source, "");
        assert_eq!(items[0].url, "");
    }

    #[test]
    fn test_source_filter_case_insensitive() {
        let filtered = filter_sources(canned_items(), &["reuters".to_string()]);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].source, "Reuters");
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        assert_eq!(filter_sources(canned_items(), &[]).len(), 2);
    }
}
