//! FMP API client implementation.

use crate::{Result, error::FmpError};
use async_trait::async_trait;
use atalaya_traits::{FundamentalsSource, Record, StatementBundle};
use reqwest::Client;
use serde_json::Value;
use std::env;
use std::time::Duration;
use tracing::warn;

/// Base URL for the FMP v3 API.
const FMP_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

/// Number of annual periods fetched per statement series.
const STATEMENT_PERIODS: u32 = 5;

/// Bounded per-request timeout; a hung upstream degrades, never blocks a
/// build indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Financial Modeling Prep API client.
///
/// The inherent `fetch_*` methods are fallible; the
/// [`FundamentalsSource`] implementation on top of them applies the
/// degrade-to-empty policy the pipeline expects.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: Client,
    api_key: String,
}

impl FmpClient {
    /// Create a new FMP client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a new FMP client from the `FMP_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_key = env::var("FMP_API_KEY").map_err(|_| FmpError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Build a URL with the API key.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.contains('?') {
            format!("{FMP_BASE_URL}/{endpoint}&apikey={}", self.api_key)
        } else {
            format!("{FMP_BASE_URL}/{endpoint}?apikey={}", self.api_key)
        }
    }

    /// Make a GET request and parse the JSON response.
    async fn get(&self, endpoint: &str) -> Result<Value> {
        let url = self.url(endpoint);
        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FmpError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FmpError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;

        // FMP reports errors as 200 with an error payload
        if text.contains("\"Error Message\"") {
            return Err(FmpError::Api(text));
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Fetch a statement series as records, most recent first.
    async fn get_series(&self, endpoint: &str) -> Result<Vec<Record>> {
        Ok(records_from(self.get(endpoint).await?))
    }

    /// Fetch the first element of an array response as a record.
    async fn get_first(&self, endpoint: &str) -> Result<Record> {
        Ok(first_record(self.get(endpoint).await?))
    }

    /// Get the company profile, mapped to the pipeline's field names.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn fetch_profile(&self, ticker: &str) -> Result<Record> {
        let endpoint = format!("profile/{}", ticker.to_uppercase());
        Ok(map_profile(&self.get_first(&endpoint).await?))
    }

    /// Get the three annual statement series, most recent first.
    ///
    /// The three endpoints are independent and fetched concurrently.
    ///
    /// # Errors
    ///
    /// Returns an error if any API request fails.
    pub async fn fetch_financials(&self, ticker: &str) -> Result<StatementBundle> {
        let ticker = ticker.to_uppercase();
        // Endpoints must outlive the join below.
        let [income_ep, balance_ep, cash_ep] = statement_endpoints(&ticker);
        let (income, balance, cash) = tokio::join!(
            self.get_series(&income_ep),
            self.get_series(&balance_ep),
            self.get_series(&cash_ep),
        );

        Ok(StatementBundle {
            income_statement: income?,
            balance_sheet: balance?,
            cash_flow_statement: cash?,
        })
    }

    /// Get the TTM ratios record.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn fetch_ratios(&self, ticker: &str) -> Result<Record> {
        let endpoint = format!("ratios-ttm/{}", ticker.to_uppercase());
        self.get_first(&endpoint).await
    }

    /// Get the real-time quote record.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn fetch_quote(&self, ticker: &str) -> Result<Record> {
        let endpoint = format!("quote/{}", ticker.to_uppercase());
        self.get_first(&endpoint).await
    }
}

/// Endpoint paths for the three annual statement series of one ticker.
fn statement_endpoints(ticker: &str) -> [String; 3] {
    let query = format!("?limit={STATEMENT_PERIODS}&period=annual");
    [
        format!("income-statement/{ticker}{query}"),
        format!("balance-sheet-statement/{ticker}{query}"),
        format!("cash-flow-statement/{ticker}{query}"),
    ]
}

/// Translate an array payload into records; non-arrays yield nothing.
fn records_from(value: Value) -> Vec<Record> {
    match value {
        Value::Array(items) => items.into_iter().map(Record::from_value).collect(),
        _ => Vec::new(),
    }
}

/// First element of an array payload as a record; empty otherwise.
fn first_record(value: Value) -> Record {
    match value {
        Value::Array(items) => items
            .into_iter()
            .next()
            .map(Record::from_value)
            .unwrap_or_default(),
        _ => Record::new(),
    }
}

/// Map FMP profile field names onto the pipeline's profile contract.
fn map_profile(raw: &Record) -> Record {
    if raw.is_empty() {
        return Record::new();
    }
    let mut profile = Record::new();
    profile.set("name", raw.text("companyName"));
    profile.set("exchange", raw.text("exchangeShortName"));
    profile.set("industry", raw.text("industry"));
    profile.set("sector", raw.text("sector"));
    profile.set("homepage", raw.text("website"));
    profile
}

#[async_trait]
impl FundamentalsSource for FmpClient {
    async fn profile(&self, ticker: &str) -> Option<Record> {
        match self.fetch_profile(ticker).await {
            Ok(profile) if !profile.is_empty() => Some(profile),
            Ok(_) => None,
            Err(err) => {
                warn!(%ticker, %err, "profile fetch failed");
                None
            }
        }
    }

    async fn financials(&self, ticker: &str) -> StatementBundle {
        self.fetch_financials(ticker).await.unwrap_or_else(|err| {
            warn!(%ticker, %err, "financials fetch failed");
            StatementBundle::default()
        })
    }

    async fn ratios(&self, ticker: &str) -> Record {
        self.fetch_ratios(ticker).await.unwrap_or_else(|err| {
            warn!(%ticker, %err, "ratios fetch failed");
            Record::new()
        })
    }

    async fn quote(&self, ticker: &str) -> Record {
        self.fetch_quote(ticker).await.unwrap_or_else(|err| {
            warn!(%ticker, %err, "quote fetch failed");
            Record::new()
        })
    }
}
