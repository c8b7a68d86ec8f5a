//! The report assembler: one build per ticker.
//!
//! `ReportBuilder` is the single orchestration point. It owns its
//! collaborators as injected trait objects and runs the pipeline end to
//! end: profile gate, concurrent statement/ratio/quote fetches, alignment,
//! derived metrics, every registered scorer, then best-effort narrative and
//! news before constructing the validated [`Report`].
//!
//! Error policy: only a missing profile aborts a build (`NotFound`), and
//! only a malformed assembled shape is fatal (`Validation`). Everything
//! else degrades to zero/empty defaults so the report always renders.

use crate::metrics::DerivedMetrics;
use crate::model::{Company, Explain, Fundamentals, FundamentalsTtm, RatioSet, Report, Scores};
use atalaya_traits::{
    FundamentalsSource, Narrative, NewsSource, PromptContext, PromptKind, Record, ReportError,
    Result, ScoreResult, Scorer,
};
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Assembles one complete [`Report`] per ticker from injected
/// collaborators and a registered scorer set.
pub struct ReportBuilder {
    source: Arc<dyn FundamentalsSource>,
    narrative: Arc<dyn Narrative>,
    news: Arc<dyn NewsSource>,
    scorers: Vec<Box<dyn Scorer>>,
    news_sources: Vec<String>,
}

impl std::fmt::Debug for ReportBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportBuilder")
            .field("scorers", &self.scorers.iter().map(|s| s.name()).collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl ReportBuilder {
    /// Creates a builder over the given collaborators and scorers.
    ///
    /// Collaborator lifetimes are owned by whatever composes the pipeline;
    /// the builder holds shared handles only.
    #[must_use]
    pub fn new(
        source: Arc<dyn FundamentalsSource>,
        narrative: Arc<dyn Narrative>,
        news: Arc<dyn NewsSource>,
        scorers: Vec<Box<dyn Scorer>>,
    ) -> Self {
        Self {
            source,
            narrative,
            news,
            scorers,
            news_sources: Vec::new(),
        }
    }

    /// Restricts news headlines to the named sources. The default is no
    /// restriction.
    #[must_use]
    pub fn with_news_sources(mut self, sources: Vec<String>) -> Self {
        self.news_sources = sources;
        self
    }

    /// Builds the report for one ticker.
    ///
    /// # Errors
    ///
    /// - [`ReportError::NotFound`] when the data source cannot resolve the
    ///   ticker; no further collaborator calls are made.
    /// - [`ReportError::Validation`] when the assembled shape is malformed,
    ///   which indicates an assembler defect.
    pub async fn build(&self, ticker: &str) -> Result<Report> {
        let ticker = ticker.trim().to_uppercase();
        debug!(%ticker, "building report");

        // Sole hard failure path: no profile, no report.
        let profile = match self.source.profile(&ticker).await {
            Some(profile) if !profile.is_empty() => profile,
            _ => return Err(ReportError::NotFound(ticker)),
        };

        // Independent fetches, issued concurrently.
        let (bundle, ratios, quote) = tokio::join!(
            self.source.financials(&ticker),
            self.source.ratios(&ticker),
            self.source.quote(&ticker),
        );
        if ratios.is_empty() {
            warn!(%ticker, "ratios unavailable, report will carry zero ratios");
        }
        if quote.is_empty() {
            warn!(%ticker, "quote unavailable, market-cap derived fields degrade to zero");
        }

        let empty = Record::new();
        let latest_income = bundle.latest_income().unwrap_or(&empty);
        let latest_balance = bundle.latest_balance().unwrap_or(&empty);
        let latest_cash_flow = bundle.latest_cash_flow().unwrap_or(&empty);

        let metrics = DerivedMetrics::derive(latest_income, latest_cash_flow, &quote);

        let aligned = bundle.aligned();
        if aligned.is_none() {
            warn!(%ticker, "fewer than two periods in a statement series, scorers degrade");
        }
        let score_results: BTreeMap<&'static str, ScoreResult> = self
            .scorers
            .iter()
            .map(|scorer| (scorer.name(), scorer.compute(aligned.as_ref(), &ratios)))
            .collect();

        let scores = Scores {
            piotroski_f: score_value(&score_results, "piotroski_f_score"),
            value_investor: score_value(&score_results, "value_investor"),
            growth_investor: score_value(&score_results, "growth_investor"),
        };

        // Best-effort slots, fetched concurrently with each other. Failures
        // come back as empty values from the collaborators themselves.
        let piotroski_ctx = piotroski_context(&ticker, score_results.get("piotroski_f_score"));
        let cash_cow_ctx = cash_cow_context(&ticker, &metrics, latest_income, latest_balance);
        let (piotroski_text, cash_cow_text, headlines) = tokio::join!(
            self.narrative.generate(&piotroski_ctx),
            self.narrative.generate(&cash_cow_ctx),
            self.news.headlines(&ticker, &self.news_sources),
        );
        if headlines.is_empty() {
            warn!(%ticker, "no news headlines available");
        }

        let report = Report {
            as_of: Utc::now().date_naive().to_string(),
            company: Company {
                name: profile.text("name").to_string(),
                exchange: profile.text("exchange").to_string(),
                industry: profile.text("industry").to_string(),
                sector: profile.text("sector").to_string(),
                homepage: profile.text("homepage").to_string(),
            },
            scores,
            explain: Explain {
                piotroski: piotroski_text,
                value: String::new(),
                growth: String::new(),
                cash_cow: cash_cow_text,
            },
            fundamentals: Fundamentals {
                period: "ttm".to_string(),
                currency: "USD".to_string(),
                ttm: FundamentalsTtm {
                    revenue: latest_income.num("revenue"),
                    net_income: latest_income.num("netIncome"),
                    operating_cash_flow: metrics.operating_cash_flow,
                    free_cash_flow: metrics.free_cash_flow,
                    capex: metrics.capex,
                    ebit: metrics.ebit_approx,
                    total_assets: latest_balance.num("totalAssets"),
                    current_assets: latest_balance.num("totalCurrentAssets"),
                    current_liabilities: latest_balance.num("totalCurrentLiabilities"),
                    long_term_debt: latest_balance.num("longTermDebt"),
                    shares_diluted: quote.num("sharesOutstanding"),
                },
                ratios: RatioSet {
                    pe: ratios.num("peRatioTTM"),
                    pb: ratios.num("priceToBookRatioTTM"),
                    ev_ebit: ratios.num("enterpriseValueOverEBITDATTM"),
                    fcf_yield: metrics.fcf_yield,
                    roa: ratios.num("returnOnAssetsTTM"),
                    roe: ratios.num("returnOnEquityTTM"),
                    gross_margin: ratios.num("grossProfitMarginTTM"),
                    operating_margin: ratios.num("operatingIncomeRatioTTM"),
                },
            },
            news: headlines,
            ticker,
        };

        report.finalized()
    }

    /// Generates the standalone company bio for a ticker from its profile
    /// fields. Not part of the report document; serves presentation
    /// surfaces that want the bio on its own.
    ///
    /// # Errors
    ///
    /// - [`ReportError::NotFound`] when the data source cannot resolve the
    ///   ticker. Narrative failure degrades to an empty string as usual.
    pub async fn company_bio(&self, ticker: &str) -> Result<String> {
        let ticker = ticker.trim().to_uppercase();
        let profile = match self.source.profile(&ticker).await {
            Some(profile) if !profile.is_empty() => profile,
            _ => return Err(ReportError::NotFound(ticker)),
        };

        let mut fields = Record::new();
        fields.set("ticker", ticker.as_str());
        fields.set("name", profile.text("name"));
        fields.set("exchange", profile.text("exchange"));
        fields.set("industry", profile.text("industry"));
        fields.set("sector", profile.text("sector"));
        let context = PromptContext::new(PromptKind::CompanyBio, fields);

        Ok(self.narrative.generate(&context).await)
    }
}

fn score_value(results: &BTreeMap<&'static str, ScoreResult>, name: &str) -> i64 {
    results.get(name).map_or(0, |result| result.value)
}

fn piotroski_context(ticker: &str, result: Option<&ScoreResult>) -> PromptContext {
    let mut fields = Record::new();
    fields.set("ticker", ticker);
    if let Some(result) = result {
        fields.set("score", result.value);
        if let Ok(criteria) = serde_json::to_value(&result.criteria) {
            fields.set("criteria", criteria);
        }
    }
    PromptContext::new(PromptKind::PiotroskiBreakdown, fields)
}

fn cash_cow_context(
    ticker: &str,
    metrics: &DerivedMetrics,
    latest_income: &Record,
    latest_balance: &Record,
) -> PromptContext {
    let total_assets = latest_balance.num("totalAssets");
    let leverage = if total_assets != 0.0 {
        latest_balance.num("longTermDebt") / total_assets
    } else {
        0.0
    };

    let mut fields = Record::new();
    fields.set("ticker", ticker);
    fields.set("fcf", metrics.free_cash_flow);
    fields.set("fcfYield", metrics.fcf_yield);
    fields.set("ocf", metrics.operating_cash_flow);
    fields.set("capex", metrics.capex);
    fields.set("netIncome", latest_income.num("netIncome"));
    fields.set("leverage", leverage);
    PromptContext::new(PromptKind::CashCowSummary, fields)
}
