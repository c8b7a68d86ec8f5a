//! Collaborator traits consumed by the report assembler.
//!
//! These are the fixed seams to the systems outside the core: the
//! fundamentals data source, the narrative generator, and the news feed.
//! The assembler takes them as injected trait objects; concrete clients
//! live in their own crates and are wired up by the composition root.
//!
//! Degradation contract: only a missing profile aborts a build. Every other
//! method must absorb network or parse failures and return its empty value
//! (empty record, empty bundle, empty string, empty list) instead of an
//! error.

use crate::types::{NewsItem, Record, StatementBundle};
use async_trait::async_trait;

/// The primary data-source collaborator: company profile, multi-period
/// statements, TTM ratios, and price quote.
#[async_trait]
pub trait FundamentalsSource: Send + Sync {
    /// Fetches the company profile, or `None` when the ticker is unknown
    /// or the upstream fails. `None` is the sole hard failure signal in
    /// the pipeline.
    async fn profile(&self, ticker: &str) -> Option<Record>;

    /// Fetches the three statement series, most-recent-first. Failed series
    /// come back empty.
    async fn financials(&self, ticker: &str) -> StatementBundle;

    /// Fetches the TTM ratios record; empty on failure.
    async fn ratios(&self, ticker: &str) -> Record;

    /// Fetches the price quote record; empty on failure.
    async fn quote(&self, ticker: &str) -> Record;
}

/// What a narrative prompt is about. The narrative collaborator renders a
/// text template per kind from the structured fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Neutral company biography from profile fields.
    CompanyBio,
    /// Plain-language breakdown of the Piotroski criteria.
    PiotroskiBreakdown,
    /// Free-cash-flow strength summary from derived metrics.
    CashCowSummary,
}

/// A structured prompt for the narrative collaborator.
///
/// The pipeline hands over data, never prose: the collaborator owns the
/// template wording and the model invocation.
#[derive(Debug, Clone)]
pub struct PromptContext {
    /// Which narrative slot this prompt fills.
    pub kind: PromptKind,
    /// The structured fields the template may reference.
    pub fields: Record,
}

impl PromptContext {
    /// Creates a prompt context.
    #[must_use]
    pub const fn new(kind: PromptKind, fields: Record) -> Self {
        Self { kind, fields }
    }
}

/// The narrative-generation collaborator.
#[async_trait]
pub trait Narrative: Send + Sync {
    /// Generates plain text for the given context. Returns `""` on any
    /// failure or timeout.
    async fn generate(&self, context: &PromptContext) -> String;
}

/// The news-retrieval collaborator.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetches recent headlines for a ticker, newest first, optionally
    /// filtered to the named sources. Returns an empty list on failure.
    /// The assembler bounds the result regardless of how many are returned.
    async fn headlines(&self, ticker: &str, sources: &[String]) -> Vec<NewsItem>;
}
