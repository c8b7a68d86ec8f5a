//! The report entity and its nested value objects.
//!
//! The field names and nesting here are the wire contract the presentation
//! layer relies on; they must not change. All numeric fields are plain
//! numbers (never null) so the shape stays schema-valid even when upstream
//! data is partial. A report is built once per pipeline run and never
//! mutated afterward.

use atalaya_traits::{NewsItem, ReportError, Result};
use serde::{Deserialize, Serialize};

/// Maximum number of news entries a report carries.
pub const MAX_NEWS: usize = 5;

/// Company identity block from the profile fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Legal or trading name.
    pub name: String,
    /// Listing exchange short name.
    pub exchange: String,
    /// Industry classification.
    pub industry: String,
    /// Sector classification.
    pub sector: String,
    /// Company website.
    pub homepage: String,
}

/// Integer score slots, one per registered scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    /// Piotroski F-Score, 0-9.
    pub piotroski_f: i64,
    /// Value investor score (formula pending).
    pub value_investor: i64,
    /// Growth investor score (formula pending).
    pub growth_investor: i64,
}

/// Free-text explainability slots filled by the narrative collaborator.
/// Empty strings when narrative generation was unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explain {
    /// Piotroski criterion breakdown.
    pub piotroski: String,
    /// Value score rationale.
    pub value: String,
    /// Growth score rationale.
    pub growth: String,
    /// Free-cash-flow strength summary.
    pub cash_cow: String,
}

/// Trailing-twelve-month fundamental line items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundamentalsTtm {
    /// Total revenue.
    pub revenue: f64,
    /// Net income.
    pub net_income: f64,
    /// Operating cash flow.
    pub operating_cash_flow: f64,
    /// Free cash flow.
    pub free_cash_flow: f64,
    /// Capital expenditure.
    pub capex: f64,
    /// EBIT (approximated when not directly reported).
    pub ebit: f64,
    /// Total assets.
    pub total_assets: f64,
    /// Total current assets.
    pub current_assets: f64,
    /// Total current liabilities.
    pub current_liabilities: f64,
    /// Long-term debt.
    pub long_term_debt: f64,
    /// Diluted share count.
    pub shares_diluted: f64,
}

/// Valuation and profitability ratios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioSet {
    /// Price to earnings.
    pub pe: f64,
    /// Price to book.
    pub pb: f64,
    /// Enterprise value over EBIT.
    pub ev_ebit: f64,
    /// Free cash flow yield, percent.
    pub fcf_yield: f64,
    /// Return on assets.
    pub roa: f64,
    /// Return on equity.
    pub roe: f64,
    /// Gross margin.
    pub gross_margin: f64,
    /// Operating margin.
    pub operating_margin: f64,
}

/// Fundamentals block: period convention, currency, line items, ratios.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fundamentals {
    /// Period convention, e.g. "ttm".
    pub period: String,
    /// Reporting currency.
    pub currency: String,
    /// Trailing-twelve-month line items.
    pub ttm: FundamentalsTtm,
    /// Valuation and profitability ratios.
    pub ratios: RatioSet,
}

/// The canonical report for one ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Uppercased ticker symbol.
    pub ticker: String,
    /// Build date, ISO `YYYY-MM-DD`.
    pub as_of: String,
    /// Company identity.
    pub company: Company,
    /// Scorer outputs.
    pub scores: Scores,
    /// Narrative explainability slots.
    pub explain: Explain,
    /// Fundamental line items and ratios.
    pub fundamentals: Fundamentals,
    /// Recent headlines, newest first, at most [`MAX_NEWS`].
    pub news: Vec<NewsItem>,
}

impl Report {
    /// Finalizes the report: caps the news list at [`MAX_NEWS`] (oldest
    /// entries dropped) and validates the shape.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Validation`] when a structural field is empty
    /// or a numeric field is not a finite number. This is the fatal
    /// internal-defect path, distinct from upstream data sparsity, which
    /// only ever produces zero/empty defaults.
    pub fn finalized(mut self) -> Result<Self> {
        self.news.truncate(MAX_NEWS);
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.ticker.is_empty() {
            return Err(ReportError::Validation("ticker is empty".to_string()));
        }
        if self.as_of.is_empty() {
            return Err(ReportError::Validation("asOf is empty".to_string()));
        }

        let ttm = &self.fundamentals.ttm;
        let ratios = &self.fundamentals.ratios;
        let numerics = [
            ("ttm.revenue", ttm.revenue),
            ("ttm.netIncome", ttm.net_income),
            ("ttm.operatingCashFlow", ttm.operating_cash_flow),
            ("ttm.freeCashFlow", ttm.free_cash_flow),
            ("ttm.capex", ttm.capex),
            ("ttm.ebit", ttm.ebit),
            ("ttm.totalAssets", ttm.total_assets),
            ("ttm.currentAssets", ttm.current_assets),
            ("ttm.currentLiabilities", ttm.current_liabilities),
            ("ttm.longTermDebt", ttm.long_term_debt),
            ("ttm.sharesDiluted", ttm.shares_diluted),
            ("ratios.pe", ratios.pe),
            ("ratios.pb", ratios.pb),
            ("ratios.evEbit", ratios.ev_ebit),
            ("ratios.fcfYield", ratios.fcf_yield),
            ("ratios.roa", ratios.roa),
            ("ratios.roe", ratios.roe),
            ("ratios.grossMargin", ratios.gross_margin),
            ("ratios.operatingMargin", ratios.operating_margin),
        ];
        for (name, value) in numerics {
            if !value.is_finite() {
                return Err(ReportError::Validation(format!(
                    "{name} is not a finite number: {value}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_report() -> Report {
        Report {
            ticker: "TEST".to_string(),
            as_of: "2023-01-01".to_string(),
            ..Report::default()
        }
    }

    #[test]
    fn test_finalized_accepts_complete_shape() {
        assert!(minimal_report().finalized().is_ok());
    }

    #[test]
    fn test_finalized_caps_news_at_five() {
        let mut report = minimal_report();
        report.news = (0..8)
            .map(|i| NewsItem {
                title: format!("Headline {i}"),
                source: "Reuters".to_string(),
                published_at: String::new(),
                url: String::new(),
            })
            .collect();

        let report = report.finalized().unwrap();
        assert_eq!(report.news.len(), MAX_NEWS);
        // Newest entries (list head) survive the cap.
        assert_eq!(report.news[0].title, "Headline 0");
        assert_eq!(report.news[4].title, "Headline 4");
    }

    #[test]
    fn test_finalized_rejects_non_finite_numbers() {
        let mut report = minimal_report();
        report.fundamentals.ratios.fcf_yield = f64::NAN;
        let err = report.finalized().unwrap_err();
        assert!(err.to_string().contains("fcfYield"));

        let mut report = minimal_report();
        report.fundamentals.ttm.total_assets = f64::INFINITY;
        assert!(report.finalized().is_err());
    }

    #[test]
    fn test_finalized_rejects_empty_ticker() {
        let mut report = minimal_report();
        report.ticker.clear();
        assert!(report.finalized().is_err());
    }

    #[test]
    fn test_wire_contract_field_names() {
        let report = minimal_report().finalized().unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert!(json.get("asOf").is_some());
        assert!(json["scores"].get("piotroskiF").is_some());
        assert!(json["scores"].get("valueInvestor").is_some());
        assert!(json["scores"].get("growthInvestor").is_some());
        assert!(json["explain"].get("cashCow").is_some());
        assert!(json["fundamentals"].get("ttm").is_some());
        assert!(json["fundamentals"]["ttm"].get("operatingCashFlow").is_some());
        assert!(json["fundamentals"]["ttm"].get("sharesDiluted").is_some());
        assert!(json["fundamentals"]["ratios"].get("evEbit").is_some());
        assert!(json["fundamentals"]["ratios"].get("fcfYield").is_some());
    }

    #[test]
    fn test_round_trip() {
        let report = minimal_report();
        let text = serde_json::to_string(&report).unwrap();
        let back: Report = serde_json::from_str(&text).unwrap();
        assert_eq!(back, report);
    }
}
