//! Piotroski F-Score scorer.
//!
//! The Piotroski F-Score is a 9-point composite score that assesses
//! financial strength based on profitability, leverage/liquidity, and
//! operating efficiency signals, each evaluated as a year-over-year binary
//! criterion.

use atalaya_traits::{AlignedStatements, Record, ScoreResult, Scorer};

/// Registry name of the Piotroski scorer.
pub const NAME: &str = "piotroski_f_score";

/// Piotroski F-Score scorer.
///
/// Scores 0-9 from exactly nine binary criteria:
///
/// **Profitability (4 points):**
/// - `positive_roa` — net income / total assets > 0
/// - `positive_cfo` — operating cash flow > 0
/// - `delta_roa` — ROA above prior period
/// - `accruals` — operating cash flow > net income
///
/// **Leverage/Liquidity (3 points):**
/// - `delta_leverage` — long-term debt / total assets at or below prior
/// - `delta_current_ratio` — current ratio above prior
/// - `no_new_shares` — common stock at or below prior
///
/// **Operating Efficiency (2 points):**
/// - `delta_gross_margin` — gross margin ratio above prior
/// - `delta_asset_turnover` — revenue / total assets above prior
///
/// Ratios with a zero denominator evaluate to 0 rather than failing, with
/// one historical exception: the current-ratio criterion substitutes 1 for
/// a *missing* `totalCurrentLiabilities` key (an explicit 0 still zeroes
/// the ratio). That asymmetry is preserved so scores stay comparable with
/// the published semantics.
///
/// Requires two periods in all three statement series; with fewer, the
/// scorer returns the defined degraded result (score 0, single `"error"`
/// criterion) instead of failing the build.
#[derive(Debug, Clone, Copy, Default)]
pub struct PiotroskiFScore;

impl PiotroskiFScore {
    /// Creates the scorer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Ratio that evaluates to 0 on a zero denominator.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator != 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Current ratio with the historical missing-key quirk: an absent
/// `totalCurrentLiabilities` counts as 1, an explicit 0 zeroes the ratio.
fn current_ratio(balance: &Record) -> f64 {
    let assets = balance.num("totalCurrentAssets");
    let liabilities = balance.num_or("totalCurrentLiabilities", 1.0);
    ratio(assets, liabilities)
}

impl Scorer for PiotroskiFScore {
    fn name(&self) -> &'static str {
        NAME
    }

    fn compute(&self, aligned: Option<&AlignedStatements<'_>>, _ratios: &Record) -> ScoreResult {
        let Some(aligned) = aligned else {
            return ScoreResult::insufficient_data();
        };

        let income = aligned.income;
        let balance = aligned.balance;
        let cash_flow = aligned.cash_flow;

        let net_income = income.latest.num("netIncome");
        let total_assets = balance.latest.num("totalAssets");
        let prior_net_income = income.prior.num("netIncome");
        let prior_total_assets = balance.prior.num("totalAssets");
        let cfo = cash_flow.latest.num("operatingCashFlow");

        let roa = ratio(net_income, total_assets);
        let prior_roa = ratio(prior_net_income, prior_total_assets);

        let mut result = ScoreResult::new();

        // Profitability
        result.record("positive_roa", roa > 0.0);
        result.record("positive_cfo", cfo > 0.0);
        result.record("delta_roa", roa > prior_roa);
        result.record("accruals", cfo > net_income);

        // Leverage / liquidity
        let leverage = ratio(balance.latest.num("longTermDebt"), total_assets);
        let prior_leverage = ratio(balance.prior.num("longTermDebt"), prior_total_assets);
        result.record("delta_leverage", leverage <= prior_leverage);

        result.record(
            "delta_current_ratio",
            current_ratio(balance.latest) > current_ratio(balance.prior),
        );

        result.record(
            "no_new_shares",
            balance.latest.num("commonStock") <= balance.prior.num("commonStock"),
        );

        // Operating efficiency
        result.record(
            "delta_gross_margin",
            income.latest.num("grossProfitRatio") > income.prior.num("grossProfitRatio"),
        );

        let asset_turnover = ratio(income.latest.num("revenue"), total_assets);
        let prior_asset_turnover = ratio(income.prior.num("revenue"), prior_total_assets);
        result.record("delta_asset_turnover", asset_turnover > prior_asset_turnover);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atalaya_traits::{Criterion, StatementBundle};
    use serde_json::json;

    fn rec(value: serde_json::Value) -> Record {
        Record::from_value(value)
    }

    /// All nine criteria met.
    fn strong_bundle() -> StatementBundle {
        StatementBundle {
            income_statement: vec![
                rec(json!({"netIncome": 100, "grossProfitRatio": 0.5, "revenue": 1000})),
                rec(json!({"netIncome": 80, "grossProfitRatio": 0.4, "revenue": 900})),
            ],
            balance_sheet: vec![
                rec(json!({
                    "totalAssets": 1000, "longTermDebt": 100, "totalCurrentAssets": 500,
                    "totalCurrentLiabilities": 200, "commonStock": 100
                })),
                rec(json!({
                    "totalAssets": 950, "longTermDebt": 120, "totalCurrentAssets": 450,
                    "totalCurrentLiabilities": 250, "commonStock": 100
                })),
            ],
            cash_flow_statement: vec![
                rec(json!({"operatingCashFlow": 120})),
                rec(json!({"operatingCashFlow": 110})),
            ],
        }
    }

    /// No criterion met: negative earnings and cash flow, rising debt and
    /// dilution against the strong bundle's prior year.
    fn weak_bundle() -> StatementBundle {
        StatementBundle {
            income_statement: vec![
                rec(json!({"netIncome": -50, "grossProfitRatio": 0.3, "revenue": 800})),
                rec(json!({"netIncome": 80, "grossProfitRatio": 0.4, "revenue": 900})),
            ],
            balance_sheet: vec![
                rec(json!({
                    "totalAssets": 1000, "longTermDebt": 150, "totalCurrentAssets": 400,
                    "totalCurrentLiabilities": 300, "commonStock": 110
                })),
                rec(json!({
                    "totalAssets": 950, "longTermDebt": 120, "totalCurrentAssets": 450,
                    "totalCurrentLiabilities": 250, "commonStock": 100
                })),
            ],
            cash_flow_statement: vec![
                rec(json!({"operatingCashFlow": -60})),
                rec(json!({"operatingCashFlow": 110})),
            ],
        }
    }

    const ALL_CRITERIA: [&str; 9] = [
        "positive_roa",
        "positive_cfo",
        "delta_roa",
        "accruals",
        "delta_leverage",
        "delta_current_ratio",
        "no_new_shares",
        "delta_gross_margin",
        "delta_asset_turnover",
    ];

    #[test]
    fn test_perfect_score() {
        let bundle = strong_bundle();
        let aligned = bundle.aligned().unwrap();
        let result = PiotroskiFScore.compute(Some(&aligned), &Record::new());

        assert_eq!(result.value, 9);
        for name in ALL_CRITERIA {
            assert_eq!(result.criterion(name), Some(&Criterion::Met), "{name}");
        }
    }

    #[test]
    fn test_zero_score() {
        let bundle = weak_bundle();
        let aligned = bundle.aligned().unwrap();
        let result = PiotroskiFScore.compute(Some(&aligned), &Record::new());

        assert_eq!(result.value, 0);
        for name in ALL_CRITERIA {
            assert_eq!(result.criterion(name), Some(&Criterion::NotMet), "{name}");
        }
    }

    #[test]
    fn test_insufficient_data() {
        let result = PiotroskiFScore.compute(None, &Record::new());
        assert_eq!(result.value, 0);
        assert_eq!(result.criteria.len(), 1);
        assert!(matches!(
            result.criterion("error"),
            Some(Criterion::Unavailable(_))
        ));
    }

    #[test]
    fn test_score_is_sum_of_criteria() {
        let bundle = strong_bundle();
        let aligned = bundle.aligned().unwrap();
        let result = PiotroskiFScore.compute(Some(&aligned), &Record::new());

        let sum: i64 = result.criteria.values().map(Criterion::points).sum();
        assert_eq!(result.value, sum);
        assert!((0..=9).contains(&result.value));
        assert_eq!(result.criteria.len(), 9);
    }

    #[test]
    fn test_idempotent() {
        let bundle = strong_bundle();
        let aligned = bundle.aligned().unwrap();
        let first = PiotroskiFScore.compute(Some(&aligned), &Record::new());
        let second = PiotroskiFScore.compute(Some(&aligned), &Record::new());
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_denominators_do_not_panic() {
        // Empty records everywhere: every denominator is 0 or missing.
        let empty = vec![rec(json!({})), rec(json!({}))];
        let bundle = StatementBundle {
            income_statement: empty.clone(),
            balance_sheet: empty.clone(),
            cash_flow_statement: empty,
        };
        let aligned = bundle.aligned().unwrap();
        let result = PiotroskiFScore.compute(Some(&aligned), &Record::new());

        // Every criterion still resolves to a defined 0/1 outcome.
        assert_eq!(result.criteria.len(), 9);
        assert!((0..=9).contains(&result.value));
        // roa == prior_roa == 0, so delta_roa fails; leverage 0 <= 0 passes.
        assert_eq!(result.criterion("delta_roa"), Some(&Criterion::NotMet));
        assert_eq!(result.criterion("delta_leverage"), Some(&Criterion::Met));
    }

    #[test]
    fn test_missing_current_liabilities_counts_as_one() {
        // Latest has no totalCurrentLiabilities key: denominator quirk
        // substitutes 1, so ratio = 500 vs prior 450/250 = 1.8.
        let mut bundle = strong_bundle();
        bundle.balance_sheet[0] = rec(json!({
            "totalAssets": 1000, "longTermDebt": 100,
            "totalCurrentAssets": 500, "commonStock": 100
        }));
        let aligned = bundle.aligned().unwrap();
        let result = PiotroskiFScore.compute(Some(&aligned), &Record::new());
        assert_eq!(result.criterion("delta_current_ratio"), Some(&Criterion::Met));
    }

    #[test]
    fn test_explicit_zero_current_liabilities_zeroes_ratio() {
        let mut bundle = strong_bundle();
        bundle.balance_sheet[0] = rec(json!({
            "totalAssets": 1000, "longTermDebt": 100, "totalCurrentAssets": 500,
            "totalCurrentLiabilities": 0, "commonStock": 100
        }));
        let aligned = bundle.aligned().unwrap();
        let result = PiotroskiFScore.compute(Some(&aligned), &Record::new());
        // Latest ratio becomes 0, prior is 1.8: criterion fails, no panic.
        assert_eq!(
            result.criterion("delta_current_ratio"),
            Some(&Criterion::NotMet)
        );
    }
}
