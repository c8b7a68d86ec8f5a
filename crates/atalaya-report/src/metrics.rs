//! Cross-statement derived metrics.
//!
//! Computed once per report build from the latest statement periods and the
//! price quote; read-only afterward. Deterministic, no external calls, and
//! every zero or missing denominator resolves to 0 instead of failing.

use atalaya_traits::Record;

/// Derived values needed by both the report fundamentals block and the
/// scoring narrative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivedMetrics {
    /// Operating cash flow of the latest period.
    pub operating_cash_flow: f64,
    /// Capital expenditure of the latest period.
    pub capex: f64,
    /// Free cash flow: operating cash flow minus capex.
    pub free_cash_flow: f64,
    /// Free cash flow as a percentage of market capitalization; 0 when
    /// market cap is zero or absent.
    pub fcf_yield: f64,
    /// EBIT approximated as EBITDA minus depreciation and amortization.
    pub ebit_approx: f64,
}

impl DerivedMetrics {
    /// Derives the metrics from the latest income and cash-flow periods
    /// plus the price quote.
    #[must_use]
    pub fn derive(latest_income: &Record, latest_cash_flow: &Record, quote: &Record) -> Self {
        let operating_cash_flow = latest_cash_flow.num("operatingCashFlow");
        let capex = latest_cash_flow.num("capitalExpenditure");
        let free_cash_flow = operating_cash_flow - capex;

        let market_cap = quote.num("marketCap");
        let fcf_yield = if market_cap > 0.0 {
            free_cash_flow / market_cap * 100.0
        } else {
            0.0
        };

        let ebit_approx =
            latest_income.num("ebitda") - latest_income.num("depreciationAndAmortization");

        Self {
            operating_cash_flow,
            capex,
            free_cash_flow,
            fcf_yield,
            ebit_approx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    fn rec(value: serde_json::Value) -> Record {
        Record::from_value(value)
    }

    #[test]
    fn test_free_cash_flow() {
        let metrics = DerivedMetrics::derive(
            &rec(json!({"ebitda": 300.0, "depreciationAndAmortization": 50.0})),
            &rec(json!({"operatingCashFlow": 200.0, "capitalExpenditure": 50.0})),
            &rec(json!({"marketCap": 10_000.0})),
        );
        assert_relative_eq!(metrics.free_cash_flow, 150.0);
        assert_relative_eq!(metrics.fcf_yield, 1.5);
        assert_relative_eq!(metrics.ebit_approx, 250.0);
    }

    #[test]
    fn test_zero_market_cap_yields_zero() {
        let metrics = DerivedMetrics::derive(
            &rec(json!({})),
            &rec(json!({"operatingCashFlow": 200.0, "capitalExpenditure": 50.0})),
            &rec(json!({"marketCap": 0.0})),
        );
        assert_relative_eq!(metrics.free_cash_flow, 150.0);
        assert_relative_eq!(metrics.fcf_yield, 0.0);
    }

    #[test]
    fn test_absent_inputs_default_to_zero() {
        let metrics = DerivedMetrics::derive(&Record::new(), &Record::new(), &Record::new());
        assert_eq!(metrics, DerivedMetrics::default());
        assert!(metrics.fcf_yield.is_finite());
    }

    #[test]
    fn test_negative_market_cap_treated_as_absent() {
        let metrics = DerivedMetrics::derive(
            &rec(json!({})),
            &rec(json!({"operatingCashFlow": 100.0})),
            &rec(json!({"marketCap": -5.0})),
        );
        assert_relative_eq!(metrics.fcf_yield, 0.0);
    }
}
