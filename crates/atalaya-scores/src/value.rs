//! Value investor scorer.

use atalaya_traits::{AlignedStatements, Record, ScoreResult, Scorer};

/// Registry name of the value investor scorer.
pub const NAME: &str = "value_investor";

/// Value investor scorer.
///
/// Registered with the engine so the report carries its slot, but the
/// scoring formula itself is an open extension point: `compute` currently
/// returns score 0 with no criteria.
// TODO: settle the valuation criteria (P/E, P/B, EV/EBIT thresholds) and
// implement them over the ratios record.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueInvestorScore;

impl ValueInvestorScore {
    /// Creates the scorer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Scorer for ValueInvestorScore {
    fn name(&self) -> &'static str {
        NAME
    }

    fn compute(&self, _aligned: Option<&AlignedStatements<'_>>, _ratios: &Record) -> ScoreResult {
        ScoreResult::new()
    }
}
