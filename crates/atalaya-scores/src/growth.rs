//! Growth investor scorer.

use atalaya_traits::{AlignedStatements, Record, ScoreResult, Scorer};

/// Registry name of the growth investor scorer.
pub const NAME: &str = "growth_investor";

/// Growth investor scorer.
///
/// Same contract-only status as the value scorer: registered so the report
/// carries its slot, formula pending.
// TODO: settle the growth criteria (revenue/earnings growth rates) and
// implement them over the aligned income statements.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrowthInvestorScore;

impl GrowthInvestorScore {
    /// Creates the scorer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Scorer for GrowthInvestorScore {
    fn name(&self) -> &'static str {
        NAME
    }

    fn compute(&self, _aligned: Option<&AlignedStatements<'_>>, _ratios: &Record) -> ScoreResult {
        ScoreResult::new()
    }
}
