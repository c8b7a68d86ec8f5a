//! Scorer registry for discovering and instantiating available scorers.
//!
//! The assembler iterates [`default_scorers`] and never names a concrete
//! scorer type, so adding a scorer is a registry change only.

use crate::{GrowthInvestorScore, PiotroskiFScore, ValueInvestorScore, growth, piotroski, value};
use atalaya_traits::Scorer;
use serde::{Deserialize, Serialize};

/// Metadata about a registered scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorerInfo {
    /// Unique identifier, matching `Scorer::name`.
    pub name: &'static str,

    /// Human-readable description.
    pub description: &'static str,

    /// Minimum statement periods required for a full computation.
    pub min_periods: usize,

    /// Whether the scoring formula is implemented or still a contract stub.
    pub implemented: bool,
}

/// Get information about all registered scorers.
#[must_use]
pub fn available_scorers() -> Vec<ScorerInfo> {
    vec![
        ScorerInfo {
            name: piotroski::NAME,
            description: "Piotroski F-Score: 9-point composite assessing financial strength",
            min_periods: 2,
            implemented: true,
        },
        ScorerInfo {
            name: value::NAME,
            description: "Value investor score: valuation-based criteria (formula pending)",
            min_periods: 2,
            implemented: false,
        },
        ScorerInfo {
            name: growth::NAME,
            description: "Growth investor score: growth-based criteria (formula pending)",
            min_periods: 2,
            implemented: false,
        },
    ]
}

/// Get information about a specific scorer by name.
#[must_use]
pub fn get_scorer_info(name: &str) -> Option<ScorerInfo> {
    available_scorers().into_iter().find(|info| info.name == name)
}

/// Instantiate every registered scorer.
#[must_use]
pub fn default_scorers() -> Vec<Box<dyn Scorer>> {
    vec![
        Box::new(PiotroskiFScore::new()),
        Box::new(ValueInvestorScore::new()),
        Box::new(GrowthInvestorScore::new()),
    ]
}
