//! Period alignment for year-over-year comparisons.
//!
//! Every delta criterion in the scoring engine compares the two most recent
//! periods of a statement series. Alignment is only defined when a series
//! carries at least two periods; shorter series yield `None`, which scorers
//! translate into their "insufficient data" outcome rather than a failure.
//!
//! Series are assumed pre-sorted most-recent-first by the upstream
//! collaborator. The aligner performs no interpolation, no currency
//! conversion, and no re-sorting.

use crate::types::{Record, StatementBundle};

/// The (latest, prior) period pair from a single statement series.
#[derive(Debug, Clone, Copy)]
pub struct AlignedPair<'a> {
    /// The most recent period.
    pub latest: &'a Record,
    /// The period immediately before the latest.
    pub prior: &'a Record,
}

/// Aligned pairs for all three statement series of one ticker.
#[derive(Debug, Clone, Copy)]
pub struct AlignedStatements<'a> {
    /// Income statement pair.
    pub income: AlignedPair<'a>,
    /// Balance sheet pair.
    pub balance: AlignedPair<'a>,
    /// Cash flow statement pair.
    pub cash_flow: AlignedPair<'a>,
}

/// Selects the two most recent periods from a series.
///
/// Returns `None` when the series has fewer than two periods.
#[must_use]
pub fn latest_and_prior(series: &[Record]) -> Option<AlignedPair<'_>> {
    match series {
        [latest, prior, ..] => Some(AlignedPair { latest, prior }),
        _ => None,
    }
}

impl StatementBundle {
    /// Aligns all three statement series.
    ///
    /// Returns `None` when any series has fewer than two periods, in which
    /// case year-over-year scoring is undefined for this ticker.
    #[must_use]
    pub fn aligned(&self) -> Option<AlignedStatements<'_>> {
        Some(AlignedStatements {
            income: latest_and_prior(&self.income_statement)?,
            balance: latest_and_prior(&self.balance_sheet)?,
            cash_flow: latest_and_prior(&self.cash_flow_statement)?,
        })
    }
}
