//! Scorer trait for computing explainable fundamental-health scores.
//!
//! A scorer turns aligned statement periods (plus a ratios record) into a
//! named integer score with a per-criterion breakdown. The report assembler
//! iterates every registered scorer through this one interface, so adding a
//! scorer never touches the assembler.

use crate::align::AlignedStatements;
use crate::types::Record;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Sentinel stored under the `"error"` criterion when a scorer lacks the
/// minimum number of periods.
pub const INSUFFICIENT_DATA: &str = "insufficient data";

/// Outcome of a single scoring criterion.
///
/// Serializes as `1` (met), `0` (not met), or a string sentinel, matching
/// the breakdown shape consumed by narrative generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// The criterion contributed one point.
    Met,
    /// The criterion contributed no points.
    NotMet,
    /// The criterion could not be evaluated.
    Unavailable(String),
}

impl Criterion {
    /// Point contribution of this criterion: 1 when met, otherwise 0.
    #[must_use]
    pub const fn points(&self) -> i64 {
        match self {
            Self::Met => 1,
            Self::NotMet | Self::Unavailable(_) => 0,
        }
    }
}

impl From<bool> for Criterion {
    fn from(met: bool) -> Self {
        if met { Self::Met } else { Self::NotMet }
    }
}

impl Serialize for Criterion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Met => serializer.serialize_i64(1),
            Self::NotMet => serializer.serialize_i64(0),
            Self::Unavailable(reason) => serializer.serialize_str(reason),
        }
    }
}

/// The result of one scorer run: an integer score plus the named criteria
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Total score, the sum of all met criteria.
    pub value: i64,
    /// Per-criterion breakdown, keyed by criterion name.
    pub criteria: BTreeMap<String, Criterion>,
}

impl ScoreResult {
    /// Creates an empty result with score zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The degraded outcome for a scorer lacking enough periods: score zero
    /// with a single `"error"` criterion. Not a failure.
    #[must_use]
    pub fn insufficient_data() -> Self {
        let mut criteria = BTreeMap::new();
        criteria.insert(
            "error".to_string(),
            Criterion::Unavailable(INSUFFICIENT_DATA.to_string()),
        );
        Self { value: 0, criteria }
    }

    /// Records a binary criterion and adds its point to the total.
    pub fn record(&mut self, name: &str, met: bool) {
        let criterion = Criterion::from(met);
        self.value += criterion.points();
        self.criteria.insert(name.to_string(), criterion);
    }

    /// Looks up a criterion by name.
    #[must_use]
    pub fn criterion(&self, name: &str) -> Option<&Criterion> {
        self.criteria.get(name)
    }
}

impl Serialize for ScoreResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("score", &self.value)?;
        map.serialize_entry("criteria", &self.criteria)?;
        map.end()
    }
}

/// A fundamental-health scorer.
///
/// Implementations must be thread-safe (`Send + Sync`) so the assembler can
/// run them from async tasks. A scorer receives the aligned statement pairs
/// when alignment succeeded, or `None` when any series had fewer than two
/// periods; in the latter case it must return a defined degraded result,
/// never panic.
pub trait Scorer: Send + Sync {
    /// Unique scorer name, used as the key in the assembled score map.
    fn name(&self) -> &'static str;

    /// Computes the score from aligned periods and the TTM ratios record.
    fn compute(&self, aligned: Option<&AlignedStatements<'_>>, ratios: &Record) -> ScoreResult;
}
