//! Scoring engine for the Atalaya report pipeline.
//!
//! This crate provides the concrete [`Scorer`](atalaya_traits::Scorer)
//! implementations and a registry the assembler iterates:
//! - Piotroski F-Score: 9 binary criteria over year-over-year statement
//!   deltas, fully implemented
//! - Value investor and growth investor scores: registered contract stubs
//!   whose formulas are an open extension point
//!
//! New scorers register through [`registry::default_scorers`] without any
//! assembler change.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod growth;
pub mod piotroski;
pub mod registry;
pub mod value;

// Re-export key types
pub use growth::GrowthInvestorScore;
pub use piotroski::PiotroskiFScore;
pub use registry::{ScorerInfo, available_scorers, default_scorers};
pub use value::ValueInvestorScore;
