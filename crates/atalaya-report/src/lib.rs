//! Report assembly pipeline for Atalaya.
//!
//! This crate turns the collaborator outputs (profile, statements, ratios,
//! quote, narrative text, news) into one validated [`Report`]:
//! - [`metrics`] derives cross-statement values (FCF, FCF yield, EBIT
//!   approximation)
//! - [`model`] defines the report entity and its wire contract
//! - [`assembler`] orchestrates one build per ticker with graceful
//!   degradation on secondary-collaborator failure

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod assembler;
pub mod metrics;
pub mod model;

// Re-export key types
pub use assembler::ReportBuilder;
pub use metrics::DerivedMetrics;
pub use model::{Company, Explain, Fundamentals, FundamentalsTtm, RatioSet, Report, Scores};
