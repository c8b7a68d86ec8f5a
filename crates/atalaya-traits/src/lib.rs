#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Core type and trait definitions for the Atalaya report pipeline.
//!
//! This crate provides the foundational abstractions shared by the rest of
//! the workspace: loosely-typed statement records with default-on-missing
//! accessors, period alignment, the [`Scorer`] capability trait, and the
//! collaborator traits the report assembler consumes.

/// The version of the atalaya-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod align;
pub mod error;
pub mod scorer;
pub mod source;
pub mod types;

// Re-exports
pub use align::{AlignedPair, AlignedStatements, latest_and_prior};
pub use error::{ReportError, Result};
pub use scorer::{Criterion, ScoreResult, Scorer};
pub use source::{FundamentalsSource, Narrative, NewsSource, PromptContext, PromptKind};
pub use types::{NewsItem, Record, StatementBundle};
