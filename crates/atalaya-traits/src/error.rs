//! Error types for the Atalaya report pipeline.
//!
//! Only two conditions cross the core boundary as failures: an unresolvable
//! ticker and a malformed assembled report. Everything else (missing
//! statements, failed ratios/quote/narrative/news fetches, scorers lacking
//! periods) is absorbed into a degraded-but-complete report.

use thiserror::Error;

/// Errors surfaced by a report build.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The primary data source could not resolve the ticker. This is the
    /// sole condition that aborts a build.
    #[error("No data found for ticker: {0}")]
    NotFound(String),

    /// The assembled data does not conform to the report shape. Indicates
    /// an assembler defect, not upstream data sparsity.
    #[error("Report validation failed: {0}")]
    Validation(String),
}

/// A specialized Result type for report pipeline operations.
pub type Result<T> = std::result::Result<T, ReportError>;
