//! Financial Modeling Prep (FMP) data-source collaborator for Atalaya.
//!
//! This crate provides the primary fundamentals source for the report
//! pipeline, fetching company profile, annual statements, TTM ratios, and
//! quote data from the [Financial Modeling Prep](https://financialmodelingprep.com/)
//! API.
//!
//! The client keeps untyped-data risk out of the core: every payload is
//! translated into [`Record`](atalaya_traits::Record)s at this boundary,
//! and every network or parse failure degrades to an empty value through
//! the [`FundamentalsSource`](atalaya_traits::FundamentalsSource) trait
//! instead of raising into the assembler.
//!
//! # Environment Variables
//!
//! Set `FMP_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FMP_API_KEY=your_api_key_here
//! ```

mod client;
mod error;

pub use client::FmpClient;
pub use error::FmpError;

/// Result type for FMP operations.
pub type Result<T> = std::result::Result<T, FmpError>;
