//! Stock-news collaborator.
//!
//! Fetches recent ticker headlines from the Financial Modeling Prep
//! `stock_news` endpoint and implements the [`NewsSource`] trait. A failed
//! fetch yields an empty list, never an error through the seam.
//!
//! [`NewsSource`]: atalaya_traits::NewsSource

#![forbid(unsafe_code)]

mod client;
mod error;

pub use client::NewsClient;
pub use error::NewsError;

/// Result type for news operations.
pub type Result<T> = std::result::Result<T, NewsError>;
