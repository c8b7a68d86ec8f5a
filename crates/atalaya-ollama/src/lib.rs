//! Ollama narrative collaborator.
//!
//! Renders text prompts from structured [`PromptContext`] values and runs
//! them against a local Ollama instance via the `/api/generate` endpoint.
//! Implements the [`Narrative`] trait: any failure or timeout yields an
//! empty string, never an error through the seam.
//!
//! [`PromptContext`]: atalaya_traits::PromptContext
//! [`Narrative`]: atalaya_traits::Narrative

#![forbid(unsafe_code)]

mod client;
mod error;
mod prompts;

pub use client::OllamaClient;
pub use error::OllamaError;
pub use prompts::render;

/// Result type for Ollama operations.
pub type Result<T> = std::result::Result<T, OllamaError>;
