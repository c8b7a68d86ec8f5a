//! Error types for the Ollama collaborator.

use thiserror::Error;

/// Errors that can occur when talking to Ollama.
#[derive(Debug, Error)]
pub enum OllamaError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Ollama returned a non-success status
    #[error("Ollama API error: {0}")]
    Api(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OllamaError::Api("500 model not found".to_string());
        assert_eq!(err.to_string(), "Ollama API error: 500 model not found");
    }
}
