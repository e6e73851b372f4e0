//! Centralized error types for PromptFuse.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for PromptFuse operations.
#[derive(Error, Debug)]
pub enum PromptFuseError {
    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Tokenization failed for model '{model}': {message}")]
    Tokenization { model: String, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for PromptFuse operations.
pub type PromptFuseResult<T> = Result<T, PromptFuseError>;

impl PromptFuseError {
    /// Create a file read error.
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a tokenization error.
    pub fn tokenization(model: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Tokenization {
            model: model.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_read_message_names_path() {
        let err = PromptFuseError::file_read(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("missing.txt"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_tokenization_message_names_model() {
        let err = PromptFuseError::tokenization("gpt-unknown", "no encoding");
        assert_eq!(
            err.to_string(),
            "Tokenization failed for model 'gpt-unknown': no encoding"
        );
    }
}
