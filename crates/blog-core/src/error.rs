//! Error types for blogline

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for blogline
#[derive(Debug, Error)]
pub enum BlogError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Post not found
    #[error("Post not found: {0}")]
    PostNotFound(String),

    /// Comment not found
    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Another post already uses this title
    #[error("Title already in use: {0}")]
    DuplicateTitle(String),

    /// The acting user may not perform the operation
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// A comment-created handler failed
    #[error("Subscriber '{subscriber}' failed: {message}")]
    Subscriber { subscriber: String, message: String },

    /// Mail delivery failed
    #[error("Mail error: {0}")]
    Mail(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Unsupported schema version
    #[error("Unsupported schema version: {0}")]
    UnsupportedSchemaVersion(u32),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<BlogError>,
    },
}

impl BlogError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        BlogError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<toml::de::Error> for BlogError {
    fn from(err: toml::de::Error) -> Self {
        BlogError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for BlogError {
    fn from(err: toml::ser::Error) -> Self {
        BlogError::Toml(err.to_string())
    }
}

/// Result type alias for blogline
pub type Result<T> = std::result::Result<T, BlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BlogError::PostNotFound("hello-world".to_string());
        assert_eq!(err.to_string(), "Post not found: hello-world");
    }

    #[test]
    fn test_error_with_context() {
        let err = BlogError::Validation("content is blank".to_string());
        let err = err.with_context("Failed to add comment");
        assert!(err.to_string().contains("Failed to add comment"));
    }

    #[test]
    fn test_subscriber_error_display() {
        let err = BlogError::Subscriber {
            subscriber: "mail".to_string(),
            message: "smtp down".to_string(),
        };
        assert_eq!(err.to_string(), "Subscriber 'mail' failed: smtp down");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BlogError = io_err.into();
        assert!(matches!(err, BlogError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let err: BlogError = toml::from_str::<toml::Value>("= broken").unwrap_err().into();
        assert!(matches!(err, BlogError::Toml(_)));
    }
}
