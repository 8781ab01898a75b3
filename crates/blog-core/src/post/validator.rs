//! Post and comment validation

use crate::error::{BlogError, Result};
use crate::types::Slug;

/// Maximum summary length
pub const MAX_SUMMARY_LENGTH: usize = 255;

/// Minimum post body length
pub const MIN_POST_CONTENT_LENGTH: usize = 10;

/// Maximum number of tags on a post
pub const MAX_TAGS: usize = 4;

/// Maximum comment length (default)
pub const MAX_COMMENT_LENGTH: usize = 10000;

/// Minimum comment length
pub const MIN_COMMENT_LENGTH: usize = 5;

/// Validator for post fields
#[derive(Debug, Clone, Default)]
pub struct PostValidator;

impl PostValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate title, summary, content and tags
    pub fn validate(&self, title: &str, summary: &str, content: &str, tags: &[String]) -> Result<()> {
        if title.trim().is_empty() {
            return Err(BlogError::Validation("Post title cannot be empty".to_string()));
        }
        if Slug::from_title(title).is_empty() {
            return Err(BlogError::Validation(format!(
                "Post title '{}' has no characters usable in a URL",
                title.trim()
            )));
        }

        let summary = summary.trim();
        if summary.is_empty() {
            return Err(BlogError::Validation("Post summary cannot be empty".to_string()));
        }
        if summary.chars().count() > MAX_SUMMARY_LENGTH {
            return Err(BlogError::Validation(format!(
                "Post summary exceeds maximum length of {} characters",
                MAX_SUMMARY_LENGTH
            )));
        }

        if content.trim().chars().count() < MIN_POST_CONTENT_LENGTH {
            return Err(BlogError::Validation(format!(
                "Post content must be at least {} characters",
                MIN_POST_CONTENT_LENGTH
            )));
        }

        if tags.len() > MAX_TAGS {
            return Err(BlogError::Validation(format!(
                "A post cannot have more than {} tags",
                MAX_TAGS
            )));
        }
        if tags.iter().any(|t| t.trim().is_empty()) {
            return Err(BlogError::Validation("Tags cannot be empty".to_string()));
        }

        Ok(())
    }
}

/// Validator for comment content
#[derive(Debug, Clone)]
pub struct CommentValidator {
    max_length: usize,
    min_length: usize,
}

impl CommentValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self {
            max_length: MAX_COMMENT_LENGTH,
            min_length: MIN_COMMENT_LENGTH,
        }
    }

    /// Create a new validator with custom max length
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            max_length,
            min_length: MIN_COMMENT_LENGTH,
        }
    }

    /// Validate comment content
    pub fn validate_content(&self, content: &str) -> Result<()> {
        let trimmed = content.trim();

        if trimmed.is_empty() {
            return Err(BlogError::Validation(
                "Comment content cannot be empty".to_string(),
            ));
        }

        let length = trimmed.chars().count();
        if length < self.min_length {
            return Err(BlogError::Validation(format!(
                "Comment content must be at least {} characters",
                self.min_length
            )));
        }

        if length > self.max_length {
            return Err(BlogError::Validation(format!(
                "Comment content exceeds maximum length of {} characters",
                self.max_length
            )));
        }

        // No email addresses in comments
        if trimmed.contains('@') {
            return Err(BlogError::Validation(
                "Comment content looks like spam".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for CommentValidator {
    fn default() -> Self {
        Self::new()
    }
}
