//! Post builder for fluent API

use super::model::Post;
use super::validator::PostValidator;
use crate::error::{BlogError, Result};
use crate::types::{PostId, Slug, Username};
use chrono::{DateTime, Utc};

/// Builder for creating posts with fluent API
#[derive(Debug, Clone)]
pub struct PostBuilder {
    author: Username,
    title: Option<String>,
    summary: Option<String>,
    content: Option<String>,
    published_at: Option<DateTime<Utc>>,
    tags: Vec<String>,
}

impl PostBuilder {
    /// Start a post written by `author`
    pub fn new(author: Username) -> Self {
        Self {
            author,
            title: None,
            summary: None,
            content: None,
            published_at: None,
            tags: Vec::new(),
        }
    }

    /// Set the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the summary
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the body
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the publication date (defaults to now)
    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    /// Add a tag
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add multiple tags
    pub fn tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(|t| t.into()));
        self
    }

    /// Build and validate the post
    pub fn build(self) -> Result<Post> {
        let title = self
            .title
            .ok_or_else(|| BlogError::Validation("Post title is required".to_string()))?;
        let summary = self
            .summary
            .ok_or_else(|| BlogError::Validation("Post summary is required".to_string()))?;
        let content = self
            .content
            .ok_or_else(|| BlogError::Validation("Post content is required".to_string()))?;

        let mut tags: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in self.tags {
            let tag = tag.trim().to_string();
            if !tags.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
                tags.push(tag);
            }
        }

        PostValidator::new().validate(&title, &summary, &content, &tags)?;

        let title = title.trim().to_string();
        Ok(Post {
            id: PostId::new(),
            slug: Slug::from_title(&title),
            title,
            summary: summary.trim().to_string(),
            content,
            author: self.author,
            published_at: self.published_at.unwrap_or_else(Utc::now),
            tags,
            comments: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> Username {
        Username("lea".to_string())
    }

    #[test]
    fn test_build_post() {
        let post = PostBuilder::new(author())
            .title("  Hello World ")
            .summary("Summary")
            .content("Some long enough content")
            .tag("rust")
            .build()
            .unwrap();

        assert_eq!(post.title, "Hello World");
        assert_eq!(post.slug.as_str(), "hello-world");
        assert_eq!(post.author, author());
        assert_eq!(post.tags, vec!["rust".to_string()]);
        assert!(post.comments.is_empty());
    }

    #[test]
    fn test_missing_fields() {
        assert!(PostBuilder::new(author()).build().is_err());
        assert!(PostBuilder::new(author())
            .title("Title")
            .summary("Summary")
            .build()
            .is_err());
    }

    #[test]
    fn test_duplicate_tags_collapsed() {
        let post = PostBuilder::new(author())
            .title("Title")
            .summary("Summary")
            .content("Some long enough content")
            .tags(["rust", "Rust", " web "])
            .build()
            .unwrap();

        assert_eq!(post.tags, vec!["rust".to_string(), "web".to_string()]);
    }

    #[test]
    fn test_invalid_post_rejected() {
        let result = PostBuilder::new(author())
            .title("Title")
            .summary("Summary")
            .content("short")
            .build();
        assert!(matches!(result, Err(BlogError::Validation(_))));
    }
}
