//! Post and comment data models

use crate::types::{CommentId, PostId, Slug, Username};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post with its comments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier
    pub id: PostId,
    /// Title, unique across the blog
    pub title: String,
    /// URL identifier derived from the title
    pub slug: Slug,
    /// Short abstract shown in listings
    pub summary: String,
    /// Full body
    pub content: String,
    /// Author of the post
    pub author: Username,
    /// Publication date; posts dated in the future are hidden from listings
    pub published_at: DateTime<Utc>,
    /// Tags for categorization
    #[serde(default)]
    pub tags: Vec<String>,
    /// Comments, oldest first
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Check whether the post is visible at `now`
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.published_at <= now
    }

    /// Check if the post carries a tag (case-insensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Change the title, keeping the slug in sync
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.slug = Slug::from_title(&self.title);
    }

    /// Append a comment
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Find a comment by ID
    pub fn comment(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| &c.id == id)
    }

    /// Number of comments
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Listing projection
    pub fn to_summary(&self) -> PostSummary {
        PostSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            slug: self.slug.clone(),
            summary: self.summary.clone(),
            author: self.author.clone(),
            published_at: self.published_at,
            tags: self.tags.clone(),
            comment_count: self.comments.len(),
        }
    }
}

/// A comment left on a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier
    pub id: CommentId,
    /// Post the comment belongs to
    pub post_id: PostId,
    /// Comment body
    pub content: String,
    /// Who wrote it
    pub author: Username,
    /// When it was published
    pub published_at: DateTime<Utc>,
}

impl Comment {
    /// Create a comment published now
    pub fn new(post_id: PostId, author: Username, content: impl Into<String>) -> Self {
        Self {
            id: CommentId::new(),
            post_id,
            content: content.into(),
            author,
            published_at: Utc::now(),
        }
    }
}

/// Post as shown in listings and feeds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: PostId,
    pub title: String,
    pub slug: Slug,
    pub summary: String,
    pub author: Username,
    pub published_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub comment_count: usize,
}

/// A search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    /// Publication date formatted as `YYYY-MM-DD`
    pub date: String,
    /// Author's full name
    pub author: String,
    pub summary: String,
    /// Path of the post page
    pub url: String,
}
