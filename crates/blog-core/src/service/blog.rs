//! Public blog operations: listings, search and comments

use crate::config::Config;
use crate::error::{BlogError, Result};
use crate::event::{CommentCreatedEvent, EventChannel};
use crate::pagination::{Page, Paginator};
use crate::post::{Comment, CommentValidator, Post, PostSummary, SearchResult};
use crate::storage::BlogStorage;
use crate::types::Slug;
use crate::user::User;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

/// Search terms shorter than this are ignored
const MIN_SEARCH_TERM_LENGTH: usize = 2;

/// Default number of search results
const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Read side of the blog plus comment submission
pub struct BlogService {
    storage: Arc<dyn BlogStorage>,
    paginator: Paginator,
    events: EventChannel,
    comment_validator: CommentValidator,
    search_limit: usize,
}

impl BlogService {
    /// Create a service with default validation and search limit
    pub fn new(storage: Arc<dyn BlogStorage>, paginator: Paginator, events: EventChannel) -> Self {
        Self {
            storage,
            paginator,
            events,
            comment_validator: CommentValidator::new(),
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Create a service from configuration
    pub fn from_config(
        storage: Arc<dyn BlogStorage>,
        config: &Config,
        events: EventChannel,
    ) -> Result<Self> {
        let mut service = Self::new(storage, config.pagination.paginator()?, events);
        service.comment_validator = CommentValidator::with_max_length(config.comments.max_length);
        service.search_limit = config.pagination.search_limit;
        Ok(service)
    }

    /// The paginator used for listings
    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// The comment-created channel
    pub fn events(&self) -> &EventChannel {
        &self.events
    }

    /// Published posts, newest first
    fn published_posts(&self, tag: Option<&str>) -> Result<Vec<Post>> {
        let now = Utc::now();
        let mut posts: Vec<Post> = self
            .storage
            .list_posts()?
            .into_iter()
            .filter(|p| p.is_published(now))
            .filter(|p| tag.map_or(true, |t| p.has_tag(t)))
            .collect();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(posts)
    }

    /// One page of the public listing, optionally restricted to a tag
    pub fn latest_posts(&self, page: i64, tag: Option<&str>) -> Result<Page<PostSummary>> {
        let posts = self.published_posts(tag)?;
        let page = self.paginator.paginate(posts, page).map(|p| p.to_summary());
        debug!(
            page = page.window.current_page,
            last_page = page.window.last_page,
            "Listed {} posts",
            page.len()
        );
        Ok(page)
    }

    /// One page of the feed; same window as the listing
    pub fn feed(&self, page: i64) -> Result<Page<PostSummary>> {
        self.latest_posts(page, None)
    }

    /// Load a published post by slug
    pub fn find_by_slug(&self, slug: &str) -> Result<Post> {
        self.storage
            .find_post_by_slug(&Slug(slug.to_string()))?
            .filter(|p| p.is_published(Utc::now()))
            .ok_or_else(|| BlogError::PostNotFound(slug.to_string()))
    }

    /// Search post titles.
    ///
    /// The query is split on whitespace and terms shorter than two
    /// characters are dropped; a post matches when its title contains any
    /// remaining term. `limit` defaults to the configured search limit.
    pub fn search(&self, query: &str, limit: Option<usize>) -> Result<Vec<SearchResult>> {
        let terms: Vec<String> = query
            .split_whitespace()
            .filter(|t| t.chars().count() >= MIN_SEARCH_TERM_LENGTH)
            .map(|t| t.to_lowercase())
            .collect();

        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let limit = limit.unwrap_or(self.search_limit);
        let mut results = Vec::new();

        for post in self.published_posts(None)? {
            if results.len() >= limit {
                break;
            }
            let title = post.title.to_lowercase();
            if !terms.iter().any(|t| title.contains(t.as_str())) {
                continue;
            }

            let author = match self.storage.load_user(&post.author) {
                Ok(user) => user.full_name,
                Err(_) => post.author.to_string(),
            };
            results.push(SearchResult {
                url: format!("/posts/{}", post.slug),
                date: post.published_at.format("%Y-%m-%d").to_string(),
                title: post.title,
                author,
                summary: post.summary,
            });
        }

        Ok(results)
    }

    /// Add a comment to a published post.
    ///
    /// The comment is persisted first, then a [`CommentCreatedEvent`] is
    /// published. A subscriber failure is returned to the caller but does
    /// not undo the comment.
    pub fn add_comment(&self, slug: &str, author: &User, content: &str) -> Result<Comment> {
        let mut post = self.find_by_slug(slug)?;
        self.comment_validator.validate_content(content)?;

        let comment = Comment::new(post.id.clone(), author.username.clone(), content.trim());
        post.add_comment(comment.clone());
        self.storage.save_post(&post)?;
        info!(post = %post.slug, comment = %comment.id, "Comment added");

        self.events
            .publish(&CommentCreatedEvent::new(&comment))
            .map_err(|e| e.with_context(format!("Comment {} saved", comment.id)))?;

        Ok(comment)
    }
}
