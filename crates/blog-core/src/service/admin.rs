//! Post administration, restricted to admins

use crate::error::{BlogError, Result};
use crate::post::{Post, PostBuilder, PostSummary, PostValidator};
use crate::storage::BlogStorage;
use crate::types::{PostId, Slug};
use crate::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Fields of a new post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub summary: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Defaults to now
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Partial update of a post; `None` keeps the current value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostChanges {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published_at: Option<DateTime<Utc>>,
}

impl PostChanges {
    /// Check if nothing would change
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.summary.is_none()
            && self.content.is_none()
            && self.tags.is_none()
            && self.published_at.is_none()
    }
}

/// Backend for managing posts
pub struct AdminService {
    storage: Arc<dyn BlogStorage>,
}

impl AdminService {
    pub fn new(storage: Arc<dyn BlogStorage>) -> Self {
        Self { storage }
    }

    fn require_admin(actor: &User) -> Result<()> {
        if actor.is_admin() {
            Ok(())
        } else {
            Err(BlogError::AccessDenied(format!(
                "{} is not an administrator",
                actor.username
            )))
        }
    }

    fn require_author(actor: &User, post: &Post) -> Result<()> {
        if post.author == actor.username {
            Ok(())
        } else {
            Err(BlogError::AccessDenied(format!(
                "{} is not the author of \"{}\"",
                actor.username, post.title
            )))
        }
    }

    /// Fail if another post already uses this title or its slug
    fn ensure_unique_title(&self, title: &str, except: Option<&PostId>) -> Result<()> {
        let is_other = |post: &Post| Some(&post.id) != except;
        let taken = self.storage.find_post_by_title(title)?.filter(is_other).is_some()
            || self
                .storage
                .find_post_by_slug(&Slug::from_title(title))?
                .filter(is_other)
                .is_some();

        if taken {
            return Err(BlogError::DuplicateTitle(title.trim().to_string()));
        }
        Ok(())
    }

    /// Posts written by the actor, newest first, including scheduled ones
    pub fn list(&self, actor: &User) -> Result<Vec<PostSummary>> {
        Self::require_admin(actor)?;

        let mut posts: Vec<Post> = self
            .storage
            .list_posts()?
            .into_iter()
            .filter(|p| p.author == actor.username)
            .collect();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        Ok(posts.iter().map(Post::to_summary).collect())
    }

    /// Create a post authored by the actor
    pub fn create(&self, actor: &User, draft: PostDraft) -> Result<Post> {
        Self::require_admin(actor)?;
        PostValidator::new().validate(&draft.title, &draft.summary, &draft.content, &draft.tags)?;
        self.ensure_unique_title(&draft.title, None)?;

        let mut builder = PostBuilder::new(actor.username.clone())
            .title(draft.title)
            .summary(draft.summary)
            .content(draft.content)
            .tags(draft.tags);
        if let Some(published_at) = draft.published_at {
            builder = builder.published_at(published_at);
        }
        let post = builder.build()?;

        self.storage.save_post(&post)?;
        info!(post = %post.slug, author = %actor.username, "Post created");
        Ok(post)
    }

    /// Load one of the actor's posts
    pub fn show(&self, actor: &User, id: &PostId) -> Result<Post> {
        Self::require_admin(actor)?;
        let post = self.storage.load_post(id)?;
        Self::require_author(actor, &post)?;
        Ok(post)
    }

    /// Apply changes to one of the actor's posts
    pub fn update(&self, actor: &User, id: &PostId, changes: PostChanges) -> Result<Post> {
        let mut post = self.show(actor, id)?;

        if let Some(title) = &changes.title {
            self.ensure_unique_title(title, Some(id))?;
        }

        let title = changes.title.unwrap_or_else(|| post.title.clone());
        let summary = changes.summary.unwrap_or_else(|| post.summary.clone());
        let content = changes.content.unwrap_or_else(|| post.content.clone());
        let tags = changes.tags.unwrap_or_else(|| post.tags.clone());
        PostValidator::new().validate(&title, &summary, &content, &tags)?;

        post.set_title(title.trim());
        post.summary = summary.trim().to_string();
        post.content = content;
        post.tags = tags.into_iter().map(|t| t.trim().to_string()).collect();
        if let Some(published_at) = changes.published_at {
            post.published_at = published_at;
        }

        self.storage.save_post(&post)?;
        info!(post = %post.slug, "Post updated");
        Ok(post)
    }

    /// Delete one of the actor's posts with its comments
    pub fn delete(&self, actor: &User, id: &PostId) -> Result<Post> {
        let post = self.show(actor, id)?;
        self.storage.delete_post(id)?;
        info!(post = %post.slug, comments = post.comment_count(), "Post deleted");
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::types::Username;
    use crate::user::Role;

    fn lea() -> User {
        User::new(Username("lea".to_string()), "Léa Dupont", "lea@blog.test").with_role(Role::Admin)
    }

    fn jane() -> User {
        User::new(Username("jane".to_string()), "Jane Admin", "jane@blog.test").with_role(Role::Admin)
    }

    fn bruno() -> User {
        User::new(Username("bruno".to_string()), "Bruno Martin", "bruno@blog.test")
    }

    fn draft(title: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            summary: "Summary".to_string(),
            content: "Some long enough content".to_string(),
            tags: vec!["rust".to_string()],
            published_at: None,
        }
    }

    fn create_service() -> AdminService {
        AdminService::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_regular_user_denied() {
        let service = create_service();
        let post = service.create(&lea(), draft("Hello")).unwrap();

        assert!(matches!(service.list(&bruno()), Err(BlogError::AccessDenied(_))));
        assert!(matches!(service.show(&bruno(), &post.id), Err(BlogError::AccessDenied(_))));
        assert!(matches!(
            service.update(&bruno(), &post.id, PostChanges::default()),
            Err(BlogError::AccessDenied(_))
        ));
        assert!(matches!(service.delete(&bruno(), &post.id), Err(BlogError::AccessDenied(_))));
        assert!(matches!(
            service.create(&bruno(), draft("Other")),
            Err(BlogError::AccessDenied(_))
        ));
    }

    #[test]
    fn test_create_and_list() {
        let service = create_service();
        let post = service.create(&lea(), draft("Blog Post Title")).unwrap();

        assert_eq!(post.slug.as_str(), "blog-post-title");
        assert_eq!(post.author, lea().username);

        let listed = service.list(&lea()).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, post.id);
        assert!(service.list(&jane()).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let service = create_service();
        service.create(&lea(), draft("Blog Post Title")).unwrap();

        assert!(matches!(
            service.create(&lea(), draft("blog post title")),
            Err(BlogError::DuplicateTitle(_))
        ));
        assert!(matches!(
            service.create(&jane(), draft("Blog post title!")),
            Err(BlogError::DuplicateTitle(_))
        ));
    }

    #[test]
    fn test_accented_and_non_latin_titles() {
        let service = create_service();

        let paris = service.create(&lea(), draft("Été à Paris")).unwrap();
        assert_eq!(paris.slug.as_str(), "ete-a-paris");

        let first = service.create(&lea(), draft("日本語")).unwrap();
        let second = service.create(&lea(), draft("中文の記事")).unwrap();
        assert!(!first.slug.is_empty());
        assert_ne!(first.slug, second.slug);

        assert!(matches!(
            service.create(&lea(), draft("?! ...")),
            Err(BlogError::Validation(_))
        ));
    }

    #[test]
    fn test_update() {
        let service = create_service();
        let post = service.create(&lea(), draft("Original")).unwrap();
        service.create(&lea(), draft("Taken")).unwrap();

        let changes = PostChanges {
            title: Some("New Title".to_string()),
            ..Default::default()
        };
        let updated = service.update(&lea(), &post.id, changes).unwrap();
        assert_eq!(updated.title, "New Title");
        assert_eq!(updated.slug.as_str(), "new-title");
        assert_eq!(updated.summary, "Summary");

        // Keeping its own title is not a conflict
        let same = PostChanges {
            title: Some("New Title".to_string()),
            ..Default::default()
        };
        assert!(service.update(&lea(), &post.id, same).is_ok());

        let clash = PostChanges {
            title: Some("Taken".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            service.update(&lea(), &post.id, clash),
            Err(BlogError::DuplicateTitle(_))
        ));
    }

    #[test]
    fn test_update_validates() {
        let service = create_service();
        let post = service.create(&lea(), draft("Original")).unwrap();

        let changes = PostChanges {
            content: Some("short".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            service.update(&lea(), &post.id, changes),
            Err(BlogError::Validation(_))
        ));
    }

    #[test]
    fn test_only_author_edits() {
        let service = create_service();
        let post = service.create(&lea(), draft("Hello")).unwrap();

        assert!(matches!(service.show(&jane(), &post.id), Err(BlogError::AccessDenied(_))));
        assert!(matches!(service.delete(&jane(), &post.id), Err(BlogError::AccessDenied(_))));
    }

    #[test]
    fn test_delete() {
        let service = create_service();
        let post = service.create(&lea(), draft("Hello")).unwrap();

        service.delete(&lea(), &post.id).unwrap();
        assert!(matches!(service.show(&lea(), &post.id), Err(BlogError::PostNotFound(_))));
    }

    #[test]
    fn test_post_changes_is_empty() {
        assert!(PostChanges::default().is_empty());
        let changes = PostChanges {
            tags: Some(vec![]),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
