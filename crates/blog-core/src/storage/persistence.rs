//! Storage trait and in-memory implementation

use crate::error::Result;
use crate::post::Post;
use crate::types::{PostId, Slug, Username};
use crate::user::User;

/// Trait for blog storage implementations
pub trait BlogStorage: Send + Sync {
    /// Insert or replace a post
    fn save_post(&self, post: &Post) -> Result<()>;

    /// Load a post by ID
    fn load_post(&self, id: &PostId) -> Result<Post>;

    /// List all posts, in no particular order
    fn list_posts(&self) -> Result<Vec<Post>>;

    /// Delete a post and its comments
    fn delete_post(&self, id: &PostId) -> Result<()>;

    /// Insert or replace a user
    fn save_user(&self, user: &User) -> Result<()>;

    /// Load a user by username
    fn load_user(&self, username: &Username) -> Result<User>;

    /// List all users
    fn list_users(&self) -> Result<Vec<User>>;

    /// Find a post by slug
    fn find_post_by_slug(&self, slug: &Slug) -> Result<Option<Post>> {
        Ok(self.list_posts()?.into_iter().find(|p| &p.slug == slug))
    }

    /// Find a post by title, ignoring case
    fn find_post_by_title(&self, title: &str) -> Result<Option<Post>> {
        let title = title.trim().to_lowercase();
        Ok(self
            .list_posts()?
            .into_iter()
            .find(|p| p.title.to_lowercase() == title))
    }
}

/// In-memory storage for testing
#[cfg(test)]
pub mod memory {
    use super::*;
    use crate::BlogError;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// In-memory blog storage for testing
    pub struct MemoryStorage {
        posts: RwLock<HashMap<PostId, Post>>,
        users: RwLock<HashMap<Username, User>>,
    }

    impl MemoryStorage {
        /// Create a new in-memory storage
        pub fn new() -> Self {
            Self {
                posts: RwLock::new(HashMap::new()),
                users: RwLock::new(HashMap::new()),
            }
        }
    }

    impl Default for MemoryStorage {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BlogStorage for MemoryStorage {
        fn save_post(&self, post: &Post) -> Result<()> {
            let mut posts = self.posts.write().unwrap();
            posts.insert(post.id.clone(), post.clone());
            Ok(())
        }

        fn load_post(&self, id: &PostId) -> Result<Post> {
            let posts = self.posts.read().unwrap();
            posts
                .get(id)
                .cloned()
                .ok_or_else(|| BlogError::PostNotFound(id.to_string()))
        }

        fn list_posts(&self) -> Result<Vec<Post>> {
            let posts = self.posts.read().unwrap();
            Ok(posts.values().cloned().collect())
        }

        fn delete_post(&self, id: &PostId) -> Result<()> {
            let mut posts = self.posts.write().unwrap();
            posts
                .remove(id)
                .ok_or_else(|| BlogError::PostNotFound(id.to_string()))?;
            Ok(())
        }

        fn save_user(&self, user: &User) -> Result<()> {
            let mut users = self.users.write().unwrap();
            users.insert(user.username.clone(), user.clone());
            Ok(())
        }

        fn load_user(&self, username: &Username) -> Result<User> {
            let users = self.users.read().unwrap();
            users
                .get(username)
                .cloned()
                .ok_or_else(|| BlogError::UserNotFound(username.to_string()))
        }

        fn list_users(&self) -> Result<Vec<User>> {
            let users = self.users.read().unwrap();
            Ok(users.values().cloned().collect())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::post::PostBuilder;

        fn create_test_post(title: &str) -> Post {
            PostBuilder::new(Username("lea".to_string()))
                .title(title)
                .summary("Summary")
                .content("Some long enough content")
                .build()
                .unwrap()
        }

        #[test]
        fn test_memory_storage_save_load() {
            let storage = MemoryStorage::new();
            let post = create_test_post("First");
            let id = post.id.clone();

            storage.save_post(&post).unwrap();
            let loaded = storage.load_post(&id).unwrap();

            assert_eq!(loaded.title, "First");
        }

        #[test]
        fn test_memory_storage_delete() {
            let storage = MemoryStorage::new();
            let post = create_test_post("First");
            let id = post.id.clone();

            storage.save_post(&post).unwrap();
            storage.delete_post(&id).unwrap();
            assert!(storage.load_post(&id).is_err());
            assert!(storage.delete_post(&id).is_err());
        }

        #[test]
        fn test_find_by_slug_and_title() {
            let storage = MemoryStorage::new();
            storage.save_post(&create_test_post("Hello World")).unwrap();
            storage.save_post(&create_test_post("Other")).unwrap();

            let found = storage
                .find_post_by_slug(&Slug::from_title("hello world"))
                .unwrap();
            assert_eq!(found.unwrap().title, "Hello World");

            assert!(storage.find_post_by_title("  hello WORLD").unwrap().is_some());
            assert!(storage.find_post_by_title("missing").unwrap().is_none());
        }

        #[test]
        fn test_memory_storage_users() {
            let storage = MemoryStorage::new();
            let user = User::new(Username("lea".to_string()), "Léa", "lea@example.com");

            storage.save_user(&user).unwrap();
            assert_eq!(storage.load_user(&user.username).unwrap(), user);
            assert!(storage.load_user(&Username("nobody".to_string())).is_err());
            assert_eq!(storage.list_users().unwrap().len(), 1);
        }
    }
}
