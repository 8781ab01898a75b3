//! Mail the post author when a comment arrives

use super::mailer::{Email, Mailer};
use crate::config::NotificationConfig;
use crate::error::Result;
use crate::event::{CommentCreatedEvent, CommentCreatedSubscriber};
use crate::storage::BlogStorage;
use std::sync::Arc;
use tracing::debug;

/// Sends "your post received a comment" emails
pub struct CommentNotificationSubscriber {
    storage: Arc<dyn BlogStorage>,
    mailer: Arc<dyn Mailer>,
    sender: String,
    base_url: String,
}

impl CommentNotificationSubscriber {
    pub fn new(
        storage: Arc<dyn BlogStorage>,
        mailer: Arc<dyn Mailer>,
        config: &NotificationConfig,
    ) -> Self {
        Self {
            storage,
            mailer,
            sender: config.sender.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn compose(&self, event: &CommentCreatedEvent<'_>) -> Result<Email> {
        let comment = event.comment();
        let post = self.storage.load_post(&comment.post_id)?;
        let author = self.storage.load_user(&post.author)?;

        let link = format!(
            "{}/posts/{}#comment_{}",
            self.base_url, post.slug, comment.id
        );

        Ok(Email {
            from: self.sender.clone(),
            to: author.email,
            subject: "Your post received a comment!".to_string(),
            body: format!(
                "{} commented on your post \"{}\".\n\nRead the comment: {}\n",
                comment.author, post.title, link
            ),
        })
    }
}

impl CommentCreatedSubscriber for CommentNotificationSubscriber {
    fn name(&self) -> &str {
        "comment-notification"
    }

    fn on_comment_created(&self, event: &CommentCreatedEvent<'_>) -> Result<()> {
        let email = self.compose(event)?;
        debug!(to = %email.to, "Notifying post author of new comment");
        self.mailer.send(&email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::MemoryMailer;
    use crate::post::{Comment, PostBuilder};
    use crate::storage::MemoryStorage;
    use crate::types::Username;
    use crate::user::User;

    fn setup() -> (Arc<MemoryStorage>, Arc<MemoryMailer>, CommentNotificationSubscriber) {
        let storage = Arc::new(MemoryStorage::new());
        let mailer = Arc::new(MemoryMailer::new());
        let config = NotificationConfig {
            enabled: true,
            sender: "noreply@blog.test".to_string(),
            base_url: "https://blog.test/".to_string(),
            ..Default::default()
        };
        let subscriber = CommentNotificationSubscriber::new(storage.clone(), mailer.clone(), &config);
        (storage, mailer, subscriber)
    }

    #[test]
    fn test_mails_post_author() {
        let (storage, mailer, subscriber) = setup();
        let lea = User::new(Username("lea".to_string()), "Léa Dupont", "lea@blog.test");
        storage.save_user(&lea).unwrap();

        let post = PostBuilder::new(lea.username.clone())
            .title("Hello World")
            .summary("Summary")
            .content("Some long enough content")
            .build()
            .unwrap();
        storage.save_post(&post).unwrap();

        let comment = Comment::new(post.id.clone(), Username("bruno".to_string()), "Bravo !");
        subscriber
            .on_comment_created(&CommentCreatedEvent::new(&comment))
            .unwrap();

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "lea@blog.test");
        assert_eq!(sent[0].from, "noreply@blog.test");
        assert!(sent[0].body.contains("Hello World"));
        assert!(sent[0]
            .body
            .contains(&format!("https://blog.test/posts/hello-world#comment_{}", comment.id)));
    }

    #[test]
    fn test_missing_post_is_an_error() {
        let (_storage, mailer, subscriber) = setup();
        let comment = Comment::new(
            crate::types::PostId::new(),
            Username("bruno".to_string()),
            "Bravo !",
        );

        assert!(subscriber
            .on_comment_created(&CommentCreatedEvent::new(&comment))
            .is_err());
        assert!(mailer.sent().is_empty());
    }
}
