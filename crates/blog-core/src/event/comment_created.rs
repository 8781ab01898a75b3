//! The comment-created event and its subscriber capability

use crate::error::Result;
use crate::post::Comment;

/// Raised after a comment has been persisted
#[derive(Debug, Clone, Copy)]
pub struct CommentCreatedEvent<'a> {
    comment: &'a Comment,
}

impl<'a> CommentCreatedEvent<'a> {
    pub fn new(comment: &'a Comment) -> Self {
        Self { comment }
    }

    /// The comment that was created
    pub fn comment(&self) -> &'a Comment {
        self.comment
    }
}

/// Something that reacts to new comments.
///
/// Handlers must not assume they are the only or the first subscriber.
pub trait CommentCreatedSubscriber: Send + Sync {
    /// Name used in logs and error reports
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Handle one event
    fn on_comment_created(&self, event: &CommentCreatedEvent<'_>) -> Result<()>;
}

impl<F> CommentCreatedSubscriber for F
where
    F: Fn(&CommentCreatedEvent<'_>) -> Result<()> + Send + Sync,
{
    fn name(&self) -> &str {
        "closure"
    }

    fn on_comment_created(&self, event: &CommentCreatedEvent<'_>) -> Result<()> {
        self(event)
    }
}
