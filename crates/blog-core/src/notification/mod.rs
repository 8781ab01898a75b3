//! Outgoing notifications
//!
//! Mail transport abstraction plus the subscriber that tells post authors
//! about new comments.

mod mailer;
mod subscriber;

pub use mailer::{Email, LogMailer, Mailer, MemoryMailer};
pub use subscriber::CommentNotificationSubscriber;
