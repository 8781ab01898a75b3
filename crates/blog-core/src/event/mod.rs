//! Comment-created event channel
//!
//! The comment write path publishes a [`CommentCreatedEvent`] once the
//! comment is persisted. Subscribers registered on the [`EventChannel`]
//! receive it synchronously, in registration order, and the publisher does
//! not know who (if anyone) reacts.
//!
//! # Example
//!
//! ```ignore
//! use blog_core::event::{CommentCreatedEvent, EventChannel};
//!
//! let mut channel = EventChannel::new();
//! channel.subscribe(|event: &CommentCreatedEvent<'_>| {
//!     tracing::info!("new comment {}", event.comment().id);
//!     Ok(())
//! });
//!
//! channel.publish(&CommentCreatedEvent::new(&comment))?;
//! ```

mod channel;
mod comment_created;

pub use channel::{DispatchPolicy, EventChannel};
pub use comment_created::{CommentCreatedEvent, CommentCreatedSubscriber};
