//! Synchronous, ordered event dispatch

use super::comment_created::{CommentCreatedEvent, CommentCreatedSubscriber};
use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What happens when a subscriber fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchPolicy {
    /// Abort delivery and hand the error back to the publisher
    #[default]
    StopOnError,
    /// Log the failure and keep delivering
    Isolate,
}

/// Ordered list of comment-created subscribers
pub struct EventChannel {
    subscribers: Vec<Box<dyn CommentCreatedSubscriber>>,
    policy: DispatchPolicy,
}

impl EventChannel {
    /// Create a channel with no subscribers and [`DispatchPolicy::StopOnError`]
    pub fn new() -> Self {
        Self::with_policy(DispatchPolicy::default())
    }

    /// Create a channel with an explicit failure policy
    pub fn with_policy(policy: DispatchPolicy) -> Self {
        Self {
            subscribers: Vec::new(),
            policy,
        }
    }

    /// Register a subscriber; delivery follows registration order
    pub fn subscribe(&mut self, subscriber: impl CommentCreatedSubscriber + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Deliver `event` to every subscriber on the calling thread.
    ///
    /// Returns once all handlers have run. Under `StopOnError` the first
    /// failure ends delivery and is returned.
    pub fn publish(&self, event: &CommentCreatedEvent<'_>) -> Result<()> {
        debug!(
            comment = %event.comment().id,
            subscribers = self.subscribers.len(),
            "Publishing comment-created event"
        );

        for subscriber in &self.subscribers {
            if let Err(err) = subscriber.on_comment_created(event) {
                match self.policy {
                    DispatchPolicy::StopOnError => {
                        return Err(BlogError::Subscriber {
                            subscriber: subscriber.name().to_string(),
                            message: err.to_string(),
                        });
                    }
                    DispatchPolicy::Isolate => {
                        warn!(
                            subscriber = subscriber.name(),
                            "Comment-created handler failed: {}", err
                        );
                    }
                }
            }
        }

        Ok(())
    }

    /// The failure policy
    pub fn policy(&self) -> DispatchPolicy {
        self.policy
    }

    /// Number of registered subscribers
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Check if no subscriber is registered
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl Default for EventChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventChannel")
            .field(
                "subscribers",
                &self.subscribers.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .field("policy", &self.policy)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::Comment;
    use crate::types::{CommentId, PostId, Username};
    use std::sync::{Arc, Mutex};

    fn create_test_comment() -> Comment {
        Comment::new(PostId::new(), Username("bruno".to_string()), "Bravo !")
    }

    /// Records which subscriber saw which comment
    fn recorder(
        label: &'static str,
        log: Arc<Mutex<Vec<(&'static str, CommentId)>>>,
    ) -> impl Fn(&CommentCreatedEvent<'_>) -> Result<()> + Send + Sync {
        move |event| {
            log.lock().unwrap().push((label, event.comment().id.clone()));
            Ok(())
        }
    }

    fn failing(_: &CommentCreatedEvent<'_>) -> Result<()> {
        Err(BlogError::Mail("smtp unavailable".to_string()))
    }

    #[test]
    fn test_publish_without_subscribers() {
        let channel = EventChannel::new();
        let comment = create_test_comment();

        assert!(channel.is_empty());
        assert!(channel.publish(&CommentCreatedEvent::new(&comment)).is_ok());
    }

    #[test]
    fn test_publish_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut channel = EventChannel::new();
        channel.subscribe(recorder("first", log.clone()));
        channel.subscribe(recorder("second", log.clone()));

        let comment = create_test_comment();
        channel.publish(&CommentCreatedEvent::new(&comment)).unwrap();

        let log = log.lock().unwrap();
        assert_eq!(
            *log,
            vec![("first", comment.id.clone()), ("second", comment.id.clone())]
        );
    }

    #[test]
    fn test_subscribers_see_the_same_comment() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut channel = EventChannel::new();
        for _ in 0..2 {
            let seen = seen.clone();
            channel.subscribe(move |event: &CommentCreatedEvent<'_>| {
                seen.lock()
                    .unwrap()
                    .push(event.comment() as *const Comment as usize);
                Ok(())
            });
        }

        let comment = create_test_comment();
        channel.publish(&CommentCreatedEvent::new(&comment)).unwrap();

        let expected = &comment as *const Comment as usize;
        assert_eq!(*seen.lock().unwrap(), vec![expected, expected]);
    }

    #[test]
    fn test_stop_on_error_skips_remaining() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut channel = EventChannel::new();
        channel.subscribe(recorder("first", log.clone()));
        channel.subscribe(failing);
        channel.subscribe(recorder("third", log.clone()));

        let comment = create_test_comment();
        let result = channel.publish(&CommentCreatedEvent::new(&comment));

        assert!(matches!(result, Err(BlogError::Subscriber { .. })));
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_isolate_keeps_delivering() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut channel = EventChannel::with_policy(DispatchPolicy::Isolate);
        channel.subscribe(failing);
        channel.subscribe(recorder("second", log.clone()));

        let comment = create_test_comment();
        assert!(channel.publish(&CommentCreatedEvent::new(&comment)).is_ok());
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_debug_lists_subscriber_names() {
        let mut channel = EventChannel::new();
        channel.subscribe(failing);
        let debug = format!("{:?}", channel);
        assert!(debug.contains("closure"));
        assert_eq!(channel.len(), 1);
    }
}
