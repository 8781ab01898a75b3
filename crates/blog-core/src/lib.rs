//! blog-core - Core library for blogline
//!
//! This crate provides the business logic of the blog: posts and comments,
//! the comment-created event channel, pagination of listings, notification
//! of post authors, and the services tying them to a storage backend.

pub mod config;
pub mod error;
pub mod event;
pub mod notification;
pub mod pagination;
pub mod post;
pub mod service;
pub mod storage;
pub mod types;
pub mod user;

pub use error::{BlogError, Result};
pub use types::*;
