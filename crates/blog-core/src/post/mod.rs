//! Posts and comments
//!
//! Data model, builders and validation for blog posts and the comments
//! left on them.

pub mod builder;
pub mod model;
pub mod validator;

pub use builder::PostBuilder;
pub use model::*;
pub use validator::{CommentValidator, PostValidator};
