//! Application services
//!
//! Services receive their collaborators (storage, paginator, event channel)
//! through their constructors.

mod account;
mod admin;
mod blog;

pub use account::{AccountService, ProfileChanges};
pub use admin::{AdminService, PostChanges, PostDraft};
pub use blog::BlogService;
