//! blog-storage - Storage library for blogline
//!
//! This crate provides the file-system implementation of
//! [`blog_core::storage::BlogStorage`].

mod fs_store;

pub use fs_store::FileSystemStorage;
