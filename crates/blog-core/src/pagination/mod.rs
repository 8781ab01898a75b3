//! Pagination
//!
//! Translates a total item count and a requested page number into a bounded
//! window for listing queries, plus the metadata needed to render page
//! navigation. Out-of-range page requests are clamped, never rejected.

mod paginator;

pub use paginator::{Page, PageWindow, Paginator, PAGE_SIZE};
