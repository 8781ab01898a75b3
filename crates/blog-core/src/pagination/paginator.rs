//! Page window computation

use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::ops::Range;

/// Number of items per page unless configured otherwise
pub const PAGE_SIZE: usize = 10;

const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(PAGE_SIZE) {
    Some(size) => size,
    None => panic!("PAGE_SIZE must be positive"),
};

/// Computes page windows for a fixed page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: NonZeroUsize,
}

impl Paginator {
    /// Create a paginator using [`PAGE_SIZE`]
    pub fn new() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Create a paginator with a custom page size
    pub fn with_page_size(page_size: usize) -> Result<Self> {
        let page_size = NonZeroUsize::new(page_size).ok_or_else(|| {
            BlogError::Config("Page size must be a positive integer".to_string())
        })?;
        Ok(Self { page_size })
    }

    /// Items per page
    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Compute the window for `requested_page` over `total_items` items.
    ///
    /// The page is clamped into `1..=last_page`; an empty collection still
    /// yields a single, empty first page.
    pub fn compute_window(&self, total_items: u64, requested_page: i64) -> PageWindow {
        let page_size = self.page_size.get() as u64;
        let last_page = total_items.div_ceil(page_size).max(1);

        let current_page = if requested_page < 1 {
            1
        } else {
            (requested_page as u64).min(last_page)
        };

        PageWindow {
            offset: (current_page - 1) * page_size,
            limit: page_size,
            current_page,
            last_page,
            has_previous: current_page > 1,
            has_next: current_page < last_page,
            total_items,
        }
    }

    /// Slice an in-memory result set down to the requested page
    pub fn paginate<T>(&self, items: Vec<T>, requested_page: i64) -> Page<T> {
        let window = self.compute_window(items.len() as u64, requested_page);
        let range = window.range();
        let results = items
            .into_iter()
            .skip(range.start)
            .take(range.len())
            .collect();

        Page { results, window }
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

/// A bounded slice of a listing plus navigation metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// Index of the first item on this page
    pub offset: u64,
    /// Maximum number of items on this page
    pub limit: u64,
    /// 1-based page number after clamping
    pub current_page: u64,
    /// Last valid page, at least 1
    pub last_page: u64,
    pub has_previous: bool,
    pub has_next: bool,
    /// Total number of items across all pages
    pub total_items: u64,
}

impl PageWindow {
    /// Previous page number, if any
    pub fn previous_page(&self) -> Option<u64> {
        self.has_previous.then(|| self.current_page - 1)
    }

    /// Next page number, if any
    pub fn next_page(&self) -> Option<u64> {
        self.has_next.then(|| self.current_page + 1)
    }

    /// Whether navigation is needed at all
    pub fn has_to_paginate(&self) -> bool {
        self.last_page > 1
    }

    /// Item indices covered by this page, clipped to the collection size
    pub fn range(&self) -> Range<usize> {
        let start = self.offset.min(self.total_items);
        let end = self.offset.saturating_add(self.limit).min(self.total_items);
        start as usize..end as usize
    }
}

/// Items of one page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(flatten)]
    pub window: PageWindow,
}

impl<T> Page<T> {
    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Check if this page holds no items
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Transform each item, keeping the window
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            results: self.results.into_iter().map(f).collect(),
            window: self.window,
        }
    }
}
