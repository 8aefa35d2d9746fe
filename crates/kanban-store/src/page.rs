//! # Pagination Types
//!
//! Zero-based page requests and the page envelope returned by list
//! endpoints: `content`, `page`, `size`, `total_elements`, `total_pages`.

use serde::{Deserialize, Serialize};

/// Default page size when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound on a single page; larger requests are clamped.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: u32,
    /// Requested page size, always in `1..=MAX_PAGE_SIZE`.
    pub size: u32,
}

impl PageRequest {
    /// Build a request, clamping the size into `1..=MAX_PAGE_SIZE`.
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Offset of the first element of this page.
    pub fn offset(&self) -> usize {
        self.page as usize * self.size as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results plus totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The elements of this page, in repository order.
    pub content: Vec<T>,
    /// Zero-based page index this content corresponds to.
    pub page: u32,
    /// Page size the content was cut with.
    pub size: u32,
    /// Total number of elements across all pages.
    pub total_elements: u64,
    /// Total number of pages at this size.
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Cut a page out of a fully materialized, already ordered collection.
    pub fn from_slice(all: &[T], request: PageRequest) -> Self
    where
        T: Clone,
    {
        let total_elements = all.len() as u64;
        let content = all
            .iter()
            .skip(request.offset())
            .take(request.size as usize)
            .cloned()
            .collect();
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages: total_elements.div_ceil(request.size as u64),
        }
    }

    /// Map the content, keeping the paging envelope.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}
