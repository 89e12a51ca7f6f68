//! Query-parameter paging for list endpoints.
//!
//! DESIGN
//! ======
//! Raw query values are signed so `page=0` or `page=-3` reach validation and
//! come back as `422` rather than a generic extractor rejection. Slicing uses
//! the same window arithmetic as the front-end grid.

#[cfg(test)]
#[path = "paging_test.rs"]
mod paging_test;

use std::num::NonZeroUsize;

use client::state::pagination::{page_slice, total_pages};
use serde::Serialize;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 20;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PagingError {
    #[error("page must be at least 1, got {0}")]
    InvalidPage(i64),
    #[error("limit must be between 1 and {max}, got {0}", max = MAX_LIMIT)]
    InvalidLimit(i64),
}

/// Validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: NonZeroUsize,
    pub limit: NonZeroUsize,
}

impl PageRequest {
    /// Validate raw `page`/`limit` values; missing values take the defaults.
    pub fn parse(page: Option<i64>, limit: Option<i64>) -> Result<Self, PagingError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        let page = usize::try_from(page)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(PagingError::InvalidPage(page))?;
        let limit_value = usize::try_from(limit)
            .ok()
            .and_then(NonZeroUsize::new)
            .filter(|_| limit <= MAX_LIMIT)
            .ok_or(PagingError::InvalidLimit(limit))?;
        Ok(Self { page, limit: limit_value })
    }
}

/// One page of a filtered list, in the API's envelope shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageOf<T> {
    pub data: Vec<T>,
    pub page: usize,
    pub limit: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> PageOf<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageOf<U> {
        PageOf {
            data: self.data.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// Cut `items` down to the requested page. A page past the end is empty.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> PageOf<T> {
    PageOf {
        data: page_slice(items, request.page.get(), request.limit).to_vec(),
        page: request.page.get(),
        limit: request.limit.get(),
        total_items: items.len(),
        total_pages: total_pages(items.len(), request.limit),
    }
}
