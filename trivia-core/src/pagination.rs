//! Offset pagination over already-fetched, ordered results

use std::num::IntErrorKind;

use crate::error::{Result, TriviaError};

/// Questions per page on listing endpoints
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Coerce an untrusted `page` value to a page number.
///
/// Missing or non-numeric input falls back to page 1. Zero and negative
/// numbers are passed through; [`paginate`] turns them into an empty window.
/// Integers outside `i64` saturate, so they still land past the end.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(parse_integer).unwrap_or(1)
}

fn parse_integer(raw: &str) -> Option<i64> {
    let text = raw.trim();
    match text.parse::<i64>() {
        Ok(page) => Some(page),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Return `items[(page-1)*page_size .. min(page*page_size, len)]`.
///
/// The window is computed with saturating arithmetic and clamped to
/// `[0, len]`, so any page number is safe. Pages starting at or past the end
/// yield an empty slice.
pub fn paginate<T>(items: &[T], page: i64, page_size: usize) -> &[T] {
    let len = i64::try_from(items.len()).unwrap_or(i64::MAX);
    let size = i64::try_from(page_size).unwrap_or(i64::MAX);

    let start = page.saturating_sub(1).saturating_mul(size).clamp(0, len);
    let end = page.saturating_mul(size).clamp(0, len);

    // Both bounds are clamped into [0, len], which fits in usize
    let (start, end) = (start as usize, end as usize);
    &items[start..end.max(start)]
}

/// Number of pages needed for `total` items; zero for an empty set.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}

/// One page window plus the size of the full result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items for the requested page
    pub items: &'a [T],
    /// Requested page number (as given, not clamped)
    pub page: i64,
    /// Total count across all pages
    pub total: usize,
}

impl<'a, T> Page<'a, T> {
    /// Cut the page window out of `items`.
    pub fn new(items: &'a [T], page: i64, page_size: usize) -> Self {
        Self {
            items: paginate(items, page, page_size),
            page,
            total: items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when there is data but the window holds none of it.
    pub fn past_end(&self) -> bool {
        self.items.is_empty() && self.total > 0
    }

    /// Treat an empty window as "not found".
    pub fn require_items(self) -> Result<Self> {
        if self.items.is_empty() {
            return Err(TriviaError::not_found("page", self.page));
        }
        Ok(self)
    }
}
