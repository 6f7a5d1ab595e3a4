//! Pagination request/response types.

use serde::{Deserialize, Serialize};

/// A page request with 1-based page number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl PageRequest {
    /// SQL LIMIT for this request, capped at 100.
    pub fn limit(&self) -> u32 {
        self.page_size.clamp(1, 100)
    }

    /// SQL OFFSET for this request.
    pub fn offset(&self) -> u32 {
        (self.page.max(1) - 1) * self.limit()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

/// A page of results with totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
    /// Total matching items.
    pub total: u64,
}

impl<T> PageResponse<T> {
    /// Assemble a page of results.
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total: u64) -> Self {
        Self {
            items,
            page,
            page_size,
            total,
        }
    }
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_based() {
        let page = PageRequest { page: 3, page_size: 20 };
        assert_eq!(page.offset(), 40);
        assert_eq!(page.limit(), 20);
    }

    #[test]
    fn page_size_is_capped() {
        let page = PageRequest { page: 1, page_size: 500 };
        assert_eq!(page.limit(), 100);
    }
}
