//! Pagination

use serde::{Deserialize, Serialize};

/// One page of a list resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// Items across all pages.
    pub total: u64,
    /// 1-based page number.
    pub page: u32,
    /// Page size requested.
    pub limit: u32,
    /// Number of pages.
    pub total_pages: u32,
}

/// Backend pagination block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// Items across all pages.
    pub total: u64,
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub per_page: u32,
    /// Number of pages.
    pub total_pages: u32,
}

/// Backend list envelope: `{ data, pagination }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// Page metadata.
    pub pagination: Pagination,
}

impl<T> From<ListEnvelope<T>> for PaginatedResponse<T> {
    fn from(envelope: ListEnvelope<T>) -> Self {
        let ListEnvelope { data, pagination } = envelope;

        Self {
            data,
            total: pagination.total,
            page: pagination.page,
            limit: pagination.per_page,
            total_pages: pagination.total_pages,
        }
    }
}

impl<T> PaginatedResponse<T> {
    /// `ceil(total / limit)`, or zero when `limit` is zero.
    pub fn expected_total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }

        self.total.div_ceil(u64::from(self.limit))
    }

    /// Whether the page respects its own limit and page count.
    pub fn is_consistent(&self) -> bool {
        let within_limit = u64::try_from(self.data.len())
            .is_ok_and(|len| self.limit == 0 || len <= u64::from(self.limit));

        within_limit && u64::from(self.total_pages) == self.expected_total_pages()
    }

    /// Whether a later page exists.
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Convert the items while keeping the page metadata.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PaginatedResponse<U> {
        PaginatedResponse {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn flattens_backend_envelope() -> TestResult {
        let envelope: ListEnvelope<u32> = serde_json::from_value(json!({
            "data": [1, 2, 3],
            "pagination": { "total": 23, "page": 2, "per_page": 10, "total_pages": 3 }
        }))?;

        let page = PaginatedResponse::from(envelope);

        assert_eq!(page.data, vec![1, 2, 3]);
        assert_eq!(page.total, 23);
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 10);
        assert_eq!(page.total_pages, 3);
        assert!(page.is_consistent());
        assert!(page.has_next_page());

        Ok(())
    }

    #[test]
    fn detects_inconsistent_page_counts() {
        let page = PaginatedResponse {
            data: vec![1, 2],
            total: 20,
            page: 1,
            limit: 10,
            total_pages: 3,
        };

        assert_eq!(page.expected_total_pages(), 2);
        assert!(!page.is_consistent());
    }

    #[test]
    fn detects_oversized_pages() {
        let page = PaginatedResponse {
            data: vec![1, 2, 3],
            total: 3,
            page: 1,
            limit: 2,
            total_pages: 2,
        };

        assert!(!page.is_consistent());
    }

    #[test]
    fn zero_limit_expects_zero_pages() {
        let page: PaginatedResponse<u32> = PaginatedResponse {
            data: Vec::new(),
            total: 0,
            page: 1,
            limit: 0,
            total_pages: 0,
        };

        assert_eq!(page.expected_total_pages(), 0);
        assert!(page.is_consistent());
        assert!(!page.has_next_page());
    }

    #[test]
    fn map_keeps_metadata() {
        let page = PaginatedResponse {
            data: vec![1, 2],
            total: 2,
            page: 1,
            limit: 10,
            total_pages: 1,
        };

        let mapped = page.map(|n| n * 10);

        assert_eq!(mapped.data, vec![10, 20]);
        assert_eq!(mapped.limit, 10);
    }
}
