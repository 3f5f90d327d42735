//! Pagination utilities for movie listings
//!
//! Pages are 0-indexed, matching the web client.

/// Page size used when the client does not ask for one
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest page a client may request
pub const MAX_PAGE_SIZE: i64 = 100;

/// Pagination metadata calculated from total results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number (0-indexed)
    pub page: i64,
    /// Rows per page after clamping
    pub size: i64,
    /// Total number of pages
    pub total_pages: i64,
    /// Offset for SQL LIMIT/OFFSET query
    pub offset: i64,
}

impl Pagination {
    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages - 1
    }
}

/// Calculate pagination metadata from total results and the requested page
///
/// The size is clamped to `1..=MAX_PAGE_SIZE` and the page to
/// `[0, total_pages - 1]`.
///
/// # Examples
/// ```
/// use razzie_api::pagination::calculate_pagination;
///
/// // 25 results at 10 per page = 3 pages (10 + 10 + 5)
/// let p = calculate_pagination(25, 1, 10);
/// assert_eq!(p.page, 1);
/// assert_eq!(p.total_pages, 3);
/// assert_eq!(p.offset, 10);
///
/// // Requesting out-of-bounds page gets clamped
/// let p = calculate_pagination(25, 99, 10);
/// assert_eq!(p.page, 2);
/// assert_eq!(p.offset, 20);
/// ```
pub fn calculate_pagination(total_results: i64, requested_page: i64, requested_size: i64) -> Pagination {
    let size = requested_size.clamp(1, MAX_PAGE_SIZE);
    let total_pages = (total_results.max(0) + size - 1) / size;
    let page = requested_page.min(total_pages - 1).max(0);
    let offset = page * size;

    Pagination {
        page,
        size,
        total_pages,
        offset,
    }
}
