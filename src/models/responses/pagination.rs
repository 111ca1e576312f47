//! Pagination response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_NUMBER, MAX_PAGE_SIZE};
use crate::models::GoalResponse;

/// Paginated list response
#[derive(Debug, Serialize, ToSchema)]
#[aliases(PaginatedGoalResponse = PaginatedResponse<GoalResponse>)]
pub struct PaginatedResponse<T: Serialize> {
    /// Whether the request was successful
    pub success: bool,
    /// List of items
    pub data: Vec<T>,
    /// Total number of items
    pub total: u64,
    /// Current page number
    pub page: u64,
    /// Items per page
    pub per_page: u64,
    /// Total number of pages
    pub total_pages: u64,
}

impl<T: Serialize> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        Self {
            success: true,
            data,
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page.max(1)),
        }
    }
}

/// Clamp client-supplied paging to `1 <= page <= MAX_PAGE_NUMBER` and
/// `1 <= per_page <= MAX_PAGE_SIZE`.
pub fn normalize_paging(page: Option<u64>, per_page: Option<u64>) -> (u64, u64) {
    let page = page.unwrap_or(DEFAULT_PAGE_NUMBER).clamp(1, MAX_PAGE_NUMBER);
    let per_page = per_page.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    (page, per_page)
}
