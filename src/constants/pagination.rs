//! Pagination bounds for the goal listing endpoint.

/// Page size used when the client does not send `per_page`.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Upper bound on `per_page`.
pub const MAX_PAGE_SIZE: u64 = 100;

/// First page; pages are 1-based.
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Highest page a client can ask for. Keeps `(page - 1) * per_page` well
/// inside MongoDB's signed 64-bit skip.
pub const MAX_PAGE_NUMBER: u64 = 1_000_000;
