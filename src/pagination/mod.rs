//! Pagination module
//!
//! Turns a cursor-paginated listing endpoint into one forward-only sequence
//! of records.
//!
//! # Overview
//!
//! Listing endpoints take `limit` (and, after the first page, `offset`) and
//! answer with `{"data": [...], "next": <cursor>}`. The [`Paginator`] buffers
//! one page at a time and requests the next page only when the buffer runs
//! dry. It stops for good on the first page with no data or no `next`.

mod paginator;
mod types;

pub use paginator::Paginator;
pub use types::{
    clamp_page_size, Cursor, PageEnvelope, PageRequest, PaginationState, CURSOR_PARAM,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
