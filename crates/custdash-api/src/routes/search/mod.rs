//! Search routes - Query dispatch, result table, chart payload
//!
//! One free-text input drives everything: numeric input searches
//! transaction amounts by substring, text input searches customer names
//! by prefix (and charts the matched customer), empty input lists all.
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Result table and chart fragment rendering

pub mod api;
pub mod page;

pub use api::{api_search, htmx_search_results};
