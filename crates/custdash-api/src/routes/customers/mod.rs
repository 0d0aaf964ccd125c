//! Customer routes - Customer list, lookup, per-day totals
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{api_customer_daily_totals, api_customer_detail, api_customers, htmx_customers_list};
pub use page::page_customers;
