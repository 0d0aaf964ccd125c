//! Transaction routes - Transaction list, pagination
//!
//! Features:
//! - List transactions with pagination
//! - HTMX partial page updates
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{api_transaction_detail, api_transactions, htmx_transactions_list};
pub use page::page_transactions;
