//! Route modules for the API server
//!
//! All routes are organized into modules for better maintainability:
//! - search: The search box - query dispatch, result table, chart
//! - transactions: Transaction list, pagination
//! - customers: Customer list, lookup, per-day totals
//! - settings: Configuration display
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API endpoints
//! - page.rs: HTMX page rendering

pub mod customers;
pub mod search;
pub mod settings;
pub mod transactions;
