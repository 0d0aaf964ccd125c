//! Customers API endpoints - JSON API and HTMX partial responses
//!
//! Endpoints:
//! - api_customers: Get customer list (JSON)
//! - api_customer_detail: Lookup customers by id (JSON)
//! - api_customer_daily_totals: Per-day totals for one customer (JSON)
//! - htmx_customers_list: Customer list (HTML fragment)

use crate::{ApiError, AppState};
use custdash_core::Customer;
use custdash_utils::{escape_html, format_amount};

/// Get all customers (JSON API)
pub async fn api_customers(state: axum::extract::State<AppState>) -> String {
    let dataset = state.dataset.read().await;
    serde_json::to_string(dataset.customers()).unwrap_or_default()
}

/// Lookup customers by id (JSON API)
///
/// Returns every customer record carrying the id - the document format
/// allows duplicates, and callers see them all. An id nothing matches
/// is a 404.
pub async fn api_customer_detail(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<i64>,
) -> Result<axum::Json<Vec<Customer>>, ApiError> {
    let dataset = state.dataset.read().await;
    let customer_id = path.0;
    let matches = dataset.customers_by_id(customer_id);

    if matches.is_empty() {
        return Err(ApiError::NotFound {
            resource: format!("customer {}", customer_id),
        });
    }
    Ok(axum::Json(matches))
}

/// Per-day totals for one customer (JSON API)
///
/// An unknown customer id degrades to an empty list, matching the
/// aggregation helper itself.
pub async fn api_customer_daily_totals(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<i64>,
) -> String {
    let dataset = state.dataset.read().await;
    let totals = dataset.daily_totals(path.0);
    serde_json::to_string(&totals).unwrap_or_default()
}

/// HTMX: Customer list with transaction counts
pub async fn htmx_customers_list(state: axum::extract::State<AppState>) -> String {
    let dataset = state.dataset.read().await;
    let customers = dataset.customers();

    if customers.is_empty() {
        return r#"<div class='text-center py-12 text-gray-500'><p>No customers</p></div>"#
            .to_string();
    }

    let mut html = String::from(
        r#"<div class='overflow-x-auto'><table class='w-full'><thead class='bg-gray-50'><tr><th class='px-4 py-2 text-left'>ID</th><th class='px-4 py-2 text-left'>Name</th><th class='px-4 py-2 text-right'>Transactions</th><th class='px-4 py-2 text-right'>Total</th></tr></thead><tbody>"#,
    );

    for customer in customers {
        let transactions = dataset.transactions_for_customer(customer.id);
        let total: f64 = transactions.iter().map(|t| t.amount).sum();
        html.push_str(&format!(
            r#"<tr class='border-b hover:bg-gray-50'><td class='px-4 py-2'>{}</td><td class='px-4 py-2 font-medium'>{}</td><td class='px-4 py-2 text-right'>{}</td><td class='px-4 py-2 text-right'>{}</td></tr>"#,
            customer.id,
            escape_html(&customer.name),
            transactions.len(),
            format_amount(total)
        ));
    }

    html.push_str("</tbody></table></div>");
    html
}
