//! Transactions API endpoints - JSON API and HTMX partial responses
//!
//! Endpoints:
//! - api_transactions: Get transactions list (JSON)
//! - api_transaction_detail: Get single transaction (JSON)
//! - htmx_transactions_list: Transaction list (HTML fragment)

use crate::{ApiError, AppState};
use axum::extract::Query;
use custdash_core::TransactionsResponse;
use custdash_utils::{escape_html, format_amount};
use std::collections::HashMap;

/// Get transactions with pagination (JSON API)
pub async fn api_transactions(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    let dataset = state.dataset.read().await;
    let limit = params
        .get("limit")
        .and_then(|s| s.parse().ok())
        .unwrap_or(50)
        .max(1);
    let offset = params.get("offset").and_then(|s| s.parse().ok()).unwrap_or(0);

    let response = TransactionsResponse {
        transactions: dataset.transactions_page(limit, offset),
        total_count: dataset.transactions_count(),
        page: offset / limit + 1,
        page_size: limit,
    };
    serde_json::to_string(&response).unwrap_or_default()
}

/// Get single transaction detail (JSON API)
pub async fn api_transaction_detail(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<i64>,
) -> Result<axum::Json<custdash_core::Transaction>, ApiError> {
    let dataset = state.dataset.read().await;
    let transaction_id = path.0;

    dataset
        .transaction(transaction_id)
        .map(axum::Json)
        .ok_or(ApiError::NotFound {
            resource: format!("transaction {}", transaction_id),
        })
}

/// HTMX: Transactions list - Partial page update with pagination
pub async fn htmx_transactions_list(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    let dataset = state.dataset.read().await;
    let limit = params
        .get("limit")
        .and_then(|s| s.parse().ok())
        .unwrap_or(state.config.pagination.records_per_page)
        .max(1);
    let offset = params.get("offset").and_then(|s| s.parse().ok()).unwrap_or(0);

    let total_count = dataset.transactions_count();
    let transactions = dataset.transactions_page(limit, offset);
    let rows = dataset.joined_rows(&transactions);

    if transactions.is_empty() {
        return r#"<div class='text-center py-12 text-gray-500'><p>No transactions</p></div>"#
            .to_string();
    }

    let current_page = offset / limit + 1;
    let total_pages = (total_count + limit - 1) / limit;

    let mut html = String::from(
        r#"<div class='overflow-x-auto'><table class='w-full'><thead class='bg-gray-50'><tr><th class='px-4 py-2 text-left'>ID</th><th class='px-4 py-2 text-left'>Customer</th><th class='px-4 py-2 text-right'>Amount</th><th class='px-4 py-2 text-left'>Date</th></tr></thead><tbody>"#,
    );
    for row in &rows {
        html.push_str(&format!(
            r#"<tr class='border-b hover:bg-gray-50'><td class='px-4 py-2'>{}</td><td class='px-4 py-2'>{}</td><td class='px-4 py-2 text-right font-medium'>{}</td><td class='px-4 py-2'>{}</td></tr>"#,
            row.transaction_id,
            escape_html(&row.customer_name),
            format_amount(row.amount),
            escape_html(&row.date)
        ));
    }
    html.push_str("</tbody></table></div>");

    let target = "#transactions-content";
    html.push_str(&format!(
        r#"<div class='mt-6 flex items-center justify-between flex-wrap gap-4'>
            <span class='text-sm text-gray-500'>{} records, page {} / {}</span>
            <div class='flex items-center gap-2'>
                <button {} onclick='htmx.ajax("GET", "/transactions/list?limit={}&offset={}", "{}")' class='px-3 py-1 border rounded hover:bg-gray-100'>Previous</button>
                <button {} onclick='htmx.ajax("GET", "/transactions/list?limit={}&offset={}", "{}")' class='px-3 py-1 border rounded hover:bg-gray-100'>Next</button>
            </div>
        </div>
        <style>.disabled{{cursor:not-allowed;opacity:0.5;pointer-events:none}}</style>"#,
        total_count,
        current_page,
        total_pages,
        if current_page == 1 { "disabled" } else { "" },
        limit,
        offset.saturating_sub(limit),
        target,
        if current_page >= total_pages { "disabled" } else { "" },
        limit,
        offset + limit,
        target
    ));

    html
}
