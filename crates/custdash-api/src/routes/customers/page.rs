//! Customers page rendering - Full page endpoints

use crate::AppState;

/// Customers page - List with transaction counts
pub async fn page_customers(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let dataset = state.dataset.read().await;
    let count = dataset.customers_count();

    let inner_content = format!(
        r#"<div class='flex items-center justify-between mb-4'>
            <h2 class='text-2xl font-bold'>Customers</h2>
            <span class='text-sm text-gray-500'>{} customers</span>
        </div>
        <div id='customers-content' hx-get='/customers/list' hx-trigger='load' class='bg-white rounded-xl shadow-sm p-6'>
            <p class='text-gray-500 text-center'>Loading...</p>
        </div>"#,
        count
    );

    axum::response::Html(crate::page_response(
        &headers,
        "Customers",
        "/customers",
        &inner_content,
    ))
}
