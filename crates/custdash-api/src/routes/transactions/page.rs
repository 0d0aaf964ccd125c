//! Transactions page rendering - Full page endpoints
//!
//! Endpoints:
//! - page_transactions: Main transactions list page

use crate::AppState;
use custdash_core::DatasetOperations;
use custdash_utils::format_number;

/// Transactions page - Paginated list with summary cards
pub async fn page_transactions(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let dataset = state.dataset.read().await;
    let summary = dataset.summary();
    let limit = state.config.pagination.records_per_page;

    let inner_content = format!(
        r#"<div class='flex items-center justify-between mb-4'>
            <h2 class='text-2xl font-bold'>Transactions</h2>
            <button onclick='reloadDataset()' class='px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200' title='Reload the dataset file'>Reload</button>
        </div>
        <div class='grid grid-cols-2 md:grid-cols-4 gap-3 mb-4'>
            <div class='bg-indigo-50 p-3 rounded-lg border border-indigo-100'><p class='text-xs text-indigo-600'>Transactions</p><p class='text-xl font-bold'>{}</p></div>
            <div class='bg-purple-50 p-3 rounded-lg border border-purple-100'><p class='text-xs text-purple-600'>Customers</p><p class='text-xl font-bold'>{}</p></div>
            <div class='bg-green-50 p-3 rounded-lg border border-green-100'><p class='text-xs text-green-600'>First date</p><p class='text-sm font-medium truncate'>{}</p></div>
            <div class='bg-orange-50 p-3 rounded-lg border border-orange-100'><p class='text-xs text-orange-600'>Last date</p><p class='text-sm font-medium truncate'>{}</p></div>
        </div>
        <div id='transactions-content' hx-get='/transactions/list?limit={}' hx-trigger='load' class='bg-white rounded-xl shadow-sm p-6'>
            <p class='text-gray-500 text-center'>Loading...</p>
        </div>
        <script>
        function reloadDataset() {{
            fetch('/api/reload', {{method: 'POST'}})
                .then(r => r.json())
                .then(data => {{
                    if (data.success) {{
                        window.location.reload();
                    }} else {{
                        alert('Reload failed: ' + data.message);
                    }}
                }})
                .catch(e => alert('Reload failed: ' + e));
        }}
        </script>"#,
        format_number(summary.total_transactions),
        format_number(summary.total_customers),
        summary.period_start.as_deref().unwrap_or("-"),
        summary.period_end.as_deref().unwrap_or("-"),
        limit
    );

    axum::response::Html(crate::page_response(
        &headers,
        "Transactions",
        "/transactions",
        &inner_content,
    ))
}
