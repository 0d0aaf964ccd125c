//! HTTP API server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::search: Query dispatch, result table, chart payload
//! - routes::transactions: Transaction list, pagination
//! - routes::customers: Customer list, lookup, per-day totals
//! - routes::settings: Configuration display

pub mod error;
pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use custdash_config::Config;
use custdash_core::{Dataset, DatasetOperations};
use custdash_data::LoaderRef;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<RwLock<Dataset>>,
    pub loader: LoaderRef,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    // Import route handlers
    use routes::customers::{
        api_customer_daily_totals, api_customer_detail, api_customers, htmx_customers_list,
        page_customers,
    };
    use routes::search::{api_search, htmx_search_results};
    use routes::settings::{api_settings, page_settings};
    use routes::transactions::{
        api_transaction_detail, api_transactions, htmx_transactions_list, page_transactions,
    };

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/customers", get(api_customers))
        .route("/api/customers/:id", get(api_customer_detail))
        .route("/api/customers/:id/daily-totals", get(api_customer_daily_totals))
        .route("/api/transactions", get(api_transactions))
        .route("/api/transactions/:id", get(api_transaction_detail))
        .route("/api/search", get(api_search))
        .route("/api/summary", get(api_summary))
        .route("/api/settings", get(api_settings))
        .route("/api/reload", post(api_reload))
        // HTMX page routes
        .route("/", get(index_page))
        .route("/dashboard", get(page_dashboard))
        .route("/transactions", get(page_transactions))
        .route("/customers", get(page_customers))
        .route("/settings", get(page_settings))
        // HTMX partial routes (for in-page updates)
        .route("/search", get(htmx_search_results))
        .route("/transactions/list", get(htmx_transactions_list))
        .route("/customers/list", get(htmx_customers_list))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Get dataset summary (JSON API)
async fn api_summary(state: axum::extract::State<AppState>) -> String {
    let dataset = state.dataset.read().await;
    let summary = dataset.summary();
    serde_json::to_string(&summary).unwrap_or_default()
}

/// Reload dataset API endpoint
async fn api_reload(state: axum::extract::State<AppState>) -> String {
    let path = state.config.dataset_path();
    match Dataset::load(state.loader.clone(), path).await {
        Ok(loaded) => {
            *state.dataset.write().await = loaded;
            r#"{"success": true, "message": "Dataset reloaded"}"#.to_string()
        }
        Err(e) => {
            log::error!(target: "custdash::api", "reload failed: {}", e);
            format!(r#"{{"success": false, "message": "{}"}}"#, e)
        }
    }
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Custdash</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <script src="https://cdn.jsdelivr.net/npm/chart.js@4"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .htmx-request.htmx-indicator {{ opacity: 1; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        title, content
    )
}

/// Navigation sidebar
pub fn nav_sidebar(current_path: &str) -> String {
    let links = [
        ("/", "Dashboard", "dashboard"),
        ("/transactions", "Transactions", "transactions"),
        ("/customers", "Customers", "customers"),
        ("/settings", "Settings", "settings"),
    ];

    let mut nav = String::from("<div class='bg-white border-r h-screen flex flex-col'><div class='p-4 border-b'><h1 class='text-xl font-bold text-sky-600'>Custdash</h1></div><ul class='flex-1 py-2 space-y-1 px-2'>");

    for (path, label, id) in &links {
        let is_active = if *path == "/" {
            current_path == "/"
        } else {
            current_path.starts_with(path)
        };
        let active_class = if is_active {
            "bg-sky-50 text-sky-600"
        } else {
            "text-gray-600 hover:bg-gray-50"
        };
        let icon = match *id {
            "dashboard" => "📊",
            "transactions" => "📋",
            "customers" => "👥",
            "settings" => "⚙️",
            _ => "📄",
        };
        nav.push_str(&format!(
            r#"<li><a href='{}' class='flex items-center gap-2 px-3 py-2 rounded-lg {}'>{}<span>{}</span></a></li>"#,
            path, active_class, icon, label
        ));
    }
    nav.push_str("</ul></div>");
    nav
}

/// Check if request is from HTMX (partial page update)
fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(
    headers: &axum::http::HeaderMap,
    title: &str,
    current_path: &str,
    inner_content: &str,
) -> String {
    if is_htmx_request(headers) {
        // HTMX partial - just the content area (no sidebar for partial updates)
        format!(
            r#"<div class='flex flex-col h-screen'>
    <div class='flex flex-1 overflow-hidden'>
        <main class='flex-1 overflow-auto bg-gray-50 p-6'>{}</main>
    </div>
</div>"#,
            inner_content
        )
    } else {
        // Full page - wrap with base HTML and sidebar
        base_html(
            title,
            &format!(
                r#"<div class='flex flex-col h-screen'>
    <div class='flex flex-1 overflow-hidden'>
        <aside class='w-64 flex-shrink-0'>{}</aside>
        <main class='flex-1 overflow-auto bg-gray-50 p-6'>{}</main>
    </div>
</div>"#,
                nav_sidebar(current_path),
                inner_content
            ),
        )
    }
}

/// Dashboard page: search box, results table, per-day totals chart
async fn index_page(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let dataset = state.dataset.read().await;
    let summary = dataset.summary();

    let mut inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Dashboard</h2></div>
        <div class='grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4 mb-6'>
            <div class='bg-sky-50 p-4 rounded-lg border border-sky-200'><p class='text-sm text-sky-600'>Customers</p><p class='text-2xl font-bold text-sky-700'>{}</p></div>
            <div class='bg-indigo-50 p-4 rounded-lg border border-indigo-200'><p class='text-sm text-indigo-600'>Transactions</p><p class='text-2xl font-bold text-indigo-700'>{}</p></div>
            <div class='bg-green-50 p-4 rounded-lg border border-green-200'><p class='text-sm text-green-600'>Total amount</p><p class='text-2xl font-bold text-green-700'>{}</p></div>
            <div class='bg-orange-50 p-4 rounded-lg border border-orange-200'><p class='text-sm text-orange-600'>Period</p><p class='text-sm font-medium text-orange-700 mt-2'>{} - {}</p></div>
        </div>
        <div class='flex gap-2 mb-6'>
            <input type='text' id='filterInput' name='q' placeholder='Search by customer name or amount...'
                hx-get='/search' hx-target='#search-results' hx-trigger="keyup[key=='Enter']"
                class='flex-1 px-4 py-2 border rounded-lg focus:ring-2 focus:ring-sky-500'>
            <button hx-get='/search' hx-include='#filterInput' hx-target='#search-results'
                class='px-6 py-2 bg-sky-600 text-white rounded-lg hover:bg-sky-700'>Search</button>
        </div>
        <div id='search-results' hx-get='/search' hx-trigger='load'>
            <p class='text-gray-500 text-center py-12'>Loading...</p>
        </div>
        <div id='chart-card' class='bg-white rounded-xl shadow-sm p-6 mt-6' style='display: none'>
            <h3 class='text-lg font-semibold mb-4'>Total amount per day</h3>
            <canvas id='daily-chart'></canvas>
        </div>"#,
        summary.total_customers,
        summary.total_transactions,
        custdash_utils::format_amount(summary.total_amount),
        summary.period_start.as_deref().unwrap_or("-"),
        summary.period_end.as_deref().unwrap_or("-"),
    );

    // The chart handle lives here and nowhere else: every result swap
    // destroys the previous instance before (maybe) creating a new one.
    inner_content.push_str(
        r#"
        <script>
        let dailyChart = null;
        function updateDailyChart() {
            const holder = document.getElementById('chart-data');
            const card = document.getElementById('chart-card');
            if (dailyChart) {
                dailyChart.destroy();
                dailyChart = null;
            }
            if (!holder || !holder.dataset.chart) {
                if (card) { card.style.display = 'none'; }
                return;
            }
            let payload;
            try {
                payload = JSON.parse(holder.dataset.chart);
            } catch (e) {
                console.error('Bad chart payload:', e);
                return;
            }
            card.style.display = 'block';
            dailyChart = new Chart(document.getElementById('daily-chart'), {
                type: payload.chart_type,
                data: {
                    labels: payload.labels,
                    datasets: payload.datasets.map(d => ({
                        label: d.label,
                        data: d.data,
                        backgroundColor: d.background_color,
                        borderColor: d.border_color,
                        borderWidth: 1
                    }))
                },
                options: payload.options
            });
        }
        </script>"#,
    );

    axum::response::Html(page_response(&headers, "Dashboard", "/", &inner_content))
}

/// Dashboard page (alias for index)
async fn page_dashboard(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    index_page(state, headers).await
}

/// Start the HTTP server
///
/// This is the main entry point for the Custdash server.
/// It creates the router, binds to the address, and starts listening
/// for requests.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `dataset` - The shared dataset state
/// * `loader` - The dataset document source, used by reloads
pub async fn start_server(config: Config, dataset: Arc<RwLock<Dataset>>, loader: LoaderRef) {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        dataset,
        loader,
        config,
    };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await.unwrap();
    eprintln!("[INFO] Starting Custdash server on http://{}", addr);
    eprintln!("[INFO] Available routes:");
    eprintln!("[INFO]   - / (Dashboard)");
    eprintln!("[INFO]   - /transactions (Transaction list)");
    eprintln!("[INFO]   - /customers (Customer list)");
    eprintln!("[INFO]   - /settings (Configuration)");
    eprintln!("[INFO]   - /api/* (JSON API endpoints)");

    match axum::serve(listener, router).await {
        Ok(_) => eprintln!("[INFO] Server stopped gracefully"),
        Err(e) => eprintln!("[ERROR] Server error: {}", e),
    }
}
