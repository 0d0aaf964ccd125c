//! Search API endpoints - JSON API and HTMX partial responses
//!
//! Endpoints:
//! - api_search: Dispatch a query and return the raw outcome (JSON)
//! - htmx_search_results: Result table plus chart fragment (HTML)

use crate::AppState;
use axum::extract::Query;
use custdash_core::SearchQuery;
use std::collections::HashMap;

/// Dispatch a search query (JSON API)
pub async fn api_search(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    let dataset = state.dataset.read().await;
    let query = SearchQuery::parse(params.get("q").map(|s| s.as_str()).unwrap_or(""));
    let outcome = dataset.search(&query);

    serde_json::to_string(&outcome).unwrap_or_default()
}

/// HTMX: Search results - Result table plus chart payload
///
/// The fragment always carries the chart holder element; the dashboard
/// script destroys the previous chart on every swap and only creates a
/// new one when the holder has a payload.
pub async fn htmx_search_results(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    let dataset = state.dataset.read().await;
    let raw = params.get("q").map(|s| s.as_str()).unwrap_or("");
    let query = SearchQuery::parse(raw);
    let outcome = dataset.search(&query);
    let rows = dataset.joined_rows(&outcome.transactions);

    log::debug!(
        target: "custdash::api",
        "search '{}' dispatched as {} ({} rows)",
        raw,
        outcome.query,
        rows.len()
    );

    let mut html = super::page::render_results_table(&rows);
    html.push_str(&super::page::render_chart_fragment(&outcome, &state.config.charts));
    html
}
