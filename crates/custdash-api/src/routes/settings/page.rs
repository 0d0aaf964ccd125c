//! Settings page rendering - Full page endpoints

use crate::AppState;
use custdash_utils::escape_html;

/// Settings page - Read-only view of the active configuration
pub async fn page_settings(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let config = &state.config;

    let entries = [
        ("Server host", config.server.host.clone()),
        ("Server port", config.server.port.to_string()),
        (
            "Dataset file",
            config.dataset_path().to_string_lossy().to_string(),
        ),
        (
            "Records per page",
            config.pagination.records_per_page.to_string(),
        ),
        ("Chart type", config.charts.default_chart_type.to_string()),
        ("Bar color", config.charts.bar_background.clone()),
        ("Log level", config.logging.level.clone()),
    ];

    let mut rows = String::new();
    for (label, value) in &entries {
        rows.push_str(&format!(
            r#"<div class='flex justify-between py-2 border-b'><span class='text-gray-600'>{}</span><span class='font-medium'>{}</span></div>"#,
            label,
            escape_html(value)
        ));
    }

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Settings</h2></div>
        <div class='bg-white rounded-xl shadow-sm p-6 max-w-2xl'>
            <h3 class='text-lg font-semibold mb-4'>Active configuration</h3>
            <div class='space-y-1'>{}</div>
            <p class='text-sm text-gray-400 mt-4'>Values come from the YAML configuration file; edit it and restart to change them.</p>
        </div>"#,
        rows
    );

    axum::response::Html(crate::page_response(
        &headers,
        "Settings",
        "/settings",
        &inner_content,
    ))
}
