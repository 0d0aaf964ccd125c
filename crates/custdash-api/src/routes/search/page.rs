//! Search result rendering - Table and chart fragments

use custdash_config::ChartConfig;
use custdash_core::{daily_totals_chart, SearchOutcome, TableRow};
use custdash_utils::{escape_html, format_amount};

/// Render joined result rows as the dashboard table
pub fn render_results_table(rows: &[TableRow]) -> String {
    if rows.is_empty() {
        return r#"<div class='text-center py-12 text-gray-500'><p>No matching transactions</p></div>"#.to_string();
    }

    let mut html = String::from(
        r#"<div class='overflow-x-auto bg-white rounded-xl shadow-sm'><table class='w-full'><thead class='bg-sky-600 text-white'><tr><th class='px-4 py-3 text-left'>ID</th><th class='px-4 py-3 text-left'>Customer Name</th><th class='px-4 py-3 text-right'>Transaction Amount</th><th class='px-4 py-3 text-left'>Date</th></tr></thead><tbody>"#,
    );

    for row in rows {
        html.push_str(&format!(
            r#"<tr class='border-b hover:bg-sky-50'><td class='px-4 py-3 font-bold'>{}</td><td class='px-4 py-3'>{}</td><td class='px-4 py-3 text-right'>{}</td><td class='px-4 py-3'>{}</td></tr>"#,
            row.transaction_id,
            escape_html(&row.customer_name),
            format_amount(row.amount),
            escape_html(&row.date)
        ));
    }

    html.push_str("</tbody></table></div>");
    html
}

/// Render the chart holder for a search outcome.
///
/// The payload rides in a data attribute rather than inline script
/// text, so customer names cannot break out of the markup; the
/// dashboard script parses it and pairs destroy/create on every swap.
pub fn render_chart_fragment(outcome: &SearchOutcome, config: &ChartConfig) -> String {
    let payload = match &outcome.customer {
        Some(customer) => {
            let chart = daily_totals_chart(customer, &outcome.daily_totals, config);
            serde_json::to_string(&chart).unwrap_or_default()
        }
        None => String::new(),
    };

    format!(
        r#"<div id='chart-data' data-chart='{}' class='hidden'></div><script>updateDailyChart();</script>"#,
        escape_html(&payload)
    )
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use custdash_core::{Dataset, SearchQuery};

    fn sample_dataset() -> Dataset {
        Dataset::new(
            vec![custdash_core::Customer {
                id: 1,
                name: "Alice".to_string(),
            }],
            vec![
                custdash_core::Transaction {
                    id: 1,
                    customer_id: 1,
                    amount: 50.0,
                    date: "2024-01-01".to_string(),
                },
                custdash_core::Transaction {
                    id: 2,
                    customer_id: 1,
                    amount: 25.0,
                    date: "2024-01-01".to_string(),
                },
            ],
        )
    }

    #[test]
    fn test_results_table_lists_joined_rows() {
        let dataset = sample_dataset();
        let outcome = dataset.search(&SearchQuery::parse("al"));
        let html = render_results_table(&dataset.joined_rows(&outcome.transactions));

        assert_eq!(html.matches("<tr class='border-b").count(), 2);
        assert!(html.contains("Alice"));
        assert!(html.contains(">50<"));
    }

    #[test]
    fn test_empty_results_render_placeholder() {
        let html = render_results_table(&[]);
        assert!(html.contains("No matching transactions"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_table_escapes_customer_names() {
        let rows = vec![TableRow {
            transaction_id: 1,
            customer_name: "<script>x</script>".to_string(),
            amount: 1.0,
            date: "2024-01-01".to_string(),
        }];
        let html = render_results_table(&rows);
        assert!(!html.contains("<script>x"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_chart_fragment_carries_payload_for_name_hit() {
        let dataset = sample_dataset();
        let outcome = dataset.search(&SearchQuery::parse("al"));
        let html = render_chart_fragment(&outcome, &ChartConfig::default());

        assert!(html.contains("data-chart='{"));
        assert!(html.contains("2024-01-01"));
        assert!(html.contains("updateDailyChart()"));
    }

    #[test]
    fn test_chart_fragment_empty_for_amount_search() {
        let dataset = sample_dataset();
        let outcome = dataset.search(&SearchQuery::parse("50"));
        let html = render_chart_fragment(&outcome, &ChartConfig::default());

        assert!(html.contains("data-chart=''"));
    }
}
