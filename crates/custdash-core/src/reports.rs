//! Summary statistics and chart payloads

use serde::{Deserialize, Serialize};

use custdash_config::ChartConfig;

use crate::models::{Customer, DailyTotal};

/// Dataset summary
#[derive(Debug, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total_customers: usize,
    pub total_transactions: usize,
    pub total_amount: f64,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
}

/// Chart data for visualization
#[derive(Debug, Serialize, Deserialize)]
pub struct ChartData {
    pub chart_type: String,
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
    pub options: serde_json::Value,
}

/// Chart dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Option<String>,
    pub border_color: Option<String>,
}

/// Build the per-day totals bar chart for one customer.
///
/// Labels are the distinct date strings in first-seen order, values the
/// summed amounts. The payload mirrors what the client-side chart
/// library expects, so handlers can serialize it straight into a page.
pub fn daily_totals_chart(
    customer: &Customer,
    totals: &[DailyTotal],
    config: &ChartConfig,
) -> ChartData {
    ChartData {
        chart_type: config.default_chart_type.to_string(),
        title: format!("Total amount per day - {}", customer.name),
        labels: totals.iter().map(|t| t.date.clone()).collect(),
        datasets: vec![ChartDataset {
            label: "Total Amount".to_string(),
            data: totals.iter().map(|t| t.total).collect(),
            background_color: Some(config.bar_background.clone()),
            border_color: Some(config.bar_border.clone()),
        }],
        options: serde_json::json!({
            "scales": {
                "y": {
                    "beginAtZero": config.begin_at_zero,
                    "title": { "display": true, "text": "Total Amount" }
                },
                "x": {
                    "title": { "display": true, "text": "Date" }
                }
            },
            "plugins": {
                "legend": { "display": config.show_legend }
            }
        }),
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_totals_chart_payload() {
        let customer = Customer {
            id: 1,
            name: "Alice".to_string(),
        };
        let totals = vec![
            DailyTotal {
                date: "2024-01-01".to_string(),
                total: 75.0,
            },
            DailyTotal {
                date: "2024-01-02".to_string(),
                total: 10.0,
            },
        ];
        let chart = daily_totals_chart(&customer, &totals, &ChartConfig::default());

        assert_eq!(chart.chart_type, "bar");
        assert_eq!(chart.labels, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(chart.datasets.len(), 1);
        assert_eq!(chart.datasets[0].data, vec![75.0, 10.0]);
        assert!(chart.title.contains("Alice"));
    }

    #[test]
    fn test_chart_for_customer_without_transactions_is_empty() {
        let customer = Customer {
            id: 2,
            name: "Bob".to_string(),
        };
        let chart = daily_totals_chart(&customer, &[], &ChartConfig::default());
        assert!(chart.labels.is_empty());
        assert!(chart.datasets[0].data.is_empty());
    }
}
