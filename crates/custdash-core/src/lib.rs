//! Core dataset processing and business logic
//!
//! The [`Dataset`] is the explicit application state: both record lists
//! loaded from the dataset document, plus the lookup, aggregation, and
//! search operations the dashboard is built from. It is a plain value -
//! handlers share it behind a lock and replace it wholesale on reload,
//! nothing mutates it in place.

pub mod error;
pub mod models;
pub mod reports;
pub mod search;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use custdash_data::{DatasetDocument, LoaderRef};

pub use error::{CoreError, CoreResult, ErrorCode, ErrorSeverity};
pub use models::{Customer, DailyTotal, TableRow, Transaction};
pub use reports::{daily_totals_chart, ChartData, ChartDataset, DatasetSummary};
pub use search::{SearchOutcome, SearchQuery};

// ==================== Dataset ====================

/// In-memory dataset state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    customers: Vec<Customer>,
    transactions: Vec<Transaction>,
}

impl Dataset {
    /// An empty dataset, the state before the first successful load
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a dataset from in-memory lists
    pub fn new(customers: Vec<Customer>, transactions: Vec<Transaction>) -> Self {
        Self {
            customers,
            transactions,
        }
    }

    /// Build a dataset from a parsed document
    pub fn from_document(document: DatasetDocument) -> Self {
        Self {
            customers: document.customers.into_iter().map(Customer::from).collect(),
            transactions: document
                .transactions
                .into_iter()
                .map(Transaction::from)
                .collect(),
        }
    }

    /// Load a dataset through a document source.
    ///
    /// Used both at startup and for explicit reloads; the caller swaps
    /// the returned value into the shared state.
    pub async fn load(loader: LoaderRef, path: PathBuf) -> CoreResult<Self> {
        let document = loader.load(path.clone()).await?;
        let dataset = Self::from_document(document);
        log::info!(
            target: "custdash::core",
            "dataset loaded from {}: {} customers, {} transactions",
            path.display(),
            dataset.customers_count(),
            dataset.transactions_count()
        );
        Ok(dataset)
    }

    // ==================== Accessors ====================

    /// All customers, in dataset order
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// All transactions, in dataset order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Total customer count
    pub fn customers_count(&self) -> usize {
        self.customers.len()
    }

    /// Total transaction count
    pub fn transactions_count(&self) -> usize {
        self.transactions.len()
    }

    /// Get transactions with pagination
    pub fn transactions_page(&self, limit: usize, offset: usize) -> Vec<Transaction> {
        self.transactions
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Get a single transaction by id
    pub fn transaction(&self, id: i64) -> Option<Transaction> {
        self.transactions.iter().find(|t| t.id == id).cloned()
    }

    // ==================== Lookup ====================

    /// Customers whose id equals the given reference.
    ///
    /// In practice 0 or 1 element; duplicate ids in the document are
    /// returned in full, and a dangling reference yields an empty
    /// vector rather than an error.
    pub fn customers_by_id(&self, id: i64) -> Vec<Customer> {
        self.customers
            .iter()
            .filter(|c| c.id == id)
            .cloned()
            .collect()
    }

    /// Transactions attributed to one customer, in dataset order
    pub fn transactions_for_customer(&self, customer_id: i64) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.customer_id == customer_id)
            .cloned()
            .collect()
    }

    // ==================== Aggregation ====================

    /// Sum a customer's transaction amounts per distinct date string.
    ///
    /// Output keeps first-seen date order. Date strings are never
    /// parsed or normalized, so two spellings of the same day stay
    /// separate keys. A customer with no transactions (or an unknown
    /// id) yields an empty vector.
    pub fn daily_totals(&self, customer_id: i64) -> Vec<DailyTotal> {
        let mut totals: Vec<DailyTotal> = Vec::new();

        for transaction in self.transactions.iter().filter(|t| t.customer_id == customer_id) {
            match totals.iter_mut().find(|t| t.date == transaction.date) {
                Some(entry) => entry.total += transaction.amount,
                None => totals.push(DailyTotal {
                    date: transaction.date.clone(),
                    total: transaction.amount,
                }),
            }
        }

        totals
    }

    // ==================== Search ====================

    /// Dispatch a parsed search query.
    ///
    /// Name searches select the first customer whose name matches the
    /// prefix and return that customer's transactions plus per-day
    /// totals for the chart. Amount searches match the amount's string
    /// form by substring and never chart. The show-all action lists
    /// every transaction.
    pub fn search(&self, query: &SearchQuery) -> SearchOutcome {
        match query {
            SearchQuery::All => SearchOutcome {
                query: query.clone(),
                transactions: self.transactions.clone(),
                customer: None,
                daily_totals: Vec::new(),
            },
            SearchQuery::Amount(term) => {
                let transactions = self
                    .transactions
                    .iter()
                    .filter(|t| t.amount_string().contains(term.as_str()))
                    .cloned()
                    .collect();
                SearchOutcome {
                    query: query.clone(),
                    transactions,
                    customer: None,
                    daily_totals: Vec::new(),
                }
            }
            SearchQuery::Name(term) => {
                // First matching customer only; the chart belongs to a
                // single customer. See DESIGN.md on this policy.
                let selected = self.customers.iter().find(|c| c.name_starts_with(term));

                match selected {
                    None => SearchOutcome::empty(query.clone()),
                    Some(customer) => SearchOutcome {
                        query: query.clone(),
                        transactions: self.transactions_for_customer(customer.id),
                        customer: Some(customer.clone()),
                        daily_totals: self.daily_totals(customer.id),
                    },
                }
            }
        }
    }

    // ==================== Rendering Support ====================

    /// Join transactions with their customer names for table display.
    ///
    /// One row per (transaction, matching customer) pair: duplicated
    /// customer ids duplicate rows, dangling references drop them.
    pub fn joined_rows(&self, transactions: &[Transaction]) -> Vec<TableRow> {
        let mut rows = Vec::new();

        for transaction in transactions {
            for customer in self.customers_by_id(transaction.customer_id) {
                rows.push(TableRow {
                    transaction_id: transaction.id,
                    customer_name: customer.name,
                    amount: transaction.amount,
                    date: transaction.date.clone(),
                });
            }
        }

        rows
    }
}

// ==================== Operations Trait ====================

/// Trait for dataset operations exposed to the API layer
pub trait DatasetOperations {
    /// Get dataset summary
    fn summary(&self) -> DatasetSummary;

    /// Customers matching an id reference
    fn customers_by_id(&self, id: i64) -> Vec<Customer>;
}

impl DatasetOperations for Dataset {
    fn summary(&self) -> DatasetSummary {
        let total_amount = self.transactions.iter().map(|t| t.amount).sum();

        // Find min and max dates among the transactions that parse
        let date_range = self.transactions.iter().filter_map(|t| t.date_naive()).fold(
            (None, None),
            |(min, max), date| {
                (
                    Some(min.unwrap_or(date).min(date)),
                    Some(max.unwrap_or(date).max(date)),
                )
            },
        );

        DatasetSummary {
            total_customers: self.customers.len(),
            total_transactions: self.transactions.len(),
            total_amount,
            period_start: date_range.0.map(|d| d.to_string()),
            period_end: date_range.1.map(|d| d.to_string()),
        }
    }

    fn customers_by_id(&self, id: i64) -> Vec<Customer> {
        Dataset::customers_by_id(self, id)
    }
}

// ==================== API Envelopes ====================

/// Paged transactions response
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use custdash_data::{DataError, DatasetSource};

    fn customer(id: i64, name: &str) -> Customer {
        Customer {
            id,
            name: name.to_string(),
        }
    }

    fn transaction(id: i64, customer_id: i64, amount: f64, date: &str) -> Transaction {
        Transaction {
            id,
            customer_id,
            amount,
            date: date.to_string(),
        }
    }

    fn sample_dataset() -> Dataset {
        Dataset::new(
            vec![customer(1, "Alice"), customer(2, "Bob")],
            vec![
                transaction(1, 1, 50.0, "2024-01-01"),
                transaction(2, 1, 25.0, "2024-01-01"),
                transaction(3, 2, 142.0, "2024-01-02"),
                transaction(4, 1, 10.0, "2024-01-03"),
            ],
        )
    }

    #[test]
    fn test_lookup_miss_returns_empty() {
        let dataset = sample_dataset();
        assert!(dataset.customers_by_id(99).is_empty());
    }

    #[test]
    fn test_lookup_returns_duplicates() {
        let dataset = Dataset::new(
            vec![customer(1, "Alice"), customer(1, "Alina")],
            vec![],
        );
        let matches = dataset.customers_by_id(1);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].name, "Alice");
        assert_eq!(matches[1].name, "Alina");
    }

    #[test]
    fn test_daily_totals_empty_for_customer_without_transactions() {
        let dataset = Dataset::new(vec![customer(5, "Carol")], vec![]);
        assert!(dataset.daily_totals(5).is_empty());
    }

    #[test]
    fn test_daily_totals_sums_same_date() {
        let dataset = sample_dataset();
        let totals = dataset.daily_totals(1);
        assert_eq!(totals[0].date, "2024-01-01");
        assert_eq!(totals[0].total, 75.0);
    }

    #[test]
    fn test_daily_totals_keeps_first_seen_order() {
        let dataset = Dataset::new(
            vec![customer(1, "Alice")],
            vec![
                transaction(1, 1, 5.0, "2024-02-02"),
                transaction(2, 1, 3.0, "2024-01-01"),
                transaction(3, 1, 2.0, "2024-02-02"),
            ],
        );
        let totals = dataset.daily_totals(1);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].date, "2024-02-02");
        assert_eq!(totals[0].total, 7.0);
        assert_eq!(totals[1].date, "2024-01-01");
    }

    #[test]
    fn test_distinct_date_strings_stay_distinct() {
        let dataset = Dataset::new(
            vec![customer(1, "Alice")],
            vec![
                transaction(1, 1, 5.0, "2024-01-01"),
                transaction(2, 1, 3.0, "2024-1-1"),
            ],
        );
        assert_eq!(dataset.daily_totals(1).len(), 2);
    }

    #[test]
    fn test_name_search_selects_first_match_and_charts() {
        let dataset = sample_dataset();
        let outcome = dataset.search(&SearchQuery::parse("al"));

        assert_eq!(outcome.customer.as_ref().map(|c| c.id), Some(1));
        assert_eq!(outcome.transactions.len(), 3);
        assert!(outcome.has_chart());
        assert_eq!(outcome.daily_totals[0].date, "2024-01-01");
        assert_eq!(outcome.daily_totals[0].total, 75.0);
    }

    #[test]
    fn test_spec_worked_example() {
        let dataset = Dataset::new(
            vec![customer(1, "Alice")],
            vec![
                transaction(1, 1, 50.0, "2024-01-01"),
                transaction(2, 1, 25.0, "2024-01-01"),
            ],
        );
        let outcome = dataset.search(&SearchQuery::parse("al"));

        assert_eq!(outcome.transactions.len(), 2);
        assert_eq!(outcome.daily_totals.len(), 1);
        assert_eq!(outcome.daily_totals[0].date, "2024-01-01");
        assert_eq!(outcome.daily_totals[0].total, 75.0);
    }

    #[test]
    fn test_amount_search_matches_substring_without_chart() {
        let dataset = sample_dataset();
        let outcome = dataset.search(&SearchQuery::parse("42"));

        assert_eq!(outcome.transactions.len(), 1);
        assert_eq!(outcome.transactions[0].id, 3);
        assert!(!outcome.has_chart());
    }

    #[test]
    fn test_show_all_lists_every_transaction() {
        let dataset = sample_dataset();
        let outcome = dataset.search(&SearchQuery::parse(""));

        assert_eq!(outcome.transactions.len(), 4);
        assert!(!outcome.has_chart());
    }

    #[test]
    fn test_no_match_returns_empty_outcome() {
        let dataset = sample_dataset();

        let outcome = dataset.search(&SearchQuery::parse("zzz"));
        assert!(outcome.transactions.is_empty());
        assert!(!outcome.has_chart());

        let outcome = dataset.search(&SearchQuery::parse("777"));
        assert!(outcome.transactions.is_empty());
        assert!(!outcome.has_chart());
    }

    #[test]
    fn test_joined_rows_duplicate_and_dangling_references() {
        let dataset = Dataset::new(
            vec![customer(1, "Alice"), customer(1, "Alina")],
            vec![
                transaction(1, 1, 50.0, "2024-01-01"),
                transaction(2, 9, 10.0, "2024-01-02"),
            ],
        );
        let rows = dataset.joined_rows(dataset.transactions());

        // Duplicated customer id doubles the first row; the dangling
        // reference contributes nothing.
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].customer_name, "Alice");
        assert_eq!(rows[1].customer_name, "Alina");
    }

    #[test]
    fn test_summary_counts_and_period() {
        let dataset = sample_dataset();
        let summary = dataset.summary();

        assert_eq!(summary.total_customers, 2);
        assert_eq!(summary.total_transactions, 4);
        assert_eq!(summary.total_amount, 227.0);
        assert_eq!(summary.period_start.as_deref(), Some("2024-01-01"));
        assert_eq!(summary.period_end.as_deref(), Some("2024-01-03"));
    }

    #[test]
    fn test_transactions_page() {
        let dataset = sample_dataset();
        let page = dataset.transactions_page(2, 1);
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, 2);
        assert_eq!(page[1].id, 3);
    }

    struct StaticSource(&'static str);

    #[async_trait]
    impl DatasetSource for StaticSource {
        fn parse(&self, content: &str) -> Result<DatasetDocument, DataError> {
            custdash_data::JsonFileSource.parse(content)
        }

        async fn load(&self, _path: std::path::PathBuf) -> Result<DatasetDocument, DataError> {
            self.parse(self.0)
        }
    }

    #[tokio::test]
    async fn test_load_through_source() {
        let loader: LoaderRef = std::sync::Arc::new(StaticSource(
            r#"{"customers": [{"id": 1, "name": "Alice"}],
                "transactions": [{"id": 1, "customer_id": 1, "amount": 50, "date": "2024-01-01"}]}"#,
        ));
        let dataset = Dataset::load(loader, std::path::PathBuf::from("db.json"))
            .await
            .unwrap();

        assert_eq!(dataset.customers_count(), 1);
        assert_eq!(dataset.transactions_count(), 1);
    }
}
