//! Dataset document loading
//!
//! Reads the static JSON document holding the customer and transaction
//! lists. Loading is hidden behind the [`DatasetSource`] trait so the
//! core crate never touches the filesystem directly.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

pub mod error;

pub use error::DataError;

// ==================== Document Types ====================

/// Customer record as stored in the dataset document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: i64,
    pub name: String,
}

/// Transaction record as stored in the dataset document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: i64,
    pub customer_id: i64,
    pub amount: f64,
    pub date: String,
}

/// The raw dataset document: two flat lists under fixed top-level keys.
///
/// Unknown top-level keys are ignored; a missing list deserializes empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetDocument {
    #[serde(default)]
    pub customers: Vec<CustomerRecord>,
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
}

impl DatasetDocument {
    /// Collect referential diagnostics without rejecting anything.
    ///
    /// The document format enforces no invariants: duplicate customer ids
    /// and dangling `customer_id` references are all accepted. They are
    /// still worth a warning in the log, since both degrade to surprising
    /// (if well-defined) query results.
    pub fn diagnostics(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let mut seen: HashMap<i64, usize> = HashMap::new();
        for customer in &self.customers {
            *seen.entry(customer.id).or_insert(0) += 1;
        }

        for (id, count) in &seen {
            if *count > 1 {
                warnings.push(format!(
                    "duplicate customer id {} appears {} times",
                    id, count
                ));
            }
        }

        for transaction in &self.transactions {
            if !seen.contains_key(&transaction.customer_id) {
                warnings.push(format!(
                    "transaction {} references unknown customer {}",
                    transaction.id, transaction.customer_id
                ));
            }
        }

        warnings
    }
}

// ==================== Source Trait ====================

/// Loader reference type
pub type LoaderRef = Arc<dyn DatasetSource>;

/// Trait for dataset document sources
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Parse a dataset document from raw JSON text
    fn parse(&self, content: &str) -> Result<DatasetDocument, DataError>;

    /// Load a dataset document from a file path
    async fn load(&self, path: PathBuf) -> Result<DatasetDocument, DataError>;
}

/// Default source implementation reading JSON from the filesystem
#[derive(Debug, Default)]
pub struct JsonFileSource;

#[async_trait]
impl DatasetSource for JsonFileSource {
    fn parse(&self, content: &str) -> Result<DatasetDocument, DataError> {
        serde_json::from_str(content).map_err(|e| DataError::InvalidDocument {
            location: format!("line {}", e.line()),
            message: e.to_string(),
        })
    }

    async fn load(&self, path: PathBuf) -> Result<DatasetDocument, DataError> {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(DataError::IoError)?;

        let document = self.parse(&content).map_err(|e| match e {
            DataError::InvalidDocument { location, message } => DataError::InvalidDocument {
                location: format!("{}: {}", path.to_string_lossy(), location),
                message,
            },
            other => other,
        })?;

        for warning in document.diagnostics() {
            log::warn!(target: "custdash::data", "{}", warning);
        }

        Ok(document)
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "customers": [
            {"id": 1, "name": "Alice"},
            {"id": 2, "name": "Bob"}
        ],
        "transactions": [
            {"id": 1, "customer_id": 1, "amount": 50, "date": "2024-01-01"},
            {"id": 2, "customer_id": 1, "amount": 25.5, "date": "2024-01-02"}
        ]
    }"#;

    #[test]
    fn test_parse_sample_document() {
        let doc = JsonFileSource.parse(SAMPLE).unwrap();
        assert_eq!(doc.customers.len(), 2);
        assert_eq!(doc.transactions.len(), 2);
        assert_eq!(doc.customers[0].name, "Alice");
        assert_eq!(doc.transactions[1].amount, 25.5);
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let doc = JsonFileSource
            .parse(r#"{"customers": [], "transactions": [], "version": 3}"#)
            .unwrap();
        assert!(doc.customers.is_empty());
        assert!(doc.transactions.is_empty());
    }

    #[test]
    fn test_parse_missing_lists_default_empty() {
        let doc = JsonFileSource.parse("{}").unwrap();
        assert_eq!(doc, DatasetDocument::default());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let result = JsonFileSource.parse("{\"customers\": [");
        assert!(matches!(result, Err(DataError::InvalidDocument { .. })));
    }

    #[test]
    fn test_diagnostics_flags_dangling_reference() {
        let doc = JsonFileSource
            .parse(
                r#"{"customers": [{"id": 1, "name": "Alice"}],
                    "transactions": [{"id": 9, "customer_id": 7, "amount": 1, "date": "2024-01-01"}]}"#,
            )
            .unwrap();
        let warnings = doc.diagnostics();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("unknown customer 7"));
    }

    #[test]
    fn test_diagnostics_flags_duplicate_customer_ids() {
        let doc = JsonFileSource
            .parse(
                r#"{"customers": [{"id": 1, "name": "Alice"}, {"id": 1, "name": "Alina"}],
                    "transactions": []}"#,
            )
            .unwrap();
        let warnings = doc.diagnostics();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("duplicate customer id 1"));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let result = JsonFileSource
            .load(PathBuf::from("/nonexistent/db.json"))
            .await;
        assert!(matches!(result, Err(DataError::IoError(_))));
    }
}
