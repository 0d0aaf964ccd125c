//! Core data models for the dataset

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use custdash_data::{CustomerRecord, TransactionRecord};

/// Customer information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer identifier; assumed unique, never enforced
    pub id: i64,
    /// Display name
    pub name: String,
}

impl Customer {
    /// Case-insensitive name-prefix match.
    ///
    /// `prefix` must already be lower-cased by the caller; every name
    /// starts with the empty prefix.
    pub fn name_starts_with(&self, prefix: &str) -> bool {
        self.name.to_lowercase().starts_with(prefix)
    }
}

impl From<CustomerRecord> for Customer {
    fn from(record: CustomerRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
        }
    }
}

/// Transaction information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction identifier
    pub id: i64,
    /// Owning customer reference; unvalidated, may dangle
    pub customer_id: i64,
    /// Monetary amount
    pub amount: f64,
    /// Transaction date as an opaque string; never normalized
    pub date: String,
}

impl Transaction {
    /// Get the transaction date as NaiveDate, if it happens to parse
    pub fn date_naive(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// The amount rendered as a plain decimal string, used for
    /// substring matching in amount search (`50.0` renders as "50").
    pub fn amount_string(&self) -> String {
        custdash_utils::format_amount(self.amount)
    }
}

impl From<TransactionRecord> for Transaction {
    fn from(record: TransactionRecord) -> Self {
        Self {
            id: record.id,
            customer_id: record.customer_id,
            amount: record.amount,
            date: record.date,
        }
    }
}

/// A transaction joined with one resolved customer name.
///
/// The join multiplies: a `customer_id` matched by several customer
/// records produces one row per record, and a dangling reference
/// produces none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub transaction_id: i64,
    pub customer_name: String,
    pub amount: f64,
    pub date: String,
}

/// Summed amount for one distinct date string
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: String,
    pub total: f64,
}
