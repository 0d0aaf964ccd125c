//! Search query parsing and dispatch
//!
//! A single free-text input drives two different searches: numeric input
//! filters transactions by amount substring, anything else filters
//! customers by name prefix. The branch is picked here so every caller
//! (HTML partials, JSON API, tests) dispatches identically.

use serde::Serialize;

use crate::models::{Customer, DailyTotal, Transaction};

/// Parsed search query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "term", rename_all = "lowercase")]
pub enum SearchQuery {
    /// Empty input: list everything, no chart
    All,
    /// Name-prefix search over customers; term is trimmed and lower-cased
    Name(String),
    /// Amount-substring search over transactions
    Amount(String),
}

impl SearchQuery {
    /// Parse a raw query string into a search branch.
    ///
    /// The input is trimmed and lower-cased first. Anything that parses
    /// as a number is an amount search; an empty input is the show-all
    /// action; the rest are name searches.
    pub fn parse(raw: &str) -> Self {
        let term = raw.trim().to_lowercase();

        if term.is_empty() {
            SearchQuery::All
        } else if term.parse::<f64>().is_ok() {
            SearchQuery::Amount(term)
        } else {
            SearchQuery::Name(term)
        }
    }

    /// The normalized term, empty for the show-all action
    pub fn term(&self) -> &str {
        match self {
            SearchQuery::All => "",
            SearchQuery::Name(term) | SearchQuery::Amount(term) => term,
        }
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchQuery::All => write!(f, "all"),
            SearchQuery::Name(term) => write!(f, "name:{}", term),
            SearchQuery::Amount(term) => write!(f, "amount:{}", term),
        }
    }
}

/// Result of dispatching a search against a dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    /// The parsed query that produced this outcome
    pub query: SearchQuery,
    /// Matched transactions, in dataset order
    pub transactions: Vec<Transaction>,
    /// The selected customer, for a name search that hit
    pub customer: Option<Customer>,
    /// Per-day totals for the selected customer
    pub daily_totals: Vec<DailyTotal>,
}

impl SearchOutcome {
    /// An outcome with no matches and no chart
    pub fn empty(query: SearchQuery) -> Self {
        Self {
            query,
            transactions: Vec::new(),
            customer: None,
            daily_totals: Vec::new(),
        }
    }

    /// Whether a chart should be (re)drawn for this outcome.
    ///
    /// A chart belongs to exactly one matched customer; amount and
    /// show-all searches never chart.
    pub fn has_chart(&self) -> bool {
        self.customer.is_some()
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_query_routes_to_amount() {
        assert_eq!(SearchQuery::parse("42"), SearchQuery::Amount("42".to_string()));
        assert_eq!(SearchQuery::parse("3.5"), SearchQuery::Amount("3.5".to_string()));
        assert_eq!(SearchQuery::parse("-12"), SearchQuery::Amount("-12".to_string()));
    }

    #[test]
    fn test_text_query_routes_to_name() {
        assert_eq!(SearchQuery::parse("al"), SearchQuery::Name("al".to_string()));
        assert_eq!(SearchQuery::parse("bob smith"), SearchQuery::Name("bob smith".to_string()));
    }

    #[test]
    fn test_empty_query_routes_to_all() {
        assert_eq!(SearchQuery::parse(""), SearchQuery::All);
        assert_eq!(SearchQuery::parse("   "), SearchQuery::All);
    }

    #[test]
    fn test_parse_trims_and_lowercases() {
        assert_eq!(SearchQuery::parse("  AL  "), SearchQuery::Name("al".to_string()));
        assert_eq!(SearchQuery::parse(" 42 "), SearchQuery::Amount("42".to_string()));
    }

    #[test]
    fn test_empty_outcome_has_no_chart() {
        let outcome = SearchOutcome::empty(SearchQuery::parse("zzz"));
        assert!(outcome.transactions.is_empty());
        assert!(!outcome.has_chart());
    }
}
