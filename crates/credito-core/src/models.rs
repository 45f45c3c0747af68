//! Core data models for the loan book

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::CoreError;
use super::types::{Frequency, LoanStatus};

/// One installment credit owed by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecord {
    /// Stable unique identifier; client names may collide, ids never do
    pub id: String,
    /// Client name, non-empty; first-match lookup key for convenience APIs
    pub client: String,
    /// Original credit granted, non-negative
    pub principal: Decimal,
    /// Payment cadence
    pub frequency: Frequency,
    /// Date the credit was issued
    pub origin_date: Option<NaiveDate>,
    /// Cumulative amount paid so far
    pub paid_to_date: Decimal,
    /// Next date a payment is expected; cleared once the loan is paid
    pub next_due_date: Option<NaiveDate>,
    /// Derived: principal - paid_to_date (raw; display floors it at zero)
    pub balance: Decimal,
    /// Derived: payment-timeliness classification
    pub status: LoanStatus,
    /// Sheet row this record came from, when imported
    pub source_row: Option<usize>,
}

impl LoanRecord {
    /// Create a record with validated identity fields. Derived fields start
    /// unset; callers run the status engine before exposing the record.
    pub fn new(
        id: String,
        client: String,
        principal: Decimal,
        frequency: Frequency,
        origin_date: Option<NaiveDate>,
    ) -> Result<Self, CoreError> {
        let client = client.trim().to_string();
        if client.is_empty() {
            return Err(CoreError::ValidationError {
                message: "Client name must not be empty".to_string(),
            });
        }
        if principal < Decimal::ZERO {
            return Err(CoreError::ValidationError {
                message: format!("Principal must not be negative: {}", principal),
            });
        }

        Ok(Self {
            id,
            client,
            principal,
            frequency,
            origin_date,
            paid_to_date: Decimal::ZERO,
            next_due_date: None,
            balance: principal,
            status: LoanStatus::NoDate,
            source_row: None,
        })
    }

    /// Remaining amount owed, floored at zero for display and export
    pub fn outstanding(&self) -> Decimal {
        if self.balance > Decimal::ZERO {
            self.balance
        } else {
            Decimal::ZERO
        }
    }

    /// Whether the loan has been settled
    pub fn is_paid(&self) -> bool {
        self.status == LoanStatus::Paid
    }

    /// Whether the loan still has money owed on it
    pub fn is_active(&self) -> bool {
        !self.is_paid()
    }

    /// Case-insensitive substring match on the client name
    pub fn matches_client(&self, query: &str) -> bool {
        self.client.to_lowercase().contains(&query.to_lowercase())
    }

    /// Whole days from `today` to the next due date, negative when lapsed
    pub fn days_until_due(&self, today: NaiveDate) -> Option<i64> {
        self.next_due_date
            .map(|due| due.signed_duration_since(today).num_days())
    }
}

/// Operator input for adding a new credit; every field explicit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLoan {
    pub client: String,
    pub principal: Decimal,
    #[serde(default)]
    pub frequency: Frequency,
    /// Defaults to today when absent
    pub origin_date: Option<NaiveDate>,
}
