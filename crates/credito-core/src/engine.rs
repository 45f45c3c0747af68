//! Loan status recomputation engine
//!
//! Pure date and amount arithmetic: every function takes `today` explicitly
//! and touches nothing beyond the record it is handed. Rerunning with the
//! same inputs yields the same record.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use super::error::CoreError;
use super::models::LoanRecord;
use super::types::LoanStatus;

/// Days ahead of the due date that still count as "due soon"
pub const DUE_SOON_DAYS: i64 = 2;

/// Refresh `balance`, `next_due_date` and `status` from the payment state.
///
/// A settled loan (balance at or below zero) is `Paid` and its due date is
/// cleared. A loan with no due date derives one from the origin date plus
/// one cadence interval; with no origin date either it is `NoDate`. The
/// stored due date is the literal unmet deadline; lapsed cycles classify
/// as `Overdue` and are never silently re-anchored here.
pub fn recompute(record: &mut LoanRecord, today: NaiveDate) {
    record.balance = record.principal - record.paid_to_date;

    if record.balance <= Decimal::ZERO {
        record.status = LoanStatus::Paid;
        record.next_due_date = None;
        return;
    }

    if record.next_due_date.is_none() {
        match record.origin_date {
            None => {
                record.status = LoanStatus::NoDate;
                return;
            }
            Some(origin) => {
                record.next_due_date =
                    Some(origin + Duration::days(record.frequency.interval_days()));
            }
        }
    }

    record.status = match record.next_due_date {
        Some(due) => classify(due, today),
        None => LoanStatus::NoDate,
    };
}

/// Five-way classification on whole days between the due date and today
pub fn classify(due: NaiveDate, today: NaiveDate) -> LoanStatus {
    let days_diff = due.signed_duration_since(today).num_days();
    if days_diff < 0 {
        LoanStatus::Overdue
    } else if days_diff == 0 {
        LoanStatus::DueToday
    } else if days_diff <= DUE_SOON_DAYS {
        LoanStatus::DueSoon
    } else {
        LoanStatus::Current
    }
}

/// Apply a payment and advance the payment cycle.
///
/// The amount must be non-negative; overpayment is accepted and flips the
/// record to `Paid` through [`recompute`]. While the loan still owes, the
/// due date advances one interval from its prior value, anchored at
/// `today` only when that value has already lapsed or was never set.
pub fn apply_payment(
    record: &mut LoanRecord,
    amount: Decimal,
    today: NaiveDate,
) -> Result<(), CoreError> {
    if amount < Decimal::ZERO {
        return Err(CoreError::ValidationError {
            message: format!("Payment amount must not be negative: {}", amount),
        });
    }

    record.paid_to_date += amount;

    if record.principal - record.paid_to_date > Decimal::ZERO {
        let base = match record.next_due_date {
            Some(due) if due >= today => due,
            _ => today,
        };
        record.next_due_date = Some(base + Duration::days(record.frequency.interval_days()));
    }

    recompute(record, today);
    Ok(())
}
