//! Due-date windows for filtering loans by when payment is expected

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::models::LoanRecord;
use super::types::LoanStatus;

/// A closed calendar window over next-due dates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DueWindow {
    /// Inclusive start; open-ended toward the past when absent
    pub start: Option<NaiveDate>,
    /// Inclusive end; open-ended toward the future when absent
    pub end: Option<NaiveDate>,
}

impl DueWindow {
    /// Every due date, past and future
    pub fn all() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Exactly today's collections
    pub fn today(today: NaiveDate) -> Self {
        Self {
            start: Some(today),
            end: Some(today),
        }
    }

    /// Everything already lapsed as of today
    pub fn overdue(today: NaiveDate) -> Self {
        Self {
            start: None,
            end: today.pred_opt(),
        }
    }

    /// The collection window from today through `days` days out; lapsed
    /// dates are included, a collector chases those first
    pub fn next_days(today: NaiveDate, days: i64) -> Self {
        Self {
            start: None,
            end: Some(today + Duration::days(days)),
        }
    }

    /// Explicit date range
    pub fn custom(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Check whether a date falls inside the window
    pub fn contains(&self, date: &NaiveDate) -> bool {
        match (self.start, self.end) {
            (None, None) => true,
            (Some(s), None) => *date >= s,
            (None, Some(e)) => *date <= e,
            (Some(s), Some(e)) => *date >= s && *date <= e,
        }
    }
}

/// Due-window filtering trait
pub trait DueFilter {
    /// Whether this item expects a payment inside the window
    fn due_within(&self, window: &DueWindow) -> bool;
}

impl DueFilter for LoanRecord {
    fn due_within(&self, window: &DueWindow) -> bool {
        // Settled and dateless loans never appear on a collection list
        if self.status == LoanStatus::Paid || self.status == LoanStatus::NoDate {
            return false;
        }
        match self.next_due_date {
            Some(due) => window.contains(&due),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::recompute;
    use crate::types::Frequency;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn active_loan(due: NaiveDate, today: NaiveDate) -> LoanRecord {
        let mut record = LoanRecord::new(
            "cr-test:1:00000000".to_string(),
            "Cliente".to_string(),
            Decimal::from(100),
            Frequency::Daily,
            None,
        )
        .unwrap();
        record.next_due_date = Some(due);
        recompute(&mut record, today);
        record
    }

    #[test]
    fn test_window_contains() {
        let window = DueWindow::custom(date(2024, 6, 1), date(2024, 6, 30));
        assert!(window.contains(&date(2024, 6, 15)));
        assert!(window.contains(&date(2024, 6, 1)));
        assert!(window.contains(&date(2024, 6, 30)));
        assert!(!window.contains(&date(2024, 5, 31)));
        assert!(!window.contains(&date(2024, 7, 1)));
    }

    #[test]
    fn test_window_all() {
        let window = DueWindow::all();
        assert!(window.contains(&date(1990, 1, 1)));
        assert!(window.contains(&date(2090, 1, 1)));
    }

    #[test]
    fn test_window_today() {
        let today = date(2024, 6, 10);
        let window = DueWindow::today(today);
        assert!(window.contains(&today));
        assert!(!window.contains(&date(2024, 6, 11)));
        assert!(!window.contains(&date(2024, 6, 9)));
    }

    #[test]
    fn test_window_overdue_excludes_today() {
        let today = date(2024, 6, 10);
        let window = DueWindow::overdue(today);
        assert!(window.contains(&date(2024, 6, 9)));
        assert!(!window.contains(&today));
    }

    #[test]
    fn test_next_days_includes_lapsed_dates() {
        let today = date(2024, 6, 10);
        let window = DueWindow::next_days(today, 3);
        assert!(window.contains(&date(2024, 5, 1)));
        assert!(window.contains(&date(2024, 6, 13)));
        assert!(!window.contains(&date(2024, 6, 14)));
    }

    #[test]
    fn test_due_filter_on_records() {
        let today = date(2024, 6, 10);
        let window = DueWindow::next_days(today, 2);

        assert!(active_loan(date(2024, 6, 11), today).due_within(&window));
        assert!(active_loan(date(2024, 6, 1), today).due_within(&window));
        assert!(!active_loan(date(2024, 6, 20), today).due_within(&window));
    }

    #[test]
    fn test_paid_loan_never_due() {
        let today = date(2024, 6, 10);
        let mut record = active_loan(date(2024, 6, 10), today);
        record.paid_to_date = record.principal;
        recompute(&mut record, today);

        assert!(!record.due_within(&DueWindow::all()));
    }
}
