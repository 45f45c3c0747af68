//! Core loan processing and business logic

pub mod engine;
pub mod error;
pub mod models;
pub mod reports;
pub mod time;
pub mod types;

use chrono::{NaiveDate, Utc};
use credito_config::Config;
use credito_parser::{generate_loan_id, ParsedRow, ParserRef};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::RwLock;

pub use engine::{apply_payment, classify, recompute, DUE_SOON_DAYS};
pub use error::{CoreError, CoreResult, ErrorSeverity};
pub use models::{LoanRecord, NewLoan};
pub use reports::{ExportRow, PortfolioSummary, StatusBreakdown, EXPORT_HEADERS};
pub use time::{DueFilter, DueWindow};
pub use types::{Frequency, LoanStatus};

/// One sheet row that could not become a loan record. Kept and reported,
/// never silently dropped; the rest of the sheet still loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportIssue {
    /// 1-based data row in the source sheet
    pub row: usize,
    /// Client cell, when present
    pub client: Option<String>,
    pub reason: String,
}

/// In-memory loan book data, insertion order preserved
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BookData {
    pub loans: Vec<LoanRecord>,
    pub issues: Vec<ImportIssue>,
}

/// The session's loan book: one loaded credit sheet, one operator
pub struct LoanBook {
    config: Config,
    parser: ParserRef,
    data: RwLock<BookData>,
    entry: (PathBuf, String),
}

impl LoanBook {
    /// Create a new loan book with config and parser
    pub fn new(config: Config, parser: ParserRef) -> Self {
        Self {
            config,
            parser,
            data: RwLock::new(BookData::default()),
            entry: (PathBuf::new(), String::new()),
        }
    }

    /// Current calendar date used by the convenience methods
    pub fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Load the loan book from a credit-sheet file
    pub async fn load(&mut self, entry: PathBuf) -> CoreResult<()> {
        let rows = self
            .parser
            .parse_file(entry.clone())
            .await
            .map_err(|e| CoreError::ParseError {
                message: e.to_string(),
            })?;

        self.entry = (entry.clone(), entry.to_string_lossy().to_string());
        self.replace_data(rows, Self::today());
        Ok(())
    }

    /// Load from in-memory sheet content (upload-style collaborators)
    pub async fn load_content(&mut self, content: &str) -> CoreResult<()> {
        self.load_content_as_of(content, Self::today()).await
    }

    /// Load from in-memory sheet content with an explicit reference date
    pub async fn load_content_as_of(
        &mut self,
        content: &str,
        today: NaiveDate,
    ) -> CoreResult<()> {
        let rows = self
            .parser
            .parse(content)
            .await
            .map_err(|e| CoreError::ParseError {
                message: e.to_string(),
            })?;

        self.replace_data(rows, today);
        Ok(())
    }

    /// Reload the loan book from the last loaded file
    pub async fn reload(&mut self) -> CoreResult<()> {
        if self.entry.0.as_os_str().is_empty() {
            return Err(CoreError::NotLoaded);
        }
        self.load(self.entry.0.clone()).await
    }

    fn replace_data(&self, rows: Vec<ParsedRow>, today: NaiveDate) {
        let default_frequency =
            Frequency::parse_lenient(&self.config.import.default_frequency);

        let mut loans = Vec::new();
        let mut issues = Vec::new();
        for row in &rows {
            match Self::convert_row(row, default_frequency, today) {
                Ok(record) => loans.push(record),
                Err(issue) => {
                    log::warn!(
                        "Row {} skipped: {} (client: {})",
                        issue.row,
                        issue.reason,
                        issue.client.as_deref().unwrap_or("?")
                    );
                    issues.push(issue);
                }
            }
        }

        log::info!(
            "Loaded {} loans ({} rows flagged)",
            loans.len(),
            issues.len()
        );

        let mut data = self.data.write().unwrap();
        *data = BookData { loans, issues };
    }

    /// Convert one parsed row into a recomputed loan record, applying the
    /// documented import defaults: missing origin date → today, missing or
    /// unknown cadence → the configured default, missing paid-to-date → 0.
    /// Inbound balance and status cells are always recomputed.
    fn convert_row(
        row: &ParsedRow,
        default_frequency: Frequency,
        today: NaiveDate,
    ) -> Result<LoanRecord, ImportIssue> {
        let issue = |reason: String| ImportIssue {
            row: row.row,
            client: row.cliente.clone(),
            reason,
        };

        let client = match &row.cliente {
            Some(c) => c.clone(),
            None => return Err(issue("Missing client name".to_string())),
        };

        let principal = match (row.valor, &row.valor_raw) {
            (Some(v), _) => v,
            (None, Some(raw)) => {
                return Err(issue(format!("Unreadable principal '{}'", raw)))
            }
            (None, None) => return Err(issue("Missing principal".to_string())),
        };

        let frequency = row
            .tipo_de_pago
            .as_deref()
            .map(Frequency::parse_lenient)
            .unwrap_or(default_frequency);

        let origin_date = Some(row.fecha.unwrap_or(today));

        let id_content = format!(
            "{}|{}|{}|{}",
            client,
            principal,
            frequency,
            origin_date.map(|d| d.to_string()).unwrap_or_default()
        );

        let mut record = LoanRecord::new(
            generate_loan_id(&client, row.row, &id_content),
            client,
            principal,
            frequency,
            origin_date,
        )
        .map_err(|e| issue(e.to_string()))?;

        record.paid_to_date = row.pagos_realizados.unwrap_or(Decimal::ZERO);
        record.next_due_date = row.proximo_pago;
        record.source_row = Some(row.row);
        recompute(&mut record, today);

        Ok(record)
    }

    // ==================== Read-only Projections ====================

    /// Get all loans in insertion order
    pub fn all_loans(&self) -> Vec<LoanRecord> {
        self.data.read().unwrap().loans.clone()
    }

    /// Get loans with pagination
    pub fn loans(&self, limit: usize, offset: usize) -> Vec<LoanRecord> {
        let data = self.data.read().unwrap();
        data.loans.iter().skip(offset).take(limit).cloned().collect()
    }

    /// Get total loan count
    pub fn loans_count(&self) -> usize {
        self.data.read().unwrap().loans.len()
    }

    /// Get a loan by its stable id
    pub fn loan_by_id(&self, id: &str) -> Option<LoanRecord> {
        let data = self.data.read().unwrap();
        data.loans.iter().find(|l| l.id == id).cloned()
    }

    /// First loan whose client name matches exactly, in insertion order.
    /// Client names are not unique; when they collide this picks the
    /// earliest row. Prefer id-based access when precision matters.
    pub fn find_first_by_client(&self, name: &str) -> CoreResult<LoanRecord> {
        let query = name.trim().to_lowercase();
        let data = self.data.read().unwrap();
        data.loans
            .iter()
            .find(|l| l.client.to_lowercase() == query)
            .cloned()
            .ok_or_else(|| CoreError::ClientNotFound {
                name: name.trim().to_string(),
            })
    }

    /// Get loans with a given status
    pub fn loans_by_status(&self, status: LoanStatus) -> Vec<LoanRecord> {
        let data = self.data.read().unwrap();
        data.loans
            .iter()
            .filter(|l| l.status == status)
            .cloned()
            .collect()
    }

    /// Search loans by client-name substring, case-insensitive
    pub fn search_clients(&self, query: &str) -> Vec<LoanRecord> {
        let data = self.data.read().unwrap();
        data.loans
            .iter()
            .filter(|l| l.matches_client(query))
            .cloned()
            .collect()
    }

    /// Active loans expecting payment inside the window
    pub fn loans_due_within(&self, window: &DueWindow) -> Vec<LoanRecord> {
        let data = self.data.read().unwrap();
        data.loans
            .iter()
            .filter(|l| l.due_within(window))
            .cloned()
            .collect()
    }

    /// Rows flagged during the last import
    pub fn import_issues(&self) -> Vec<ImportIssue> {
        self.data.read().unwrap().issues.clone()
    }

    /// Portfolio-wide totals
    pub fn summary(&self) -> PortfolioSummary {
        let data = self.data.read().unwrap();
        PortfolioSummary {
            total_loans: data.loans.len(),
            active_loans: data.loans.iter().filter(|l| l.is_active()).count(),
            total_principal: data.loans.iter().map(|l| l.principal).sum(),
            total_collected: data.loans.iter().map(|l| l.paid_to_date).sum(),
            total_outstanding: data.loans.iter().map(|l| l.outstanding()).sum(),
        }
    }

    /// Per-status slices in fixed display order
    pub fn status_breakdown(&self) -> Vec<StatusBreakdown> {
        let data = self.data.read().unwrap();
        LoanStatus::ALL
            .iter()
            .map(|&status| {
                let matching: Vec<&LoanRecord> =
                    data.loans.iter().filter(|l| l.status == status).collect();
                StatusBreakdown {
                    status,
                    label: status.to_string(),
                    count: matching.len(),
                    outstanding: matching.iter().map(|l| l.outstanding()).sum(),
                }
            })
            .collect()
    }

    /// Outbound sheet rows with display colors, one per loan
    pub fn export_rows(&self) -> Vec<ExportRow> {
        let data = self.data.read().unwrap();
        data.loans.iter().map(ExportRow::from_record).collect()
    }

    // ==================== Mutations ====================

    /// Add a new credit; duplicate client names are permitted
    pub fn add_loan(&self, new: NewLoan) -> CoreResult<LoanRecord> {
        self.add_loan_as_of(new, Self::today())
    }

    /// Add a new credit with an explicit reference date
    pub fn add_loan_as_of(&self, new: NewLoan, today: NaiveDate) -> CoreResult<LoanRecord> {
        let origin_date = Some(new.origin_date.unwrap_or(today));
        let row = self.loans_count() + 1;
        let id_content = format!(
            "{}|{}|{}|{}",
            new.client,
            new.principal,
            new.frequency,
            origin_date.map(|d| d.to_string()).unwrap_or_default()
        );

        let mut record = LoanRecord::new(
            generate_loan_id(&new.client, row, &id_content),
            new.client,
            new.principal,
            new.frequency,
            origin_date,
        )?;
        recompute(&mut record, today);

        let mut data = self.data.write().unwrap();
        data.loans.push(record.clone());
        log::info!("Added loan {} for {}", record.id, record.client);
        Ok(record)
    }

    /// Apply an edit to a loan, rerun the engine, and commit. A mutator
    /// that leaves the record invalid is rejected and nothing is stored.
    pub fn update_loan<F>(&self, id: &str, mutator: F) -> CoreResult<LoanRecord>
    where
        F: FnOnce(&mut LoanRecord),
    {
        self.update_loan_as_of(id, mutator, Self::today())
    }

    /// [`update_loan`](Self::update_loan) with an explicit reference date
    pub fn update_loan_as_of<F>(
        &self,
        id: &str,
        mutator: F,
        today: NaiveDate,
    ) -> CoreResult<LoanRecord>
    where
        F: FnOnce(&mut LoanRecord),
    {
        let mut data = self.data.write().unwrap();
        let index = data
            .loans
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| CoreError::LoanNotFound { id: id.to_string() })?;

        let mut updated = data.loans[index].clone();
        mutator(&mut updated);

        if updated.client.trim().is_empty() {
            return Err(CoreError::ValidationError {
                message: "Client name must not be empty".to_string(),
            });
        }
        if updated.principal < Decimal::ZERO {
            return Err(CoreError::ValidationError {
                message: format!("Principal must not be negative: {}", updated.principal),
            });
        }
        if updated.paid_to_date < Decimal::ZERO {
            return Err(CoreError::ValidationError {
                message: format!(
                    "Paid-to-date must not be negative: {}",
                    updated.paid_to_date
                ),
            });
        }

        recompute(&mut updated, today);
        data.loans[index] = updated.clone();
        Ok(updated)
    }

    /// Record a payment against a loan id
    pub fn record_payment(&self, id: &str, amount: Decimal) -> CoreResult<LoanRecord> {
        self.record_payment_as_of(id, amount, Self::today())
    }

    /// Record a payment with an explicit reference date
    pub fn record_payment_as_of(
        &self,
        id: &str,
        amount: Decimal,
        today: NaiveDate,
    ) -> CoreResult<LoanRecord> {
        let mut data = self.data.write().unwrap();
        let index = data
            .loans
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| CoreError::LoanNotFound { id: id.to_string() })?;

        let mut updated = data.loans[index].clone();
        apply_payment(&mut updated, amount, today)?;

        data.loans[index] = updated.clone();
        log::info!(
            "Payment of {} recorded for {} ({})",
            amount,
            updated.client,
            updated.status
        );
        Ok(updated)
    }

    /// Record a payment against the first record with this client name
    pub fn record_payment_by_client(
        &self,
        name: &str,
        amount: Decimal,
    ) -> CoreResult<LoanRecord> {
        let record = self.find_first_by_client(name)?;
        self.record_payment(&record.id, amount)
    }

    /// Refresh every record's derived fields; idempotent for a fixed date
    pub fn recompute_all(&self) {
        self.recompute_all_as_of(Self::today());
    }

    /// [`recompute_all`](Self::recompute_all) with an explicit reference date
    pub fn recompute_all_as_of(&self, today: NaiveDate) {
        let mut data = self.data.write().unwrap();
        for loan in data.loans.iter_mut() {
            recompute(loan, today);
        }
    }

    /// Write the annotated sheet to a file
    pub async fn export(&self, path: PathBuf) -> CoreResult<()> {
        let cells: Vec<Vec<String>> =
            self.export_rows().iter().map(|r| r.cells()).collect();
        self.parser
            .write_file(path.clone(), &EXPORT_HEADERS, &cells)
            .await
            .map_err(|e| CoreError::ParseError {
                message: e.to_string(),
            })?;
        log::info!("Exported {} rows to {}", cells.len(), path.display());
        Ok(())
    }

    /// Configured export destination
    pub fn export_path(&self) -> PathBuf {
        self.config.export_path()
    }

    /// Records-per-page setting for list views
    pub fn page_size(&self) -> usize {
        self.config.pagination.records_per_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credito_parser::DefaultSheetParser;
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn book() -> LoanBook {
        LoanBook::new(Config::default(), Arc::new(DefaultSheetParser))
    }

    const SHEET: &str = "\
Fecha,Cliente,Valor,Tipo de pago,Próximo pago,Pagos realizados
2024-06-01,Ana Torres,1000,semanal,,200
2024-06-05,Juan Pérez,500,diario,2024-06-10,0
,María López,300,quincenal,,300
2024-06-01,,800,diario,,0
2024-06-01,Pedro Gil,ochocientos,diario,,0
";

    async fn loaded_book() -> LoanBook {
        let mut book = book();
        book.load_content_as_of(SHEET, date(2024, 6, 10)).await.unwrap();
        book
    }

    #[tokio::test]
    async fn test_load_counts_and_issues() {
        let book = loaded_book().await;
        assert_eq!(book.loans_count(), 3);

        let issues = book.import_issues();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].row, 4);
        assert!(issues[0].reason.contains("client"));
        assert_eq!(issues[1].row, 5);
        assert!(issues[1].reason.contains("ochocientos"));
    }

    #[tokio::test]
    async fn test_load_recomputes_statuses() {
        let book = loaded_book().await;

        // Ana: weekly from 2024-06-01 → due 2024-06-08, lapsed by the 10th
        let ana = book.find_first_by_client("Ana Torres").unwrap();
        assert_eq!(ana.next_due_date, Some(date(2024, 6, 8)));
        assert_eq!(ana.status, LoanStatus::Overdue);
        assert_eq!(ana.balance, Decimal::from(800));

        // Juan: explicit due date of today
        let juan = book.find_first_by_client("Juan Pérez").unwrap();
        assert_eq!(juan.status, LoanStatus::DueToday);

        // María: fully paid despite having no origin date
        let maria = book.find_first_by_client("María López").unwrap();
        assert_eq!(maria.status, LoanStatus::Paid);
        assert_eq!(maria.next_due_date, None);
    }

    #[tokio::test]
    async fn test_missing_origin_date_defaults_to_today() {
        let mut book = book();
        book.load_content_as_of(
            "Cliente,Valor\nSolo Nombre,100\n",
            date(2024, 6, 10),
        )
        .await
        .unwrap();

        let record = book.find_first_by_client("Solo Nombre").unwrap();
        assert_eq!(record.origin_date, Some(date(2024, 6, 10)));
        // daily default cadence → due tomorrow
        assert_eq!(record.next_due_date, Some(date(2024, 6, 11)));
        assert_eq!(record.status, LoanStatus::DueSoon);
    }

    #[tokio::test]
    async fn test_find_first_by_client_is_first_match() {
        let book = loaded_book().await;
        book.add_loan_as_of(
            NewLoan {
                client: "Ana Torres".to_string(),
                principal: Decimal::from(9999),
                frequency: Frequency::Monthly,
                origin_date: None,
            },
            date(2024, 6, 10),
        )
        .unwrap();

        let found = book.find_first_by_client("ana torres").unwrap();
        assert_eq!(found.principal, Decimal::from(1000));
    }

    #[tokio::test]
    async fn test_find_first_by_client_not_found() {
        let book = loaded_book().await;
        assert!(matches!(
            book.find_first_by_client("Nadie"),
            Err(CoreError::ClientNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_filters_and_search() {
        let book = loaded_book().await;

        assert_eq!(book.loans_by_status(LoanStatus::Overdue).len(), 1);
        assert_eq!(book.loans_by_status(LoanStatus::Paid).len(), 1);
        assert_eq!(book.search_clients("a").len(), 3);
        assert_eq!(book.search_clients("pérez").len(), 1);
        assert_eq!(book.search_clients("zzz").len(), 0);
    }

    #[tokio::test]
    async fn test_loans_due_within_window() {
        let book = loaded_book().await;
        let today = date(2024, 6, 10);

        let due_now = book.loans_due_within(&DueWindow::next_days(today, 0));
        // Ana (lapsed) and Juan (today); María is paid
        assert_eq!(due_now.len(), 2);

        let overdue_only = book.loans_due_within(&DueWindow::overdue(today));
        assert_eq!(overdue_only.len(), 1);
        assert_eq!(overdue_only[0].client, "Ana Torres");
    }

    #[tokio::test]
    async fn test_add_loan_allows_duplicate_clients() {
        let book = loaded_book().await;
        let before = book.loans_count();

        book.add_loan_as_of(
            NewLoan {
                client: "Juan Pérez".to_string(),
                principal: Decimal::from(250),
                frequency: Frequency::Weekly,
                origin_date: Some(date(2024, 6, 10)),
            },
            date(2024, 6, 10),
        )
        .unwrap();

        assert_eq!(book.loans_count(), before + 1);
        assert_eq!(book.search_clients("Juan Pérez").len(), 2);
    }

    #[tokio::test]
    async fn test_add_loan_computes_first_due_date() {
        let book = book();
        let record = book
            .add_loan_as_of(
                NewLoan {
                    client: "Nueva Clienta".to_string(),
                    principal: Decimal::from(400),
                    frequency: Frequency::Biweekly,
                    origin_date: Some(date(2024, 6, 10)),
                },
                date(2024, 6, 10),
            )
            .unwrap();

        assert_eq!(record.next_due_date, Some(date(2024, 6, 25)));
        assert_eq!(record.status, LoanStatus::Current);
        assert!(book.loan_by_id(&record.id).is_some());
    }

    #[tokio::test]
    async fn test_add_loan_rejects_invalid_input() {
        let book = book();
        let result = book.add_loan_as_of(
            NewLoan {
                client: "".to_string(),
                principal: Decimal::from(100),
                frequency: Frequency::Daily,
                origin_date: None,
            },
            date(2024, 6, 10),
        );
        assert!(matches!(result, Err(CoreError::ValidationError { .. })));
        assert_eq!(book.loans_count(), 0);
    }

    #[tokio::test]
    async fn test_record_payment_by_client_mutates_first_match() {
        let book = loaded_book().await;

        let updated = book
            .record_payment_by_client("Juan Pérez", Decimal::from(500))
            .unwrap();

        assert_eq!(updated.status, LoanStatus::Paid);
        assert_eq!(updated.next_due_date, None);

        // committed to the store, same record by id
        let stored = book.loan_by_id(&updated.id).unwrap();
        assert_eq!(stored.paid_to_date, Decimal::from(500));
    }

    #[tokio::test]
    async fn test_record_payment_unknown_id() {
        let book = loaded_book().await;
        assert!(matches!(
            book.record_payment_as_of("cr-x:9:ffffffff", Decimal::ONE, date(2024, 6, 10)),
            Err(CoreError::LoanNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_failed_payment_leaves_store_untouched() {
        let book = loaded_book().await;
        let ana = book.find_first_by_client("Ana Torres").unwrap();

        let result =
            book.record_payment_as_of(&ana.id, Decimal::from(-5), date(2024, 6, 10));
        assert!(result.is_err());

        let after = book.loan_by_id(&ana.id).unwrap();
        assert_eq!(after, ana);
    }

    #[tokio::test]
    async fn test_update_loan_recomputes() {
        let book = loaded_book().await;
        let ana = book.find_first_by_client("Ana Torres").unwrap();

        let updated = book
            .update_loan_as_of(
                &ana.id,
                |l| l.paid_to_date = Decimal::from(1000),
                date(2024, 6, 10),
            )
            .unwrap();

        assert_eq!(updated.status, LoanStatus::Paid);
        assert_eq!(updated.balance, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_update_loan_rejects_invalid_edit() {
        let book = loaded_book().await;
        let ana = book.find_first_by_client("Ana Torres").unwrap();

        let result = book.update_loan_as_of(
            &ana.id,
            |l| l.paid_to_date = Decimal::from(-1),
            date(2024, 6, 10),
        );

        assert!(matches!(result, Err(CoreError::ValidationError { .. })));
        assert_eq!(book.loan_by_id(&ana.id).unwrap(), ana);
    }

    #[tokio::test]
    async fn test_recompute_all_is_idempotent() {
        let book = loaded_book().await;
        let today = date(2024, 6, 10);

        book.recompute_all_as_of(today);
        let first = book.all_loans();
        book.recompute_all_as_of(today);

        assert_eq!(book.all_loans(), first);
    }

    #[tokio::test]
    async fn test_summary_and_breakdown() {
        let book = loaded_book().await;
        let summary = book.summary();

        assert_eq!(summary.total_loans, 3);
        assert_eq!(summary.active_loans, 2);
        assert_eq!(summary.total_principal, Decimal::from(1800));
        assert_eq!(summary.total_collected, Decimal::from(500));
        assert_eq!(summary.total_outstanding, Decimal::from(1300));

        let breakdown = book.status_breakdown();
        assert_eq!(breakdown.len(), LoanStatus::ALL.len());
        let overdue = breakdown
            .iter()
            .find(|b| b.status == LoanStatus::Overdue)
            .unwrap();
        assert_eq!(overdue.count, 1);
        assert_eq!(overdue.outstanding, Decimal::from(800));
        assert_eq!(overdue.label, "Vencido");
    }

    #[tokio::test]
    async fn test_export_reimport_round_trip() {
        let book = loaded_book().await;
        let today = date(2024, 6, 10);

        let rows: Vec<Vec<String>> =
            book.export_rows().iter().map(|r| r.cells()).collect();
        let content =
            credito_parser::CsvSheetParser::write_records(&EXPORT_HEADERS, &rows).unwrap();

        let mut reloaded = LoanBook::new(Config::default(), Arc::new(DefaultSheetParser));
        reloaded.load_content_as_of(&content, today).await.unwrap();

        let before = book.all_loans();
        let after = reloaded.all_loans();
        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(after.iter()) {
            assert_eq!(b.client, a.client);
            assert_eq!(b.status, a.status);
            assert_eq!(b.outstanding(), a.outstanding());
            assert_eq!(b.next_due_date, a.next_due_date);
        }
    }

    #[tokio::test]
    async fn test_reload_without_entry_is_not_loaded() {
        let mut book = book();
        assert!(matches!(book.reload().await, Err(CoreError::NotLoaded)));
    }
}
