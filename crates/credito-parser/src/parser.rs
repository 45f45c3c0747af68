//! Credit-sheet parser implementation

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ParseError;
use crate::types::{headers, ParsedRow, SheetRow};
use credito_utils::capitalize_header;

/// Leading ISO date token: YYYY-MM-DD, with or without a time suffix
static ISO_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})").unwrap());

/// Leading day-first date token: DD/MM/YYYY or DD-MM-YYYY
static DAY_FIRST_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})[/-](\d{1,2})[/-](\d{4})").unwrap());

/// Simple CSV-backed parser for credit sheets
pub struct CsvSheetParser;

impl CsvSheetParser {
    /// Parse sheet content into typed rows
    pub fn parse(content: &str) -> Result<Vec<ParsedRow>, ParseError> {
        let raw = Self::read_rows(content)?;
        Ok(raw.into_iter().map(Self::parse_row).collect())
    }

    /// Read CSV content into raw rows keyed by normalized header
    pub fn read_rows(content: &str) -> Result<Vec<SheetRow>, ParseError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        let header_names: Vec<String> = reader
            .headers()?
            .iter()
            .map(capitalize_header)
            .collect();

        // A sheet without these two columns cannot describe any credit
        for required in [headers::CLIENTE, headers::VALOR] {
            if !header_names.iter().any(|h| h == required) {
                return Err(ParseError::MissingHeader {
                    header: required.to_string(),
                });
            }
        }

        let mut rows = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record?;
            let mut row = SheetRow::new(i + 1);
            for (header, cell) in header_names.iter().zip(record.iter()) {
                row.insert(header.clone(), cell.to_string());
            }
            rows.push(row);
        }

        Ok(rows)
    }

    /// Coerce one raw row into typed optionals. Corrupt date and paid cells
    /// degrade to None; the principal keeps its raw text for diagnostics.
    pub fn parse_row(raw: SheetRow) -> ParsedRow {
        let valor_raw = raw.get(headers::VALOR).map(|s| s.to_string());
        ParsedRow {
            row: raw.row,
            fecha: raw.get(headers::FECHA).and_then(Self::parse_date_cell),
            cliente: raw.get(headers::CLIENTE).map(|s| s.to_string()),
            valor: valor_raw.as_deref().and_then(Self::parse_amount_cell),
            valor_raw,
            tipo_de_pago: raw.get(headers::TIPO_DE_PAGO).map(|s| s.to_string()),
            proximo_pago: raw
                .get(headers::PROXIMO_PAGO)
                .and_then(Self::parse_date_cell),
            pagos_realizados: raw
                .get(headers::PAGOS_REALIZADOS)
                .and_then(Self::parse_amount_cell),
        }
    }

    /// Parse a date cell. Accepts ISO (YYYY-MM-DD) and day-first
    /// (DD/MM/YYYY, DD-MM-YYYY) forms, ignoring any trailing time component.
    /// Anything else reads as missing.
    pub fn parse_date_cell(cell: &str) -> Option<NaiveDate> {
        let cell = cell.trim();

        if let Some(caps) = ISO_DATE.captures(cell) {
            let year: i32 = caps[1].parse().ok()?;
            let month: u32 = caps[2].parse().ok()?;
            let day: u32 = caps[3].parse().ok()?;
            return NaiveDate::from_ymd_opt(year, month, day);
        }

        if let Some(caps) = DAY_FIRST_DATE.captures(cell) {
            let day: u32 = caps[1].parse().ok()?;
            let month: u32 = caps[2].parse().ok()?;
            let year: i32 = caps[3].parse().ok()?;
            return NaiveDate::from_ymd_opt(year, month, day);
        }

        None
    }

    /// Parse a money cell. Strips currency symbols, spaces and thousands
    /// separators before reading a decimal value.
    pub fn parse_amount_cell(cell: &str) -> Option<Decimal> {
        let cleaned: String = cell
            .trim()
            .chars()
            .filter(|c| !matches!(c, ',' | '$' | ' '))
            .collect();
        if cleaned.is_empty() {
            return None;
        }
        Decimal::from_str(&cleaned).ok()
    }

    /// Serialize headers and rows back to CSV
    pub fn write_records(
        header_row: &[&str],
        rows: &[Vec<String>],
    ) -> Result<String, ParseError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(header_row)?;
        for row in rows {
            writer.write_record(row)?;
        }
        let bytes = writer.into_inner().map_err(|_| ParseError::InternalError)?;
        String::from_utf8(bytes).map_err(|_| ParseError::InternalError)
    }
}
