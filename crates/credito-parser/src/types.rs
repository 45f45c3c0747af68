//! Common types for the credit-sheet parser

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canonical (normalized) column headers of a credit sheet
pub mod headers {
    pub const FECHA: &str = "Fecha";
    pub const CLIENTE: &str = "Cliente";
    pub const VALOR: &str = "Valor";
    pub const TIPO_DE_PAGO: &str = "Tipo de pago";
    pub const PROXIMO_PAGO: &str = "Próximo pago";
    pub const PAGOS_REALIZADOS: &str = "Pagos realizados";
    pub const SALDO_RESTANTE: &str = "Saldo restante";
    pub const ESTATUS: &str = "Estatus";
}

/// One raw sheet row: normalized header → cell text, plus its 1-based
/// data row number for diagnostics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetRow {
    pub row: usize,
    cells: HashMap<String, String>,
}

impl SheetRow {
    pub fn new(row: usize) -> Self {
        Self {
            row,
            cells: HashMap::new(),
        }
    }

    /// Get a cell by normalized header; blank cells read as absent
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells
            .get(header)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    pub fn insert(&mut self, header: String, value: String) {
        self.cells.insert(header, value);
    }

    /// Inner map reference for iteration
    pub fn inner(&self) -> &HashMap<String, String> {
        &self.cells
    }
}

/// One typed row after lenient cell coercion. Every field except the row
/// number is optional: a corrupt cell degrades to `None` instead of failing
/// the row (`valor_raw` keeps the original text so a malformed principal can
/// be reported).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedRow {
    /// 1-based data row number in the source sheet
    pub row: usize,
    /// "Fecha": credit origin date
    pub fecha: Option<NaiveDate>,
    /// "Cliente"
    pub cliente: Option<String>,
    /// "Valor": principal; None when the cell is missing or malformed
    pub valor: Option<Decimal>,
    /// Original "Valor" text when the cell was present
    pub valor_raw: Option<String>,
    /// "Tipo de pago": payment cadence label, verbatim
    pub tipo_de_pago: Option<String>,
    /// "Próximo pago": next due date
    pub proximo_pago: Option<NaiveDate>,
    /// "Pagos realizados": cumulative amount paid
    pub pagos_realizados: Option<Decimal>,
}
