//! Report structures consumed by the CLI and exporters

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::models::LoanRecord;
use super::types::LoanStatus;

/// Canonical column order of an exported credit sheet
pub const EXPORT_HEADERS: [&str; 8] = [
    "Fecha",
    "Cliente",
    "Valor",
    "Tipo de pago",
    "Próximo pago",
    "Pagos realizados",
    "Saldo restante",
    "Estatus",
];

/// Portfolio-wide totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_loans: usize,
    pub active_loans: usize,
    pub total_principal: Decimal,
    pub total_collected: Decimal,
    /// Sum of per-record outstanding amounts (each floored at zero)
    pub total_outstanding: Decimal,
}

impl std::fmt::Display for PortfolioSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use credito_utils::format_number;
        writeln!(f, "Créditos: {} ({} activos)", self.total_loans, self.active_loans)?;
        writeln!(f, "Prestado:  {}", format_number(self.total_principal))?;
        writeln!(f, "Cobrado:   {}", format_number(self.total_collected))?;
        write!(f, "Pendiente: {}", format_number(self.total_outstanding))
    }
}

/// Per-status slice of the portfolio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub status: LoanStatus,
    /// Display label, e.g. "Vencido"
    pub label: String,
    pub count: usize,
    pub outstanding: Decimal,
}

/// One outbound sheet row with its display color
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRow {
    pub fecha: String,
    pub cliente: String,
    pub valor: String,
    pub tipo_de_pago: String,
    pub proximo_pago: String,
    pub pagos_realizados: String,
    /// Outstanding amount, floored at zero; a paid loan never shows negative
    pub saldo_restante: String,
    pub estatus: String,
    /// ARGB fill for styled exporters; None leaves the row unfilled
    pub fill_color: Option<&'static str>,
}

impl ExportRow {
    /// Build the outbound row for one record
    pub fn from_record(record: &LoanRecord) -> Self {
        Self {
            fecha: record
                .origin_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            cliente: record.client.clone(),
            valor: record.principal.to_string(),
            tipo_de_pago: record.frequency.to_string(),
            proximo_pago: record
                .next_due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            pagos_realizados: record.paid_to_date.to_string(),
            saldo_restante: record.outstanding().to_string(),
            estatus: record.status.to_string(),
            fill_color: record.status.fill_color(),
        }
    }

    /// Cells in [`EXPORT_HEADERS`] order
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.fecha.clone(),
            self.cliente.clone(),
            self.valor.clone(),
            self.tipo_de_pago.clone(),
            self.proximo_pago.clone(),
            self.pagos_realizados.clone(),
            self.saldo_restante.clone(),
            self.estatus.clone(),
        ]
    }
}
