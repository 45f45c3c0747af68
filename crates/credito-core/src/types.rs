//! Basic types for the core loan module

use serde::{Deserialize, Serialize};

/// Payment cadence enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    /// Payment expected every day
    #[serde(rename = "diario")]
    Daily,
    /// Payment expected every 7 days
    #[serde(rename = "semanal")]
    Weekly,
    /// Payment expected every 15 days
    #[serde(rename = "quincenal")]
    Biweekly,
    /// Payment expected every 30 days
    #[serde(rename = "mensual")]
    Monthly,
}

impl Frequency {
    /// Fixed interval in days between expected payments
    pub fn interval_days(&self) -> i64 {
        match self {
            Frequency::Daily => 1,
            Frequency::Weekly => 7,
            Frequency::Biweekly => 15,
            Frequency::Monthly => 30,
        }
    }

    /// Lenient import parse: unrecognized or missing labels degrade to the
    /// daily cadence instead of failing, so a bad cell never blocks a sheet
    pub fn parse_lenient(s: &str) -> Frequency {
        s.parse().unwrap_or(Frequency::Daily)
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Frequency::Daily
    }
}

impl std::str::FromStr for Frequency {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "diario" | "daily" => Ok(Frequency::Daily),
            "semanal" | "weekly" => Ok(Frequency::Weekly),
            "quincenal" | "biweekly" => Ok(Frequency::Biweekly),
            "mensual" | "monthly" => Ok(Frequency::Monthly),
            _ => Err(format!("Invalid payment frequency: {}", s)),
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Daily => write!(f, "diario"),
            Frequency::Weekly => write!(f, "semanal"),
            Frequency::Biweekly => write!(f, "quincenal"),
            Frequency::Monthly => write!(f, "mensual"),
        }
    }
}

/// Loan status enumeration. Computed only by the status engine; nothing
/// else assigns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    /// Balance at or below zero
    #[serde(rename = "Pagado")]
    Paid,
    /// Next due date already lapsed
    #[serde(rename = "Vencido")]
    Overdue,
    /// Next due date is today
    #[serde(rename = "Pagan hoy")]
    DueToday,
    /// Next due date within the due-soon window
    #[serde(rename = "Próximo a vencer")]
    DueSoon,
    /// Next due date beyond the due-soon window
    #[serde(rename = "Al día")]
    Current,
    /// No resolvable due date
    #[serde(rename = "Sin fecha")]
    NoDate,
}

impl LoanStatus {
    /// All states in the fixed display order used by breakdown reports
    pub const ALL: [LoanStatus; 6] = [
        LoanStatus::Overdue,
        LoanStatus::DueToday,
        LoanStatus::DueSoon,
        LoanStatus::Current,
        LoanStatus::Paid,
        LoanStatus::NoDate,
    ];

    /// ARGB fill color used by styled exporters; `NoDate` rows stay unfilled
    pub fn fill_color(&self) -> Option<&'static str> {
        match self {
            LoanStatus::Overdue => Some("FFC7CE"),
            LoanStatus::DueToday => Some("ADD8E6"),
            LoanStatus::DueSoon => Some("FFEB9C"),
            LoanStatus::Current => Some("C6EFCE"),
            LoanStatus::Paid => Some("DDBEA9"),
            LoanStatus::NoDate => None,
        }
    }
}

impl Default for LoanStatus {
    fn default() -> Self {
        LoanStatus::NoDate
    }
}

impl std::str::FromStr for LoanStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pagado" | "paid" => Ok(LoanStatus::Paid),
            "vencido" | "overdue" => Ok(LoanStatus::Overdue),
            "pagan hoy" | "due-today" => Ok(LoanStatus::DueToday),
            "próximo a vencer" | "proximo a vencer" | "due-soon" => Ok(LoanStatus::DueSoon),
            "al día" | "al dia" | "current" => Ok(LoanStatus::Current),
            "sin fecha" | "no-date" => Ok(LoanStatus::NoDate),
            _ => Err(format!("Invalid loan status: {}", s)),
        }
    }
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoanStatus::Paid => write!(f, "Pagado"),
            LoanStatus::Overdue => write!(f, "Vencido"),
            LoanStatus::DueToday => write!(f, "Pagan hoy"),
            LoanStatus::DueSoon => write!(f, "Próximo a vencer"),
            LoanStatus::Current => write!(f, "Al día"),
            LoanStatus::NoDate => write!(f, "Sin fecha"),
        }
    }
}
