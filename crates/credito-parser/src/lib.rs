//! Credit-sheet parser implementation
//!
//! A lightweight CSV credit-sheet parser with lenient cell coercion.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

pub mod error;
pub mod parser;
pub mod types;

pub use error::ParseError;
pub use parser::CsvSheetParser;

// Re-export commonly used types
pub use types::{headers, ParsedRow, SheetRow};

// ==================== Utility Functions ====================

/// Generate a short hash (8 characters) from content
pub fn short_hash(content: &str) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    let hash = hasher.finish();

    // Take first 8 characters of hex hash
    format!("{:016x}", hash)[..8].to_string()
}

/// Generate a stable loan ID from client name, sheet row and row content.
/// Client names are not unique; the id is what mutation APIs key on.
pub fn generate_loan_id(client: &str, row: usize, content: &str) -> String {
    let client_part: String = client
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    let hash = short_hash(content);
    format!("cr-{}:{}:{}", client_part, row, hash)
}

// ==================== Parser Trait ====================

/// Parser reference type
pub type ParserRef = Arc<dyn CreditSheetParser>;

/// Trait for credit-sheet parsers
#[async_trait]
pub trait CreditSheetParser: Send + Sync {
    /// Parse sheet content into typed rows
    async fn parse(&self, content: &str) -> Result<Vec<ParsedRow>, ParseError>;

    /// Parse from a file path
    async fn parse_file(&self, path: PathBuf) -> Result<Vec<ParsedRow>, ParseError>;

    /// Write headers and rows to a file path
    async fn write_file(
        &self,
        path: PathBuf,
        header_row: &[&str],
        rows: &[Vec<String>],
    ) -> Result<(), ParseError>;
}

/// Default parser implementation
#[derive(Debug, Default)]
pub struct DefaultSheetParser;

#[async_trait]
impl CreditSheetParser for DefaultSheetParser {
    async fn parse(&self, content: &str) -> Result<Vec<ParsedRow>, ParseError> {
        CsvSheetParser::parse(content)
    }

    async fn parse_file(&self, path: PathBuf) -> Result<Vec<ParsedRow>, ParseError> {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(ParseError::IoError)?;
        CsvSheetParser::parse(&content).map_err(|e| match e {
            ParseError::MissingHeader { header } => ParseError::MissingHeader { header },
            other => ParseError::SyntaxError {
                location: path.to_string_lossy().to_string(),
                message: other.to_string(),
            },
        })
    }

    async fn write_file(
        &self,
        path: PathBuf,
        header_row: &[&str],
        rows: &[Vec<String>],
    ) -> Result<(), ParseError> {
        let content = CsvSheetParser::write_records(header_row, rows)?;
        tokio::fs::write(&path, content)
            .await
            .map_err(ParseError::IoError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_hash_is_stable() {
        assert_eq!(short_hash("abc"), short_hash("abc"));
        assert_ne!(short_hash("abc"), short_hash("abd"));
        assert_eq!(short_hash("abc").len(), 8);
    }

    #[test]
    fn test_generate_loan_id() {
        let id = generate_loan_id("Ana Torres", 3, "Ana Torres|1000|semanal");
        assert!(id.starts_with("cr-ana-torres:3:"));
        assert_eq!(
            id,
            generate_loan_id("Ana Torres", 3, "Ana Torres|1000|semanal")
        );
    }
}
