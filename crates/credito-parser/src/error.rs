//! Error types for credito-parser

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Syntax error at {location}: {message}")]
    SyntaxError { location: String, message: String },

    #[error("Missing required column: {header}")]
    MissingHeader { header: String },

    #[error("CSV error")]
    CsvError(#[from] csv::Error),

    #[error("IO error")]
    IoError(#[from] io::Error),

    #[error("Internal error")]
    InternalError,
}
