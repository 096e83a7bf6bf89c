//! Unified application error type.
//! All modules (db, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Snapshot serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid shift: {0} (expected A, B or C)")]
    InvalidShift(String),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    // ---------------------------
    // Form errors
    // ---------------------------
    #[error("Please enter {0}")]
    MissingField(&'static str),

    #[error("No data found for {0}")]
    NoDataFound(String),

    #[error("Checklist is incomplete: {0} required field(s) still empty")]
    Incomplete(usize),

    // ---------------------------
    // Notification errors
    // ---------------------------
    #[error("Failed to send email. Please try again.")]
    SendFailed,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
