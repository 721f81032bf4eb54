//! Unified application error type.
//! Engine, stores, config and CLI all return AppError so callers can
//! tell user mistakes apart from store failures.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // User input
    // ---------------------------
    #[error("Invalid input: {0}")]
    Input(String),

    #[error("No team found for query '{0}'")]
    NotFound(String),

    // ---------------------------
    // Engine
    // ---------------------------
    #[error("Stale reference: no record at position {0}, search again")]
    StaleReference(usize),

    // ---------------------------
    // Row store
    // ---------------------------
    #[error("Roster store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Failed to write roster store: {0}")]
    StoreWrite(String),

    #[error("Roster is missing required column '{0}'")]
    MissingColumn(String),

    // ---------------------------
    // Config
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Wrapped library errors
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
