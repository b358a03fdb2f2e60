//! Unified application error type.
//! All modules (config, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Projection errors
    // ---------------------------
    #[error("Invalid request: {field}: {reason}")]
    InvalidRequest { field: String, reason: String },

    #[error("Schedule unreachable: no work day found after {advances} day advances (last date checked: {last_date})")]
    ScheduleUnreachable { advances: u32, last_date: NaiveDate },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    pub fn invalid_request(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::InvalidRequest {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
