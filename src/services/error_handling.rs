use thiserror::Error;
use tracing::{debug, info, warn};

/// Why the record collection could not be loaded.
///
/// Kept by value in the list view's failed state, so it is cheap to clone and
/// carries only strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request to {endpoint} failed: {message}")]
    Network { endpoint: String, message: String },

    #[error("{endpoint} answered with HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("Could not decode records from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    #[error("Request to {endpoint} timed out after {duration_secs} seconds")]
    Timeout { endpoint: String, duration_secs: u64 },
}

/// Errors surfaced by the library.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Preference slot '{key}' could not be written: {message}")]
    Preference { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

/// Structured logging helpers
pub struct LogHelper;

impl LogHelper {
    pub fn log_fetch_started(endpoint: &str) {
        info!(endpoint = %endpoint, "Fetching records");
    }

    pub fn log_fetch_completed(endpoint: &str, count: usize) {
        info!(endpoint = %endpoint, count = count, "Records loaded");
    }

    pub fn log_fetch_failed(error: &FetchError) {
        warn!(error = %error, "Record fetch failed");
    }

    pub fn log_preference_write_failed(key: &str, error: &DashboardError) {
        warn!(key = %key, error = %error, "Could not persist preference");
    }

    pub fn log_preference_fallback(key: &str, raw: &str) {
        debug!(key = %key, raw = %raw, "Stored preference unreadable, using default");
    }
}

/// User-friendly error messages
pub struct UserErrorFormatter;

impl UserErrorFormatter {
    pub fn format_fetch_error(error: &FetchError) -> String {
        match error {
            FetchError::Network { .. } => {
                "Could not reach the comment service. Check your connection and try again."
                    .to_string()
            }
            FetchError::Status { status, .. } if *status >= 500 => {
                format!("The comment service is having trouble (HTTP {}). Please try again.", status)
            }
            FetchError::Status { status, .. } => {
                format!("The comment service rejected the request (HTTP {}).", status)
            }
            FetchError::Decode { .. } => {
                "The comment service sent data in an unexpected format.".to_string()
            }
            FetchError::Timeout { duration_secs, .. } => {
                let unit = if *duration_secs == 1 { "second" } else { "seconds" };
                format!("The comment service did not answer within {} {}.", duration_secs, unit)
            }
        }
    }
}
