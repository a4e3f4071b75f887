// src/core/error.rs

use reqwest::StatusCode;
use thiserror::Error;

/// Shown when the user submits an empty target.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a URL";

/// Shown for every scan failure, whatever the underlying cause.
pub const SCAN_FAILED_MESSAGE: &str = "Error scanning website. Please try again.";

/// Shown in the export banner when the PDF could not be produced or saved.
pub const EXPORT_FAILED_MESSAGE: &str = "Error downloading report. Please try again.";

/// The backend answered, but not with a usable report.
#[derive(Error, Debug)]
pub enum MalformedReportError {
    #[error("report body is not valid JSON for a report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("report body is not a JSON object")]
    NotAnObject,
}

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("no URL entered")]
    EmptyInput,

    #[error("scan request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("scanning service answered with status {0}")]
    Status(StatusCode),

    #[error("malformed report: {0}")]
    MalformedReport(#[from] MalformedReportError),
}

impl ScanError {
    /// Short user-safe text. The underlying cause is only ever logged.
    pub fn user_message(&self) -> &'static str {
        match self {
            ScanError::EmptyInput => EMPTY_INPUT_MESSAGE,
            _ => SCAN_FAILED_MESSAGE,
        }
    }
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("export request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("rendering service answered with status {0}")]
    Status(StatusCode),

    #[error("could not save the report: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid backend URL {value:?}: {source}")]
    InvalidBackendUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("backend URL must use http or https, got {0:?}")]
    UnsupportedScheme(String),

    #[error("could not build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_hide_the_cause() {
        assert_eq!(ScanError::EmptyInput.user_message(), "Please enter a URL");
        let err = ScanError::Status(StatusCode::BAD_GATEWAY);
        assert_eq!(
            err.user_message(),
            "Error scanning website. Please try again."
        );
        assert!(err.to_string().contains("502"));
        let err = ScanError::from(MalformedReportError::NotAnObject);
        assert_eq!(err.user_message(), SCAN_FAILED_MESSAGE);
    }
}
