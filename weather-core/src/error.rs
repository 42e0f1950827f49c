use reqwest::StatusCode;
use thiserror::Error;

/// Why a provider could not produce a reading.
///
/// The widget shows a single message for every variant; the detail is only
/// logged.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to send request to weather provider: {0}")]
    Request(#[from] reqwest::Error),

    #[error("weather provider returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to parse weather provider response: {0}")]
    Parse(#[from] serde_json::Error),
}
