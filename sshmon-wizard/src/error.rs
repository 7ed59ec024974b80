//! Hard-error types for the wizard pipeline.
//!
//! Validation findings are not errors - they accumulate as message lists on
//! the stage result. Errors here cover the cases the pipeline cannot degrade
//! past: unreadable payload input and malformed top-level JSON.

use thiserror::Error;

/// Errors that can occur while reading or writing stage payloads.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// Reading the payload input failed.
    #[error("Failed to read payload: {0}")]
    Io(#[from] std::io::Error),

    /// The top-level payload was not a JSON object of strings.
    #[error("Malformed payload JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from decoding a serialized stage blob.
///
/// These never escape the normalizer: a blob that fails to decode is treated
/// as absent data, matching the original wizard's silent degradation. The
/// variants exist so the degradation can be logged with a cause.
#[derive(Debug, Error)]
pub enum BlobError {
    #[error("Invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
