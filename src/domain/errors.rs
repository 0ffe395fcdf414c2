//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Host unreachable, connection reset, body could not be read.
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Body was not a JSON array of the expected records.
    #[error("Malformed response body: {0}")]
    Parse(String),

    #[error("Invalid API base URL: {0}")]
    InvalidUrl(String),

    #[error("UI error: {0}")]
    Ui(String),
}
