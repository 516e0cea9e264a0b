use thiserror::Error;

/// Errors from the VLC HTTP interface.
#[derive(Debug, Error)]
pub enum VlcError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),
}
