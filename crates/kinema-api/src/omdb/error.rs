use thiserror::Error;

/// Errors from the OMDb client.
///
/// The `MetadataSource` impl collapses all of these to "unresolved";
/// the distinctions exist for logging only.
#[derive(Debug, Error)]
pub enum OmdbError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("no match: {0}")]
    NotFound(String),

    #[error("parse error: {0}")]
    Parse(String),
}
