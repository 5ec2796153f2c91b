//! Error types for registry searches.

use std::error::Error as StdError;
use thiserror::Error;

/// Errors that can occur while querying the registry.
///
/// The UI only ever sees the `Display` text of these errors. Each variant
/// renders the most specific description it has.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request never produced a response.
    #[error("{message}")]
    Network { message: String },

    /// The registry answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    /// The body did not match the expected search response shape.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot be joined with the search path.
    #[error("Invalid registry URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return SearchError::Status {
                status: status.as_u16(),
            };
        }
        SearchError::Network {
            message: innermost_message(&err),
        }
    }
}

/// Text of the deepest error in the `source()` chain.
pub fn innermost_message(err: &(dyn StdError + 'static)) -> String {
    let mut current = err;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}
