use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the recommendation and chat clients.
///
/// Every variant renders as a message fit for direct display, so callers
/// can show `error.to_string()` without classifying first.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never reached the server or the response never arrived.
    #[error("Failed to connect to the server. Please check your network connection.")]
    Connect(#[source] reqwest::Error),

    /// The server answered with a non-success status. The message is the
    /// server's own `error` string when the body carried one.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// A success response carried a body that does not match the expected
    /// payload shape.
    #[error("unreadable response from {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    /// The configured base URL could not be parsed.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}
