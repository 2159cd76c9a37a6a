//! Error type for URL building and auth query decoding.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UrlError {
    /// Configured base endpoint is not an absolute URL that can carry a path.
    #[error("invalid WaterButler base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The session cookie the backend authenticates with is not in the cookie string.
    #[error("cookie {name:?} not present in cookie string")]
    MissingCookie { name: String },

    /// Auth query is missing a required parameter.
    #[error("missing query parameter {0:?}")]
    MissingParam(&'static str),

    #[error("unknown action {0:?}")]
    UnknownAction(String),

    #[error("unknown log action {0:?}")]
    UnknownLogAction(String),

    /// Log callback body is not valid JSON.
    #[error("invalid log payload: {0}")]
    InvalidPayload(String),

    /// Log callback body is missing a required field.
    #[error("missing payload field {0:?}")]
    MissingField(&'static str),
}
