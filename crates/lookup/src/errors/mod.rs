//! Error types for lookup and catalog search operations.
//!
//! Two things the resolver treats as non-errors have no variant here on
//! purpose: a stale response is a discarded success, and sub-minimum-length
//! input is a no-op. Everything below is a real transport or endpoint
//! failure, and call sites swallow all of them after clearing the
//! "searching" indicator (lookups are assistive, never required).

use thiserror::Error;

/// Errors that can occur while talking to the lookup/search endpoint.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The request to the endpoint timed out.
    #[error("Lookup timed out")]
    Timeout,

    /// The endpoint rate limited the request (HTTP 429).
    #[error("Lookup rate limited")]
    RateLimited,

    /// The endpoint returned a non-success status.
    #[error("Lookup endpoint error ({status}): {message}")]
    Endpoint {
        /// HTTP status code returned by the endpoint
        status: u16,
        /// Error message from the response body, if any
        message: String,
    },

    /// The response body could not be decoded.
    #[error("Malformed lookup response: {0}")]
    Decode(String),

    /// A network error occurred while communicating with the endpoint.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
