//! Error types for the preference store.

use thiserror::Error;

/// Errors that can occur while reading or writing preferences.
#[derive(Error, Debug)]
pub enum PrefsError {
    /// The backing store rejected the operation (quota, availability).
    #[error("Preference store unavailable: {0}")]
    Unavailable(String),

    /// A stored value could not be decoded.
    #[error("Malformed preference value: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PrefsError>;
