//! Error types for the dictionary API client.
//!
//! # Design
//! The service reports failures inside an otherwise well-formed JSON body
//! (`errorCode`/`errorMessage`), so `Service` gets a dedicated variant
//! separate from transport failures and from bodies that fit neither the
//! error envelope nor the expected payload. The three variants are mutually
//! exclusive per call; a call never yields a partial result.

use std::fmt;

/// Errors returned by [`DictionaryClient`](crate::DictionaryClient) operations.
#[derive(Debug)]
pub enum ApiError {
    /// Connection or IO-level failure before the body could be read.
    Transport(ureq::Error),

    /// The service answered with its JSON error envelope. An absent code or
    /// message arrives as an empty string.
    Service { code: String, message: String },

    /// The body parsed as neither the error envelope nor the expected
    /// payload; carries the raw text for diagnosis.
    InvalidResponse { body: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "transport failure: {e}"),
            ApiError::Service { code, message } => {
                write!(f, "service error {code}: {message}")
            }
            ApiError::InvalidResponse { body } => {
                write!(f, "invalid response: {body}")
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            _ => None,
        }
    }
}
