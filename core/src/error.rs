//! Error types for the delete round-trip.
//!
//! # Design
//! A failed round-trip is one of three kinds. `Network` covers everything
//! that went wrong before a response arrived. `Server` is a non-2xx answer
//! that carries nothing to show; a non-2xx answer *with* a body is not an
//! error, because the endpoint renders its error pages as full documents.
//! `Parse` is a response whose body could not be read as text.

use thiserror::Error;

/// Errors produced by the delete round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never produced a response (fetch rejected, connection
    /// refused, DNS failure).
    #[error("network error: {0}")]
    Network(String),

    /// The server returned a non-2xx status with an empty body.
    #[error("server returned HTTP {status}")]
    Server { status: u16, body: String },

    /// The response body could not be read as text.
    #[error("could not read response: {0}")]
    Parse(String),
}

impl ClientError {
    /// Short, user-facing description of the failure.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network(_) => {
                "The post could not be deleted: the server is unreachable.".to_string()
            }
            ClientError::Server { status, .. } => {
                format!("The post could not be deleted: the server answered with HTTP {status}.")
            }
            ClientError::Parse(_) => {
                "The post could not be deleted: the server's answer was unreadable.".to_string()
            }
        }
    }
}
