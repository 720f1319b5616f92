//! Unified client error types.

use thiserror::Error;

/// Top-level error for every ECSM client operation.
///
/// The four variants keep the failure classes distinguishable without string
/// inspection: a [`Validation`](EcsmError::Validation) error never reached the
/// network, a [`Transport`](EcsmError::Transport) error never reached the
/// server application, a [`Remote`](EcsmError::Remote) error is the server
/// saying no, and a [`Decode`](EcsmError::Decode) error is a contract mismatch
/// between client and server.
#[derive(Error, Debug)]
pub enum EcsmError {
    /// Client-side contract violation detected before any network call.
    /// Always recoverable by correcting the input; never retried.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Network-level failure: connection refused, timeout, cancelled request.
    /// Retrying is the caller's responsibility.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server responded but reported an application-level failure,
    /// either as a non-success HTTP status or as an error code inside the
    /// ECSM response envelope.
    #[error("remote error (code {code}): {message}")]
    Remote { code: i64, message: String },

    /// The response body could not be materialized into the expected shape.
    /// A client/server contract error — surfaced, never swallowed.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl EcsmError {
    /// Whether this is a remote "not found" answer (HTTP 404).
    pub fn is_not_found(&self) -> bool {
        matches!(self, EcsmError::Remote { code: 404, .. })
    }

    /// Whether the request never left the client.
    pub fn is_validation(&self) -> bool {
        matches!(self, EcsmError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_not_found_is_detectable() {
        let err = EcsmError::Remote {
            code: 404,
            message: "no such service".into(),
        };
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn display_carries_code_and_message() {
        let err = EcsmError::Remote {
            code: 500,
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "remote error (code 500): boom");
    }
}
