// ABOUTME: SMPP service error types covering validation, missing sessions and transport failures
// ABOUTME: Peer outcomes (throttled, rejected) are not errors; they are routed through TransportHooks

use crate::datatypes::CommandStatus;
use std::io;
use thiserror::Error;

/// Error type for SMPP service operations
///
/// Validation errors are raised before any network interaction. Transport
/// failures reported by the protocol session propagate unchanged, so a
/// multipart send that fails half way surfaces the session's own error.
#[derive(Debug, Error)]
pub enum SmppError {
    /// No protocol session was available when the operation was attempted
    #[error("{0} called while not connected")]
    NotConnected(&'static str),

    /// Caller supplied PDU parameters that conflict with the chosen submission path
    #[error("Invalid parameter combination: {0}")]
    InvalidParameterCombination(String),

    /// A parameter the submission path needs was not supplied
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    /// I/O error during network operations (connection, read, write)
    #[error("Connection error: {0}")]
    Connection(#[from] io::Error),

    /// SMPP protocol error indicated by command_status field
    #[error("Protocol error: {0}")]
    Protocol(CommandStatus),

    /// Data validation error (value too wide for its field, malformed parameter, etc.)
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Operation timeout
    #[error("Operation timeout")]
    Timeout,

    /// Connection closed unexpectedly
    #[error("Connection closed unexpectedly")]
    ConnectionClosed,

    /// Session not in correct state for operation
    #[error("Invalid session state: {0}")]
    InvalidState(String),
}

/// Result type alias for SMPP operations
pub type SmppResult<T> = Result<T, SmppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_connected_names_the_operation() {
        let err = SmppError::NotConnected("submit_sm");
        assert_eq!(err.to_string(), "submit_sm called while not connected");
    }

    #[test]
    fn io_errors_convert() {
        let err: SmppError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(matches!(err, SmppError::Connection(_)));
    }
}
