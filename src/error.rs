//! Error types for the WebSocket interceptor.
//!
//! Interception itself never fails: wrappers hand back whatever the original
//! transport returned, and consumer callbacks are invoked without any error
//! wrapping. The variants here cover configuration, the transport contract
//! that implementors report through, and parsing of raw native events.
//!
//! # Usage
//!
//! ```ignore
//! use websocket_interceptor::{Result, SocketId, WebSocketModule};
//!
//! fn greet(module: &WebSocketModule) -> Result<()> {
//!     module.send("hello", SocketId::new(7))?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`] |
//! | Transport | [`Error::Transport`] |
//! | Events | [`Error::UnknownEvent`], [`Error::InvalidEvent`] |

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use thiserror::Error;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when an interceptor is built without its collaborators.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // Transport Errors
    // ========================================================================
    /// Failure reported by a transport implementation.
    ///
    /// Passed through interception untouched.
    #[error("Transport error during {operation}: {message}")]
    Transport {
        /// Entry point that failed (`connect`, `send`, ...).
        operation: String,
        /// Description reported by the transport.
        message: String,
    },

    // ========================================================================
    // Event Errors
    // ========================================================================
    /// Event name is not one of the transport lifecycle events.
    #[error("Unknown event: {name}")]
    UnknownEvent {
        /// The unrecognized event name.
        name: String,
    },

    /// Event payload does not match the expected shape.
    #[error("Invalid payload for event {name}: {message}")]
    InvalidEvent {
        /// Event name.
        name: String,
        /// Description of the mismatch.
        message: String,
    },
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a transport error.
    #[inline]
    pub fn transport(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Creates an unknown event error.
    #[inline]
    pub fn unknown_event(name: impl Into<String>) -> Self {
        Self::UnknownEvent { name: name.into() }
    }

    /// Creates an invalid event payload error.
    #[inline]
    pub fn invalid_event(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidEvent {
            name: name.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this error came from a transport implementation.
    #[inline]
    #[must_use]
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Returns `true` if this is an event parsing error.
    #[inline]
    #[must_use]
    pub fn is_event_error(&self) -> bool {
        matches!(self, Self::UnknownEvent { .. } | Self::InvalidEvent { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::transport("send", "socket 7 is not open");
        assert_eq!(
            err.to_string(),
            "Transport error during send: socket 7 is not open"
        );
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("missing event source");
        assert_eq!(err.to_string(), "Configuration error: missing event source");
    }

    #[test]
    fn test_is_transport_error() {
        assert!(Error::transport("close", "gone").is_transport_error());
        assert!(!Error::config("test").is_transport_error());
    }

    #[test]
    fn test_is_event_error() {
        assert!(Error::unknown_event("websocketPing").is_event_error());
        assert!(Error::invalid_event("websocketOpen", "missing id").is_event_error());
        assert!(!Error::transport("send", "x").is_event_error());
    }
}
