//! Native WebSocket transport contract.
//!
//! The transport itself (sockets, framing, TLS) lives outside this crate.
//! Applications reach it through a [`WebSocketModule`], which holds the
//! currently active [`WebSocketTransport`] implementation in a single
//! swappable slot. The interceptor swaps that slot; nothing else changes.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   connect/send/    ┌──────────────────┐
//! │ Application  │ ─────────────────► │ WebSocketModule  │
//! └──────────────┘   send_binary/     │  active: Arc<dyn │
//!                    close            │  WebSocketTrans- │
//!                                     │  port>           │
//!                                     └────────┬─────────┘
//!                                              │
//!                     disabled ┌───────────────┴──────────────┐ enabled
//!                              ▼                              ▼
//!                     ┌─────────────────┐   ┌──────────────────────────┐
//!                     │ native transport│◄──│ InterceptingTransport    │
//!                     └─────────────────┘   │ (hooks, then delegate)   │
//!                                           └──────────────────────────┘
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `module` | The swappable binding point |

// ============================================================================
// Imports
// ============================================================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::identifiers::SocketId;

// ============================================================================
// Submodules
// ============================================================================

/// Swappable transport binding point.
pub mod module;

// ============================================================================
// Re-exports
// ============================================================================

pub use module::WebSocketModule;

// ============================================================================
// ConnectOptions
// ============================================================================

/// Options passed to [`WebSocketTransport::connect`].
///
/// Fields other than `headers` are kept verbatim in `extra` so that a
/// wrapper never drops anything on the way to the transport.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectOptions {
    /// Extra HTTP headers for the upgrade request.
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Any additional transport-specific options.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConnectOptions {
    /// Creates empty options.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an upgrade request header.
    #[inline]
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds a transport-specific option.
    #[inline]
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

// ============================================================================
// CloseRequest
// ============================================================================

/// Arguments of [`WebSocketTransport::close`].
///
/// The transport accepts a close with an explicit status, or a bare close
/// that lets it pick the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseRequest {
    /// Close with a status code and reason.
    WithStatus {
        /// Close status code.
        code: u16,
        /// Close reason.
        reason: String,
        /// Socket to close.
        socket_id: SocketId,
    },

    /// Close with transport defaults.
    Simple {
        /// Socket to close.
        socket_id: SocketId,
    },
}

impl CloseRequest {
    /// Creates a close with status code and reason.
    #[inline]
    #[must_use]
    pub fn with_code_and_reason(code: u16, reason: impl Into<String>, socket_id: SocketId) -> Self {
        Self::WithStatus {
            code,
            reason: reason.into(),
            socket_id,
        }
    }

    /// Creates a bare close.
    #[inline]
    #[must_use]
    pub fn simple(socket_id: SocketId) -> Self {
        Self::Simple { socket_id }
    }

    /// Returns the socket being closed.
    #[inline]
    #[must_use]
    pub fn socket_id(&self) -> SocketId {
        match self {
            Self::WithStatus { socket_id, .. } | Self::Simple { socket_id } => *socket_id,
        }
    }

    /// Returns the status code, if one was given.
    #[inline]
    #[must_use]
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::WithStatus { code, .. } => Some(*code),
            Self::Simple { .. } => None,
        }
    }

    /// Returns the reason, if one was given.
    #[inline]
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::WithStatus { reason, .. } => Some(reason.as_str()),
            Self::Simple { .. } => None,
        }
    }
}

// ============================================================================
// WebSocketTransport
// ============================================================================

/// The four entry points of a native WebSocket transport.
///
/// Implementations do the real work and report completion through events
/// on an [`EventSource`](crate::events::EventSource).
pub trait WebSocketTransport: Send + Sync {
    /// Opens a connection for `socket_id`.
    fn connect(
        &self,
        url: &str,
        protocols: &[String],
        options: &ConnectOptions,
        socket_id: SocketId,
    ) -> Result<()>;

    /// Sends a text frame.
    fn send(&self, data: &str, socket_id: SocketId) -> Result<()>;

    /// Sends a binary frame given as base64.
    fn send_binary(&self, data: &str, socket_id: SocketId) -> Result<()>;

    /// Closes a connection.
    fn close(&self, request: CloseRequest) -> Result<()>;
}

// ============================================================================
// Tests
// ============================================================================
