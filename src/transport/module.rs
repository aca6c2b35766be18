//! Swappable transport binding point.
//!
//! A [`WebSocketModule`] is the one place application code calls into the
//! transport. It forwards each entry point to whichever implementation is
//! active, so the implementation can be replaced and restored by reference
//! without callers noticing.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::Result;
use crate::identifiers::SocketId;

use super::{CloseRequest, ConnectOptions, WebSocketTransport};

// ============================================================================
// WebSocketModule
// ============================================================================

/// Named holder of the active transport implementation.
///
/// # Example
///
/// ```ignore
/// let module = WebSocketModule::new("WebSocketModule", Arc::new(native));
/// module.connect("wss://echo.example", &[], &ConnectOptions::new(), SocketId::new(1))?;
/// module.send("hello", SocketId::new(1))?;
/// ```
pub struct WebSocketModule {
    /// Module name, used as the event target for scoped listeners.
    name: String,

    /// Currently active implementation.
    active: RwLock<Arc<dyn WebSocketTransport>>,
}

// ============================================================================
// WebSocketModule - Binding
// ============================================================================

impl WebSocketModule {
    /// Creates a module backed by `transport`.
    #[must_use]
    pub fn new(name: impl Into<String>, transport: Arc<dyn WebSocketTransport>) -> Self {
        Self {
            name: name.into(),
            active: RwLock::new(transport),
        }
    }

    /// Returns the module name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the active implementation.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Arc<dyn WebSocketTransport> {
        Arc::clone(&*self.active.read())
    }

    /// Replaces the active implementation, returning the previous one.
    pub fn install(&self, transport: Arc<dyn WebSocketTransport>) -> Arc<dyn WebSocketTransport> {
        debug!(module = %self.name, "Installing transport implementation");
        std::mem::replace(&mut *self.active.write(), transport)
    }

    /// Returns `true` if `transport` is the active implementation.
    #[inline]
    #[must_use]
    pub fn is_active(&self, transport: &Arc<dyn WebSocketTransport>) -> bool {
        let active = self.active.read();
        Arc::ptr_eq(&*active, transport)
    }
}

// ============================================================================
// WebSocketModule - Entry Points
// ============================================================================

impl WebSocketModule {
    /// Opens a connection through the active implementation.
    pub fn connect(
        &self,
        url: &str,
        protocols: &[String],
        options: &ConnectOptions,
        socket_id: SocketId,
    ) -> Result<()> {
        self.current().connect(url, protocols, options, socket_id)
    }

    /// Sends a text frame through the active implementation.
    pub fn send(&self, data: &str, socket_id: SocketId) -> Result<()> {
        self.current().send(data, socket_id)
    }

    /// Sends a base64 binary frame through the active implementation.
    pub fn send_binary(&self, data: &str, socket_id: SocketId) -> Result<()> {
        self.current().send_binary(data, socket_id)
    }

    /// Closes a connection through the active implementation.
    pub fn close(&self, request: CloseRequest) -> Result<()> {
        self.current().close(request)
    }
}

impl fmt::Debug for WebSocketModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebSocketModule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_support::{Call, RecordingTransport};

    #[test]
    fn test_entry_points_reach_active_transport() {
        let native = RecordingTransport::new();
        let module = WebSocketModule::new("WebSocketModule", native.clone());

        module
            .connect("ws://a", &[], &ConnectOptions::new(), SocketId::new(1))
            .unwrap();
        module.send("x", SocketId::new(1)).unwrap();
        module.close(CloseRequest::simple(SocketId::new(1))).unwrap();

        assert_eq!(native.calls().len(), 3);
        assert!(matches!(native.calls()[1], Call::Send { ref data, .. } if data == "x"));
    }

    #[test]
    fn test_install_returns_previous() {
        let first = RecordingTransport::new();
        let second = RecordingTransport::new();
        let first_dyn: Arc<dyn WebSocketTransport> = first.clone();
        let module = WebSocketModule::new("WebSocketModule", first_dyn.clone());

        let previous = module.install(second.clone());
        assert!(Arc::ptr_eq(&previous, &first_dyn));

        module.send("y", SocketId::new(2)).unwrap();
        assert!(first.calls().is_empty());
        assert_eq!(second.calls().len(), 1);

        module.install(previous);
        assert!(module.is_active(&first_dyn));
    }

    #[test]
    fn test_transport_error_is_returned() {
        let native = RecordingTransport::failing("socket closed");
        let module = WebSocketModule::new("WebSocketModule", native);

        let err = module.send("x", SocketId::new(1)).unwrap_err();
        assert!(err.is_transport_error());
    }
}
