//! Instrumented transport wrapper.
//!
//! [`InterceptingTransport`] implements [`WebSocketTransport`] over the
//! captured original. Each entry point fires its hook first, then
//! delegates with the caller's arguments and returns the original's result.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use tracing::trace;

use crate::error::Result;
use crate::identifiers::SocketId;
use crate::transport::{CloseRequest, ConnectOptions, WebSocketTransport};

use super::hooks::InterceptorHooks;
use super::render::render_binary_payload;

// ============================================================================
// InterceptingTransport
// ============================================================================

/// Decorator installed on the module while interception is enabled.
pub(crate) struct InterceptingTransport {
    /// Implementation every call is delegated to.
    original: Arc<dyn WebSocketTransport>,
    /// Hooks read at call time.
    hooks: Arc<InterceptorHooks>,
}

impl InterceptingTransport {
    /// Wraps `original`, dispatching to `hooks`.
    pub(crate) fn new(original: Arc<dyn WebSocketTransport>, hooks: Arc<InterceptorHooks>) -> Self {
        Self { original, hooks }
    }
}

impl WebSocketTransport for InterceptingTransport {
    fn connect(
        &self,
        url: &str,
        protocols: &[String],
        options: &ConnectOptions,
        socket_id: SocketId,
    ) -> Result<()> {
        trace!(%socket_id, %url, "Intercepted connect");

        if let Some(callback) = self.hooks.connect() {
            callback(url, protocols, options, socket_id);
        }
        self.original.connect(url, protocols, options, socket_id)
    }

    fn send(&self, data: &str, socket_id: SocketId) -> Result<()> {
        trace!(%socket_id, len = data.len(), "Intercepted send");

        if let Some(callback) = self.hooks.send() {
            callback(data, socket_id);
        }
        self.original.send(data, socket_id)
    }

    fn send_binary(&self, data: &str, socket_id: SocketId) -> Result<()> {
        trace!(%socket_id, len = data.len(), "Intercepted send_binary");

        if let Some(callback) = self.hooks.send() {
            callback(render_binary_payload(data).as_str(), socket_id);
        }
        self.original.send_binary(data, socket_id)
    }

    fn close(&self, request: CloseRequest) -> Result<()> {
        trace!(socket_id = %request.socket_id(), "Intercepted close");

        if let Some(callback) = self.hooks.close() {
            callback(request.code(), request.reason(), request.socket_id());
        }
        self.original.close(request)
    }
}

// ============================================================================
// Tests
// ============================================================================
