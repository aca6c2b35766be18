//! Callback registry.
//!
//! Seven independent slots, each holding at most one handler. Setting a
//! slot replaces the previous handler; `None` clears it. Dispatch clones
//! the handler out of its slot before calling it, so handlers may freely
//! re-register hooks while running.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::identifiers::SocketId;
use crate::protocol::{CloseInfo, SocketError};
use crate::transport::ConnectOptions;

// ============================================================================
// Callback Types
// ============================================================================

/// Invoked on `connect(url, protocols, options, socket_id)`.
pub type ConnectCallback = Arc<dyn Fn(&str, &[String], &ConnectOptions, SocketId) + Send + Sync>;

/// Invoked on `send` and `send_binary` with the (rendered) payload.
pub type SendCallback = Arc<dyn Fn(&str, SocketId) + Send + Sync>;

/// Invoked on `close` with `(code, reason, socket_id)`.
///
/// `code` and `reason` are `None` for a bare close.
pub type CloseCallback = Arc<dyn Fn(Option<u16>, Option<&str>, SocketId) + Send + Sync>;

/// Invoked on `websocketOpen`.
pub type OpenCallback = Arc<dyn Fn(SocketId) + Send + Sync>;

/// Invoked on `websocketMessage` with the (rendered) payload.
pub type MessageCallback = Arc<dyn Fn(SocketId, &str) + Send + Sync>;

/// Invoked on `websocketFailed`.
pub type ErrorCallback = Arc<dyn Fn(SocketId, &SocketError) + Send + Sync>;

/// Invoked on `websocketClosed`.
pub type ClosedCallback = Arc<dyn Fn(SocketId, &CloseInfo) + Send + Sync>;

// ============================================================================
// InterceptorHooks
// ============================================================================

/// The seven hook slots of an interceptor.
#[derive(Default)]
pub struct InterceptorHooks {
    connect: RwLock<Option<ConnectCallback>>,
    send: RwLock<Option<SendCallback>>,
    close: RwLock<Option<CloseCallback>>,
    on_open: RwLock<Option<OpenCallback>>,
    on_message: RwLock<Option<MessageCallback>>,
    on_error: RwLock<Option<ErrorCallback>>,
    on_close: RwLock<Option<ClosedCallback>>,
}

// ============================================================================
// InterceptorHooks - Setters
// ============================================================================

impl InterceptorHooks {
    /// Creates a registry with every slot unset.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the connect hook.
    #[inline]
    pub fn set_connect(&self, callback: Option<ConnectCallback>) {
        *self.connect.write() = callback;
    }

    /// Sets or clears the send hook.
    #[inline]
    pub fn set_send(&self, callback: Option<SendCallback>) {
        *self.send.write() = callback;
    }

    /// Sets or clears the close hook.
    #[inline]
    pub fn set_close(&self, callback: Option<CloseCallback>) {
        *self.close.write() = callback;
    }

    /// Sets or clears the open-event hook.
    #[inline]
    pub fn set_on_open(&self, callback: Option<OpenCallback>) {
        *self.on_open.write() = callback;
    }

    /// Sets or clears the message-event hook.
    #[inline]
    pub fn set_on_message(&self, callback: Option<MessageCallback>) {
        *self.on_message.write() = callback;
    }

    /// Sets or clears the error-event hook.
    #[inline]
    pub fn set_on_error(&self, callback: Option<ErrorCallback>) {
        *self.on_error.write() = callback;
    }

    /// Sets or clears the close-event hook.
    #[inline]
    pub fn set_on_close(&self, callback: Option<ClosedCallback>) {
        *self.on_close.write() = callback;
    }

    /// Unsets all seven slots.
    pub fn clear(&self) {
        self.set_connect(None);
        self.set_send(None);
        self.set_close(None);
        self.set_on_open(None);
        self.set_on_message(None);
        self.set_on_error(None);
        self.set_on_close(None);
    }
}

// ============================================================================
// InterceptorHooks - Getters
// ============================================================================

impl InterceptorHooks {
    /// Returns the connect hook.
    #[inline]
    #[must_use]
    pub fn connect(&self) -> Option<ConnectCallback> {
        self.connect.read().clone()
    }

    /// Returns the send hook.
    #[inline]
    #[must_use]
    pub fn send(&self) -> Option<SendCallback> {
        self.send.read().clone()
    }

    /// Returns the close hook.
    #[inline]
    #[must_use]
    pub fn close(&self) -> Option<CloseCallback> {
        self.close.read().clone()
    }

    /// Returns the open-event hook.
    #[inline]
    #[must_use]
    pub fn on_open(&self) -> Option<OpenCallback> {
        self.on_open.read().clone()
    }

    /// Returns the message-event hook.
    #[inline]
    #[must_use]
    pub fn on_message(&self) -> Option<MessageCallback> {
        self.on_message.read().clone()
    }

    /// Returns the error-event hook.
    #[inline]
    #[must_use]
    pub fn on_error(&self) -> Option<ErrorCallback> {
        self.on_error.read().clone()
    }

    /// Returns the close-event hook.
    #[inline]
    #[must_use]
    pub fn on_close(&self) -> Option<ClosedCallback> {
        self.on_close.read().clone()
    }

    /// Returns `true` if any slot is set.
    #[must_use]
    pub fn has_any(&self) -> bool {
        self.connect.read().is_some()
            || self.send.read().is_some()
            || self.close.read().is_some()
            || self.on_open.read().is_some()
            || self.on_message.read().is_some()
            || self.on_error.read().is_some()
            || self.on_close.read().is_some()
    }
}

impl fmt::Debug for InterceptorHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptorHooks")
            .field("connect", &self.connect.read().is_some())
            .field("send", &self.send.read().is_some())
            .field("close", &self.close.read().is_some())
            .field("on_open", &self.on_open.read().is_some())
            .field("on_message", &self.on_message.read().is_some())
            .field("on_error", &self.on_error.read().is_some())
            .field("on_close", &self.on_close.read().is_some())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
