//! WebSocket interception.
//!
//! An [`Interceptor`] instruments one [`WebSocketModule`] and the event
//! source its transport reports on. While enabled, every entry point call
//! and every lifecycle event is reported to the registered hooks before
//! (calls) or as (events) the transport handles it.
//!
//! # Lifecycle
//!
//! ```text
//!            enable_interception()
//!   ┌──────────┐ ─────────────────► ┌─────────┐
//!   │ Disabled │                    │ Enabled │
//!   └──────────┘ ◄───────────────── └─────────┘
//!            disable_interception()
//! ```
//!
//! Enabling captures the module's implementation (first time only),
//! subscribes to the four lifecycle events and installs the wrapper.
//! Disabling removes the subscriptions, reinstalls the captured original and
//! clears every hook. Repeating either call in its target state does nothing.
//!
//! # Example
//!
//! ```ignore
//! let interceptor = Interceptor::builder()
//!     .module(Arc::clone(&module))
//!     .events(Arc::new(hub.clone()))
//!     .build()?;
//!
//! interceptor.set_send_callback(|data, socket_id| {
//!     println!("socket {socket_id} sent {data}");
//! });
//! interceptor.enable_interception();
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `hooks` | Callback registry |
//! | `options` | Scope and options |
//! | `render` | Binary payload rendering |

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::events::EventSource;
use crate::identifiers::SocketId;
use crate::protocol::{CloseInfo, SocketError};
use crate::transport::{ConnectOptions, WebSocketModule, WebSocketTransport};

use self::bridge::EventBridge;
use self::patch::InterceptingTransport;

// ============================================================================
// Submodules
// ============================================================================

/// Event bridge from transport events to hooks.
mod bridge;

/// Builder for [`Interceptor`].
pub mod builder;

/// Callback registry.
pub mod hooks;

/// Interceptor configuration.
pub mod options;

/// Instrumented transport wrapper.
mod patch;

/// Binary payload rendering.
pub mod render;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::InterceptorBuilder;
pub use hooks::{
    CloseCallback, ClosedCallback, ConnectCallback, ErrorCallback, InterceptorHooks,
    MessageCallback, OpenCallback, SendCallback,
};
pub use options::{EmitterScope, InterceptorOptions, Platform};
pub use render::{NO_VALUE, render_binary_payload, render_bytes};

// ============================================================================
// Lifecycle State
// ============================================================================

/// Mutable state guarded by the interceptor's lock.
#[derive(Default)]
struct Lifecycle {
    /// Whether the wrapper is installed.
    enabled: bool,
    /// Implementation captured on the first enable.
    original: Option<Arc<dyn WebSocketTransport>>,
    /// Live event subscriptions.
    bridge: EventBridge,
}

// ============================================================================
// Interceptor
// ============================================================================

/// Reversible instrumentation of a WebSocket transport module.
///
/// Starts disabled. Dropping an enabled interceptor disables it.
pub struct Interceptor {
    /// Module whose implementation is swapped.
    module: Arc<WebSocketModule>,
    /// Source of transport lifecycle events.
    events: Arc<dyn EventSource>,
    /// Configuration.
    options: InterceptorOptions,
    /// Hook slots, shared with the wrapper and event listeners.
    hooks: Arc<InterceptorHooks>,
    /// Enabled flag, captured original and subscriptions.
    lifecycle: Mutex<Lifecycle>,
}

// ============================================================================
// Interceptor - Constructors
// ============================================================================

impl Interceptor {
    /// Creates a disabled interceptor.
    #[must_use]
    pub fn new(
        module: Arc<WebSocketModule>,
        events: Arc<dyn EventSource>,
        options: InterceptorOptions,
    ) -> Self {
        Self {
            module,
            events,
            options,
            hooks: Arc::new(InterceptorHooks::new()),
            lifecycle: Mutex::new(Lifecycle::default()),
        }
    }

    /// Creates a new builder.
    #[inline]
    #[must_use]
    pub fn builder() -> InterceptorBuilder {
        InterceptorBuilder::new()
    }
}

// ============================================================================
// Interceptor - Accessors
// ============================================================================

impl Interceptor {
    /// Returns the intercepted module.
    #[inline]
    #[must_use]
    pub fn module(&self) -> &Arc<WebSocketModule> {
        &self.module
    }

    /// Returns the configuration.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &InterceptorOptions {
        &self.options
    }

    /// Returns the hook registry.
    #[inline]
    #[must_use]
    pub fn hooks(&self) -> &InterceptorHooks {
        &self.hooks
    }
}

// ============================================================================
// Interceptor - Hook Registration
// ============================================================================

impl Interceptor {
    /// Sets the hook invoked on `connect(url, protocols, options, socket_id)`.
    pub fn set_connect_callback<F>(&self, callback: F)
    where
        F: Fn(&str, &[String], &ConnectOptions, SocketId) + Send + Sync + 'static,
    {
        self.hooks.set_connect(Some(Arc::new(callback)));
    }

    /// Sets the hook invoked on `send` and `send_binary`.
    ///
    /// Binary payloads arrive rendered, see [`render_binary_payload`].
    pub fn set_send_callback<F>(&self, callback: F)
    where
        F: Fn(&str, SocketId) + Send + Sync + 'static,
    {
        self.hooks.set_send(Some(Arc::new(callback)));
    }

    /// Sets the hook invoked on `close`.
    ///
    /// `code` and `reason` are `None` for a bare close.
    pub fn set_close_callback<F>(&self, callback: F)
    where
        F: Fn(Option<u16>, Option<&str>, SocketId) + Send + Sync + 'static,
    {
        self.hooks.set_close(Some(Arc::new(callback)));
    }

    /// Sets the hook invoked on `websocketOpen`.
    pub fn set_on_open_callback<F>(&self, callback: F)
    where
        F: Fn(SocketId) + Send + Sync + 'static,
    {
        self.hooks.set_on_open(Some(Arc::new(callback)));
    }

    /// Sets the hook invoked on `websocketMessage`.
    pub fn set_on_message_callback<F>(&self, callback: F)
    where
        F: Fn(SocketId, &str) + Send + Sync + 'static,
    {
        self.hooks.set_on_message(Some(Arc::new(callback)));
    }

    /// Sets the hook invoked on `websocketFailed`.
    pub fn set_on_error_callback<F>(&self, callback: F)
    where
        F: Fn(SocketId, &SocketError) + Send + Sync + 'static,
    {
        self.hooks.set_on_error(Some(Arc::new(callback)));
    }

    /// Sets the hook invoked on `websocketClosed`.
    pub fn set_on_close_callback<F>(&self, callback: F)
    where
        F: Fn(SocketId, &CloseInfo) + Send + Sync + 'static,
    {
        self.hooks.set_on_close(Some(Arc::new(callback)));
    }
}

// ============================================================================
// Interceptor - Hook Removal
// ============================================================================

impl Interceptor {
    /// Unsets the `connect` hook.
    #[inline]
    pub fn clear_connect_callback(&self) {
        self.hooks.set_connect(None);
    }

    /// Unsets the `send` / `send_binary` hook.
    #[inline]
    pub fn clear_send_callback(&self) {
        self.hooks.set_send(None);
    }

    /// Unsets the `close` hook.
    #[inline]
    pub fn clear_close_callback(&self) {
        self.hooks.set_close(None);
    }

    /// Unsets the `websocketOpen` hook.
    #[inline]
    pub fn clear_on_open_callback(&self) {
        self.hooks.set_on_open(None);
    }

    /// Unsets the `websocketMessage` hook.
    #[inline]
    pub fn clear_on_message_callback(&self) {
        self.hooks.set_on_message(None);
    }

    /// Unsets the `websocketFailed` hook.
    #[inline]
    pub fn clear_on_error_callback(&self) {
        self.hooks.set_on_error(None);
    }

    /// Unsets the `websocketClosed` hook.
    #[inline]
    pub fn clear_on_close_callback(&self) {
        self.hooks.set_on_close(None);
    }
}

// ============================================================================
// Interceptor - Lifecycle
// ============================================================================

impl Interceptor {
    /// Installs the wrapper and subscribes to transport events.
    ///
    /// Does nothing if already enabled.
    pub fn enable_interception(&self) {
        let mut lifecycle = self.lifecycle.lock();
        if lifecycle.enabled {
            debug!(module = %self.module.name(), "Interception already enabled");
            return;
        }

        let module = &self.module;
        let original = Arc::clone(lifecycle.original.get_or_insert_with(|| {
            debug!(module = %module.name(), "Capturing original transport");
            module.current()
        }));

        let target = self.options.scope.target(module.name());
        lifecycle.bridge = EventBridge::register(self.events.as_ref(), target, &self.hooks);

        module.install(Arc::new(InterceptingTransport::new(
            original,
            Arc::clone(&self.hooks),
        )));
        lifecycle.enabled = true;

        debug!(module = %module.name(), scope = ?self.options.scope, "Interception enabled");
    }

    /// Removes subscriptions, restores the original and clears every hook.
    ///
    /// Does nothing if already disabled.
    pub fn disable_interception(&self) {
        let mut lifecycle = self.lifecycle.lock();
        if !lifecycle.enabled {
            debug!(module = %self.module.name(), "Interception already disabled");
            return;
        }
        lifecycle.enabled = false;

        lifecycle.bridge.unregister();
        if let Some(original) = &lifecycle.original {
            self.module.install(Arc::clone(original));
        }
        self.hooks.clear();

        debug!(module = %self.module.name(), "Interception disabled");
    }

    /// Returns `true` while interception is enabled.
    #[inline]
    #[must_use]
    pub fn is_interceptor_enabled(&self) -> bool {
        self.lifecycle.lock().enabled
    }

    /// Alias for [`enable_interception`](Self::enable_interception).
    #[inline]
    pub fn enable(&self) {
        self.enable_interception();
    }

    /// Alias for [`disable_interception`](Self::disable_interception).
    #[inline]
    pub fn disable(&self) {
        self.disable_interception();
    }

    /// Alias for [`is_interceptor_enabled`](Self::is_interceptor_enabled).
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.is_interceptor_enabled()
    }
}

impl Drop for Interceptor {
    fn drop(&mut self) {
        self.disable_interception();
    }
}

impl fmt::Debug for Interceptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lifecycle = self.lifecycle.lock();
        f.debug_struct("Interceptor")
            .field("module", &self.module)
            .field("options", &self.options)
            .field("enabled", &lifecycle.enabled)
            .field("subscriptions", &lifecycle.bridge.len())
            .field("hooks", &self.hooks)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
