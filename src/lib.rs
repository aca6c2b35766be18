//! WebSocket Interceptor - transparent inspection of a native WebSocket transport.
//!
//! This library lets a debugging or inspection tool observe every socket an
//! application opens through a platform WebSocket transport, without the
//! application or the transport being aware of it.
//!
//! # Architecture
//!
//! - **Binding point**: applications call the transport through a
//!   [`WebSocketModule`], which forwards to whichever [`WebSocketTransport`]
//!   is active.
//! - **Method patching**: enabling an [`Interceptor`] swaps the active
//!   implementation for a wrapper that reports each call, then delegates to
//!   the original with the same arguments. Disabling swaps the exact
//!   original back.
//! - **Event bridge**: the interceptor subscribes to the transport's
//!   lifecycle events on an [`EventSource`] and forwards them to hooks.
//!
//! Key design principles:
//!
//! - Dispatch is synchronous and inline; nothing is queued or reordered
//! - The bytes on the wire are never altered
//! - While disabled, the module calls the original directly
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use websocket_interceptor::{EventHub, Interceptor, Result, SocketId, WebSocketModule};
//!
//! fn main() -> Result<()> {
//!     let module = Arc::new(WebSocketModule::new("WebSocketModule", native_transport()));
//!     let hub = EventHub::new();
//!
//!     let interceptor = Interceptor::builder()
//!         .module(Arc::clone(&module))
//!         .events(Arc::new(hub.clone()))
//!         .build()?;
//!
//!     interceptor.set_send_callback(|data, socket_id| println!("{socket_id} -> {data}"));
//!     interceptor.set_on_message_callback(|socket_id, data| println!("{socket_id} <- {data}"));
//!     interceptor.enable_interception();
//!
//!     module.send("hello", SocketId::new(1))?;
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`interceptor`] | [`Interceptor`], hooks, options, payload rendering |
//! | [`transport`] | [`WebSocketTransport`] contract and [`WebSocketModule`] |
//! | [`events`] | [`EventSource`] contract and [`EventHub`] |
//! | [`protocol`] | Transport event types |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Type-safe ID wrappers |

// ============================================================================
// Modules
// ============================================================================

/// Error types and result aliases.
pub mod error;

/// Event subscription facility.
///
/// The [`EventSource`] contract and the in-process [`EventHub`].
pub mod events;

/// Type-safe identifiers.
pub mod identifiers;

/// Interception of a transport module.
///
/// Use [`Interceptor::builder()`] to create a configured interceptor.
pub mod interceptor;

/// Transport lifecycle event types.
pub mod protocol;

/// Native transport contract and binding point.
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;

// ============================================================================
// Re-exports
// ============================================================================

// Error types
pub use error::{Error, Result};

// Event types
pub use events::{EventHub, EventSource, Listener, Subscription};

// Identifier types
pub use identifiers::{SocketId, SubscriptionId};

// Interceptor types
pub use interceptor::{
    EmitterScope, Interceptor, InterceptorBuilder, InterceptorHooks, InterceptorOptions,
    NO_VALUE, Platform, render_binary_payload, render_bytes,
};

// Protocol types
pub use protocol::{
    CloseInfo, ClosedEvent, FailedEvent, MessageEvent, MessageKind, OpenEvent, SocketError,
    TransportEvent, TransportEventKind,
};

// Transport types
pub use transport::{CloseRequest, ConnectOptions, WebSocketModule, WebSocketTransport};
