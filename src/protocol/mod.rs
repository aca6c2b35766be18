//! Transport-facing message types.
//!
//! # Protocol Overview
//!
//! | Type | Direction | Purpose |
//! |------|-----------|---------|
//! | [`TransportEvent`] | Transport → Interceptor | Lifecycle notification |
//! | [`CloseInfo`] | Interceptor → Consumer | Close-event callback argument |
//! | [`SocketError`] | Interceptor → Consumer | Error callback argument |

// ============================================================================
// Submodules
// ============================================================================

/// Lifecycle event types.
pub mod event;

// ============================================================================
// Re-exports
// ============================================================================

pub use event::{
    CloseInfo, ClosedEvent, FailedEvent, MessageEvent, MessageKind, OpenEvent, SocketError,
    TransportEvent, TransportEventKind,
};
