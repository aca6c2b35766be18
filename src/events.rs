//! Event subscription facility.
//!
//! [`EventSource`] is the publish/subscribe contract the interceptor
//! consumes: register a listener for one event kind, get back a
//! [`Subscription`] whose `remove` detaches it. [`EventHub`] is the
//! in-process implementation native bindings emit into.
//!
//! # Scoping
//!
//! A listener registered with a target only receives events emitted by that
//! target. A listener registered without one receives every event of its
//! kind, whatever the origin.
//!
//! ```ignore
//! let hub = EventHub::new();
//! let sub = hub.add_listener(
//!     TransportEventKind::Open,
//!     None,
//!     Arc::new(|event| println!("open: {}", event.socket_id())),
//! );
//! hub.emit("WebSocketModule", &TransportEvent::Open(OpenEvent { id: SocketId::new(1) }));
//! sub.remove();
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::Result;
use crate::identifiers::SubscriptionId;
use crate::protocol::{TransportEvent, TransportEventKind};

// ============================================================================
// Types
// ============================================================================

/// Listener callback type.
///
/// Invoked synchronously on the emitting thread.
pub type Listener = Arc<dyn Fn(&TransportEvent) + Send + Sync>;

// ============================================================================
// Traits
// ============================================================================

/// Handle to a registered listener.
pub trait Subscription: Send {
    /// Detaches the listener.
    fn remove(self: Box<Self>);
}

/// Publish/subscribe facility for transport lifecycle events.
pub trait EventSource: Send + Sync {
    /// Registers `listener` for events of `kind`.
    ///
    /// `target` restricts delivery to events emitted by that target;
    /// `None` subscribes globally.
    fn add_listener(
        &self,
        kind: TransportEventKind,
        target: Option<&str>,
        listener: Listener,
    ) -> Box<dyn Subscription>;
}

// ============================================================================
// EventHub
// ============================================================================

/// A registered listener with its scope.
struct Registration {
    id: SubscriptionId,
    target: Option<String>,
    listener: Listener,
}

/// Listeners per kind, each list in registration order.
type ListenerMap = FxHashMap<TransportEventKind, Vec<Registration>>;

/// In-process [`EventSource`].
///
/// Cloning yields another handle to the same hub.
#[derive(Clone, Default)]
pub struct EventHub {
    listeners: Arc<RwLock<ListenerMap>>,
}

impl EventHub {
    /// Creates an empty hub.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `event` from `origin` to every matching listener.
    ///
    /// Listeners are snapshotted before dispatch, so a listener may add or
    /// remove subscriptions while running. Returns the number of listeners
    /// invoked.
    pub fn emit(&self, origin: &str, event: &TransportEvent) -> usize {
        let kind = event.kind();

        let matching: Vec<Listener> = {
            let listeners = self.listeners.read();
            listeners
                .get(&kind)
                .map(|regs| {
                    regs.iter()
                        .filter(|reg| reg.target.as_deref().is_none_or(|t| t == origin))
                        .map(|reg| Arc::clone(&reg.listener))
                        .collect()
                })
                .unwrap_or_default()
        };

        trace!(
            %origin,
            event = %kind,
            socket_id = %event.socket_id(),
            listeners = matching.len(),
            "Emitting transport event"
        );

        for listener in &matching {
            listener(event);
        }

        matching.len()
    }

    /// Parses a raw native event and emits it.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownEvent`](crate::Error::UnknownEvent) if `name` is not a lifecycle event
    /// - [`Error::InvalidEvent`](crate::Error::InvalidEvent) if `payload` has the wrong shape
    pub fn emit_raw(&self, origin: &str, name: &str, payload: Value) -> Result<usize> {
        let event = TransportEvent::from_raw(name, payload)?;
        Ok(self.emit(origin, &event))
    }

    /// Returns the number of listeners registered for `kind`.
    #[must_use]
    pub fn listener_count(&self, kind: TransportEventKind) -> usize {
        self.listeners.read().get(&kind).map_or(0, Vec::len)
    }
}

impl EventSource for EventHub {
    fn add_listener(
        &self,
        kind: TransportEventKind,
        target: Option<&str>,
        listener: Listener,
    ) -> Box<dyn Subscription> {
        let id = SubscriptionId::next();
        debug!(%id, event = %kind, ?target, "Adding listener");

        self.listeners
            .write()
            .entry(kind)
            .or_default()
            .push(Registration {
                id,
                target: target.map(str::to_owned),
                listener,
            });

        Box::new(HubSubscription {
            id,
            kind,
            listeners: Arc::downgrade(&self.listeners),
        })
    }
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self.listeners.read();
        let total: usize = listeners.values().map(Vec::len).sum();
        f.debug_struct("EventHub").field("listeners", &total).finish()
    }
}

// ============================================================================
// HubSubscription
// ============================================================================

/// Subscription handle returned by [`EventHub`].
///
/// Holds the hub weakly; removing after the hub is gone does nothing.
struct HubSubscription {
    id: SubscriptionId,
    kind: TransportEventKind,
    listeners: Weak<RwLock<ListenerMap>>,
}

impl Subscription for HubSubscription {
    fn remove(self: Box<Self>) {
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };

        let mut listeners = listeners.write();
        if let Some(regs) = listeners.get_mut(&self.kind) {
            regs.retain(|reg| reg.id != self.id);
            if regs.is_empty() {
                listeners.remove(&self.kind);
            }
        }

        debug!(id = %self.id, event = %self.kind, "Removed listener");
    }
}

// ============================================================================
// Tests
// ============================================================================
