//! Event bridge from transport events to hooks.
//!
//! | Event | Hook | Arguments |
//! |-------|------|-----------|
//! | `websocketMessage` | `on_message` | `(id, data)`, binary data rendered |
//! | `websocketOpen` | `on_open` | `(id)` |
//! | `websocketClosed` | `on_close` | `(id, CloseInfo)` |
//! | `websocketFailed` | `on_error` | `(id, SocketError)` |

// ============================================================================
// Imports
// ============================================================================

use std::borrow::Cow;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, trace};

use crate::events::{EventSource, Subscription};
use crate::protocol::{
    CloseInfo, MessageEvent, MessageKind, SocketError, TransportEvent, TransportEventKind,
};

use super::hooks::InterceptorHooks;
use super::render::{NO_VALUE, render_binary_payload};

// ============================================================================
// EventBridge
// ============================================================================

/// The live subscriptions of an enabled interceptor.
///
/// Holds either all four lifecycle subscriptions or none.
#[derive(Default)]
pub(crate) struct EventBridge {
    subscriptions: Vec<Box<dyn Subscription>>,
}

impl EventBridge {
    /// Subscribes to every lifecycle event on `events`.
    pub(crate) fn register(
        events: &dyn EventSource,
        target: Option<&str>,
        hooks: &Arc<InterceptorHooks>,
    ) -> Self {
        let subscriptions = TransportEventKind::ALL
            .into_iter()
            .map(|kind| {
                let hooks = Arc::clone(hooks);
                events.add_listener(
                    kind,
                    target,
                    Arc::new(move |event: &TransportEvent| dispatch(&hooks, event)),
                )
            })
            .collect();

        debug!(?target, "Registered transport event listeners");
        Self { subscriptions }
    }

    /// Removes every subscription, leaving the bridge empty.
    pub(crate) fn unregister(&mut self) {
        let count = self.subscriptions.len();
        for subscription in self.subscriptions.drain(..) {
            subscription.remove();
        }
        debug!(count, "Unregistered transport event listeners");
    }

    /// Returns the number of live subscriptions.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.subscriptions.len()
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Forwards one event to its hook, if set.
fn dispatch(hooks: &InterceptorHooks, event: &TransportEvent) {
    trace!(event = %event.kind(), socket_id = %event.socket_id(), "Bridging transport event");

    match event {
        TransportEvent::Message(message) => {
            if let Some(callback) = hooks.on_message() {
                let data = message_data(message);
                callback(message.id, &data);
            }
        }
        TransportEvent::Open(open) => {
            if let Some(callback) = hooks.on_open() {
                callback(open.id);
            }
        }
        TransportEvent::Closed(closed) => {
            if let Some(callback) = hooks.on_close() {
                callback(closed.id, &CloseInfo::from(closed));
            }
        }
        TransportEvent::Failed(failed) => {
            if let Some(callback) = hooks.on_error() {
                callback(failed.id, &SocketError::from(failed));
            }
        }
    }
}

/// Message data as handed to the message hook.
///
/// Binary data is rendered; anything else is forwarded as-is, with
/// non-string payloads such as blob descriptors given as JSON text.
fn message_data(message: &MessageEvent) -> Cow<'_, str> {
    match (message.kind, &message.data) {
        (MessageKind::Binary, Value::String(encoded)) => {
            Cow::Owned(render_binary_payload(encoded))
        }
        (MessageKind::Binary, _) => Cow::Borrowed(NO_VALUE),
        (_, Value::String(text)) => Cow::Borrowed(text),
        (_, other) => Cow::Owned(other.to_string()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use parking_lot::Mutex;
    use serde_json::json;

    use crate::events::EventHub;
    use crate::identifiers::SocketId;
    use crate::protocol::{ClosedEvent, FailedEvent, OpenEvent};

    const ORIGIN: &str = "WebSocketModule";

    fn message_recorder(hooks: &InterceptorHooks) -> Arc<Mutex<Vec<(SocketId, String)>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        hooks.set_on_message(Some(Arc::new(move |id: SocketId, data: &str| {
            sink.lock().push((id, data.to_string()));
        })));
        seen
    }

    #[test]
    fn test_register_creates_four_subscriptions() {
        let hub = EventHub::new();
        let hooks = Arc::new(InterceptorHooks::new());

        let mut bridge = EventBridge::register(&hub, None, &hooks);
        assert_eq!(bridge.len(), 4);
        for kind in TransportEventKind::ALL {
            assert_eq!(hub.listener_count(kind), 1);
        }

        bridge.unregister();
        assert_eq!(bridge.len(), 0);
        for kind in TransportEventKind::ALL {
            assert_eq!(hub.listener_count(kind), 0);
        }
    }

    #[test]
    fn test_binary_message_is_rendered() {
        let hub = EventHub::new();
        let hooks = Arc::new(InterceptorHooks::new());
        let seen = message_recorder(&hooks);
        let _bridge = EventBridge::register(&hub, None, &hooks);

        let event = TransportEvent::Message(MessageEvent::binary(SocketId::new(7), "AA=="));
        hub.emit(ORIGIN, &event);

        assert_eq!(*seen.lock(), vec![(SocketId::new(7), "[0]".to_string())]);
    }

    #[test]
    fn test_text_message_is_forwarded() {
        let hub = EventHub::new();
        let hooks = Arc::new(InterceptorHooks::new());
        let seen = message_recorder(&hooks);
        let _bridge = EventBridge::register(&hub, None, &hooks);

        hub.emit(ORIGIN, &TransportEvent::Message(MessageEvent::text(SocketId::new(7), "hi")));

        assert_eq!(*seen.lock(), vec![(SocketId::new(7), "hi".to_string())]);
    }

    #[test]
    fn test_blob_message_is_forwarded_as_json() {
        let hub = EventHub::new();
        let hooks = Arc::new(InterceptorHooks::new());
        let seen = message_recorder(&hooks);
        let _bridge = EventBridge::register(&hub, None, &hooks);

        hub.emit_raw(
            ORIGIN,
            "websocketMessage",
            json!({ "id": 2, "type": "blob", "data": { "blobId": "b1", "size": 3 } }),
        )
        .unwrap();

        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        let forwarded: Value = serde_json::from_str(&seen[0].1).unwrap();
        assert_eq!(forwarded, json!({ "blobId": "b1", "size": 3 }));
    }

    #[test]
    fn test_lifecycle_events_translate() {
        let hub = EventHub::new();
        let hooks = Arc::new(InterceptorHooks::new());
        let log = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&log);
        hooks.set_on_open(Some(Arc::new(move |id: SocketId| {
            sink.lock().push(format!("open {id}"));
        })));
        let sink = Arc::clone(&log);
        hooks.set_on_close(Some(Arc::new(move |id: SocketId, info: &CloseInfo| {
            sink.lock().push(format!("closed {id} {} {}", info.code, info.reason));
        })));
        let sink = Arc::clone(&log);
        hooks.set_on_error(Some(Arc::new(move |id: SocketId, error: &SocketError| {
            sink.lock().push(format!("failed {id} {}", error.message));
        })));

        let _bridge = EventBridge::register(&hub, None, &hooks);
        let id = SocketId::new(5);
        hub.emit(ORIGIN, &TransportEvent::Open(OpenEvent { id }));
        hub.emit(
            ORIGIN,
            &TransportEvent::Failed(FailedEvent {
                id,
                message: "timeout".into(),
            }),
        );
        hub.emit(
            ORIGIN,
            &TransportEvent::Closed(ClosedEvent {
                id,
                code: 1001,
                reason: "going away".into(),
            }),
        );

        assert_eq!(
            *log.lock(),
            vec!["open 5", "failed 5 timeout", "closed 5 1001 going away"]
        );
    }

    #[test]
    fn test_events_without_hooks_are_ignored() {
        let hub = EventHub::new();
        let hooks = Arc::new(InterceptorHooks::new());
        let _bridge = EventBridge::register(&hub, None, &hooks);

        assert_eq!(
            hub.emit(ORIGIN, &TransportEvent::Open(OpenEvent { id: SocketId::new(1) })),
            1
        );
    }

    #[test]
    fn test_scoped_bridge_ignores_other_origins() {
        let hub = EventHub::new();
        let hooks = Arc::new(InterceptorHooks::new());
        let seen = message_recorder(&hooks);
        let _bridge = EventBridge::register(&hub, Some(ORIGIN), &hooks);

        let id = SocketId::new(1);
        hub.emit("OtherModule", &TransportEvent::Message(MessageEvent::text(id, "a")));
        hub.emit(ORIGIN, &TransportEvent::Message(MessageEvent::text(id, "b")));

        assert_eq!(*seen.lock(), vec![(SocketId::new(1), "b".to_string())]);
    }
}
