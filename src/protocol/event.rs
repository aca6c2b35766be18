//! Transport lifecycle event types.
//!
//! Events are notifications the native transport emits once a connection
//! changes state or receives data.
//!
//! # Event Names
//!
//! | Name | Payload |
//! |------|---------|
//! | `websocketOpen` | `{ id }` |
//! | `websocketMessage` | `{ id, type, data }` |
//! | `websocketClosed` | `{ id, code, reason }` |
//! | `websocketFailed` | `{ id, message }` |

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::identifiers::SocketId;

// ============================================================================
// TransportEventKind
// ============================================================================

/// The four lifecycle events a transport emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportEventKind {
    /// Connection established.
    Open,
    /// Frame received.
    Message,
    /// Connection closed.
    Closed,
    /// Connection failed.
    Failed,
}

impl TransportEventKind {
    /// All kinds, in the order listeners are registered.
    pub const ALL: [Self; 4] = [Self::Message, Self::Open, Self::Closed, Self::Failed];

    /// Returns the wire name of the event.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Open => "websocketOpen",
            Self::Message => "websocketMessage",
            Self::Closed => "websocketClosed",
            Self::Failed => "websocketFailed",
        }
    }
}

impl FromStr for TransportEventKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| Error::unknown_event(name))
    }
}

impl fmt::Display for TransportEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Payloads
// ============================================================================

/// Payload of `websocketOpen`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenEvent {
    /// Socket that opened.
    pub id: SocketId,
}

/// Content type of a received frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// UTF-8 text frame, `data` is the text.
    Text,
    /// Binary frame, `data` is base64.
    Binary,
    /// Binary frame handed off to a blob store, `data` is a blob descriptor.
    Blob,
}

/// Payload of `websocketMessage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEvent {
    /// Socket that received the frame.
    pub id: SocketId,

    /// Frame content type.
    #[serde(rename = "type")]
    pub kind: MessageKind,

    /// Frame data as delivered by the transport.
    pub data: Value,
}

impl MessageEvent {
    /// Creates a text message event.
    #[inline]
    #[must_use]
    pub fn text(id: SocketId, data: impl Into<String>) -> Self {
        Self {
            id,
            kind: MessageKind::Text,
            data: Value::String(data.into()),
        }
    }

    /// Creates a binary message event from base64 data.
    #[inline]
    #[must_use]
    pub fn binary(id: SocketId, base64: impl Into<String>) -> Self {
        Self {
            id,
            kind: MessageKind::Binary,
            data: Value::String(base64.into()),
        }
    }
}

/// Payload of `websocketClosed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosedEvent {
    /// Socket that closed.
    pub id: SocketId,

    /// Close status code.
    pub code: u16,

    /// Close reason, empty when the peer gave none.
    #[serde(default)]
    pub reason: String,
}

/// Payload of `websocketFailed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedEvent {
    /// Socket that failed.
    pub id: SocketId,

    /// Failure description.
    pub message: String,
}

// ============================================================================
// Callback Argument Shapes
// ============================================================================

/// Close details handed to the close-event callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloseInfo {
    /// Close status code.
    pub code: u16,
    /// Close reason.
    pub reason: String,
}

impl From<&ClosedEvent> for CloseInfo {
    fn from(event: &ClosedEvent) -> Self {
        Self {
            code: event.code,
            reason: event.reason.clone(),
        }
    }
}

/// Failure details handed to the error callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocketError {
    /// Failure description.
    pub message: String,
}

impl From<&FailedEvent> for SocketError {
    fn from(event: &FailedEvent) -> Self {
        Self {
            message: event.message.clone(),
        }
    }
}

// ============================================================================
// TransportEvent
// ============================================================================

/// A lifecycle event emitted by the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    /// `websocketOpen`.
    Open(OpenEvent),
    /// `websocketMessage`.
    Message(MessageEvent),
    /// `websocketClosed`.
    Closed(ClosedEvent),
    /// `websocketFailed`.
    Failed(FailedEvent),
}

impl TransportEvent {
    /// Returns the kind of this event.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> TransportEventKind {
        match self {
            Self::Open(_) => TransportEventKind::Open,
            Self::Message(_) => TransportEventKind::Message,
            Self::Closed(_) => TransportEventKind::Closed,
            Self::Failed(_) => TransportEventKind::Failed,
        }
    }

    /// Returns the socket the event belongs to.
    #[inline]
    #[must_use]
    pub fn socket_id(&self) -> SocketId {
        match self {
            Self::Open(ev) => ev.id,
            Self::Message(ev) => ev.id,
            Self::Closed(ev) => ev.id,
            Self::Failed(ev) => ev.id,
        }
    }

    /// Parses a raw native event by name and JSON payload.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownEvent`] if `name` is not a lifecycle event
    /// - [`Error::InvalidEvent`] if the payload does not match the event
    pub fn from_raw(name: &str, payload: Value) -> Result<Self> {
        let kind: TransportEventKind = name.parse()?;

        let event = match kind {
            TransportEventKind::Open => Self::Open(parse_payload(name, payload)?),
            TransportEventKind::Message => Self::Message(parse_payload(name, payload)?),
            TransportEventKind::Closed => Self::Closed(parse_payload(name, payload)?),
            TransportEventKind::Failed => Self::Failed(parse_payload(name, payload)?),
        };

        Ok(event)
    }
}

/// Deserializes a payload, tagging failures with the event name.
fn parse_payload<T: DeserializeOwned>(name: &str, payload: Value) -> Result<T> {
    serde_json::from_value(payload).map_err(|e| Error::invalid_event(name, e.to_string()))
}

// ============================================================================
// Tests
// ============================================================================
