//! Shared helpers for unit tests.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};
use crate::identifiers::SocketId;
use crate::transport::{CloseRequest, ConnectOptions, WebSocketTransport};

// ============================================================================
// Logging
// ============================================================================

/// Installs a test subscriber filtered by `RUST_LOG` (default `off`).
///
/// Safe to call from every test; only the first call installs.
pub(crate) fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_test_writer()
        .try_init();
}

// ============================================================================
// RecordingTransport
// ============================================================================

/// A call observed by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Connect {
        url: String,
        protocols: Vec<String>,
        options: ConnectOptions,
        socket_id: SocketId,
    },
    Send {
        data: String,
        socket_id: SocketId,
    },
    SendBinary {
        data: String,
        socket_id: SocketId,
    },
    Close(CloseRequest),
}

/// Transport stand-in that records every call it receives.
#[derive(Debug, Default)]
pub(crate) struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    failure: Option<String>,
}

impl RecordingTransport {
    /// Creates a transport that accepts every call.
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Creates a transport that records every call, then fails it.
    pub(crate) fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(message.to_string()),
        })
    }

    /// Returns the calls received so far.
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn record(&self, operation: &str, call: Call) -> Result<()> {
        self.calls.lock().push(call);
        match &self.failure {
            Some(message) => Err(Error::transport(operation, message.as_str())),
            None => Ok(()),
        }
    }
}

impl WebSocketTransport for RecordingTransport {
    fn connect(
        &self,
        url: &str,
        protocols: &[String],
        options: &ConnectOptions,
        socket_id: SocketId,
    ) -> Result<()> {
        self.record(
            "connect",
            Call::Connect {
                url: url.to_string(),
                protocols: protocols.to_vec(),
                options: options.clone(),
                socket_id,
            },
        )
    }

    fn send(&self, data: &str, socket_id: SocketId) -> Result<()> {
        self.record(
            "send",
            Call::Send {
                data: data.to_string(),
                socket_id,
            },
        )
    }

    fn send_binary(&self, data: &str, socket_id: SocketId) -> Result<()> {
        self.record(
            "sendBinary",
            Call::SendBinary {
                data: data.to_string(),
                socket_id,
            },
        )
    }

    fn close(&self, request: CloseRequest) -> Result<()> {
        self.record("close", Call::Close(request))
    }
}
