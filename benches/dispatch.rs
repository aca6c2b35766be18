//! Entry point dispatch benchmarks.
//!
//! Compares the cost of a `send` through the module with interception
//! disabled, enabled without hooks, and enabled with a send hook.
//!
//! Run with: cargo bench --bench dispatch
//! Results saved to: target/criterion/

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use websocket_interceptor::{
    CloseRequest, ConnectOptions, EventHub, Interceptor, MessageEvent, Result, SocketId,
    TransportEvent, WebSocketModule, WebSocketTransport,
};

// ============================================================================
// Fixtures
// ============================================================================

/// Transport that accepts every call and does nothing.
struct NullTransport;

impl WebSocketTransport for NullTransport {
    fn connect(&self, _: &str, _: &[String], _: &ConnectOptions, _: SocketId) -> Result<()> {
        Ok(())
    }

    fn send(&self, data: &str, _: SocketId) -> Result<()> {
        black_box(data);
        Ok(())
    }

    fn send_binary(&self, data: &str, _: SocketId) -> Result<()> {
        black_box(data);
        Ok(())
    }

    fn close(&self, _: CloseRequest) -> Result<()> {
        Ok(())
    }
}

fn setup() -> (Arc<WebSocketModule>, EventHub, Interceptor) {
    let module = Arc::new(WebSocketModule::new("WebSocketModule", Arc::new(NullTransport)));
    let hub = EventHub::new();
    let interceptor = Interceptor::builder()
        .module(Arc::clone(&module))
        .events(Arc::new(hub.clone()))
        .build()
        .expect("module and events are set");
    (module, hub, interceptor)
}

// ============================================================================
// Benchmark: Send
// ============================================================================

fn bench_send(c: &mut Criterion) {
    let mut group = c.benchmark_group("send");
    let id = SocketId::new(1);

    let (module, _hub, interceptor) = setup();
    group.bench_function("disabled", |b| {
        b.iter(|| module.send(black_box("payload"), id))
    });

    interceptor.enable_interception();
    group.bench_function("enabled_no_hooks", |b| {
        b.iter(|| module.send(black_box("payload"), id))
    });

    interceptor.set_send_callback(|data, socket_id| {
        black_box((data, socket_id));
    });
    group.bench_function("enabled_with_hook", |b| {
        b.iter(|| module.send(black_box("payload"), id))
    });

    group.bench_function("binary_with_hook", |b| {
        b.iter(|| module.send_binary(black_box("aGVsbG8gd29ybGQ="), id))
    });

    group.finish();
}

// ============================================================================
// Benchmark: Events
// ============================================================================

fn bench_message_event(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_event");
    let (_module, hub, interceptor) = setup();
    let text = TransportEvent::Message(MessageEvent::text(SocketId::new(1), "payload"));
    let binary = TransportEvent::Message(MessageEvent::binary(SocketId::new(1), "aGVsbG8="));

    interceptor.set_on_message_callback(|socket_id, data| {
        black_box((socket_id, data));
    });
    interceptor.enable_interception();

    group.bench_function("text", |b| {
        b.iter(|| hub.emit("WebSocketModule", black_box(&text)))
    });
    group.bench_function("binary", |b| {
        b.iter(|| hub.emit("WebSocketModule", black_box(&binary)))
    });

    group.finish();
}

criterion_group!(benches, bench_send, bench_message_event);
criterion_main!(benches);
