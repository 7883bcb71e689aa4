use std::net::SocketAddr;

use tracing::info;

pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_test_writer()
        .init();
}

/// Receives one event per request the handler serves.
pub trait RequestLogger: Send + Sync {
    fn request_received(&self, remote_address: SocketAddr);
}

/// Forwards request events to the global `tracing` subscriber.
pub struct TracingRequestLogger;

impl RequestLogger for TracingRequestLogger {
    fn request_received(&self, remote_address: SocketAddr) {
        info!("Received request from {}", remote_address);
    }
}
