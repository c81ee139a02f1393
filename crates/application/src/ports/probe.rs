use async_trait::async_trait;
use bytes::Bytes;
use scriptor_domain::HookError;
use std::net::SocketAddr;

/// One-shot datagram exchange used by the probe-then-resume continuation.
/// A single exchange, never retried; a timed-out exchange yields an empty
/// answer rather than an error so the resumed callable still runs.
#[async_trait]
pub trait ProbeExchange: Send + Sync {
    async fn exchange(&self, dest: SocketAddr, payload: &[u8]) -> Result<Bytes, HookError>;
}
