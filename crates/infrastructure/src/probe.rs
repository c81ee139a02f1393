//! One-shot UDP exchange used by probe-then-resume follow-ups.
//!
//! The payload is sent as-is from an ephemeral port and a single datagram is
//! read back. A peer that never answers is not an error: the exchange
//! resolves with an empty answer once the timeout elapses, and the resumed
//! callable decides what that means.

use async_trait::async_trait;
use bytes::Bytes;
use scriptor_application::ports::ProbeExchange;
use scriptor_domain::HookError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

const MAX_PROBE_RESPONSE_SIZE: usize = 4096;

pub struct UdpProbe {
    timeout: Duration,
}

impl UdpProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for UdpProbe {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

fn probe_err(dest: SocketAddr, e: impl std::fmt::Display) -> HookError {
    HookError::ProbeFailed {
        dest: dest.to_string(),
        reason: e.to_string(),
    }
}

#[async_trait]
impl ProbeExchange for UdpProbe {
    async fn exchange(&self, dest: SocketAddr, payload: &[u8]) -> Result<Bytes, HookError> {
        let bind_addr: SocketAddr = if dest.is_ipv4() {
            SocketAddr::from(([0, 0, 0, 0], 0))
        } else {
            SocketAddr::from(([0u16; 8], 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| probe_err(dest, e))?;
        socket.connect(dest).await.map_err(|e| probe_err(dest, e))?;
        socket.send(payload).await.map_err(|e| probe_err(dest, e))?;

        let mut buf = vec![0u8; MAX_PROBE_RESPONSE_SIZE];
        match tokio::time::timeout(self.timeout, socket.recv(&mut buf)).await {
            Ok(Ok(n)) => {
                buf.truncate(n);
                Ok(Bytes::from(buf))
            }
            Ok(Err(e)) => Err(probe_err(dest, e)),
            Err(_) => {
                debug!(dest = %dest, "no probe response before timeout");
                Ok(Bytes::new())
            }
        }
    }
}
