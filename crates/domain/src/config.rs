use serde::{Deserialize, Serialize};
use std::net::Ipv6Addr;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HooksConfig {
    /// Script source executed once at startup to register entry points.
    /// Absent means no script hooks at all.
    #[serde(default)]
    pub script_path: Option<PathBuf>,

    /// Upper bound on the probe-then-resume datagram exchange. A timed-out
    /// exchange hands an empty answer to the resumed callback.
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,

    /// /96 prefix used when a NAT64 synthesis follow-up does not carry its
    /// own (the well-known prefix of RFC 6052).
    #[serde(default = "default_nat64_prefix")]
    pub nat64_prefix: Ipv6Addr,
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            script_path: None,
            probe_timeout_ms: default_probe_timeout_ms(),
            nat64_prefix: default_nat64_prefix(),
        }
    }
}

fn default_probe_timeout_ms() -> u64 {
    2000
}

fn default_nat64_prefix() -> Ipv6Addr {
    Ipv6Addr::new(0x64, 0xff9b, 0, 0, 0, 0, 0, 0)
}
