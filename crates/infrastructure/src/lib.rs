//! Scriptor Infrastructure Layer
//!
//! Adapters behind the application ports: the UDP probe transport used by
//! probe-then-resume follow-ups, and the in-process metric registry scripts
//! read and bump.

pub mod metrics;
pub mod probe;

pub use metrics::InMemoryMetrics;
pub use probe::UdpProbe;
