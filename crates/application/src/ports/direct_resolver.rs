use async_trait::async_trait;
use hickory_proto::rr::Name;
use scriptor_domain::{HookError, HookRecord};

/// Outcome of one direct resolution: the resolver's result code and the
/// records it produced.
#[derive(Debug, Clone)]
pub struct DirectResolution {
    pub rcode: i32,
    pub records: Vec<HookRecord>,
}

/// Opaque call into the resolver's own lookup algorithm. Follow-up
/// continuations treat it as synchronous and blocking; retries and
/// suspension are its own business.
#[async_trait]
pub trait DirectResolver: Send + Sync {
    async fn resolve(&self, name: &Name, rtype: u16) -> Result<DirectResolution, HookError>;
}
