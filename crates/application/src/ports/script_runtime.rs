use hickory_proto::rr::Name;
use ipnetwork::IpNetwork;
use scriptor_domain::{DnsHeader, DnsQuestion, HookError};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

/// Callable registered for one of the question-context phases. Returns
/// whether the script handled the phase; any other failure is fatal for
/// that invocation.
pub type HookFn =
    Arc<dyn for<'a> Fn(&mut DnsQuestion<'a>) -> Result<bool, HookError> + Send + Sync>;

/// `ipfilter` predicate over the endpoints and the raw header. Pure: it
/// must not mutate resolver-visible state.
pub type IpFilterFn =
    Arc<dyn Fn(SocketAddr, SocketAddr, &DnsHeader) -> Result<bool, HookError> + Send + Sync>;

/// Inputs handed to `gettag`.
#[derive(Debug, Clone)]
pub struct TagQuery<'a> {
    pub remote: SocketAddr,
    pub local: SocketAddr,
    pub edns_subnet: Option<IpNetwork>,
    pub qname: &'a Name,
    pub qtype: u16,
}

/// `gettag` callable: a classification tag plus an optional ordered list of
/// policy-tag strings.
pub type GetTagFn =
    Arc<dyn Fn(&TagQuery<'_>) -> Result<(u32, Option<Vec<String>>), HookError> + Send + Sync>;

/// Host-provided scripting runtime. The script source is loaded and
/// executed exactly once at engine construction; afterwards the name-keyed
/// registry is read-only and only consulted for lookups (the
/// probe-then-resume callback is the one entry resolved dynamically).
pub trait ScriptRuntime: Send + Sync {
    /// Read and execute the script source, registering entry points.
    fn load(&self, source: &Path) -> Result<(), HookError>;

    /// Look up a question-context callable by name.
    fn hook(&self, name: &str) -> Option<HookFn>;

    fn ipfilter(&self) -> Option<IpFilterFn>;

    fn gettag(&self) -> Option<GetTagFn>;
}
